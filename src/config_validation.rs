// Configuration validation module

use std::collections::HashSet;
use std::path::PathBuf;

use segment_components::create_engine_from_config;
use tracing::warn;

use crate::config::{load_config, AppConfig, ConfigLoadError};

/// Nominal geometry used to dry-run control conversion
const PROBE_WIDTH: f64 = 360.0;
const PROBE_HEIGHT: f64 = 44.0;

/// Check that the configuration describes at least one usable control
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigLoadError> {
    if config.segment_controls.is_empty() {
        return Err(ConfigLoadError::NoControls);
    }

    let mut seen = HashSet::new();
    for control in config.segment_controls.values() {
        if !seen.insert(control.hwnd.as_str()) {
            return Err(ConfigLoadError::DuplicateHwnd(control.hwnd.clone()));
        }
        create_engine_from_config(control, PROBE_WIDTH, PROBE_HEIGHT)?;
    }
    Ok(())
}

/// Load and validate configuration
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<AppConfig, ConfigLoadError> {
    let config = load_config(config_path)?;
    if let Err(err) = validate_config(&config) {
        warn!(error = %err, "configuration rejected");
        return Err(err);
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    const HEADER: &str = r#"
application:
  title: T
  bindings: []
  status_bar:
    default_text: ready
"#;

    fn config(controls: &str) -> AppConfig {
        parse_config(&format!("{HEADER}{controls}")).unwrap()
    }

    #[test]
    fn test_bundled_config_is_valid() {
        assert!(load_and_validate_config(None).is_ok());
    }

    #[test]
    fn test_empty_controls_rejected() {
        let cfg = config("segment_controls: {}\n");
        assert!(matches!(validate_config(&cfg), Err(ConfigLoadError::NoControls)));
    }

    #[test]
    fn test_duplicate_hwnd_rejected() {
        let cfg = config(
            r#"
segment_controls:
  a:
    hwnd: hwndSame
    content: { kind: text, titles: [X] }
  b:
    hwnd: hwndSame
    content: { kind: text, titles: [Y] }
"#,
        );
        assert!(matches!(
            validate_config(&cfg),
            Err(ConfigLoadError::DuplicateHwnd(ref hwnd)) if hwnd == "hwndSame"
        ));
    }

    #[test]
    fn test_mismatched_control_rejected() {
        let cfg = config(
            r#"
segment_controls:
  broken:
    hwnd: hwndBroken
    content:
      kind: hybrid
      titles: [A, B]
      icons: []
"#,
        );
        assert!(matches!(validate_config(&cfg), Err(ConfigLoadError::Control(_))));
    }
}
