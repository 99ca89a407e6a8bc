// Build script - compiles the ui/colors sections of src/config.yaml into constants
// Missing file or keys fall back to the defaults below

use std::env;
use std::fs;
use std::path::Path;

const CONFIG_PATH: &str = "src/config.yaml";

fn main() {
    println!("cargo:rerun-if-changed={CONFIG_PATH}");

    let mut config = CompiledConfig::default();
    if let Ok(content) = fs::read_to_string(CONFIG_PATH) {
        config.load(&content);
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");
    fs::write(dest_path, config.to_rust()).expect("Failed to write compiled config");
}

#[derive(Clone, Copy, PartialEq)]
enum Section {
    Ui,
    Colors,
    Other,
}

struct CompiledConfig {
    tick_rate_ms: u64,
    mouse_enabled: bool,
    animate_highlight: bool,
    control_height: u16,
    log_file: String,
    border_fg: (u8, u8, u8),
    status_fg: (u8, u8, u8),
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 16,
            mouse_enabled: true,
            animate_highlight: true,
            control_height: 3,
            log_file: "segment-bar.log".to_string(),
            border_fg: (0x77, 0x77, 0x77),
            status_fg: (0xff, 0xff, 0x00),
        }
    }
}

impl CompiledConfig {
    /// Minimal line-based reader; the build script stays dependency free
    fn load(&mut self, content: &str) {
        let mut section = Section::Other;
        for line in content.lines() {
            // Top-level keys open a section
            if !line.starts_with(' ') && line.trim_end().ends_with(':') {
                section = match line.trim_end().trim_end_matches(':') {
                    "ui" => Section::Ui,
                    "colors" => Section::Colors,
                    _ => Section::Other,
                };
                continue;
            }
            if let Some((key, value)) = split_entry(line) {
                self.apply(section, key, value);
            }
        }
    }

    fn apply(&mut self, section: Section, key: &str, value: &str) {
        match (section, key) {
            (Section::Ui, "tick_rate_ms") => {
                if let Ok(ms) = value.parse() {
                    self.tick_rate_ms = ms;
                }
            }
            (Section::Ui, "mouse_enabled") => self.mouse_enabled = value == "true",
            (Section::Ui, "animate_highlight") => self.animate_highlight = value == "true",
            (Section::Ui, "control_height") => {
                if let Ok(rows) = value.parse::<u16>() {
                    self.control_height = rows.max(1);
                }
            }
            (Section::Ui, "log_file") => self.log_file = value.to_string(),
            (Section::Colors, "border_fg") => self.border_fg = hex_rgb(value).unwrap_or(self.border_fg),
            (Section::Colors, "status_fg") => self.status_fg = hex_rgb(value).unwrap_or(self.status_fg),
            _ => {}
        }
    }

    fn to_rust(&self) -> String {
        let rgb = |(r, g, b): (u8, u8, u8)| format!("({r}, {g}, {b})");
        let mut out = String::from("// Generated by build.rs from src/config.yaml\n\n");
        out += &format!("pub const TICK_RATE_MS: u64 = {};\n", self.tick_rate_ms);
        out += &format!("pub const MOUSE_ENABLED: bool = {};\n", self.mouse_enabled);
        out += &format!("pub const ANIMATE_HIGHLIGHT: bool = {};\n", self.animate_highlight);
        out += &format!("pub const CONTROL_HEIGHT: u16 = {};\n", self.control_height);
        out += &format!("pub const LOG_FILE: &str = {:?};\n", self.log_file);
        out += &format!("pub const BORDER_FG: (u8, u8, u8) = {};\n", rgb(self.border_fg));
        out += &format!("pub const STATUS_FG: (u8, u8, u8) = {};\n", rgb(self.status_fg));
        out
    }
}

/// `key: value` with quotes and trailing comments removed
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, rest) = line.split_once(':')?;
    let value = match rest.find(" #") {
        Some(pos) => &rest[..pos],
        None => rest,
    };
    let value = value.trim().trim_matches('"');
    (!value.is_empty()).then_some((key.trim(), value))
}

fn hex_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
