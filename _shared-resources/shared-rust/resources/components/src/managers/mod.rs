// Managers module
// Stateful segment control engine and its configuration helpers

pub mod layout_engine;
pub mod segment_config;

pub use layout_engine::SegmentLayoutEngine;

// Re-export YAML configuration types
pub use segment_config::{
    convert_appearance,
    convert_content,
    convert_layout_config,
    create_engine_from_config,
    ConfigError,
    FontConfigYaml,
    IconConfigYaml,
    SegmentColorsYaml,
    SegmentContentYaml,
    SegmentControlConfigYaml,
};
