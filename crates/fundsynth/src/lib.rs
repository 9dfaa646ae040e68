#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/fundsynth/fundsynth/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;

// Re-export main types from sub-crates
pub use fundsynth_costs as costs;
pub use fundsynth_data as data;
pub use fundsynth_output as output;

pub use config::{AppConfig, ConfigError};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
