//! Configuration loading for the rtpkit command-line tool.
//!
//! The library itself needs no configuration. The CLI reads an optional
//! `.rtpkit.yml` to pick a default generation and to merge extra
//! authoring tables into the built-in one.
//!
//! # Example
//!
//! ```
//! use rtpkit::config::load_config;
//! use rtpkit::registry::Generation;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".rtpkit.yml"), "generation: 2003").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.generation, Some(Generation::Rpg2003));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::RtpkitConfig;
