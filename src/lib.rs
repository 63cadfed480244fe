//! rtpkit - RPG Maker runtime package (RTP) resolution.
//!
//! RPG Maker 2000 and 2003 games reference stock assets by name, and every
//! localized runtime package ships those assets under different names. This
//! crate knows the ten published packages, detects which of them a
//! directory contains and translates asset names between them.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.rtpkit.yml` loading and table overrides
//! - [`detection`] - Directory scanning and per-package scoring
//! - [`error`] - Error types and result aliases
//! - [`registry`] - The package registry and the bundled name table
//! - [`table`] - The cross-package identity table
//! - [`translate`] - Name lookups between packages
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use rtpkit::registry::{RtpType, VersionFilter};
//! use rtpkit::translate::{lookup_any_to_rtp, lookup_rtp_to_rtp};
//!
//! let name = lookup_rtp_to_rtp(
//!     "Music",
//!     "Battle1",
//!     RtpType::Rpg2000OfficialEnglish,
//!     RtpType::Rpg2000OfficialJapanese,
//! );
//! assert_eq!(name, "戦闘1");
//!
//! let owners = lookup_any_to_rtp("Music", "戦闘1", VersionFilter::Any);
//! assert!(owners.contains(&RtpType::Rpg2003OfficialJapanese));
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod registry;
pub mod table;
pub mod translate;
pub mod ui;

pub use error::{Result, RtpError};
