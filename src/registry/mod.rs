//! Registry of known runtime packages.
//!
//! The set of packages is closed: [`RtpType`] enumerates every release
//! rtpkit knows about, and [`builtin`] holds the compiled-in identity
//! tables describing which assets each release ships.
//!
//! # Example
//!
//! ```
//! use rtpkit::registry::{builtin, Generation, RtpType};
//!
//! let rtp = RtpType::Rpg2003Korean;
//! assert_eq!(rtp.generation(), Generation::Rpg2003);
//! assert!(builtin::table().probe_count(rtp) > 0);
//! ```

pub mod builtin;
pub mod variant;

pub use variant::{Generation, RtpType, VersionFilter};
