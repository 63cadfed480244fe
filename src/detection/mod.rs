//! Runtime package detection.
//!
//! Detection samples a directory for the stock assets of every known
//! package and reports, per package, how many were found. See
//! [`RtpDetector`] for the scoring rules.
//!
//! # Example
//!
//! ```
//! use rtpkit::detection::{detect, MemoryTree};
//! use rtpkit::registry::{Generation, VersionFilter};
//!
//! let tree = MemoryTree::new()
//!     .with_file("Music", "戦闘1.mid")
//!     .with_file("Sound", "決定.wav");
//!
//! let hits = detect(&tree, VersionFilter::Generation(Generation::Rpg2000));
//! let best = hits
//!     .iter()
//!     .max_by(|a, b| a.ratio().total_cmp(&b.ratio()))
//!     .unwrap();
//! assert_eq!(best.name, "Official Japanese");
//! ```

pub mod detector;
pub mod tree;

pub use detector::{detect, RtpDetector, RtpHitInfo};
pub use tree::{DirectoryTree, FsTree, MemoryTree, ASSET_EXTENSIONS};
