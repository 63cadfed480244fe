//! Translating asset names between runtime packages.
//!
//! Two directions are supported:
//!
//! - [`lookup_rtp_to_rtp`]: a name known to come from one package is
//!   mapped to the name the same asset has in another package.
//! - [`lookup_any_to_rtp`]: a name of unknown origin is mapped to every
//!   package that ships an asset of that name.
//!
//! A name that no package ships is the common case for custom game assets
//! and yields an empty result, never an error.
//!
//! The free functions run against the built-in table; the same operations
//! exist as methods on [`IdentityTable`] for custom tables.
//!
//! # Example
//!
//! ```
//! use rtpkit::registry::{RtpType, VersionFilter};
//! use rtpkit::translate;
//!
//! let name = translate::lookup_rtp_to_rtp(
//!     "Music",
//!     "Battle1",
//!     RtpType::Rpg2000OfficialEnglish,
//!     RtpType::Rpg2000OfficialJapanese,
//! );
//! assert_eq!(name, "戦闘1");
//!
//! let origins = translate::lookup_any_to_rtp("Music", "MyOwnSong", VersionFilter::Any);
//! assert!(origins.is_empty());
//! ```

use std::collections::BTreeSet;

use tracing::trace;

use crate::registry::{builtin, RtpType, VersionFilter};
use crate::table::IdentityTable;

impl IdentityTable {
    /// Every package passing `filter` that ships an asset called `name`.
    ///
    /// The result is a set because closely related releases often share a
    /// file name verbatim; callers have to handle more than one candidate.
    pub fn lookup_any_to_rtp(
        &self,
        category: &str,
        name: &str,
        filter: VersionFilter,
    ) -> BTreeSet<RtpType> {
        let found: BTreeSet<RtpType> = filter
            .variants()
            .filter(|rtp| self.contains(*rtp, category, name))
            .collect();
        trace!(category, name, candidates = found.len(), "Reverse RTP lookup");
        found
    }

    /// Name of the asset `name` (as shipped by `src`) in `target`.
    ///
    /// `None` when `src` does not ship `name` or `target` has no equivalent.
    /// Translating into the same package returns `name` as given.
    pub fn translate<'a>(
        &'a self,
        category: &str,
        name: &'a str,
        src: RtpType,
        target: RtpType,
    ) -> Option<&'a str> {
        if src == target {
            return Some(name);
        }
        self.find_row(src, category, name)?.name_for(target)
    }

    /// [`translate`](Self::translate) with an empty string for "no equivalent".
    pub fn lookup_rtp_to_rtp(
        &self,
        category: &str,
        name: &str,
        src: RtpType,
        target: RtpType,
    ) -> String {
        self.translate(category, name, src, target)
            .map(str::to_owned)
            .unwrap_or_default()
    }
}

/// Reverse lookup against the built-in table.
pub fn lookup_any_to_rtp(category: &str, name: &str, filter: VersionFilter) -> BTreeSet<RtpType> {
    builtin::table().lookup_any_to_rtp(category, name, filter)
}

/// Package-to-package translation against the built-in table.
///
/// Returns an empty string when there is nothing to substitute.
pub fn lookup_rtp_to_rtp(category: &str, name: &str, src: RtpType, target: RtpType) -> String {
    builtin::table().lookup_rtp_to_rtp(category, name, src, target)
}

/// Whether `name` is a stock asset of `rtp` according to the built-in table.
pub fn is_rtp_asset(rtp: RtpType, category: &str, name: &str) -> bool {
    builtin::table().contains(rtp, category, name)
}
