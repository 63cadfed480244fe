//! Scoring which runtime packages a directory contains.

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::registry::{builtin, Generation, RtpType, VersionFilter};
use crate::table::IdentityTable;

use super::tree::DirectoryTree;

/// How many of a package's assets were found in a tree.
///
/// Probe lists differ in size between packages, so results are only
/// comparable through [`ratio`](Self::ratio), never through raw hits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RtpHitInfo {
    /// The evaluated package.
    pub rtp: RtpType,

    /// Human-readable package name.
    pub name: &'static str,

    /// Generation the package belongs to.
    pub generation: Generation,

    /// Probes found in the tree.
    pub hits: usize,

    /// Probes attempted.
    pub max: usize,
}

impl RtpHitInfo {
    /// Fraction of probes found, `0.0` when the package has no probes.
    pub fn ratio(&self) -> f32 {
        if self.max == 0 {
            0.0
        } else {
            self.hits as f32 / self.max as f32
        }
    }
}

impl fmt::Display for RtpHitInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}/{}",
            self.name, self.generation, self.hits, self.max
        )
    }
}

/// Probes a directory tree for the assets of each package.
///
/// The detector only scores. Deciding that a package "is installed" is
/// left to the caller, who picks its own cutoff on the ratios.
#[derive(Debug, Clone, Copy)]
pub struct RtpDetector<'t> {
    table: &'t IdentityTable,
}

impl<'t> RtpDetector<'t> {
    /// Detect against a custom table.
    pub fn new(table: &'t IdentityTable) -> Self {
        Self { table }
    }

    /// The table probes are taken from.
    pub fn table(&self) -> &'t IdentityTable {
        self.table
    }

    /// Score every package passing `filter`, in registry order.
    pub fn detect<T>(&self, tree: &T, filter: VersionFilter) -> Vec<RtpHitInfo>
    where
        T: DirectoryTree + ?Sized,
    {
        filter.variants().map(|rtp| self.score(tree, rtp)).collect()
    }

    /// Score a single package.
    pub fn score<T>(&self, tree: &T, rtp: RtpType) -> RtpHitInfo
    where
        T: DirectoryTree + ?Sized,
    {
        let mut hits = 0;
        let mut max = 0;
        for probe in self.table.probes(rtp) {
            max += 1;
            if tree.contains(probe.category, probe.name) {
                hits += 1;
            } else {
                trace!(rtp = %rtp, category = probe.category, name = probe.name, "Probe missing");
            }
        }

        debug!(rtp = %rtp, hits, max, "Scored RTP");
        RtpHitInfo {
            rtp,
            name: rtp.display_name(),
            generation: rtp.generation(),
            hits,
            max,
        }
    }
}

impl RtpDetector<'static> {
    /// Detect against the built-in table.
    pub fn builtin() -> Self {
        Self::new(builtin::table())
    }
}

/// Score packages against the built-in table.
pub fn detect<T>(tree: &T, filter: VersionFilter) -> Vec<RtpHitInfo>
where
    T: DirectoryTree + ?Sized,
{
    RtpDetector::builtin().detect(tree, filter)
}
