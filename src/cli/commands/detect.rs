//! Detect command implementation.
//!
//! The `rtpkit detect` command scans a directory and scores every
//! runtime package against it.

use serde::Serialize;

use crate::cli::args::DetectArgs;
use crate::detection::{FsTree, RtpDetector, RtpHitInfo};
use crate::error::{Result, RtpError};
use crate::registry::VersionFilter;
use crate::table::IdentityTable;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// JSON form of a single score.
#[derive(Debug, Serialize)]
struct HitReport<'a> {
    #[serde(flatten)]
    hit: &'a RtpHitInfo,
    ratio: f32,
}

/// The detect command implementation.
pub struct DetectCommand<'t> {
    table: &'t IdentityTable,
    filter: VersionFilter,
    args: DetectArgs,
}

impl<'t> DetectCommand<'t> {
    /// Create a new detect command.
    pub fn new(table: &'t IdentityTable, filter: VersionFilter, args: DetectArgs) -> Self {
        Self {
            table,
            filter,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &DetectArgs {
        &self.args
    }

    /// Highest ratio with at least one hit. Ties go to the earlier variant.
    fn best_match(hits: &[RtpHitInfo]) -> Option<&RtpHitInfo> {
        hits.iter()
            .filter(|hit| hit.hits > 0)
            .fold(None, |best: Option<&RtpHitInfo>, hit| match best {
                Some(b) if b.ratio() >= hit.ratio() => Some(b),
                _ => Some(hit),
            })
    }

    fn format_hit(hit: &RtpHitInfo) -> String {
        format!(
            "{:<40} {:>4}/{:<4} {:>5.1}%  {}",
            hit.rtp.id(),
            hit.hits,
            hit.max,
            hit.ratio() * 100.0,
            hit.name
        )
    }
}

impl Command for DetectCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let tree = FsTree::scan(&self.args.path)?;
        let mut hits = RtpDetector::new(self.table).detect(&tree, self.filter);

        if let Some(min) = self.args.min_ratio {
            hits.retain(|hit| hit.max > 0 && hit.ratio() >= min);
        }

        if self.args.json {
            let report: Vec<HitReport<'_>> = hits
                .iter()
                .map(|hit| HitReport {
                    hit,
                    ratio: hit.ratio(),
                })
                .collect();
            let output =
                serde_json::to_string_pretty(&report).map_err(|e| RtpError::Other(e.into()))?;
            ui.message(&output);
        } else {
            ui.show_header(&format!(
                "Scanned {} ({} files)",
                tree.root().display(),
                tree.file_count()
            ));
            let best = Self::best_match(&hits);
            for hit in &hits {
                let line = {
                    let theme = ui.theme();
                    let line = Self::format_hit(hit);
                    if hit.hits == 0 {
                        theme.dim.apply_to(line).to_string()
                    } else if best.is_some_and(|b| b.rtp == hit.rtp) {
                        theme.highlight.apply_to(line).to_string()
                    } else {
                        line
                    }
                };
                ui.message(&line);
            }
            if let Some(best) = best {
                if ui.output_mode().shows_status() {
                    ui.success(&format!("Best match: {}", best));
                }
            }
        }

        if hits.is_empty() {
            ui.warning("No runtime package matched");
            return Ok(CommandResult::failure(1));
        }

        Ok(CommandResult::success())
    }
}
