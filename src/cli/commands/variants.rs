//! Variants command implementation.
//!
//! The `rtpkit variants` command lists the known runtime packages.

use serde::Serialize;

use crate::cli::args::VariantsArgs;
use crate::error::{Result, RtpError};
use crate::registry::{Generation, RtpType};
use crate::table::IdentityTable;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

#[derive(Debug, Serialize)]
struct VariantInfo {
    id: &'static str,
    name: &'static str,
    generation: Generation,
    probes: usize,
}

/// The variants command implementation.
pub struct VariantsCommand<'t> {
    table: &'t IdentityTable,
    args: VariantsArgs,
}

impl<'t> VariantsCommand<'t> {
    /// Create a new variants command.
    pub fn new(table: &'t IdentityTable, args: VariantsArgs) -> Self {
        Self { table, args }
    }

    fn infos(&self) -> Vec<VariantInfo> {
        RtpType::ALL
            .iter()
            .map(|rtp| VariantInfo {
                id: rtp.id(),
                name: rtp.display_name(),
                generation: rtp.generation(),
                probes: self.table.probe_count(*rtp),
            })
            .collect()
    }
}

impl Command for VariantsCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let infos = self.infos();

        if self.args.json {
            let output =
                serde_json::to_string_pretty(&infos).map_err(|e| RtpError::Other(e.into()))?;
            ui.message(&output);
            return Ok(CommandResult::success());
        }

        ui.show_header("Runtime packages");
        for info in &infos {
            ui.message(&format!(
                "{:<40} {}  {:>4} assets  {}",
                info.id, info.generation, info.probes, info.name
            ));
        }
        Ok(CommandResult::success())
    }
}
