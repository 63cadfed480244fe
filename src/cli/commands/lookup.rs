//! Lookup command implementation.
//!
//! The `rtpkit lookup` command reports every runtime package that ships
//! an asset under the given name.

use crate::cli::args::LookupArgs;
use crate::error::{Result, RtpError};
use crate::registry::{RtpType, VersionFilter};
use crate::table::IdentityTable;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The lookup command implementation.
pub struct LookupCommand<'t> {
    table: &'t IdentityTable,
    filter: VersionFilter,
    args: LookupArgs,
}

impl<'t> LookupCommand<'t> {
    /// Create a new lookup command.
    pub fn new(table: &'t IdentityTable, filter: VersionFilter, args: LookupArgs) -> Self {
        Self {
            table,
            filter,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LookupArgs {
        &self.args
    }
}

impl Command for LookupCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let found = self
            .table
            .lookup_any_to_rtp(&self.args.category, &self.args.name, self.filter);

        if self.args.json {
            let ids: Vec<&str> = found.iter().map(RtpType::id).collect();
            let output =
                serde_json::to_string_pretty(&ids).map_err(|e| RtpError::Other(e.into()))?;
            ui.message(&output);
        } else {
            for rtp in &found {
                ui.message(&format!("{:<40} {}", rtp.id(), rtp.display_name()));
            }
        }

        if found.is_empty() {
            ui.warning(&format!(
                "{}/{} is not part of any known runtime package",
                self.args.category, self.args.name
            ));
            return Ok(CommandResult::failure(1));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{builtin, Generation};
    use crate::ui::MockUI;

    fn args(category: &str, name: &str, json: bool) -> LookupArgs {
        LookupArgs {
            category: category.to_string(),
            name: name.to_string(),
            generation: None,
            json,
        }
    }

    #[test]
    fn lists_matching_packages() {
        let cmd = LookupCommand::new(
            builtin::table(),
            VersionFilter::Any,
            args("Music", "戦闘1", false),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("rpg2000_official_japanese"));
        assert!(ui.has_message("rpg2003_official_japanese"));
    }

    #[test]
    fn filter_narrows_to_one_generation() {
        let cmd = LookupCommand::new(
            builtin::table(),
            VersionFilter::Generation(Generation::Rpg2003),
            args("Music", "戦闘1", true),
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let ids: Vec<String> = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(ids, vec!["rpg2003_official_japanese".to_string()]);
    }

    #[test]
    fn unknown_name_fails() {
        let cmd = LookupCommand::new(
            builtin::table(),
            VersionFilter::Any,
            args("Music", "NotAnAsset", true),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.messages(), &["[]".to_string()]);
    }
}
