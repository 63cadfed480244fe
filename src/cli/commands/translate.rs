//! Translate command implementation.
//!
//! The `rtpkit translate` command maps an asset name from one runtime
//! package to its counterpart in another.

use crate::cli::args::TranslateArgs;
use crate::error::Result;
use crate::table::IdentityTable;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The translate command implementation.
pub struct TranslateCommand<'t> {
    table: &'t IdentityTable,
    args: TranslateArgs,
}

impl<'t> TranslateCommand<'t> {
    /// Create a new translate command.
    pub fn new(table: &'t IdentityTable, args: TranslateArgs) -> Self {
        Self { table, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &TranslateArgs {
        &self.args
    }
}

impl Command for TranslateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let args = &self.args;
        match self
            .table
            .translate(&args.category, &args.name, args.from, args.to)
        {
            Some(name) => {
                ui.message(name);
                Ok(CommandResult::success())
            }
            None => {
                ui.warning(&format!(
                    "{}/{} has no counterpart in {}",
                    args.category,
                    args.name,
                    args.to.display_name()
                ));
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{builtin, RtpType};
    use crate::ui::MockUI;

    fn args(name: &str, from: RtpType, to: RtpType) -> TranslateArgs {
        TranslateArgs {
            category: "Music".to_string(),
            name: name.to_string(),
            from,
            to,
        }
    }

    #[test]
    fn prints_translated_name() {
        let cmd = TranslateCommand::new(
            builtin::table(),
            args(
                "Battle1",
                RtpType::Rpg2000OfficialEnglish,
                RtpType::Rpg2000OfficialJapanese,
            ),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.messages(), &["戦闘1".to_string()]);
    }

    #[test]
    fn same_package_echoes_name() {
        let cmd = TranslateCommand::new(
            builtin::table(),
            args(
                "NotAnAsset",
                RtpType::Rpg2003Korean,
                RtpType::Rpg2003Korean,
            ),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("NotAnAsset"));
    }

    #[test]
    fn unknown_name_warns_and_fails() {
        let cmd = TranslateCommand::new(
            builtin::table(),
            args(
                "NotAnAsset",
                RtpType::Rpg2000OfficialEnglish,
                RtpType::Rpg2000OfficialJapanese,
            ),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.messages().is_empty());
        assert!(ui.warnings()[0].contains("Official Japanese"));
    }
}
