//! Line-oriented command shell over a [`RuntimeHandle`].
//!
//! Each input line is one command:
//!
//! ```text
//! drag <source> <target>    e.g. drag store:2 inventory:0
//! select <weapon1|weapon2|weapon3>
//! show                      dump the player as JSON
//! save | load | help | quit
//! ```

use anyhow::{Result, bail};
use stash_core::{ExecutionReport, TransferOutcome, WeaponSlot};
use stash_runtime::RuntimeHandle;

pub const HELP: &str = "\
commands:
  drag <source> <target>   move an item (slots: inventory:N stash:N store:N sell trash
                           weapon1..3 head chest legs gloves boots)
  select <weaponN>         choose the weapon in hand
  show                     print the player as JSON
  save | load              persist or restore this session
  help | quit";

/// One parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Drag { source: String, target: String },
    Select(WeaponSlot),
    Show,
    Save,
    Load,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parses a line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("drag" | "d", [source, target]) => ShellCommand::Drag {
                source: (*source).to_owned(),
                target: (*target).to_owned(),
            },
            ("select", [slot]) => match slot.parse::<WeaponSlot>() {
                Ok(slot) => ShellCommand::Select(slot),
                Err(_) => bail!("not a weapon slot: {slot}"),
            },
            ("show", []) => ShellCommand::Show,
            ("save", []) => ShellCommand::Save,
            ("load", []) => ShellCommand::Load,
            ("help" | "?", []) => ShellCommand::Help,
            ("quit" | "exit" | "q", []) => ShellCommand::Quit,
            (verb, _) => bail!("unrecognised command '{verb}' (try 'help')"),
        };
        Ok(Some(command))
    }
}

/// Executes shell commands and renders replies as text.
pub struct Shell {
    handle: RuntimeHandle,
}

impl Shell {
    pub fn new(handle: RuntimeHandle) -> Self {
        Self { handle }
    }

    /// Runs one command. `Quit` is the caller's business and renders nothing.
    pub async fn dispatch(&self, command: ShellCommand) -> Result<String> {
        let reply = match command {
            ShellCommand::Drag { source, target } => {
                let report = self.handle.transfer_named(source, target).await?;
                describe(&report)
            }
            ShellCommand::Select(slot) => {
                let report = self.handle.select_weapon(slot).await?;
                describe(&report)
            }
            ShellCommand::Show => {
                let player = self.handle.query_state().await?;
                serde_json::to_string_pretty(&player)?
            }
            ShellCommand::Save => {
                self.handle.save().await?;
                "saved".to_owned()
            }
            ShellCommand::Load => {
                if self.handle.load().await? {
                    "loaded".to_owned()
                } else {
                    "nothing saved for this session".to_owned()
                }
            }
            ShellCommand::Help => HELP.to_owned(),
            ShellCommand::Quit => String::new(),
        };
        Ok(reply)
    }
}

/// Renders an outcome as a feedback line prefixed with its cue.
fn describe(report: &ExecutionReport) -> String {
    let cue = report.outcome.cue();
    let text = match &report.outcome {
        TransferOutcome::Applied(action) => {
            format!("{} (gold: {})", action.as_str(), report.gold)
        }
        TransferOutcome::Rejected(reason) => reason.message().to_owned(),
        TransferOutcome::NoOp(reason) => format!("nothing happens ({reason})"),
        TransferOutcome::Unresolved(reason) => format!("nothing happens ({reason})"),
    };
    format!("[{cue}] {text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_drag_and_select() {
        assert_eq!(
            ShellCommand::parse("drag store:2 inventory:0").unwrap(),
            Some(ShellCommand::Drag {
                source: "store:2".into(),
                target: "inventory:0".into(),
            })
        );
        assert_eq!(
            ShellCommand::parse("  select Weapon2 ").unwrap(),
            Some(ShellCommand::Select(WeaponSlot::Weapon2))
        );
        assert_eq!(ShellCommand::parse("q").unwrap(), Some(ShellCommand::Quit));
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(ShellCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn malformed_lines_are_errors() {
        assert!(ShellCommand::parse("drag inventory:0").is_err());
        assert!(ShellCommand::parse("select head").is_err());
        assert!(ShellCommand::parse("juggle").is_err());
    }
}
