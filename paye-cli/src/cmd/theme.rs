//! Show or set the persisted display theme.

use clap::{Args, Subcommand};

use crate::prefs::{self, Preferences, Theme};

#[derive(Args, Debug)]
pub struct ThemeCommand {
    #[command(subcommand)]
    action: ThemeAction,
}

#[derive(Debug, Subcommand)]
enum ThemeAction {
    /// Show the active theme.
    Show,

    /// Set and persist the theme.
    Set {
        #[arg(value_enum)]
        theme: Theme,
    },
}

impl ThemeCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.action {
            ThemeAction::Show => {
                println!("{}", prefs::load().theme.as_str());
                Ok(())
            }
            ThemeAction::Set { theme } => {
                let path = prefs::store(&Preferences { theme })?;
                println!("Theme set to {} ({})", theme.as_str(), path.display());
                Ok(())
            }
        }
    }
}
