// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Open the interactive form (default)
    Interactive,

    /// Print freshly generated passwords
    Generate {
        /// How many passwords to print
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,

        /// Copy the last password to the clipboard
        #[arg(long)]
        copy: bool,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Show the strength estimate for the selected options
    Strength {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}
