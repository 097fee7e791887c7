use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

#[derive(Parser)]
#[command(name = "confab")]
#[command(about = "Channel-based chat for the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a channel in the chat screen
    #[command(visible_alias = "c")]
    Chat {
        /// Channel to open (default: the configured default channel)
        channel: Option<String>,

        /// Override the configured locale (en, es, fr)
        #[arg(short, long)]
        locale: Option<String>,

        /// Hide the avatar action in the channel header
        #[arg(long)]
        no_avatars: bool,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a configuration value
    Set {
        /// One of: display_name, locale, default_channel, show_avatars
        key: String,
        value: String,
    },

    /// Print the config file path
    Path,
}

/// Write completions for the given shell to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "confab", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_chat_with_flags() {
        let cli = Cli::try_parse_from(["confab", "chat", "general", "--locale", "es"]).unwrap();
        match cli.command {
            Commands::Chat {
                channel,
                locale,
                no_avatars,
            } => {
                assert_eq!(channel.as_deref(), Some("general"));
                assert_eq!(locale.as_deref(), Some("es"));
                assert!(!no_avatars);
            }
            _ => panic!("expected chat command"),
        }
    }

    #[test]
    fn test_cli_chat_alias() {
        let cli = Cli::try_parse_from(["confab", "c"]).unwrap();
        assert!(matches!(cli.command, Commands::Chat { .. }));
    }

    #[test]
    fn test_cli_config_set() {
        let cli = Cli::try_parse_from(["confab", "config", "set", "locale", "fr"]).unwrap();
        match cli.command {
            Commands::Config {
                action: ConfigAction::Set { key, value },
            } => {
                assert_eq!(key, "locale");
                assert_eq!(value, "fr");
            }
            _ => panic!("expected config set"),
        }
    }
}
