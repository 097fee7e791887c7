use clap::Parser;
use std::process::ExitCode;

use confab::cli::{Cli, Commands, ConfigAction, generate_completions};
use confab::commands::{cmd_chat, cmd_config_path, cmd_config_set, cmd_config_show};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Chat {
            channel,
            locale,
            no_avatars,
        } => cmd_chat(channel, locale, no_avatars).await,
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(json),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            ConfigAction::Path => cmd_config_path(),
        },
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
