mod api;
mod commands;
mod config;
mod ui;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "pigeonhole")]
#[command(about = "Ephemeral per-recipient mailboxes")]
#[command(version)]
#[command(after_help = "Examples:
  pigeonhole send bob 'meet at noon'           Send with 60s expiration (default)
  pigeonhole send bob 'meet at noon' -t 300    Send with 5 minute expiration
  pigeonhole read bob                          Deliver and clear bob's messages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a message to a recipient's mailbox
    #[command(after_help = "Examples:
  pigeonhole send bob 'database is back up'
  pigeonhole send bob 'self-destructs fast' -t 5")]
    Send {
        /// Recipient username
        username: String,
        /// The message text
        message: String,
        /// Seconds until the message expires (0 = server default of 60)
        #[arg(short = 't', long = "timeout", default_value_t = 0)]
        timeout: i64,
    },

    /// Retrieve and clear all pending messages for a username
    #[command(after_help = "Example: pigeonhole read bob

Reading is consuming: delivered messages are removed server-side and
cannot be read twice.")]
    Read {
        /// Username whose mailbox to drain
        username: String,
    },

    /// Generate shell completions
    #[command(after_help = "Examples:
  pigeonhole completions bash > ~/.bash_completion.d/pigeonhole
  pigeonhole completions zsh > ~/.zfunc/_pigeonhole")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        ui::print_error(&err);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = envy::prefixed("PIGEONHOLE_").from_env::<Config>()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Send {
            username,
            message,
            timeout,
        } => commands::send::run(&config, &username, &message, timeout).await,
        Commands::Read { username } => commands::read::run(&config, &username).await,
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "pigeonhole", &mut std::io::stdout());
            Ok(())
        }
    }
}
