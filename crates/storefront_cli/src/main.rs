//! Process entry point for the storefront service.
//!
//! # Responsibility
//! - Resolve configuration from flags and `STOREFRONT_*` variables.
//! - Initialize logging and the database before accepting requests.
//! - Keep a `ping` probe for quick local sanity checks.

use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use storefront_core::Database;
use storefront_server::{AppState, ServerConfig};

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Items and stores over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the HTTP API (default)
    Serve(ServeArgs),
    /// Print core linkage info and exit
    Ping,
}

#[derive(Debug, Default, Args)]
struct ServeArgs {
    /// Socket address to listen on
    #[arg(long)]
    bind: Option<SocketAddr>,
    /// SQLite database file, created on first start
    #[arg(long)]
    db_path: Option<PathBuf>,
    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,
    /// Write rotating log files here instead of stderr only
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl ServeArgs {
    fn apply(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(db_path) = self.db_path {
            config.db_path = db_path;
        }
        if let Some(log_level) = self.log_level {
            config.log_level = log_level;
        }
        if let Some(log_dir) = self.log_dir {
            config.log_dir = Some(log_dir);
        }
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Ping => {
            println!("storefront_core ping={}", storefront_core::ping());
            println!("storefront_core version={}", storefront_core::core_version());
            ExitCode::SUCCESS
        }
        Command::Serve(args) => match run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(message) => {
                eprintln!("storefront: {message}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(args: ServeArgs) -> Result<(), String> {
    let config = args.apply(ServerConfig::from_env().map_err(|err| err.to_string())?);
    storefront_core::init_logging(&config.log_level, config.log_dir.as_deref())?;

    let db = Database::open(&config.db_path).map_err(|err| {
        format!(
            "failed to open database `{}`: {err}",
            config.db_path.display()
        )
    })?;
    info!(
        "event=db_ready module=cli status=ok path={}",
        db.path().display()
    );

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|err| format!("failed to start async runtime: {err}"))?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(config.bind)
            .await
            .map_err(|err| format!("failed to bind {}: {err}", config.bind))?;
        storefront_server::serve(listener, AppState::new(db))
            .await
            .map_err(|err| {
                error!("event=server_stop module=cli status=error error={err}");
                format!("server error: {err}")
            })
    })
}
