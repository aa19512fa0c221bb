//! linekv - An In-Memory Key-Value Store with a Line Protocol
//!
//! This is the main entry point for the interactive linekv shell.
//! It sets up logging, the storage engine, and runs the session on stdin/stdout.

use linekv::commands::CommandHandler;
use linekv::session::{Session, SessionConfig, DEFAULT_PROMPT};
use linekv::storage::StorageEngine;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Shell configuration
struct Config {
    /// Default log filter, used when RUST_LOG is unset
    log_level: String,
    /// Print the prompt before each line
    prompt: bool,
    /// Print the startup banner
    banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            prompt: true,
            banner: true,
        }
    }
}

impl Config {
    /// Parse configuration from command-line arguments
    fn from_args() -> Self {
        let mut config = Config::default();
        let args: Vec<String> = std::env::args().collect();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--log-level" | "-l" => {
                    if i + 1 < args.len() {
                        config.log_level = args[i + 1].clone();
                        i += 2;
                    } else {
                        eprintln!("Error: --log-level requires a value");
                        std::process::exit(1);
                    }
                }
                "--no-prompt" => {
                    config.prompt = false;
                    i += 1;
                }
                "--quiet" | "-q" => {
                    config.prompt = false;
                    config.banner = false;
                    i += 1;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                "--version" | "-v" => {
                    println!("linekv version {}", linekv::VERSION);
                    std::process::exit(0);
                }
                _ => {
                    eprintln!("Unknown argument: {}", args[i]);
                    print_help();
                    std::process::exit(1);
                }
            }
        }

        config
    }

    /// Builds the session settings
    fn session_config(&self) -> SessionConfig {
        let mut session = SessionConfig::default();
        if !self.banner {
            session.banner = None;
        }
        session.prompt = self.prompt.then(|| DEFAULT_PROMPT.to_string());
        session
    }

    /// Log filter: RUST_LOG wins over --log-level
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

fn print_help() {
    println!(
        r#"
linekv - An In-Memory Key-Value Store with a Line Protocol

USAGE:
    linekv [OPTIONS]

OPTIONS:
    -l, --log-level <LEVEL>  Log filter when RUST_LOG is unset (default: info)
        --no-prompt          Do not print the "> " prompt
    -q, --quiet              Print neither banner nor prompt
    -v, --version            Print version information
    -h, --help               Print this help message

COMMANDS:
    SET key value            Insert or overwrite a key
    GET key                  Print a key's value
    DEL key                  Remove a key

    Arguments may contain letters, digits, '_', '/' and '*'.

EXAMPLES:
    linekv
    > SET KEY1 VALUE_2
    > GET KEY1
    VALUE_2

    printf 'SET a b\nGET a\n' | linekv --quiet
"#
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let config = Config::from_args();

    // Set up logging; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    // The store lives for the whole process and is lent to the dispatcher
    let mut engine = StorageEngine::new();
    let handler = CommandHandler::new(&mut engine);

    let session = Session::new(
        handler,
        tokio::io::stdin(),
        tokio::io::stdout(),
        tokio::io::stderr(),
    )
    .with_config(config.session_config());

    // Set up graceful shutdown
    let shutdown = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received, stopping..."),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    let mut interrupted = false;
    tokio::select! {
        result = session.run() => {
            if let Err(e) = result {
                error!(error = %e, "Session failed");
                return Err(e.into());
            }
        }
        _ = shutdown => interrupted = true,
    }

    let stats = engine.stats();
    info!(
        keys = stats.keys,
        sets = stats.sets,
        gets = stats.gets,
        deletes = stats.deletes,
        misses = stats.misses,
        "Shutdown complete"
    );

    if interrupted {
        // A pending stdin read would otherwise hold the runtime open
        std::process::exit(0);
    }

    Ok(())
}
