use clap::{Parser, Subcommand};
use postview::core::format_error_with_help;
use postview::posts::SourceKind;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "postview")]
#[command(about = "Fetch posts and render their titles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load posts once and print their titles
    List {
        /// Data source to inject
        #[arg(short, long, value_enum, default_value_t = SourceKind::Live)]
        source: SourceKind,
        /// Fetch from this URL instead of the configured one
        #[arg(short, long, conflicts_with = "fixture")]
        url: Option<String>,
        /// Serve posts from a JSON file (implies the static source)
        #[arg(short, long)]
        fixture: Option<PathBuf>,
        /// Skip this many titles from the top
        #[arg(long, default_value_t = 0)]
        offset: usize,
        /// Show at most this many titles
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Configure global settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the configured posts URL
    GetUrl,
    /// Set the posts URL used by the live source
    SetUrl {
        /// Absolute http(s) URL returning a JSON array of posts
        url: String,
    },
    /// Set the HTTP request timeout
    SetTimeout {
        /// Timeout in seconds
        secs: u64,
    },
    /// Show the config file location and all settings
    Show,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List {
            source,
            url,
            fixture,
            offset,
            limit,
        } => {
            cli::list::run(cli::list::ListOptions {
                source,
                url,
                fixture,
                offset,
                limit,
            })
            .await
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::GetUrl => cli::config::get_url(),
            ConfigCommands::SetUrl { url } => cli::config::set_url(url),
            ConfigCommands::SetTimeout { secs } => cli::config::set_timeout(secs),
            ConfigCommands::Show => cli::config::show(),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
