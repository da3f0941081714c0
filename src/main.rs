//! # Syrins Share CLI (`share`)
//!
//! Browse the snippet archive and image gallery from a terminal.
//!
//! ## Usage
//!
//! ```bash
//! SHARE_API_TOKEN=... share --config ./config/share.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `share files` | List text snippets, optionally filtered with `--query` |
//! | `share file <id>` | Show one snippet; `--save DIR` downloads it |
//! | `share images` | List gallery images |
//! | `share image <id>` | Show one image; `--save DIR` downloads it |
//! | `share token` | Print the API token for the current minute |
//! | `share completions <shell>` | Generate shell completions |

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use syrins_share::context::AppContext;
use syrins_share::get::DetailOptions;
use syrins_share::{config, get, list, logging};

/// Syrins Share CLI: browse the snippet archive and image gallery.
///
/// All commands except `completions` read a TOML configuration file and
/// require the shared API secret in the environment variable named by
/// `[auth].secret_env` (default `SHARE_API_TOKEN`).
#[derive(Parser)]
#[command(
    name = "share",
    about = "Syrins Share: browse the snippet archive and image gallery",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/share.toml")]
    config: PathBuf,

    /// Enable debug logging on stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List text snippets.
    ///
    /// Matches `--query` case-insensitively against file names and content.
    Files {
        #[arg(long, short)]
        query: Option<String>,
        /// Print entries as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show a single text snippet by id.
    File {
        id: String,
        #[command(flatten)]
        detail: DetailArgs,
    },

    /// List gallery images.
    ///
    /// Matches `--query` case-insensitively against names and descriptions.
    Images {
        #[arg(long, short)]
        query: Option<String>,
        /// Print entries as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show a single image by id.
    Image {
        id: String,
        #[command(flatten)]
        detail: DetailArgs,
    },

    /// Print the API token for the current UTC minute.
    Token,

    /// Generate shell completions.
    Completions {
        shell: clap_complete::Shell,
    },
}

#[derive(clap::Args)]
struct DetailArgs {
    /// Print the entry as JSON.
    #[arg(long)]
    json: bool,
    /// Download the entry into this directory.
    #[arg(long)]
    save: Option<PathBuf>,
    /// Print the share link.
    #[arg(long)]
    link: bool,
}

impl From<DetailArgs> for DetailOptions {
    fn from(args: DetailArgs) -> Self {
        Self {
            json: args.json,
            save: args.save,
            link: args.link,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "share", &mut std::io::stdout());
        return Ok(());
    }

    logging::init_tracing(cli.verbose)?;

    let cfg = config::load_config(&cli.config)?;
    let ctx = AppContext::from_config(cfg)?;

    match cli.command {
        Commands::Files { query, json } => {
            list::run_files(&ctx, query.as_deref(), json).await?;
        }
        Commands::File { id, detail } => {
            get::run_file(&ctx, &id, &detail.into()).await?;
        }
        Commands::Images { query, json } => {
            list::run_images(&ctx, query.as_deref(), json).await?;
        }
        Commands::Image { id, detail } => {
            get::run_image(&ctx, &id, &detail.into()).await?;
        }
        Commands::Token => {
            println!("{}", ctx.tokens.generate());
        }
        Commands::Completions { .. } => {
            // Handled above (before config loading)
            unreachable!()
        }
    }

    Ok(())
}
