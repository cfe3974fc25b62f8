//! CLI application for scanning business cards and exchanging contacts.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{cards, config, exchange, parse, profile, scan, Context};

/// Business card scanner - extract contacts from card photos and share your own
#[derive(Parser)]
#[command(name = "cardscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding saved cards and the profile
    #[arg(long, global = true, env = "CARDSCAN_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan card images with the remote analysis service
    Scan(scan::ScanArgs),

    /// Extract contact fields from OCR text
    Parse(parse::ParseArgs),

    /// Encode a contact as a scannable payload
    Encode(exchange::EncodeArgs),

    /// Decode a scanned contact payload
    Decode(exchange::DecodeArgs),

    /// Manage saved cards
    Cards(cards::CardsArgs),

    /// Manage your own profile
    Profile(profile::ProfileArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let ctx = Context::new(cli.config, cli.data_dir);

    // Execute command
    match cli.command {
        Commands::Scan(args) => scan::run(args, &ctx).await,
        Commands::Parse(args) => parse::run(args, &ctx).await,
        Commands::Encode(args) => exchange::run_encode(args, &ctx).await,
        Commands::Decode(args) => exchange::run_decode(args, &ctx).await,
        Commands::Cards(args) => cards::run(args, &ctx).await,
        Commands::Profile(args) => profile::run(args, &ctx).await,
        Commands::Config(args) => config::run(args, &ctx).await,
    }
}
