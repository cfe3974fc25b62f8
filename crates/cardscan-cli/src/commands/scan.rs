//! Scan command - extract contacts from card photos with the remote analysis service.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, info, warn};

use cardscan_core::models::config::CardscanConfig;
use cardscan_core::{
    AzureBusinessCardClient, CardRecord, CardStore, Contact, ExtractionOrchestrator,
};

use super::{format_contacts, Context, OutputFormat};

const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "tiff", "tif", "bmp", "webp"];

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Card image files or glob patterns
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Analysis service endpoint (overrides config)
    #[arg(long, env = "CARDSCAN_ENDPOINT")]
    endpoint: Option<String>,

    /// Analysis service API key (overrides config)
    #[arg(long, env = "CARDSCAN_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Maximum number of status polls per card (overrides config)
    #[arg(long)]
    max_polls: Option<u32>,

    /// Save scanned contacts to the card store
    #[arg(long)]
    save: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of scanning a single image.
struct ScanResult {
    path: PathBuf,
    contact: Option<Contact>,
    error: Option<String>,
}

pub async fn run(args: ScanArgs, ctx: &Context) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = ctx.config()?;
    apply_overrides(&mut config, &args);

    let files = expand_inputs(&args.inputs)?;
    if files.is_empty() {
        anyhow::bail!("No card images found for: {}", args.inputs.join(", "));
    }
    info!("Scanning {} card image(s)", files.len());

    let client = AzureBusinessCardClient::new(&config.analysis)?;
    let orchestrator = ExtractionOrchestrator::with_config(client, &config.analysis);
    let store = ctx.card_store(&config);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    pb.enable_steady_tick(Duration::from_millis(120));

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        pb.set_message(format!("Analyzing {}", path.display()));

        let outcome = match fs::read(&path) {
            Ok(image) => orchestrator
                .extract_card(&image)
                .await
                .map_err(anyhow::Error::from),
            Err(e) => Err(e.into()),
        };

        match outcome {
            Ok(card) => {
                debug!("Extracted contact from {}: {:?}", path.display(), card.contact);
                let contact = card.contact.clone();
                if args.save {
                    save_card(&store, card, &path)?;
                }
                results.push(ScanResult {
                    path,
                    contact: Some(contact),
                    error: None,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to scan {}: {}", path.display(), error_msg);
                    results.push(ScanResult {
                        path,
                        contact: None,
                        error: Some(error_msg),
                    });
                } else {
                    pb.finish_and_clear();
                    error!("Failed to scan {}: {}", path.display(), error_msg);
                    anyhow::bail!("Scanning failed: {}", error_msg);
                }
            }
        }
    }

    pb.finish_and_clear();

    let contacts: Vec<Contact> = results.iter().filter_map(|r| r.contact.clone()).collect();
    if !contacts.is_empty() {
        println!("{}", format_contacts(&contacts, args.format)?);
    }

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    eprintln!();
    eprintln!(
        "{} Scanned {} cards in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} successful, {} failed",
        style(contacts.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for result in &failed {
            eprintln!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn apply_overrides(config: &mut CardscanConfig, args: &ScanArgs) {
    if let Some(endpoint) = &args.endpoint {
        config.analysis.endpoint = endpoint.clone();
    }
    if let Some(api_key) = &args.api_key {
        config.analysis.api_key = api_key.clone();
    }
    if let Some(max_polls) = args.max_polls {
        config.analysis.max_polls = max_polls;
    }
}

/// Expand literal paths and glob patterns into a list of image files.
fn expand_inputs(inputs: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let literal = PathBuf::from(input);
        if literal.is_file() {
            files.push(literal);
            continue;
        }

        files.extend(
            glob(input)?
                .filter_map(|r| r.ok())
                .filter(|p| p.is_file() && is_image(p)),
        );
    }

    Ok(files)
}

fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

fn save_card(store: &impl CardStore, card: CardRecord, path: &Path) -> anyhow::Result<()> {
    if !card.contact.is_valid() {
        warn!("No name found on {}, not saving", path.display());
        return Ok(());
    }

    let card = card.with_image_uri(path.display().to_string());
    let id = card.id.clone();
    store.append(card)?;

    eprintln!("{} Saved card {}", style("✓").green(), id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image() {
        assert!(is_image(Path::new("card.JPG")));
        assert!(is_image(Path::new("scans/card.webp")));
        assert!(!is_image(Path::new("notes.txt")));
        assert!(!is_image(Path::new("no_extension")));
    }

    #[test]
    fn test_expand_inputs_filters_non_images() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"x").unwrap();
        fs::write(dir.path().join("b.jpg"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let pattern = format!("{}/*", dir.path().display());
        let mut files = expand_inputs(&[pattern]).unwrap();
        files.sort();

        assert_eq!(
            files,
            vec![dir.path().join("a.png"), dir.path().join("b.jpg")]
        );
    }

    #[test]
    fn test_save_card_keeps_text_and_image() {
        let dir = tempfile::tempdir().unwrap();
        let store = cardscan_core::JsonFileStore::new(dir.path().join("cards.json"));
        let card = CardRecord::new(Contact::named("Jane Doe"), "Jane Doe\nGlobex");

        save_card(&store, card, Path::new("scans/jane.jpg")).unwrap();
        save_card(&store, CardRecord::new(Contact::default(), "noise"), Path::new("x.jpg"))
            .unwrap();

        let saved = store.load_all().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].raw_text, "Jane Doe\nGlobex");
        assert_eq!(saved[0].image_uri.as_deref(), Some("scans/jane.jpg"));
    }
}
