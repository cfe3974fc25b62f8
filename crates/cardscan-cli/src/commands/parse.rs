//! Parse command - extract contact fields from OCR text.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use cardscan_core::{CardFieldExtractor, CardParser, CardRecord, CardStore};

use super::{format_contacts, read_input, Context, OutputFormat};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Text file with recognized card text (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Save the extracted contact to the card store
    #[arg(long)]
    save: bool,
}

pub async fn run(args: ParseArgs, ctx: &Context) -> anyhow::Result<()> {
    let text = read_input(args.input.as_deref())?;
    if text.trim().is_empty() {
        anyhow::bail!("No text to parse");
    }

    let result = CardFieldExtractor::new().parse(&text);
    info!(
        "Extracted {} fields in {}ms",
        result.card.found_count(),
        result.processing_time_ms
    );

    if !result.missing_fields.is_empty() {
        eprintln!(
            "{} Missing fields: {}",
            style("ℹ").blue(),
            result.missing_fields.join(", ")
        );
    }

    let contact = result.to_contact();

    if args.save {
        if !contact.is_valid() {
            anyhow::bail!("Cannot save a card without a name");
        }
        let config = ctx.config()?;
        let card = CardRecord::new(contact.clone(), result.raw_text.clone());
        let id = card.id.clone();
        ctx.card_store(&config).append(card)?;
        eprintln!("{} Saved card {}", style("✓").green(), id);
    }

    let output = format_contacts(std::slice::from_ref(&contact), args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}
