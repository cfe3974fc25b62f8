//! Encode and decode commands - contact exchange payloads.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use cardscan_core::{
    decode, encode, sniff_format, CardRecord, CardStore, Contact, PayloadFormat,
};

use super::{format_contacts, read_input, Context, OutputFormat};

/// Arguments for the encode command.
#[derive(Args)]
pub struct EncodeArgs {
    /// Contact JSON file to encode (default: your profile)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Payload format: vcard or json (default from config)
    #[arg(short, long)]
    format: Option<PayloadFormat>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Arguments for the decode command.
#[derive(Args)]
pub struct DecodeArgs {
    /// File holding the scanned payload (default: stdin)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Save the decoded contact to the card store
    #[arg(long)]
    save: bool,
}

pub async fn run_encode(args: EncodeArgs, ctx: &Context) -> anyhow::Result<()> {
    let config = ctx.config()?;

    let contact = match &args.input {
        Some(path) => {
            let content = read_input(Some(path.as_path()))?;
            let contact: Contact = serde_json::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Invalid contact file {}: {}", path.display(), e))?;
            contact.trimmed()
        }
        None => ctx.profile_store(&config).load()?.ok_or_else(|| {
            anyhow::anyhow!("No profile saved. Run 'cardscan profile set' first.")
        })?,
    };

    if !contact.is_valid() {
        anyhow::bail!("A contact needs a name to be shared");
    }

    let format = args.format.unwrap_or(config.codec.default_format);
    debug!("Encoding contact as {}", format);
    let payload = encode(&contact, format);

    if let Some(output_path) = &args.output {
        fs::write(output_path, &payload)?;
        eprintln!(
            "{} Payload written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", payload);
    }

    Ok(())
}

pub async fn run_decode(args: DecodeArgs, ctx: &Context) -> anyhow::Result<()> {
    let payload = read_input(args.input.as_deref())?;
    debug!("Payload looks like {:?}", sniff_format(&payload));

    let contact = decode(&payload).map_err(|e| anyhow::anyhow!("Invalid contact code: {}", e))?;

    if args.save {
        let config = ctx.config()?;
        let card = CardRecord::new(contact.clone(), "");
        let id = card.id.clone();
        ctx.card_store(&config).append(card)?;
        eprintln!("{} Saved card {}", style("✓").green(), id);
    }

    println!(
        "{}",
        format_contacts(std::slice::from_ref(&contact), args.format)?
    );

    Ok(())
}
