//! Cards command - manage the local card store.

use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Args, Subcommand};
use console::style;

use cardscan_core::{CardRecord, CardStore};

use super::{csv_row, format_contacts, format_text, Context, OutputFormat, CSV_HEADER};

/// Arguments for the cards command.
#[derive(Args)]
pub struct CardsArgs {
    #[command(subcommand)]
    command: CardsCommand,
}

#[derive(Subcommand)]
enum CardsCommand {
    /// List saved cards, newest first
    List,

    /// Show a saved card
    Show {
        /// Card id
        id: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Delete a saved card
    Delete {
        /// Card id
        id: String,
    },

    /// Tag a saved card
    Tag {
        /// Card id
        id: String,
        /// Tag to add
        tag: String,
    },

    /// Export all saved cards as CSV
    Export {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
}

pub async fn run(args: CardsArgs, ctx: &Context) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let store = ctx.card_store(&config);

    match args.command {
        CardsCommand::List => list_cards(&store),
        CardsCommand::Show { id, format } => show_card(&store, &id, format),
        CardsCommand::Delete { id } => delete_card(&store, &id),
        CardsCommand::Tag { id, tag } => tag_card(&store, &id, &tag),
        CardsCommand::Export { output } => export_cards(&store, &output),
    }
}

fn list_cards(store: &impl CardStore) -> anyhow::Result<()> {
    let mut cards = store.load_all()?;

    if cards.is_empty() {
        println!("{} No saved cards.", style("ℹ").blue());
        return Ok(());
    }

    cards.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    for card in &cards {
        let captured = card.timestamp.with_timezone(&Local);
        println!(
            "{}  {}  {}",
            style(&card.id).dim(),
            captured.format("%Y-%m-%d %H:%M"),
            summary_line(card)
        );
    }

    println!();
    println!("{} card(s)", cards.len());

    Ok(())
}

fn summary_line(card: &CardRecord) -> String {
    let contact = &card.contact;
    match (contact.company_name.is_empty(), contact.email.is_empty()) {
        (false, _) => format!("{} ({})", contact.name, contact.company_name),
        (true, false) => format!("{} <{}>", contact.name, contact.email),
        (true, true) => contact.name.clone(),
    }
}

fn show_card(store: &impl CardStore, id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let card = store
        .get(id)?
        .ok_or_else(|| anyhow::anyhow!("Card not found: {}", id))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&card)?),
        OutputFormat::Csv => println!(
            "{}",
            format_contacts(std::slice::from_ref(&card.contact), format)?
        ),
        OutputFormat::Text => {
            print!("{}", format_text(&card.contact));
            println!(
                "{:<10} {}",
                "Captured:",
                card.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M")
            );
            if let Some(uri) = &card.image_uri {
                println!("{:<10} {}", "Image:", uri);
            }
            if !card.tags.is_empty() {
                println!("{:<10} {}", "Tags:", card.tags.join(", "));
            }
        }
    }

    Ok(())
}

fn delete_card(store: &impl CardStore, id: &str) -> anyhow::Result<()> {
    if store.get(id)?.is_none() {
        anyhow::bail!("Card not found: {}", id);
    }

    store.delete(id)?;
    println!("{} Deleted card {}", style("✓").green(), id);

    Ok(())
}

fn tag_card(store: &impl CardStore, id: &str, tag: &str) -> anyhow::Result<()> {
    let card = store
        .get(id)?
        .ok_or_else(|| anyhow::anyhow!("Card not found: {}", id))?;

    store.update(card.with_tag(tag))?;
    println!("{} Tagged card {} with {}", style("✓").green(), id, tag);

    Ok(())
}

fn export_cards(store: &impl CardStore, output: &Path) -> anyhow::Result<()> {
    let cards = store.load_all()?;
    let mut wtr = csv::Writer::from_path(output)?;

    let mut header = vec!["id", "captured_at"];
    header.extend(CSV_HEADER);
    header.push("tags");
    wtr.write_record(&header)?;

    for card in &cards {
        let captured = card.timestamp.to_rfc3339();
        let tags = card.tags.join(";");

        let mut row = vec![card.id.as_str(), captured.as_str()];
        row.extend(csv_row(&card.contact));
        row.push(tags.as_str());
        wtr.write_record(&row)?;
    }

    wtr.flush()?;

    println!(
        "{} Exported {} card(s) to {}",
        style("✓").green(),
        cards.len(),
        output.display()
    );

    Ok(())
}
