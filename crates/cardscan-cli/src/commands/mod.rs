//! CLI subcommands and the helpers they share.

pub mod cards;
pub mod config;
pub mod exchange;
pub mod parse;
pub mod profile;
pub mod scan;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use cardscan_core::models::config::CardscanConfig;
use cardscan_core::{Contact, JsonFileStore, ProfileStore};

/// Global options every command may need.
pub struct Context {
    config_path: Option<PathBuf>,
    data_dir: Option<PathBuf>,
}

impl Context {
    pub fn new(config_path: Option<PathBuf>, data_dir: Option<PathBuf>) -> Self {
        Self {
            config_path,
            data_dir,
        }
    }

    /// Config file in use: the `--config` path, or the per-user default.
    pub fn config_path(&self) -> PathBuf {
        self.config_path.clone().unwrap_or_else(default_config_path)
    }

    /// Load configuration. A missing default file means defaults; a missing
    /// explicit file is an error.
    pub fn config(&self) -> anyhow::Result<CardscanConfig> {
        let path = self.config_path();
        if self.config_path.is_none() && !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(CardscanConfig::default());
        }
        CardscanConfig::from_file(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))
    }

    /// Directory holding saved cards and the profile.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("cardscan")
        })
    }

    pub fn card_store(&self, config: &CardscanConfig) -> JsonFileStore {
        JsonFileStore::new(config.storage.cards_path(&self.data_dir()))
    }

    pub fn profile_store(&self, config: &CardscanConfig) -> ProfileStore {
        ProfileStore::new(config.storage.profile_path(&self.data_dir()))
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardscan")
        .join("config.json")
}

/// How contacts are printed.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// Read a whole input from a file, or from stdin for `None` or `-`.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            if !p.exists() {
                anyhow::bail!("Input file not found: {}", p.display());
            }
            Ok(fs::read_to_string(p)?)
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

pub fn format_contacts(contacts: &[Contact], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => match contacts {
            [single] => Ok(serde_json::to_string_pretty(single)?),
            many => Ok(serde_json::to_string_pretty(many)?),
        },
        OutputFormat::Csv => format_csv(contacts),
        OutputFormat::Text => Ok(contacts
            .iter()
            .map(format_text)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub const CSV_HEADER: [&str; 7] = [
    "name",
    "job_title",
    "company",
    "email",
    "phone",
    "address",
    "website",
];

pub fn csv_row(contact: &Contact) -> [&str; 7] {
    [
        contact.name.as_str(),
        contact.job_title.as_str(),
        contact.company_name.as_str(),
        contact.email.as_str(),
        contact.phone.as_str(),
        contact.address.as_str(),
        contact.website.as_str(),
    ]
}

fn format_csv(contacts: &[Contact]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(CSV_HEADER)?;
    for contact in contacts {
        wtr.write_record(csv_row(contact))?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

pub fn format_text(contact: &Contact) -> String {
    let mut output = String::new();

    for (label, value) in contact.fields() {
        if !value.is_empty() {
            output.push_str(&format!("{:<10} {}\n", format!("{}:", label), value));
        }
    }

    if output.is_empty() {
        output.push_str("(no fields found)\n");
    }

    output
}
