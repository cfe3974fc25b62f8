//! Profile command - manage the contact you share with others.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use cardscan_core::Contact;

use super::{format_contacts, read_input, Context, OutputFormat};

/// Arguments for the profile command.
#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    command: ProfileCommand,
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Show your profile
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Create or update your profile
    Set(SetArgs),
}

#[derive(Args)]
struct SetArgs {
    /// Replace the profile with a contact JSON file
    #[arg(long, conflicts_with_all = ["name", "email", "phone", "company", "address", "website", "job_title"])]
    from: Option<PathBuf>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    company: Option<String>,

    #[arg(long)]
    address: Option<String>,

    #[arg(long)]
    website: Option<String>,

    #[arg(long)]
    job_title: Option<String>,
}

impl SetArgs {
    /// Overlay the given flags on an existing profile.
    fn merge_into(self, mut contact: Contact) -> Contact {
        let updates = [
            (self.name, &mut contact.name),
            (self.email, &mut contact.email),
            (self.phone, &mut contact.phone),
            (self.company, &mut contact.company_name),
            (self.address, &mut contact.address),
            (self.website, &mut contact.website),
            (self.job_title, &mut contact.job_title),
        ];
        for (value, field) in updates {
            if let Some(value) = value {
                *field = value;
            }
        }
        contact
    }
}

pub async fn run(args: ProfileArgs, ctx: &Context) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let store = ctx.profile_store(&config);

    match args.command {
        ProfileCommand::Show { format } => match store.load()? {
            Some(profile) => {
                println!(
                    "{}",
                    format_contacts(std::slice::from_ref(&profile), format)?
                );
            }
            None => {
                println!(
                    "{} No profile saved. Run 'cardscan profile set --name <NAME>' to create one.",
                    style("ℹ").blue()
                );
            }
        },
        ProfileCommand::Set(set_args) => {
            let profile = match set_args.from.clone() {
                Some(path) => {
                    let content = read_input(Some(path.as_path()))?;
                    serde_json::from_str::<Contact>(&content).map_err(|e| {
                        anyhow::anyhow!("Invalid contact file {}: {}", path.display(), e)
                    })?
                }
                None => set_args.merge_into(store.load()?.unwrap_or_default()),
            };

            store.save(&profile)?;
            println!(
                "{} Profile saved to {}",
                style("✓").green(),
                store.path().display()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> SetArgs {
        SetArgs {
            from: None,
            name: None,
            email: None,
            phone: None,
            company: None,
            address: None,
            website: None,
            job_title: None,
        }
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let existing = Contact {
            name: "Jane Doe".to_string(),
            email: "jane@globex.com".to_string(),
            ..Contact::default()
        };
        let args = SetArgs {
            phone: Some("415-555-0100".to_string()),
            ..empty_args()
        };

        let merged = args.merge_into(existing);

        assert_eq!(merged.name, "Jane Doe");
        assert_eq!(merged.email, "jane@globex.com");
        assert_eq!(merged.phone, "415-555-0100");
    }

    #[test]
    fn test_merge_overrides_fields() {
        let args = SetArgs {
            name: Some("John Smith".to_string()),
            job_title: Some("CTO".to_string()),
            ..empty_args()
        };

        let merged = args.merge_into(Contact::named("Jane Doe"));

        assert_eq!(merged.name, "John Smith");
        assert_eq!(merged.job_title, "CTO");
    }
}
