//! Contact data models shared by extraction, mapping and the exchange codec.

use serde::{Deserialize, Serialize};

/// A normalized contact record.
///
/// Every field is a plain string; an empty string means the field is absent.
/// The JSON field names match the exchange format (`companyName`, `jobTitle`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    /// Full name of the person.
    pub name: String,

    /// Postal address as a single line.
    pub address: String,

    /// Email address.
    pub email: String,

    /// Phone number, formatted as found.
    pub phone: String,

    /// Company or organization name.
    pub company_name: String,

    /// Website URL.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub website: String,

    /// Job title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub job_title: String,
}

impl Contact {
    /// Create a contact with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A contact is valid when it carries a non-blank name.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Whether every field is blank.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.trim().is_empty())
    }

    /// Return a copy with every field trimmed of surrounding whitespace.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            company_name: self.company_name.trim().to_string(),
            website: self.website.trim().to_string(),
            job_title: self.job_title.trim().to_string(),
        }
    }

    /// Field labels paired with their values, in display order.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("Name", &self.name),
            ("Job title", &self.job_title),
            ("Company", &self.company_name),
            ("Email", &self.email),
            ("Phone", &self.phone),
            ("Address", &self.address),
            ("Website", &self.website),
        ]
    }
}

/// Fields picked out of raw card text.
///
/// Unlike [`Contact`], every field here is optional: the heuristics simply
/// leave a field unset when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
}

impl ParsedCard {
    /// Number of fields that were found.
    pub fn found_count(&self) -> usize {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.company,
            &self.address,
            &self.website,
            &self.job_title,
        ]
        .iter()
        .filter(|f| f.is_some())
        .count()
    }
}

impl From<ParsedCard> for Contact {
    fn from(card: ParsedCard) -> Self {
        Contact {
            name: card.name.unwrap_or_default(),
            address: card.address.unwrap_or_default(),
            email: card.email.unwrap_or_default(),
            phone: card.phone.unwrap_or_default(),
            company_name: card.company.unwrap_or_default(),
            website: card.website.unwrap_or_default(),
            job_title: card.job_title.unwrap_or_default(),
        }
        .trimmed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validity_requires_name() {
        assert!(Contact::named("Jane Doe").is_valid());
        assert!(!Contact::named("   ").is_valid());
        assert!(!Contact::default().is_valid());
    }

    #[test]
    fn test_json_uses_exchange_field_names() {
        let contact = Contact {
            company_name: "Acme".to_string(),
            job_title: "Engineer".to_string(),
            ..Contact::named("Jane")
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["companyName"], "Acme");
        assert_eq!(json["jobTitle"], "Engineer");
        assert!(json.get("website").is_none());
    }

    #[test]
    fn test_parsed_card_into_contact() {
        let card = ParsedCard {
            name: Some(" John Smith ".to_string()),
            company: Some("Acme Corp".to_string()),
            ..ParsedCard::default()
        };
        assert_eq!(card.found_count(), 2);

        let contact: Contact = card.into();
        assert_eq!(contact.name, "John Smith");
        assert_eq!(contact.company_name, "Acme Corp");
        assert_eq!(contact.email, "");
    }
}
