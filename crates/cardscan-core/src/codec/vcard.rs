//! vCard contact payloads.
//!
//! Only a fixed subset of vCard 3.0 is written and read. Values are not
//! escaped, so an address containing `;` comes back with its pieces joined
//! by `", "`.

use crate::error::DecodeError;
use crate::models::contact::Contact;

use super::Result;

/// Encode a contact as a vCard.
///
/// Optional properties and `FN` are written only when their value is
/// non-empty.
pub fn encode_vcard(contact: &Contact) -> String {
    let optional = |tag: &str, value: &str| {
        if value.is_empty() {
            String::new()
        } else {
            format!("{tag}:{value}")
        }
    };

    let address = if contact.address.is_empty() {
        String::new()
    } else {
        format!("ADR:;;{};;;;", contact.address)
    };

    let lines = [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        optional("FN", &contact.name),
        format!("N:{};;;", contact.name),
        optional("EMAIL", &contact.email),
        optional("TEL", &contact.phone),
        optional("ORG", &contact.company_name),
        address,
        "END:VCARD".to_string(),
    ];

    lines
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode a vCard payload.
///
/// Only `FN`, `EMAIL`, `TEL`, `ORG` and `ADR` are read; other lines are
/// ignored.
pub fn decode_vcard(payload: &str) -> Result<Contact> {
    let mut contact = Contact::default();

    for line in payload.split('\n').map(str::trim) {
        if let Some(rest) = line.strip_prefix("FN:") {
            contact.name = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("EMAIL:") {
            contact.email = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("TEL:") {
            contact.phone = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("ORG:") {
            contact.company_name = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("ADR:") {
            // ;;street;city;region;postal;country
            let parts: Vec<&str> = rest.split(';').collect();
            if parts.len() > 2 {
                contact.address = parts[2..]
                    .iter()
                    .filter(|part| !part.trim().is_empty())
                    .copied()
                    .collect::<Vec<_>>()
                    .join(", ");
            }
        }
    }

    if !contact.is_valid() {
        return Err(DecodeError::MissingRequiredField("name"));
    }

    Ok(contact)
}
