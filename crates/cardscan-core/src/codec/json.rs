//! JSON contact payloads.

use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::models::contact::Contact;

use super::Result;

/// Encode a contact as pretty-printed JSON.
///
/// `name`, `address`, `email`, `phone` and `companyName` are always written;
/// `website` and `jobTitle` only when set.
pub fn encode_json(contact: &Contact) -> String {
    // Serializing a struct of plain strings cannot fail.
    serde_json::to_string_pretty(contact).unwrap_or_default()
}

/// Decode a JSON object payload.
pub fn decode_json(payload: &str) -> Result<Contact> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| DecodeError::MalformedPayload(e.to_string()))?;

    let Value::Object(object) = value else {
        return Err(DecodeError::MalformedPayload(
            "expected a JSON object".to_string(),
        ));
    };

    let contact = Contact {
        name: string_field(&object, "name"),
        address: string_field(&object, "address"),
        email: string_field(&object, "email"),
        phone: string_field(&object, "phone"),
        company_name: string_field(&object, "companyName"),
        website: string_field(&object, "website"),
        job_title: string_field(&object, "jobTitle"),
    };

    if !contact.is_valid() {
        return Err(DecodeError::MissingRequiredField("name"));
    }

    Ok(contact)
}

/// Read a field as a trimmed string. Missing and null read as empty; other
/// non-string values are written out as their JSON text.
fn string_field(object: &Map<String, Value>, key: &str) -> String {
    let text = match object.get(key) {
        None | Some(Value::Null) => return String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    };
    text.trim().to_string()
}
