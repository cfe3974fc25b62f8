//! Mapping of structured business card analysis results to contacts.
//!
//! The analysis service returns documents shaped like
//!
//! ```json
//! { "fields": { "ContactNames": { "valueArray": [ { "content": "Jane Doe" } ] } } }
//! ```
//!
//! Only the first document and the first candidate of each field are used.
//! Missing or oddly shaped nodes read as empty strings.

use serde_json::Value;
use tracing::debug;

use crate::models::contact::Contact;

/// Provider field holding contact names.
pub const CONTACT_NAMES: &str = "ContactNames";
/// Provider field holding postal addresses.
pub const ADDRESSES: &str = "Addresses";
/// Provider field holding email addresses.
pub const EMAILS: &str = "Emails";
/// Provider field holding work phone numbers.
pub const WORK_PHONES: &str = "WorkPhones";
/// Provider field holding mobile phone numbers.
pub const MOBILE_PHONES: &str = "MobilePhones";
/// Provider field holding company names.
pub const COMPANY_NAMES: &str = "CompanyNames";
/// Provider field holding job titles.
pub const JOB_TITLES: &str = "JobTitles";
/// Provider field holding websites.
pub const WEBSITES: &str = "Websites";

/// Maps provider documents onto the contact schema.
pub struct StructuredFieldMapper;

impl StructuredFieldMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map the first document of an analysis result to a contact.
    pub fn map_documents(&self, documents: &[Value]) -> Contact {
        let Some(document) = documents.first() else {
            debug!("No documents in analysis result");
            return Contact::default();
        };

        let fields = document.get("fields");
        let field = |name: &str| first_content(fields, name);

        let mut phone = field(WORK_PHONES);
        if phone.is_empty() {
            phone = field(MOBILE_PHONES);
        }

        Contact {
            name: field(CONTACT_NAMES),
            address: field(ADDRESSES),
            email: field(EMAILS),
            phone,
            company_name: field(COMPANY_NAMES),
            website: field(WEBSITES),
            job_title: field(JOB_TITLES),
        }
    }
}

impl Default for StructuredFieldMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Trimmed `content` of the first candidate of a field, or an empty string.
fn first_content(fields: Option<&Value>, name: &str) -> String {
    fields
        .and_then(|f| f.get(name))
        .and_then(|f| f.get("valueArray"))
        .and_then(|a| a.get(0))
        .and_then(|v| v.get("content"))
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Map analysis documents to a contact with the default mapper.
pub fn map_documents(documents: &[Value]) -> Contact {
    StructuredFieldMapper::new().map_documents(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn candidates(values: &[&str]) -> Value {
        json!({
            "type": "array",
            "valueArray": values.iter().map(|v| json!({ "type": "string", "content": v })).collect::<Vec<_>>()
        })
    }

    #[test]
    fn test_empty_documents() {
        assert_eq!(map_documents(&[]), Contact::default());
    }

    #[test]
    fn test_maps_first_candidates() {
        let documents = vec![json!({
            "docType": "businessCard",
            "fields": {
                "ContactNames": candidates(&["  Jane Doe ", "J. Doe"]),
                "Emails": candidates(&["jane@globex.com"]),
                "CompanyNames": candidates(&["Globex"]),
                "Addresses": candidates(&["1200 Market St, San Francisco, CA 94103"]),
                "WorkPhones": candidates(&["415-555-0100"]),
                "MobilePhones": candidates(&["415-555-0199"]),
                "JobTitles": candidates(&["Designer"]),
                "Websites": candidates(&["https://globex.com"])
            }
        })];

        let contact = map_documents(&documents);

        assert_eq!(
            contact,
            Contact {
                name: "Jane Doe".to_string(),
                address: "1200 Market St, San Francisco, CA 94103".to_string(),
                email: "jane@globex.com".to_string(),
                phone: "415-555-0100".to_string(),
                company_name: "Globex".to_string(),
                website: "https://globex.com".to_string(),
                job_title: "Designer".to_string(),
            }
        );
    }

    #[test]
    fn test_mobile_phone_fallback() {
        let documents = vec![json!({
            "fields": {
                "WorkPhones": candidates(&["   "]),
                "MobilePhones": candidates(&["+1 415 555 0199"])
            }
        })];
        assert_eq!(map_documents(&documents).phone, "+1 415 555 0199");
    }

    #[test]
    fn test_only_first_document_is_used() {
        let documents = vec![
            json!({ "fields": {} }),
            json!({ "fields": { "ContactNames": candidates(&["Ignored"]) } }),
        ];
        assert_eq!(map_documents(&documents), Contact::default());
    }

    #[test]
    fn test_malformed_structure_degrades_to_empty() {
        let documents = vec![json!({
            "fields": {
                "ContactNames": { "valueArray": [] },
                "Emails": { "valueArray": "not-an-array" },
                "CompanyNames": { "valueArray": [ { "content": 42 } ] },
                "Addresses": null
            }
        })];
        assert_eq!(map_documents(&documents), Contact::default());

        assert_eq!(map_documents(&[json!("garbage")]), Contact::default());
        assert_eq!(map_documents(&[json!({ "fields": [1, 2] })]), Contact::default());
    }
}
