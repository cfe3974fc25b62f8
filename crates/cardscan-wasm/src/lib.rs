//! WASM bindings for business card digitizing.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js:
//! card text parsing, mapping of analysis results fetched by the host, and
//! the contact exchange codec used for scannable codes.

use wasm_bindgen::prelude::*;

use cardscan_core::{
    CardFieldExtractor, CardParser, Contact, PayloadFormat, SniffedFormat,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(js_error)
}

/// Extract contact fields from recognized card text.
///
/// Returns a contact object; fields that were not found are empty strings.
#[wasm_bindgen]
pub fn extract_card_fields(text: &str) -> Result<JsValue, JsValue> {
    let contact: Contact = cardscan_core::extract_card_fields(text).into();
    to_js(&contact)
}

/// Map the `documents` array of a business card analysis result to a contact.
#[wasm_bindgen]
pub fn map_documents(documents: JsValue) -> Result<JsValue, JsValue> {
    let documents: Vec<serde_json::Value> =
        serde_wasm_bindgen::from_value(documents).map_err(js_error)?;
    to_js(&cardscan_core::map_documents(&documents))
}

/// Encode a contact object as a `"vcard"` or `"json"` payload.
#[wasm_bindgen]
pub fn encode_contact(contact: JsValue, format: &str) -> Result<String, JsValue> {
    let contact: Contact = serde_wasm_bindgen::from_value(contact).map_err(js_error)?;
    let format: PayloadFormat = format.parse().map_err(js_error)?;
    Ok(cardscan_core::encode(&contact.trimmed(), format))
}

/// Decode a scanned payload into a contact object.
///
/// Throws when the payload is not a contact code or has no name.
#[wasm_bindgen]
pub fn decode_payload(payload: &str) -> Result<JsValue, JsValue> {
    let contact = cardscan_core::decode(payload).map_err(js_error)?;
    to_js(&contact)
}

/// Report the payload format: `"vcard"`, `"json"` or `"unrecognized"`.
#[wasm_bindgen]
pub fn sniff(payload: &str) -> String {
    match cardscan_core::sniff_format(payload) {
        SniffedFormat::VCard => "vcard",
        SniffedFormat::Json => "json",
        SniffedFormat::Unrecognized => "unrecognized",
    }
    .to_string()
}

/// Card text extractor class for browser use.
#[wasm_bindgen]
pub struct CardExtractor {
    parser: CardFieldExtractor,
}

#[wasm_bindgen]
impl CardExtractor {
    /// Create a new card extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: CardFieldExtractor::new(),
        }
    }

    /// Extract a contact from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(text).to_contact())
    }

    /// Get extraction result with metadata.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(text);

        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ExtractResult {
            contact: Contact,
            raw_text: String,
            missing_fields: Vec<&'static str>,
            processing_time_ms: u64,
        }

        let output = ExtractResult {
            contact: result.to_contact(),
            raw_text: result.raw_text,
            missing_fields: result.missing_fields,
            processing_time_ms: result.processing_time_ms,
        };

        to_js(&output)
    }
}

impl Default for CardExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_sniff() {
        assert_eq!(sniff("BEGIN:VCARD\nEND:VCARD"), "vcard");
        assert_eq!(sniff("{\"name\":\"Jane\"}"), "json");
        assert_eq!(sniff("hello"), "unrecognized");
    }

    #[wasm_bindgen_test]
    fn test_encode_then_decode_json() {
        let contact = to_js(&Contact::named("Jane Doe")).unwrap();
        let payload = encode_contact(contact, "json").unwrap();

        let decoded: Contact =
            serde_wasm_bindgen::from_value(decode_payload(&payload).unwrap()).unwrap();
        assert_eq!(decoded, Contact::named("Jane Doe"));
    }

    #[wasm_bindgen_test]
    fn test_encode_rejects_unknown_format() {
        let contact = to_js(&Contact::named("Jane Doe")).unwrap();
        assert!(encode_contact(contact, "xml").is_err());
    }

    #[wasm_bindgen_test]
    fn test_decode_without_name_fails() {
        assert!(decode_payload("{\"email\":\"a@b.co\"}").is_err());
    }

    #[wasm_bindgen_test]
    fn test_extract_card_fields() {
        let value = extract_card_fields("John Smith\njohn@acme.com\nAcme Corp").unwrap();
        let contact: Contact = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(contact.name, "John Smith");
        assert_eq!(contact.email, "john@acme.com");
        assert_eq!(contact.company_name, "Acme Corp");
    }
}
