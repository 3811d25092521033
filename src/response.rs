//! HTTP-proxy shaped responses.
//!
//! The serialized field names (`statusCode`, `headers`, `isBase64Encoded`, `body`) follow the
//! API Gateway Lambda proxy integration, which relays the response to the client verbatim.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::builder::RenderedDocument;
use crate::config::ContentLengthMode;

pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_DISPOSITION: &str = "Content-disposition";

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Response returned to the invoking platform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub is_base64_encoded: bool,
    pub body: String,
}

impl LetterResponse {
    /// Builds a `200` response carrying `document` as a base64-encoded attachment named
    /// `filename`.
    pub fn pdf_attachment(
        document: &RenderedDocument,
        filename: &str,
        content_length: ContentLengthMode,
    ) -> Self {
        let body = STANDARD.encode(document.bytes());
        let length = match content_length {
            ContentLengthMode::Decoded => document.len(),
            ContentLengthMode::EncodedBody => body.len(),
        };

        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_LENGTH.to_owned(), length.to_string());
        headers.insert(CONTENT_TYPE.to_owned(), PDF_CONTENT_TYPE.to_owned());
        headers.insert(
            CONTENT_DISPOSITION.to_owned(),
            format!("attachment;filename={}", filename),
        );

        Self {
            status_code: 200,
            headers,
            is_base64_encoded: true,
            body,
        }
    }

    /// Returns a header value by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Decodes the base64 body back into the document bytes.
    pub fn decode_body(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn document() -> RenderedDocument {
        RenderedDocument::from_bytes(b"%PDF-1.3\nhello letter\n%%EOF".to_vec())
    }

    #[test]
    fn attachment_headers() {
        let response =
            LetterResponse::pdf_attachment(&document(), "test.pdf", ContentLengthMode::Decoded);

        assert_eq!(response.status_code, 200);
        assert!(response.is_base64_encoded);
        assert_eq!(response.header(CONTENT_TYPE), Some("application/pdf"));
        assert_eq!(
            response.header(CONTENT_DISPOSITION),
            Some("attachment;filename=test.pdf")
        );
        assert_eq!(response.decode_body().unwrap(), document().into_bytes());
    }

    #[test]
    fn content_length_modes() {
        let decoded =
            LetterResponse::pdf_attachment(&document(), "test.pdf", ContentLengthMode::Decoded);
        let encoded = LetterResponse::pdf_attachment(
            &document(),
            "test.pdf",
            ContentLengthMode::EncodedBody,
        );

        assert_eq!(
            decoded.header(CONTENT_LENGTH),
            Some(document().len().to_string().as_str())
        );
        assert_eq!(
            encoded.header(CONTENT_LENGTH),
            Some(encoded.body.len().to_string().as_str())
        );
        assert_ne!(decoded.header(CONTENT_LENGTH), encoded.header(CONTENT_LENGTH));
    }

    #[test]
    fn serializes_proxy_field_names() {
        let response =
            LetterResponse::pdf_attachment(&document(), "test.pdf", ContentLengthMode::Decoded);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["statusCode"], json!(200));
        assert_eq!(value["isBase64Encoded"], json!(true));
        assert_eq!(value["headers"]["Content-Type"], json!("application/pdf"));
        assert_eq!(value["body"], json!(response.body));
    }
}
