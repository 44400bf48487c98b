//! Listing wire types shared between the browser adapter and the runtime mapping layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown when the remote reports failure without a message of its own.
pub const DEFAULT_LISTING_FAILURE_MESSAGE: &str = "Failed to fetch files from the server.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Explicit entry kind supplied by listing sources that know it.
pub enum ListingKind {
    /// Regular file.
    File,
    /// Folder/directory.
    #[serde(alias = "directory", alias = "dir")]
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Detailed listing item carrying optional authoritative metadata.
pub struct ListingRecord {
    /// Display name including extension.
    pub name: String,
    /// Authoritative kind; the runtime falls back to the name heuristic when absent.
    ///
    /// Only the `kind` key is read. Other keys such as `type` are ignored.
    #[serde(default)]
    pub kind: Option<ListingKind>,
    /// Human-readable size label.
    #[serde(default)]
    pub size: Option<String>,
    /// Nested items for hierarchical sources.
    #[serde(default)]
    pub children: Vec<ListingItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
/// One element of the `files` array: either a bare file name or a detailed record.
pub enum ListingItem {
    /// Bare file name (the live backend's shape).
    Name(String),
    /// Detailed record.
    Record(ListingRecord),
}

impl ListingItem {
    /// Returns the item's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Record(record) => &record.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Response body of `GET {base}/files`.
pub struct ListingResponse {
    /// Whether the remote considers the request successful.
    pub success: bool,
    /// Listed items; may be absent.
    #[serde(default)]
    pub files: Option<Vec<ListingItem>>,
    /// Optional server-supplied message, typically present on failure.
    #[serde(default)]
    pub message: Option<String>,
}

impl ListingResponse {
    /// Parses a raw JSON response body.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Decode`] when the body is not a listing payload.
    pub fn from_json(body: &str) -> Result<Self, ListingError> {
        serde_json::from_str(body).map_err(|err| ListingError::Decode(err.to_string()))
    }

    /// Consumes the response and returns its items, or the server-reported failure.
    ///
    /// A successful response without `files` is treated as an empty listing.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Rejected`] when `success` is `false`.
    pub fn into_items(self) -> Result<Vec<ListingItem>, ListingError> {
        if !self.success {
            let message = self.message.filter(|message| !message.trim().is_empty());
            return Err(ListingError::Rejected(message));
        }
        Ok(self.files.unwrap_or_default())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures surfaced while retrieving or ingesting the remote listing.
///
/// The `Display` output is the user-facing page-level error message.
pub enum ListingError {
    /// The request never produced a response (network, CORS, missing browser APIs).
    #[error("Failed to fetch files: {0}")]
    Transport(String),
    /// The remote answered with a non-2xx status.
    #[error("Failed to fetch files: HTTP error! status: {0}")]
    HttpStatus(u16),
    /// The response body was not a listing payload.
    #[error("Failed to fetch files: {0}")]
    Decode(String),
    /// The remote reported `success: false`.
    #[error("{}", .0.as_deref().unwrap_or(DEFAULT_LISTING_FAILURE_MESSAGE))]
    Rejected(Option<String>),
    /// The listing structure failed ingestion validation.
    #[error("Failed to fetch files: {0}")]
    InvalidStructure(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_bare_name_listing() {
        let response =
            ListingResponse::from_json(r#"{"success":true,"files":["notes.txt","Photos"]}"#)
                .expect("parse");
        assert_eq!(
            response.into_items().expect("items"),
            vec![
                ListingItem::Name("notes.txt".to_string()),
                ListingItem::Name("Photos".to_string()),
            ]
        );
    }

    #[test]
    fn parses_detailed_records_with_kind_value_aliases() {
        let response = ListingResponse::from_json(
            r#"{"success":true,"files":[
                {"name":"README","kind":"file","size":"1 KB"},
                {"name":"src","kind":"directory","children":["main.rs"]}
            ]}"#,
        )
        .expect("parse");
        let items = response.into_items().expect("items");

        assert_eq!(
            items[0],
            ListingItem::Record(ListingRecord {
                name: "README".to_string(),
                kind: Some(ListingKind::File),
                size: Some("1 KB".to_string()),
                children: Vec::new(),
            })
        );
        let ListingItem::Record(folder) = &items[1] else {
            panic!("expected record");
        };
        assert_eq!(folder.kind, Some(ListingKind::Folder));
        assert_eq!(folder.children, vec![ListingItem::Name("main.rs".to_string())]);
    }

    #[test]
    fn records_carrying_a_type_key_still_decode_from_kind() {
        let response = ListingResponse::from_json(
            r#"{"success":true,"files":[
                {"name":"docs","kind":"folder","type":"file"},
                {"name":"Makefile","type":"file"}
            ]}"#,
        )
        .expect("parse");
        let items = response.into_items().expect("items");

        let [ListingItem::Record(docs), ListingItem::Record(makefile)] = items.as_slice() else {
            panic!("expected two records");
        };
        assert_eq!(docs.kind, Some(ListingKind::Folder));
        assert_eq!(makefile.kind, None);
    }

    #[test]
    fn rejected_response_uses_server_message() {
        let response =
            ListingResponse::from_json(r#"{"success":false,"message":"db down"}"#).expect("parse");
        let err = response.into_items().expect_err("rejected");
        assert_eq!(err.to_string(), "db down");
    }

    #[test]
    fn rejected_response_without_message_uses_default() {
        let response =
            ListingResponse::from_json(r#"{"success":false,"message":"  "}"#).expect("parse");
        let err = response.into_items().expect_err("rejected");
        assert_eq!(err, ListingError::Rejected(None));
        assert_eq!(err.to_string(), DEFAULT_LISTING_FAILURE_MESSAGE);
    }

    #[test]
    fn successful_response_without_files_is_empty() {
        let response = ListingResponse::from_json(r#"{"success":true}"#).expect("parse");
        assert!(response.into_items().expect("items").is_empty());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = ListingResponse::from_json("<html>502</html>").expect_err("decode");
        assert!(matches!(err, ListingError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to fetch files: "));
    }

    #[test]
    fn http_status_message_names_the_status() {
        assert_eq!(
            ListingError::HttpStatus(503).to_string(),
            "Failed to fetch files: HTTP error! status: 503"
        );
    }
}
