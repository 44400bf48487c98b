//! Listing ingestion: classifies raw listing items and maps them to [`Entry`] trees.
//!
//! Ingestion is the single validation point for hierarchical listings. Every entry tree that
//! reaches the reducer has unique ids and bounded depth, so the recursive renderers never need to
//! defend against either.

use std::collections::HashSet;

use platform_host::{HostConfig, ListingError, ListingItem, ListingKind, ListingService};

use crate::model::{Entry, EntryId, EntryKind};

/// Deepest nesting level accepted from a hierarchical listing.
pub const MAX_LISTING_DEPTH: usize = 32;

const UPLOADS_DISPLAY_ROOT: &str = "/uploads";

/// Classifies a name by shape: a `.` anywhere makes it a file whose extension is the lowercase
/// text after the last `.`; no `.` makes it a folder.
pub fn classify_name(name: &str) -> (EntryKind, Option<String>) {
    match name.rsplit_once('.') {
        Some((_, extension)) => (EntryKind::File, Some(extension.to_lowercase())),
        None => (EntryKind::Folder, None),
    }
}

fn resolve_kind(item: &ListingItem) -> (EntryKind, Option<String>) {
    let explicit = match item {
        ListingItem::Name(_) => None,
        ListingItem::Record(record) => record.kind,
    };
    let (heuristic_kind, extension) = classify_name(item.name());
    match explicit {
        None => (heuristic_kind, extension),
        Some(ListingKind::Folder) => (EntryKind::Folder, None),
        Some(ListingKind::File) => (EntryKind::File, extension),
    }
}

struct Ingest<'a> {
    config: &'a HostConfig,
    seen: HashSet<EntryId>,
}

impl Ingest<'_> {
    fn level(
        &mut self,
        items: &[ListingItem],
        parent: Option<(&EntryId, &str)>,
        depth: usize,
    ) -> Result<Vec<Entry>, ListingError> {
        if depth > MAX_LISTING_DEPTH {
            return Err(ListingError::InvalidStructure(format!(
                "listing nests deeper than {MAX_LISTING_DEPTH} levels"
            )));
        }

        let mut entries = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let name = item.name();
            let id = match parent {
                Some((parent_id, _)) => EntryId(format!("{parent_id}/{name}-{index}")),
                None => EntryId(format!("{name}-{index}")),
            };
            if !self.seen.insert(id.clone()) {
                return Err(ListingError::InvalidStructure(format!(
                    "duplicate entry id `{id}`"
                )));
            }

            let relative = match parent {
                Some((_, parent_relative)) => format!("{parent_relative}/{name}"),
                None => name.to_string(),
            };
            let (kind, extension) = resolve_kind(item);
            let (size, nested) = match item {
                ListingItem::Name(_) => (None, &[][..]),
                ListingItem::Record(record) => (record.size.clone(), record.children.as_slice()),
            };
            if kind == EntryKind::File && !nested.is_empty() {
                return Err(ListingError::InvalidStructure(format!(
                    "file `{relative}` cannot contain children"
                )));
            }

            let children = self.level(nested, Some((&id, &relative)), depth + 1)?;
            entries.push(Entry {
                url: (kind == EntryKind::File).then(|| self.config.upload_url(&relative)),
                path: format!("{UPLOADS_DISPLAY_ROOT}/{relative}"),
                id,
                name: name.to_string(),
                kind,
                extension,
                size,
                children,
            });
        }
        Ok(entries)
    }
}

/// Maps listing items to an ordered entry tree.
///
/// # Errors
///
/// Returns [`ListingError::InvalidStructure`] for duplicate ids, files with children, or nesting
/// deeper than [`MAX_LISTING_DEPTH`].
pub fn entries_from_items(
    items: &[ListingItem],
    config: &HostConfig,
) -> Result<Vec<Entry>, ListingError> {
    Ingest {
        config,
        seen: HashSet::new(),
    }
    .level(items, None, 0)
}

/// Fetches the remote listing once and ingests it.
///
/// # Errors
///
/// Propagates transport, status, decode, rejection, and ingestion failures as [`ListingError`].
pub async fn load_listing(
    service: &dyn ListingService,
    config: &HostConfig,
) -> Result<Vec<Entry>, ListingError> {
    let url = config.listing_url();
    let response = service.fetch_listing(&url).await?;
    let items = response.into_items()?;
    entries_from_items(&items, config)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{ListingRecord, ListingResponse, MemoryListingService};
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(values: &[&str]) -> Vec<ListingItem> {
        values
            .iter()
            .map(|value| ListingItem::Name((*value).to_string()))
            .collect()
    }

    fn config() -> HostConfig {
        HostConfig::new("http://localhost:3000").expect("config")
    }

    #[test]
    fn dotted_names_are_files_with_lowercase_extension() {
        assert_eq!(
            classify_name("Photo.JPG"),
            (EntryKind::File, Some("jpg".to_string()))
        );
        assert_eq!(
            classify_name("archive.tar.gz"),
            (EntryKind::File, Some("gz".to_string()))
        );
        assert_eq!(
            classify_name(".env"),
            (EntryKind::File, Some("env".to_string()))
        );
        assert_eq!(classify_name("notes."), (EntryKind::File, Some(String::new())));
    }

    #[test]
    fn undotted_names_are_folders_without_url() {
        assert_eq!(classify_name("Photos"), (EntryKind::Folder, None));
        let entries = entries_from_items(&names(&["Makefile"]), &config()).expect("entries");
        assert_eq!(entries[0].kind, EntryKind::Folder);
        assert_eq!(entries[0].url, None);
        assert_eq!(entries[0].extension, None);
    }

    #[test]
    fn flat_names_map_to_positional_ids_and_verbatim_urls() {
        let entries =
            entries_from_items(&names(&["notes.txt", "Photos", "a b#1.png"]), &config())
                .expect("entries");

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].id, EntryId("notes.txt-0".to_string()));
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[0].extension.as_deref(), Some("txt"));
        assert_eq!(
            entries[0].url.as_deref(),
            Some("http://localhost:3000/uploads/notes.txt")
        );
        assert_eq!(entries[0].path, "/uploads/notes.txt");
        assert_eq!(entries[1].id, EntryId("Photos-1".to_string()));
        assert_eq!(entries[1].kind, EntryKind::Folder);
        assert!(entries[1].children.is_empty());
        assert_eq!(
            entries[2].url.as_deref(),
            Some("http://localhost:3000/uploads/a b#1.png")
        );
    }

    #[test]
    fn explicit_kind_overrides_the_name_heuristic() {
        let items = vec![
            ListingItem::Record(ListingRecord {
                name: "v1.2".to_string(),
                kind: Some(ListingKind::Folder),
                size: None,
                children: names(&["LICENSE"]),
            }),
            ListingItem::Record(ListingRecord {
                name: "README".to_string(),
                kind: Some(ListingKind::File),
                size: Some("4 KB".to_string()),
                children: Vec::new(),
            }),
        ];

        let entries = entries_from_items(&items, &config()).expect("entries");

        let release = &entries[0];
        assert_eq!(release.kind, EntryKind::Folder);
        assert_eq!(release.extension, None);
        assert_eq!(release.url, None);
        assert_eq!(
            release.children[0].id,
            EntryId("v1.2-0/LICENSE-0".to_string())
        );
        assert_eq!(release.children[0].path, "/uploads/v1.2/LICENSE");
        assert_eq!(
            release.children[0].kind,
            EntryKind::Folder,
            "nested bare names still use the heuristic"
        );

        let readme = &entries[1];
        assert_eq!(readme.kind, EntryKind::File);
        assert_eq!(readme.size.as_deref(), Some("4 KB"));
        assert_eq!(
            readme.url.as_deref(),
            Some("http://localhost:3000/uploads/README")
        );
    }

    #[test]
    fn files_with_children_are_rejected() {
        let items = vec![ListingItem::Record(ListingRecord {
            name: "a.txt".to_string(),
            kind: None,
            size: None,
            children: names(&["b.txt"]),
        })];

        assert!(matches!(
            entries_from_items(&items, &config()),
            Err(ListingError::InvalidStructure(_))
        ));
    }

    #[test]
    fn nesting_beyond_the_limit_is_rejected() {
        let mut item = ListingItem::Name("leaf.txt".to_string());
        for level in 0..=MAX_LISTING_DEPTH {
            item = ListingItem::Record(ListingRecord {
                name: format!("level{level}"),
                kind: Some(ListingKind::Folder),
                size: None,
                children: vec![item],
            });
        }

        let err = entries_from_items(&[item], &config()).expect_err("too deep");
        assert!(err.to_string().contains("deeper than"));
    }

    #[test]
    fn empty_names_map_to_folders_alongside_their_siblings() {
        let entries = entries_from_items(&names(&["notes.txt", ""]), &config()).expect("entries");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, EntryId("notes.txt-0".to_string()));
        assert_eq!(entries[1].id, EntryId("-1".to_string()));
        assert_eq!(entries[1].name, "");
        assert_eq!(entries[1].kind, EntryKind::Folder);
        assert_eq!(entries[1].url, None);
    }

    #[test]
    fn load_listing_requests_the_listing_endpoint() {
        let service = MemoryListingService::default();
        service.push_outcome(ListingResponse::from_json(
            r#"{"success":true,"files":["notes.txt","Photos"]}"#,
        ));

        let entries = block_on(load_listing(&service, &config())).expect("entries");

        assert_eq!(service.requests(), vec!["http://localhost:3000/files"]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[1].kind, EntryKind::Folder);
    }

    #[test]
    fn load_listing_surfaces_server_rejection() {
        let service = MemoryListingService::default();
        service.push_outcome(ListingResponse::from_json(
            r#"{"success":false,"message":"db down"}"#,
        ));

        let err = block_on(load_listing(&service, &config())).expect_err("rejected");
        assert_eq!(err.to_string(), "db down");
    }
}
