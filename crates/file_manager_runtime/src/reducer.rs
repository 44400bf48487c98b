//! Reducer actions, side-effect intents, and transition logic for the dashboard runtime.

use platform_host::ListingError;
use thiserror::Error;

use crate::model::{find_entry, DashboardState, Entry, EntryId, ListingStatus, Notice, ViewMode};

/// Route the dashboard returns to after logging out.
pub const LOGOUT_ROUTE: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Surface that requested a download; decides the wording of the rejection notice.
pub enum DownloadOrigin {
    /// Grid card or list row action.
    Listing,
    /// Preview dialog header action.
    Preview,
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_dashboard`] to mutate [`DashboardState`].
pub enum DashboardAction {
    /// Start a new listing fetch, superseding any in flight.
    BeginListingFetch,
    /// Deliver the outcome of a listing fetch.
    ListingFetched {
        /// Generation the fetch was issued under.
        generation: u64,
        /// Ingested entries or the failure.
        result: Result<Vec<Entry>, ListingError>,
    },
    /// Replace the search text.
    SetSearchQuery(String),
    /// Switch between grid and list rendering.
    SetViewMode(ViewMode),
    /// Select a single entry.
    SelectEntry(EntryId),
    /// Flip a tree folder's expansion without touching the selection.
    ToggleExpanded(EntryId),
    /// Tree click: folders toggle expansion, and every node becomes the selection.
    ActivateTreeNode(EntryId),
    /// Open the preview dialog on an entry.
    PreviewEntry(EntryId),
    /// Close the preview dialog; the selection is kept.
    ClosePreview,
    /// The preview image failed to load.
    PreviewImageFailed,
    /// Save an entry through the browser.
    DownloadEntry {
        /// Entry to download.
        id: EntryId,
        /// Requesting surface.
        origin: DownloadOrigin,
    },
    /// Leave the dashboard.
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_dashboard`] for the host to execute.
pub enum DashboardEffect {
    /// Issue the listing request tagged with `generation`.
    FetchListing {
        /// Generation the result must carry back.
        generation: u64,
    },
    /// Show a transient notice.
    Notify(Notice),
    /// Save `url` locally as `file_name`.
    TriggerDownload {
        /// Retrieval address.
        url: String,
        /// Suggested local file name, verbatim.
        file_name: String,
    },
    /// Navigate to a client-side route.
    Navigate(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer failures; the runtime logs them and leaves state untouched.
pub enum ReducerError {
    /// The action referenced an id absent from the current listing.
    #[error("entry `{0}` not found")]
    EntryNotFound(EntryId),
    /// A listing result arrived for a superseded fetch.
    #[error("discarding listing for generation {received}; current generation is {current}")]
    StaleListing {
        /// Generation carried by the result.
        received: u64,
        /// Generation of the latest fetch.
        current: u64,
    },
    /// A preview-only action arrived while the dialog was closed.
    #[error("preview dialog is not open")]
    PreviewClosed,
}

fn lookup<'a>(state: &'a DashboardState, id: &EntryId) -> Result<&'a Entry, ReducerError> {
    state
        .entry(id)
        .ok_or_else(|| ReducerError::EntryNotFound(id.clone()))
}

fn toggle(state: &mut DashboardState, id: EntryId) {
    if !state.expanded.remove(&id) {
        state.expanded.insert(id);
    }
}

/// Applies a [`DashboardAction`] and collects the resulting side effects.
///
/// On error the state is left as it was before the call.
///
/// # Errors
///
/// Returns [`ReducerError::EntryNotFound`] for unknown ids, [`ReducerError::StaleListing`] for
/// superseded fetch results, and [`ReducerError::PreviewClosed`] for image failures reported
/// while no preview is open.
pub fn reduce_dashboard(
    state: &mut DashboardState,
    action: DashboardAction,
) -> Result<Vec<DashboardEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DashboardAction::BeginListingFetch => {
            state.listing_generation += 1;
            state.listing = ListingStatus::Loading;
            effects.push(DashboardEffect::FetchListing {
                generation: state.listing_generation,
            });
        }
        DashboardAction::ListingFetched { generation, result } => {
            if generation != state.listing_generation {
                return Err(ReducerError::StaleListing {
                    received: generation,
                    current: state.listing_generation,
                });
            }
            match result {
                Ok(entries) => {
                    state.entries = entries;
                    state.listing = ListingStatus::Loaded;
                    if state
                        .selected
                        .as_ref()
                        .is_some_and(|id| state.entry(id).is_none())
                    {
                        state.selected = None;
                        state.preview.open = false;
                    }
                    let entries = &state.entries;
                    state
                        .expanded
                        .retain(|id| find_entry(entries, id).is_some());
                }
                Err(err) => state.listing = ListingStatus::Failed(err.to_string()),
            }
        }
        DashboardAction::SetSearchQuery(query) => state.search_query = query,
        DashboardAction::SetViewMode(view_mode) => state.view_mode = view_mode,
        DashboardAction::SelectEntry(id) => {
            lookup(state, &id)?;
            state.selected = Some(id);
        }
        DashboardAction::ToggleExpanded(id) => {
            lookup(state, &id)?;
            toggle(state, id);
        }
        DashboardAction::ActivateTreeNode(id) => {
            if lookup(state, &id)?.is_folder() {
                toggle(state, id.clone());
            }
            state.selected = Some(id);
        }
        DashboardAction::PreviewEntry(id) => {
            if lookup(state, &id)?.retrievable_url().is_some() {
                state.selected = Some(id);
                state.preview.open = true;
                state.preview.image_fallback_applied = false;
            } else {
                effects.push(DashboardEffect::Notify(Notice::destructive(
                    "Cannot preview",
                    "This item cannot be previewed.",
                )));
            }
        }
        DashboardAction::ClosePreview => state.preview.open = false,
        DashboardAction::PreviewImageFailed => {
            if state.preview_target().is_none() {
                return Err(ReducerError::PreviewClosed);
            }
            if !state.preview.image_fallback_applied {
                state.preview.image_fallback_applied = true;
                effects.push(DashboardEffect::Notify(Notice::destructive(
                    "Image Load Error",
                    "Could not load image preview. It might be corrupted or missing.",
                )));
            }
        }
        DashboardAction::DownloadEntry { id, origin } => {
            let entry = lookup(state, &id)?;
            match entry.retrievable_url() {
                Some(url) => {
                    effects.push(DashboardEffect::Notify(Notice::info(
                        "Download started",
                        format!("Downloading {}...", entry.name),
                    )));
                    effects.push(DashboardEffect::TriggerDownload {
                        url: url.to_string(),
                        file_name: entry.name.clone(),
                    });
                }
                None => effects.push(DashboardEffect::Notify(match origin {
                    DownloadOrigin::Listing => Notice::destructive(
                        "Cannot download",
                        "This item is not a downloadable file.",
                    ),
                    DownloadOrigin::Preview => Notice::destructive(
                        "Download failed",
                        "File URL not available for download.",
                    ),
                })),
            }
        }
        DashboardAction::Logout => {
            effects.push(DashboardEffect::Notify(Notice::info(
                "Logged out",
                "You have been successfully logged out.",
            )));
            effects.push(DashboardEffect::Navigate(LOGOUT_ROUTE.to_string()));
        }
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use platform_host::{HostConfig, ListingItem, ListingResponse};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        listing::entries_from_items,
        model::{EmptyListing, EntryKind, NoticeTone},
    };

    fn ingest(names: &[&str]) -> Vec<Entry> {
        let items: Vec<ListingItem> = names
            .iter()
            .map(|name| ListingItem::Name((*name).to_string()))
            .collect();
        entries_from_items(&items, &HostConfig::default()).expect("entries")
    }

    fn loaded(names: &[&str]) -> DashboardState {
        let mut state = DashboardState::default();
        reduce_dashboard(&mut state, DashboardAction::BeginListingFetch).expect("begin");
        let generation = state.listing_generation;
        reduce_dashboard(
            &mut state,
            DashboardAction::ListingFetched {
                generation,
                result: Ok(ingest(names)),
            },
        )
        .expect("fetched");
        state
    }

    fn id(raw: &str) -> EntryId {
        EntryId(raw.to_string())
    }

    fn notice_titles(effects: &[DashboardEffect]) -> Vec<&str> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                DashboardEffect::Notify(notice) => Some(notice.title.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn begin_fetch_bumps_generation_and_requests_listing() {
        let mut state = DashboardState::default();

        let effects = reduce_dashboard(&mut state, DashboardAction::BeginListingFetch)
            .expect("begin");

        assert_eq!(state.listing, ListingStatus::Loading);
        assert!(state.listing.is_pending());
        assert_eq!(effects, vec![DashboardEffect::FetchListing { generation: 1 }]);
    }

    #[test]
    fn successful_fetch_classifies_files_and_folders() {
        let state = loaded(&["notes.txt", "Photos"]);

        assert_eq!(state.listing, ListingStatus::Loaded);
        assert_eq!(state.entries.len(), 2);
        assert_eq!(state.entries[0].kind, EntryKind::File);
        assert_eq!(state.entries[0].extension.as_deref(), Some("txt"));
        assert_eq!(state.entries[1].kind, EntryKind::Folder);
    }

    #[test]
    fn rejected_fetch_sets_error_and_keeps_entries_empty() {
        let mut state = DashboardState::default();
        reduce_dashboard(&mut state, DashboardAction::BeginListingFetch).expect("begin");
        let rejection = ListingResponse::from_json(r#"{"success":false,"message":"db down"}"#)
            .expect("parse")
            .into_items()
            .expect_err("rejected");

        reduce_dashboard(
            &mut state,
            DashboardAction::ListingFetched {
                generation: 1,
                result: Err(rejection),
            },
        )
        .expect("fetched");

        assert_eq!(state.listing.error(), Some("db down"));
        assert!(state.entries.is_empty());
    }

    #[test]
    fn failed_refetch_leaves_previous_entries_in_place() {
        let mut state = loaded(&["a.txt"]);
        reduce_dashboard(&mut state, DashboardAction::BeginListingFetch).expect("begin");

        reduce_dashboard(
            &mut state,
            DashboardAction::ListingFetched {
                generation: 2,
                result: Err(ListingError::HttpStatus(500)),
            },
        )
        .expect("fetched");

        assert_eq!(state.entries.len(), 1);
        assert_eq!(
            state.listing.error(),
            Some("Failed to fetch files: HTTP error! status: 500")
        );
    }

    #[test]
    fn superseded_fetch_results_are_discarded() {
        let mut state = DashboardState::default();
        reduce_dashboard(&mut state, DashboardAction::BeginListingFetch).expect("first");
        reduce_dashboard(&mut state, DashboardAction::BeginListingFetch).expect("second");
        let before = state.clone();

        let err = reduce_dashboard(
            &mut state,
            DashboardAction::ListingFetched {
                generation: 1,
                result: Ok(ingest(&["late.txt"])),
            },
        )
        .expect_err("stale");

        assert_eq!(
            err,
            ReducerError::StaleListing {
                received: 1,
                current: 2
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn search_and_view_mode_are_independent() {
        let mut state = loaded(&["report.pdf", "receipt.png", "image.jpg"]);

        reduce_dashboard(&mut state, DashboardAction::SetSearchQuery("repo".to_string()))
            .expect("search");
        let grid: Vec<String> = state.visible_entries().into_iter().map(|e| e.name).collect();
        reduce_dashboard(&mut state, DashboardAction::SetViewMode(ViewMode::List))
            .expect("view");
        let list: Vec<String> = state.visible_entries().into_iter().map(|e| e.name).collect();

        assert_eq!(grid, vec!["report.pdf"]);
        assert_eq!(grid, list);
        assert_eq!(state.view_mode, ViewMode::List);
    }

    #[test]
    fn non_matching_query_yields_no_results_state() {
        let mut state = loaded(&["report.pdf"]);
        reduce_dashboard(&mut state, DashboardAction::SetSearchQuery("zzz".to_string()))
            .expect("search");

        assert!(state.visible_entries().is_empty());
        assert_eq!(
            EmptyListing::for_query(&state.search_query),
            EmptyListing::NoResults
        );
    }

    #[test]
    fn tree_activation_toggles_folders_and_selects() {
        let mut state = loaded(&["Photos", "notes.txt"]);

        reduce_dashboard(&mut state, DashboardAction::ActivateTreeNode(id("Photos-0")))
            .expect("open");
        assert!(state.is_expanded(&id("Photos-0")));
        assert!(state.is_selected(&id("Photos-0")));

        reduce_dashboard(&mut state, DashboardAction::ActivateTreeNode(id("notes.txt-1")))
            .expect("file");
        assert!(state.is_expanded(&id("Photos-0")), "file clicks leave expansion alone");
        assert!(state.is_selected(&id("notes.txt-1")));

        reduce_dashboard(&mut state, DashboardAction::ActivateTreeNode(id("Photos-0")))
            .expect("close");
        assert!(!state.is_expanded(&id("Photos-0")));
    }

    #[test]
    fn expansion_and_selection_are_independently_settable() {
        let mut state = loaded(&["Photos", "Music"]);

        reduce_dashboard(&mut state, DashboardAction::ToggleExpanded(id("Music-1")))
            .expect("toggle");
        reduce_dashboard(&mut state, DashboardAction::SelectEntry(id("Photos-0")))
            .expect("select");

        assert!(state.is_expanded(&id("Music-1")));
        assert!(!state.is_expanded(&id("Photos-0")));
        assert!(state.is_selected(&id("Photos-0")));
    }

    #[test]
    fn unknown_ids_are_rejected_without_mutation() {
        let mut state = loaded(&["a.txt"]);
        let before = state.clone();

        let err = reduce_dashboard(&mut state, DashboardAction::SelectEntry(id("ghost-9")))
            .expect_err("missing");

        assert_eq!(err, ReducerError::EntryNotFound(id("ghost-9")));
        assert_eq!(state, before);
    }

    #[test]
    fn preview_with_url_opens_dialog_on_that_file() {
        let mut state = loaded(&["Photos", "photo.png"]);

        let effects = reduce_dashboard(&mut state, DashboardAction::PreviewEntry(id("photo.png-1")))
            .expect("preview");

        assert!(effects.is_empty());
        assert!(state.preview.open);
        assert_eq!(
            state.preview_target().map(|entry| entry.name.as_str()),
            Some("photo.png")
        );
    }

    #[test]
    fn preview_without_url_stays_closed_and_notifies() {
        let mut state = loaded(&["Photos"]);

        let effects = reduce_dashboard(&mut state, DashboardAction::PreviewEntry(id("Photos-0")))
            .expect("preview");

        assert!(!state.preview.open);
        assert_eq!(
            effects,
            vec![DashboardEffect::Notify(Notice::destructive(
                "Cannot preview",
                "This item cannot be previewed."
            ))]
        );
    }

    #[test]
    fn closing_preview_keeps_selection() {
        let mut state = loaded(&["a.pdf"]);
        reduce_dashboard(&mut state, DashboardAction::PreviewEntry(id("a.pdf-0")))
            .expect("preview");

        reduce_dashboard(&mut state, DashboardAction::ClosePreview).expect("close");

        assert!(!state.preview.open);
        assert!(state.is_selected(&id("a.pdf-0")));
    }

    #[test]
    fn image_failure_swaps_placeholder_exactly_once() {
        let mut state = loaded(&["broken.png"]);
        reduce_dashboard(&mut state, DashboardAction::PreviewEntry(id("broken.png-0")))
            .expect("preview");

        let first = reduce_dashboard(&mut state, DashboardAction::PreviewImageFailed)
            .expect("first failure");
        let second = reduce_dashboard(&mut state, DashboardAction::PreviewImageFailed)
            .expect("second failure");

        assert_eq!(notice_titles(&first), vec!["Image Load Error"]);
        assert!(second.is_empty());
        assert!(state.preview.image_fallback_applied);
    }

    #[test]
    fn reopening_preview_resets_the_image_fallback() {
        let mut state = loaded(&["broken.png"]);
        reduce_dashboard(&mut state, DashboardAction::PreviewEntry(id("broken.png-0")))
            .expect("preview");
        reduce_dashboard(&mut state, DashboardAction::PreviewImageFailed).expect("fail");
        reduce_dashboard(&mut state, DashboardAction::ClosePreview).expect("close");

        reduce_dashboard(&mut state, DashboardAction::PreviewEntry(id("broken.png-0")))
            .expect("reopen");

        assert!(!state.preview.image_fallback_applied);
    }

    #[test]
    fn image_failure_without_open_preview_is_an_error() {
        let mut state = loaded(&["a.png"]);
        assert_eq!(
            reduce_dashboard(&mut state, DashboardAction::PreviewImageFailed),
            Err(ReducerError::PreviewClosed)
        );
    }

    #[test]
    fn download_of_file_notifies_then_triggers_save() {
        let mut state = loaded(&["a b.txt"]);

        let effects = reduce_dashboard(
            &mut state,
            DashboardAction::DownloadEntry {
                id: id("a b.txt-0"),
                origin: DownloadOrigin::Listing,
            },
        )
        .expect("download");

        assert_eq!(
            effects,
            vec![
                DashboardEffect::Notify(Notice::info("Download started", "Downloading a b.txt...")),
                DashboardEffect::TriggerDownload {
                    url: "http://localhost:3000/uploads/a b.txt".to_string(),
                    file_name: "a b.txt".to_string(),
                },
            ]
        );
    }

    #[test]
    fn download_rejection_wording_depends_on_origin() {
        let mut state = loaded(&["Photos"]);

        let listing = reduce_dashboard(
            &mut state,
            DashboardAction::DownloadEntry {
                id: id("Photos-0"),
                origin: DownloadOrigin::Listing,
            },
        )
        .expect("listing");
        let preview = reduce_dashboard(
            &mut state,
            DashboardAction::DownloadEntry {
                id: id("Photos-0"),
                origin: DownloadOrigin::Preview,
            },
        )
        .expect("preview");

        assert_eq!(notice_titles(&listing), vec!["Cannot download"]);
        assert_eq!(notice_titles(&preview), vec!["Download failed"]);
        let DashboardEffect::Notify(notice) = &listing[0] else {
            panic!("expected notice");
        };
        assert_eq!(notice.tone, NoticeTone::Destructive);
    }

    #[test]
    fn refetch_drops_selection_and_expansion_for_vanished_entries() {
        let mut state = loaded(&["Photos", "a.png"]);
        reduce_dashboard(&mut state, DashboardAction::ActivateTreeNode(id("Photos-0")))
            .expect("activate");
        reduce_dashboard(&mut state, DashboardAction::PreviewEntry(id("a.png-1")))
            .expect("preview");
        reduce_dashboard(&mut state, DashboardAction::BeginListingFetch).expect("begin");
        let generation = state.listing_generation;

        reduce_dashboard(
            &mut state,
            DashboardAction::ListingFetched {
                generation,
                result: Ok(ingest(&["b.png"])),
            },
        )
        .expect("fetched");

        assert_eq!(state.selected, None);
        assert!(!state.preview.open);
        assert!(state.expanded.is_empty());
    }

    #[test]
    fn logout_notifies_and_navigates_home() {
        let mut state = DashboardState::default();

        let effects = reduce_dashboard(&mut state, DashboardAction::Logout).expect("logout");

        assert_eq!(
            effects,
            vec![
                DashboardEffect::Notify(Notice::info(
                    "Logged out",
                    "You have been successfully logged out."
                )),
                DashboardEffect::Navigate("/".to_string()),
            ]
        );
    }
}
