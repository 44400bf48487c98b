//! Dashboard state types and the pure queries the renderers derive from them.

use std::{collections::BTreeSet, fmt};

/// Extensions rendered inline as images by the preview dialog.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "svg", "webp"];
/// Extensions that get the document glyph in the tree.
pub const DOCUMENT_EXTENSIONS: [&str; 4] = ["pdf", "doc", "docx", "txt"];
/// Local image swapped in once when an image preview fails to load.
pub const PLACEHOLDER_IMAGE_SRC: &str = "/placeholder-image.png";
/// Size label shown for files whose listing carried no size.
pub const UNKNOWN_SIZE_LABEL: &str = "N/A";
/// Root breadcrumb segment.
pub const ROOT_BREADCRUMB: &str = "Files";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identifier unique within one ingested listing.
///
/// Derived from the entry name and its position, so it is not stable across re-fetches.
pub struct EntryId(pub String);

impl EntryId {
    /// Returns the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// File vs. folder classification.
pub enum EntryKind {
    /// Regular file.
    File,
    /// Folder.
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A file or folder shown in the dashboard.
pub struct Entry {
    /// Position-derived identifier.
    pub id: EntryId,
    /// Display name including extension.
    pub name: String,
    /// File or folder.
    pub kind: EntryKind,
    /// Lowercase suffix after the last `.`; files only.
    pub extension: Option<String>,
    /// Human-readable size label, when the listing supplied one.
    pub size: Option<String>,
    /// Absolute retrieval address; files only.
    pub url: Option<String>,
    /// Display-only path.
    pub path: String,
    /// Nested entries; always empty for files.
    pub children: Vec<Entry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Leading glyph family for a file.
pub enum FileGlyph {
    /// Image extension.
    Image,
    /// Document extension.
    Document,
    /// Anything else.
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How the preview dialog renders a file.
pub enum PreviewMode {
    /// Inline `<img>`.
    Image,
    /// Embedded PDF viewer.
    Document,
    /// Generic "no preview" fallback.
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic color of an entry glyph.
pub enum GlyphTone {
    /// Folders.
    Primary,
    /// Image files.
    Success,
    /// PDF files.
    Danger,
    /// Everything else.
    Muted,
}

impl Entry {
    /// Returns `true` for files.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Returns `true` for folders.
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    /// Returns `true` when the folder owns nested entries.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Retrieval address when the entry can be previewed or downloaded.
    pub fn retrievable_url(&self) -> Option<&str> {
        if self.is_file() {
            self.url.as_deref()
        } else {
            None
        }
    }

    fn extension_in(&self, set: &[&str]) -> bool {
        self.extension
            .as_deref()
            .is_some_and(|extension| set.iter().any(|known| extension.eq_ignore_ascii_case(known)))
    }

    fn is_pdf(&self) -> bool {
        self.extension_in(&["pdf"])
    }

    /// Glyph family used by the tree for files.
    pub fn file_glyph(&self) -> FileGlyph {
        if self.extension_in(&IMAGE_EXTENSIONS) {
            FileGlyph::Image
        } else if self.extension_in(&DOCUMENT_EXTENSIONS) {
            FileGlyph::Document
        } else {
            FileGlyph::Generic
        }
    }

    /// Glyph color shared by the tree, grid, and list renderers.
    pub fn glyph_tone(&self) -> GlyphTone {
        if self.is_folder() {
            GlyphTone::Primary
        } else if self.is_pdf() {
            GlyphTone::Danger
        } else if self.extension_in(&IMAGE_EXTENSIONS) {
            GlyphTone::Success
        } else {
            GlyphTone::Muted
        }
    }

    /// Rendering mode of the preview dialog for this entry.
    pub fn preview_mode(&self) -> PreviewMode {
        if self.extension_in(&IMAGE_EXTENSIONS) {
            PreviewMode::Image
        } else if self.is_pdf() {
            PreviewMode::Document
        } else {
            PreviewMode::Unsupported
        }
    }

    /// Type badge: uppercase extension or `FILE` for files, `FOLDER` for folders.
    pub fn badge_label(&self) -> String {
        match self.kind {
            EntryKind::Folder => "FOLDER".to_string(),
            EntryKind::File => match self.extension.as_deref() {
                Some(extension) if !extension.is_empty() => extension.to_uppercase(),
                _ => "FILE".to_string(),
            },
        }
    }

    /// Size column text; folders without a size show nothing.
    pub fn size_label(&self) -> String {
        match (&self.size, self.kind) {
            (Some(size), _) => size.clone(),
            (None, EntryKind::Folder) => String::new(),
            (None, EntryKind::File) => UNKNOWN_SIZE_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Main-panel rendering mode.
pub enum ViewMode {
    /// Card grid.
    #[default]
    Grid,
    /// Row list.
    List,
}

impl ViewMode {
    /// Stable token used by DOM attributes.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Lifecycle of the listing fetch.
pub enum ListingStatus {
    /// No fetch issued yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded.
    Loaded,
    /// The last fetch failed with a user-facing message.
    Failed(String),
}

impl ListingStatus {
    /// Returns `true` while the listing placeholders should show.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    /// Page-level error message, if the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Preview dialog state; the dialog targets the current selection.
pub struct PreviewState {
    /// Whether the dialog is open.
    pub open: bool,
    /// Whether the placeholder image already replaced a failed image load.
    pub image_fallback_applied: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why the main panel has nothing to show.
pub enum EmptyListing {
    /// The search query matched nothing.
    NoResults,
    /// The listing itself is empty.
    EmptyFolder,
}

impl EmptyListing {
    /// Classifies an empty result based solely on whether a query is active.
    pub fn for_query(query: &str) -> Self {
        if query.is_empty() {
            Self::EmptyFolder
        } else {
            Self::NoResults
        }
    }

    /// Secondary line of the empty-state block.
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoResults => "Try adjusting your search query",
            Self::EmptyFolder => "This folder is empty",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Visual weight of a transient notice.
pub enum NoticeTone {
    /// Informational confirmation.
    #[default]
    Info,
    /// Rejected or failed operation.
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Transient, non-blocking notification.
pub struct Notice {
    /// Short title.
    pub title: String,
    /// Supporting description.
    pub description: String,
    /// Visual weight.
    pub tone: NoticeTone,
}

impl Notice {
    /// Builds an informational notice.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tone: NoticeTone::Info,
        }
    }

    /// Builds a destructive notice.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tone: NoticeTone::Destructive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Full dashboard state owned by the runtime provider.
pub struct DashboardState {
    /// Ingested listing; replaced wholesale on each successful fetch.
    pub entries: Vec<Entry>,
    /// Fetch lifecycle.
    pub listing: ListingStatus,
    /// Generation of the most recently issued fetch.
    pub listing_generation: u64,
    /// Current search text.
    pub search_query: String,
    /// Main-panel rendering mode.
    pub view_mode: ViewMode,
    /// Single selected entry.
    pub selected: Option<EntryId>,
    /// Expanded tree folders.
    pub expanded: BTreeSet<EntryId>,
    /// Preview dialog state.
    pub preview: PreviewState,
}

impl DashboardState {
    /// Looks up an entry anywhere in the tree.
    pub fn entry(&self, id: &EntryId) -> Option<&Entry> {
        find_entry(&self.entries, id)
    }

    /// Returns the selected entry.
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected.as_ref().and_then(|id| self.entry(id))
    }

    /// Returns `true` when `id` is the current selection.
    pub fn is_selected(&self, id: &EntryId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Returns `true` when the tree folder `id` is expanded.
    pub fn is_expanded(&self, id: &EntryId) -> bool {
        self.expanded.contains(id)
    }

    /// Top-level entries matching the current search.
    pub fn visible_entries(&self) -> Vec<Entry> {
        filter_entries(&self.entries, &self.search_query)
    }

    /// Entry the preview dialog renders, if it should render at all.
    pub fn preview_target(&self) -> Option<&Entry> {
        if !self.preview.open {
            return None;
        }
        self.selected_entry()
            .filter(|entry| entry.retrievable_url().is_some())
    }

    /// Source the preview image should load from.
    pub fn preview_image_src(&self) -> Option<String> {
        let target = self.preview_target()?;
        if self.preview.image_fallback_applied {
            Some(PLACEHOLDER_IMAGE_SRC.to_string())
        } else {
            target.url.clone()
        }
    }

    /// Breadcrumb trail: the root plus the selected folder, if any.
    pub fn breadcrumb(&self) -> Vec<String> {
        let mut segments = vec![ROOT_BREADCRUMB.to_string()];
        if let Some(folder) = self.selected_entry().filter(|entry| entry.is_folder()) {
            segments.push(folder.name.clone());
        }
        segments
    }

    /// Status bar summary of the visible set and the selection.
    pub fn status_summary(&self) -> (String, String) {
        let count = self.visible_entries().len();
        let items = if count == 1 {
            "1 item".to_string()
        } else {
            format!("{count} items")
        };
        let selection = self
            .selected_entry()
            .map(|entry| format!("Selected: {}", entry.name))
            .unwrap_or_else(|| "Ready".to_string());
        (items, selection)
    }
}

/// Recursively finds an entry by id.
pub fn find_entry<'a>(entries: &'a [Entry], id: &EntryId) -> Option<&'a Entry> {
    entries.iter().find_map(|entry| {
        if &entry.id == id {
            Some(entry)
        } else {
            find_entry(&entry.children, id)
        }
    })
}

/// Keeps entries whose name contains `query` case-insensitively, preserving order.
///
/// An empty query keeps everything.
pub fn filter_entries(entries: &[Entry], query: &str) -> Vec<Entry> {
    if query.is_empty() {
        return entries.to_vec();
    }
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn file(name: &str, extension: &str) -> Entry {
        Entry {
            id: EntryId(format!("{name}-0")),
            name: name.to_string(),
            kind: EntryKind::File,
            extension: Some(extension.to_string()),
            size: None,
            url: Some(format!("http://localhost:3000/uploads/{name}")),
            path: format!("/uploads/{name}"),
            children: Vec::new(),
        }
    }

    fn folder(name: &str, children: Vec<Entry>) -> Entry {
        Entry {
            id: EntryId(format!("{name}-0")),
            name: name.to_string(),
            kind: EntryKind::Folder,
            extension: None,
            size: None,
            url: None,
            path: format!("/uploads/{name}"),
            children,
        }
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    #[test]
    fn filter_is_case_insensitive_substring_match() {
        let entries = vec![
            file("report.pdf", "pdf"),
            file("receipt.png", "png"),
            file("image.jpg", "jpg"),
        ];

        assert_eq!(names(&filter_entries(&entries, "repo")), vec!["report.pdf"]);
        assert_eq!(names(&filter_entries(&entries, "REPO")), vec!["report.pdf"]);
        assert_eq!(
            names(&filter_entries(&entries, "")),
            vec!["report.pdf", "receipt.png", "image.jpg"]
        );
        assert!(filter_entries(&entries, "zzz").is_empty());
    }

    #[test]
    fn empty_listing_depends_only_on_query_presence() {
        assert_eq!(EmptyListing::for_query("zzz"), EmptyListing::NoResults);
        assert_eq!(EmptyListing::for_query(""), EmptyListing::EmptyFolder);
        assert_eq!(
            EmptyListing::NoResults.message(),
            "Try adjusting your search query"
        );
    }

    #[test]
    fn glyphs_and_preview_modes_follow_extension_sets() {
        assert_eq!(file("a.PNG", "PNG").file_glyph(), FileGlyph::Image);
        assert_eq!(file("a.txt", "txt").file_glyph(), FileGlyph::Document);
        assert_eq!(file("a.zip", "zip").file_glyph(), FileGlyph::Generic);

        assert_eq!(file("a.webp", "webp").preview_mode(), PreviewMode::Image);
        assert_eq!(file("a.pdf", "pdf").preview_mode(), PreviewMode::Document);
        assert_eq!(file("a.docx", "docx").preview_mode(), PreviewMode::Unsupported);

        assert_eq!(file("a.pdf", "pdf").glyph_tone(), GlyphTone::Danger);
        assert_eq!(file("a.gif", "gif").glyph_tone(), GlyphTone::Success);
        assert_eq!(folder("Photos", Vec::new()).glyph_tone(), GlyphTone::Primary);
    }

    #[test]
    fn badge_and_size_labels() {
        let mut blank = file("notes.", "");
        assert_eq!(blank.badge_label(), "FILE");
        assert_eq!(blank.size_label(), UNKNOWN_SIZE_LABEL);
        blank.size = Some("2.4 MB".to_string());
        assert_eq!(blank.size_label(), "2.4 MB");

        assert_eq!(file("a.tar.gz", "gz").badge_label(), "GZ");
        assert_eq!(folder("Photos", Vec::new()).badge_label(), "FOLDER");
        assert_eq!(folder("Photos", Vec::new()).size_label(), "");
    }

    #[test]
    fn find_entry_descends_into_children() {
        let nested = file("deep.txt", "txt");
        let entries = vec![folder("Docs", vec![folder("Inner", vec![nested.clone()])])];

        assert_eq!(find_entry(&entries, &nested.id), Some(&nested));
        assert_eq!(find_entry(&entries, &EntryId("missing".to_string())), None);
    }

    #[test]
    fn breadcrumb_and_status_reflect_selection() {
        let mut state = DashboardState {
            entries: vec![folder("Photos", Vec::new()), file("notes.txt", "txt")],
            ..DashboardState::default()
        };
        assert_eq!(state.breadcrumb(), vec!["Files"]);
        assert_eq!(
            state.status_summary(),
            ("2 items".to_string(), "Ready".to_string())
        );

        state.selected = Some(EntryId("Photos-0".to_string()));
        assert_eq!(state.breadcrumb(), vec!["Files", "Photos"]);

        state.selected = Some(EntryId("notes.txt-0".to_string()));
        state.search_query = "notes".to_string();
        assert_eq!(state.breadcrumb(), vec!["Files"]);
        assert_eq!(
            state.status_summary(),
            ("1 item".to_string(), "Selected: notes.txt".to_string())
        );
    }

    #[test]
    fn preview_target_requires_open_dialog_and_url() {
        let mut state = DashboardState {
            entries: vec![file("photo.png", "png"), folder("Photos", Vec::new())],
            selected: Some(EntryId("photo.png-0".to_string())),
            ..DashboardState::default()
        };
        assert_eq!(state.preview_target(), None);

        state.preview.open = true;
        assert_eq!(
            state.preview_image_src().as_deref(),
            Some("http://localhost:3000/uploads/photo.png")
        );
        state.preview.image_fallback_applied = true;
        assert_eq!(
            state.preview_image_src().as_deref(),
            Some(PLACEHOLDER_IMAGE_SRC)
        );

        state.selected = Some(EntryId("Photos-0".to_string()));
        assert_eq!(state.preview_target(), None);
    }
}
