//! Dashboard UI composition.

mod file_tree;
mod file_views;
mod preview;

use leptos::*;
use system_ui::{
    AppShell, Breadcrumb, Button, ButtonSize, ButtonVariant, Cluster, FieldVariant, Heading,
    Icon, IconButton, IconName, IconSize, LayoutGap, LayoutJustify, MenuBar, Pane, PaneHeader,
    SegmentedControl, SegmentedControlOption, StatusBar, StatusBarItem, SurfaceVariant, Text,
    TextField, TextRole, TextTone, ToolBar,
};

use self::{file_tree::FileTree, file_views::FileListing, preview::FilePreview};
use crate::{
    model::{Entry, FileGlyph, GlyphTone, ListingStatus, ViewMode},
    reducer::DashboardAction,
    runtime_context::use_dashboard_runtime,
};

/// Icon for an entry; folders open when expanded.
pub(crate) fn entry_icon(entry: &Entry, expanded: bool) -> IconName {
    if entry.is_folder() {
        return if expanded {
            IconName::FolderOpen
        } else {
            IconName::Folder
        };
    }
    match entry.file_glyph() {
        FileGlyph::Image => IconName::Image,
        FileGlyph::Document => IconName::DocumentText,
        FileGlyph::Generic => IconName::Document,
    }
}

pub(crate) fn glyph_tone_token(tone: GlyphTone) -> &'static str {
    match tone {
        GlyphTone::Primary => "primary",
        GlyphTone::Success => "success",
        GlyphTone::Danger => "danger",
        GlyphTone::Muted => "secondary",
    }
}

#[component]
/// Full dashboard: header, explorer sidebar, listing panel, status bar, and preview dialog.
///
/// Must render inside [`crate::DashboardProvider`].
pub fn DashboardShell() -> impl IntoView {
    let runtime = use_dashboard_runtime();
    let state = runtime.state;
    let listing = create_memo(move |_| state.with(|state| state.listing.clone()));

    view! {
        <AppShell layout_class="dashboard">
            <DashboardHeader />
            <div class="dashboard-body">
                <aside class="dashboard-sidebar">
                    <Pane variant=SurfaceVariant::Muted aria_label="File Explorer">
                        <PaneHeader title="File Explorer" />
                        {move || match listing.get() {
                            ListingStatus::Idle | ListingStatus::Loading => view! {
                                <Text tone=TextTone::Secondary>"Loading file tree..."</Text>
                            }
                            .into_view(),
                            ListingStatus::Failed(message) => view! {
                                <Text tone=TextTone::Danger>{format!("Error: {message}")}</Text>
                            }
                            .into_view(),
                            ListingStatus::Loaded => view! { <FileTree /> }.into_view(),
                        }}
                    </Pane>
                </aside>
                <main class="dashboard-main">
                    <DashboardToolBar />
                    <Breadcrumb segments=Signal::derive(move || state.with(|state| state.breadcrumb())) />
                    {move || match listing.get() {
                        ListingStatus::Idle | ListingStatus::Loading => view! {
                            <div class="dashboard-placeholder" role="status">
                                <Text>"Fetching files from server..."</Text>
                            </div>
                        }
                        .into_view(),
                        ListingStatus::Failed(message) => view! {
                            <div class="dashboard-placeholder" role="alert">
                                <Text tone=TextTone::Danger>{message}</Text>
                            </div>
                        }
                        .into_view(),
                        ListingStatus::Loaded => view! { <FileListing /> }.into_view(),
                    }}
                </main>
            </div>
            <DashboardStatusBar />
            <FilePreview />
        </AppShell>
    }
}

#[component]
fn DashboardHeader() -> impl IntoView {
    let runtime = use_dashboard_runtime();

    view! {
        <MenuBar layout_class="dashboard-header">
            <Cluster gap=LayoutGap::Sm>
                <span class="brand-mark">
                    <Icon icon=IconName::DocumentText size=IconSize::Md />
                </span>
                <Heading role=TextRole::Title>"File Manager"</Heading>
            </Cluster>
            <Cluster gap=LayoutGap::Sm justify=LayoutJustify::End>
                // Upload, Settings, and User are placeholders without behavior.
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    leading_icon=IconName::Upload
                >
                    "Upload"
                </Button>
                <IconButton icon=IconName::Settings size=ButtonSize::Sm aria_label="Settings" />
                <IconButton icon=IconName::Person size=ButtonSize::Sm aria_label="Account" />
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    leading_icon=IconName::SignOut
                    on_click=Callback::new(move |_| runtime.dispatch_action(DashboardAction::Logout))
                >
                    "Logout"
                </Button>
            </Cluster>
        </MenuBar>
    }
}

#[component]
fn DashboardToolBar() -> impl IntoView {
    let runtime = use_dashboard_runtime();
    let state = runtime.state;
    let query = Signal::derive(move || state.with(|state| state.search_query.clone()));
    let view_mode = create_memo(move |_| state.with(|state| state.view_mode));
    let set_view_mode = move |mode: ViewMode| -> Callback<ev::MouseEvent> {
        Callback::new(move |_| runtime.dispatch_action(DashboardAction::SetViewMode(mode)))
    };

    view! {
        <ToolBar layout_class="dashboard-toolbar" aria_label="Search and view">
            <TextField
                variant=FieldVariant::Search
                layout_class="dashboard-search"
                placeholder="Search files..."
                aria_label="Search files"
                autocomplete="off"
                value=query
                on_input=Callback::new(move |ev: ev::Event| {
                    runtime.dispatch_action(DashboardAction::SetSearchQuery(event_target_value(&ev)))
                })
            />
            <SegmentedControl aria_label="View mode">
                <SegmentedControlOption
                    icon=IconName::GridView
                    aria_label="Grid view"
                    title="Grid view"
                    selected=Signal::derive(move || view_mode.get() == ViewMode::Grid)
                    on_click=set_view_mode(ViewMode::Grid)
                />
                <SegmentedControlOption
                    icon=IconName::ListView
                    aria_label="List view"
                    title="List view"
                    selected=Signal::derive(move || view_mode.get() == ViewMode::List)
                    on_click=set_view_mode(ViewMode::List)
                />
            </SegmentedControl>
        </ToolBar>
    }
}

#[component]
fn DashboardStatusBar() -> impl IntoView {
    let state = use_dashboard_runtime().state;
    let summary = create_memo(move |_| state.with(|state| state.status_summary()));

    view! {
        <StatusBar layout_class="dashboard-statusbar">
            <StatusBarItem>{move || summary.get().0}</StatusBarItem>
            <StatusBarItem>{move || summary.get().1}</StatusBarItem>
        </StatusBar>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{EntryId, EntryKind};

    fn entry(name: &str, kind: EntryKind, extension: Option<&str>) -> Entry {
        Entry {
            id: EntryId(format!("{name}-0")),
            name: name.to_string(),
            kind,
            extension: extension.map(str::to_string),
            size: None,
            url: None,
            path: format!("/uploads/{name}"),
            children: Vec::new(),
        }
    }

    #[test]
    fn folder_icon_reflects_expansion() {
        let folder = entry("Photos", EntryKind::Folder, None);
        assert_eq!(entry_icon(&folder, false), IconName::Folder);
        assert_eq!(entry_icon(&folder, true), IconName::FolderOpen);
    }

    #[test]
    fn file_icons_follow_glyph_family() {
        assert_eq!(
            entry_icon(&entry("a.svg", EntryKind::File, Some("svg")), false),
            IconName::Image
        );
        assert_eq!(
            entry_icon(&entry("a.doc", EntryKind::File, Some("doc")), false),
            IconName::DocumentText
        );
        assert_eq!(
            entry_icon(&entry("a.bin", EntryKind::File, Some("bin")), false),
            IconName::Document
        );
    }

    #[test]
    fn glyph_tones_map_to_ui_tokens() {
        assert_eq!(glyph_tone_token(GlyphTone::Danger), "danger");
        assert_eq!(glyph_tone_token(GlyphTone::Muted), "secondary");
    }
}
