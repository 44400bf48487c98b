use leptos::*;
use system_ui::{
    Badge, ButtonSize, Card, Cluster, EmptyState, Grid, Icon, IconButton, IconName, IconSize,
    LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, ListSurface, Stack, Text, TextRole,
    TextTone,
};

use super::{entry_icon, glyph_tone_token};
use crate::{
    model::{EmptyListing, Entry, EntryId, ViewMode},
    reducer::{DashboardAction, DownloadOrigin},
    runtime_context::{use_dashboard_runtime, DashboardRuntimeContext},
};

#[component]
/// Main listing panel: filtered entries in the active view mode, or an empty state.
pub(super) fn FileListing() -> impl IntoView {
    let runtime = use_dashboard_runtime();
    let state = runtime.state;
    let visible = create_memo(move |_| state.with(|state| state.visible_entries()));
    let view_mode = create_memo(move |_| state.with(|state| state.view_mode));
    let empty =
        create_memo(move |_| state.with(|state| EmptyListing::for_query(&state.search_query)));

    move || {
        let entries = visible.get();
        if entries.is_empty() {
            return view! {
                <EmptyState icon=IconName::Folder title="No files found">
                    <Text tone=TextTone::Secondary>{move || empty.get().message()}</Text>
                </EmptyState>
            }
            .into_view();
        }

        match view_mode.get() {
            ViewMode::Grid => view! {
                <Grid layout_class="file-grid" role="listbox" aria_label="Files">
                    {entries
                        .into_iter()
                        .map(|entry| grid_card(runtime, entry))
                        .collect_view()}
                </Grid>
            }
            .into_view(),
            ViewMode::List => view! {
                <ListSurface layout_class="file-list" role="listbox" aria_label="Files">
                    {entries
                        .into_iter()
                        .map(|entry| list_row(runtime, entry))
                        .collect_view()}
                </ListSurface>
            }
            .into_view(),
        }
    }
}

fn is_selected(runtime: DashboardRuntimeContext, id: &EntryId) -> Signal<bool> {
    let id = id.clone();
    let state = runtime.state;
    create_memo(move |_| state.with(|state| state.is_selected(&id))).into()
}

fn entry_glyph(entry: &Entry, size: IconSize) -> View {
    let icon = entry_icon(entry, false);
    let tone = if entry.is_folder() {
        "accent"
    } else {
        glyph_tone_token(entry.glyph_tone())
    };
    view! { <Icon icon size tone /> }.into_view()
}

#[derive(Debug, Clone, PartialEq)]
/// One per-entry action button.
pub(crate) struct FileActionSpec {
    pub icon: IconName,
    pub title: &'static str,
    pub aria_label: String,
    pub action: DashboardAction,
}

/// Preview and download actions for an entry; folders get none.
pub(crate) fn file_action_specs(entry: &Entry) -> Vec<FileActionSpec> {
    if !entry.is_file() {
        return Vec::new();
    }
    vec![
        FileActionSpec {
            icon: IconName::Eye,
            title: "Preview",
            aria_label: format!("Preview {}", entry.name),
            action: DashboardAction::PreviewEntry(entry.id.clone()),
        },
        FileActionSpec {
            icon: IconName::Download,
            title: "Download",
            aria_label: format!("Download {}", entry.name),
            action: DashboardAction::DownloadEntry {
                id: entry.id.clone(),
                origin: DownloadOrigin::Listing,
            },
        },
    ]
}

/// Dispatches `action` without letting the click reach the enclosing card or row.
fn isolated_click(
    runtime: DashboardRuntimeContext,
    action: DashboardAction,
) -> Callback<ev::MouseEvent> {
    Callback::new(move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(action.clone());
    })
}

fn file_actions(runtime: DashboardRuntimeContext, entry: &Entry) -> Option<View> {
    let specs = file_action_specs(entry);
    if specs.is_empty() {
        return None;
    }
    let buttons = specs
        .into_iter()
        .map(|spec| {
            let FileActionSpec {
                icon,
                title,
                aria_label,
                action,
            } = spec;
            let on_click = isolated_click(runtime, action);
            view! {
                <IconButton icon size=ButtonSize::Sm aria_label title on_click />
            }
        })
        .collect_view();

    Some(
        view! {
            <Cluster gap=LayoutGap::Sm justify=LayoutJustify::End ui_slot="actions">
                {buttons}
            </Cluster>
        }
        .into_view(),
    )
}

fn select_callback(runtime: DashboardRuntimeContext, id: EntryId) -> Callback<ev::MouseEvent> {
    Callback::new(move |_| runtime.dispatch_action(DashboardAction::SelectEntry(id.clone())))
}

fn grid_card(runtime: DashboardRuntimeContext, entry: Entry) -> View {
    let selected = is_selected(runtime, &entry.id);
    let actions = file_actions(runtime, &entry);
    let glyph = entry_glyph(&entry, IconSize::Xl);
    let badge = entry.badge_label();
    let size = entry.is_file().then(|| entry.size_label());
    let on_click = select_callback(runtime, entry.id.clone());
    let name = entry.name;
    let card_title = name.clone();
    let name_title = name.clone();

    view! {
        <Card layout_class="file-card" role="option" title=card_title selected on_click>
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                {glyph}
                <Text layout_class="file-card-name" title=name_title>
                    {name}
                </Text>
                <Cluster gap=LayoutGap::Sm justify=LayoutJustify::Center>
                    <Badge>{badge}</Badge>
                    {size.map(|size| {
                        view! { <Text role=TextRole::Caption tone=TextTone::Secondary>{size}</Text> }
                    })}
                </Cluster>
                {actions}
            </Stack>
        </Card>
    }
    .into_view()
}

fn list_row(runtime: DashboardRuntimeContext, entry: Entry) -> View {
    let selected = is_selected(runtime, &entry.id);
    let actions = file_actions(runtime, &entry);
    let glyph = entry_glyph(&entry, IconSize::Md);
    let badge = entry.badge_label();
    let size = entry.size_label();
    let on_click = select_callback(runtime, entry.id.clone());
    let name = entry.name;
    let path = entry.path;
    let row_title = path.clone();

    view! {
        <Card
            layout_class="file-row"
            role="option"
            padding=LayoutPadding::Sm
            title=row_title
            selected
            on_click
        >
            <Cluster gap=LayoutGap::Md justify=LayoutJustify::Between>
                <Cluster gap=LayoutGap::Sm>
                    {glyph}
                    <Stack gap=LayoutGap::Sm>
                        <Text layout_class="file-row-name">{name}</Text>
                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                            {path}
                        </Text>
                    </Stack>
                </Cluster>
                <Cluster gap=LayoutGap::Sm justify=LayoutJustify::End>
                    <Badge>{badge}</Badge>
                    <Text role=TextRole::Caption tone=TextTone::Secondary layout_class="file-row-size">
                        {size}
                    </Text>
                    {actions}
                </Cluster>
            </Cluster>
        </Card>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::EntryKind;

    fn entry(name: &str, kind: EntryKind) -> Entry {
        Entry {
            id: EntryId(format!("{name}-0")),
            name: name.to_string(),
            kind,
            extension: None,
            size: None,
            url: None,
            path: format!("/uploads/{name}"),
            children: Vec::new(),
        }
    }

    #[test]
    fn folders_render_without_action_buttons() {
        assert!(file_action_specs(&entry("Photos", EntryKind::Folder)).is_empty());
    }

    #[test]
    fn files_offer_preview_then_download() {
        let file = entry("report.pdf", EntryKind::File);
        let specs = file_action_specs(&file);

        assert_eq!(
            specs,
            vec![
                FileActionSpec {
                    icon: IconName::Eye,
                    title: "Preview",
                    aria_label: "Preview report.pdf".to_string(),
                    action: DashboardAction::PreviewEntry(file.id.clone()),
                },
                FileActionSpec {
                    icon: IconName::Download,
                    title: "Download",
                    aria_label: "Download report.pdf".to_string(),
                    action: DashboardAction::DownloadEntry {
                        id: file.id.clone(),
                        origin: DownloadOrigin::Listing,
                    },
                },
            ]
        );
    }

    #[test]
    fn action_buttons_never_target_selection() {
        let file = entry("notes.txt", EntryKind::File);
        assert!(file_action_specs(&file)
            .iter()
            .all(|spec| !matches!(spec.action, DashboardAction::SelectEntry(_))));
    }
}
