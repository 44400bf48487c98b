use leptos::*;
use system_ui::{Icon, IconName, IconSize, Text, TextRole, TextTone, Tree, TreeItem};

use super::{entry_icon, glyph_tone_token};
use crate::{
    model::Entry,
    reducer::DashboardAction,
    runtime_context::{use_dashboard_runtime, DashboardRuntimeContext},
};

#[component]
/// Sidebar tree over the full listing, independent of the search query.
pub(super) fn FileTree() -> impl IntoView {
    let runtime = use_dashboard_runtime();
    let state = runtime.state;
    let entries = create_memo(move |_| state.with(|state| state.entries.clone()));

    view! {
        <Tree layout_class="file-tree" aria_label="File Explorer">
            {move || tree_rows(runtime, entries.get(), 0)}
        </Tree>
    }
}

fn tree_rows(runtime: DashboardRuntimeContext, entries: Vec<Entry>, depth: usize) -> View {
    entries
        .into_iter()
        .map(|entry| tree_node(runtime, entry, depth))
        .collect_view()
}

fn tree_node(runtime: DashboardRuntimeContext, entry: Entry, depth: usize) -> View {
    let state = runtime.state;
    let id = entry.id.clone();
    let selected = {
        let id = id.clone();
        create_memo(move |_| state.with(|state| state.is_selected(&id)))
    };
    let expanded = {
        let id = id.clone();
        create_memo(move |_| state.with(|state| state.is_expanded(&id)))
    };

    let is_folder = entry.is_folder();
    let has_children = entry.has_children();
    let tone = if is_folder {
        "accent"
    } else {
        glyph_tone_token(entry.glyph_tone())
    };
    let icon_entry = entry.clone();
    let icon = move || {
        let icon = entry_icon(&icon_entry, expanded.get());
        view! { <Icon icon size=IconSize::Sm tone /> }
    };

    let Entry {
        name,
        size,
        path,
        children,
        ..
    } = entry;
    let group = has_children.then(|| {
        (move || expanded.get().then(|| tree_rows(runtime, children.clone(), depth + 1)))
            .into_view()
    });
    let on_click = Callback::new(move |_| {
        runtime.dispatch_action(DashboardAction::ActivateTreeNode(id.clone()))
    });

    view! {
        <TreeItem
            layout_class="file-tree-item"
            depth
            expanded=is_folder.then_some(expanded.into())
            selected=selected
            title=path
            on_click
            group
        >
            {if has_children {
                view! {
                    <span class="file-tree-chevron" aria-hidden="true">
                        {move || {
                            let chevron = if expanded.get() {
                                IconName::ChevronDown
                            } else {
                                IconName::ChevronRight
                            };
                            view! { <Icon icon=chevron size=IconSize::Xs /> }
                        }}
                    </span>
                }
                .into_view()
            } else {
                view! { <span class="file-tree-chevron" aria-hidden="true"></span> }.into_view()
            }}
            {icon}
            <Text layout_class="file-tree-name">{name}</Text>
            {size.map(|size| {
                view! {
                    <Text role=TextRole::Caption tone=TextTone::Secondary layout_class="file-tree-size">
                        {size}
                    </Text>
                }
            })}
        </TreeItem>
    }
    .into_view()
}
