use super::*;

#[component]
/// Card surface used for grid tiles and page panels.
///
/// When `on_click` is supplied the card becomes an interactive option and reports its
/// selection state through `data-ui-selected` and `aria-selected`.
pub fn Card(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let interactive = on_click.is_some();
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            role=role
            title=move || title.get()
            tabindex=interactive.then_some(0)
            aria-selected=move || interactive.then(|| bool_token(selected.get()))
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
            data-ui-interactive=bool_token(interactive)
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| emit(on_click, ev)
        >
            {children()}
        </article>
    }
}

#[component]
/// Inline text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            title=move || title.get()
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Heading primitive.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <h2
            class=merge_layout_class("ui-heading", layout_class)
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </h2>
    }
}

#[component]
/// Compact badge primitive (type labels, counts).
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Empty-state block with optional glyph and title.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            role="status"
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Xl tone="secondary" /> })}
            {title.map(|title| view! { <p data-ui-slot="title">{title}</p> })}
            <div data-ui-slot="body">{children()}</div>
        </div>
    }
}

#[component]
/// Pane surface.
pub fn Pane(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-pane", layout_class)
            data-ui-primitive="true"
            data-ui-kind="pane"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            role=role
            aria-label=move || aria_label.get()
        >
            {children()}
        </section>
    }
}

#[component]
/// Pane header with title, optional supporting copy, and an actions slot.
pub fn PaneHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] meta: MaybeSignal<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let title_signal = Signal::derive(move || title.get());
    let meta_signal = Signal::derive(move || meta.get());
    view! {
        <header
            class=merge_layout_class("ui-pane-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="pane-header"
        >
            <div data-ui-slot="copy">
                <Show when=move || !title_signal.get().is_empty() fallback=|| ()>
                    <div data-ui-slot="title">{move || title_signal.get()}</div>
                </Show>
                <Show when=move || !meta_signal.get().is_empty() fallback=|| ()>
                    <div data-ui-slot="meta">{move || meta_signal.get()}</div>
                </Show>
            </div>
            <div data-ui-slot="actions">{children.map(|children| children())}</div>
        </header>
    }
}

#[component]
/// Inline statusbar item wrapper.
pub fn StatusBarItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-statusbar-item", layout_class)
            data-ui-primitive="true"
            data-ui-kind="statusbar-item"
        >
            {children()}
        </span>
    }
}

#[component]
/// List surface used by the list view.
pub fn ListSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-list-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="list-surface"
            role=role
            aria-label=move || aria_label.get()
        >
            {children()}
        </div>
    }
}

#[component]
/// Tree container.
pub fn Tree(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <ul
            class=merge_layout_class("ui-tree", layout_class)
            role="tree"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="tree"
        >
            {children()}
        </ul>
    }
}

#[component]
/// Tree item surface.
///
/// `depth` drives the left indent (`depth * 16 + 8` pixels) of the item's row.
pub fn TreeItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] depth: usize,
    /// Expansion state; `None` for leaves, which omit `aria-expanded`.
    #[prop(default = None)]
    expanded: Option<Signal<bool>>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    /// Nested group rendered below the row.
    #[prop(default = None)]
    group: Option<View>,
    children: Children,
) -> impl IntoView {
    let indent = format!("padding-left: {}px", tree_indent_px(depth));
    view! {
        <li
            class=merge_layout_class("ui-tree-item", layout_class)
            role="treeitem"
            aria-expanded=move || expanded.map(|expanded| bool_token(expanded.get()))
            aria-selected=move || bool_token(selected.get())
            data-ui-primitive="true"
            data-ui-kind="tree-item"
            data-ui-depth=depth
            data-ui-selected=move || bool_token(selected.get())
        >
            <div
                data-ui-slot="row"
                style=indent
                title=move || title.get()
                on:click=move |ev| emit(on_click, ev)
            >
                {children()}
            </div>
            {group.map(|group| view! { <ul role="group" data-ui-slot="group">{group}</ul> })}
        </li>
    }
}

/// Left indent in pixels for a tree row at `depth`.
pub(crate) const fn tree_indent_px(depth: usize) -> usize {
    depth * 16 + 8
}

#[component]
/// Framed region for preview content.
pub fn PreviewFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] mode: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-preview-frame", layout_class)
            data-ui-primitive="true"
            data-ui-kind="preview-frame"
            data-ui-mode=mode
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::tree_indent_px;

    #[test]
    fn tree_indent_grows_sixteen_pixels_per_level() {
        assert_eq!(tree_indent_px(0), 8);
        assert_eq!(tree_indent_px(1), 24);
        assert_eq!(tree_indent_px(3), 56);
    }
}
