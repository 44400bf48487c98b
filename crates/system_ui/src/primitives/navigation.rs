use super::*;

#[component]
/// Application header bar.
pub fn MenuBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    #[prop(default = LayoutPadding::Sm)] padding: LayoutPadding,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-menubar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="menubar"
            data-ui-variant="standard"
            data-ui-gap=gap.token()
            data-ui-padding=padding.token()
            aria-label=aria_label
        >
            {children()}
        </header>
    }
}

#[component]
/// Toolbar row for search and view controls.
pub fn ToolBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    #[prop(default = LayoutPadding::Sm)] padding: LayoutPadding,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toolbar", layout_class)
            role="toolbar"
            data-ui-primitive="true"
            data-ui-kind="toolbar"
            data-ui-variant="standard"
            data-ui-gap=gap.token()
            data-ui-padding=padding.token()
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Footer status bar.
pub fn StatusBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-statusbar", layout_class)
            role="status"
            data-ui-primitive="true"
            data-ui-kind="statusbar"
            data-ui-variant="standard"
            data-ui-gap=gap.token()
        >
            {children()}
        </footer>
    }
}

#[component]
/// Breadcrumb trail; the last segment is marked as the current location.
pub fn Breadcrumb(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] segments: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-breadcrumb", layout_class)
            aria-label="Breadcrumb"
            data-ui-primitive="true"
            data-ui-kind="breadcrumb"
        >
            <ol>
                {move || {
                    let segments = segments.get();
                    let last = segments.len().saturating_sub(1);
                    segments
                        .into_iter()
                        .enumerate()
                        .map(|(index, segment)| {
                            let current = index == last;
                            view! {
                                <li
                                    data-ui-slot="segment"
                                    aria-current=current.then_some("location")
                                >
                                    {(index > 0).then(|| view! {
                                        <Icon icon=IconName::ChevronRight size=IconSize::Xs />
                                    })}
                                    <span>{segment}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>
        </nav>
    }
}
