use super::*;

#[component]
/// Full-height application frame: header, body, and footer stacked vertically.
pub fn AppShell(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = SurfaceVariant::Muted)] variant: SurfaceVariant,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-app-shell", layout_class)
            data-ui-primitive="true"
            data-ui-kind="app-shell"
            data-ui-variant=variant.token()
            data-ui-elevation=Elevation::Flat.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Page that centers a single column of content (landing and auth screens).
pub fn CenteredPage(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = LayoutPadding::Lg)] padding: LayoutPadding,
    children: Children,
) -> impl IntoView {
    view! {
        <main
            class=merge_layout_class("ui-centered-page", layout_class)
            data-ui-primitive="true"
            data-ui-kind="centered-page"
            data-ui-padding=padding.token()
        >
            {children()}
        </main>
    }
}
