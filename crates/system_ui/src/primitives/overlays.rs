use super::*;

#[component]
/// Modal dialog with a dismissing backdrop.
///
/// `on_close` fires for the header dismiss button, a click on the backdrop outside the
/// panel, and the Escape key while the dialog is open.
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] footer: Option<ChildrenFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
        if ev.key() == "Escape" && open.get_untracked() {
            on_close.call(());
        }
    });
    on_cleanup(move || escape.remove());

    let children = store_value(children);
    let footer = store_value(footer);

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class="ui-modal-backdrop"
                data-ui-primitive="true"
                data-ui-kind="modal-backdrop"
                on:click=move |_| on_close.call(())
            >
                <div
                    class=merge_layout_class("ui-modal", layout_class)
                    role="dialog"
                    aria-modal="true"
                    aria-label=move || title.get()
                    data-ui-primitive="true"
                    data-ui-kind="modal"
                    data-ui-elevation=Elevation::Overlay.token()
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                >
                    <header data-ui-slot="header">
                        <h2 data-ui-slot="title" title=move || title.get()>
                            {move || title.get()}
                        </h2>
                        <IconButton
                            icon=IconName::Dismiss
                            size=ButtonSize::Sm
                            aria_label="Close"
                            on_click=Callback::new(move |_| on_close.call(()))
                        />
                    </header>
                    <div data-ui-slot="body">{children.with_value(|children| children())}</div>
                    {footer.with_value(|footer| {
                        footer
                            .as_ref()
                            .map(|footer| view! { <footer data-ui-slot="footer">{footer()}</footer> })
                    })}
                </div>
            </div>
        </Show>
    }
}

#[component]
/// Live region stacking transient toasts.
pub fn ToastRegion(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toast-region", layout_class)
            role="region"
            aria-live="polite"
            aria-label="Notifications"
            data-ui-primitive="true"
            data-ui-kind="toast-region"
        >
            {children()}
        </div>
    }
}

#[component]
/// Single transient notification with a title, description, and dismiss control.
pub fn Toast(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let role = if tone == TextTone::Danger { "alert" } else { "status" };
    view! {
        <div
            class="ui-toast"
            role=role
            data-ui-primitive="true"
            data-ui-kind="toast"
            data-ui-tone=tone.token()
            data-ui-elevation=Elevation::Overlay.token()
        >
            <div data-ui-slot="copy">
                <p data-ui-slot="title">{title}</p>
                <p data-ui-slot="description">{description}</p>
            </div>
            {on_dismiss.map(|on_dismiss| view! {
                <IconButton
                    icon=IconName::Dismiss
                    size=ButtonSize::Sm
                    aria_label="Dismiss notification"
                    on_click=on_dismiss
                />
            })}
        </div>
    }
}
