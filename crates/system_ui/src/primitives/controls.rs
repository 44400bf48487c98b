use super::*;

#[component]
/// Shared button primitive with standardized states, icon slots, and semantic shape tokens.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = ButtonShape::Standard)] shape: ButtonShape,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// `button` unless the button submits its enclosing form.
    #[prop(default = "button")]
    button_type: &'static str,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_pressed: MaybeSignal<bool>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let icon_size = size.icon_size();
    view! {
        <button
            type=button_type
            class=merge_layout_class("ui-button", layout_class)
            aria-label=move || aria_label.get()
            aria-pressed=move || aria_pressed.get()
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-shape=shape.token()
            data-ui-state=move || if selected.get() { "selected" } else { "idle" }
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| emit(on_click, ev)
        >
            {leading_icon.map(|icon| view! { <Icon icon size=icon_size /> })}
            {children()}
            {trailing_icon.map(|icon| view! { <Icon icon size=icon_size /> })}
        </button>
    }
}

#[component]
/// Icon-only button for row actions, header actions, and dismiss controls.
pub fn IconButton(
    icon: IconName,
    #[prop(default = ButtonVariant::Icon)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = ButtonShape::Circle)] shape: ButtonShape,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=move || aria_label.get()
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-shape=shape.token()
            data-ui-pressed=move || bool_token(pressed.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| emit(on_click, ev)
        >
            <Icon icon size=size.icon_size() />
        </button>
    }
}

#[component]
/// Pill-style segmented control container.
pub fn SegmentedControl(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-segmented-control", layout_class)
            role="group"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="segmented-control"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Segmented control option button.
pub fn SegmentedControlOption(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-segmented-control-option", layout_class)
            aria-label=move || aria_label.get()
            aria-pressed=move || selected.get()
            title=move || title.get()
            data-ui-primitive="true"
            data-ui-kind="segmented-control-option"
            data-ui-variant=ButtonVariant::Segmented.token()
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| emit(on_click, ev)
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children.map(|children| children())}
        </button>
    }
}

#[component]
/// Labeled field wrapper that keeps copy and control structure on the primitive layer.
pub fn FieldGroup(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <label
            class=merge_layout_class("ui-field-group", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-group"
        >
            <span data-ui-slot="copy">
                {title.map(|title| view! { <span data-ui-slot="title">{title}</span> })}
                {description.map(|description| view! { <span data-ui-slot="description">{description}</span> })}
            </span>
            <span data-ui-slot="control">{children()}</span>
        </label>
    }
}

#[component]
/// Text input primitive.
///
/// The [`FieldVariant::Search`] variant renders a leading search glyph inside the field frame.
pub fn TextField(
    #[prop(default = FieldVariant::Standard)] variant: FieldVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional, into)] input_type: MaybeSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    let search = variant == FieldVariant::Search;
    view! {
        <span
            class=merge_layout_class("ui-field-frame", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-frame"
            data-ui-variant=variant.token()
        >
            {search.then(|| view! { <Icon icon=IconName::Search size=IconSize::Sm /> })}
            <input
                class="ui-field"
                id=id
                name=name
                placeholder=placeholder
                aria-label=aria_label
                autocomplete=autocomplete
                required=required
                type=move || {
                    let input_type = input_type.get();
                    if input_type.is_empty() {
                        if search { "search".to_string() } else { "text".to_string() }
                    } else {
                        input_type
                    }
                }
                prop:value=move || value.get()
                disabled=move || disabled.get()
                data-ui-primitive="true"
                data-ui-kind="text-field"
                data-ui-variant=variant.token()
                data-ui-disabled=move || bool_token(disabled.get())
                on:input=move |ev| emit(on_input, ev)
                on:keydown=move |ev| emit(on_keydown, ev)
            />
        </span>
    }
}
