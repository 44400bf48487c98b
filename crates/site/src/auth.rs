//! Simulated sign-in and sign-up screens.
//!
//! No request leaves the browser: submitting waits [`AUTH_DELAY`], raises a notice, and routes to
//! the dashboard.

use std::time::Duration;

use file_manager_runtime::{use_notices, Notice};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, A};
use system_ui::{
    Button, ButtonVariant, Card, CenteredPage, Cluster, FieldGroup, Heading, Icon, IconButton,
    IconName, IconSize, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, Stack, Text,
    TextField, TextRole, TextTone,
};

/// Simulated round-trip before a submit succeeds.
pub const AUTH_DELAY: Duration = Duration::from_millis(1000);
/// Route reached after a successful submit.
pub const AUTH_REDIRECT: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which simulated auth screen to render.
pub enum AuthMode {
    /// Returning-user sign-in.
    Login,
    /// New-account sign-up with an extra name field.
    Signup,
}

impl AuthMode {
    /// Page heading above the form card.
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Login => "Welcome Back",
            Self::Signup => "Create Account",
        }
    }

    /// Supporting line under the heading.
    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::Login => "Sign in to access your files",
            Self::Signup => "Sign up to start organizing your files",
        }
    }

    /// Title inside the form card.
    pub const fn form_title(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Signup => "Sign Up",
        }
    }

    /// Description inside the form card.
    pub const fn form_description(self) -> &'static str {
        match self {
            Self::Login => "Enter your credentials to access your account",
            Self::Signup => "Enter your details to create your account",
        }
    }

    /// Submit button label, reflecting an in-flight submit.
    pub const fn submit_label(self, pending: bool) -> &'static str {
        match (self, pending) {
            (Self::Login, false) => "Sign In",
            (Self::Login, true) => "Signing in...",
            (Self::Signup, false) => "Create Account",
            (Self::Signup, true) => "Creating account...",
        }
    }

    /// Notice raised once the simulated submit completes.
    pub fn success_notice(self) -> Notice {
        match self {
            Self::Login => Notice::info(
                "Welcome back!",
                "Successfully logged in to your file manager.",
            ),
            Self::Signup => Notice::info(
                "Account created!",
                "Your file manager account is ready to use.",
            ),
        }
    }

    /// `autocomplete` token for the password field.
    pub const fn password_autocomplete(self) -> &'static str {
        match self {
            Self::Login => "current-password",
            Self::Signup => "new-password",
        }
    }

    /// Prompt and link target for switching to the other screen.
    pub const fn switch_prompt(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Login => ("Don't have an account? ", "Sign up", "/signup"),
            Self::Signup => ("Already have an account? ", "Sign in", "/login"),
        }
    }
}

/// Input `type` for the password field given its visibility toggle.
pub const fn password_input_type(visible: bool) -> &'static str {
    if visible {
        "text"
    } else {
        "password"
    }
}

#[component]
/// Sign-in or sign-up page; submitting never leaves the browser.
pub fn AuthPage(mode: AuthMode) -> impl IntoView {
    let notices = use_notices();
    let navigate = use_navigate();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let show_password = create_rw_signal(false);
    let pending = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        let navigate = navigate.clone();
        set_timeout(
            move || {
                // The page may have been left while the timer ran.
                if pending.try_set(false).is_some() {
                    return;
                }
                notices.notify(mode.success_notice());
                navigate(AUTH_REDIRECT, NavigateOptions::default());
            },
            AUTH_DELAY,
        );
    };

    let (switch_text, switch_link, switch_href) = mode.switch_prompt();

    view! {
        <CenteredPage layout_class="auth-page">
            <Stack gap=LayoutGap::Lg align=LayoutAlign::Center layout_class="auth-column">
                <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                    <span class="brand-mark">
                        <Icon icon=IconName::DocumentText size=IconSize::Md />
                    </span>
                    <Heading role=TextRole::Display>{mode.heading()}</Heading>
                    <Text tone=TextTone::Secondary>{mode.subtitle()}</Text>
                </Stack>
                <Card padding=LayoutPadding::Lg layout_class="auth-card">
                    <Stack gap=LayoutGap::Md>
                        <Stack gap=LayoutGap::Sm>
                            <Heading role=TextRole::Title>{mode.form_title()}</Heading>
                            <Text role=TextRole::Caption tone=TextTone::Secondary>
                                {mode.form_description()}
                            </Text>
                        </Stack>
                        <form class="auth-form" on:submit=on_submit>
                            <Stack gap=LayoutGap::Md>
                                {(mode == AuthMode::Signup).then(|| {
                                    view! {
                                        <FieldGroup title="Full name">
                                            <TextField
                                                id="name"
                                                name="name"
                                                placeholder="Enter your full name"
                                                autocomplete="name"
                                                required=true
                                                value=Signal::derive(move || name.get())
                                                on_input=Callback::new(move |ev: ev::Event| name.set(event_target_value(&ev)))
                                            />
                                        </FieldGroup>
                                    }
                                })}
                                <FieldGroup title="Email">
                                    <TextField
                                        id="email"
                                        name="email"
                                        input_type="email"
                                        placeholder="Enter your email"
                                        autocomplete="email"
                                        required=true
                                        value=Signal::derive(move || email.get())
                                        on_input=Callback::new(move |ev: ev::Event| email.set(event_target_value(&ev)))
                                    />
                                </FieldGroup>
                                <FieldGroup title="Password">
                                    <Cluster gap=LayoutGap::Sm justify=LayoutJustify::Between>
                                        <TextField
                                            id="password"
                                            name="password"
                                            layout_class="auth-password"
                                            input_type=Signal::derive(move || {
                                                password_input_type(show_password.get()).to_string()
                                            })
                                            placeholder="Enter your password"
                                            autocomplete=mode.password_autocomplete()
                                            required=true
                                            value=Signal::derive(move || password.get())
                                            on_input=Callback::new(move |ev: ev::Event| password.set(event_target_value(&ev)))
                                        />
                                        {move || {
                                            let (icon, label) = if show_password.get() {
                                                (IconName::EyeOff, "Hide password")
                                            } else {
                                                (IconName::Eye, "Show password")
                                            };
                                            view! {
                                                <IconButton
                                                    icon
                                                    aria_label=label
                                                    title=label
                                                    pressed=show_password.get()
                                                    on_click=Callback::new(move |_| show_password.update(|show| *show = !*show))
                                                />
                                            }
                                        }}
                                    </Cluster>
                                </FieldGroup>
                                <Button
                                    variant=ButtonVariant::Primary
                                    button_type="submit"
                                    layout_class="auth-submit"
                                    disabled=Signal::derive(move || pending.get())
                                >
                                    {move || mode.submit_label(pending.get())}
                                </Button>
                            </Stack>
                        </form>
                        <Cluster gap=LayoutGap::Sm justify=LayoutJustify::Center>
                            <Text role=TextRole::Caption tone=TextTone::Secondary>{switch_text}</Text>
                            <A href=switch_href class="auth-switch">{switch_link}</A>
                        </Cluster>
                    </Stack>
                </Card>
            </Stack>
        </CenteredPage>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use file_manager_runtime::NoticeTone;

    #[test]
    fn submit_label_tracks_pending_state() {
        assert_eq!(AuthMode::Login.submit_label(false), "Sign In");
        assert_eq!(AuthMode::Login.submit_label(true), "Signing in...");
        assert_eq!(AuthMode::Signup.submit_label(true), "Creating account...");
    }

    #[test]
    fn success_notices_are_informational() {
        let login = AuthMode::Login.success_notice();
        assert_eq!(login.title, "Welcome back!");
        assert_eq!(login.description, "Successfully logged in to your file manager.");
        assert_eq!(login.tone, NoticeTone::Info);
        assert_eq!(AuthMode::Signup.success_notice().title, "Account created!");
    }

    #[test]
    fn screens_link_to_each_other() {
        assert_eq!(AuthMode::Login.switch_prompt().2, "/signup");
        assert_eq!(AuthMode::Signup.switch_prompt().2, "/login");
    }

    #[test]
    fn password_visibility_toggles_input_type() {
        assert_eq!(password_input_type(false), "password");
        assert_eq!(password_input_type(true), "text");
    }

    #[test]
    fn submit_waits_one_second() {
        assert_eq!(AUTH_DELAY, Duration::from_secs(1));
        assert_eq!(AUTH_REDIRECT, "/dashboard");
    }
}
