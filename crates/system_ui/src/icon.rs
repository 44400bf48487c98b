//! Centralized icon catalog for the file-manager UI.
//!
//! Components reference icons by semantic [`IconName`] and never embed raw SVG. Paths follow the
//! Fluent UI System Icons regular 24px grid.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers.
pub enum IconName {
    /// Closed folder.
    Folder,
    /// Open/expanded folder.
    FolderOpen,
    /// Generic file.
    Document,
    /// Text/document file.
    DocumentText,
    /// Image file.
    Image,
    /// Collapsed disclosure chevron.
    ChevronRight,
    /// Expanded disclosure chevron.
    ChevronDown,
    /// Search field adornment.
    Search,
    /// Grid view mode.
    GridView,
    /// List view mode.
    ListView,
    /// Preview / show secret.
    Eye,
    /// Hide secret.
    EyeOff,
    /// Download action.
    Download,
    /// Upload action.
    Upload,
    /// Settings action.
    Settings,
    /// Account action.
    Person,
    /// Sign-out action.
    SignOut,
    /// Security feature badge.
    Shield,
    /// Speed feature badge.
    Flash,
    /// Dismiss/close.
    Dismiss,
    /// Confirmation.
    Checkmark,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::FolderOpen => "folder-open",
            Self::Document => "document",
            Self::DocumentText => "document-text",
            Self::Image => "image",
            Self::ChevronRight => "chevron-right",
            Self::ChevronDown => "chevron-down",
            Self::Search => "search",
            Self::GridView => "grid-view",
            Self::ListView => "list-view",
            Self::Eye => "eye",
            Self::EyeOff => "eye-off",
            Self::Download => "download",
            Self::Upload => "upload",
            Self::Settings => "settings",
            Self::Person => "person",
            Self::SignOut => "sign-out",
            Self::Shield => "shield",
            Self::Flash => "flash",
            Self::Dismiss => "dismiss",
            Self::Checkmark => "checkmark",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Folder => {
                r#"<path d="M3 6.25C3 5.01 4.01 4 5.25 4h3.89c.46 0 .9.18 1.23.51L11.87 6h6.88C19.99 6 21 7 21 8.25v9.5C21 18.99 20 20 18.75 20H5.25C4.01 20 3 19 3 17.75V6.25Zm1.5 0v11.5c0 .41.34.75.75.75h13.5c.41 0 .75-.34.75-.75v-9.5a.75.75 0 0 0-.75-.75h-7.19a.75.75 0 0 1-.53-.22L9.31 5.57a.25.25 0 0 0-.17-.07H5.25a.75.75 0 0 0-.75.75Z"/>"#
            }
            Self::FolderOpen => {
                r#"<path d="M3.5 6.25c0-.97.78-1.75 1.75-1.75h2.88c.2 0 .39.08.53.22l2.06 2.06c.14.14.33.22.53.22h5.5c.97 0 1.75.78 1.75 1.75 0 .09.01.17.04.25H8.72c-1.34 0-2.58.71-3.25 1.87L3.5 14.28V6.25ZM2 17.79A3.25 3.25 0 0 0 5.25 21h11.04c1.33 0 2.57-.72 3.24-1.88l3.03-5.25A3.25 3.25 0 0 0 19.96 9a.75.75 0 0 0 .04-.25c0-1.8-1.45-3.25-3.25-3.25h-5.19L9.72 3.66c-.42-.42-1-.66-1.6-.66H5.26A3.25 3.25 0 0 0 2 6.25V17.79Zm6.72-7.3h11.03a1.75 1.75 0 0 1 1.51 2.63l-3.03 5.25c-.4.7-1.14 1.13-1.95 1.13H5.25a1.75 1.75 0 0 1-1.51-2.63l3.03-5.25c.4-.7 1.14-1.12 1.95-1.12Z"/>"#
            }
            Self::Document => {
                r#"<path d="M6 2h7.59L20 8.41V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2Zm0 1.5a.5.5 0 0 0-.5.5v16c0 .28.22.5.5.5h12a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6Zm7.5.62V8c0 .28.22.5.5.5h3.88L13.5 4.12Z"/>"#
            }
            Self::DocumentText => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::Image => {
                r#"<path d="M5.25 3h13.5C19.99 3 21 4 21 5.25v13.5c0 1.24-1 2.25-2.25 2.25H5.25C4.01 21 3 20 3 18.75V5.25C3 4.01 4 3 5.25 3Zm0 1.5a.75.75 0 0 0-.75.75v10.94l4.72-4.72a.75.75 0 0 1 1.06 0l2.47 2.47 4.47-4.47a.75.75 0 0 1 1.06 0l2.22 2.22V5.25a.75.75 0 0 0-.75-.75H5.25ZM8.5 7a1.5 1.5 0 1 1 0 3 1.5 1.5 0 0 1 0-3Z"/>"#
            }
            Self::ChevronRight => {
                r#"<path d="M8.47 4.22a.75.75 0 0 0 0 1.06L15.19 12l-6.72 6.72a.75.75 0 1 0 1.06 1.06l7.25-7.25a.75.75 0 0 0 0-1.06L9.53 4.22a.75.75 0 0 0-1.06 0Z"/>"#
            }
            Self::ChevronDown => {
                r#"<path d="M4.22 8.47c.3-.3.77-.3 1.06 0L12 15.19l6.72-6.72a.75.75 0 1 1 1.06 1.06l-7.25 7.25c-.3.3-.77.3-1.06 0L4.22 9.53a.75.75 0 0 1 0-1.06Z"/>"#
            }
            Self::Search => {
                r#"<path d="M10 2.75a7.25 7.25 0 0 1 5.63 11.82l4.9 4.9a.75.75 0 0 1-.98 1.13l-.08-.07-4.9-4.9A7.25 7.25 0 1 1 10 2.75Zm0 1.5a5.75 5.75 0 1 0 0 11.5 5.75 5.75 0 0 0 0-11.5Z"/>"#
            }
            Self::GridView => {
                r#"<path d="M4 4h6v6H4V4Zm1.5 1.5v3h3v-3h-3ZM14 4h6v6h-6V4Zm1.5 1.5v3h3v-3h-3ZM4 14h6v6H4v-6Zm1.5 1.5v3h3v-3h-3ZM14 14h6v6h-6v-6Zm1.5 1.5v3h3v-3h-3Z"/>"#
            }
            Self::ListView => {
                r#"<path d="M3 5.75A.75.75 0 0 1 3.75 5h16.5a.75.75 0 0 1 0 1.5H3.75A.75.75 0 0 1 3 5.75Zm0 6.25a.75.75 0 0 1 .75-.75h16.5a.75.75 0 0 1 0 1.5H3.75A.75.75 0 0 1 3 12Zm.75 5.5a.75.75 0 0 0 0 1.5h16.5a.75.75 0 0 0 0-1.5H3.75Z"/>"#
            }
            Self::Eye => {
                r#"<path d="M12 5c5 0 8.5 4.1 9.7 6.5a1.1 1.1 0 0 1 0 1C20.5 14.9 17 19 12 19s-8.5-4.1-9.7-6.5a1.1 1.1 0 0 1 0-1C3.5 9.1 7 5 12 5Zm0 1.5c-4.05 0-7.07 3.3-8.18 5.5 1.1 2.2 4.13 5.5 8.18 5.5s7.07-3.3 8.18-5.5c-1.1-2.2-4.13-5.5-8.18-5.5ZM12 9a3 3 0 1 1 0 6 3 3 0 0 1 0-6Zm0 1.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3Z"/>"#
            }
            Self::EyeOff => {
                r#"<path d="M3.28 2.22a.75.75 0 1 0-1.06 1.06l3.5 3.5C3.9 8.1 2.77 9.9 2.3 11.5a1.1 1.1 0 0 0 0 1C3.5 14.9 7 19 12 19c1.9 0 3.6-.6 5-1.5l3.72 3.72a.75.75 0 0 0 1.06-1.06L3.28 2.22ZM15.9 16.4A7.4 7.4 0 0 1 12 17.5c-4.05 0-7.07-3.3-8.18-5.5.5-1 1.4-2.3 2.67-3.42l2.2 2.2a3 3 0 0 0 4.03 4.03l3.18 3.18ZM12 5c5 0 8.5 4.1 9.7 6.5a1.1 1.1 0 0 1 0 1c-.4.8-1 1.8-1.8 2.7l-1.06-1.06c.6-.7 1.04-1.45 1.34-2.14-1.1-2.2-4.13-5.5-8.18-5.5-.7 0-1.35.1-1.97.27L8.85 5.6C9.83 5.22 10.88 5 12 5Z"/>"#
            }
            Self::Download => {
                r#"<path d="M18.25 20.5a.75.75 0 0 1 .1 1.5H5.75a.75.75 0 0 1-.1-1.5h12.6ZM12 2a.75.75 0 0 1 .75.75v12.44l3.72-3.72a.75.75 0 0 1 1.06 1.06l-5 5a.75.75 0 0 1-1.06 0l-5-5a.75.75 0 1 1 1.06-1.06l3.72 3.72V2.75A.75.75 0 0 1 12 2Z"/>"#
            }
            Self::Upload => {
                r#"<path d="M5.75 3.5a.75.75 0 0 1-.1-1.5h12.6a.75.75 0 0 1 .1 1.5H5.75ZM12 22a.75.75 0 0 1-.75-.75V8.81l-3.72 3.72a.75.75 0 0 1-1.06-1.06l5-5c.3-.3.77-.3 1.06 0l5 5a.75.75 0 1 1-1.06 1.06l-3.72-3.72v12.44A.75.75 0 0 1 12 22Z"/>"#
            }
            Self::Settings => {
                r#"<path d="M12 2a1 1 0 0 1 .98.8l.25 1.2a8.1 8.1 0 0 1 1.74.72l1.06-.64a1 1 0 0 1 1.24.15l1.58 1.58a1 1 0 0 1 .15 1.24l-.64 1.06c.3.55.54 1.13.72 1.74l1.2.25a1 1 0 0 1 .8.98v2.24a1 1 0 0 1-.8.98l-1.2.25a8.1 8.1 0 0 1-.72 1.74l.64 1.06a1 1 0 0 1-.15 1.24l-1.58 1.58a1 1 0 0 1-1.24.15l-1.06-.64a8.1 8.1 0 0 1-1.74.72l-.25 1.2a1 1 0 0 1-.98.8H9.76a1 1 0 0 1-.98-.8l-.25-1.2a8.1 8.1 0 0 1-1.74-.72l-1.06.64a1 1 0 0 1-1.24-.15l-1.58-1.58a1 1 0 0 1-.15-1.24l.64-1.06a8.1 8.1 0 0 1-.72-1.74l-1.2-.25a1 1 0 0 1-.8-.98V9.76a1 1 0 0 1 .8-.98l1.2-.25c.18-.61.42-1.19.72-1.74l-.64-1.06a1 1 0 0 1 .15-1.24l1.58-1.58a1 1 0 0 1 1.24-.15l1.06.64c.55-.3 1.13-.54 1.74-.72l.25-1.2A1 1 0 0 1 9.76 2H12Zm-.38 1.5H10.4l-.24 1.16a1 1 0 0 1-.76.78 6.6 6.6 0 0 0-2.2.91 1 1 0 0 1-1.09.02l-1.02-.62-.86.86.62 1.02a1 1 0 0 1-.02 1.09 6.6 6.6 0 0 0-.91 2.2 1 1 0 0 1-.78.76L2 11.62v1.2l1.16.24a1 1 0 0 1 .78.76 6.6 6.6 0 0 0 .91 2.2 1 1 0 0 1 .02 1.09l-.62 1.02.86.86 1.02-.62a1 1 0 0 1 1.09.02 6.6 6.6 0 0 0 2.2.91 1 1 0 0 1 .76.78l.24 1.16h1.2l.24-1.16a1 1 0 0 1 .76-.78 6.6 6.6 0 0 0 2.2-.91 1 1 0 0 1 1.09-.02l1.02.62.86-.86-.62-1.02a1 1 0 0 1 .02-1.09 6.6 6.6 0 0 0 .91-2.2 1 1 0 0 1 .78-.76l1.16-.24v-1.2l-1.16-.24a1 1 0 0 1-.78-.76 6.6 6.6 0 0 0-.91-2.2 1 1 0 0 1-.02-1.09l.62-1.02-.86-.86-1.02.62a1 1 0 0 1-1.09-.02 6.6 6.6 0 0 0-2.2-.91 1 1 0 0 1-.76-.78l-.24-1.16ZM11 8a3 3 0 1 1 0 6 3 3 0 0 1 0-6Zm0 1.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3Z"/>"#
            }
            Self::Person => {
                r#"<path d="M12 2a5 5 0 1 1 0 10 5 5 0 0 1 0-10Zm0 1.5a3.5 3.5 0 1 0 0 7 3.5 3.5 0 0 0 0-7ZM6.25 14h11.5C19 14 20 15 20 16.25v.6c0 2.97-3.4 5.15-8 5.15s-8-2.18-8-5.15v-.6C4 15 5 14 6.25 14Zm0 1.5a.75.75 0 0 0-.75.75v.6c0 1.83 2.5 3.65 6.5 3.65s6.5-1.82 6.5-3.65v-.6a.75.75 0 0 0-.75-.75H6.25Z"/>"#
            }
            Self::SignOut => {
                r#"<path d="M8.75 3h6.5C16.77 3 18 4.23 18 5.75V8a.75.75 0 0 1-1.5 0V5.75c0-.69-.56-1.25-1.25-1.25h-6.5c-.69 0-1.25.56-1.25 1.25v12.5c0 .69.56 1.25 1.25 1.25h6.5c.69 0 1.25-.56 1.25-1.25V16a.75.75 0 0 1 1.5 0v2.25c0 1.52-1.23 2.75-2.75 2.75h-6.5A2.75 2.75 0 0 1 6 18.25V5.75C6 4.23 7.23 3 8.75 3Zm10.03 5.22 3 3a.75.75 0 0 1 0 1.06l-3 3a.75.75 0 1 1-1.06-1.06l1.72-1.72h-7.69a.75.75 0 0 1 0-1.5h7.69l-1.72-1.72a.75.75 0 0 1 1.06-1.06Z"/>"#
            }
            Self::Shield => {
                r#"<path d="M12 2.2c.2 0 .39.07.54.2A11.5 11.5 0 0 0 19.25 5a.75.75 0 0 1 .75.75V11c0 5-2.96 8.66-7.73 10.95a.75.75 0 0 1-.54 0C6.96 19.66 4 16 4 11V5.75A.75.75 0 0 1 4.75 5a11.5 11.5 0 0 0 6.71-2.6.75.75 0 0 1 .54-.2Zm0 1.7A13 13 0 0 1 5.5 6.45V11c0 4.1 2.33 7.14 6.5 9.2 4.17-2.06 6.5-5.1 6.5-9.2V6.45A13 13 0 0 1 12 3.9Z"/>"#
            }
            Self::Flash => {
                r#"<path d="M8.6 2h6.76c.85 0 1.45.84 1.18 1.65L15.1 8h3.96c1.1 0 1.67 1.32.9 2.12l-9.4 9.72c-1.05 1.08-2.88.1-2.55-1.38L9.3 14H7.76A1.75 1.75 0 0 1 6.1 11.66l1.33-8.83C7.6 2.33 8.07 2 8.6 2Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
            Self::Checkmark => {
                r#"<path d="M4.53 12.97a.75.75 0 0 0-1.06 1.06l4.5 4.5c.3.3.77.3 1.06 0l11-11a.75.75 0 0 0-1.06-1.06L8.5 16.94l-3.97-3.97Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 14px compact icon.
    Xs,
    /// 16px standard icon (tree rows, buttons).
    #[default]
    Sm,
    /// 20px medium icon (list rows, dialog header).
    Md,
    /// 32px large icon (grid cards).
    Lg,
    /// 64px hero icon (empty states, preview fallback).
    Xl,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
            Self::Xl => 64,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[component]
/// Renders an icon SVG from the centralized catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
    /// Optional semantic tone token (`primary`, `success`, `danger`, ...).
    #[prop(optional)]
    tone: Option<&'static str>,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            data-ui-tone=tone
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const ALL: [IconName; 21] = [
        IconName::Folder,
        IconName::FolderOpen,
        IconName::Document,
        IconName::DocumentText,
        IconName::Image,
        IconName::ChevronRight,
        IconName::ChevronDown,
        IconName::Search,
        IconName::GridView,
        IconName::ListView,
        IconName::Eye,
        IconName::EyeOff,
        IconName::Download,
        IconName::Upload,
        IconName::Settings,
        IconName::Person,
        IconName::SignOut,
        IconName::Shield,
        IconName::Flash,
        IconName::Dismiss,
        IconName::Checkmark,
    ];

    #[test]
    fn icon_tokens_are_unique_and_kebab_case() {
        let tokens: HashSet<&str> = ALL.iter().map(|icon| icon.token()).collect();
        assert_eq!(tokens.len(), ALL.len());
        assert!(tokens
            .iter()
            .all(|token| token.chars().all(|c| c.is_ascii_lowercase() || c == '-')));
    }

    #[test]
    fn every_icon_has_a_path_body() {
        assert!(ALL.iter().all(|icon| icon.svg_body().starts_with("<path")));
    }
}
