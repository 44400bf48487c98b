use leptos::*;
use system_ui::{
    Button, ButtonSize, ButtonVariant, Cluster, EmptyState, IconName, LayoutGap, LayoutJustify,
    Modal, PreviewFrame, Text, TextRole, TextTone,
};

use crate::{
    model::{Entry, PreviewMode},
    reducer::{DashboardAction, DownloadOrigin},
    runtime_context::{use_dashboard_runtime, DashboardRuntimeContext},
};

#[component]
/// Preview dialog for the selected file.
pub(super) fn FilePreview() -> impl IntoView {
    let runtime = use_dashboard_runtime();
    let state = runtime.state;
    let target = create_memo(move |_| state.with(|state| state.preview_target().cloned()));
    let open = Signal::derive(move || target.with(Option::is_some));
    let title = Signal::derive(move || {
        target.with(|target| {
            target
                .as_ref()
                .map(|entry| entry.name.clone())
                .unwrap_or_default()
        })
    });

    view! {
        <Modal
            open
            title
            layout_class="file-preview"
            on_close=Callback::new(move |_| runtime.dispatch_action(DashboardAction::ClosePreview))
        >
            {move || target.get().map(|entry| preview_body(runtime, entry))}
        </Modal>
    }
}

fn preview_body(runtime: DashboardRuntimeContext, entry: Entry) -> View {
    let id = entry.id.clone();
    let on_download = Callback::new(move |_| {
        runtime.dispatch_action(DashboardAction::DownloadEntry {
            id: id.clone(),
            origin: DownloadOrigin::Preview,
        })
    });
    let mode = entry.preview_mode();
    let size_label = entry.size_label();
    let body = match mode {
        PreviewMode::Image => image_preview(runtime, entry),
        PreviewMode::Document => document_preview(entry),
        PreviewMode::Unsupported => unsupported_preview(),
    };

    view! {
        <Cluster gap=LayoutGap::Md justify=LayoutJustify::Between layout_class="file-preview-meta">
            <Text role=TextRole::Caption tone=TextTone::Secondary>{size_label}</Text>
            <Button
                variant=ButtonVariant::Outline
                size=ButtonSize::Sm
                leading_icon=IconName::Download
                on_click=on_download
            >
                "Download"
            </Button>
        </Cluster>
        <PreviewFrame mode=preview_mode_token(mode)>{body}</PreviewFrame>
    }
    .into_view()
}

fn preview_mode_token(mode: PreviewMode) -> &'static str {
    match mode {
        PreviewMode::Image => "image",
        PreviewMode::Document => "document",
        PreviewMode::Unsupported => "unsupported",
    }
}

fn image_preview(runtime: DashboardRuntimeContext, entry: Entry) -> View {
    let state = runtime.state;
    let src = create_memo(move |_| state.with(|state| state.preview_image_src()));

    view! {
        <img
            class="file-preview-image"
            src=move || src.get()
            alt=entry.name
            on:error=move |_| runtime.dispatch_action(DashboardAction::PreviewImageFailed)
        />
    }
    .into_view()
}

fn document_preview(entry: Entry) -> View {
    let url = entry.url.unwrap_or_default();

    view! {
        <object class="file-preview-document" data=url.clone() type="application/pdf">
            <p>
                "Your browser does not support PDF embedding. "
                <a href=url target="_blank" rel="noopener noreferrer">
                    "Click here to download the PDF."
                </a>
            </p>
        </object>
    }
    .into_view()
}

fn unsupported_preview() -> View {
    view! {
        <EmptyState icon=IconName::Document title="File preview not available for this type.">
            <Text tone=TextTone::Secondary>"You can still download the file."</Text>
        </EmptyState>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::preview_mode_token;
    use crate::model::PreviewMode;

    #[test]
    fn preview_frame_modes_have_distinct_tokens() {
        assert_eq!(preview_mode_token(PreviewMode::Image), "image");
        assert_eq!(preview_mode_token(PreviewMode::Document), "document");
        assert_eq!(preview_mode_token(PreviewMode::Unsupported), "unsupported");
    }
}
