use leptos::*;
use leptos_router::A;
use system_ui::{
    Card, CenteredPage, Cluster, Grid, Heading, Icon, IconName, IconSize, LayoutAlign, LayoutGap,
    LayoutJustify, LayoutPadding, Stack, Text, TextRole, TextTone,
};

#[derive(Clone, Copy)]
struct Feature {
    icon: IconName,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: IconName::FolderOpen,
        title: "Smart Organization",
        body: "Organize files with nested folders and powerful search capabilities to find what you need instantly.",
    },
    Feature {
        icon: IconName::Shield,
        title: "Secure Access",
        body: "Your files are protected with enterprise-grade security and user authentication.",
    },
    Feature {
        icon: IconName::Flash,
        title: "Lightning Fast",
        body: "Preview, download, and manage your files with lightning-fast performance.",
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <CenteredPage layout_class="landing">
            <Stack gap=LayoutGap::Lg align=LayoutAlign::Center ui_slot="hero">
                <span class="brand-mark">
                    <Icon icon=IconName::DocumentText size=IconSize::Lg />
                </span>
                <Heading role=TextRole::Display>"Your Files, Organized"</Heading>
                <Text tone=TextTone::Secondary>
                    "A powerful file management platform that keeps your documents, images, and files perfectly organized and accessible from anywhere."
                </Text>
                <Cluster gap=LayoutGap::Md justify=LayoutJustify::Center>
                    <A href="/signup" class="ui-button landing-cta-primary">
                        "Get Started Free"
                    </A>
                    <A href="/login" class="ui-button landing-cta-secondary">
                        "Sign In"
                    </A>
                </Cluster>
            </Stack>
            <Grid gap=LayoutGap::Lg min_column_px=240 layout_class="landing-features">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        let Feature { icon, title, body } = *feature;
                        view! {
                            <Card padding=LayoutPadding::Lg>
                                <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                                    <Icon icon size=IconSize::Lg tone="accent" />
                                    <Heading role=TextRole::Title>{title}</Heading>
                                    <Text tone=TextTone::Secondary>{body}</Text>
                                </Stack>
                            </Card>
                        }
                    })
                    .collect_view()}
            </Grid>
        </CenteredPage>
    }
}
