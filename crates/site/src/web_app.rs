use file_manager_runtime::{DashboardProvider, DashboardShell, NoticeProvider};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::{build_host_services, load_host_config};

use crate::{
    auth::{AuthMode, AuthPage},
    landing::LandingPage,
};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="File Manager" />
        <Meta name="description" content="Browse, preview, and download your files from anywhere." />

        <NoticeProvider>
            <Router>
                <main class="site-root">
                    <Routes>
                        <Route path="" view=LandingPage />
                        <Route path="/login" view=|| view! { <AuthPage mode=AuthMode::Login /> } />
                        <Route path="/signup" view=|| view! { <AuthPage mode=AuthMode::Signup /> } />
                        <Route path="/dashboard" view=DashboardEntry />
                    </Routes>
                </main>
            </Router>
        </NoticeProvider>
    }
}

#[component]
pub fn DashboardEntry() -> impl IntoView {
    let host_services = build_host_services(load_host_config());

    view! {
        <DashboardProvider host_services>
            <DashboardShell />
        </DashboardProvider>
    }
}
