//! Runtime provider and context wiring for the dashboard.
//!
//! This module owns the reducer container and the effect queue. UI composition stays in
//! [`crate::components`].

use std::rc::Rc;

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};
use platform_host::HostServices;

use crate::{
    effect_executor,
    host::DashboardHostContext,
    model::DashboardState,
    notices::use_notices,
    reducer::{reduce_dashboard, DashboardAction, DashboardEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading dashboard state and dispatching [`DashboardAction`] values.
pub struct DashboardRuntimeContext {
    /// Host bundle executing reducer effects.
    pub host: StoredValue<DashboardHostContext>,
    /// Reactive dashboard state.
    pub state: RwSignal<DashboardState>,
    /// Effects emitted by the reducer and not yet executed.
    pub effects: RwSignal<Vec<DashboardEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DashboardAction>,
}

impl DashboardRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DashboardAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DashboardRuntimeContext`] to descendants and issues the initial listing fetch.
///
/// Must render inside a router and a [`crate::NoticeProvider`].
pub fn DashboardProvider(
    /// Host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let navigate = use_navigate();
    let navigator = Rc::new(move |path: &str| navigate(path, NavigateOptions::default()));
    let host_context = DashboardHostContext::new(host_services, use_notices(), navigator);
    logging::log!(
        "dashboard mounted with {} host strategy",
        host_context.host_strategy_name()
    );
    on_cleanup(host_context.unmount_guard());

    let host = store_value(host_context);
    let state = create_rw_signal(DashboardState::default());
    let effects = create_rw_signal(Vec::<DashboardEffect>::new());

    let dispatch = Callback::new(move |action: DashboardAction| {
        let mut dashboard = state.get_untracked();
        let previous = dashboard.clone();

        match reduce_dashboard(&mut dashboard, action) {
            Ok(new_effects) => {
                if dashboard != previous {
                    state.set(dashboard);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("dashboard reducer error: {err}"),
        }
    });

    let runtime = DashboardRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };
    provide_context(runtime);

    effect_executor::install(runtime);
    runtime.dispatch_action(DashboardAction::BeginListingFetch);

    children().into_view()
}

/// Returns the current [`DashboardRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DashboardProvider`].
pub fn use_dashboard_runtime() -> DashboardRuntimeContext {
    use_context::<DashboardRuntimeContext>().expect("DashboardRuntimeContext not provided")
}
