//! Effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::DashboardRuntimeContext;

/// Installs the executor that drains queued effects in emission order.
pub fn install(runtime: DashboardRuntimeContext) {
    // Take the batch before running it so effects that dispatch again queue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_effect(runtime, effect);
        }
    });
}
