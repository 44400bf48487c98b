//! Dashboard runtime for the browser file manager.
//!
//! State lives in [`model`] and changes only through [`reduce_dashboard`]; the effects it returns
//! are executed against the injected host services once the reducer has finished.

pub mod components;
mod effect_executor;
mod host;
pub mod listing;
pub mod model;
pub mod notices;
pub mod reducer;
mod runtime_context;

pub use components::DashboardShell;
pub use listing::load_listing;
pub use model::*;
pub use notices::{use_notices, NoticeCenter, NoticeProvider};
pub use reducer::{reduce_dashboard, DashboardAction, DashboardEffect, DownloadOrigin};
pub use runtime_context::{use_dashboard_runtime, DashboardProvider, DashboardRuntimeContext};
