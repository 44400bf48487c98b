//! Shared UI primitive library for the file-manager front end.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the stylesheet. Feature crates
//! should compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    AppShell, Badge, Breadcrumb, Button, ButtonShape, ButtonSize, ButtonVariant, Card,
    CenteredPage, Cluster, Elevation, EmptyState, FieldGroup, FieldVariant, Grid, Heading,
    IconButton, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, ListSurface, MenuBar, Modal,
    Pane, PaneHeader, PreviewFrame, SegmentedControl, SegmentedControlOption, Stack, StatusBar,
    StatusBarItem, SurfaceVariant, Text, TextField, TextRole, TextTone, Toast, ToastRegion,
    ToolBar, Tree, TreeItem,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        AppShell, Badge, Breadcrumb, Button, ButtonShape, ButtonSize, ButtonVariant, Card,
        CenteredPage, Cluster, Elevation, EmptyState, FieldGroup, FieldVariant, Grid, Heading,
        Icon, IconButton, IconName, IconSize, LayoutAlign, LayoutGap, LayoutJustify,
        LayoutPadding, ListSurface, MenuBar, Modal, Pane, PaneHeader, PreviewFrame,
        SegmentedControl, SegmentedControlOption, Stack, StatusBar, StatusBarItem, SurfaceVariant,
        Text, TextField, TextRole, TextTone, Toast, ToastRegion, ToolBar, Tree, TreeItem,
    };
}
