//! Shared UI primitive library for the FineLine site.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the site stylesheet. Pages
//! should compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonLink, ButtonShape, ButtonSize, ButtonVariant, Card, Cluster, Elevation,
    Grid, GridColumns, Heading, HeadingLevel, LayoutAlign, LayoutGap, LayoutJustify,
    LayoutPadding, NavLink, Stack, Stat, StepFlow, StepFlowStep, StepStatus, Surface,
    SurfaceVariant, Text, TextRole, TextTone,
};

/// Convenience imports for page crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonLink, ButtonShape, ButtonSize, ButtonVariant, Card, Cluster,
        Elevation, Grid, GridColumns, Heading, HeadingLevel, Icon, IconName, IconSize,
        LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, NavLink, Stack, Stat, StepFlow,
        StepFlowStep, StepStatus, Surface, SurfaceVariant, Text, TextRole, TextTone,
    };
}
