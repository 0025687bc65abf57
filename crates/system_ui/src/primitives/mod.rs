//! Shared structural, data-display, control, navigation, and layout primitives.

use leptos::ev::{FocusEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod layout;
mod navigation;

pub use controls::{Button, ButtonLink};
pub use data_display::{Badge, Card, Heading, Stat, Surface, Text};
pub use layout::{Cluster, Grid, Stack};
pub use navigation::{NavLink, StepFlow, StepFlowStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic surface variants for structural primitives.
pub enum SurfaceVariant {
    /// Page-colored surface.
    Standard,
    /// Secondary or muted surface.
    Muted,
    /// Brand-colored band.
    Brand,
    /// Gradient accent surface.
    Accent,
}

impl Default for SurfaceVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl SurfaceVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Muted => "muted",
            Self::Brand => "brand",
            Self::Accent => "accent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic elevation levels for shared primitives.
pub enum Elevation {
    /// Flat surface.
    Flat,
    /// Raised surface.
    Raised,
    /// Floating surface (sticky headers, floating actions).
    Overlay,
}

impl Default for Elevation {
    fn default() -> Self {
        Self::Flat
    }
}

impl Elevation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Raised => "raised",
            Self::Overlay => "overlay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Filled brand button.
    Primary,
    /// Bordered button on a translucent surface.
    Outline,
    /// Borderless text button.
    Ghost,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button corner shapes.
pub enum ButtonShape {
    /// Rounded rectangle.
    Standard,
    /// Fully rounded pill.
    Pill,
}

impl Default for ButtonShape {
    fn default() -> Self {
        Self::Standard
    }
}

impl ButtonShape {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Pill => "pill",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text roles.
pub enum TextRole {
    /// Body text.
    Body,
    /// Larger introductory paragraph.
    Lead,
    /// Small uppercase section kicker.
    Eyebrow,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Quoted text.
    Quote,
}

impl Default for TextRole {
    fn default() -> Self {
        Self::Body
    }
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Lead => "lead",
            Self::Eyebrow => "eyebrow",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Quote => "quote",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    Primary,
    /// Muted text.
    Secondary,
    /// Brand-colored text.
    Brand,
    /// Accent (gold) text.
    Accent,
    /// Text on a brand-colored band.
    Inverse,
}

impl Default for TextTone {
    fn default() -> Self {
        Self::Primary
    }
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Brand => "brand",
            Self::Accent => "accent",
            Self::Inverse => "inverse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Heading levels rendered as `h1`..`h4`.
pub enum HeadingLevel {
    /// Page title.
    H1,
    /// Section title.
    H2,
    /// Card title.
    H3,
    /// Minor title.
    H4,
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::H2
    }
}

impl HeadingLevel {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    Md,
    /// Large gap.
    Lg,
    /// Section-level gap.
    Xl,
}

impl Default for LayoutGap {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout padding tokens.
pub enum LayoutPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl Default for LayoutPadding {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
    /// End alignment.
    End,
}

impl Default for LayoutAlign {
    fn default() -> Self {
        Self::Stretch
    }
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
    /// End justification.
    End,
}

impl Default for LayoutJustify {
    fn default() -> Self {
        Self::Start
    }
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Responsive column counts for [`Grid`].
pub enum GridColumns {
    /// Single column at every width.
    One,
    /// Two columns from the tablet breakpoint.
    Two,
    /// Three columns from the tablet breakpoint.
    Three,
    /// Wide first column beside a narrower second one.
    Feature,
}

impl Default for GridColumns {
    fn default() -> Self {
        Self::One
    }
}

impl GridColumns {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Feature => "feature",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared guided-step status tokens.
pub enum StepStatus {
    /// Current active step.
    Current,
    /// Completed prior step.
    Complete,
    /// Pending future step.
    Pending,
}

impl StepStatus {
    /// Status of step `index` when `active` is the current step.
    pub fn for_index(index: usize, active: usize) -> Self {
        match index.cmp(&active) {
            std::cmp::Ordering::Less => Self::Complete,
            std::cmp::Ordering::Equal => Self::Current,
            std::cmp::Ordering::Greater => Self::Pending,
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Complete => "complete",
            Self::Pending => "pending",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-card", None), "ui-card");
        assert_eq!(merge_layout_class("ui-card", Some("")), "ui-card");
        assert_eq!(
            merge_layout_class("ui-card", Some("service-card")),
            "ui-card service-card"
        );
    }

    #[test]
    fn step_status_splits_around_the_active_step() {
        let statuses: Vec<_> = (0..6)
            .map(|index| StepStatus::for_index(index, 2).token())
            .collect();
        assert_eq!(
            statuses,
            vec!["complete", "complete", "current", "pending", "pending", "pending"]
        );
    }

    #[test]
    fn default_tokens_match_the_stylesheet_contract() {
        assert_eq!(ButtonVariant::default().token(), "primary");
        assert_eq!(ButtonSize::default().token(), "md");
        assert_eq!(ButtonShape::default().token(), "standard");
        assert_eq!(TextRole::default().token(), "body");
        assert_eq!(HeadingLevel::default().token(), "h2");
        assert_eq!(GridColumns::Feature.token(), "feature");
        assert_eq!(Elevation::default().token(), "flat");
        assert_eq!(Elevation::Overlay.token(), "overlay");
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
