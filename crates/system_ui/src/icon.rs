//! Centralized inline-SVG icon set.
//!
//! Icons are 24x24 stroke outlines drawn with `currentColor`, so they pick up the surrounding
//! text color and scale with the [`IconSize`] token.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named icons available to primitives and pages.
pub enum IconName {
    /// Right-pointing arrow.
    ArrowRight,
    /// Diagonal "open" arrow.
    ArrowUpRight,
    /// Seal with a check mark.
    BadgeCheck,
    /// Bar chart.
    BarChart,
    /// Calendar page.
    Calendar,
    /// Circled check mark.
    CheckCircle,
    /// Right chevron.
    ChevronRight,
    /// Clock face.
    Clock,
    /// Envelope.
    Mail,
    /// Speech bubble.
    MessageSquare,
    /// Shield outline.
    Shield,
    /// Two people.
    Users,
}

impl IconName {
    /// Stable token emitted as `data-ui-icon`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ArrowRight => "arrow-right",
            Self::ArrowUpRight => "arrow-up-right",
            Self::BadgeCheck => "badge-check",
            Self::BarChart => "bar-chart",
            Self::Calendar => "calendar",
            Self::CheckCircle => "check-circle",
            Self::ChevronRight => "chevron-right",
            Self::Clock => "clock",
            Self::Mail => "mail",
            Self::MessageSquare => "message-square",
            Self::Shield => "shield",
            Self::Users => "users",
        }
    }

    /// SVG path data for the icon, one entry per `<path>`.
    pub const fn paths(self) -> &'static [&'static str] {
        match self {
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
            Self::BadgeCheck => &[
                "M3.85 8.62a4 4 0 0 1 4.78-4.77 4 4 0 0 1 6.74 0 4 4 0 0 1 4.78 4.78 4 4 0 0 1 0 6.74 4 4 0 0 1-4.77 4.78 4 4 0 0 1-6.75 0 4 4 0 0 1-4.78-4.77 4 4 0 0 1 0-6.76Z",
                "m9 12 2 2 4-4",
            ],
            Self::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            Self::Calendar => &[
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2Z",
                "M16 2v4",
                "M8 2v4",
                "M3 10h18",
            ],
            Self::CheckCircle => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20Z", "m9 12 2 2 4-4"],
            Self::ChevronRight => &["m9 18 6-6-6-6"],
            Self::Clock => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20Z", "M12 6v6l4 2"],
            Self::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2Z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Self::MessageSquare => {
                &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"]
            }
            Self::Shield => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            ],
            Self::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8Z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 12px.
    Xs,
    /// 16px.
    Sm,
    /// 20px.
    Md,
    /// 24px.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    /// Stable token emitted as `data-ui-size`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Rendered edge length in CSS pixels.
    pub const fn px(self) -> u32 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }
}

#[component]
/// Decorative inline SVG icon. Hidden from assistive technology.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    let px = size.px();
    view! {
        <svg
            class="ui-icon"
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=px
            height=px
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon
                .paths()
                .iter()
                .map(|d| view! { <path d=*d></path> })
                .collect_view()}
        </svg>
    }
}
