use super::*;

/// Token attributes shared by the layout primitives. `None` leaves the attribute off.
struct LayoutFrame {
    base_class: &'static str,
    kind: &'static str,
    gap: LayoutGap,
    padding: LayoutPadding,
    align: Option<LayoutAlign>,
    justify: Option<LayoutJustify>,
    columns: Option<GridColumns>,
    wrap: Option<bool>,
}

impl LayoutFrame {
    fn new(
        base_class: &'static str,
        kind: &'static str,
        gap: LayoutGap,
        padding: LayoutPadding,
    ) -> Self {
        Self {
            base_class,
            kind,
            gap,
            padding,
            align: None,
            justify: None,
            columns: None,
            wrap: None,
        }
    }

    fn render(
        self,
        layout_class: Option<&'static str>,
        ui_slot: Option<&'static str>,
        role: Option<&'static str>,
        aria_label: Option<&'static str>,
        children: Children,
    ) -> impl IntoView {
        view! {
            <div
                class=merge_layout_class(self.base_class, layout_class)
                role=role
                aria-label=aria_label
                data-ui-primitive="true"
                data-ui-kind=self.kind
                data-ui-slot=ui_slot
                data-ui-gap=self.gap.token()
                data-ui-padding=self.padding.token()
                data-ui-align=self.align.map(LayoutAlign::token)
                data-ui-justify=self.justify.map(LayoutJustify::token)
                data-ui-columns=self.columns.map(GridColumns::token)
                data-ui-wrap=self.wrap.map(bool_token)
            >
                {children()}
            </div>
        }
    }
}

#[component]
/// Vertical flow of blocks: section intros, card bodies, footer columns.
pub fn Stack(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Stretch)] align: LayoutAlign,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    /// ARIA role for stacks that group related content.
    #[prop(optional)]
    role: Option<&'static str>,
    #[prop(optional)] aria_label: Option<&'static str>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let frame = LayoutFrame {
        align: Some(align),
        ..LayoutFrame::new("ui-stack", "stack", gap, padding)
    };
    frame.render(layout_class, ui_slot, role, aria_label, children)
}

#[component]
/// Inline row of items (actions, pills, trust points) that wraps unless `wrap` is off.
pub fn Cluster(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Center)] align: LayoutAlign,
    #[prop(default = LayoutJustify::Start)] justify: LayoutJustify,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(default = true)] wrap: bool,
    /// ARIA role for clusters that group related content.
    #[prop(optional)]
    role: Option<&'static str>,
    #[prop(optional)] aria_label: Option<&'static str>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let frame = LayoutFrame {
        align: Some(align),
        justify: Some(justify),
        wrap: Some(wrap),
        ..LayoutFrame::new("ui-cluster", "cluster", gap, padding)
    };
    frame.render(layout_class, ui_slot, role, aria_label, children)
}

#[component]
/// Responsive grid that collapses to one column on narrow viewports.
pub fn Grid(
    #[prop(default = GridColumns::One)] columns: GridColumns,
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let frame = LayoutFrame {
        columns: Some(columns),
        ..LayoutFrame::new("ui-grid", "grid", gap, padding)
    };
    frame.render(layout_class, ui_slot, None, None, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_leaves_kind_specific_tokens_unset_until_requested() {
        let frame = LayoutFrame::new("ui-grid", "grid", LayoutGap::Lg, LayoutPadding::None);
        assert_eq!(frame.kind, "grid");
        assert_eq!(frame.gap.token(), LayoutGap::Lg.token());
        assert!(frame.align.is_none() && frame.justify.is_none());
        assert!(frame.columns.is_none() && frame.wrap.is_none());

        let cluster = LayoutFrame {
            justify: Some(LayoutJustify::Between),
            wrap: Some(false),
            ..LayoutFrame::new("ui-cluster", "cluster", LayoutGap::Md, LayoutPadding::None)
        };
        assert_eq!(
            cluster.justify.map(LayoutJustify::token),
            Some(LayoutJustify::Between.token())
        );
        assert_eq!(cluster.wrap.map(bool_token), Some("false"));
    }
}
