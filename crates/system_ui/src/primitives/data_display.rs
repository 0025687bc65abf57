use super::*;

#[component]
/// Full-width page band. Renders a `<section>` so in-page anchors can target its `id`.
pub fn Surface(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = Elevation::Flat)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] id: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] revealed: MaybeSignal<bool>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-surface", layout_class)
            id=id
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="surface"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
            data-revealed=move || bool_token(revealed.get())
        >
            {children()}
        </section>
    }
}

#[component]
/// Shared card surface for service tiles, testimonials, and FAQ entries.
pub fn Card(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <p
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </p>
    }
}

#[component]
/// Shared heading primitive rendering the matching `h1`..`h4` element.
pub fn Heading(
    #[prop(default = HeadingLevel::H2)] level: HeadingLevel,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    let body = children();
    let heading = match level {
        HeadingLevel::H1 => view! { <h1 class=class>{body}</h1> }.into_any(),
        HeadingLevel::H2 => view! { <h2 class=class>{body}</h2> }.into_any(),
        HeadingLevel::H3 => view! { <h3 class=class>{body}</h3> }.into_any(),
        HeadingLevel::H4 => view! { <h4 class=class>{body}</h4> }.into_any(),
    };

    heading
        .attr("data-ui-primitive", "true")
        .attr("data-ui-kind", "heading")
        .attr("data-ui-slot", ui_slot)
        .attr("data-ui-variant", level.token())
        .attr("data-ui-tone", tone.token())
}

#[component]
/// Compact pill badge.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] icon: Option<IconName>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Xs /> })}
            {children()}
        </span>
    }
}

#[component]
/// Headline figure with a caption, e.g. `15 min` / `Discovery call`.
pub fn Stat(
    value: &'static str,
    label: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-stat", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stat"
        >
            <span data-ui-slot="value">{value}</span>
            <span data-ui-slot="label">{label}</span>
        </div>
    }
}
