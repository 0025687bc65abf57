//! FineLine landing page.

use leptos::*;
use platform_host::current_year;
use system_ui::prelude::*;

use crate::content::{
    self, actions, faq, footer, hero, process, services, testimonials, Service, Testimonial,
};

/// Vertical scroll offset past which the sticky header switches to its condensed style.
pub const SCROLL_THRESHOLD_PX: f64 = 8.0;

/// Returns whether the header should render in its scrolled state.
pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

fn window_scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

#[component]
/// Landing page: header, marketing sections, footer and the floating chat action.
pub fn HomePage() -> impl IntoView {
    let (scrolled, set_scrolled) = create_signal(false);
    let (revealed, set_revealed) = create_signal(false);

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        let next = header_is_scrolled(window_scroll_y());
        if scrolled.get_untracked() != next {
            set_scrolled.set(next);
        }
    });
    on_cleanup(move || scroll_listener.remove());

    request_animation_frame(move || {
        set_scrolled.set(header_is_scrolled(window_scroll_y()));
        set_revealed.set(true);
    });

    view! {
        <div class="site-page" data-page="home">
            <SiteHeader scrolled />
            <main>
                <TrustBar />
                <HeroSection revealed />
                <ServicesSection revealed />
                <TestimonialsSection revealed />
                <ProcessSection revealed />
                <FaqSection revealed />
            </main>
            <SiteFooter />
            <ChatButton />
        </div>
    }
}

#[component]
fn Brand(#[prop(optional)] ui_slot: Option<&'static str>) -> impl IntoView {
    view! {
        <a class="site-brand" href="#top" data-ui-slot=ui_slot>
            <span class="site-brand-mark" aria-hidden="true">"F"</span>
            <span class="site-brand-copy">
                <span class="site-brand-name">{content::BRAND_NAME}</span>
                <span class="site-brand-tagline">{content::BRAND_TAGLINE}</span>
            </span>
        </a>
    }
}

#[component]
fn SiteHeader(scrolled: ReadSignal<bool>) -> impl IntoView {
    view! {
        <header
            id="top"
            class="site-header"
            data-scrolled=move || if scrolled.get() { "true" } else { "false" }
        >
            <Cluster
                justify=LayoutJustify::Between
                wrap=false
                layout_class="site-container site-header-row"
            >
                <Brand />
                <nav class="site-nav" aria-label="Primary">
                    {content::NAV_ANCHORS
                        .iter()
                        .map(|anchor| view! { <NavLink href=anchor.href>{anchor.label}</NavLink> })
                        .collect_view()}
                </nav>
                <Cluster gap=LayoutGap::Sm wrap=false layout_class="site-header-actions">
                    <ButtonLink
                        href="#faq"
                        variant=ButtonVariant::Ghost
                        layout_class="site-header-secondary"
                        trailing_icon=IconName::ChevronRight
                    >
                        {actions::BOOK_CALL}
                    </ButtonLink>
                    <ButtonLink href="#process" trailing_icon=IconName::ArrowRight>
                        {actions::GET_PLAN}
                    </ButtonLink>
                </Cluster>
            </Cluster>
        </header>
    }
}

#[component]
fn TrustBar() -> impl IntoView {
    view! {
        <Surface variant=SurfaceVariant::Brand padding=LayoutPadding::Sm layout_class="site-trust-bar">
            <Cluster
                justify=LayoutJustify::Center
                gap=LayoutGap::Xl
                role="group"
                aria_label="Why clients choose FineLine"
                layout_class="site-container"
            >
                {content::TRUST_POINTS
                    .iter()
                    .map(|point| {
                        view! {
                            <span class="site-trust-point">
                                <span class="site-trust-icon"><Icon icon=point.icon size=IconSize::Md /></span>
                                {point.label}
                            </span>
                        }
                    })
                    .collect_view()}
            </Cluster>
        </Surface>
    }
}

#[component]
fn HeroSection(revealed: ReadSignal<bool>) -> impl IntoView {
    view! {
        <Surface layout_class="site-hero" aria_label="Introduction" revealed>
            <Grid columns=GridColumns::Feature gap=LayoutGap::Xl layout_class="site-container">
                <Stack gap=LayoutGap::Lg align=LayoutAlign::Start>
                    <Badge layout_class="site-hero-badge">{hero::BADGE}</Badge>
                    <Heading level=HeadingLevel::H1 layout_class="site-hero-title">
                        {hero::TITLE}
                        " "
                        <span class="site-highlight">{hero::TITLE_HIGHLIGHT}</span>
                        "."
                    </Heading>
                    <Text role=TextRole::Lead tone=TextTone::Secondary>{hero::SUBTITLE}</Text>
                    <Cluster gap=LayoutGap::Sm>
                        <ButtonLink href="#faq" size=ButtonSize::Lg trailing_icon=IconName::ArrowRight>
                            {hero::PRIMARY_CTA}
                        </ButtonLink>
                        <ButtonLink href="#services" size=ButtonSize::Lg variant=ButtonVariant::Outline>
                            {hero::SECONDARY_CTA}
                        </ButtonLink>
                    </Cluster>
                    <Grid columns=GridColumns::Three gap=LayoutGap::Sm layout_class="site-hero-stats">
                        {hero::STATS
                            .iter()
                            .map(|stat| view! { <Stat value=stat.value label=stat.label /> })
                            .collect_view()}
                    </Grid>
                </Stack>
                <Card
                    variant=SurfaceVariant::Accent
                    elevation=Elevation::Overlay
                    padding=LayoutPadding::Lg
                    layout_class="site-hero-card"
                >
                    <Heading level=HeadingLevel::H2 tone=TextTone::Inverse>{hero::CARD_TITLE}</Heading>
                    <Text tone=TextTone::Inverse>{hero::CARD_BODY}</Text>
                </Card>
            </Grid>
        </Surface>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <Card padding=LayoutPadding::Lg layout_class="site-service-card">
            <div class="site-service" data-service=service.id>
                <span class="site-service-icon"><Icon icon=service.icon size=IconSize::Lg /></span>
                <Heading level=HeadingLevel::H3>{service.title}</Heading>
                <Text tone=TextTone::Secondary>{service.description}</Text>
                <Cluster gap=LayoutGap::Sm>
                    <ButtonLink
                        href="#faq"
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        shape=ButtonShape::Pill
                    >
                        {services::BOOK_ACTION}
                    </ButtonLink>
                    <ButtonLink
                        href="#process"
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        shape=ButtonShape::Pill
                        trailing_icon=IconName::ArrowUpRight
                    >
                        {services::DETAILS_ACTION}
                    </ButtonLink>
                </Cluster>
            </div>
        </Card>
    }
}

#[component]
fn ServicesSection(revealed: ReadSignal<bool>) -> impl IntoView {
    view! {
        <Surface id="services" layout_class="site-section" revealed>
            <Stack gap=LayoutGap::Xl layout_class="site-container">
                <Cluster justify=LayoutJustify::Between align=LayoutAlign::End>
                    <Stack gap=LayoutGap::Sm>
                        <Text role=TextRole::Eyebrow tone=TextTone::Secondary>{services::KICKER}</Text>
                        <Heading>{services::TITLE}</Heading>
                    </Stack>
                    <NavLink href="#process" layout_class="site-see-all">
                        {services::SEE_ALL}
                        <Icon icon=IconName::ChevronRight size=IconSize::Sm />
                    </NavLink>
                </Cluster>
                <Grid columns=GridColumns::Three gap=LayoutGap::Lg>
                    {services::ITEMS
                        .iter()
                        .map(|service| view! { <ServiceCard service=*service /> })
                        .collect_view()}
                </Grid>
                <Card padding=LayoutPadding::None layout_class="site-callout">
                    <Grid columns=GridColumns::Feature gap=LayoutGap::None>
                        <Stack gap=LayoutGap::Md padding=LayoutPadding::Lg>
                            <Heading level=HeadingLevel::H3>{services::CALLOUT_TITLE}</Heading>
                            <Text tone=TextTone::Secondary>{services::CALLOUT_BODY}</Text>
                            <Cluster gap=LayoutGap::Sm>
                                <ButtonLink href="#process" trailing_icon=IconName::ArrowRight>
                                    {services::CALLOUT_PRIMARY}
                                </ButtonLink>
                                <Button variant=ButtonVariant::Outline>
                                    {services::CALLOUT_SECONDARY}
                                </Button>
                            </Cluster>
                        </Stack>
                        <Stack gap=LayoutGap::Sm padding=LayoutPadding::Lg layout_class="site-callout-pills">
                            {services::CALLOUT_PILLS
                                .iter()
                                .map(|pill| view! { <span class="site-pill">{*pill}</span> })
                                .collect_view()}
                        </Stack>
                    </Grid>
                </Card>
            </Stack>
        </Surface>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <Card variant=SurfaceVariant::Muted layout_class="site-testimonial">
            <Stack gap=LayoutGap::Md>
                <span class="site-rating" aria-label=format!("Rated {} out of 5", testimonials::RATING)>
                    {(0..testimonials::RATING)
                        .map(|_| view! { <Icon icon=IconName::CheckCircle size=IconSize::Sm /> })
                        .collect_view()}
                </span>
                <Text role=TextRole::Quote tone=TextTone::Secondary>
                    "\u{201c}"{testimonial.quote}"\u{201d}"
                </Text>
                <Cluster gap=LayoutGap::Sm>
                    <span class="site-avatar" aria-hidden="true">{testimonial.initial().to_string()}</span>
                    <Stack gap=LayoutGap::None>
                        <Text role=TextRole::Label>{testimonial.author}</Text>
                        <Text role=TextRole::Caption tone=TextTone::Secondary>{testimonial.role}</Text>
                    </Stack>
                </Cluster>
            </Stack>
        </Card>
    }
}

#[component]
fn TestimonialsSection(revealed: ReadSignal<bool>) -> impl IntoView {
    view! {
        <Surface layout_class="site-section" aria_label=testimonials::TITLE revealed>
            <Stack gap=LayoutGap::Xl layout_class="site-container">
                <Stack gap=LayoutGap::Sm align=LayoutAlign::Center layout_class="site-section-intro">
                    <Heading>{testimonials::TITLE}</Heading>
                    <Text tone=TextTone::Secondary>{testimonials::INTRO}</Text>
                </Stack>
                <Grid columns=GridColumns::Three gap=LayoutGap::Lg>
                    {testimonials::ITEMS
                        .iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=*testimonial /> })
                        .collect_view()}
                </Grid>
            </Stack>
        </Surface>
    }
}

#[component]
fn ProcessSection(revealed: ReadSignal<bool>) -> impl IntoView {
    let active = create_rw_signal(0usize);

    view! {
        <Surface id="process" layout_class="site-section" revealed>
            <Stack gap=LayoutGap::Xl layout_class="site-container">
                <Stack gap=LayoutGap::Sm align=LayoutAlign::Center layout_class="site-section-intro">
                    <Text role=TextRole::Eyebrow tone=TextTone::Accent>{process::KICKER}</Text>
                    <Heading>{process::TITLE}</Heading>
                    <Text tone=TextTone::Secondary>{process::INTRO}</Text>
                </Stack>
                <StepFlow aria_label=process::TITLE>
                    {process::STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            let status = Signal::derive(move || StepStatus::for_index(index, active.get()));
                            view! {
                                <StepFlowStep
                                    number=index + 1
                                    title=step.title
                                    description=step.description
                                    status
                                    on_select=Callback::new(move |()| active.set(index))
                                />
                            }
                        })
                        .collect_view()}
                </StepFlow>
            </Stack>
        </Surface>
    }
}

#[component]
fn FaqSection(revealed: ReadSignal<bool>) -> impl IntoView {
    view! {
        <Surface id="faq" layout_class="site-section" revealed>
            <Stack gap=LayoutGap::Xl layout_class="site-container">
                <Grid columns=GridColumns::Three gap=LayoutGap::Md>
                    {faq::ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <Card layout_class="site-faq">
                                    <Heading level=HeadingLevel::H3>{item.question}</Heading>
                                    <Text tone=TextTone::Secondary>{item.answer}</Text>
                                </Card>
                            }
                        })
                        .collect_view()}
                </Grid>
                <Card padding=LayoutPadding::Lg layout_class="site-closing-cta">
                    <Cluster justify=LayoutJustify::Between>
                        <Stack gap=LayoutGap::Sm>
                            <Heading level=HeadingLevel::H3>{faq::CTA_TITLE}</Heading>
                            <Text tone=TextTone::Secondary>{faq::CTA_SUBTITLE}</Text>
                        </Stack>
                        <Cluster gap=LayoutGap::Sm>
                            <Button size=ButtonSize::Lg trailing_icon=IconName::ArrowRight>
                                {faq::CTA_PRIMARY}
                            </Button>
                            <Button
                                size=ButtonSize::Lg
                                variant=ButtonVariant::Outline
                                leading_icon=IconName::Mail
                            >
                                {faq::CTA_SECONDARY}
                            </Button>
                        </Cluster>
                    </Cluster>
                </Card>
            </Stack>
        </Surface>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <Stack gap=LayoutGap::Lg layout_class="site-container">
                <Grid columns=GridColumns::Two gap=LayoutGap::Lg>
                    <Stack gap=LayoutGap::Sm>
                        <Brand ui_slot="footer-brand" />
                        <Text role=TextRole::Caption tone=TextTone::Secondary>{footer::ABOUT}</Text>
                    </Stack>
                    <nav class="site-footer-nav" aria-label="Footer">
                        {content::NAV_ANCHORS
                            .iter()
                            .map(|anchor| view! { <NavLink href=anchor.href>{anchor.label}</NavLink> })
                            .collect_view()}
                    </nav>
                </Grid>
                <Cluster justify=LayoutJustify::Between layout_class="site-footer-bottom">
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        {footer::copyright(current_year())}
                    </Text>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>{footer::NOTE}</Text>
                </Cluster>
            </Stack>
        </footer>
    }
}

#[component]
fn ChatButton() -> impl IntoView {
    view! {
        <div class="site-chat">
            <Button
                size=ButtonSize::Lg
                shape=ButtonShape::Pill
                leading_icon=IconName::MessageSquare
                trailing_icon=IconName::ArrowUpRight
                layout_class="site-chat-button"
            >
                {actions::CHAT}
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_switches_state_only_past_the_threshold() {
        let cases = [
            (0.0, false),
            (SCROLL_THRESHOLD_PX, false),
            (SCROLL_THRESHOLD_PX + 0.5, true),
            (640.0, true),
        ];

        for (input, expected) in cases {
            assert_eq!(header_is_scrolled(input), expected, "input={input:?}");
        }
    }
}
