//! Static page copy for the FineLine landing page.

use system_ui::IconName;

/// Brand name shown in the header and footer.
pub const BRAND_NAME: &str = "FineLine";
/// Brand subtitle shown under the name.
pub const BRAND_TAGLINE: &str = "Financial Planning";
/// Meta description for the document head.
pub const META_DESCRIPTION: &str = "Clear, structured financial planning for retirement, \
investments, and risk. Book a free 15-minute intro call with FineLine.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// In-page anchor shown in the header and footer navigation.
pub struct NavAnchor {
    /// Link text.
    pub label: &'static str,
    /// Fragment target, including `#`.
    pub href: &'static str,
}

/// Header and footer anchors, in display order.
pub const NAV_ANCHORS: [NavAnchor; 3] = [
    NavAnchor {
        label: "Services",
        href: "#services",
    },
    NavAnchor {
        label: "Process",
        href: "#process",
    },
    NavAnchor {
        label: "FAQ",
        href: "#faq",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Credential shown in the trust bar.
pub struct TrustPoint {
    /// Leading icon.
    pub icon: IconName,
    /// Short label.
    pub label: &'static str,
}

/// Trust bar entries.
pub const TRUST_POINTS: [TrustPoint; 3] = [
    TrustPoint {
        icon: IconName::Users,
        label: "500+ Clients",
    },
    TrustPoint {
        icon: IconName::Shield,
        label: "FSCA Regulated",
    },
    TrustPoint {
        icon: IconName::Clock,
        label: "15+ Yrs Exp",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Headline figure in the hero.
pub struct HeroStat {
    /// Figure, e.g. `15 min`.
    pub value: &'static str,
    /// Caption under the figure.
    pub label: &'static str,
}

/// Hero copy.
pub mod hero {
    use super::HeroStat;

    /// Pill above the headline.
    pub const BADGE: &str = "Advice you can understand. A plan you can follow.";
    /// Plain part of the headline.
    pub const TITLE: &str = "Modern financial planning,";
    /// Highlighted part of the headline.
    pub const TITLE_HIGHLIGHT: &str = "without the noise";
    /// Supporting paragraph.
    pub const SUBTITLE: &str = "Clear, structured guidance for retirement, investments, and risk \
planning, built around your goals and updated as life changes.";
    /// Primary call to action.
    pub const PRIMARY_CTA: &str = "Book a free intro";
    /// Secondary call to action.
    pub const SECONDARY_CTA: &str = "View services";
    /// Figures under the calls to action.
    pub const STATS: [HeroStat; 3] = [
        HeroStat {
            value: "15 min",
            label: "Discovery call",
        },
        HeroStat {
            value: "2\u{2013}3 wks",
            label: "Plan delivery",
        },
        HeroStat {
            value: "Quarterly",
            label: "Ongoing reviews",
        },
    ];
    /// Feature card headline.
    pub const CARD_TITLE: &str = "Your future, planned.";
    /// Feature card caption.
    pub const CARD_BODY: &str = "Expert guidance for every stage of your financial journey.";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One service pillar.
pub struct Service {
    /// Stable identifier used in `data-service`.
    pub id: &'static str,
    /// Card icon.
    pub icon: IconName,
    /// Card title.
    pub title: &'static str,
    /// Card description.
    pub description: &'static str,
}

/// Services section copy.
pub mod services {
    use super::Service;
    use system_ui::IconName;

    /// Kicker above the section title.
    pub const KICKER: &str = "What we do";
    /// Section title.
    pub const TITLE: &str = "A clear plan across the pillars that matter.";
    /// Link beside the title.
    pub const SEE_ALL: &str = "See all services";
    /// Primary card action.
    pub const BOOK_ACTION: &str = "Book Consultation";
    /// Secondary card action.
    pub const DETAILS_ACTION: &str = "View Details";
    /// Service cards.
    pub const ITEMS: [Service; 3] = [
        Service {
            id: "investment",
            icon: IconName::BarChart,
            title: "Investment planning",
            description: "Align your portfolio to your goals, time horizon, and comfort with \
risk, without overcomplication.",
        },
        Service {
            id: "retirement",
            icon: IconName::Calendar,
            title: "Retirement planning",
            description: "Understand where you stand, what to change, and how to stay on track \
with simple review cycles.",
        },
        Service {
            id: "risk",
            icon: IconName::Shield,
            title: "Risk & protection",
            description: "Make sure the important things are protected: life cover, disability, \
and estate basics.",
        },
    ];

    /// Callout card title.
    pub const CALLOUT_TITLE: &str = "A plan you can actually use";
    /// Callout card body.
    pub const CALLOUT_BODY: &str = "We translate complexity into a one-page summary and a simple \
action list, so you always know what to do next.";
    /// Callout primary action.
    pub const CALLOUT_PRIMARY: &str = "Start with a snapshot";
    /// Callout secondary action.
    pub const CALLOUT_SECONDARY: &str = "Download brochure";
    /// Callout pills.
    pub const CALLOUT_PILLS: [&str; 4] = [
        "Clarity-first advice",
        "No jargon",
        "Review cadence",
        "Goal tracking",
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Client quote.
pub struct Testimonial {
    /// Quote text without surrounding quotation marks.
    pub quote: &'static str,
    /// Client name.
    pub author: &'static str,
    /// Client occupation.
    pub role: &'static str,
}

impl Testimonial {
    /// First character of the author's name, shown in the avatar.
    pub fn initial(&self) -> char {
        self.author.chars().next().unwrap_or('?')
    }
}

/// Testimonials section copy.
pub mod testimonials {
    use super::Testimonial;

    /// Section title.
    pub const TITLE: &str = "What our clients say";
    /// Section intro.
    pub const INTRO: &str = "Real stories from people who have achieved financial peace of mind \
with our guided planning.";
    /// Star rating shown on every card.
    pub const RATING: usize = 5;
    /// Quotes.
    pub const ITEMS: [Testimonial; 3] = [
        Testimonial {
            quote: "The clarity I gained after just one session was incredible. I finally feel \
in control of my retirement.",
            author: "Sarah M.",
            role: "Business Owner",
        },
        Testimonial {
            quote: "No jargon, just straight talk. FineLine made the complex world of \
investments actually make sense.",
            author: "David K.",
            role: "Senior Architect",
        },
        Testimonial {
            quote: "Excellent service and regular updates. They really care about the long-term \
relationship.",
            author: "Linda W.",
            role: "Retired Professional",
        },
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One step of the planning process.
pub struct ProcessStep {
    /// Step title.
    pub title: &'static str,
    /// Step description.
    pub description: &'static str,
}

/// Process section copy.
pub mod process {
    use super::ProcessStep;

    /// Kicker above the section title.
    pub const KICKER: &str = "Guided Journey";
    /// Section title.
    pub const TITLE: &str = "Our 6-Step Financial Planning Process";
    /// Section intro.
    pub const INTRO: &str = "We follow a structured, internationally recognized approach to \
ensure your financial plan is robust, clear, and actionable.";
    /// Steps in order. Display numbers start at 1.
    pub const STEPS: [ProcessStep; 6] = [
        ProcessStep {
            title: "Establish Relationship",
            description: "Setting the foundation and explaining how we work together.",
        },
        ProcessStep {
            title: "Gather Information",
            description: "Understanding your current situation and your long-term goals.",
        },
        ProcessStep {
            title: "Analyze Status",
            description: "Evaluating where you are now vs where you want to be.",
        },
        ProcessStep {
            title: "Develop Proposal",
            description: "Crafting a clear, structured plan built around your needs.",
        },
        ProcessStep {
            title: "Implement Plan",
            description: "Putting the recommendations into action with precision.",
        },
        ProcessStep {
            title: "Monitor & Review",
            description: "Ongoing reviews to keep you on track as life changes.",
        },
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Frequently asked question.
pub struct Faq {
    /// Question.
    pub question: &'static str,
    /// Answer.
    pub answer: &'static str,
}

/// FAQ section copy.
pub mod faq {
    use super::Faq;

    /// Questions and answers.
    pub const ITEMS: [Faq; 3] = [
        Faq {
            question: "How do I get started?",
            answer: "Book a short intro call, then we\u{2019}ll build your snapshot and agree on \
priorities.",
        },
        Faq {
            question: "Do you work remotely?",
            answer: "Yes. Video calls and secure document sharing make the process easy wherever \
you are.",
        },
        Faq {
            question: "What does it cost?",
            answer: "Pricing depends on scope. We\u{2019}ll confirm it after the intro call, with \
no surprises.",
        },
    ];
    /// Closing call-to-action title.
    pub const CTA_TITLE: &str = "Ready for a calmer plan?";
    /// Closing call-to-action subtitle.
    pub const CTA_SUBTITLE: &str = "Start with a free 15-minute intro call.";
    /// Closing primary action.
    pub const CTA_PRIMARY: &str = "Book now";
    /// Closing secondary action.
    pub const CTA_SECONDARY: &str = "Email us";
}

/// Footer copy.
pub mod footer {
    /// Short description under the brand.
    pub const ABOUT: &str = "Financial planning that feels straightforward: clear goals, smart \
structure, and consistent reviews.";
    /// Trailing note beside the copyright line.
    pub const NOTE: &str = "This is a UI refresh prototype.";

    /// Copyright line for `year`.
    pub fn copyright(year: i32) -> String {
        format!("\u{a9} {year} FineLine Financial Planning")
    }
}

/// Header and floating action labels.
pub mod actions {
    /// Quiet header action.
    pub const BOOK_CALL: &str = "Book a call";
    /// Primary header action.
    pub const GET_PLAN: &str = "Get a plan";
    /// Floating chat button.
    pub const CHAT: &str = "Chat with us";
}

/// Not-found page copy.
pub mod not_found {
    /// Page heading.
    pub const TITLE: &str = "Page not found";
    /// Explanation shown above the requested path.
    pub const BODY: &str = "We couldn\u{2019}t find anything at";
    /// Link back to the landing page.
    pub const HOME_LINK: &str = "Back to home";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_anchors_target_section_ids() {
        let hrefs: Vec<_> = NAV_ANCHORS.iter().map(|anchor| anchor.href).collect();
        assert_eq!(hrefs, vec!["#services", "#process", "#faq"]);
    }

    #[test]
    fn process_has_six_titled_steps() {
        assert_eq!(process::STEPS.len(), 6);
        assert_eq!(process::STEPS[0].title, "Establish Relationship");
        assert_eq!(process::STEPS[5].title, "Monitor & Review");
        assert!(process::STEPS
            .iter()
            .all(|step| !step.title.is_empty() && !step.description.is_empty()));
    }

    #[test]
    fn service_ids_are_unique() {
        let mut ids: Vec<_> = services::ITEMS.iter().map(|service| service.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), services::ITEMS.len());
    }

    #[test]
    fn testimonial_initial_uses_the_first_letter() {
        let initials: String = testimonials::ITEMS
            .iter()
            .map(Testimonial::initial)
            .collect();
        assert_eq!(initials, "SDL");
    }

    #[test]
    fn copyright_includes_the_year() {
        assert_eq!(
            footer::copyright(2026),
            "\u{a9} 2026 FineLine Financial Planning"
        );
    }
}
