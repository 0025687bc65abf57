//! Route table mapping logical paths to pages.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Pages the site can render.
pub enum SiteRoute {
    /// Marketing landing page at `/`.
    Home,
    /// Any other path.
    NotFound,
}

impl SiteRoute {
    /// Resolves a logical path. Only the exact root path is the home page.
    pub fn resolve(current_path: &str) -> Self {
        match current_path {
            "/" => Self::Home,
            _ => Self::NotFound,
        }
    }

    /// Stable token used in `data-route` attributes.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::NotFound => "not-found",
        }
    }

    /// Document title for the route.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "FineLine Financial Planning",
            Self::NotFound => "Page not found | FineLine",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_exact_root_path_resolves_home() {
        let cases = [
            ("/", SiteRoute::Home),
            ("", SiteRoute::NotFound),
            ("/services", SiteRoute::NotFound),
            ("//", SiteRoute::NotFound),
            ("/index.html", SiteRoute::NotFound),
        ];

        for (input, expected) in cases {
            assert_eq!(SiteRoute::resolve(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn route_tokens_are_stable() {
        assert_eq!(SiteRoute::Home.id(), "home");
        assert_eq!(SiteRoute::NotFound.id(), "not-found");
        assert!(SiteRoute::NotFound.title().contains("not found"));
    }
}
