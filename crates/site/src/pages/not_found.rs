use leptos::*;
use site_runtime::{use_navigation, Link};
use system_ui::prelude::*;

use crate::content::not_found;

#[component]
/// Fallback page for every path other than `/`.
pub fn NotFoundPage() -> impl IntoView {
    let navigation = use_navigation();

    view! {
        <main class="site-page site-not-found" data-page="not-found">
            <Stack gap=LayoutGap::Lg align=LayoutAlign::Center padding=LayoutPadding::Lg layout_class="site-container">
                <Heading level=HeadingLevel::H1>{not_found::TITLE}</Heading>
                <Text tone=TextTone::Secondary>
                    {not_found::BODY}
                    " "
                    <code class="site-not-found-path">{move || navigation.path.get()}</code>
                </Text>
                <Link to="/" class="ui-button" aria_label=not_found::HOME_LINK>
                    <Icon icon=IconName::ArrowRight size=IconSize::Sm />
                    {not_found::HOME_LINK}
                </Link>
            </Stack>
        </main>
    }
}
