use leptos::*;
use leptos_meta::*;
use site_runtime::{use_navigation, NavigationAdapter, NavigationProvider, RouteOutlet};

use crate::{
    content,
    pages::{HomePage, NotFoundPage},
};

#[component]
pub fn SiteApp(adapter: NavigationAdapter) -> impl IntoView {
    provide_meta_context();

    view! {
        <Meta name="description" content=content::META_DESCRIPTION />

        <NavigationProvider adapter>
            <RouteTitle />
            <div class="site-root">
                <RouteOutlet home=HomePage not_found=NotFoundPage />
            </div>
        </NavigationProvider>
    }
}

#[component]
fn RouteTitle() -> impl IntoView {
    let navigation = use_navigation();
    let title = move || navigation.route().title().to_string();

    view! { <Title text=title /> }
}
