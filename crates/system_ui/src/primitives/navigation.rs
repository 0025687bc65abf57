use super::*;

#[component]
/// Plain text link used in header and footer navigation.
pub fn NavLink(
    #[prop(into)] href: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            class=merge_layout_class("ui-nav-link", layout_class)
            data-ui-primitive="true"
            data-ui-kind="nav-link"
        >
            {children()}
        </a>
    }
}

#[component]
/// Root container for a guided multi-step flow. Steps behave as a tab list.
pub fn StepFlow(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <ol
            class=merge_layout_class("ui-step-flow", layout_class)
            role="tablist"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="step-flow"
        >
            {children()}
        </ol>
    }
}

#[component]
/// Numbered step within a [`StepFlow`]. Clicking or focusing it selects it.
pub fn StepFlowStep(
    number: usize,
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
    #[prop(into)] status: MaybeSignal<StepStatus>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    let select = move || {
        if let Some(on_select) = on_select.as_ref() {
            on_select.call(());
        }
    };

    view! {
        <li
            class=merge_layout_class("ui-step-flow-step", layout_class)
            data-ui-primitive="true"
            data-ui-kind="step-flow-step"
            data-ui-state=move || status.get().token()
        >
            <button
                type="button"
                role="tab"
                aria-selected=move || bool_token(status.get() == StepStatus::Current)
                data-ui-slot="trigger"
                on:click=move |_: MouseEvent| select()
                on:focus=move |_: FocusEvent| select()
            >
                <span data-ui-slot="badge" aria-hidden="true">{number}</span>
                <span data-ui-slot="copy">
                    <span data-ui-slot="title">{title}</span>
                    {description.map(|description| view! { <span data-ui-slot="description">{description}</span> })}
                </span>
                <span data-ui-slot="more">
                    "Learn more"
                    <Icon icon=IconName::ChevronRight size=IconSize::Xs />
                </span>
            </button>
        </li>
    }
}
