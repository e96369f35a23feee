use leptos::prelude::*;

use crate::tabs::{Tab, TabController};

#[component]
pub fn TabBar() -> impl IntoView {
    let tabs = expect_context::<RwSignal<TabController>>();

    view! {
        <nav class="tab-bar">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-btn"
                            class:active=move || tabs.with(|t| t.is_active(tab))
                            data-tab=tab.id()
                            on:click=move |_| {
                                tabs.update(|t| {
                                    t.activate(tab);
                                });
                            }
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Section shown only while `tab` is active.
#[component]
pub fn TabPanel(tab: Tab, children: Children) -> impl IntoView {
    let tabs = expect_context::<RwSignal<TabController>>();

    view! {
        <section
            id=tab.id()
            class="tab-content"
            class:active=move || tabs.with(|t| t.is_active(tab))
        >
            {children()}
        </section>
    }
}
