use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Container for pre-rendered card HTML.
///
/// Delete buttons inside the cards carry `data-delete-id`; a click on one is
/// routed to `on_delete` with the parsed id.
#[component]
pub fn ResourceList(
    id: &'static str,
    content: RwSignal<String>,
    #[prop(optional, into)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        let Some(on_delete) = on_delete else {
            return;
        };
        let Some(record_id) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("[data-delete-id]").ok().flatten())
            .and_then(|button| button.get_attribute("data-delete-id"))
            .and_then(|raw| raw.parse::<i64>().ok())
        else {
            return;
        };
        on_delete.run(record_id);
    };

    view! {
        <div id=id class="resource-list" on:click=on_click inner_html=move || content.get()></div>
    }
}
