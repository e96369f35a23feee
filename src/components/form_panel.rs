use leptos::prelude::*;

/// Creation form, hidden until `open` is set.
#[component]
pub fn FormPanel(
    title: &'static str,
    open: RwSignal<bool>,
    #[prop(into)] on_submit: Callback<()>,
    children: Children,
) -> impl IntoView {
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div
            class="form-container"
            style:display=move || if open.get() { "block" } else { "none" }
        >
            <h3>{title}</h3>
            <form on:submit=submit>
                {children()}
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">"Guardar"</button>
                    <button type="button" class="btn btn-secondary" on:click=move |_| open.set(false)>
                        "Cancelar"
                    </button>
                </div>
            </form>
        </div>
    }
}
