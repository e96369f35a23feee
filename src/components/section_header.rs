use leptos::prelude::*;

#[component]
pub fn SectionHeader(
    title: &'static str,
    /// Text of the "new" button, e.g. "+ Nuevo Ejercicio"
    new_label: &'static str,
    #[prop(into)] on_new: Callback<()>,
    #[prop(into)] on_refresh: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2>{title}</h2>
            <div class="section-actions">
                <button class="btn btn-secondary" on:click=move |_| on_refresh.run(())>
                    "Actualizar"
                </button>
                <button class="btn btn-primary" on:click=move |_| on_new.run(())>
                    {new_label}
                </button>
            </div>
        </div>
    }
}
