use leptos::prelude::*;

use crate::forms;

#[component]
pub fn TextInput(
    /// DOM id, also the label's `for`
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    /// "text", "email" or "number"
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    /// `step` for number inputs, e.g. "0.1"
    #[prop(optional)]
    step: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                type=input_type
                class="input"
                placeholder=placeholder
                step=step
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextArea(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <textarea
                id=id
                class="input"
                rows=rows
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// A `<select>` over a translation table. With `any_label` the first option
/// is blank, meaning "no filter".
#[component]
pub fn SelectInput(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    options: &'static [(&'static str, &'static str)],
    #[prop(optional)] any_label: Option<&'static str>,
    #[prop(optional, into)] on_change: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <select
                id=id
                class="input"
                on:change=move |ev| {
                    value.set(event_target_value(&ev));
                    if let Some(cb) = on_change {
                        cb.run(());
                    }
                }
            >
                {any_label.map(|text| view! {
                    <option value="" prop:selected=move || value.get().is_empty()>{text}</option>
                })}
                {options
                    .iter()
                    .map(|&(code, text)| {
                        view! {
                            <option value=code prop:selected=move || value.get() == code>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// DOM id of one checkbox in a group, e.g. `exercise-muscle-full_body`.
fn checkbox_id(name: &str, code: &str) -> String {
    format!("{}-{}", name, code)
}

/// One checkbox per table entry, bound to the list of checked codes.
#[component]
pub fn CheckboxGroup(
    label: &'static str,
    /// Prefix for the checkbox ids
    name: &'static str,
    selected: RwSignal<Vec<String>>,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <fieldset class="form-group checkbox-group">
            <legend>{label}</legend>
            {options
                .iter()
                .map(|&(code, text)| {
                    let id = checkbox_id(name, code);
                    let label_for = id.clone();
                    view! {
                        <label class="checkbox-label" for=label_for>
                            <input
                                id=id
                                type="checkbox"
                                value=code
                                prop:checked=move || selected.with(|s| s.iter().any(|c| c == code))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    selected.update(|s| forms::toggle(s, code, checked));
                                }
                            />
                            {text}
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

#[component]
pub fn CheckboxInput(id: &'static str, label: &'static str, checked: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="checkbox-label" for=id>
                <input
                    id=id
                    type="checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |ev| checked.set(event_target_checked(&ev))
                />
                {label}
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_ids_are_unique_per_group() {
        let ids: Vec<String> = crate::translate::MUSCLE_GROUPS
            .iter()
            .map(|(code, _)| checkbox_id("routine-muscle", code))
            .collect();
        assert_eq!(ids[0], "routine-muscle-chest");
        assert_eq!(ids.last().map(String::as_str), Some("routine-muscle-full_body"));

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
        assert_ne!(checkbox_id("exercise-muscle", "chest"), checkbox_id("routine-muscle", "chest"));
    }
}
