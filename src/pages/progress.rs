use leptos::prelude::*;

use super::Panel;
use crate::components::form_fields::{CheckboxInput, TextInput};
use crate::components::form_panel::FormPanel;
use crate::components::resource_list::ResourceList;
use crate::components::section_header::SectionHeader;
use crate::components::tab_bar::TabPanel;
use crate::config::AppConfig;
use crate::resources::progress::{ProgressForm, ProgressLog};
use crate::tabs::Tab;

#[derive(Clone, Copy)]
struct Fields {
    user_id: RwSignal<String>,
    exercise_id: RwSignal<String>,
    weight: RwSignal<String>,
    reps: RwSignal<String>,
    sets: RwSignal<String>,
    duration: RwSignal<String>,
    personal_record: RwSignal<bool>,
}

impl Fields {
    fn new() -> Self {
        Self {
            user_id: RwSignal::new(String::new()),
            exercise_id: RwSignal::new(String::new()),
            weight: RwSignal::new(String::new()),
            reps: RwSignal::new(String::new()),
            sets: RwSignal::new(String::new()),
            duration: RwSignal::new(String::new()),
            personal_record: RwSignal::new(false),
        }
    }

    fn reset(&self) {
        for field in [
            self.user_id,
            self.exercise_id,
            self.weight,
            self.reps,
            self.sets,
            self.duration,
        ] {
            field.set(String::new());
        }
        self.personal_record.set(false);
    }

    fn snapshot(&self) -> ProgressForm {
        ProgressForm {
            user_id: self.user_id.get_untracked(),
            exercise_id: self.exercise_id.get_untracked(),
            weight: self.weight.get_untracked(),
            reps: self.reps.get_untracked(),
            sets: self.sets.get_untracked(),
            duration: self.duration.get_untracked(),
            personal_record: self.personal_record.get_untracked(),
        }
    }
}

#[component]
pub fn ProgressPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let panel = Panel::<ProgressLog>::new(&config);
    panel.load_on_activation(Tab::Progress);

    let fields = Fields::new();

    view! {
        <TabPanel tab=Tab::Progress>
            <SectionHeader
                title="Progreso"
                new_label="+ Registrar Progreso"
                on_new=move |_| {
                    fields.reset();
                    panel.open_form();
                }
                on_refresh=move |_| panel.load()
            />

            <FormPanel
                title="Registrar Progreso"
                open=panel.form_open
                on_submit=move |_| panel.submit(fields.snapshot().to_payload())
            >
                <TextInput id="progress-user" label="ID de usuario" value=fields.user_id input_type="number" />
                <TextInput
                    id="progress-exercise"
                    label="ID de ejercicio"
                    value=fields.exercise_id
                    input_type="number"
                />
                <TextInput
                    id="progress-weight"
                    label="Peso (kg)"
                    value=fields.weight
                    input_type="number"
                    step="0.1"
                />
                <TextInput id="progress-reps" label="Repeticiones" value=fields.reps input_type="number" />
                <TextInput id="progress-sets" label="Series" value=fields.sets input_type="number" />
                <TextInput
                    id="progress-duration"
                    label="Duración (minutos)"
                    value=fields.duration
                    input_type="number"
                />
                <CheckboxInput
                    id="progress-record"
                    label="Récord personal"
                    checked=fields.personal_record
                />
            </FormPanel>

            <ResourceList id="progress-list" content=panel.content />
        </TabPanel>
    }
}
