use leptos::prelude::*;

use super::Panel;
use crate::components::form_fields::{CheckboxGroup, SelectInput, TextArea, TextInput};
use crate::components::form_panel::FormPanel;
use crate::components::resource_list::ResourceList;
use crate::components::section_header::SectionHeader;
use crate::components::tab_bar::TabPanel;
use crate::config::AppConfig;
use crate::resources::routines::{RoutineForm, Routines};
use crate::tabs::Tab;
use crate::translate::{DIFFICULTIES, MUSCLE_GROUPS};

#[derive(Clone, Copy)]
struct Fields {
    name: RwSignal<String>,
    description: RwSignal<String>,
    difficulty: RwSignal<String>,
    target_muscle_groups: RwSignal<Vec<String>>,
    duration: RwSignal<String>,
}

impl Fields {
    fn new() -> Self {
        let form = RoutineForm::default();
        Self {
            name: RwSignal::new(form.name),
            description: RwSignal::new(form.description),
            difficulty: RwSignal::new(form.difficulty),
            target_muscle_groups: RwSignal::new(form.target_muscle_groups),
            duration: RwSignal::new(form.duration),
        }
    }

    fn reset(&self) {
        let form = RoutineForm::default();
        self.name.set(form.name);
        self.description.set(form.description);
        self.difficulty.set(form.difficulty);
        self.target_muscle_groups.set(form.target_muscle_groups);
        self.duration.set(form.duration);
    }

    fn snapshot(&self) -> RoutineForm {
        RoutineForm {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            difficulty: self.difficulty.get_untracked(),
            target_muscle_groups: self.target_muscle_groups.get_untracked(),
            duration: self.duration.get_untracked(),
        }
    }
}

#[component]
pub fn RoutinesPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let panel = Panel::<Routines>::new(&config);
    panel.load_on_activation(Tab::Routines);

    let fields = Fields::new();

    view! {
        <TabPanel tab=Tab::Routines>
            <SectionHeader
                title="Rutinas"
                new_label="+ Nueva Rutina"
                on_new=move |_| {
                    fields.reset();
                    panel.open_form();
                }
                on_refresh=move |_| panel.load()
            />

            <FormPanel
                title="Nueva Rutina"
                open=panel.form_open
                on_submit=move |_| panel.submit(fields.snapshot().to_payload())
            >
                <TextInput id="routine-name" label="Nombre" value=fields.name />
                <TextArea id="routine-description" label="Descripción" value=fields.description />
                <SelectInput
                    id="routine-difficulty"
                    label="Dificultad"
                    value=fields.difficulty
                    options=DIFFICULTIES
                />
                <CheckboxGroup
                    label="Grupos musculares objetivo"
                    name="routine-muscle"
                    selected=fields.target_muscle_groups
                    options=MUSCLE_GROUPS
                />
                <TextInput
                    id="routine-duration"
                    label="Duración estimada (minutos)"
                    value=fields.duration
                    input_type="number"
                />
            </FormPanel>

            <ResourceList
                id="routines-list"
                content=panel.content
                on_delete=move |id| panel.delete(id)
            />
        </TabPanel>
    }
}
