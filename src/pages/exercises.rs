use leptos::prelude::*;

use super::Panel;
use crate::components::form_fields::{CheckboxGroup, SelectInput, TextArea, TextInput};
use crate::components::form_panel::FormPanel;
use crate::components::resource_list::ResourceList;
use crate::components::section_header::SectionHeader;
use crate::components::tab_bar::TabPanel;
use crate::config::AppConfig;
use crate::resources::exercises::{ExerciseFilters, ExerciseForm, Exercises};
use crate::tabs::Tab;
use crate::translate::{DIFFICULTIES, EXERCISE_TYPES, MUSCLE_GROUPS};

#[derive(Clone, Copy)]
struct Fields {
    name: RwSignal<String>,
    description: RwSignal<String>,
    exercise_type: RwSignal<String>,
    difficulty: RwSignal<String>,
    muscle_groups: RwSignal<Vec<String>>,
    duration: RwSignal<String>,
    calories: RwSignal<String>,
    equipment: RwSignal<String>,
    instructions: RwSignal<String>,
}

impl Fields {
    fn new() -> Self {
        let form = ExerciseForm::default();
        Self {
            name: RwSignal::new(form.name),
            description: RwSignal::new(form.description),
            exercise_type: RwSignal::new(form.exercise_type),
            difficulty: RwSignal::new(form.difficulty),
            muscle_groups: RwSignal::new(form.muscle_groups),
            duration: RwSignal::new(form.duration),
            calories: RwSignal::new(form.calories),
            equipment: RwSignal::new(form.equipment),
            instructions: RwSignal::new(form.instructions),
        }
    }

    fn reset(&self) {
        let form = ExerciseForm::default();
        self.name.set(form.name);
        self.description.set(form.description);
        self.exercise_type.set(form.exercise_type);
        self.difficulty.set(form.difficulty);
        self.muscle_groups.set(form.muscle_groups);
        self.duration.set(form.duration);
        self.calories.set(form.calories);
        self.equipment.set(form.equipment);
        self.instructions.set(form.instructions);
    }

    fn snapshot(&self) -> ExerciseForm {
        ExerciseForm {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            exercise_type: self.exercise_type.get_untracked(),
            difficulty: self.difficulty.get_untracked(),
            muscle_groups: self.muscle_groups.get_untracked(),
            duration: self.duration.get_untracked(),
            calories: self.calories.get_untracked(),
            equipment: self.equipment.get_untracked(),
            instructions: self.instructions.get_untracked(),
        }
    }
}

#[component]
pub fn ExercisesPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let filters = RwSignal::new(ExerciseFilters::default());
    let panel = Panel::<Exercises>::new(&config).with_filters(filters);
    panel.load_on_activation(Tab::Exercises);

    let fields = Fields::new();

    // Filter selects write through these and reload on change
    let type_filter = RwSignal::new(String::new());
    let difficulty_filter = RwSignal::new(String::new());
    let muscle_filter = RwSignal::new(String::new());
    let apply_filters = move |_: ()| {
        filters.set(ExerciseFilters {
            exercise_type: type_filter.get_untracked(),
            difficulty: difficulty_filter.get_untracked(),
            muscle_group: muscle_filter.get_untracked(),
        });
        panel.load();
    };

    view! {
        <TabPanel tab=Tab::Exercises>
            <SectionHeader
                title="Ejercicios"
                new_label="+ Nuevo Ejercicio"
                on_new=move |_| {
                    fields.reset();
                    panel.open_form();
                }
                on_refresh=move |_| panel.load()
            />

            <div class="filters">
                <SelectInput
                    id="filter-type"
                    label="Tipo"
                    value=type_filter
                    options=EXERCISE_TYPES
                    any_label="Todos"
                    on_change=apply_filters
                />
                <SelectInput
                    id="filter-difficulty"
                    label="Dificultad"
                    value=difficulty_filter
                    options=DIFFICULTIES
                    any_label="Todas"
                    on_change=apply_filters
                />
                <SelectInput
                    id="filter-muscle"
                    label="Grupo muscular"
                    value=muscle_filter
                    options=MUSCLE_GROUPS
                    any_label="Todos"
                    on_change=apply_filters
                />
            </div>

            <FormPanel
                title="Nuevo Ejercicio"
                open=panel.form_open
                on_submit=move |_| panel.submit(fields.snapshot().to_payload())
            >
                <TextInput id="exercise-name" label="Nombre" value=fields.name />
                <TextArea id="exercise-description" label="Descripción" value=fields.description />
                <SelectInput
                    id="exercise-type"
                    label="Tipo"
                    value=fields.exercise_type
                    options=EXERCISE_TYPES
                />
                <SelectInput
                    id="exercise-difficulty"
                    label="Dificultad"
                    value=fields.difficulty
                    options=DIFFICULTIES
                />
                <CheckboxGroup
                    label="Grupos musculares"
                    name="exercise-muscle"
                    selected=fields.muscle_groups
                    options=MUSCLE_GROUPS
                />
                <TextInput
                    id="exercise-duration"
                    label="Duración (minutos)"
                    value=fields.duration
                    input_type="number"
                />
                <TextInput
                    id="exercise-calories"
                    label="Calorías por minuto"
                    value=fields.calories
                    input_type="number"
                />
                <TextInput
                    id="exercise-equipment"
                    label="Equipo necesario"
                    value=fields.equipment
                    placeholder="Separado por comas"
                />
                <TextArea
                    id="exercise-instructions"
                    label="Instrucciones"
                    value=fields.instructions
                    placeholder="Una instrucción por línea"
                    rows=5
                />
            </FormPanel>

            <ResourceList
                id="exercises-list"
                content=panel.content
                on_delete=move |id| panel.delete(id)
            />
        </TabPanel>
    }
}
