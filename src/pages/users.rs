use leptos::prelude::*;

use super::Panel;
use crate::components::form_fields::{SelectInput, TextInput};
use crate::components::form_panel::FormPanel;
use crate::components::resource_list::ResourceList;
use crate::components::section_header::SectionHeader;
use crate::components::tab_bar::TabPanel;
use crate::config::AppConfig;
use crate::resources::users::{UserForm, Users};
use crate::tabs::Tab;
use crate::translate::DIFFICULTIES;

#[derive(Clone, Copy)]
struct Fields {
    username: RwSignal<String>,
    email: RwSignal<String>,
    age: RwSignal<String>,
    weight: RwSignal<String>,
    height: RwSignal<String>,
    fitness_level: RwSignal<String>,
    goals: RwSignal<String>,
}

impl Fields {
    fn new() -> Self {
        let form = UserForm::default();
        Self {
            username: RwSignal::new(form.username),
            email: RwSignal::new(form.email),
            age: RwSignal::new(form.age),
            weight: RwSignal::new(form.weight),
            height: RwSignal::new(form.height),
            fitness_level: RwSignal::new(form.fitness_level),
            goals: RwSignal::new(form.goals),
        }
    }

    fn reset(&self) {
        let form = UserForm::default();
        self.username.set(form.username);
        self.email.set(form.email);
        self.age.set(form.age);
        self.weight.set(form.weight);
        self.height.set(form.height);
        self.fitness_level.set(form.fitness_level);
        self.goals.set(form.goals);
    }

    fn snapshot(&self) -> UserForm {
        UserForm {
            username: self.username.get_untracked(),
            email: self.email.get_untracked(),
            age: self.age.get_untracked(),
            weight: self.weight.get_untracked(),
            height: self.height.get_untracked(),
            fitness_level: self.fitness_level.get_untracked(),
            goals: self.goals.get_untracked(),
        }
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let panel = Panel::<Users>::new(&config);
    panel.load_on_activation(Tab::Users);

    let fields = Fields::new();

    view! {
        <TabPanel tab=Tab::Users>
            <SectionHeader
                title="Usuarios"
                new_label="+ Nuevo Usuario"
                on_new=move |_| {
                    fields.reset();
                    panel.open_form();
                }
                on_refresh=move |_| panel.load()
            />

            <FormPanel
                title="Nuevo Usuario"
                open=panel.form_open
                on_submit=move |_| panel.submit(fields.snapshot().to_payload())
            >
                <TextInput id="user-username" label="Nombre de usuario" value=fields.username />
                <TextInput id="user-email" label="Email" value=fields.email input_type="email" />
                <TextInput id="user-age" label="Edad" value=fields.age input_type="number" />
                <TextInput
                    id="user-weight"
                    label="Peso (kg)"
                    value=fields.weight
                    input_type="number"
                    step="0.1"
                />
                <TextInput
                    id="user-height"
                    label="Altura (cm)"
                    value=fields.height
                    input_type="number"
                    step="0.1"
                />
                <SelectInput
                    id="user-fitness-level"
                    label="Nivel de condición física"
                    value=fields.fitness_level
                    options=DIFFICULTIES
                />
                <TextInput
                    id="user-goals"
                    label="Objetivos"
                    value=fields.goals
                    placeholder="Separados por comas"
                />
            </FormPanel>

            <ResourceList
                id="users-list"
                content=panel.content
                on_delete=move |id| panel.delete(id)
            />
        </TabPanel>
    }
}
