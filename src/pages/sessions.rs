use leptos::prelude::*;

use super::Panel;
use crate::components::form_fields::TextInput;
use crate::components::form_panel::FormPanel;
use crate::components::resource_list::ResourceList;
use crate::components::section_header::SectionHeader;
use crate::components::tab_bar::TabPanel;
use crate::config::AppConfig;
use crate::resources::sessions::{SessionForm, Sessions};
use crate::tabs::Tab;

#[component]
pub fn SessionsPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let panel = Panel::<Sessions>::new(&config);
    panel.load_on_activation(Tab::Sessions);

    let user_id = RwSignal::new(String::new());
    let routine_id = RwSignal::new(String::new());

    let submit = move |_: ()| {
        let form = SessionForm {
            user_id: user_id.get_untracked(),
            routine_id: routine_id.get_untracked(),
        };
        panel.submit(form.to_payload(chrono::Utc::now()));
    };

    view! {
        <TabPanel tab=Tab::Sessions>
            <SectionHeader
                title="Sesiones"
                new_label="+ Nueva Sesión"
                on_new=move |_| {
                    user_id.set(String::new());
                    routine_id.set(String::new());
                    panel.open_form();
                }
                on_refresh=move |_| panel.load()
            />

            <FormPanel title="Nueva Sesión" open=panel.form_open on_submit=submit>
                <TextInput id="session-user" label="ID de usuario" value=user_id input_type="number" />
                <TextInput
                    id="session-routine"
                    label="ID de rutina"
                    value=routine_id
                    input_type="number"
                />
            </FormPanel>

            <ResourceList id="sessions-list" content=panel.content />
        </TabPanel>
    }
}
