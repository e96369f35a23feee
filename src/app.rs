use leptos::prelude::*;

use crate::components::tab_bar::TabBar;
use crate::config::AppConfig;
use crate::pages::exercises::ExercisesPage;
use crate::pages::progress::ProgressPage;
use crate::pages::routines::RoutinesPage;
use crate::pages::sessions::SessionsPage;
use crate::pages::users::UsersPage;
use crate::tabs::TabController;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let tabs = RwSignal::new(TabController::new(config.default_tab));
    provide_context(tabs);
    provide_context(config);

    view! {
        <style>{include_str!("app.css")}</style>
        <div class="container">
            <header class="app-header">
                <h1>"FitTrack"</h1>
                <p class="app-subtitle">"Ejercicios, rutinas y progreso"</p>
            </header>
            <TabBar />
            <main class="content">
                <ExercisesPage />
                <RoutinesPage />
                <UsersPage />
                <SessionsPage />
                <ProgressPage />
            </main>
        </div>
    }
}
