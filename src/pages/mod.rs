pub mod exercises;
pub mod progress;
pub mod routines;
pub mod sessions;
pub mod users;

use std::marker::PhantomData;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{HttpBackend, Query};
use crate::browser::BrowserPrompter;
use crate::config::AppConfig;
use crate::render::Fragment;
use crate::resources::exercises::ExerciseFilters;
use crate::resources::{Deletable, LoadGuard, Resource, ResourceController, ResourceView};
use crate::tabs::{Tab, TabController};

/// Reactive state behind one resource tab: the list container's HTML, the
/// form's visibility and, for exercises, the list filters.
pub struct Panel<R> {
    pub content: RwSignal<String>,
    pub form_open: RwSignal<bool>,
    filters: Option<RwSignal<ExerciseFilters>>,
    guard: StoredValue<LoadGuard>,
    backend: StoredValue<HttpBackend>,
    resource: PhantomData<fn() -> R>,
}

impl<R> Clone for Panel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Panel<R> {}

impl<R> Panel<R>
where
    R: Resource + 'static,
    R::Payload: 'static,
{
    pub fn new(config: &AppConfig) -> Self {
        Self {
            content: RwSignal::new(String::new()),
            form_open: RwSignal::new(false),
            filters: None,
            guard: StoredValue::new(LoadGuard::default()),
            backend: StoredValue::new(HttpBackend::new(config.api_base_url.clone())),
            resource: PhantomData,
        }
    }

    pub fn with_filters(mut self, filters: RwSignal<ExerciseFilters>) -> Self {
        self.filters = Some(filters);
        self
    }

    fn controller(self) -> ResourceController<R, HttpBackend, BrowserPrompter, Self> {
        ResourceController::new(
            self.backend.get_value(),
            BrowserPrompter,
            self,
            self.guard.get_value(),
        )
    }

    /// Load whenever the tab bar requests this tab, including at startup.
    pub fn load_on_activation(self, tab: Tab) {
        let tabs = expect_context::<RwSignal<TabController>>();
        Effect::new(move |_| {
            if tabs.with(|t| t.load_request().tab) == tab {
                self.load();
            }
        });
    }

    pub fn load(self) {
        spawn_local(async move {
            self.controller().load().await;
        });
    }

    pub fn submit(self, payload: R::Payload) {
        spawn_local(async move {
            let _ = self.controller().submit(&payload).await;
        });
    }

    pub fn open_form(self) {
        self.form_open.set(true);
    }

}

impl<R> Panel<R>
where
    R: Deletable + 'static,
    R::Payload: 'static,
{
    pub fn delete(self, id: i64) {
        spawn_local(async move {
            self.controller().delete(id).await;
        });
    }
}

impl<R> ResourceView for Panel<R> {
    fn show(&self, content: Fragment) {
        self.content.set(content.into_string());
    }

    fn set_form_visible(&self, visible: bool) {
        self.form_open.set(visible);
    }

    fn query(&self) -> Query {
        self.filters
            .map(|f| f.with_untracked(ExerciseFilters::to_query))
            .unwrap_or_default()
    }
}
