use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{Deletable, Resource};
use crate::api::{Backend, Query};
use crate::error::ApiError;
use crate::render::{self, Fragment};

/// Blocking prompts: `window.alert` / `window.confirm` in the browser.
pub trait Prompter {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

/// Where a resource's list and form live.
pub trait ResourceView {
    /// Replace the whole list container.
    fn show(&self, content: Fragment);
    fn set_form_visible(&self, visible: bool);
    /// Current list filters.
    fn query(&self) -> Query {
        Vec::new()
    }
}

impl<P: Prompter + ?Sized> Prompter for &P {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

impl<V: ResourceView + ?Sized> ResourceView for &V {
    fn show(&self, content: Fragment) {
        (**self).show(content)
    }

    fn set_form_visible(&self, visible: bool) {
        (**self).set_form_visible(visible)
    }

    fn query(&self) -> Query {
        (**self).query()
    }
}

/// Hands out one token per list load. Only the newest token may render.
#[derive(Debug, Clone, Default)]
pub struct LoadGuard(Arc<AtomicU64>);

impl LoadGuard {
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.load(Ordering::SeqCst) == token
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Rendered { count: usize },
    Failed(ApiError),
    /// A newer load started before this response arrived; nothing was shown.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
    Failed(ApiError),
}

/// Load, create and delete for one resource, generic over the transport and
/// the UI surface.
pub struct ResourceController<R, B, P, V> {
    backend: B,
    prompter: P,
    view: V,
    guard: LoadGuard,
    resource: PhantomData<fn() -> R>,
}

impl<R, B, P, V> ResourceController<R, B, P, V>
where
    R: Resource,
    B: Backend,
    P: Prompter,
    V: ResourceView,
{
    pub fn new(backend: B, prompter: P, view: V, guard: LoadGuard) -> Self {
        Self {
            backend,
            prompter,
            view,
            guard,
            resource: PhantomData,
        }
    }

    /// Fetch the list and replace the container with cards, the empty state
    /// or an error block.
    pub async fn load(&self) -> LoadOutcome {
        let token = self.guard.begin();
        let query = self.view.query();
        self.view.show(render::loading(R::MESSAGES.loading));
        debug!(resource = R::NAME, token, "Loading list");

        let result = self.backend.list::<R::Record>(R::PATH, &query).await;

        if !self.guard.is_current(token) {
            debug!(resource = R::NAME, token, "Discarding stale list response");
            return LoadOutcome::Stale;
        }

        match result {
            Ok(records) => {
                info!(resource = R::NAME, count = records.len(), "Loaded list");
                self.view.show(R::render_list(&records));
                LoadOutcome::Rendered {
                    count: records.len(),
                }
            }
            Err(err) => {
                warn!(resource = R::NAME, error = %err, "Failed to load list");
                self.view
                    .show(render::load_error(R::MESSAGES.load_failed, &err));
                LoadOutcome::Failed(err)
            }
        }
    }

    /// POST the payload. On success: alert, hide the form, reload once.
    /// On failure: alert only; the form stays open.
    pub async fn submit(&self, payload: &R::Payload) -> Result<R::Record, ApiError> {
        match self.backend.create::<_, R::Record>(R::PATH, payload).await {
            Ok(record) => {
                info!(resource = R::NAME, "Created record");
                self.prompter.alert(R::MESSAGES.created);
                self.view.set_form_visible(false);
                self.load().await;
                Ok(record)
            }
            Err(err) => {
                warn!(resource = R::NAME, error = %err, "Create failed");
                self.prompter
                    .alert(&err.alert_text(R::MESSAGES.create_failed));
                Err(err)
            }
        }
    }
}

impl<R, B, P, V> ResourceController<R, B, P, V>
where
    R: Deletable,
    B: Backend,
    P: Prompter,
    V: ResourceView,
{
    /// Ask first; only a confirmed delete reaches the backend.
    pub async fn delete(&self, id: i64) -> DeleteOutcome {
        if !self.prompter.confirm(R::DELETE.confirm) {
            debug!(resource = R::NAME, id, "Delete cancelled");
            return DeleteOutcome::Cancelled;
        }

        match self.backend.delete(R::PATH, id).await {
            Ok(()) => {
                info!(resource = R::NAME, id, "Deleted record");
                self.prompter.alert(R::DELETE.deleted);
                self.load().await;
                DeleteOutcome::Deleted
            }
            Err(err) => {
                warn!(resource = R::NAME, id, error = %err, "Delete failed");
                self.prompter.alert(&err.alert_text(R::DELETE.failed));
                DeleteOutcome::Failed(err)
            }
        }
    }
}
