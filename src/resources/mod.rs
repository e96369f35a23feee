//! One module per backend entity: record shape, create payload, form mapping
//! and card layout. The shared load/create/delete flow is in [`controller`].

pub mod controller;
pub mod exercises;
pub mod progress;
pub mod routines;
pub mod sessions;
pub mod users;

pub use controller::{LoadGuard, Prompter, ResourceController, ResourceView};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::render::{self, EmptyState, Fragment};

/// User-facing texts for the list and create flow.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub loading: &'static str,
    pub empty: EmptyState,
    /// Prefix of the inline error, followed by the failure text.
    pub load_failed: &'static str,
    pub created: &'static str,
    /// Alert text when the server gives no detail.
    pub create_failed: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteMessages {
    pub confirm: &'static str,
    pub deleted: &'static str,
    pub failed: &'static str,
}

pub trait Resource {
    type Record: DeserializeOwned;
    type Payload: Serialize;

    /// Short name for logs.
    const NAME: &'static str;
    /// Collection path, e.g. `/exercises`.
    const PATH: &'static str;
    const MESSAGES: Messages;

    fn card(record: &Self::Record) -> Fragment;

    fn render_list(records: &[Self::Record]) -> Fragment {
        render::list(records, &Self::MESSAGES.empty, Self::card)
    }
}

/// Resources the backend lets us delete.
pub trait Deletable: Resource {
    const DELETE: DeleteMessages;
}
