use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::{Messages, Resource};
use crate::forms;
use crate::render::{self, Card, EmptyState, Fragment};

/// A workout session. The backend never exposes delete for these.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub routine_id: i64,
    pub started_at: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub total_duration_minutes: Option<i64>,
    #[serde(default)]
    pub calories_burned: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSession {
    pub user_id: Option<i64>,
    pub routine_id: Option<i64>,
    /// ISO-8601 UTC with milliseconds, e.g. `2024-05-01T08:30:00.000Z`.
    pub started_at: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionForm {
    pub user_id: String,
    pub routine_id: String,
}

impl SessionForm {
    /// A session starts at the moment it is submitted.
    pub fn to_payload(&self, now: DateTime<Utc>) -> NewSession {
        NewSession {
            user_id: forms::optional_int(&self.user_id),
            routine_id: forms::optional_int(&self.routine_id),
            started_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

pub struct Sessions;

impl Resource for Sessions {
    type Record = Session;
    type Payload = NewSession;

    const NAME: &'static str = "sessions";
    const PATH: &'static str = "/sessions";
    const MESSAGES: Messages = Messages {
        loading: "Cargando sesiones...",
        empty: EmptyState {
            title: "No hay sesiones",
            hint: "Inicia tu primera sesión usando el botón de arriba",
        },
        load_failed: "No se pudo cargar las sesiones",
        created: "Sesión iniciada exitosamente!",
        create_failed: "No se pudo iniciar la sesión",
    };

    fn card(session: &Session) -> Fragment {
        let (status_class, status_label) = if session.completed {
            ("success", "Completada")
        } else {
            ("warning", "En progreso")
        };

        Card {
            title: &format!("Sesión #{}", session.id),
            subtitle: &format!(
                "Usuario ID: {} | Rutina ID: {}",
                session.user_id, session.routine_id
            ),
            body: vec![
                render::field_html(
                    "Estado",
                    &render::badge(&format!("badge-{}", status_class), status_label),
                ),
                render::field("Iniciada", render::timestamp(&session.started_at)),
                render::optional_field(
                    "Completada",
                    session.completed_at.as_deref().map(render::timestamp),
                    "",
                ),
                render::optional_field("Duración", session.total_duration_minutes, "minutos"),
                render::optional_field("Calorías quemadas", session.calories_burned, ""),
                render::optional_field(
                    "Notas",
                    session.notes.as_deref().filter(|n| !n.is_empty()),
                    "",
                ),
            ],
            tags: vec![render::tag(&format!("tag-{}", status_class), status_label)],
            delete_id: None,
        }
        .render()
    }
}
