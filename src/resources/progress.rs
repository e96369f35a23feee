use serde::{Deserialize, Serialize};

use super::{Messages, Resource};
use crate::forms;
use crate::render::{self, Card, EmptyState, Fragment};

/// One logged effort for an exercise. No delete on the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Progress {
    pub id: i64,
    pub user_id: i64,
    pub exercise_id: i64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub reps: Option<i64>,
    #[serde(default)]
    pub sets: Option<i64>,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub personal_record: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProgress {
    pub user_id: Option<i64>,
    pub exercise_id: Option<i64>,
    pub weight_kg: Option<f64>,
    pub reps: Option<i64>,
    pub sets: Option<i64>,
    pub duration_minutes: Option<i64>,
    pub personal_record: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressForm {
    pub user_id: String,
    pub exercise_id: String,
    pub weight: String,
    pub reps: String,
    pub sets: String,
    pub duration: String,
    pub personal_record: bool,
}

impl ProgressForm {
    pub fn to_payload(&self) -> NewProgress {
        NewProgress {
            user_id: forms::optional_int(&self.user_id),
            exercise_id: forms::optional_int(&self.exercise_id),
            weight_kg: forms::optional_float(&self.weight),
            reps: forms::optional_int(&self.reps),
            sets: forms::optional_int(&self.sets),
            duration_minutes: forms::optional_int(&self.duration),
            personal_record: self.personal_record,
        }
    }
}

pub struct ProgressLog;

impl Resource for ProgressLog {
    type Record = Progress;
    type Payload = NewProgress;

    const NAME: &'static str = "progress";
    const PATH: &'static str = "/progress";
    const MESSAGES: Messages = Messages {
        loading: "Cargando progreso...",
        empty: EmptyState {
            title: "No hay registros de progreso",
            hint: "Registra tu primer progreso usando el botón de arriba",
        },
        load_failed: "No se pudo cargar el progreso",
        created: "Progreso registrado exitosamente!",
        create_failed: "No se pudo registrar el progreso",
    };

    fn card(progress: &Progress) -> Fragment {
        let record_badge = if progress.personal_record {
            render::badge("badge-success", "Sí")
        } else {
            render::badge("", "No")
        };
        let tags = if progress.personal_record {
            vec![render::tag("tag-success", "🏆 Récord")]
        } else {
            Vec::new()
        };

        Card {
            title: &format!("Registro #{}", progress.id),
            subtitle: &format!(
                "Usuario ID: {} | Ejercicio ID: {}",
                progress.user_id, progress.exercise_id
            ),
            body: vec![
                render::optional_field(
                    "Fecha",
                    progress.date.as_deref().map(render::timestamp),
                    "",
                ),
                render::optional_field("Peso", progress.weight_kg, "kg"),
                render::optional_field("Repeticiones", progress.reps, ""),
                render::optional_field("Series", progress.sets, ""),
                render::optional_field("Duración", progress.duration_minutes, "minutos"),
                render::field_html("Récord personal", &record_badge),
            ],
            tags,
            delete_id: None,
        }
        .render()
    }
}
