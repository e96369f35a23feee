use serde::{Deserialize, Serialize};

use super::{DeleteMessages, Deletable, Messages, Resource};
use crate::forms;
use crate::render::{self, Card, EmptyState, Fragment};
use crate::translate::{self, DIFFICULTIES, MUSCLE_GROUPS};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Routine {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub difficulty: String,
    #[serde(default)]
    pub target_muscle_groups: Vec<String>,
    #[serde(default)]
    pub estimated_duration_minutes: Option<i64>,
    /// Only counted.
    #[serde(default)]
    pub exercises: Vec<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRoutine {
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub target_muscle_groups: Vec<String>,
    pub estimated_duration_minutes: Option<i64>,
    /// Routines are created empty; exercises are attached server-side.
    pub exercises: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoutineForm {
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub target_muscle_groups: Vec<String>,
    pub duration: String,
}

impl Default for RoutineForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            difficulty: DIFFICULTIES[0].0.to_string(),
            target_muscle_groups: Vec::new(),
            duration: String::new(),
        }
    }
}

impl RoutineForm {
    pub fn to_payload(&self) -> NewRoutine {
        NewRoutine {
            name: self.name.clone(),
            description: self.description.clone(),
            difficulty: self.difficulty.clone(),
            target_muscle_groups: forms::checked_in_order(MUSCLE_GROUPS, &self.target_muscle_groups),
            estimated_duration_minutes: forms::optional_int(&self.duration),
            exercises: Vec::new(),
        }
    }
}

pub struct Routines;

impl Resource for Routines {
    type Record = Routine;
    type Payload = NewRoutine;

    const NAME: &'static str = "routines";
    const PATH: &'static str = "/routines";
    const MESSAGES: Messages = Messages {
        loading: "Cargando rutinas...",
        empty: EmptyState {
            title: "No hay rutinas",
            hint: "Crea tu primera rutina usando el botón de arriba",
        },
        load_failed: "No se pudo cargar las rutinas",
        created: "Rutina creada exitosamente!",
        create_failed: "No se pudo crear la rutina",
    };

    fn card(routine: &Routine) -> Fragment {
        let difficulty_label = translate::difficulty(&routine.difficulty);
        let difficulty_class = format!("badge-{}", routine.difficulty);
        let duration = routine
            .estimated_duration_minutes
            .map(|m| m.to_string())
            .unwrap_or_default();

        Card {
            title: &routine.name,
            subtitle: &format!("ID: {}", routine.id),
            body: vec![
                render::field("Descripción", routine.description.as_deref().unwrap_or_default()),
                render::field_html(
                    "Dificultad",
                    &render::badge(&difficulty_class, difficulty_label),
                ),
                render::field("Duración estimada", format!("{} minutos", duration)),
                render::list_field(
                    "Grupos musculares objetivo",
                    &routine.target_muscle_groups,
                    |g| translate::muscle_groups(g),
                ),
                render::field("Ejercicios incluidos", routine.exercises.len()),
                render::optional_field(
                    "Creada",
                    routine.created_at.as_deref().map(render::timestamp),
                    "",
                ),
            ],
            tags: vec![
                render::tag(&difficulty_class, difficulty_label),
                render::tag("tag-primary", &format!("{} min", duration)),
            ],
            delete_id: Some(routine.id),
        }
        .render()
    }
}

impl Deletable for Routines {
    const DELETE: DeleteMessages = DeleteMessages {
        confirm: "¿Estás seguro de que quieres eliminar esta rutina?",
        deleted: "Rutina eliminada exitosamente",
        failed: "No se pudo eliminar la rutina",
    };
}
