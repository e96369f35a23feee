use serde::{Deserialize, Serialize};

use super::{DeleteMessages, Deletable, Messages, Resource};
use crate::api::Query;
use crate::forms;
use crate::render::{self, Card, EmptyState, Fragment};
use crate::translate::{self, DIFFICULTIES, EXERCISE_TYPES, MUSCLE_GROUPS};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub exercise_type: String,
    pub difficulty: String,
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub calories_burned_per_minute: Option<f64>,
    #[serde(default)]
    pub equipment_needed: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// `POST /exercises` body. Optional numbers serialise as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExercise {
    pub name: String,
    pub description: String,
    pub exercise_type: String,
    pub difficulty: String,
    pub muscle_groups: Vec<String>,
    pub duration_minutes: Option<i64>,
    pub calories_burned_per_minute: Option<i64>,
    pub equipment_needed: Vec<String>,
    pub instructions: Vec<String>,
}

/// Raw values of the exercise form.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseForm {
    pub name: String,
    pub description: String,
    pub exercise_type: String,
    pub difficulty: String,
    pub muscle_groups: Vec<String>,
    pub duration: String,
    pub calories: String,
    /// Comma separated.
    pub equipment: String,
    /// One step per line.
    pub instructions: String,
}

impl Default for ExerciseForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            exercise_type: EXERCISE_TYPES[0].0.to_string(),
            difficulty: DIFFICULTIES[0].0.to_string(),
            muscle_groups: Vec::new(),
            duration: String::new(),
            calories: String::new(),
            equipment: String::new(),
            instructions: String::new(),
        }
    }
}

impl ExerciseForm {
    pub fn to_payload(&self) -> NewExercise {
        NewExercise {
            name: self.name.clone(),
            description: self.description.clone(),
            exercise_type: self.exercise_type.clone(),
            difficulty: self.difficulty.clone(),
            muscle_groups: forms::checked_in_order(MUSCLE_GROUPS, &self.muscle_groups),
            duration_minutes: forms::optional_int(&self.duration),
            calories_burned_per_minute: forms::optional_int(&self.calories),
            equipment_needed: forms::comma_list(&self.equipment),
            instructions: forms::line_list(&self.instructions),
        }
    }
}

/// List filters; blank means "any".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseFilters {
    pub exercise_type: String,
    pub difficulty: String,
    pub muscle_group: String,
}

impl ExerciseFilters {
    pub fn to_query(&self) -> Query {
        [
            ("exercise_type", &self.exercise_type),
            ("difficulty", &self.difficulty),
            ("muscle_group", &self.muscle_group),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key, value.clone()))
        .collect()
    }
}

pub struct Exercises;

impl Resource for Exercises {
    type Record = Exercise;
    type Payload = NewExercise;

    const NAME: &'static str = "exercises";
    const PATH: &'static str = "/exercises";
    const MESSAGES: Messages = Messages {
        loading: "Cargando ejercicios...",
        empty: EmptyState {
            title: "No hay ejercicios",
            hint: "Crea tu primer ejercicio usando el botón de arriba",
        },
        load_failed: "No se pudo cargar los ejercicios",
        created: "Ejercicio creado exitosamente!",
        create_failed: "No se pudo crear el ejercicio",
    };

    fn card(exercise: &Exercise) -> Fragment {
        let type_label = translate::exercise_type(&exercise.exercise_type);
        let difficulty_label = translate::difficulty(&exercise.difficulty);
        let difficulty_class = format!("badge-{}", exercise.difficulty);

        let instructions = if exercise.instructions.is_empty() {
            String::new()
        } else {
            let steps = exercise
                .instructions
                .iter()
                .enumerate()
                .map(|(i, step)| format!("{}. {}", i + 1, render::escape(step)))
                .collect::<Vec<_>>()
                .join("<br>");
            format!("<p><strong>Instrucciones:</strong><br>{}</p>", steps)
        };

        Card {
            title: &exercise.name,
            subtitle: &format!("ID: {}", exercise.id),
            body: vec![
                render::field("Descripción", exercise.description.as_deref().unwrap_or_default()),
                render::field("Tipo", type_label),
                render::field_html(
                    "Dificultad",
                    &render::badge(&difficulty_class, difficulty_label),
                ),
                render::optional_field("Duración", exercise.duration_minutes, "minutos"),
                render::optional_field("Calorías/min", exercise.calories_burned_per_minute, ""),
                render::list_field("Grupos musculares", &exercise.muscle_groups, |g| {
                    translate::muscle_groups(g)
                }),
                render::list_field("Equipamiento", &exercise.equipment_needed, |e| e.join(", ")),
                instructions,
            ],
            tags: vec![
                render::tag("tag-primary", type_label),
                render::tag(&difficulty_class, difficulty_label),
            ],
            delete_id: Some(exercise.id),
        }
        .render()
    }
}

impl Deletable for Exercises {
    const DELETE: DeleteMessages = DeleteMessages {
        confirm: "¿Estás seguro de que quieres eliminar este ejercicio?",
        deleted: "Ejercicio eliminado exitosamente",
        failed: "No se pudo eliminar el ejercicio",
    };
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::resources::controller::{LoadGuard, LoadOutcome, ResourceController};
    use crate::testing::{Call, FakeBackend, RecordingPrompter, RecordingView};

    fn push_up_form() -> ExerciseForm {
        ExerciseForm {
            name: "Push Up".to_string(),
            description: String::new(),
            exercise_type: "strength".to_string(),
            difficulty: "beginner".to_string(),
            muscle_groups: vec!["chest".to_string()],
            duration: String::new(),
            calories: String::new(),
            equipment: String::new(),
            instructions: "Lower body\nPush up".to_string(),
        }
    }

    #[test]
    fn test_blank_numbers_serialize_as_null() {
        let payload = push_up_form().to_payload();
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["duration_minutes"], json!(null));
        assert_eq!(value["calories_burned_per_minute"], json!(null));
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("duration_minutes"));
        assert!(obj.contains_key("calories_burned_per_minute"));
    }

    #[test]
    fn test_payload_maps_lists() {
        let form = ExerciseForm {
            equipment: "barra, discos,".to_string(),
            duration: "20".to_string(),
            calories: "9".to_string(),
            muscle_groups: vec!["legs".to_string(), "back".to_string()],
            ..push_up_form()
        };
        let value = serde_json::to_value(form.to_payload()).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "Push Up",
                "description": "",
                "exercise_type": "strength",
                "difficulty": "beginner",
                "muscle_groups": ["back", "legs"],
                "duration_minutes": 20,
                "calories_burned_per_minute": 9,
                "equipment_needed": ["barra", "discos"],
                "instructions": ["Lower body", "Push up"]
            })
        );
    }

    #[test]
    fn test_filters_skip_blank_values() {
        assert!(ExerciseFilters::default().to_query().is_empty());

        let filters = ExerciseFilters {
            exercise_type: "cardio".to_string(),
            difficulty: String::new(),
            muscle_group: "legs".to_string(),
        };
        assert_eq!(
            filters.to_query(),
            vec![
                ("exercise_type", "cardio".to_string()),
                ("muscle_group", "legs".to_string())
            ]
        );
    }

    #[test]
    fn test_record_accepts_missing_optionals() {
        let exercise: Exercise = serde_json::from_value(json!({
            "id": 4,
            "name": "Plancha",
            "description": null,
            "exercise_type": "balance",
            "difficulty": "advanced"
        }))
        .unwrap();
        assert_eq!(exercise.duration_minutes, None);
        assert!(exercise.muscle_groups.is_empty());
        assert_eq!(exercise.description, None);
    }

    #[test]
    fn test_card_layout() {
        let exercise = Exercise {
            id: 12,
            name: "Sentadilla".to_string(),
            description: Some("Bajar con la espalda recta".to_string()),
            exercise_type: "strength".to_string(),
            difficulty: "intermediate".to_string(),
            muscle_groups: vec!["legs".to_string(), "core".to_string()],
            duration_minutes: Some(15),
            calories_burned_per_minute: Some(7.5),
            equipment_needed: vec!["barra".to_string()],
            instructions: vec!["Bajar".to_string(), "Subir".to_string()],
        };
        let html = Exercises::card(&exercise).into_string();

        assert!(html.contains(r#"<div class="card-title">Sentadilla</div>"#));
        assert!(html.contains("ID: 12"));
        assert!(html.contains("<strong>Tipo:</strong> Fuerza"));
        assert!(html.contains(r#"<span class="badge badge-intermediate">Intermedio</span>"#));
        assert!(html.contains("<strong>Duración:</strong> 15 minutos"));
        assert!(html.contains("<strong>Calorías/min:</strong> 7.5"));
        assert!(html.contains("<strong>Grupos musculares:</strong> Piernas, Core"));
        assert!(html.contains("<strong>Equipamiento:</strong> barra"));
        assert!(html.contains("1. Bajar<br>2. Subir"));
        assert!(html.contains(r#"data-delete-id="12""#));
    }

    #[test]
    fn test_card_hides_absent_fields() {
        let exercise = Exercise {
            id: 1,
            name: "Trote".to_string(),
            description: None,
            exercise_type: "yoga".to_string(),
            difficulty: "beginner".to_string(),
            muscle_groups: vec![],
            duration_minutes: None,
            calories_burned_per_minute: None,
            equipment_needed: vec![],
            instructions: vec![],
        };
        let html = Exercises::card(&exercise).into_string();

        assert!(!html.contains("Duración"));
        assert!(!html.contains("Calorías/min"));
        assert!(!html.contains("Grupos musculares"));
        assert!(!html.contains("Equipamiento"));
        assert!(!html.contains("Instrucciones"));
        // Unknown type code shown as-is.
        assert!(html.contains(r#"<span class="tag tag-primary">yoga</span>"#));
    }

    #[tokio::test]
    async fn test_push_up_create_scenario() {
        let created = json!({
            "id": 1,
            "name": "Push Up",
            "description": "",
            "exercise_type": "strength",
            "difficulty": "beginner",
            "muscle_groups": ["chest"],
            "duration_minutes": null,
            "calories_burned_per_minute": null,
            "equipment_needed": [],
            "instructions": ["Lower body", "Push up"]
        });
        let backend = FakeBackend::new()
            .reply(Ok(created.clone()))
            .reply(Ok(json!([created])));
        let prompter = RecordingPrompter::confirming(true);
        let view = RecordingView::new();
        let ctl = ResourceController::<Exercises, _, _, _>::new(
            &backend,
            &prompter,
            &view,
            LoadGuard::default(),
        );

        ctl.submit(&push_up_form().to_payload()).await.unwrap();

        match &backend.calls()[0] {
            Call::Create { path, body } => {
                assert_eq!(path, "/exercises");
                assert_eq!(body["name"], "Push Up");
                assert_eq!(body["muscle_groups"], json!(["chest"]));
                assert_eq!(body["equipment_needed"], json!([]));
                assert_eq!(body["instructions"], json!(["Lower body", "Push up"]));
            }
            other => panic!("Expected create call, got {:?}", other),
        }
        assert!(!view.form_visible());
        assert_eq!(backend.list_calls(), 1);

        let html = view.last_shown().unwrap();
        assert!(html.contains(r#"<div class="card-title">Push Up</div>"#));
        assert!(html.contains(r#"<span class="tag tag-primary">Fuerza</span>"#));
        assert!(html.contains(r#"<span class="badge badge-beginner">Principiante</span>"#));
    }

    #[tokio::test]
    async fn test_empty_list_scenario() {
        let backend = FakeBackend::new().reply(Ok(json!([])));
        let prompter = RecordingPrompter::confirming(true);
        let view = RecordingView::new();
        let ctl = ResourceController::<Exercises, _, _, _>::new(
            &backend,
            &prompter,
            &view,
            LoadGuard::default(),
        );

        assert_eq!(ctl.load().await, LoadOutcome::Rendered { count: 0 });

        let html = view.last_shown().unwrap();
        assert_eq!(
            html,
            r#"<div class="empty-state"><h3>No hay ejercicios</h3><p>Crea tu primer ejercicio usando el botón de arriba</p></div>"#
        );
    }
}
