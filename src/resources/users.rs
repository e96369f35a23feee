use serde::{Deserialize, Serialize};

use super::{DeleteMessages, Deletable, Messages, Resource};
use crate::forms;
use crate::render::{self, Card, EmptyState, Fragment};
use crate::translate::{self, DIFFICULTIES};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    pub fitness_level: String,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub age: Option<i64>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub fitness_level: String,
    pub goals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub age: String,
    pub weight: String,
    pub height: String,
    pub fitness_level: String,
    /// Comma separated.
    pub goals: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            age: String::new(),
            weight: String::new(),
            height: String::new(),
            fitness_level: DIFFICULTIES[0].0.to_string(),
            goals: String::new(),
        }
    }
}

impl UserForm {
    pub fn to_payload(&self) -> NewUser {
        NewUser {
            username: self.username.clone(),
            email: self.email.clone(),
            age: forms::optional_int(&self.age),
            weight_kg: forms::optional_float(&self.weight),
            height_cm: forms::optional_float(&self.height),
            fitness_level: self.fitness_level.clone(),
            goals: forms::comma_list(&self.goals),
        }
    }
}

pub struct Users;

impl Resource for Users {
    type Record = User;
    type Payload = NewUser;

    const NAME: &'static str = "users";
    const PATH: &'static str = "/users";
    const MESSAGES: Messages = Messages {
        loading: "Cargando usuarios...",
        empty: EmptyState {
            title: "No hay usuarios",
            hint: "Registra tu primer usuario usando el botón de arriba",
        },
        load_failed: "No se pudo cargar los usuarios",
        created: "Usuario registrado exitosamente!",
        create_failed: "No se pudo registrar el usuario",
    };

    fn card(user: &User) -> Fragment {
        let level_label = translate::difficulty(&user.fitness_level);
        let level_class = format!("badge-{}", user.fitness_level);

        Card {
            title: &user.username,
            subtitle: &format!("ID: {}", user.id),
            body: vec![
                render::field("Email", &user.email),
                render::optional_field("Edad", user.age, "años"),
                render::optional_field("Peso", user.weight_kg, "kg"),
                render::optional_field("Altura", user.height_cm, "cm"),
                render::field_html("Nivel de fitness", &render::badge(&level_class, level_label)),
                render::list_field("Objetivos", &user.goals, |g| g.join(", ")),
                render::optional_field(
                    "Registrado",
                    user.created_at.as_deref().map(render::timestamp),
                    "",
                ),
            ],
            tags: vec![render::tag(&level_class, level_label)],
            delete_id: Some(user.id),
        }
        .render()
    }
}

impl Deletable for Users {
    const DELETE: DeleteMessages = DeleteMessages {
        confirm: "¿Estás seguro de que quieres eliminar este usuario?",
        deleted: "Usuario eliminado exitosamente",
        failed: "No se pudo eliminar el usuario",
    };
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ApiError;
    use crate::resources::controller::{DeleteOutcome, LoadGuard, ResourceController};
    use crate::testing::{Call, FakeBackend, RecordingPrompter, RecordingView};

    #[test]
    fn test_blank_body_metrics_are_null() {
        let form = UserForm {
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            goals: "perder peso, correr 10k".to_string(),
            ..UserForm::default()
        };
        assert_eq!(
            serde_json::to_value(form.to_payload()).unwrap(),
            json!({
                "username": "ana",
                "email": "ana@example.com",
                "age": null,
                "weight_kg": null,
                "height_cm": null,
                "fitness_level": "beginner",
                "goals": ["perder peso", "correr 10k"]
            })
        );
    }

    #[test]
    fn test_decimal_metrics() {
        let form = UserForm {
            age: "31".to_string(),
            weight: "68.4".to_string(),
            height: "172".to_string(),
            ..UserForm::default()
        };
        let payload = form.to_payload();
        assert_eq!(payload.age, Some(31));
        assert_eq!(payload.weight_kg, Some(68.4));
        assert_eq!(payload.height_cm, Some(172.0));
    }

    #[test]
    fn test_card_layout() {
        let user: User = serde_json::from_value(json!({
            "id": 5,
            "username": "luis",
            "email": "luis@example.com",
            "age": 40,
            "weight_kg": 80.5,
            "height_cm": null,
            "fitness_level": "intermediate",
            "goals": ["fuerza"],
            "created_at": "2024-01-02T10:00:00Z"
        }))
        .unwrap();
        let html = Users::card(&user).into_string();

        assert!(html.contains(r#"<div class="card-title">luis</div>"#));
        assert!(html.contains("<strong>Email:</strong> luis@example.com"));
        assert!(html.contains("<strong>Edad:</strong> 40 años"));
        assert!(html.contains("<strong>Peso:</strong> 80.5 kg"));
        assert!(!html.contains("Altura"));
        assert!(html.contains(r#"<span class="badge badge-intermediate">Intermedio</span>"#));
        assert!(html.contains("<strong>Objetivos:</strong> fuerza"));
        let registered = crate::render::timestamp("2024-01-02T10:00:00Z");
        assert!(html.contains(&format!("<strong>Registrado:</strong> {}", registered)));
    }

    #[tokio::test]
    async fn test_delete_with_associated_sessions_scenario() {
        let backend = FakeBackend::new().reply(Err(ApiError::from_response_body(
            400,
            r#"{"detail":"tiene sesiones asociadas"}"#,
        )));
        let prompter = RecordingPrompter::confirming(true);
        let view = RecordingView::new();
        let ctl = ResourceController::<Users, _, _, _>::new(
            &backend,
            &prompter,
            &view,
            LoadGuard::default(),
        );

        let outcome = ctl.delete(5).await;

        assert!(matches!(outcome, DeleteOutcome::Failed(_)));
        assert_eq!(
            backend.calls(),
            vec![Call::Delete {
                path: "/users".to_string(),
                id: 5
            }]
        );
        let alerts = prompter.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("tiene sesiones asociadas"));
        assert_eq!(backend.list_calls(), 0);
        assert!(view.shown().is_empty());
    }
}
