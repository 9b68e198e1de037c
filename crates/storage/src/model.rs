use chrono::{DateTime, Utc};
use exercise_editor_domain as domain;
use serde::{Deserialize, Serialize};

/// Persisted representation of an exercise.
///
/// Records that have never been edited carry neither `updated` nor `updatedAt`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub body_part: String,
    pub equipment: String,
    pub target: String,
    pub secondary_muscles: Vec<String>,
    pub instructions: Vec<String>,
    pub gif_url: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub updated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !value
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Exercise {
            id: value.id.to_string(),
            name: value.name.clone(),
            body_part: value.body_part.clone(),
            equipment: value.equipment.clone(),
            target: value.target.clone(),
            secondary_muscles: value.secondary_muscles.clone(),
            instructions: value.instructions.clone(),
            gif_url: value.gif_url.clone(),
            updated: value.updated,
            updated_at: value.updated_at,
        }
    }
}

impl From<Exercise> for domain::Exercise {
    fn from(value: Exercise) -> Self {
        domain::Exercise {
            id: value.id.into(),
            name: value.name,
            body_part: value.body_part,
            equipment: value.equipment,
            target: value.target,
            secondary_muscles: value.secondary_muscles,
            instructions: value.instructions,
            gif_url: value.gif_url,
            updated: value.updated,
            updated_at: value.updated_at,
        }
    }
}
