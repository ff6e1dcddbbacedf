/// Serializable message types for the HTTP layer.
///
/// These types keep JSON field names and shapes out of the domain models.
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::token::models::Token;
use crate::domain::user::models::User;
use crate::domain::workout::models::NewWorkoutEntry;
use crate::domain::workout::models::Workout;
use crate::domain::workout::models::WorkoutEntry;

/// Public view of a user; never includes the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserMessage {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserMessage {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            bio: user.bio.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutEntryMessage {
    pub id: i64,
    pub exercise_name: String,
    pub exercise_sets: i32,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<f64>,
    pub notes: String,
    pub order_index: i32,
}

impl From<&WorkoutEntry> for WorkoutEntryMessage {
    fn from(entry: &WorkoutEntry) -> Self {
        Self {
            id: entry.id.0,
            exercise_name: entry.exercise_name.clone(),
            exercise_sets: entry.exercise_sets,
            reps: entry.reps,
            duration_seconds: entry.duration_seconds,
            weight: entry.weight,
            notes: entry.notes.clone(),
            order_index: entry.order_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutMessage {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    /// Minutes.
    pub duration: i32,
    pub calories_burned: i32,
    pub entries: Vec<WorkoutEntryMessage>,
}

impl From<&Workout> for WorkoutMessage {
    fn from(workout: &Workout) -> Self {
        Self {
            id: workout.id.0,
            user_id: workout.user_id.0,
            title: workout.title.clone(),
            description: workout.description.clone(),
            duration: workout.duration_minutes,
            calories_burned: workout.calories_burned,
            entries: workout.entries.iter().map(Into::into).collect(),
        }
    }
}

/// Entry as sent by clients. Any `id` in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkoutEntryBody {
    pub exercise_name: String,
    pub exercise_sets: i32,
    #[serde(default)]
    pub reps: Option<i32>,
    #[serde(default)]
    pub duration_seconds: Option<i32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub notes: String,
    pub order_index: i32,
}

impl From<WorkoutEntryBody> for NewWorkoutEntry {
    fn from(body: WorkoutEntryBody) -> Self {
        Self {
            exercise_name: body.exercise_name,
            exercise_sets: body.exercise_sets,
            reps: body.reps,
            duration_seconds: body.duration_seconds,
            weight: body.weight,
            notes: body.notes,
            order_index: body.order_index,
        }
    }
}

/// Freshly issued bearer token. The plaintext is only ever sent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthTokenMessage {
    pub token: String,
    pub expiry: DateTime<Utc>,
}

impl From<&Token> for AuthTokenMessage {
    fn from(token: &Token) -> Self {
        Self {
            token: token.plaintext.clone(),
            expiry: token.expiry,
        }
    }
}
