use std::fmt;

use crate::domain::user::models::UserId;
use crate::domain::workout::errors::WorkoutIdError;

/// Database-assigned workout identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkoutId(pub i64);

impl WorkoutId {
    /// Parse a workout ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an integer
    /// * `NotPositive` - Integer is zero or negative
    pub fn from_string(s: &str) -> Result<Self, WorkoutIdError> {
        let id = s
            .parse::<i64>()
            .map_err(|e| WorkoutIdError::InvalidFormat(e.to_string()))?;

        if id <= 0 {
            return Err(WorkoutIdError::NotPositive(id));
        }

        Ok(Self(id))
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub i64);

/// Workout aggregate with its entries in ascending `order_index`.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub entries: Vec<WorkoutEntry>,
}

/// One exercise within a workout.
///
/// Exercises are measured by reps, by time, by load, or a mix, hence the
/// optional measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutEntry {
    pub id: EntryId,
    pub exercise_name: String,
    pub exercise_sets: i32,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<f64>,
    pub notes: String,
    pub order_index: i32,
}

/// Entry data before it has been stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkoutEntry {
    pub exercise_name: String,
    pub exercise_sets: i32,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<f64>,
    pub notes: String,
    pub order_index: i32,
}

impl NewWorkoutEntry {
    pub fn into_entry(self, id: EntryId) -> WorkoutEntry {
        WorkoutEntry {
            id,
            exercise_name: self.exercise_name,
            exercise_sets: self.exercise_sets,
            reps: self.reps,
            duration_seconds: self.duration_seconds,
            weight: self.weight,
            notes: self.notes,
            order_index: self.order_index,
        }
    }
}

/// Command to record a new workout.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateWorkoutCommand {
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub entries: Vec<NewWorkoutEntry>,
}

/// Workout header and entries as handed to the repository for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub entries: Vec<NewWorkoutEntry>,
}

impl NewWorkout {
    pub fn from_command(user_id: UserId, command: CreateWorkoutCommand) -> Self {
        Self {
            user_id,
            title: command.title,
            description: command.description,
            duration_minutes: command.duration_minutes,
            calories_burned: command.calories_burned,
            entries: command.entries,
        }
    }
}

/// Partial update: `None` keeps the stored value.
///
/// `entries`, when present, replaces the whole entry set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateWorkoutCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
    pub entries: Option<Vec<NewWorkoutEntry>>,
}

/// Fully resolved header values plus an optional replacement entry set.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutChanges {
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub entries: Option<Vec<NewWorkoutEntry>>,
}

impl WorkoutChanges {
    /// Merge a partial update over the currently stored workout.
    pub fn merge(existing: Workout, command: UpdateWorkoutCommand) -> Self {
        Self {
            title: command.title.unwrap_or(existing.title),
            description: command.description.unwrap_or(existing.description),
            duration_minutes: command.duration_minutes.unwrap_or(existing.duration_minutes),
            calories_burned: command.calories_burned.unwrap_or(existing.calories_burned),
            entries: command.entries,
        }
    }
}
