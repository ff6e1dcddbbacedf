use async_trait::async_trait;

use crate::domain::user::models::UserId;
use crate::domain::workout::errors::WorkoutError;
use crate::domain::workout::models::CreateWorkoutCommand;
use crate::domain::workout::models::NewWorkout;
use crate::domain::workout::models::UpdateWorkoutCommand;
use crate::domain::workout::models::Workout;
use crate::domain::workout::models::WorkoutChanges;
use crate::domain::workout::models::WorkoutId;

/// Port for workout domain service operations.
#[async_trait]
pub trait WorkoutServicePort: Send + Sync + 'static {
    /// Record a workout owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Header or any entry failed to persist; nothing is stored
    async fn create_workout(
        &self,
        owner: UserId,
        command: CreateWorkoutCommand,
    ) -> Result<Workout, WorkoutError>;

    /// Retrieve a workout with its entries in order.
    ///
    /// # Errors
    /// * `NotFound` - Workout does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_workout(&self, id: WorkoutId) -> Result<Workout, WorkoutError>;

    /// Apply a partial update on behalf of `requester`.
    ///
    /// # Errors
    /// * `NotFound` - Workout does not exist
    /// * `Forbidden` - Requester does not own the workout
    /// * `DatabaseError` - Database operation failed
    async fn update_workout(
        &self,
        id: WorkoutId,
        requester: UserId,
        command: UpdateWorkoutCommand,
    ) -> Result<Workout, WorkoutError>;

    /// Delete a workout on behalf of `requester`.
    ///
    /// # Errors
    /// * `NotFound` - Workout does not exist
    /// * `Forbidden` - Requester does not own the workout
    /// * `DatabaseError` - Database operation failed
    async fn delete_workout(&self, id: WorkoutId, requester: UserId) -> Result<(), WorkoutError>;
}

/// Persistence operations for workouts and their entries.
#[async_trait]
pub trait WorkoutRepository: Send + Sync + 'static {
    /// Insert header and entries in one transaction.
    ///
    /// # Returns
    /// Stored workout with assigned ids, entries in ascending `order_index`
    async fn create(&self, workout: NewWorkout) -> Result<Workout, WorkoutError>;

    /// Retrieve workout header and ordered entries.
    ///
    /// # Returns
    /// Optional workout (None if not found)
    async fn find_by_id(&self, id: WorkoutId) -> Result<Option<Workout>, WorkoutError>;

    /// Overwrite the header and, when given, replace all entries in one transaction.
    ///
    /// # Errors
    /// * `NotFound` - No workout with this id
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, id: WorkoutId, changes: WorkoutChanges)
        -> Result<Workout, WorkoutError>;

    /// Remove a workout and, by cascade, its entries.
    ///
    /// # Errors
    /// * `NotFound` - No row was deleted
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: WorkoutId) -> Result<(), WorkoutError>;

    /// Look up the owning user of a workout.
    async fn find_owner(&self, id: WorkoutId) -> Result<Option<UserId>, WorkoutError>;
}
