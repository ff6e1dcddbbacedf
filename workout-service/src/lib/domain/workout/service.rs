use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::UserId;
use crate::domain::workout::errors::WorkoutError;
use crate::domain::workout::models::CreateWorkoutCommand;
use crate::domain::workout::models::NewWorkout;
use crate::domain::workout::models::UpdateWorkoutCommand;
use crate::domain::workout::models::Workout;
use crate::domain::workout::models::WorkoutChanges;
use crate::domain::workout::models::WorkoutId;
use crate::domain::workout::ports::WorkoutRepository;
use crate::domain::workout::ports::WorkoutServicePort;

/// Domain service implementation for workout operations.
pub struct WorkoutService<WR>
where
    WR: WorkoutRepository,
{
    repository: Arc<WR>,
}

impl<WR> WorkoutService<WR>
where
    WR: WorkoutRepository,
{
    pub fn new(repository: Arc<WR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<WR> WorkoutServicePort for WorkoutService<WR>
where
    WR: WorkoutRepository,
{
    async fn create_workout(
        &self,
        owner: UserId,
        command: CreateWorkoutCommand,
    ) -> Result<Workout, WorkoutError> {
        let workout = self
            .repository
            .create(NewWorkout::from_command(owner, command))
            .await?;

        tracing::info!(
            workout_id = %workout.id,
            user_id = %owner,
            entries = workout.entries.len(),
            "Workout created"
        );

        Ok(workout)
    }

    async fn get_workout(&self, id: WorkoutId) -> Result<Workout, WorkoutError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(WorkoutError::NotFound(id.to_string()))
    }

    async fn update_workout(
        &self,
        id: WorkoutId,
        requester: UserId,
        command: UpdateWorkoutCommand,
    ) -> Result<Workout, WorkoutError> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(WorkoutError::NotFound(id.to_string()))?;

        if existing.user_id != requester {
            return Err(WorkoutError::Forbidden(id.to_string()));
        }

        self.repository
            .update(id, WorkoutChanges::merge(existing, command))
            .await
    }

    async fn delete_workout(&self, id: WorkoutId, requester: UserId) -> Result<(), WorkoutError> {
        let owner = self
            .repository
            .find_owner(id)
            .await?
            .ok_or(WorkoutError::NotFound(id.to_string()))?;

        if owner != requester {
            return Err(WorkoutError::Forbidden(id.to_string()));
        }

        self.repository.delete(id).await?;

        tracing::info!(workout_id = %id, user_id = %requester, "Workout deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::workout::models::EntryId;
    use crate::domain::workout::models::NewWorkoutEntry;
    use crate::domain::workout::models::WorkoutEntry;

    mock! {
        pub TestWorkoutRepository {}

        #[async_trait]
        impl WorkoutRepository for TestWorkoutRepository {
            async fn create(&self, workout: NewWorkout) -> Result<Workout, WorkoutError>;
            async fn find_by_id(&self, id: WorkoutId) -> Result<Option<Workout>, WorkoutError>;
            async fn update(&self, id: WorkoutId, changes: WorkoutChanges) -> Result<Workout, WorkoutError>;
            async fn delete(&self, id: WorkoutId) -> Result<(), WorkoutError>;
            async fn find_owner(&self, id: WorkoutId) -> Result<Option<UserId>, WorkoutError>;
        }
    }

    fn entry(name: &str, order_index: i32) -> NewWorkoutEntry {
        NewWorkoutEntry {
            exercise_name: name.to_string(),
            exercise_sets: 3,
            reps: Some(10),
            duration_seconds: None,
            weight: Some(60.0),
            notes: String::new(),
            order_index,
        }
    }

    fn stored_workout(owner: UserId) -> Workout {
        Workout {
            id: WorkoutId(5),
            user_id: owner,
            title: "leg day".to_string(),
            description: "squats and lunges".to_string(),
            duration_minutes: 45,
            calories_burned: 300,
            entries: vec![
                entry("squat", 1).into_entry(EntryId(1)),
                entry("lunge", 2).into_entry(EntryId(2)),
            ],
        }
    }

    fn apply(id: WorkoutId, owner: UserId, changes: WorkoutChanges) -> Workout {
        let entries: Vec<WorkoutEntry> = changes
            .entries
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, e)| e.into_entry(EntryId(100 + i as i64)))
            .collect();

        Workout {
            id,
            user_id: owner,
            title: changes.title,
            description: changes.description,
            duration_minutes: changes.duration_minutes,
            calories_burned: changes.calories_burned,
            entries,
        }
    }

    #[tokio::test]
    async fn test_create_workout_assigns_owner() {
        let mut repository = MockTestWorkoutRepository::new();

        repository
            .expect_create()
            .withf(|workout| workout.user_id == UserId(3) && workout.entries.len() == 2)
            .times(1)
            .returning(|_| Ok(stored_workout(UserId(3))));

        let service = WorkoutService::new(Arc::new(repository));

        let command = CreateWorkoutCommand {
            title: "leg day".to_string(),
            description: "squats and lunges".to_string(),
            duration_minutes: 45,
            calories_burned: 300,
            entries: vec![entry("squat", 1), entry("lunge", 2)],
        };

        let workout = service.create_workout(UserId(3), command).await.unwrap();
        assert_eq!(workout.user_id, UserId(3));
        assert_eq!(workout.entries.len(), 2);
    }

    #[tokio::test]
    async fn test_get_workout_not_found() {
        let mut repository = MockTestWorkoutRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = WorkoutService::new(Arc::new(repository));

        let result = service.get_workout(WorkoutId(99)).await;
        assert!(matches!(result, Err(WorkoutError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_workout_partial_fields_keep_entries() {
        let mut repository = MockTestWorkoutRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(stored_workout(UserId(3)))));

        repository
            .expect_update()
            .withf(|id, changes| {
                *id == WorkoutId(5)
                    && changes.title == "heavy leg day"
                    && changes.description == "squats and lunges"
                    && changes.duration_minutes == 45
                    && changes.calories_burned == 300
                    && changes.entries.is_none()
            })
            .times(1)
            .returning(|id, changes| Ok(apply(id, UserId(3), changes)));

        let service = WorkoutService::new(Arc::new(repository));

        let command = UpdateWorkoutCommand {
            title: Some("heavy leg day".to_string()),
            ..Default::default()
        };

        let workout = service
            .update_workout(WorkoutId(5), UserId(3), command)
            .await
            .unwrap();
        assert_eq!(workout.title, "heavy leg day");
    }

    #[tokio::test]
    async fn test_update_workout_replaces_entries() {
        let mut repository = MockTestWorkoutRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(stored_workout(UserId(3)))));

        repository
            .expect_update()
            .withf(|_, changes| {
                changes
                    .entries
                    .as_ref()
                    .is_some_and(|entries| entries.len() == 1)
            })
            .times(1)
            .returning(|id, changes| Ok(apply(id, UserId(3), changes)));

        let service = WorkoutService::new(Arc::new(repository));

        let command = UpdateWorkoutCommand {
            entries: Some(vec![entry("deadlift", 1)]),
            ..Default::default()
        };

        let workout = service
            .update_workout(WorkoutId(5), UserId(3), command)
            .await
            .unwrap();
        assert_eq!(workout.entries.len(), 1);
        assert_eq!(workout.entries[0].exercise_name, "deadlift");
    }

    #[tokio::test]
    async fn test_update_workout_not_owner() {
        let mut repository = MockTestWorkoutRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(stored_workout(UserId(3)))));
        repository.expect_update().times(0);

        let service = WorkoutService::new(Arc::new(repository));

        let result = service
            .update_workout(WorkoutId(5), UserId(4), UpdateWorkoutCommand::default())
            .await;
        assert!(matches!(result, Err(WorkoutError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_update_workout_not_found() {
        let mut repository = MockTestWorkoutRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = WorkoutService::new(Arc::new(repository));

        let result = service
            .update_workout(WorkoutId(5), UserId(3), UpdateWorkoutCommand::default())
            .await;
        assert!(matches!(result, Err(WorkoutError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_nonexistent_workout_is_not_found() {
        let mut repository = MockTestWorkoutRepository::new();

        repository
            .expect_find_owner()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_delete().times(0);

        let service = WorkoutService::new(Arc::new(repository));

        let result = service.delete_workout(WorkoutId(404), UserId(3)).await;
        assert!(matches!(result, Err(WorkoutError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_workout_zero_rows_is_not_found() {
        let mut repository = MockTestWorkoutRepository::new();

        repository
            .expect_find_owner()
            .times(1)
            .returning(|_| Ok(Some(UserId(3))));
        repository
            .expect_delete()
            .times(1)
            .returning(|id| Err(WorkoutError::NotFound(id.to_string())));

        let service = WorkoutService::new(Arc::new(repository));

        let result = service.delete_workout(WorkoutId(5), UserId(3)).await;
        assert!(matches!(result, Err(WorkoutError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_workout_by_owner() {
        let mut repository = MockTestWorkoutRepository::new();

        repository
            .expect_find_owner()
            .times(1)
            .returning(|_| Ok(Some(UserId(3))));
        repository
            .expect_delete()
            .withf(|id| *id == WorkoutId(5))
            .times(1)
            .returning(|_| Ok(()));

        let service = WorkoutService::new(Arc::new(repository));

        assert!(service.delete_workout(WorkoutId(5), UserId(3)).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_workout_not_owner() {
        let mut repository = MockTestWorkoutRepository::new();

        repository
            .expect_find_owner()
            .times(1)
            .returning(|_| Ok(Some(UserId(3))));
        repository.expect_delete().times(0);

        let service = WorkoutService::new(Arc::new(repository));

        let result = service.delete_workout(WorkoutId(5), UserId(8)).await;
        assert!(matches!(result, Err(WorkoutError::Forbidden(_))));
    }
}
