use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgConnection;
use sqlx::PgExecutor;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::models::UserId;
use crate::domain::workout::errors::WorkoutError;
use crate::domain::workout::models::EntryId;
use crate::domain::workout::models::NewWorkout;
use crate::domain::workout::models::NewWorkoutEntry;
use crate::domain::workout::models::Workout;
use crate::domain::workout::models::WorkoutChanges;
use crate::domain::workout::models::WorkoutEntry;
use crate::domain::workout::models::WorkoutId;
use crate::domain::workout::ports::WorkoutRepository;

fn database_error(e: sqlx::Error) -> WorkoutError {
    WorkoutError::DatabaseError(e.to_string())
}

pub struct PostgresWorkoutRepository {
    pool: PgPool,
}

impl PostgresWorkoutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: &PgRow) -> Result<WorkoutEntry, sqlx::Error> {
        Ok(WorkoutEntry {
            id: EntryId(row.try_get("id")?),
            exercise_name: row.try_get("exercise_name")?,
            exercise_sets: row.try_get("exercise_sets")?,
            reps: row.try_get("reps")?,
            duration_seconds: row.try_get("duration_seconds")?,
            weight: row.try_get("weight")?,
            notes: row.try_get("notes")?,
            order_index: row.try_get("order_index")?,
        })
    }

    async fn fetch_entries<'e, E>(
        executor: E,
        workout_id: WorkoutId,
    ) -> Result<Vec<WorkoutEntry>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let rows = sqlx::query(
            r#"
            SELECT id, exercise_name, exercise_sets, reps, duration_seconds, weight, notes, order_index
            FROM workout_entries
            WHERE workout_id = $1
            ORDER BY order_index, id
            "#,
        )
        .bind(workout_id.0)
        .fetch_all(executor)
        .await?;

        rows.iter().map(Self::row_to_entry).collect()
    }

    async fn insert_entry(
        conn: &mut PgConnection,
        workout_id: WorkoutId,
        entry: NewWorkoutEntry,
    ) -> Result<WorkoutEntry, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO workout_entries
                (workout_id, exercise_name, exercise_sets, reps, duration_seconds, weight, notes, order_index)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(workout_id.0)
        .bind(&entry.exercise_name)
        .bind(entry.exercise_sets)
        .bind(entry.reps)
        .bind(entry.duration_seconds)
        .bind(entry.weight)
        .bind(&entry.notes)
        .bind(entry.order_index)
        .fetch_one(conn)
        .await?;

        Ok(entry.into_entry(EntryId(id)))
    }
}

#[async_trait]
impl WorkoutRepository for PostgresWorkoutRepository {
    async fn create(&self, workout: NewWorkout) -> Result<Workout, WorkoutError> {
        // Dropping `tx` on any early return rolls back header and entries together.
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO workouts (user_id, title, description, duration, calories_burned)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(workout.user_id.0)
        .bind(&workout.title)
        .bind(&workout.description)
        .bind(workout.duration_minutes)
        .bind(workout.calories_burned)
        .fetch_one(&mut *tx)
        .await
        .map_err(database_error)?;

        let workout_id = WorkoutId(id);

        let mut entries = Vec::with_capacity(workout.entries.len());
        for entry in workout.entries {
            entries.push(
                Self::insert_entry(&mut tx, workout_id, entry)
                    .await
                    .map_err(database_error)?,
            );
        }

        tx.commit().await.map_err(database_error)?;

        entries.sort_by_key(|e| (e.order_index, e.id.0));

        Ok(Workout {
            id: workout_id,
            user_id: workout.user_id,
            title: workout.title,
            description: workout.description,
            duration_minutes: workout.duration_minutes,
            calories_burned: workout.calories_burned,
            entries,
        })
    }

    async fn find_by_id(&self, id: WorkoutId) -> Result<Option<Workout>, WorkoutError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, title, description, duration, calories_burned
            FROM workouts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        let Some(r) = row else {
            return Ok(None);
        };

        let entries = Self::fetch_entries(&self.pool, id)
            .await
            .map_err(database_error)?;

        Ok(Some(Workout {
            id: WorkoutId(r.try_get("id").map_err(database_error)?),
            user_id: UserId(r.try_get("user_id").map_err(database_error)?),
            title: r.try_get("title").map_err(database_error)?,
            description: r.try_get("description").map_err(database_error)?,
            duration_minutes: r.try_get("duration").map_err(database_error)?,
            calories_burned: r.try_get("calories_burned").map_err(database_error)?,
            entries,
        }))
    }

    async fn update(
        &self,
        id: WorkoutId,
        changes: WorkoutChanges,
    ) -> Result<Workout, WorkoutError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let owner: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE workouts
            SET title = $2, description = $3, duration = $4, calories_burned = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING user_id
            "#,
        )
        .bind(id.0)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(changes.duration_minutes)
        .bind(changes.calories_burned)
        .fetch_optional(&mut *tx)
        .await
        .map_err(database_error)?;

        let owner = owner.ok_or_else(|| WorkoutError::NotFound(id.to_string()))?;

        if let Some(replacement) = changes.entries {
            sqlx::query("DELETE FROM workout_entries WHERE workout_id = $1")
                .bind(id.0)
                .execute(&mut *tx)
                .await
                .map_err(database_error)?;

            for entry in replacement {
                Self::insert_entry(&mut tx, id, entry)
                    .await
                    .map_err(database_error)?;
            }
        }

        let entries = Self::fetch_entries(&mut *tx, id)
            .await
            .map_err(database_error)?;

        tx.commit().await.map_err(database_error)?;

        Ok(Workout {
            id,
            user_id: UserId(owner),
            title: changes.title,
            description: changes.description,
            duration_minutes: changes.duration_minutes,
            calories_burned: changes.calories_burned,
            entries,
        })
    }

    async fn delete(&self, id: WorkoutId) -> Result<(), WorkoutError> {
        let result = sqlx::query(
            r#"
            DELETE FROM workouts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(WorkoutError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn find_owner(&self, id: WorkoutId) -> Result<Option<UserId>, WorkoutError> {
        let owner: Option<i64> = sqlx::query_scalar("SELECT user_id FROM workouts WHERE id = $1")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(owner.map(UserId))
    }
}
