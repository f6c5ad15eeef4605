//! Todo repository
//!
//! Handles todo CRUD with:
//! - Paginated listing in a stable, documented order (id ascending)
//! - Single-statement writes, RETURNING the persisted row

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::models::{NewTodo, PageParams, TodoChanges};

/// Todo record from database
#[derive(Debug, Clone, FromRow)]
pub struct Todo {
    pub id: i64,
    pub task: String,
    pub due_date: Option<DateTime<Utc>>,
    pub create_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i64 },
}

/// Todo repository
pub struct TodoRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TodoRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List todos for one page, ordered by id ascending.
    ///
    /// Id order matches insertion order for a store-assigned serial key,
    /// which keeps pages stable across requests.
    pub async fn list(&self, page: PageParams) -> Result<Vec<Todo>, DbError> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, task, due_date, create_date, update_date
            FROM todo
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit as i64)
        .bind(page.offset() as i64)
        .fetch_all(self.pool)
        .await?;

        Ok(todos)
    }

    /// Get a single todo by id.
    pub async fn get(&self, id: i64) -> Result<Todo, DbError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, task, due_date, create_date, update_date
            FROM todo
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "todo",
            id,
        })?;

        Ok(todo)
    }

    /// Insert a new todo. The store assigns the id and both timestamps
    /// in the same statement, so they are equal at birth.
    pub async fn create(&self, input: NewTodo) -> Result<Todo, DbError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todo (task, due_date)
            VALUES ($1, $2)
            RETURNING id, task, due_date, create_date, update_date
            "#,
        )
        .bind(input.task.as_str())
        .bind(input.due_date)
        .fetch_one(self.pool)
        .await?;

        Ok(todo)
    }

    /// Apply a mutation, writing only the supplied fields.
    ///
    /// `update_date` is always refreshed, even for a mutation that
    /// supplies no fields. A single UPDATE statement keeps the call
    /// atomic; when no row matches, nothing is written.
    pub async fn update(&self, id: i64, changes: TodoChanges) -> Result<Todo, DbError> {
        let task = changes.task.map(|t| t.into_string());
        let (set_due_date, due_date) = match changes.due_date {
            Some(value) => (true, value),
            None => (false, None),
        };

        let todo = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todo
            SET task = COALESCE($2, task),
                due_date = CASE WHEN $3 THEN $4 ELSE due_date END,
                update_date = NOW()
            WHERE id = $1
            RETURNING id, task, due_date, create_date, update_date
            "#,
        )
        .bind(id)
        .bind(task)
        .bind(set_due_date)
        .bind(due_date)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "todo",
            id,
        })?;

        Ok(todo)
    }

    /// Delete a todo by id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let deleted = sqlx::query("DELETE FROM todo WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        match deleted {
            Some(_) => Ok(()),
            None => Err(DbError::NotFound {
                resource: "todo",
                id,
            }),
        }
    }
}
