//! Database operations for to-do items
//!
//! Every function here issues exactly one statement. Updates merge the
//! supplied fields with `COALESCE` inside the store, so no caller ever reads
//! an item before writing it.

use std::str::FromStr;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use uuid::Uuid;

use crate::shared::{NewTodo, TodoItem, TodoPatch};

/// Open a connection pool for `database_url`
///
/// File databases are created if missing. In-memory databases are limited to
/// a single, never-recycled connection: every SQLite connection to
/// `:memory:` sees its own empty database.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
    };

    pool_options.connect_with(options).await
}

/// Apply the migrations under `migrations/`
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}

fn todo_from_row(row: &SqliteRow) -> Result<TodoItem, sqlx::Error> {
    Ok(TodoItem {
        id: row.try_get("id")?,
        text: row.try_get("text")?,
        completed: row.try_get("completed")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// All items, newest first
///
/// Items sharing a `created_at` value come back in reverse insertion order.
pub async fn list_todos(pool: &SqlitePool) -> Result<Vec<TodoItem>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, text, completed, created_at, updated_at
        FROM todos
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(todo_from_row).collect()
}

/// Insert a new item with a fresh identifier
pub async fn insert_todo(pool: &SqlitePool, new_todo: &NewTodo) -> Result<TodoItem, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO todos (id, text, completed, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(id)
    .bind(&new_todo.text)
    .bind(new_todo.completed)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(TodoItem {
        id,
        text: new_todo.text.clone(),
        completed: new_todo.completed,
        created_at: now,
        updated_at: now,
    })
}

/// Merge `patch` into the stored item
///
/// Returns `None` when no item has this identifier.
pub async fn update_todo(
    pool: &SqlitePool,
    id: Uuid,
    patch: &TodoPatch,
) -> Result<Option<TodoItem>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        UPDATE todos
        SET text = COALESCE(?1, text),
            completed = COALESCE(?2, completed),
            updated_at = ?3
        WHERE id = ?4
        RETURNING id, text, completed, created_at, updated_at
        "#,
    )
    .bind(patch.text.as_deref())
    .bind(patch.completed)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(todo_from_row).transpose()
}

/// Remove an item
///
/// Returns whether a row was actually deleted.
pub async fn delete_todo(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
