//! PostgreSQL store
//!
//! Schema lives in `migrations/` and is applied by [`PgStore::migrate`].
//! Appends lock the parent row (`SELECT ... FOR UPDATE`) inside a
//! transaction before computing the next position.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use super::{
    BoardStore, BoardUpdate, NewBoard, NewUser, StoreError, StoreResult, TaskUpdate, UserUpdate,
    DUPLICATE_EMAIL,
};
use crate::backend::auth::users::User;
use crate::shared::{Board, BoardList, ListWithTasks, Task};

const USER_COLUMNS: &str = "id, email, name, password_hash, created_at";
const BOARD_COLUMNS: &str = "id, owner_id, title, background_color, created_at";
const LIST_COLUMNS: &str = "id, board_id, title, position, created_at";
const TASK_COLUMNS: &str = "id, list_id, title, description, position, completed, created_at";

/// Store backed by a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url`
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Apply pending migrations
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn map_user_insert(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::Conflict(DUPLICATE_EMAIL.to_string())
        }
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl BoardStore for PgStore {
    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let sql = format!(
            "INSERT INTO users (id, email, name, password_hash) VALUES ($1, $2, $3, $4) \
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(Uuid::new_v4())
            .bind(&user.email)
            .bind(&user.name)
            .bind(&user.password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(map_user_insert)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn update_user(&self, id: Uuid, update: UserUpdate) -> StoreResult<User> {
        let sql = format!(
            "UPDATE users SET name = COALESCE($2, name), \
             password_hash = COALESCE($3, password_hash) \
             WHERE id = $1 RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(update.name)
            .bind(update.password_hash)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound("User"))
    }

    async fn list_boards(&self, owner_id: Uuid) -> StoreResult<Vec<Board>> {
        let sql = format!(
            "SELECT {BOARD_COLUMNS} FROM boards WHERE owner_id = $1 ORDER BY created_at DESC"
        );
        Ok(sqlx::query_as::<_, Board>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn create_board(&self, board: NewBoard) -> StoreResult<Board> {
        let sql = format!(
            "INSERT INTO boards (id, owner_id, title, background_color) VALUES ($1, $2, $3, $4) \
             RETURNING {BOARD_COLUMNS}"
        );
        sqlx::query_as::<_, Board>(&sql)
            .bind(Uuid::new_v4())
            .bind(board.owner_id)
            .bind(&board.title)
            .bind(&board.background_color)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| match &err {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    StoreError::NotFound("User")
                }
                _ => StoreError::Database(err),
            })
    }

    async fn find_board(&self, id: Uuid) -> StoreResult<Option<Board>> {
        let sql = format!("SELECT {BOARD_COLUMNS} FROM boards WHERE id = $1");
        Ok(sqlx::query_as::<_, Board>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn update_board(&self, id: Uuid, update: BoardUpdate) -> StoreResult<Board> {
        let sql = format!(
            "UPDATE boards SET title = COALESCE($2, title), \
             background_color = COALESCE($3, background_color) \
             WHERE id = $1 RETURNING {BOARD_COLUMNS}"
        );
        sqlx::query_as::<_, Board>(&sql)
            .bind(id)
            .bind(update.title)
            .bind(update.background_color)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound("Board"))
    }

    async fn delete_board(&self, id: Uuid) -> StoreResult<Board> {
        let sql = format!("DELETE FROM boards WHERE id = $1 RETURNING {BOARD_COLUMNS}");
        sqlx::query_as::<_, Board>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound("Board"))
    }

    async fn lists_with_tasks(&self, board_id: Uuid) -> StoreResult<Vec<ListWithTasks>> {
        let sql = format!(
            "SELECT {LIST_COLUMNS} FROM lists WHERE board_id = $1 ORDER BY position ASC"
        );
        let lists = sqlx::query_as::<_, BoardList>(&sql)
            .bind(board_id)
            .fetch_all(&self.pool)
            .await?;

        if lists.is_empty() {
            return Ok(Vec::new());
        }

        let list_ids: Vec<Uuid> = lists.iter().map(|l| l.id).collect();
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE list_id = ANY($1) ORDER BY position ASC"
        );
        let tasks = sqlx::query_as::<_, Task>(&sql)
            .bind(&list_ids)
            .fetch_all(&self.pool)
            .await?;

        let mut by_list: HashMap<Uuid, Vec<Task>> = HashMap::new();
        for task in tasks {
            by_list.entry(task.list_id).or_default().push(task);
        }

        Ok(lists
            .into_iter()
            .map(|list| {
                let tasks = by_list.remove(&list.id).unwrap_or_default();
                ListWithTasks { list, tasks }
            })
            .collect())
    }

    async fn create_list(&self, board_id: Uuid, title: String) -> StoreResult<BoardList> {
        let mut tx = self.pool.begin().await?;

        let locked: Option<Uuid> = sqlx::query_scalar("SELECT id FROM boards WHERE id = $1 FOR UPDATE")
            .bind(board_id)
            .fetch_optional(&mut *tx)
            .await?;
        if locked.is_none() {
            return Err(StoreError::NotFound("Board"));
        }

        let sql = format!(
            "INSERT INTO lists (id, board_id, title, position) \
             SELECT $1, $2, $3, COALESCE(MAX(position) + 1, 0) FROM lists WHERE board_id = $2 \
             RETURNING {LIST_COLUMNS}"
        );
        let list = sqlx::query_as::<_, BoardList>(&sql)
            .bind(Uuid::new_v4())
            .bind(board_id)
            .bind(&title)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(list)
    }

    async fn find_list(&self, id: Uuid) -> StoreResult<Option<BoardList>> {
        let sql = format!("SELECT {LIST_COLUMNS} FROM lists WHERE id = $1");
        Ok(sqlx::query_as::<_, BoardList>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn update_list(&self, id: Uuid, title: String) -> StoreResult<BoardList> {
        let sql = format!("UPDATE lists SET title = $2 WHERE id = $1 RETURNING {LIST_COLUMNS}");
        sqlx::query_as::<_, BoardList>(&sql)
            .bind(id)
            .bind(&title)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound("List"))
    }

    async fn delete_list(&self, id: Uuid) -> StoreResult<BoardList> {
        let sql = format!("DELETE FROM lists WHERE id = $1 RETURNING {LIST_COLUMNS}");
        sqlx::query_as::<_, BoardList>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound("List"))
    }

    async fn list_tasks(&self, list_id: Uuid) -> StoreResult<Vec<Task>> {
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE list_id = $1 ORDER BY position ASC"
        );
        Ok(sqlx::query_as::<_, Task>(&sql)
            .bind(list_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn create_task(
        &self,
        list_id: Uuid,
        title: String,
        description: Option<String>,
    ) -> StoreResult<Task> {
        let mut tx = self.pool.begin().await?;

        let locked: Option<Uuid> = sqlx::query_scalar("SELECT id FROM lists WHERE id = $1 FOR UPDATE")
            .bind(list_id)
            .fetch_optional(&mut *tx)
            .await?;
        if locked.is_none() {
            return Err(StoreError::NotFound("List"));
        }

        let sql = format!(
            "INSERT INTO tasks (id, list_id, title, description, position, completed) \
             SELECT $1, $2, $3, $4, COALESCE(MAX(position) + 1, 0), FALSE FROM tasks WHERE list_id = $2 \
             RETURNING {TASK_COLUMNS}"
        );
        let task = sqlx::query_as::<_, Task>(&sql)
            .bind(Uuid::new_v4())
            .bind(list_id)
            .bind(&title)
            .bind(description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(task)
    }

    async fn find_task(&self, id: Uuid) -> StoreResult<Option<Task>> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1");
        Ok(sqlx::query_as::<_, Task>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn update_task(&self, id: Uuid, update: TaskUpdate) -> StoreResult<Task> {
        // $3 flags whether the description is being written at all, so that
        // a NULL in $4 can clear it.
        let (set_description, description) = match update.description {
            Some(description) => (true, description),
            None => (false, None),
        };

        let sql = format!(
            "UPDATE tasks SET title = COALESCE($2, title), \
             description = CASE WHEN $3 THEN $4 ELSE description END, \
             completed = COALESCE($5, completed) \
             WHERE id = $1 RETURNING {TASK_COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&sql)
            .bind(id)
            .bind(update.title)
            .bind(set_description)
            .bind(description)
            .bind(update.completed)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound("Task"))
    }

    async fn delete_task(&self, id: Uuid) -> StoreResult<Task> {
        let sql = format!("DELETE FROM tasks WHERE id = $1 RETURNING {TASK_COLUMNS}");
        sqlx::query_as::<_, Task>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound("Task"))
    }
}
