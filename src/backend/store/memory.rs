//! In-memory store
//!
//! All tables live behind one `RwLock`, so every write (including position
//! assignment) is single-writer. Data is lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    BoardStore, BoardUpdate, NewBoard, NewUser, StoreError, StoreResult, TaskUpdate, UserUpdate,
    DUPLICATE_EMAIL,
};
use crate::backend::auth::users::User;
use crate::shared::{Board, BoardList, ListWithTasks, Task};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    boards: HashMap<Uuid, Board>,
    lists: HashMap<Uuid, BoardList>,
    tasks: HashMap<Uuid, Task>,
}

impl Tables {
    fn tasks_of(&self, list_id: Uuid) -> Vec<Task> {
        let mut tasks: Vec<Task> = self
            .tasks
            .values()
            .filter(|t| t.list_id == list_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| t.position);
        tasks
    }

    fn next_list_position(&self, board_id: Uuid) -> i32 {
        self.lists
            .values()
            .filter(|l| l.board_id == board_id)
            .map(|l| l.position + 1)
            .max()
            .unwrap_or(0)
    }

    fn next_task_position(&self, list_id: Uuid) -> i32 {
        self.tasks
            .values()
            .filter(|t| t.list_id == list_id)
            .map(|t| t.position + 1)
            .max()
            .unwrap_or(0)
    }

    fn remove_list_cascade(&mut self, list_id: Uuid) -> Option<BoardList> {
        self.tasks.retain(|_, t| t.list_id != list_id);
        self.lists.remove(&list_id)
    }
}

/// Store that keeps everything in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BoardStore for MemoryStore {
    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict(DUPLICATE_EMAIL.to_string()));
        }

        let record = User {
            id: Uuid::new_v4(),
            email: user.email,
            name: user.name,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        tables.users.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn update_user(&self, id: Uuid, update: UserUpdate) -> StoreResult<User> {
        let mut tables = self.tables.write().await;
        let user = tables.users.get_mut(&id).ok_or(StoreError::NotFound("User"))?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(hash) = update.password_hash {
            user.password_hash = hash;
        }
        Ok(user.clone())
    }

    async fn list_boards(&self, owner_id: Uuid) -> StoreResult<Vec<Board>> {
        let tables = self.tables.read().await;
        let mut boards: Vec<Board> = tables
            .boards
            .values()
            .filter(|b| b.owner_id == owner_id)
            .cloned()
            .collect();
        boards.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(boards)
    }

    async fn create_board(&self, board: NewBoard) -> StoreResult<Board> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&board.owner_id) {
            return Err(StoreError::NotFound("User"));
        }

        let record = Board {
            id: Uuid::new_v4(),
            owner_id: board.owner_id,
            title: board.title,
            background_color: board.background_color,
            created_at: Utc::now(),
        };
        tables.boards.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_board(&self, id: Uuid) -> StoreResult<Option<Board>> {
        Ok(self.tables.read().await.boards.get(&id).cloned())
    }

    async fn update_board(&self, id: Uuid, update: BoardUpdate) -> StoreResult<Board> {
        let mut tables = self.tables.write().await;
        let board = tables.boards.get_mut(&id).ok_or(StoreError::NotFound("Board"))?;
        if let Some(title) = update.title {
            board.title = title;
        }
        if let Some(color) = update.background_color {
            board.background_color = color;
        }
        Ok(board.clone())
    }

    async fn delete_board(&self, id: Uuid) -> StoreResult<Board> {
        let mut tables = self.tables.write().await;
        let board = tables.boards.remove(&id).ok_or(StoreError::NotFound("Board"))?;

        let list_ids: Vec<Uuid> = tables
            .lists
            .values()
            .filter(|l| l.board_id == id)
            .map(|l| l.id)
            .collect();
        for list_id in list_ids {
            tables.remove_list_cascade(list_id);
        }

        Ok(board)
    }

    async fn lists_with_tasks(&self, board_id: Uuid) -> StoreResult<Vec<ListWithTasks>> {
        let tables = self.tables.read().await;
        let mut lists: Vec<BoardList> = tables
            .lists
            .values()
            .filter(|l| l.board_id == board_id)
            .cloned()
            .collect();
        lists.sort_by_key(|l| l.position);

        Ok(lists
            .into_iter()
            .map(|list| {
                let tasks = tables.tasks_of(list.id);
                ListWithTasks { list, tasks }
            })
            .collect())
    }

    async fn create_list(&self, board_id: Uuid, title: String) -> StoreResult<BoardList> {
        let mut tables = self.tables.write().await;
        if !tables.boards.contains_key(&board_id) {
            return Err(StoreError::NotFound("Board"));
        }

        let record = BoardList {
            id: Uuid::new_v4(),
            board_id,
            title,
            position: tables.next_list_position(board_id),
            created_at: Utc::now(),
        };
        tables.lists.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_list(&self, id: Uuid) -> StoreResult<Option<BoardList>> {
        Ok(self.tables.read().await.lists.get(&id).cloned())
    }

    async fn update_list(&self, id: Uuid, title: String) -> StoreResult<BoardList> {
        let mut tables = self.tables.write().await;
        let list = tables.lists.get_mut(&id).ok_or(StoreError::NotFound("List"))?;
        list.title = title;
        Ok(list.clone())
    }

    async fn delete_list(&self, id: Uuid) -> StoreResult<BoardList> {
        let mut tables = self.tables.write().await;
        tables
            .remove_list_cascade(id)
            .ok_or(StoreError::NotFound("List"))
    }

    async fn list_tasks(&self, list_id: Uuid) -> StoreResult<Vec<Task>> {
        Ok(self.tables.read().await.tasks_of(list_id))
    }

    async fn create_task(
        &self,
        list_id: Uuid,
        title: String,
        description: Option<String>,
    ) -> StoreResult<Task> {
        let mut tables = self.tables.write().await;
        if !tables.lists.contains_key(&list_id) {
            return Err(StoreError::NotFound("List"));
        }

        let record = Task {
            id: Uuid::new_v4(),
            list_id,
            title,
            description,
            position: tables.next_task_position(list_id),
            completed: false,
            created_at: Utc::now(),
        };
        tables.tasks.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_task(&self, id: Uuid) -> StoreResult<Option<Task>> {
        Ok(self.tables.read().await.tasks.get(&id).cloned())
    }

    async fn update_task(&self, id: Uuid, update: TaskUpdate) -> StoreResult<Task> {
        let mut tables = self.tables.write().await;
        let task = tables.tasks.get_mut(&id).ok_or(StoreError::NotFound("Task"))?;
        if let Some(title) = update.title {
            task.title = title;
        }
        if let Some(description) = update.description {
            task.description = description;
        }
        if let Some(completed) = update.completed {
            task.completed = completed;
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, id: Uuid) -> StoreResult<Task> {
        let mut tables = self.tables.write().await;
        tables.tasks.remove(&id).ok_or(StoreError::NotFound("Task"))
    }
}
