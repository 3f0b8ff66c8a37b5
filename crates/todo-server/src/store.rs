use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::{Result, TodoError};

/// A single todo record as exposed over the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// Client-supplied fields for create and update requests.
///
/// Missing fields fall back to their zero values; only a type mismatch is
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoInput {
    pub title: String,
    pub completed: bool,
}

impl TodoInput {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }
}

/// Records the server starts with unless told to start empty.
pub fn seed_todos() -> Vec<Todo> {
    [
        ("1", "Learn Go"),
        ("2", "Build a web app"),
        ("3", "Deploy to production"),
    ]
    .into_iter()
    .map(|(id, title)| Todo {
        id: id.to_string(),
        title: title.to_string(),
        completed: false,
    })
    .collect()
}

#[derive(Debug)]
struct TodoList {
    items: Vec<Todo>,
    next_id: u64,
}

impl TodoList {
    fn from_items(items: Vec<Todo>) -> Self {
        // Non-numeric ids count as 0 so they never block the counter.
        let highest = items
            .iter()
            .map(|todo| todo.id.parse::<u64>().unwrap_or(0))
            .max()
            .unwrap_or(0);

        Self {
            items,
            next_id: highest.saturating_add(1),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|todo| todo.id == id)
    }

    fn add(&mut self, input: TodoInput) -> Todo {
        let todo = Todo {
            id: self.next_id.to_string(),
            title: input.title,
            completed: input.completed,
        };
        self.next_id = self.next_id.saturating_add(1);
        self.items.push(todo.clone());
        todo
    }

    fn update(&mut self, id: &str, input: TodoInput) -> Option<Todo> {
        let index = self.position(id)?;
        let todo = &mut self.items[index];
        todo.title = input.title;
        todo.completed = input.completed;
        Some(todo.clone())
    }

    fn delete(&mut self, id: &str) -> Option<Todo> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }
}

/// In-memory, insertion-ordered todo collection.
///
/// Every operation holds the lock for its whole duration, so id assignment
/// and mutation are atomic across actix workers. Ids come from a monotonic
/// counter and are never handed out twice, even after deletes.
#[derive(Debug)]
pub struct TodoStore {
    inner: RwLock<TodoList>,
}

impl TodoStore {
    pub fn new(items: Vec<Todo>) -> Self {
        Self {
            inner: RwLock::new(TodoList::from_items(items)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_todos())
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub async fn list(&self) -> Vec<Todo> {
        self.inner.read().await.items.clone()
    }

    pub async fn get(&self, id: &str) -> Result<Todo> {
        let list = self.inner.read().await;
        list.position(id)
            .map(|index| list.items[index].clone())
            .ok_or_else(|| TodoError::NotFound(id.to_string()))
    }

    pub async fn add(&self, input: TodoInput) -> Todo {
        let todo = self.inner.write().await.add(input);
        log::info!("Created todo {}", todo.id);
        todo
    }

    pub async fn update(&self, id: &str, input: TodoInput) -> Result<Todo> {
        let updated = self.inner.write().await.update(id, input);
        match updated {
            Some(todo) => {
                log::info!("Updated todo {}", todo.id);
                Ok(todo)
            }
            None => {
                log::debug!("Update skipped, todo {} not found", id);
                Err(TodoError::NotFound(id.to_string()))
            }
        }
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let removed = self.inner.write().await.delete(id);
        match removed {
            Some(todo) => {
                log::info!("Deleted todo {}", todo.id);
                Ok(())
            }
            None => {
                log::debug!("Delete skipped, todo {} not found", id);
                Err(TodoError::NotFound(id.to_string()))
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::seeded()
    }
}
