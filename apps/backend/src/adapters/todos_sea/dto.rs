//! DTOs for the todos_sea adapter.

/// DTO for creating a new todo.
#[derive(Debug, Clone)]
pub struct TodoCreate {
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TodoCreate {
    pub fn new(user_id: i64, title: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            description: String::new(),
            completed: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// DTO replacing the mutable fields of a todo.
#[derive(Debug, Clone)]
pub struct TodoUpdate {
    pub title: String,
    pub description: String,
    pub completed: bool,
}
