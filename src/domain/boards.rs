// Project board domain models
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
    Completed,
}

impl TaskPriority {
    pub fn from_cell(cell: &str) -> Self {
        match cell.trim().to_ascii_lowercase().as_str() {
            "high" => TaskPriority::High,
            "low" => TaskPriority::Low,
            "completed" => TaskPriority::Completed,
            _ => TaskPriority::Medium,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub assignee: String,
    pub due_date: String,
    pub priority: TaskPriority,
    pub tags: Vec<String>,
    pub budget: Option<String>,
    pub progress: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardColumn {
    pub title: String,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    pub id: String,
    pub title: String,
    pub emoji: String,
    pub color: String,
    pub stats: String,
    pub columns: Vec<BoardColumn>,
}

impl Board {
    /// Column with the given title, appended if not seen before.
    pub fn column_mut(&mut self, title: &str) -> &mut BoardColumn {
        let idx = match self.columns.iter().position(|c| c.title == title) {
            Some(idx) => idx,
            None => {
                self.columns.push(BoardColumn {
                    title: title.to_string(),
                    tasks: Vec::new(),
                });
                self.columns.len() - 1
            }
        };
        &mut self.columns[idx]
    }
}
