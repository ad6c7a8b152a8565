use std::fmt;

use gerot_shared::TaskDto;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::filter::TaskFilter;
use crate::progress::Progress;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn all() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    /// Backend level: 1 = baixa, 2 = média, 3 = alta.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Baixa",
            Self::Medium => "Média",
            Self::High => "Alta",
        }
    }

    /// Full CSS class for the priority badge, used as-is next to
    /// `priority-badge`.
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Low => "priority-low",
            Self::Medium => "priority-medium",
            Self::High => "priority-high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub priority: Option<Priority>,
    pub estimated_minutes: Option<u32>,
}

impl TaskView {
    pub fn new(id: impl Into<String>, completed: bool, priority: Option<Priority>) -> Self {
        Self {
            id: TaskId::new(id),
            title: String::new(),
            completed,
            priority,
            estimated_minutes: None,
        }
    }
}

impl From<TaskDto> for TaskView {
    fn from(dto: TaskDto) -> Self {
        let priority = dto.priority.and_then(Priority::from_level);
        if priority.is_none() && dto.priority.is_some() {
            warn!(task = %dto.id, level = ?dto.priority, "unknown priority level; badge omitted");
        }
        Self {
            id: TaskId::new(dto.id),
            title: dto.task,
            completed: dto.completed,
            priority,
            estimated_minutes: dto.estimated_time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionAction {
    Complete,
    Uncomplete,
}

impl CompletionAction {
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Uncomplete => "uncomplete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub task_id: TaskId,
    pub action: CompletionAction,
}

/// Today's checklist: the task collection plus the active filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskBoard {
    tasks: Vec<TaskView>,
    filter: TaskFilter,
}

impl TaskBoard {
    pub fn new(tasks: Vec<TaskView>) -> Self {
        Self {
            tasks,
            filter: TaskFilter::All,
        }
    }

    pub fn tasks(&self) -> &[TaskView] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&TaskView> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Replaces the active filter and returns how many tasks stay visible.
    pub fn set_filter(&mut self, filter: TaskFilter) -> usize {
        self.filter = filter;
        let visible = self.visible().count();
        debug!(filter = %filter.as_tag(), visible, total = self.tasks.len(), "applied task filter");
        visible
    }

    pub fn is_visible(&self, task: &TaskView) -> bool {
        self.filter.matches(task.completed, task.priority)
    }

    pub fn visible(&self) -> impl Iterator<Item = &TaskView> {
        self.tasks.iter().filter(|task| self.is_visible(task))
    }

    /// Applies the checkbox state right away and returns the remote call
    /// to issue. The local state is never rolled back by the caller.
    ///
    /// Returns `None` for an unknown id or when the state did not change.
    pub fn set_completed(&mut self, id: &TaskId, checked: bool) -> Option<CompletionRequest> {
        let task = self.tasks.iter_mut().find(|task| &task.id == id)?;
        if task.completed == checked {
            return None;
        }
        task.completed = checked;

        let action = if checked {
            CompletionAction::Complete
        } else {
            CompletionAction::Uncomplete
        };
        Some(CompletionRequest {
            task_id: id.clone(),
            action,
        })
    }

    pub fn progress(&self) -> Progress {
        Progress::from_tasks(&self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> TaskBoard {
        TaskBoard::new(vec![
            TaskView::new("1", false, Some(Priority::High)),
            TaskView::new("2", true, Some(Priority::Medium)),
            TaskView::new("3", false, Some(Priority::Low)),
        ])
    }

    #[test]
    fn toggle_updates_progress_before_any_response() {
        let mut board = board();
        assert_eq!(board.progress().fraction_label(), "1/3");

        let request = board
            .set_completed(&TaskId::new("1"), true)
            .expect("state changed");
        assert_eq!(request.action, CompletionAction::Complete);
        assert_eq!(board.progress().fraction_label(), "2/3");
    }

    #[test]
    fn unchecking_requests_uncomplete() {
        let mut board = board();
        let request = board
            .set_completed(&TaskId::new("2"), false)
            .expect("state changed");
        assert_eq!(request.action, CompletionAction::Uncomplete);
        assert_eq!(request.task_id.as_str(), "2");
    }

    #[test]
    fn repeated_state_and_unknown_ids_are_ignored() {
        let mut board = board();
        assert!(board.set_completed(&TaskId::new("2"), true).is_none());
        assert!(board.set_completed(&TaskId::new("99"), true).is_none());
        assert_eq!(board.progress().fraction_label(), "1/3");
    }

    #[test]
    fn dto_levels_map_to_priorities() {
        let view = TaskView::from(TaskDto {
            id: "7".to_string(),
            task: "Conferir estoque".to_string(),
            completed: false,
            priority: Some(9),
            estimated_time: Some(15),
        });
        assert_eq!(view.priority, None);
        assert_eq!(view.estimated_minutes, Some(15));
        for priority in Priority::all() {
            assert_eq!(Priority::from_level(priority.level()), Some(priority));
        }
    }

    #[test]
    fn badge_classes_are_complete_names() {
        let classes: Vec<_> = Priority::all().into_iter().map(Priority::as_class).collect();
        assert_eq!(classes, ["priority-low", "priority-medium", "priority-high"]);
        assert!(classes.iter().all(|class| !class.starts_with("priority-priority")));
    }
}
