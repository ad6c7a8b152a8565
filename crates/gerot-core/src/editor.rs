use uuid::Uuid;

use crate::task::Priority;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFieldRow {
  pub key:               Uuid,
  pub placeholder:       String,
  pub title:             String,
  pub priority:          Priority,
  pub estimated_minutes: Option<u32>
}

impl TaskFieldRow {
  pub fn title_input_id(&self) -> String {
    format!("task-field-{}", self.key)
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct TaskFieldList {
  rows: Vec<TaskFieldRow>
}

impl TaskFieldList {
  pub fn with_rows(count: usize) -> Self {
    let mut list = Self::default();
    for _ in 0..count {
      list.add_row();
    }
    list
  }

  pub fn rows(&self) -> &[TaskFieldRow] {
    &self.rows
  }

  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  /// Appends a row numbered after the rows currently present.
  pub fn add_row(&mut self) -> Uuid {
    let key = Uuid::new_v4();
    let placeholder = format!(
      "Digite a tarefa {}",
      self.rows.len() + 1
    );
    self.rows.push(TaskFieldRow {
      key,
      placeholder,
      title: String::new(),
      priority: Priority::Medium,
      estimated_minutes: None
    });
    tracing::debug!(
      %key,
      rows = self.rows.len(),
      "added task field row"
    );
    key
  }

  pub fn remove_row(
    &mut self,
    key: Uuid
  ) -> bool {
    let before = self.rows.len();
    self.rows.retain(|row| row.key != key);
    self.rows.len() != before
  }

  pub fn set_title(
    &mut self,
    key: Uuid,
    value: &str
  ) {
    if let Some(row) = self.row_mut(key)
    {
      row.title = value.to_string();
    }
  }

  pub fn set_priority(
    &mut self,
    key: Uuid,
    level: &str
  ) {
    let parsed = level
      .trim()
      .parse::<u8>()
      .ok()
      .and_then(Priority::from_level);
    if let (Some(row), Some(priority)) =
      (self.row_mut(key), parsed)
    {
      row.priority = priority;
    }
  }

  /// Empty or non-positive estimates clear the field.
  pub fn set_estimate(
    &mut self,
    key: Uuid,
    raw: &str
  ) {
    let minutes = raw
      .trim()
      .parse::<u32>()
      .ok()
      .filter(|minutes| *minutes >= 1);
    if let Some(row) = self.row_mut(key)
    {
      row.estimated_minutes = minutes;
    }
  }

  fn row_mut(
    &mut self,
    key: Uuid
  ) -> Option<&mut TaskFieldRow> {
    self
      .rows
      .iter_mut()
      .find(|row| row.key == key)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn placeholders_count_existing_rows() {
    let mut list = TaskFieldList::with_rows(1);
    let key = list.add_row();
    assert_eq!(list.len(), 2);
    assert_eq!(
      list.rows()[1].placeholder,
      "Digite a tarefa 2"
    );
    assert_eq!(list.rows()[1].key, key);
    assert_eq!(
      list.rows()[1].priority,
      Priority::Medium
    );
  }

  #[test]
  fn remove_row_by_key() {
    let mut list = TaskFieldList::with_rows(3);
    let middle = list.rows()[1].key;
    assert!(list.remove_row(middle));
    assert!(!list.remove_row(middle));
    assert_eq!(list.len(), 2);
    assert!(
      list
        .rows()
        .iter()
        .all(|row| row.key != middle)
    );
  }

  #[test]
  fn edits_land_on_the_keyed_row() {
    let mut list = TaskFieldList::with_rows(2);
    let first = list.rows()[0].key;
    list.set_title(first, "Abrir loja");
    list.set_priority(first, "3");
    list.set_estimate(first, "15");
    let second = list.rows()[1].key;
    list.set_estimate(second, "0");

    let row = &list.rows()[0];
    assert_eq!(row.title, "Abrir loja");
    assert_eq!(row.priority, Priority::High);
    assert_eq!(row.estimated_minutes, Some(15));
    assert_eq!(list.rows()[1].title, "");
    assert_eq!(
      list.rows()[1].estimated_minutes,
      None
    );
  }

  #[test]
  fn bad_priority_level_is_ignored() {
    let mut list = TaskFieldList::with_rows(1);
    let key = list.rows()[0].key;
    list.set_priority(key, "7");
    assert_eq!(
      list.rows()[0].priority,
      Priority::Medium
    );
  }
}
