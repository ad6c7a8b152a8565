use crate::task::TaskView;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub struct Progress {
  pub completed: usize,
  pub total:     usize
}

impl Progress {
  pub fn from_tasks(
    tasks: &[TaskView]
  ) -> Self {
    Self {
      completed: tasks
        .iter()
        .filter(|task| task.completed)
        .count(),
      total:     tasks.len()
    }
  }

  pub fn percent(&self) -> f64 {
    if self.total == 0 {
      return 0.0;
    }
    self.completed as f64 * 100.0
      / self.total as f64
  }

  pub fn width_style(&self) -> String {
    format!("width: {}%", self.percent())
  }

  pub fn fraction_label(&self) -> String {
    format!(
      "{}/{}",
      self.completed, self.total
    )
  }

  pub fn label(&self) -> String {
    format!(
      "{} tarefas completadas",
      self.fraction_label()
    )
  }
}

#[cfg(test)]
mod tests {
  use super::Progress;

  #[test]
  fn empty_list_is_zero_percent() {
    let progress = Progress::default();
    assert_eq!(progress.percent(), 0.0);
    assert_eq!(
      progress.label(),
      "0/0 tarefas completadas"
    );
  }

  #[test]
  fn width_tracks_ratio() {
    let progress = Progress {
      completed: 1,
      total:     4
    };
    assert_eq!(
      progress.width_style(),
      "width: 25%"
    );
  }
}
