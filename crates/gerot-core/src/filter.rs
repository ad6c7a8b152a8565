use std::fmt;

use crate::task::Priority;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
pub enum TaskFilter {
  #[default]
  All,
  Pending,
  Completed,
  High,
  Medium,
  Low
}

impl TaskFilter {
  pub fn all() -> [Self; 6] {
    [
      Self::All,
      Self::Pending,
      Self::Completed,
      Self::High,
      Self::Medium,
      Self::Low
    ]
  }

  /// Reads a `data-filter` tag. Unrecognized tags fall back to `All`.
  pub fn from_tag(raw: &str) -> Self {
    match raw.trim() {
      | "pending" => Self::Pending,
      | "completed" => Self::Completed,
      | "high" => Self::High,
      | "medium" => Self::Medium,
      | "low" => Self::Low,
      | _ => Self::All
    }
  }

  pub fn as_tag(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Pending => "pending",
      | Self::Completed => "completed",
      | Self::High => "high",
      | Self::Medium => "medium",
      | Self::Low => "low"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::All => "Todas",
      | Self::Pending => "Pendentes",
      | Self::Completed => "Concluídas",
      | Self::High => "Alta",
      | Self::Medium => "Média",
      | Self::Low => "Baixa"
    }
  }

  pub fn matches(
    self,
    completed: bool,
    priority: Option<Priority>
  ) -> bool {
    match self {
      | Self::All => true,
      | Self::Pending => !completed,
      | Self::Completed => completed,
      | Self::High => {
        priority == Some(Priority::High)
      }
      | Self::Medium => {
        priority
          == Some(Priority::Medium)
      }
      | Self::Low => {
        priority == Some(Priority::Low)
      }
    }
  }
}

impl fmt::Display for TaskFilter {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_tag())
  }
}
