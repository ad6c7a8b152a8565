use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct TaskIdArg {
  pub task_id: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct CompletionResponse {
  pub success:      bool,
  #[serde(default)]
  pub message:      Option<String>,
  #[serde(default)]
  pub completed_at: Option<String>
}

/// Checklist entry as rendered by the backend for the current user.
///
/// `priority` carries the backend level: 1 = baixa, 2 = média, 3 =
/// alta.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskDto {
  pub id:             String,
  #[serde(default)]
  pub task:           String,
  #[serde(default)]
  pub completed:      bool,
  #[serde(default)]
  pub priority:       Option<u8>,
  #[serde(default)]
  pub estimated_time: Option<u32>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct FlashMessage {
  #[serde(default = "flash_default_kind")]
  pub kind:    String,
  pub message: String
}

fn flash_default_kind() -> String {
  "info".to_string()
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct PageBootstrap {
  #[serde(default)]
  pub tasks:  Vec<TaskDto>,
  #[serde(default)]
  pub alerts: Vec<FlashMessage>
}
