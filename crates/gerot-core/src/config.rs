use anyhow::Context;
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::{
  error,
  info,
  warn
};

use crate::task::{
  CompletionAction,
  CompletionRequest
};
use crate::validate::DEFAULT_MIN_PASSWORD_LEN;

pub const DEFAULT_TIMEZONE: &str =
  "America/Sao_Paulo";

/// Replaced by the task id in endpoint paths.
pub const TASK_ID_PLACEHOLDER: &str =
  "{id}";

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct UiConfig {
  pub version:    u32,
  pub timezone:   Option<String>,
  pub endpoints:  Endpoints,
  pub forms:      Forms,
  pub layout:     Layout,
  pub timings:    Timings,
  pub validation: Validation
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct Endpoints {
  pub complete:   String,
  pub uncomplete: String
}

/// Server routes the rendered forms post to.
#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct Forms {
  pub routine_action: String,
  pub profile_action: String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct Layout {
  pub sidebar_breakpoint_px: u32
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct Timings {
  pub page_alert_dismiss_ms:      u32,
  pub notification_dismiss_ms:    u32,
  pub alert_fade_ms:              u32,
  pub modal_focus_delay_ms:       u32,
  pub outside_click_arm_delay_ms: u32
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct Validation {
  pub min_password_len: usize
}

impl Default for UiConfig {
  fn default() -> Self {
    Self {
      version:    1,
      timezone:   Some(
        DEFAULT_TIMEZONE.to_string()
      ),
      endpoints:  Endpoints::default(),
      forms:      Forms::default(),
      layout:     Layout::default(),
      timings:    Timings::default(),
      validation: Validation::default()
    }
  }
}

impl Default for Endpoints {
  fn default() -> Self {
    Self {
      complete:   "/api/tasks/complete"
        .to_string(),
      uncomplete:
        "/api/tasks/{id}/uncomplete"
          .to_string()
    }
  }
}

impl Endpoints {
  /// URL a completion request is posted to. `{id}` in the configured
  /// path becomes the task id; the JSON body carries it either way.
  pub fn url_for(
    &self,
    request: &CompletionRequest
  ) -> String {
    let template = match request.action {
      | CompletionAction::Complete => {
        &self.complete
      }
      | CompletionAction::Uncomplete => {
        &self.uncomplete
      }
    };
    template.replace(
      TASK_ID_PLACEHOLDER,
      request.task_id.as_str()
    )
  }
}

impl Default for Forms {
  fn default() -> Self {
    Self {
      routine_action: "/add_routine"
        .to_string(),
      profile_action: "/profile"
        .to_string()
    }
  }
}

impl Default for Layout {
  fn default() -> Self {
    Self {
      sidebar_breakpoint_px: 768
    }
  }
}

impl Default for Timings {
  fn default() -> Self {
    Self {
      page_alert_dismiss_ms:      5_000,
      notification_dismiss_ms:    4_000,
      alert_fade_ms:              300,
      modal_focus_delay_ms:       100,
      outside_click_arm_delay_ms: 100
    }
  }
}

impl Default for Validation {
  fn default() -> Self {
    Self {
      min_password_len:
        DEFAULT_MIN_PASSWORD_LEN
    }
  }
}

impl UiConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config: Self =
      toml::from_str(raw).context(
        "failed to parse ui config"
      )?;
    config.sanitize();
    Ok(config)
  }

  /// Parses the embedded config, falling back to defaults on error.
  pub fn load_embedded(raw: &str) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(config) => {
        info!(
          version = config.version,
          timezone = ?config.timezone,
          breakpoint = config.layout.sidebar_breakpoint_px,
          "loaded ui config"
        );
        config
      }
      | Err(error) => {
        error!(error = %format!("{error:#}"), "failed parsing ui config; using defaults");
        Self::default()
      }
    }
  }

  pub fn sanitize(&mut self) {
    let defaults = Self::default();

    if self
      .endpoints
      .complete
      .trim()
      .is_empty()
    {
      self.endpoints.complete =
        defaults.endpoints.complete;
    }
    if self
      .endpoints
      .uncomplete
      .trim()
      .is_empty()
    {
      self.endpoints.uncomplete =
        defaults.endpoints.uncomplete;
    }

    if self
      .forms
      .routine_action
      .trim()
      .is_empty()
    {
      self.forms.routine_action =
        defaults.forms.routine_action;
    }
    if self
      .forms
      .profile_action
      .trim()
      .is_empty()
    {
      self.forms.profile_action =
        defaults.forms.profile_action;
    }

    if self.layout.sidebar_breakpoint_px
      == 0
    {
      self.layout.sidebar_breakpoint_px =
        defaults
          .layout
          .sidebar_breakpoint_px;
    }

    let timings = &mut self.timings;
    if timings.page_alert_dismiss_ms == 0
    {
      timings.page_alert_dismiss_ms =
        defaults
          .timings
          .page_alert_dismiss_ms;
    }
    if timings.notification_dismiss_ms
      == 0
    {
      timings.notification_dismiss_ms =
        defaults
          .timings
          .notification_dismiss_ms;
    }
    if timings.alert_fade_ms == 0 {
      timings.alert_fade_ms =
        defaults.timings.alert_fade_ms;
    }

    if self.validation.min_password_len
      == 0
    {
      self.validation.min_password_len =
        defaults
          .validation
          .min_password_len;
    }
  }

  pub fn resolve_timezone(&self) -> Tz {
    if let Some(raw) =
      self.timezone.as_deref()
      && let Some(tz) =
        parse_timezone(raw)
    {
      return tz;
    }
    parse_timezone(DEFAULT_TIMEZONE)
      .unwrap_or(chrono_tz::UTC)
  }
}

fn parse_timezone(
  raw: &str
) -> Option<Tz> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }

  match trimmed.parse::<Tz>() {
    | Ok(tz) => Some(tz),
    | Err(error) => {
      warn!(
        timezone = %trimmed,
        error = %error,
        "invalid timezone id"
      );
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::task::TaskId;

  #[test]
  fn partial_config_keeps_defaults() {
    let config = UiConfig::from_toml_str(
      r#"
        version = 2

        [layout]
        sidebar_breakpoint_px = 900
      "#
    )
    .expect("parse");
    assert_eq!(config.version, 2);
    assert_eq!(
      config.layout.sidebar_breakpoint_px,
      900
    );
    assert_eq!(
      config.timings.alert_fade_ms,
      300
    );
    assert_eq!(
      config.endpoints.complete,
      "/api/tasks/complete"
    );
    assert_eq!(
      config.forms.routine_action,
      "/add_routine"
    );
  }

  #[test]
  fn zeroes_and_blanks_are_repaired() {
    let config = UiConfig::from_toml_str(
      r#"
        [endpoints]
        complete = "  "

        [timings]
        notification_dismiss_ms = 0

        [validation]
        min_password_len = 0
      "#
    )
    .expect("parse");
    assert_eq!(
      config.endpoints.complete,
      "/api/tasks/complete"
    );
    assert_eq!(
      config
        .timings
        .notification_dismiss_ms,
      4_000
    );
    assert_eq!(
      config.validation.min_password_len,
      6
    );
  }

  #[test]
  fn endpoints_fill_the_task_id() {
    let endpoints = Endpoints::default();
    let uncomplete = CompletionRequest {
      task_id: TaskId::new("42"),
      action:  CompletionAction::Uncomplete
    };
    let complete = CompletionRequest {
      action: CompletionAction::Complete,
      ..uncomplete.clone()
    };
    assert_eq!(
      endpoints.url_for(&uncomplete),
      "/api/tasks/42/uncomplete"
    );
    assert_eq!(
      endpoints.url_for(&complete),
      "/api/tasks/complete"
    );
  }

  #[test]
  fn broken_toml_falls_back() {
    let config =
      UiConfig::load_embedded("[layout");
    assert_eq!(config, UiConfig::default());
  }

  #[test]
  fn bad_timezone_uses_default() {
    let config = UiConfig {
      timezone: Some(
        "Mars/Olympus".to_string()
      ),
      ..UiConfig::default()
    };
    assert_eq!(
      config.resolve_timezone(),
      chrono_tz::America::Sao_Paulo
    );
  }
}
