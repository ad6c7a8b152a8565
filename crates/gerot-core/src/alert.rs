use std::fmt;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
pub enum AlertKind {
  Success,
  Error,
  Warning,
  #[default]
  Info
}

impl AlertKind {
  /// Unknown kinds render as info.
  pub fn from_key(raw: &str) -> Self {
    match raw.trim() {
      | "success" => Self::Success,
      | "error" | "danger" => Self::Error,
      | "warning" => Self::Warning,
      | _ => Self::Info
    }
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Success => "success",
      | Self::Error => "error",
      | Self::Warning => "warning",
      | Self::Info => "info"
    }
  }

  pub fn icon(self) -> &'static str {
    match self {
      | Self::Success => "check-circle",
      | Self::Error => {
        "exclamation-circle"
      }
      | Self::Warning => {
        "exclamation-triangle"
      }
      | Self::Info => "info-circle"
    }
  }
}

impl fmt::Display for AlertKind {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_key())
  }
}

/// Page alerts come from the server-rendered flash list; notifications
/// are raised at runtime and dismiss sooner.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum AlertOrigin {
  Page,
  Notification
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum AlertStage {
  Shown,
  Fading
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
  pub id:      u64,
  pub kind:    AlertKind,
  pub message: String,
  pub origin:  AlertOrigin,
  pub stage:   AlertStage
}

impl Alert {
  pub fn is_fading(&self) -> bool {
    self.stage == AlertStage::Fading
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct AlertStack {
  next_id: u64,
  alerts:  Vec<Alert>
}

impl AlertStack {
  pub fn alerts(&self) -> &[Alert] {
    &self.alerts
  }

  pub fn get(
    &self,
    id: u64
  ) -> Option<&Alert> {
    self
      .alerts
      .iter()
      .find(|alert| alert.id == id)
  }

  /// Page alerts keep document order; notifications go on top.
  pub fn push(
    &mut self,
    kind: AlertKind,
    message: impl Into<String>,
    origin: AlertOrigin
  ) -> u64 {
    self.next_id += 1;
    let alert = Alert {
      id: self.next_id,
      kind,
      message: message.into(),
      origin,
      stage: AlertStage::Shown
    };
    match origin {
      | AlertOrigin::Page => {
        self.alerts.push(alert)
      }
      | AlertOrigin::Notification => {
        self.alerts.insert(0, alert)
      }
    }
    self.next_id
  }

  /// First dismissal stage. Returns false once the alert is gone or
  /// already fading.
  pub fn begin_fade(
    &mut self,
    id: u64
  ) -> bool {
    match self
      .alerts
      .iter_mut()
      .find(|alert| alert.id == id)
    {
      | Some(alert)
        if alert.stage
          == AlertStage::Shown =>
      {
        alert.stage = AlertStage::Fading;
        true
      }
      | _ => false
    }
  }

  pub fn remove(
    &mut self,
    id: u64
  ) -> bool {
    let before = self.alerts.len();
    self
      .alerts
      .retain(|alert| alert.id != id);
    self.alerts.len() != before
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn icons_match_kinds() {
    assert_eq!(
      AlertKind::Error.icon(),
      "exclamation-circle"
    );
    assert_eq!(
      AlertKind::from_key("bogus").icon(),
      "info-circle"
    );
    assert_eq!(
      AlertKind::from_key("warning").icon(),
      "exclamation-triangle"
    );
  }

  #[test]
  fn notifications_are_inserted_on_top() {
    let mut stack = AlertStack::default();
    let page = stack.push(
      AlertKind::Info,
      "Bem-vindo",
      AlertOrigin::Page
    );
    let note = stack.push(
      AlertKind::Success,
      "Tarefa completada!",
      AlertOrigin::Notification
    );
    let ids: Vec<u64> = stack
      .alerts()
      .iter()
      .map(|a| a.id)
      .collect();
    assert_eq!(ids, vec![note, page]);
  }

  #[test]
  fn dismissal_fades_before_removal() {
    let mut stack = AlertStack::default();
    let id = stack.push(
      AlertKind::Error,
      "Erro",
      AlertOrigin::Notification
    );
    assert!(stack.begin_fade(id));
    assert!(
      stack
        .get(id)
        .is_some_and(Alert::is_fading)
    );
    assert!(!stack.begin_fade(id));
    assert!(stack.remove(id));
    assert!(!stack.remove(id));
    assert!(!stack.begin_fade(id));
  }
}
