use chrono::NaiveDate;
use gerot_shared::{
  CompletionResponse,
  PageBootstrap
};
use tracing::{
  debug,
  info,
  warn
};
use uuid::Uuid;

use crate::alert::{
  AlertKind,
  AlertOrigin,
  AlertStack
};
use crate::calendar::MonthGrid;
use crate::config::UiConfig;
use crate::editor::TaskFieldList;
use crate::filter::TaskFilter;
use crate::modal::ModalStack;
use crate::sidebar::{
  SidebarState,
  SidebarToggle
};
use crate::task::{
  CompletionAction,
  CompletionRequest,
  TaskBoard,
  TaskId,
  TaskView
};
use crate::validate::{
  FieldErrors,
  FieldSpec
};

pub const MSG_TASK_COMPLETED: &str =
  "Tarefa completada!";
pub const MSG_COMPLETE_FAILED: &str =
  "Erro ao completar tarefa";
pub const MSG_UNCOMPLETE_FAILED: &str =
  "Erro ao reabrir tarefa";
pub const MSG_COPIED: &str =
  "Copiado para a área de transferência";
pub const MSG_COPY_FAILED: &str =
  "Não foi possível copiar";

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum RowField {
  Title,
  Priority,
  Estimate
}

impl RowField {
  pub fn from_key(
    raw: &str
  ) -> Option<Self> {
    match raw.trim() {
      | "title" => Some(Self::Title),
      | "priority" => Some(Self::Priority),
      | "estimate" => Some(Self::Estimate),
      | _ => None
    }
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Title => "title",
      | Self::Priority => "priority",
      | Self::Estimate => "estimate"
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
  Answered(CompletionResponse),
  Failed(String)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  ToggleSidebar {
    viewport_width: u32
  },
  ArmSidebarOutsideClick,
  DocumentClicked {
    inside_sidebar: bool
  },
  ViewportResized {
    width: u32
  },
  OpenModal(String),
  FocusModal(String),
  CloseModal(String),
  EscapePressed,
  SaveShortcut,
  SetFilter(TaskFilter),
  ToggleTask {
    id:      TaskId,
    checked: bool
  },
  CompletionSettled {
    request: CompletionRequest,
    outcome: CompletionOutcome
  },
  Notify {
    kind:    AlertKind,
    message: String
  },
  FadeAlert(u64),
  RemoveAlert(u64),
  DismissAlert(u64),
  FieldBlurred {
    field: String,
    value: String,
    spec:  FieldSpec
  },
  FieldEdited {
    field: String
  },
  AddTaskRow,
  RemoveTaskRow(Uuid),
  EditTaskRow {
    key:   Uuid,
    field: RowField,
    value: String
  },
  DayClicked(NaiveDate),
  RefreshCalendar(NaiveDate),
  CopyRequested {
    selector: String
  },
  CopyFinished {
    ok: bool
  },
  AutoSubmit {
    form_id: String
  },
  FormSubmitted,
  SetLoading(bool),
  PageUnload
}

impl Action {
  pub fn name(&self) -> &'static str {
    match self {
      | Self::ToggleSidebar { .. } => {
        "sidebar.toggle"
      }
      | Self::ArmSidebarOutsideClick => {
        "sidebar.arm"
      }
      | Self::DocumentClicked { .. } => {
        "sidebar.document_click"
      }
      | Self::ViewportResized { .. } => {
        "viewport.resize"
      }
      | Self::OpenModal(_) => "modal.open",
      | Self::FocusModal(_) => "modal.focus",
      | Self::CloseModal(_) => "modal.close",
      | Self::EscapePressed => "key.escape",
      | Self::SaveShortcut => "key.save",
      | Self::SetFilter(_) => "task.filter",
      | Self::ToggleTask { .. } => {
        "task.toggle"
      }
      | Self::CompletionSettled {
        ..
      } => "task.settled",
      | Self::Notify { .. } => "alert.notify",
      | Self::FadeAlert(_) => "alert.fade",
      | Self::RemoveAlert(_) => {
        "alert.remove"
      }
      | Self::DismissAlert(_) => {
        "alert.dismiss"
      }
      | Self::FieldBlurred { .. } => {
        "field.blur"
      }
      | Self::FieldEdited { .. } => {
        "field.input"
      }
      | Self::AddTaskRow => "editor.add",
      | Self::RemoveTaskRow(_) => {
        "editor.remove"
      }
      | Self::EditTaskRow { .. } => {
        "editor.edit"
      }
      | Self::DayClicked(_) => {
        "calendar.day"
      }
      | Self::RefreshCalendar(_) => {
        "calendar.refresh"
      }
      | Self::CopyRequested { .. } => {
        "util.copy"
      }
      | Self::CopyFinished { .. } => {
        "util.copied"
      }
      | Self::AutoSubmit { .. } => {
        "form.auto_submit"
      }
      | Self::FormSubmitted => {
        "form.submitted"
      }
      | Self::SetLoading(_) => "loading.set",
      | Self::PageUnload => "page.unload"
    }
  }
}

/// Side effects the DOM layer performs on behalf of the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
  After {
    delay_ms: u32,
    action:   Action
  },
  PostCompletion(CompletionRequest),
  SetScrollLock(bool),
  FocusFirstField {
    modal_id: String
  },
  FocusElement {
    element_id: String
  },
  CopyToClipboard {
    selector: String
  },
  SubmitForm {
    form_id: String
  },
  ClickSave,
  ShowDay(NaiveDate)
}

/// Whole interface state. Every change goes through
/// [`UiState::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
  pub config:   UiConfig,
  pub sidebar:  SidebarState,
  pub modals:   ModalStack,
  pub board:    TaskBoard,
  pub alerts:   AlertStack,
  pub fields:   FieldErrors,
  pub editor:   TaskFieldList,
  pub calendar: MonthGrid,
  pub loading:  bool
}

impl UiState {
  pub fn new(
    config: UiConfig,
    bootstrap: PageBootstrap,
    today: NaiveDate
  ) -> Self {
    let tasks = bootstrap
      .tasks
      .into_iter()
      .map(TaskView::from)
      .collect();

    let mut alerts = AlertStack::default();
    for flash in bootstrap.alerts {
      alerts.push(
        AlertKind::from_key(&flash.kind),
        flash.message,
        AlertOrigin::Page
      );
    }

    Self {
      config,
      sidebar: SidebarState::default(),
      modals: ModalStack::default(),
      board: TaskBoard::new(tasks),
      alerts,
      fields: FieldErrors::default(),
      editor: TaskFieldList::with_rows(1),
      calendar: MonthGrid::for_date(today),
      loading: false
    }
  }

  /// Dismissal timers for alerts that were on the page at load.
  pub fn startup_effects(
    &self
  ) -> Vec<Effect> {
    let delay_ms = self
      .config
      .timings
      .page_alert_dismiss_ms;
    self
      .alerts
      .alerts()
      .iter()
      .filter(|alert| {
        alert.origin == AlertOrigin::Page
      })
      .map(|alert| Effect::After {
        delay_ms,
        action: Action::FadeAlert(
          alert.id
        )
      })
      .collect()
  }

  pub fn dispatch(
    &mut self,
    action: Action
  ) -> Vec<Effect> {
    debug!(
      action = action.name(),
      "dispatch"
    );
    let timings =
      self.config.timings.clone();
    let breakpoint = self
      .config
      .layout
      .sidebar_breakpoint_px;

    match action {
      | Action::ToggleSidebar {
        viewport_width
      } => {
        match self
          .sidebar
          .toggle(viewport_width, breakpoint)
        {
          | SidebarToggle::Opened {
            arm_outside_click: true
          } => vec![Effect::After {
            delay_ms: timings
              .outside_click_arm_delay_ms,
            action:
              Action::ArmSidebarOutsideClick
          }],
          | _ => vec![]
        }
      }
      | Action::ArmSidebarOutsideClick => {
        self.sidebar.arm_outside_click();
        vec![]
      }
      | Action::DocumentClicked {
        inside_sidebar
      } => {
        if self
          .sidebar
          .outside_click(inside_sidebar)
        {
          debug!("sidebar closed by outside click");
        }
        vec![]
      }
      | Action::ViewportResized {
        width
      } => {
        self
          .sidebar
          .viewport_resized(width, breakpoint);
        vec![]
      }
      | Action::OpenModal(id) => {
        if !self.modals.open(&id) {
          return vec![];
        }
        vec![
          Effect::SetScrollLock(true),
          Effect::After {
            delay_ms: timings
              .modal_focus_delay_ms,
            action:   Action::FocusModal(id)
          },
        ]
      }
      | Action::FocusModal(id) => {
        if self.modals.is_open(&id) {
          vec![Effect::FocusFirstField {
            modal_id: id
          }]
        } else {
          vec![]
        }
      }
      | Action::CloseModal(id) => {
        if self.modals.close(&id) {
          vec![Effect::SetScrollLock(
            self.modals.scroll_locked()
          )]
        } else {
          vec![]
        }
      }
      | Action::EscapePressed => {
        match self.modals.close_top() {
          | Some(id) => {
            debug!(modal = %id, "escape closed modal");
            vec![Effect::SetScrollLock(
              self.modals.scroll_locked()
            )]
          }
          | None => vec![]
        }
      }
      | Action::SaveShortcut => {
        vec![Effect::ClickSave]
      }
      | Action::SetFilter(filter) => {
        self.board.set_filter(filter);
        vec![]
      }
      | Action::ToggleTask {
        id,
        checked
      } => {
        match self
          .board
          .set_completed(&id, checked)
        {
          | Some(request) => {
            vec![Effect::PostCompletion(
              request
            )]
          }
          | None => vec![]
        }
      }
      | Action::CompletionSettled {
        request,
        outcome
      } => {
        self.completion_settled(
          request, outcome
        )
      }
      | Action::Notify {
        kind,
        message
      } => self.notify(kind, message),
      | Action::FadeAlert(id)
      | Action::DismissAlert(id) => {
        if self.alerts.begin_fade(id) {
          vec![Effect::After {
            delay_ms: timings.alert_fade_ms,
            action:   Action::RemoveAlert(
              id
            )
          }]
        } else {
          vec![]
        }
      }
      | Action::RemoveAlert(id) => {
        self.alerts.remove(id);
        vec![]
      }
      | Action::FieldBlurred {
        field,
        value,
        spec
      } => {
        self.fields.on_blur(
          &field,
          &value,
          spec,
          self
            .config
            .validation
            .min_password_len
        );
        vec![]
      }
      | Action::FieldEdited {
        field
      } => {
        self.fields.on_input(&field);
        vec![]
      }
      | Action::AddTaskRow => {
        let key = self.editor.add_row();
        self
          .editor
          .rows()
          .iter()
          .find(|row| row.key == key)
          .map(|row| {
            vec![Effect::FocusElement {
              element_id: row
                .title_input_id()
            }]
          })
          .unwrap_or_default()
      }
      | Action::RemoveTaskRow(key) => {
        if let Some(row) = self
          .editor
          .rows()
          .iter()
          .find(|row| row.key == key)
        {
          let input_id =
            row.title_input_id();
          self.fields.on_input(&input_id);
        }
        self.editor.remove_row(key);
        vec![]
      }
      | Action::EditTaskRow {
        key,
        field,
        value
      } => {
        match field {
          | RowField::Title => {
            self.editor.set_title(key, &value)
          }
          | RowField::Priority => {
            self
              .editor
              .set_priority(key, &value)
          }
          | RowField::Estimate => {
            self
              .editor
              .set_estimate(key, &value)
          }
        }
        vec![]
      }
      | Action::DayClicked(date) => {
        if self
          .calendar
          .days()
          .any(|day| day.date == date)
        {
          vec![Effect::ShowDay(date)]
        } else {
          vec![]
        }
      }
      | Action::RefreshCalendar(today) => {
        self.calendar =
          MonthGrid::for_date(today);
        vec![]
      }
      | Action::CopyRequested {
        selector
      } => {
        vec![Effect::CopyToClipboard {
          selector
        }]
      }
      | Action::CopyFinished {
        ok
      } => {
        if ok {
          self.notify(
            AlertKind::Success,
            MSG_COPIED.to_string()
          )
        } else {
          self.notify(
            AlertKind::Warning,
            MSG_COPY_FAILED.to_string()
          )
        }
      }
      | Action::AutoSubmit {
        form_id
      } => {
        vec![Effect::SubmitForm {
          form_id
        }]
      }
      | Action::FormSubmitted => {
        self.loading = true;
        vec![]
      }
      | Action::SetLoading(on) => {
        self.loading = on;
        vec![]
      }
      | Action::PageUnload => {
        self.loading = false;
        vec![]
      }
    }
  }

  /// The checkbox keeps whatever state the user gave it; the outcome
  /// only decides which notification to show.
  fn completion_settled(
    &mut self,
    request: CompletionRequest,
    outcome: CompletionOutcome
  ) -> Vec<Effect> {
    match outcome {
      | CompletionOutcome::Answered(
        response
      ) if response.success => {
        info!(
          task = %request.task_id,
          action = request.action.as_key(),
          "task completion confirmed"
        );
        match request.action {
          | CompletionAction::Complete => {
            self.notify(
              AlertKind::Success,
              MSG_TASK_COMPLETED.to_string()
            )
          }
          | CompletionAction::Uncomplete => {
            vec![]
          }
        }
      }
      | CompletionOutcome::Answered(
        response
      ) => {
        debug!(
          task = %request.task_id,
          message = ?response.message,
          "backend answered without success"
        );
        vec![]
      }
      | CompletionOutcome::Failed(
        reason
      ) => {
        warn!(
          task = %request.task_id,
          action = request.action.as_key(),
          %reason,
          "task completion request failed"
        );
        let message = match request.action
        {
          | CompletionAction::Complete => {
            MSG_COMPLETE_FAILED
          }
          | CompletionAction::Uncomplete => {
            MSG_UNCOMPLETE_FAILED
          }
        };
        self.notify(
          AlertKind::Error,
          message.to_string()
        )
      }
    }
  }

  fn notify(
    &mut self,
    kind: AlertKind,
    message: String
  ) -> Vec<Effect> {
    let id = self.alerts.push(
      kind,
      message,
      AlertOrigin::Notification
    );
    vec![Effect::After {
      delay_ms: self
        .config
        .timings
        .notification_dismiss_ms,
      action:   Action::FadeAlert(id)
    }]
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use gerot_shared::{
    FlashMessage,
    PageBootstrap,
    TaskDto
  };

  use super::*;

  fn state() -> UiState {
    let today =
      NaiveDate::from_ymd_opt(2026, 10, 17)
        .expect("valid date");
    UiState::new(
      UiConfig::default(),
      PageBootstrap {
        tasks:  vec![TaskDto {
          id:             "1".to_string(),
          task:           "Abrir caixa"
            .to_string(),
          completed:      false,
          priority:       Some(3),
          estimated_time: None
        }],
        alerts: vec![FlashMessage {
          kind:    "success".to_string(),
          message: "Login realizado"
            .to_string()
        }]
      },
      today
    )
  }

  #[test]
  fn page_alerts_use_the_long_delay() {
    let state = state();
    let effects = state.startup_effects();
    assert_eq!(effects.len(), 1);
    assert!(matches!(
      effects[0],
      Effect::After {
        delay_ms: 5_000,
        action: Action::FadeAlert(_)
      }
    ));
  }

  #[test]
  fn opening_a_modal_locks_scroll_then_focuses()
   {
    let mut state = state();
    let effects = state.dispatch(
      Action::OpenModal("m".to_string())
    );
    assert_eq!(
      effects,
      vec![
        Effect::SetScrollLock(true),
        Effect::After {
          delay_ms: 100,
          action:   Action::FocusModal(
            "m".to_string()
          )
        },
      ]
    );
    assert!(
      state
        .dispatch(Action::OpenModal(
          "m".to_string()
        ))
        .is_empty()
    );

    state.dispatch(
      Action::CloseModal("m".to_string())
    );
    assert!(
      state
        .dispatch(Action::FocusModal(
          "m".to_string()
        ))
        .is_empty()
    );
  }

  #[test]
  fn uncomplete_success_is_silent() {
    let mut state = state();
    let before = state.alerts.alerts().len();
    let effects = state.dispatch(
      Action::CompletionSettled {
        request: CompletionRequest {
          task_id: TaskId::new("1"),
          action:
            CompletionAction::Uncomplete
        },
        outcome:
          CompletionOutcome::Answered(
            CompletionResponse {
              success:      true,
              message:      None,
              completed_at: None
            }
          )
      }
    );
    assert!(effects.is_empty());
    assert_eq!(
      state.alerts.alerts().len(),
      before
    );
  }

  #[test]
  fn removing_a_row_drops_its_error() {
    let mut state = state();
    let key = state.editor.rows()[0].key;
    let input_id =
      state.editor.rows()[0].title_input_id();
    state.dispatch(Action::FieldBlurred {
      field: input_id.clone(),
      value: String::new(),
      spec:  FieldSpec::required(
        crate::validate::FieldKind::Text
      )
    });
    assert!(
      state.fields.get(&input_id).is_some()
    );
    state
      .dispatch(Action::RemoveTaskRow(key));
    assert!(state.fields.is_empty());
    assert!(state.editor.is_empty());
  }

  #[test]
  fn day_clicks_outside_the_month_are_ignored()
   {
    let mut state = state();
    let inside =
      NaiveDate::from_ymd_opt(2026, 10, 3)
        .expect("valid date");
    let outside =
      NaiveDate::from_ymd_opt(2026, 11, 3)
        .expect("valid date");
    assert_eq!(
      state
        .dispatch(Action::DayClicked(inside)),
      vec![Effect::ShowDay(inside)]
    );
    assert!(
      state
        .dispatch(Action::DayClicked(
          outside
        ))
        .is_empty()
    );
  }
}
