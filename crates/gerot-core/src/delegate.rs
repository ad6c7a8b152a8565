//! Translates DOM events caught by container-level listeners into
//! [`Action`]s.
//!
//! The markup contract is expressed in `data-*` attributes, so a row
//! inserted after mount needs no listener of its own.

use uuid::Uuid;

use crate::alert::AlertKind;
use crate::calendar::parse_date_key;
use crate::dispatch::{
  Action,
  RowField
};
use crate::filter::TaskFilter;
use crate::task::TaskId;
use crate::validate::{
  FieldKind,
  FieldSpec
};

pub const ATTR_MODAL_TARGET: &str =
  "data-modal-target";
pub const ATTR_MODAL_CLOSE: &str =
  "data-modal-close";
pub const ATTR_FILTER: &str =
  "data-filter";
pub const ATTR_COPY: &str = "data-copy";
pub const ATTR_AUTO_SUBMIT: &str =
  "data-auto-submit";
pub const ATTR_LOADING: &str =
  "data-loading";
pub const ATTR_ADD_ROW: &str =
  "data-add-row";
pub const ATTR_REMOVE_ROW: &str =
  "data-remove-row";
pub const ATTR_ROW_KEY: &str =
  "data-row-key";
pub const ATTR_ROW_FIELD: &str =
  "data-row-field";
pub const ATTR_DATE: &str = "data-date";
pub const ATTR_ALERT_CLOSE: &str =
  "data-alert-close";
pub const ATTR_NOTIFY: &str =
  "data-notify";
pub const ATTR_NOTIFY_KIND: &str =
  "data-notify-kind";

pub const SEL_MODAL: &str = ".modal";
pub const SEL_MODAL_CLOSE: &str =
  ".modal-close, [data-modal-close]";
pub const SEL_TASK_CHECKBOX: &str =
  ".task-checkbox";
pub const SEL_VALIDATED_FIELD: &str =
  ".form-control[required]";
pub const SEL_LOADING_FORM: &str =
  "form[data-loading]";
pub const SEL_EMPTY_DAY: &str =
  ".calendar-day.empty";

/// Read-only view of an event target and its ancestors.
pub trait DomTarget {
  /// Value of `name` on the nearest ancestor-or-self that carries it.
  fn closest_attr(
    &self,
    name: &str
  ) -> Option<String>;

  /// `id` of the nearest ancestor-or-self matching `selector`.
  fn closest_id(
    &self,
    selector: &str
  ) -> Option<String>;

  fn within(&self, selector: &str) -> bool;

  /// Whether the target itself matches `selector`.
  fn matches(&self, selector: &str)
  -> bool;

  fn attr(&self, name: &str)
  -> Option<String>;

  fn value(&self) -> Option<String>;

  fn checked(&self) -> Option<bool>;
}

pub fn resolve_click<T>(
  target: &T
) -> Option<Action>
where
  T: DomTarget + ?Sized
{
  // Click on the overlay itself, not on the dialog content.
  if target.matches(SEL_MODAL) {
    return target
      .attr("id")
      .map(Action::CloseModal);
  }

  if let Some(id) =
    target.closest_attr(ATTR_MODAL_TARGET)
  {
    return Some(Action::OpenModal(id));
  }

  if target.within(SEL_MODAL_CLOSE) {
    return target
      .closest_id(SEL_MODAL)
      .map(Action::CloseModal);
  }

  if let Some(tag) =
    target.closest_attr(ATTR_FILTER)
  {
    return Some(Action::SetFilter(
      TaskFilter::from_tag(&tag)
    ));
  }

  if let Some(selector) =
    target.closest_attr(ATTR_COPY)
  {
    return Some(Action::CopyRequested {
      selector
    });
  }

  if target
    .closest_attr(ATTR_ADD_ROW)
    .is_some()
  {
    return Some(Action::AddTaskRow);
  }

  if let Some(raw) =
    target.closest_attr(ATTR_REMOVE_ROW)
  {
    return Uuid::parse_str(raw.trim())
      .ok()
      .map(Action::RemoveTaskRow);
  }

  if let Some(raw) =
    target.closest_attr(ATTR_ALERT_CLOSE)
  {
    return raw
      .trim()
      .parse::<u64>()
      .ok()
      .map(Action::DismissAlert);
  }

  if let Some(message) =
    target.closest_attr(ATTR_NOTIFY)
  {
    let kind = target
      .closest_attr(ATTR_NOTIFY_KIND)
      .map(|raw| AlertKind::from_key(&raw))
      .unwrap_or_default();
    return Some(Action::Notify {
      kind,
      message
    });
  }

  if !target.within(SEL_EMPTY_DAY)
    && let Some(raw) =
      target.closest_attr(ATTR_DATE)
  {
    return parse_date_key(&raw)
      .map(Action::DayClicked);
  }

  None
}

/// `change` events: task checkboxes, editor selects and auto-submit
/// controls.
pub fn resolve_change<T>(
  target: &T
) -> Vec<Action>
where
  T: DomTarget + ?Sized
{
  let mut actions = Vec::new();

  if target.matches(SEL_TASK_CHECKBOX)
    && let Some(id) = target.value()
  {
    actions.push(Action::ToggleTask {
      id:      TaskId::new(id),
      checked: target
        .checked()
        .unwrap_or(false)
    });
  }

  if let Some(edit) = row_edit(target) {
    actions.push(edit);
  }

  if target.attr(ATTR_AUTO_SUBMIT).is_some()
    && let Some(form_id) =
      target.closest_id("form")
  {
    actions
      .push(Action::AutoSubmit { form_id });
  }

  actions
}

/// `input` events: editor rows and clearing inline errors.
pub fn resolve_input<T>(
  target: &T
) -> Vec<Action>
where
  T: DomTarget + ?Sized
{
  let mut actions = Vec::new();
  if let Some(edit) = row_edit(target) {
    actions.push(edit);
  }
  if target.matches(SEL_VALIDATED_FIELD)
    && let Some(field) = field_key(target)
  {
    actions
      .push(Action::FieldEdited { field });
  }
  actions
}

/// `focusout` events on required fields.
pub fn resolve_focus_out<T>(
  target: &T
) -> Option<Action>
where
  T: DomTarget + ?Sized
{
  if !target.matches(SEL_VALIDATED_FIELD)
  {
    return None;
  }
  let field = field_key(target)?;
  let kind = target
    .attr("type")
    .map(|raw| {
      FieldKind::from_input_type(&raw)
    })
    .unwrap_or(FieldKind::Text);
  Some(Action::FieldBlurred {
    field,
    value: target.value().unwrap_or_default(),
    spec: FieldSpec::required(kind)
  })
}

pub fn resolve_submit<T>(
  target: &T
) -> Option<Action>
where
  T: DomTarget + ?Sized
{
  target
    .matches(SEL_LOADING_FORM)
    .then_some(Action::FormSubmitted)
}

pub fn resolve_key(
  key: &str,
  ctrl: bool
) -> Option<Action> {
  if key == "Escape" {
    return Some(Action::EscapePressed);
  }
  if ctrl && key.eq_ignore_ascii_case("s")
  {
    return Some(Action::SaveShortcut);
  }
  None
}

fn row_edit<T>(
  target: &T
) -> Option<Action>
where
  T: DomTarget + ?Sized
{
  let field = RowField::from_key(
    &target.attr(ATTR_ROW_FIELD)?
  )?;
  let key = Uuid::parse_str(
    target
      .closest_attr(ATTR_ROW_KEY)?
      .trim()
  )
  .ok()?;
  Some(Action::EditTaskRow {
    key,
    field,
    value: target.value().unwrap_or_default()
  })
}

fn field_key<T>(
  target: &T
) -> Option<String>
where
  T: DomTarget + ?Sized
{
  target
    .attr("id")
    .or_else(|| target.attr("name"))
    .filter(|key| !key.is_empty())
}
