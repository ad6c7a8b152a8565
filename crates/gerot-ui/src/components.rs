mod alert_stack;
mod calendar_month;
mod inline_error;
mod loading_overlay;
mod modal;
mod profile_form;
mod sidebar;
mod task_checklist;
mod task_fields_editor;

pub use alert_stack::AlertStack;
pub use calendar_month::CalendarMonth;
pub use inline_error::InlineError;
pub use loading_overlay::LoadingOverlay;
pub use modal::Modal;
pub use profile_form::ProfileForm;
pub use sidebar::Sidebar;
pub use task_checklist::TaskChecklist;
pub use task_fields_editor::TaskFieldsEditor;
