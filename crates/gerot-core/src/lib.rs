//! State and behaviour behind the GeRot web interface.
//!
//! Everything here is plain data plus pure transitions; the browser
//! crate owns the DOM and runs the [`dispatch::Effect`]s returned by
//! [`dispatch::UiState::dispatch`].

pub mod alert;
pub mod calendar;
pub mod config;
pub mod delegate;
pub mod dispatch;
pub mod editor;
pub mod filter;
pub mod format;
pub mod modal;
pub mod progress;
pub mod sidebar;
pub mod task;
pub mod validate;

pub use dispatch::{
  Action,
  CompletionOutcome,
  Effect,
  UiState
};
