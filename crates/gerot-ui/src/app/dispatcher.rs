use std::cell::RefCell;
use std::rc::Rc;

use gerot_core::alert::AlertKind;
use gerot_core::calendar::DayDetailHandler;
use gerot_core::{
  Action,
  CompletionOutcome,
  Effect,
  UiState
};
use gloo::timers::future::TimeoutFuture;
use yew::functional::UseForceUpdateHandle;

use super::dom;
use crate::api::post_completion;

/// Cloneable handle to the page state. Actions go in, effects are
/// performed here against the DOM.
#[derive(Clone)]
pub struct Dispatcher {
  state:      Rc<RefCell<UiState>>,
  rerender:   UseForceUpdateHandle,
  day_detail: Rc<dyn DayDetailHandler>
}

impl PartialEq for Dispatcher {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.state, &other.state)
  }
}

impl Dispatcher {
  pub fn new(
    state: Rc<RefCell<UiState>>,
    rerender: UseForceUpdateHandle,
    day_detail: Rc<dyn DayDetailHandler>
  ) -> Self {
    Self {
      state,
      rerender,
      day_detail
    }
  }

  /// Reads the current state. Must not be called while an action is
  /// being dispatched.
  pub fn with_state<R>(
    &self,
    read: impl FnOnce(&UiState) -> R
  ) -> R {
    read(&self.state.borrow())
  }

  pub fn send(&self, action: Action) {
    let name = action.name();
    let effects = match self
      .state
      .try_borrow_mut()
    {
      | Ok(mut state) => {
        state.dispatch(action)
      }
      | Err(_) => {
        tracing::warn!(
          action = name,
          "state busy; dropping action"
        );
        return;
      }
    };
    self.rerender.force_update();
    self.run(effects);
  }

  pub fn send_all(
    &self,
    actions: Vec<Action>
  ) {
    for action in actions {
      self.send(action);
    }
  }

  pub fn run(&self, effects: Vec<Effect>) {
    for effect in effects {
      self.perform(effect);
    }
  }

  fn perform(&self, effect: Effect) {
    match effect {
      | Effect::After {
        delay_ms,
        action
      } => {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            TimeoutFuture::new(delay_ms)
              .await;
            this.send(action);
          }
        );
      }
      | Effect::PostCompletion(request) => {
        let url = self.with_state(|state| {
          state
            .config
            .endpoints
            .url_for(&request)
        });
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            let outcome = match post_completion(
              &url, &request
            )
            .await
            {
              | Ok(response) => {
                CompletionOutcome::Answered(
                  response
                )
              }
              | Err(error) => {
                CompletionOutcome::Failed(
                  error.to_string()
                )
              }
            };
            this.send(
              Action::CompletionSettled {
                request,
                outcome
              }
            );
          }
        );
      }
      | Effect::SetScrollLock(locked) => {
        dom::set_scroll_lock(locked);
      }
      | Effect::FocusFirstField {
        modal_id
      } => dom::focus_first_field(&modal_id),
      | Effect::FocusElement {
        element_id
      } => {
        // The element only exists after the next render.
        wasm_bindgen_futures::spawn_local(
          async move {
            TimeoutFuture::new(0).await;
            dom::focus_element(&element_id);
          }
        );
      }
      | Effect::CopyToClipboard {
        selector
      } => {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            let ok =
              dom::copy_to_clipboard(&selector)
                .await;
            this.send(Action::CopyFinished {
              ok
            });
          }
        );
      }
      | Effect::SubmitForm {
        form_id
      } => {
        if dom::submit_form(&form_id)
          == Some(true)
        {
          self.show_loading();
        }
      }
      | Effect::ClickSave => dom::click_save(),
      | Effect::ShowDay(date) => {
        self.day_detail.show_day(date);
      }
    }
  }

  pub fn open_modal(&self, id: &str) {
    self.send(Action::OpenModal(
      id.to_string()
    ));
  }

  pub fn close_modal(&self, id: &str) {
    self.send(Action::CloseModal(
      id.to_string()
    ));
  }

  pub fn notify(
    &self,
    kind: AlertKind,
    message: impl Into<String>
  ) {
    self.send(Action::Notify {
      kind,
      message: message.into()
    });
  }

  pub fn show_loading(&self) {
    self.send(Action::SetLoading(true));
  }

  pub fn hide_loading(&self) {
    self.send(Action::SetLoading(false));
  }
}
