use std::rc::Rc;

use gerot_core::UiState;
use gerot_core::alert::AlertKind;
use gerot_core::calendar::{
  LogDayDetail,
  today_in_timezone
};
use gerot_core::config::UiConfig;
use gerot_core::delegate::{
  resolve_change,
  resolve_click,
  resolve_focus_out,
  resolve_input,
  resolve_key,
  resolve_submit
};
use gerot_core::dispatch::Action;
use gerot_core::modal::ModalRoute;
use gloo::console::log;
use gloo::events::{
  EventListener,
  EventListenerOptions
};
use wasm_bindgen::JsCast;
use web_sys::{
  Event,
  FocusEvent,
  InputEvent,
  KeyboardEvent,
  MouseEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  classes,
  function_component,
  html,
  use_effect_with,
  use_force_update,
  use_memo,
  use_mut_ref
};
use yew_router::prelude::{
  HashRouter,
  Link,
  Routable,
  use_navigator,
  use_route
};

use crate::components::{
  AlertStack,
  CalendarMonth,
  LoadingOverlay,
  Modal,
  ProfileForm,
  Sidebar,
  TaskChecklist,
  TaskFieldsEditor
};

mod bootstrap;
mod dispatcher;
mod dom;

use bootstrap::{
  BootstrapIssue,
  load_bootstrap
};
pub use dispatcher::Dispatcher;
use dom::ElementTarget;

pub const ROUTINE_MODAL_ID: &str =
  "nova-rotina";

const UI_CONFIG_TOML: &str =
  include_str!("../assets/gerot.toml");

const MSG_BOOTSTRAP_FAILED: &str =
  "Não foi possível carregar os dados da página";

#[derive(
  Clone, Debug, PartialEq, Eq, Routable,
)]
pub enum Route {
  #[at("/")]
  Checklist,
  #[at("/calendario")]
  Calendar,
  #[at("/rotinas/nova")]
  NewRoutine,
  #[at("/perfil")]
  Profile,
  #[not_found]
  #[at("/404")]
  NotFound
}

impl Route {
  fn title(&self) -> &'static str {
    match self {
      | Self::Checklist
      | Self::NewRoutine => "Hoje",
      | Self::Calendar => "Calendário",
      | Self::Profile => "Perfil",
      | Self::NotFound => {
        "Página não encontrada"
      }
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  html! {
      <HashRouter>
          <Shell />
      </HashRouter>
  }
}

#[function_component(Shell)]
fn shell() -> Html {
  let route = use_route::<Route>()
    .unwrap_or(Route::NotFound);
  let navigator = use_navigator();
  let routine_route =
    use_mut_ref(ModalRoute::default);
  let config = use_memo((), |_| {
    UiConfig::load_embedded(
      UI_CONFIG_TOML
    )
  });
  let boot =
    use_memo((), |_| load_bootstrap());
  let state = {
    let config = (*config).clone();
    let bootstrap = boot.0.clone();
    use_mut_ref(move || {
      let today = today_in_timezone(
        config.resolve_timezone()
      );
      UiState::new(
        config, bootstrap, today
      )
    })
  };
  let rerender = use_force_update();
  let dispatcher = Dispatcher::new(
    state,
    rerender,
    Rc::new(LogDayDetail)
  );

  {
    let dispatcher = dispatcher.clone();
    let issue = boot.1.clone();
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and page \
         state initialized"
      );
      let startup = dispatcher
        .with_state(UiState::startup_effects);
      dispatcher.run(startup);

      if let Some(BootstrapIssue::Malformed(
        reason
      )) = issue
      {
        ui_debug(
          "bootstrap.malformed",
          &reason
        );
        dispatcher.notify(
          AlertKind::Warning,
          MSG_BOOTSTRAP_FAILED
        );
      }

      let listeners = web_sys::window()
        .map(|window| {
          window_listeners(
            &window,
            &dispatcher
          )
        });
      move || drop(listeners)
    });
  }

  let armed = dispatcher.with_state(
    |state| {
      state
        .sidebar
        .outside_click_armed()
    }
  );
  {
    let dispatcher = dispatcher.clone();
    use_effect_with(armed, move |armed| {
      let listener = (*armed)
        .then(|| {
          web_sys::window()
            .and_then(|window| {
              window.document()
            })
        })
        .flatten()
        .map(|document| {
          EventListener::new(
            &document,
            "click",
            move |event| {
              dispatcher.send(
                Action::DocumentClicked {
                  inside_sidebar:
                    dom::event_within_sidebar(
                      event
                    )
                }
              );
            }
          )
        });
      tracing::debug!(
        armed = *armed,
        "sidebar outside-click listener"
      );
      move || drop(listener)
    });
  }

  {
    let dispatcher = dispatcher.clone();
    let config = config.clone();
    use_effect_with(
      route.clone(),
      move |route| {
        tracing::debug!(
          route = %route.to_path(),
          "route changed"
        );
        if *route == Route::Calendar {
          dispatcher.send(
            Action::RefreshCalendar(
              today_in_timezone(
                config.resolve_timezone()
              )
            )
          );
        }
        let routine = (*route
          == Route::NewRoutine)
          .then(|| {
            dispatcher
              .open_modal(ROUTINE_MODAL_ID);
            dispatcher.clone()
          });
        move || {
          if let Some(dispatcher) = routine
          {
            dispatcher.close_modal(
              ROUTINE_MODAL_ID
            );
          }
        }
      }
    );
  }

  let routine_open = dispatcher.with_state(
    |state| {
      state
        .modals
        .is_open(ROUTINE_MODAL_ID)
    }
  );
  {
    let routine_route =
      routine_route.clone();
    use_effect_with(
      (route.clone(), routine_open),
      move |(route, open)| {
        let leave = routine_route
          .borrow_mut()
          .observe(
            *route == Route::NewRoutine,
            *open
          );
        if leave
          && let Some(navigator) = navigator
        {
          ui_debug(
            "route.leave",
            "routine modal closed"
          );
          navigator.push(&Route::Checklist);
        }
        || ()
      }
    );
  }

  let onclick = {
    let dispatcher = dispatcher.clone();
    Callback::from(
      move |event: MouseEvent| {
        let Some(target) =
          ElementTarget::from_event(&event)
        else {
          return;
        };
        if let Some(action) =
          resolve_click(&target)
        {
          ui_debug("click", action.name());
          dispatcher.send(action);
        }
      }
    )
  };

  let onchange = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |event: Event| {
      if let Some(target) =
        ElementTarget::from_event(&event)
      {
        dispatcher
          .send_all(resolve_change(&target));
      }
    })
  };

  let oninput = {
    let dispatcher = dispatcher.clone();
    Callback::from(
      move |event: InputEvent| {
        if let Some(target) =
          ElementTarget::from_event(&event)
        {
          dispatcher.send_all(
            resolve_input(&target)
          );
        }
      }
    )
  };

  let onfocusout = {
    let dispatcher = dispatcher.clone();
    Callback::from(
      move |event: FocusEvent| {
        if let Some(action) =
          ElementTarget::from_event(&event)
            .and_then(|target| {
              resolve_focus_out(&target)
            })
        {
          dispatcher.send(action);
        }
      }
    )
  };

  let onsubmit = {
    let dispatcher = dispatcher.clone();
    Callback::from(
      move |event: SubmitEvent| {
        if let Some(action) =
          ElementTarget::from_event(&event)
            .and_then(|target| {
              resolve_submit(&target)
            })
        {
          ui_debug(
            "form.submit",
            "showing loading overlay"
          );
          dispatcher.send(action);
        }
      }
    )
  };

  let on_toggle_sidebar = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |_: MouseEvent| {
      dispatcher.send(
        Action::ToggleSidebar {
          viewport_width:
            dom::viewport_width()
        }
      );
    })
  };

  let snapshot = dispatcher
    .with_state(|state| state.clone());
  let sidebar_active =
    snapshot.sidebar.is_active();

  let page = match &route {
    | Route::Checklist
    | Route::NewRoutine => {
      let day = snapshot
        .calendar
        .today()
        .map(|day| day.key())
        .unwrap_or_default();
      html! {
          <TaskChecklist
              board={snapshot.board.clone()}
              day={day}
              share_link={current_href()}
          />
      }
    }
    | Route::Calendar => html! {
        <CalendarMonth grid={snapshot.calendar.clone()} />
    },
    | Route::Profile => html! {
        <ProfileForm
            errors={snapshot.fields.clone()}
            action={snapshot.config.forms.profile_action.clone()}
        />
    },
    | Route::NotFound => html! {
        <section class="not-found">
            <h2>{ "Página não encontrada" }</h2>
            <Link<Route> to={Route::Checklist} classes={classes!("btn", "btn-primary")}>
                { "Voltar ao checklist" }
            </Link<Route>>
        </section>
    }
  };

  html! {
      <div
          class="app-shell"
          {onclick}
          {onchange}
          {oninput}
          {onfocusout}
          {onsubmit}
      >
          <Sidebar active={sidebar_active} route={route.clone()} />
          <main
              id="main-content"
              class={classes!("main-content", sidebar_active.then_some("active"))}
          >
              <header class="topbar">
                  <button
                      id={dom::SIDEBAR_TOGGLE_ID}
                      type="button"
                      class="sidebar-toggle"
                      aria-label="Menu"
                      onclick={on_toggle_sidebar}
                  >
                      <i class="fas fa-bars"></i>
                  </button>
                  <h1 class="topbar-title">{ route.title() }</h1>
              </header>
              <AlertStack alerts={snapshot.alerts.alerts().to_vec()} />
              { page }
          </main>
          <Modal
              id={ROUTINE_MODAL_ID}
              title="Nova rotina"
              open={routine_open}
          >
              <TaskFieldsEditor
                  rows={snapshot.editor.rows().to_vec()}
                  errors={snapshot.fields.clone()}
                  action={snapshot.config.forms.routine_action.clone()}
              />
          </Modal>
          <LoadingOverlay active={snapshot.loading} />
      </div>
  }
}

/// Resize, keyboard shortcuts and page unload. Dropping the returned
/// listeners unregisters them.
fn window_listeners(
  window: &web_sys::Window,
  dispatcher: &Dispatcher
) -> Vec<EventListener> {
  let on_resize = {
    let dispatcher = dispatcher.clone();
    EventListener::new(
      window,
      "resize",
      move |_| {
        dispatcher.send(
          Action::ViewportResized {
            width: dom::viewport_width()
          }
        );
      }
    )
  };

  let on_keydown = {
    let dispatcher = dispatcher.clone();
    EventListener::new_with_options(
      window,
      "keydown",
      EventListenerOptions::enable_prevent_default(),
      move |event| {
        let Some(event) =
          event.dyn_ref::<KeyboardEvent>()
        else {
          return;
        };
        let Some(action) = resolve_key(
          &event.key(),
          event.ctrl_key()
        ) else {
          return;
        };
        if action == Action::SaveShortcut {
          event.prevent_default();
        }
        dispatcher.send(action);
      }
    )
  };

  let on_unload = {
    let dispatcher = dispatcher.clone();
    EventListener::new(
      window,
      "beforeunload",
      move |_| dispatcher.hide_loading()
    )
  };

  vec![on_resize, on_keydown, on_unload]
}

fn current_href() -> String {
  web_sys::window()
    .and_then(|window| {
      window.location().href().ok()
    })
    .unwrap_or_default()
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
