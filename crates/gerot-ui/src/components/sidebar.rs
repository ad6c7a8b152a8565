use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
  pub active: bool,
  pub route:  Route
}

#[function_component(Sidebar)]
pub fn sidebar(
  props: &SidebarProps
) -> Html {
  let item = |route: Route,
              icon: &str,
              label: &str| {
    let current = props.route == route;
    html! {
        <li class={classes!("nav-item", current.then_some("active"))}>
            <Link<Route> to={route} classes={classes!("nav-link")}>
                <i class={format!("fas fa-{icon}")}></i>
                <span>{ label.to_string() }</span>
            </Link<Route>>
        </li>
    }
  };

  html! {
      <aside
          id="sidebar"
          class={classes!("sidebar", props.active.then_some("active"))}
      >
          <div class="sidebar-brand">{ "GeRot" }</div>
          <ul class="nav">
              { item(Route::Checklist, "check-square", "Checklist do dia") }
              { item(Route::Calendar, "calendar-alt", "Calendário") }
              { item(Route::NewRoutine, "plus-circle", "Nova rotina") }
              { item(Route::Profile, "user", "Perfil") }
          </ul>
      </aside>
  }
}
