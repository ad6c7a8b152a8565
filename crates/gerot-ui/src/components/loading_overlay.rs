use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayProps {
  pub active: bool
}

#[function_component(LoadingOverlay)]
pub fn loading_overlay(
  props: &LoadingOverlayProps
) -> Html {
  html! {
      <div
          id="loading-overlay"
          class={classes!("loading-overlay", props.active.then_some("active"))}
      >
          <div class="spinner"></div>
      </div>
  }
}
