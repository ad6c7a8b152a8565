use gerot_core::alert::Alert;
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct AlertStackProps {
  pub alerts: Vec<Alert>
}

#[function_component(AlertStack)]
pub fn alert_stack(
  props: &AlertStackProps
) -> Html {
  html! {
      <div class="alerts-container">
          {
              for props.alerts.iter().map(|alert| {
                  let kind_class = format!("alert-{}", alert.kind.as_key());
                  let icon = format!("fas fa-{}", alert.kind.icon());
                  html! {
                      <div
                          key={alert.id.to_string()}
                          class={classes!("alert", kind_class, "fade-in")}
                          style={alert.is_fading().then_some("opacity: 0")}
                          role="alert"
                      >
                          <i class={icon}></i>
                          <span class="alert-message">{ alert.message.clone() }</span>
                          <button
                              type="button"
                              class="alert-close"
                              data-alert-close={alert.id.to_string()}
                              aria-label="Fechar"
                          >
                              { "×" }
                          </button>
                      </div>
                  }
              })
          }
      </div>
  }
}
