use yew::{
  AttrValue,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
  pub id:       AttrValue,
  pub title:    AttrValue,
  pub open:     bool,
  #[prop_or_default]
  pub children: Html
}

/// Overlay plus dialog. Clicks on the overlay itself close it, clicks
/// inside `.modal-content` do not.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
  html! {
      <div
          id={props.id.clone()}
          class={classes!("modal", props.open.then_some("active"))}
          role="dialog"
          aria-hidden={(!props.open).to_string()}
      >
          <div class="modal-content">
              <div class="modal-header">
                  <h3>{ props.title.clone() }</h3>
                  <button type="button" class="modal-close" aria-label="Fechar">
                      <i class="fas fa-times"></i>
                  </button>
              </div>
              <div class="modal-body">
                  { props.children.clone() }
              </div>
          </div>
      </div>
  }
}
