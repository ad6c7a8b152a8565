use gerot_core::validate::FieldError;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct InlineErrorProps {
  pub error: Option<FieldError>
}

#[function_component(InlineError)]
pub fn inline_error(
  props: &InlineErrorProps
) -> Html {
  match &props.error {
    | Some(error) => html! {
        <div class="field-error">{ error.to_string() }</div>
    },
    | None => html! {}
  }
}
