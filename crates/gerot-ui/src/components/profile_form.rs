use gerot_core::validate::FieldErrors;
use yew::{
  AttrValue,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::InlineError;

#[derive(Properties, PartialEq)]
pub struct ProfileFormProps {
  pub errors: FieldErrors,
  pub action: AttrValue
}

struct ProfileField {
  name:     &'static str,
  label:    &'static str,
  kind:     &'static str,
  required: bool
}

const PROFILE_FIELDS: [ProfileField; 5] = [
  ProfileField {
    name:     "username",
    label:    "Nome de usuário",
    kind:     "text",
    required: true
  },
  ProfileField {
    name:     "email",
    label:    "Email",
    kind:     "email",
    required: true
  },
  ProfileField {
    name:     "current_password",
    label:    "Senha atual",
    kind:     "password",
    required: true
  },
  ProfileField {
    name:     "new_password",
    label:    "Nova senha",
    kind:     "password",
    required: false
  },
  ProfileField {
    name:     "confirm_password",
    label:    "Confirmar nova senha",
    kind:     "password",
    required: false
  }
];

#[function_component(ProfileForm)]
pub fn profile_form(
  props: &ProfileFormProps
) -> Html {
  html! {
      <section class="profile-page">
          <div class="page-header">
              <h2>{ "Perfil" }</h2>
          </div>
          <form
              id="form-perfil"
              class="profile-form"
              method="post"
              action={props.action.clone()}
              data-loading=""
          >
              {
                  for PROFILE_FIELDS.iter().map(|field| {
                      let error = props.errors.get(field.name).cloned();
                      html! {
                          <div class="form-group">
                              <label for={field.name}>{ field.label }</label>
                              <input
                                  type={field.kind}
                                  id={field.name}
                                  name={field.name}
                                  class={classes!("form-control", error.is_some().then_some("error"))}
                                  required={field.required}
                              />
                              <InlineError error={error} />
                          </div>
                      }
                  })
              }
              <button type="submit" class="btn btn-primary btn-save">
                  { "Salvar alterações" }
              </button>
          </form>
      </section>
  }
}
