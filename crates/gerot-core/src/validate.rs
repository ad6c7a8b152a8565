use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_RE: LazyLock<Option<Regex>> =
  LazyLock::new(|| {
    match Regex::new(
      r"^[^\s@]+@[^\s@]+\.[^\s@]+$"
    ) {
      | Ok(re) => Some(re),
      | Err(error) => {
        tracing::error!(%error, "email pattern failed to compile");
        None
      }
    }
  });

pub const DEFAULT_MIN_PASSWORD_LEN:
  usize = 6;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum FieldKind {
  Text,
  Email,
  Password,
  Number,
  Date,
  Time
}

impl FieldKind {
  /// Maps an `<input type>` attribute. Anything unknown is text.
  pub fn from_input_type(
    raw: &str
  ) -> Self {
    match raw
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "email" => Self::Email,
      | "password" => Self::Password,
      | "number" => Self::Number,
      | "date" => Self::Date,
      | "time" => Self::Time,
      | _ => Self::Text
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct FieldSpec {
  pub kind:     FieldKind,
  pub required: bool
}

impl FieldSpec {
  pub fn required(
    kind: FieldKind
  ) -> Self {
    Self {
      kind,
      required: true
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum FieldError {
  #[error("Este campo é obrigatório")]
  Required,
  #[error("Email inválido")]
  InvalidEmail,
  #[error(
    "Senha deve ter pelo menos {min} \
     caracteres"
  )]
  PasswordTooShort { min: usize }
}

pub fn is_valid_email(raw: &str) -> bool {
  EMAIL_RE
    .as_ref()
    .is_some_and(|re| re.is_match(raw))
}

/// Runs the rules in order (required, email, password) and returns
/// the first failure.
pub fn validate_field(
  raw: &str,
  spec: FieldSpec,
  min_password_len: usize
) -> Option<FieldError> {
  let value = raw.trim();

  if value.is_empty() {
    return spec
      .required
      .then_some(FieldError::Required);
  }

  match spec.kind {
    | FieldKind::Email
      if !is_valid_email(value) =>
    {
      Some(FieldError::InvalidEmail)
    }
    | FieldKind::Password
      if value.chars().count()
        < min_password_len =>
    {
      Some(
        FieldError::PasswordTooShort {
          min: min_password_len
        }
      )
    }
    | _ => None
  }
}

/// Inline errors keyed by field name. At most one per field.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct FieldErrors {
  errors: BTreeMap<String, FieldError>
}

impl FieldErrors {
  pub fn get(
    &self,
    field: &str
  ) -> Option<&FieldError> {
    self.errors.get(field)
  }

  pub fn len(&self) -> usize {
    self.errors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.errors.is_empty()
  }

  pub fn on_blur(
    &mut self,
    field: &str,
    value: &str,
    spec: FieldSpec,
    min_password_len: usize
  ) -> Option<&FieldError> {
    self.errors.remove(field);
    let error = validate_field(
      value,
      spec,
      min_password_len
    )?;
    tracing::debug!(field, %error, "field failed validation");
    self
      .errors
      .insert(field.to_string(), error);
    self.errors.get(field)
  }

  /// Typing clears the error without re-validating.
  pub fn on_input(
    &mut self,
    field: &str
  ) -> bool {
    self.errors.remove(field).is_some()
  }
}
