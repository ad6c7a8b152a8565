//! Thin wrappers over `web_sys`. Every lookup is optional and a missing
//! element turns the operation into a no-op.

use gerot_core::delegate::{
  ATTR_LOADING,
  DomTarget
};
use wasm_bindgen::{
  JsCast,
  JsValue
};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
  Document,
  Element,
  Event,
  HtmlElement,
  HtmlFormElement,
  HtmlInputElement,
  HtmlSelectElement,
  HtmlTextAreaElement
};

pub const SIDEBAR_ID: &str = "sidebar";
pub const SIDEBAR_TOGGLE_ID: &str =
  "sidebar-toggle";
const SAVE_SELECTOR: &str =
  ".btn-save, [type=\"submit\"]";
const FOCUSABLE_SELECTOR: &str =
  "input, textarea, select";

/// DOM element seen through the delegation contract.
pub struct ElementTarget(pub Element);

impl ElementTarget {
  pub fn from_event(
    event: &Event
  ) -> Option<Self> {
    event
      .target()
      .and_then(|target| {
        target.dyn_into::<Element>().ok()
      })
      .map(Self)
  }

  fn closest(
    &self,
    selector: &str
  ) -> Option<Element> {
    self.0.closest(selector).ok().flatten()
  }
}

impl DomTarget for ElementTarget {
  fn closest_attr(
    &self,
    name: &str
  ) -> Option<String> {
    self
      .closest(&format!("[{name}]"))
      .and_then(|element| {
        element.get_attribute(name)
      })
  }

  fn closest_id(
    &self,
    selector: &str
  ) -> Option<String> {
    self
      .closest(selector)
      .map(|element| element.id())
      .filter(|id| !id.is_empty())
  }

  fn within(&self, selector: &str) -> bool {
    self.closest(selector).is_some()
  }

  fn matches(
    &self,
    selector: &str
  ) -> bool {
    self.0.matches(selector).unwrap_or(false)
  }

  fn attr(
    &self,
    name: &str
  ) -> Option<String> {
    self.0.get_attribute(name)
  }

  fn value(&self) -> Option<String> {
    element_value(&self.0)
  }

  fn checked(&self) -> Option<bool> {
    self
      .0
      .dyn_ref::<HtmlInputElement>()
      .map(HtmlInputElement::checked)
  }
}

fn element_value(
  element: &Element
) -> Option<String> {
  if let Some(input) =
    element.dyn_ref::<HtmlInputElement>()
  {
    return Some(input.value());
  }
  if let Some(select) =
    element.dyn_ref::<HtmlSelectElement>()
  {
    return Some(select.value());
  }
  element
    .dyn_ref::<HtmlTextAreaElement>()
    .map(HtmlTextAreaElement::value)
}

fn document() -> Option<Document> {
  web_sys::window()
    .and_then(|window| window.document())
}

fn html_element_by_id(
  id: &str
) -> Option<HtmlElement> {
  document()?
    .get_element_by_id(id)?
    .dyn_into::<HtmlElement>()
    .ok()
}

pub fn viewport_width() -> u32 {
  web_sys::window()
    .and_then(|window| {
      window.inner_width().ok()
    })
    .and_then(|width| width.as_f64())
    .map(|width| width.max(0.0) as u32)
    .unwrap_or(0)
}

/// Whether the event started inside the sidebar or on its toggle.
pub fn event_within_sidebar(
  event: &Event
) -> bool {
  ElementTarget::from_event(event)
    .is_some_and(|target| {
      target.within(&format!(
        "#{SIDEBAR_ID}, #{SIDEBAR_TOGGLE_ID}"
      ))
    })
}

pub fn set_scroll_lock(locked: bool) {
  let Some(body) =
    document().and_then(|doc| doc.body())
  else {
    return;
  };
  let value =
    if locked { "hidden" } else { "" };
  if let Err(error) = body
    .style()
    .set_property("overflow", value)
  {
    tracing::warn!(error = ?error, "failed to set body overflow");
  }
}

pub fn focus_first_field(
  modal_id: &str
) {
  let field = document()
    .and_then(|doc| {
      doc.get_element_by_id(modal_id)
    })
    .and_then(|modal| {
      modal
        .query_selector(FOCUSABLE_SELECTOR)
        .ok()
        .flatten()
    })
    .and_then(|element| {
      element.dyn_into::<HtmlElement>().ok()
    });
  if let Some(field) = field
    && let Err(error) = field.focus()
  {
    tracing::debug!(modal = modal_id, error = ?error, "modal field focus failed");
  }
}

pub fn focus_element(element_id: &str) {
  if let Some(element) =
    html_element_by_id(element_id)
    && let Err(error) = element.focus()
  {
    tracing::debug!(element = element_id, error = ?error, "element focus failed");
  }
}

pub fn click_save() {
  let button = document()
    .and_then(|doc| {
      doc
        .query_selector(SAVE_SELECTOR)
        .ok()
        .flatten()
    })
    .and_then(|element| {
      element.dyn_into::<HtmlElement>().ok()
    });
  match button {
    | Some(button) => button.click(),
    | None => tracing::debug!(
      "no save control on this page"
    )
  }
}

/// Submits the form natively. Returns whether the form asked for the
/// loading overlay, or `None` when there is no such form.
pub fn submit_form(
  form_id: &str
) -> Option<bool> {
  let form = document()?
    .get_element_by_id(form_id)?
    .dyn_into::<HtmlFormElement>()
    .ok()?;
  let wants_overlay =
    form.has_attribute(ATTR_LOADING);
  if let Err(error) = form.submit() {
    tracing::warn!(form = form_id, error = ?error, "form submit failed");
    return Some(false);
  }
  Some(wants_overlay)
}

/// Copies the value (form controls) or text content of the first
/// element matching `selector`.
pub async fn copy_to_clipboard(
  selector: &str
) -> bool {
  let Some(element) =
    document().and_then(|doc| {
      doc.query_selector(selector).ok().flatten()
    })
  else {
    tracing::warn!(selector, "copy source not found");
    return false;
  };
  let text = element_value(&element)
    .or_else(|| element.text_content())
    .unwrap_or_default();

  match write_clipboard_text(&text).await {
    | Ok(()) => true,
    | Err(error) => {
      tracing::warn!(error = ?error, "clipboard write failed");
      false
    }
  }
}

async fn write_clipboard_text(
  text: &str
) -> Result<(), JsValue> {
  let window = web_sys::window()
    .ok_or_else(|| {
      JsValue::from_str("no window")
    })?;
  let navigator = js_sys::Reflect::get(
    &window,
    &JsValue::from_str("navigator")
  )?;
  let clipboard = js_sys::Reflect::get(
    &navigator,
    &JsValue::from_str("clipboard")
  )?;
  let write_text = js_sys::Reflect::get(
    &clipboard,
    &JsValue::from_str("writeText")
  )?
  .dyn_into::<js_sys::Function>()?;
  let promise = write_text
    .call1(&clipboard, &JsValue::from_str(text))?
    .dyn_into::<js_sys::Promise>()?;
  JsFuture::from(promise).await?;
  Ok(())
}
