use gerot_shared::PageBootstrap;

pub const BOOTSTRAP_ELEMENT_ID: &str =
  "gerot-bootstrap";

/// Why the page started without server data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapIssue {
  Missing,
  Malformed(String)
}

/// Reads the JSON the server embedded in
/// `<script id="gerot-bootstrap" type="application/json">`.
pub fn load_bootstrap()
-> (PageBootstrap, Option<BootstrapIssue>) {
  let raw = web_sys::window()
    .and_then(|window| window.document())
    .and_then(|document| {
      document.get_element_by_id(
        BOOTSTRAP_ELEMENT_ID
      )
    })
    .and_then(|element| {
      element.text_content()
    });

  let Some(raw) = raw else {
    tracing::warn!(
      "no page bootstrap found; starting empty"
    );
    return (
      PageBootstrap::default(),
      Some(BootstrapIssue::Missing)
    );
  };

  match serde_json::from_str::<PageBootstrap>(
    &raw
  ) {
    | Ok(bootstrap) => {
      tracing::info!(
        tasks = bootstrap.tasks.len(),
        alerts = bootstrap.alerts.len(),
        "loaded page bootstrap"
      );
      (bootstrap, None)
    }
    | Err(error) => {
      tracing::warn!(
        error = %error,
        "malformed page bootstrap; starting empty"
      );
      (
        PageBootstrap::default(),
        Some(BootstrapIssue::Malformed(
          error.to_string()
        ))
      )
    }
  }
}
