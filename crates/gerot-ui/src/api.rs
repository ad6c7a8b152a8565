use gerot_core::task::CompletionRequest;
use gerot_shared::{
  CompletionResponse,
  TaskIdArg
};
use gloo::net::http::Request;
use serde::{
  Serialize,
  de::DeserializeOwned
};

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
  #[error("failed to encode body: {0}")]
  Encode(gloo::net::Error),
  #[error("request error: {0}")]
  Transport(gloo::net::Error),
  #[error("HTTP {0}")]
  Status(u16),
  #[error("decode error: {0}")]
  Decode(gloo::net::Error)
}

/// POSTs `body` as JSON to `url` and decodes a JSON answer.
///
/// Non-2xx answers are errors even when they carry a body.
pub async fn request_json<R, A>(
  url: &str,
  body: &A
) -> Result<R, RequestError>
where
  R: DeserializeOwned,
  A: Serialize + ?Sized
{
  let response = Request::post(url)
    .header(
      "Accept",
      "application/json"
    )
    .json(body)
    .map_err(RequestError::Encode)?
    .send()
    .await
    .map_err(RequestError::Transport)?;

  if !response.ok() {
    return Err(RequestError::Status(
      response.status()
    ));
  }

  response
    .json::<R>()
    .await
    .map_err(RequestError::Decode)
}

pub async fn post_completion(
  url: &str,
  request: &CompletionRequest
) -> Result<CompletionResponse, RequestError>
{
  let body = TaskIdArg {
    task_id: request
      .task_id
      .as_str()
      .to_string()
  };
  tracing::debug!(
    url,
    task = %request.task_id,
    action = request.action.as_key(),
    "posting task completion"
  );
  request_json(url, &body).await
}
