//! HTTP client for the analysis endpoints. One POST per submission, multipart
//! body carrying exactly one of `text_input` or `file_input`. No retries and
//! no cancellation; staleness is the controller's problem.

use reqwest::multipart::{Form, Part};

use crate::core::error::{MalformedResponseError, RequestError};
use crate::core::result::{AnalysisResult, WireError, WireResult};
use crate::pipelines::controller::RequestPayload;
use crate::pipelines::PipelineConfig;

/// Resolves a pipeline path against the page origin on the web, or the local
/// dev backend elsewhere (reqwest needs absolute URLs off wasm).
pub fn endpoint_url(path: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
        format!("{origin}{path}")
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        format!("http://127.0.0.1:8000{path}")
    }
}

pub async fn submit(
    config: &PipelineConfig,
    payload: RequestPayload,
) -> Result<AnalysisResult, RequestError> {
    let form = match payload {
        RequestPayload::Text(text) => Form::new().text("text_input", text),
        RequestPayload::File(file) => {
            Form::new().part("file_input", Part::bytes(file.bytes).file_name(file.name))
        }
    };

    let url = endpoint_url(config.endpoint);
    tracing::info!(pipeline = config.id, %url, "submitting analysis request");

    let response = reqwest::Client::new()
        .post(&url)
        .multipart(form)
        .send()
        .await
        .map_err(|err| RequestError::Transport(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let detail = response
            .json::<WireError>()
            .await
            .ok()
            .and_then(|body| body.detail);
        tracing::warn!(pipeline = config.id, status = status.as_u16(), "analysis rejected");
        return Err(match detail {
            Some(detail) => RequestError::Rejected(detail),
            None => RequestError::Status(status.as_u16()),
        });
    }

    let wire: WireResult = response
        .json()
        .await
        .map_err(|err| MalformedResponseError(err.to_string()))?;

    Ok(wire.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_endpoints_resolve_against_the_dev_backend() {
        assert_eq!(
            endpoint_url("/analyze-vader/"),
            "http://127.0.0.1:8000/analyze-vader/"
        );
    }
}
