//! API gateway client for the remote analysis backend.
//!
//! Two live operations (health check, analyze) over fetch, plus the batch
//! placeholder. Single-shot requests: no retry, timeout or cancellation —
//! a transport failure surfaces directly as a typed error.

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use fundus_ai_common::{
    AnalysisResponse, AnalysisResult, Error, HealthStatus, ReportType, Result,
};

/// Local backend default; overridable at build time via `API_BASE_URL`.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `GET {base}/api/health`. Any transport failure or non-2xx status is
    /// a `ServiceUnavailable`.
    pub async fn health_check(&self) -> Result<HealthStatus> {
        let url = format!("{}/api/health", self.base_url);
        let request =
            Request::new_with_str(&url).map_err(|e| Error::ServiceUnavailable(js_text(e)))?;

        let resp = fetch(&request)
            .await
            .map_err(|e| Error::ServiceUnavailable(js_text(e)))?;
        if !resp.ok() {
            return Err(Error::ServiceUnavailable(format!(
                "health check returned status {}",
                resp.status()
            )));
        }

        let json = response_json(&resp)
            .await
            .map_err(|e| Error::ServiceUnavailable(js_text(e)))?;
        serde_wasm_bindgen::from_value(json)
            .map_err(|e| Error::ServiceUnavailable(e.to_string()))
    }

    /// `POST {base}/api/analyze` as multipart (`image` + `report_type`).
    ///
    /// `on_progress` is accepted for future incremental reporting; the
    /// current single-shot request never invokes it.
    pub async fn analyze_image(
        &self,
        image: &File,
        report_type: ReportType,
        _on_progress: Option<&dyn Fn(f32)>,
    ) -> Result<AnalysisResult> {
        let form = FormData::new().map_err(|e| Error::AnalysisFailed(js_text(e)))?;
        form.append_with_blob("image", image)
            .map_err(|e| Error::AnalysisFailed(js_text(e)))?;
        form.append_with_str("report_type", report_type.as_str())
            .map_err(|e| Error::AnalysisFailed(js_text(e)))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(form.as_ref());

        let url = format!("{}/api/analyze", self.base_url);
        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|e| Error::AnalysisFailed(js_text(e)))?;

        let resp = fetch(&request)
            .await
            .map_err(|e| Error::AnalysisFailed(js_text(e)))?;

        let body = response_text(&resp).await.unwrap_or_default();
        if !resp.ok() {
            return Err(Error::AnalysisFailed(failure_message(&body)));
        }

        let response: AnalysisResponse = serde_json::from_str(&body)
            .map_err(|e| Error::AnalysisFailed(format!("unparsable response body: {}", e)))?;
        response.into_result()
    }

    /// Deliberate placeholder: batch analysis is not implemented.
    pub async fn batch_analyze(&self, _images: &[File]) -> Result<Vec<AnalysisResult>> {
        Err(Error::NotImplemented("batch analysis"))
    }
}

async fn fetch(request: &Request) -> std::result::Result<Response, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let value = JsFuture::from(window.fetch_with_request(request)).await?;
    value.dyn_into::<Response>()
}

async fn response_json(resp: &Response) -> std::result::Result<JsValue, JsValue> {
    JsFuture::from(resp.json()?).await
}

async fn response_text(resp: &Response) -> Option<String> {
    let promise = resp.text().ok()?;
    JsFuture::from(promise).await.ok()?.as_string()
}

fn js_text(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Message for a failed analyze call: the body's `details` or `error`
/// field, or a generic fallback when the body is unparsable.
fn failure_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct FailureBody {
        #[serde(default)]
        details: Option<String>,
        #[serde(default)]
        error: Option<String>,
    }

    serde_json::from_str::<FailureBody>(body)
        .ok()
        .and_then(|b| b.details.or(b.error))
        .unwrap_or_else(|| "Analysis failed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_details() {
        let body = r#"{"details": "image too small", "error": "bad request"}"#;
        assert_eq!(failure_message(body), "image too small");
    }

    #[test]
    fn test_failure_message_falls_back_to_error_field() {
        let body = r#"{"error": "model unavailable"}"#;
        assert_eq!(failure_message(body), "model unavailable");
    }

    #[test]
    fn test_failure_message_generic_on_unparsable_body() {
        assert_eq!(failure_message("<html>502</html>"), "Analysis failed");
        assert_eq!(failure_message(""), "Analysis failed");
        assert_eq!(failure_message("{}"), "Analysis failed");
    }

    #[test]
    fn test_default_base_url() {
        let client = ApiClient::with_base_url(DEFAULT_API_BASE);
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
