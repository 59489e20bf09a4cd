use serde_json::{json, Value};

use crate::{ApiError, ProviderClient};

/// Pulls `generated_text` out of `[{"generated_text": ...}]`.
pub fn generated_text(response: Value) -> Result<String, ApiError> {
    if let Some(text) = response
        .get(0)
        .and_then(|first| first.get("generated_text"))
        .and_then(Value::as_str)
    {
        return Ok(text.to_owned());
    }
    // the inference api reports e.g. a loading model as {"error": "..."}
    let reason = response
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| "Failed to generate story from API response".to_owned());
    Err(ApiError::UnexpectedResponse(reason))
}

impl ProviderClient {
    pub async fn generate_text(&self, prompt: &str) -> Result<String, ApiError> {
        let key = self.config().huggingface_api_key()?;
        let url = self.config().huggingface_url.clone();
        log::debug!("Sending prompt to text generation: {prompt}");
        let request = self
            .http()
            .post(&url)
            .bearer_auth(key)
            .json(&json!({ "inputs": prompt }));
        let response: Value = self.send(request, &url).await?;
        generated_text(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_first_generation() {
        let response = json!([{ "generated_text": "Once upon a road" }, { "generated_text": "x" }]);
        assert_eq!(generated_text(response).unwrap(), "Once upon a road");
    }

    #[test]
    fn reports_provider_error() {
        let response = json!({ "error": "Model gpt2 is currently loading" });
        match generated_text(response) {
            Err(ApiError::UnexpectedResponse(reason)) => {
                assert_eq!(reason, "Model gpt2 is currently loading")
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_list_is_unexpected() {
        assert!(matches!(
            generated_text(json!([])),
            Err(ApiError::UnexpectedResponse(_))
        ));
    }
}
