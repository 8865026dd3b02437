use actix_web::mime;
use async_trait::async_trait;
use reqwest::Response;

use crate::errors::PlannerError;
use crate::models::request::ChatCompletionCreate;

#[async_trait]
pub trait LLMClientTrait: Send + Sync {
    async fn request_chat_completion(
        &self,
        request: ChatCompletionCreate,
    ) -> Result<Response, PlannerError>;
}

pub struct LLMClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LLMClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl LLMClientTrait for LLMClient {
    async fn request_chat_completion(
        &self,
        request: ChatCompletionCreate,
    ) -> Result<Response, PlannerError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, "/chat/completions"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(PlannerError::ApiError(format!(
                "error: status {status}, text {text}"
            )));
        }

        let content_type: mime::Mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .ok_or_else(|| PlannerError::ParseError("missing content-type header".to_string()))?
            .to_str()?
            .parse()?;
        if content_type.essence_str() != mime::APPLICATION_JSON.essence_str() {
            return Err(PlannerError::ParseError(format!(
                "content-type: {content_type}, expected: {}",
                mime::APPLICATION_JSON
            )));
        }

        Ok(response)
    }
}
