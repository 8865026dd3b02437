use crate::config::Config;
use crate::consts;
use crate::errors::PlannerError;
use crate::llm_client::{LLMClient, LLMClientTrait};
use crate::models::api::PlanForm;
use crate::models::request::ChatCompletionCreate;
use crate::models::response::ChatCompletion;
use crate::prompts;

/// Carries out the two model-backed operations: plan generation and
/// follow-up answers. One outbound call per operation, no retries.
#[derive(Clone)]
pub struct PlannerService {
    http_client: reqwest::Client,
}

impl PlannerService {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    pub async fn generate_plan(
        &self,
        form: &PlanForm,
        config: &Config,
    ) -> Result<String, PlannerError> {
        form.validate()?;

        let prompt = prompts::plan_prompt(form);
        self.complete(prompt, consts::PLAN_MAX_TOKENS, config).await
    }

    pub async fn answer_question(
        &self,
        plan: &str,
        question: &str,
        config: &Config,
    ) -> Result<String, PlannerError> {
        if question.trim().is_empty() {
            return Err(PlannerError::ValidationError(
                "error: empty question".to_string(),
            ));
        }

        let prompt = prompts::chat_prompt(plan, question);
        self.complete(prompt, consts::ANSWER_MAX_TOKENS, config)
            .await
    }

    async fn complete(
        &self,
        prompt: String,
        max_tokens: i32,
        config: &Config,
    ) -> Result<String, PlannerError> {
        let request = ChatCompletionCreate::single_user_prompt(&config.model, prompt, max_tokens);

        let client = LLMClient::new(self.http_client.clone(), &config.api_url, &config.api_key);
        let response = client.request_chat_completion(request).await?;

        let body = response.text().await?;
        let completion: ChatCompletion = serde_json::from_str(&body)?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                PlannerError::ParseError("error: completion carried no content".to_string())
            })
    }
}
