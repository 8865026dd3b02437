use serde::{self, Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Message {
    System { content: String },
    User { content: String },
    Assistant { content: String },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatCompletionCreate {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_tokens: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub temperature: Option<f32>,
}

impl ChatCompletionCreate {
    pub fn single_user_prompt(model: &str, prompt: String, max_tokens: i32) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![Message::User { content: prompt }],
            max_tokens: Some(max_tokens),
            temperature: None,
        }
    }
}
