#![allow(dead_code)]

use serde_json::{Value, json};

use fitness_planner::config::Config;
use fitness_planner::models::api::{Gender, PlanForm};

pub fn test_config(api_url: String) -> Config {
    Config {
        api_url,
        model: "test-model".to_string(),
        api_key: "test-key".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
    }
}

pub fn sample_plan_form() -> PlanForm {
    PlanForm {
        workout_type: "Weight Loss".to_string(),
        diet_type: "Mediterranean".to_string(),
        current_weight: 75.0,
        target_weight: 68.0,
        dietary_restrictions: "No dairy".to_string(),
        health_conditions: "None".to_string(),
        age: 30,
        gender: Gender::Female,
        number_of_weeks: 4,
        comments: "Prefer morning workouts".to_string(),
    }
}

pub fn sample_plan_form_json() -> Value {
    json!({
        "workout_type": "Weight Loss",
        "diet_type": "Mediterranean",
        "current_weight": 75.0,
        "target_weight": 68.0,
        "dietary_restrictions": "No dairy",
        "health_conditions": "None",
        "age": 30,
        "gender": "Female",
        "number_of_weeks": 4,
        "comments": "Prefer morning workouts"
    })
}

pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test-1",
        "object": "chat.completion",
        "created": 1234567890,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 50, "completion_tokens": 200, "total_tokens": 250}
    })
}

pub fn empty_choices_body() -> Value {
    json!({
        "id": "chatcmpl-empty",
        "object": "chat.completion",
        "created": 1234567890,
        "model": "test-model",
        "choices": [],
        "usage": {"prompt_tokens": 50, "completion_tokens": 0, "total_tokens": 50}
    })
}

pub fn upstream_error_body(message: &str, error_type: &str) -> Value {
    json!({
        "error": {
            "message": message,
            "type": error_type
        }
    })
}
