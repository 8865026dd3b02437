use std::fmt;

use serde::{self, Deserialize, Serialize};

use crate::consts;
use crate::errors::PlannerError;
use crate::session::ChatTurn;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

/// The ten form fields of the plan page. Text fields arrive verbatim,
/// numeric fields carry the same ranges the widgets enforce client-side.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlanForm {
    pub workout_type: String,
    pub diet_type: String,
    pub current_weight: f64,
    pub target_weight: f64,
    #[serde(default)]
    pub dietary_restrictions: String,
    #[serde(default)]
    pub health_conditions: String,
    pub age: u32,
    pub gender: Gender,
    pub number_of_weeks: u32,
    #[serde(default)]
    pub comments: String,
}

impl PlanForm {
    pub fn validate(&self) -> Result<(), PlannerError> {
        check_weight("current_weight", self.current_weight)?;
        check_weight("target_weight", self.target_weight)?;
        if self.age < consts::AGE_MIN || self.age > consts::AGE_MAX {
            return Err(PlannerError::ValidationError(format!(
                "age must be between {} and {}, got {}",
                consts::AGE_MIN,
                consts::AGE_MAX,
                self.age
            )));
        }
        if self.number_of_weeks < consts::WEEKS_MIN || self.number_of_weeks > consts::WEEKS_MAX {
            return Err(PlannerError::ValidationError(format!(
                "number_of_weeks must be between {} and {}, got {}",
                consts::WEEKS_MIN,
                consts::WEEKS_MAX,
                self.number_of_weeks
            )));
        }
        Ok(())
    }
}

fn check_weight(field: &str, value: f64) -> Result<(), PlannerError> {
    if !value.is_finite() || value < consts::WEIGHT_MIN_KG || value > consts::WEIGHT_MAX_KG {
        return Err(PlannerError::ValidationError(format!(
            "{} must be between {} and {} kg, got {}",
            field,
            consts::WEIGHT_MIN_KG,
            consts::WEIGHT_MAX_KG,
            value
        )));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AskForm {
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResponse {
    pub plan: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
    /// Set when the answer text is an upstream error message rather than a
    /// model reply. The turn is still part of the transcript.
    pub error: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub plan: Option<String>,
    pub messages: Vec<ChatTurn>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
