use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use crate::models::domain::QuestionType;

/// Multiple-choice questions need something to choose from.
pub const MIN_CHOICE_OPTIONS: usize = 2;

const MAX_ANSWER_CHARS: usize = 2000;
const MAX_EXPLANATION_CHARS: usize = 4000;

fn default_points() -> i32 {
    1
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_create"))]
pub struct QuestionCreate {
    #[validate(length(min = 1, max = 2000))]
    pub question_text: String,

    pub question_type: QuestionType,

    #[serde(default)]
    pub options: Vec<String>,

    #[validate(length(max = 2000))]
    pub correct_answer: Option<String>,

    #[validate(length(max = 4000))]
    pub explanation: Option<String>,

    #[serde(default = "default_points")]
    #[validate(range(min = 0, max = 1000))]
    pub points: i32,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub order: i32,
}

/// Partial update. For `correct_answer` and `explanation` an explicit `null`
/// clears the stored value (`Some(None)`), while a missing key leaves it alone.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_update"))]
pub struct QuestionUpdate {
    #[validate(length(min = 1, max = 2000))]
    pub question_text: Option<String>,

    pub question_type: Option<QuestionType>,

    pub options: Option<Vec<String>>,

    #[serde(default, deserialize_with = "nullable")]
    pub correct_answer: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable")]
    pub explanation: Option<Option<String>>,

    #[validate(range(min = 0, max = 1000))]
    pub points: Option<i32>,

    #[validate(range(min = 0))]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizCreate {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

/// Query string of the create endpoint: `?quiz_id=<uuid>`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizScope {
    pub quiz_id: uuid::Uuid,
}

/// A key that is present is `Some`, even when its value is `null`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// `Unknown` only exists so stored records survive a read. Clients must name
/// one of the supported types.
pub fn check_known_type(question_type: &QuestionType) -> Result<(), ValidationError> {
    if let QuestionType::Unknown(raw) = question_type {
        let mut err = ValidationError::new("question_type");
        err.message = Some(Cow::from(format!(
            "unsupported question_type '{}'; expected one of {}",
            raw,
            QuestionType::SUPPORTED.join(", ")
        )));
        return Err(err);
    }
    Ok(())
}

fn check_max_chars(field: &'static str, value: Option<&str>, max: usize) -> Result<(), ValidationError> {
    match value {
        Some(value) if value.chars().count() > max => {
            let mut err = ValidationError::new(field);
            err.message = Some(Cow::from(format!("{} must be at most {} characters", field, max)));
            Err(err)
        }
        _ => Ok(()),
    }
}

pub fn check_choices(question_type: &QuestionType, options: &[String]) -> Result<(), ValidationError> {
    if *question_type == QuestionType::MultipleChoice && options.len() < MIN_CHOICE_OPTIONS {
        let mut err = ValidationError::new("options");
        err.message = Some(Cow::from(format!(
            "multiple_choice questions need at least {} options",
            MIN_CHOICE_OPTIONS
        )));
        return Err(err);
    }
    if options.iter().any(|option| option.trim().is_empty()) {
        let mut err = ValidationError::new("options");
        err.message = Some(Cow::from("options must not be blank"));
        return Err(err);
    }
    Ok(())
}

fn validate_create(request: &QuestionCreate) -> Result<(), ValidationError> {
    check_known_type(&request.question_type)?;
    check_choices(&request.question_type, &request.options)
}

fn validate_update(patch: &QuestionUpdate) -> Result<(), ValidationError> {
    if let Some(question_type) = &patch.question_type {
        check_known_type(question_type)?;
    }
    check_max_chars(
        "correct_answer",
        patch.correct_answer.as_ref().and_then(|v| v.as_deref()),
        MAX_ANSWER_CHARS,
    )?;
    check_max_chars(
        "explanation",
        patch.explanation.as_ref().and_then(|v| v.as_deref()),
        MAX_EXPLANATION_CHARS,
    )
}
