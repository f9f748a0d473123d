use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::dto::request::{QuestionCreate, QuestionUpdate};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub quiz_id: String, // Owning quiz, never empty
    pub question_text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: Option<String>, // Answer key for choice questions, reference answer otherwise
    #[serde(default)]
    pub explanation: Option<String>,
    pub points: i32,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Discriminator for the question payload.
///
/// Stored and transmitted as a snake_case string. Stored strings this build
/// does not know are kept verbatim in `Unknown` so such records survive a
/// read. Request validation rejects `Unknown`, so the API never writes one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Essay,
    Unknown(String),
}

impl QuestionType {
    pub const SUPPORTED: [&'static str; 4] = ["multiple_choice", "true_false", "short_answer", "essay"];

    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::TrueFalse => "true_false",
            QuestionType::ShortAnswer => "short_answer",
            QuestionType::Essay => "essay",
            QuestionType::Unknown(raw) => raw,
        }
    }
}

impl From<String> for QuestionType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "multiple_choice" => QuestionType::MultipleChoice,
            "true_false" => QuestionType::TrueFalse,
            "short_answer" => QuestionType::ShortAnswer,
            "essay" => QuestionType::Essay,
            _ => QuestionType::Unknown(raw),
        }
    }
}

impl From<QuestionType> for String {
    fn from(question_type: QuestionType) -> Self {
        match question_type {
            QuestionType::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Question {
    pub fn from_request(quiz_id: &str, request: QuestionCreate) -> Self {
        let now = Utc::now();
        Question {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            question_text: request.question_text,
            question_type: request.question_type,
            options: request.options,
            correct_answer: request.correct_answer,
            explanation: request.explanation,
            points: request.points,
            order: request.order,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the fields present in `patch`; absent fields keep their value.
    /// A present `null` clears the answer or explanation.
    pub fn apply_update(&mut self, patch: QuestionUpdate) {
        if let Some(question_text) = patch.question_text {
            self.question_text = question_text;
        }
        if let Some(question_type) = patch.question_type {
            self.question_type = question_type;
        }
        if let Some(options) = patch.options {
            self.options = options;
        }
        if let Some(correct_answer) = patch.correct_answer {
            self.correct_answer = correct_answer;
        }
        if let Some(explanation) = patch.explanation {
            self.explanation = explanation;
        }
        if let Some(points) = patch.points {
            self.points = points;
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
        self.updated_at = Utc::now();
    }
}
