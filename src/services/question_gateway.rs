use std::sync::Arc;

use validator::ValidationErrors;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Question,
        dto::request::{check_choices, QuestionCreate, QuestionUpdate},
    },
    repositories::{QuestionRepository, QuizRepository},
};

/// CRUD over question records. Authorization is the caller's job; see
/// `AccessValidator`.
pub struct QuestionGateway {
    questions: Arc<dyn QuestionRepository>,
    quizzes: Arc<dyn QuizRepository>,
}

impl QuestionGateway {
    pub fn new(questions: Arc<dyn QuestionRepository>, quizzes: Arc<dyn QuizRepository>) -> Self {
        Self { questions, quizzes }
    }

    pub async fn create(&self, quiz_id: &str, request: QuestionCreate) -> AppResult<Question> {
        if self.quizzes.find_by_id(quiz_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Quiz with id '{}' not found",
                quiz_id
            )));
        }

        let question = Question::from_request(quiz_id, request);
        let created = self.questions.create(question).await?;

        log::info!("Created question {} in quiz {}", created.id, quiz_id);
        Ok(created)
    }

    /// Absence is `Ok(None)` so callers can order the not-found and
    /// authorization checks themselves.
    pub async fn get(&self, question_id: &str) -> AppResult<Option<Question>> {
        self.questions.find_by_id(question_id).await
    }

    pub async fn list_for_quiz(&self, quiz_id: &str) -> AppResult<Vec<Question>> {
        self.questions.find_by_quiz(quiz_id).await
    }

    pub async fn update(&self, question_id: &str, patch: QuestionUpdate) -> AppResult<Question> {
        let mut question = self
            .questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Question with id '{}' not found", question_id))
            })?;

        question.apply_update(patch);

        // The patch may have switched the type without supplying options.
        if let Err(err) = check_choices(&question.question_type, &question.options) {
            let mut errors = ValidationErrors::new();
            errors.add("options", err);
            return Err(errors.into());
        }

        let updated = self.questions.update(question).await?;
        log::info!("Updated question {}", updated.id);
        Ok(updated)
    }

    pub async fn delete(&self, question_id: &str) -> AppResult<()> {
        self.questions.delete(question_id).await?;
        log::info!("Deleted question {}", question_id);
        Ok(())
    }
}
