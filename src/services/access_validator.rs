use std::sync::Arc;

use crate::{errors::AppResult, repositories::QuizRepository};

/// Decides whether a user may act on a quiz and, through it, its questions.
pub struct AccessValidator {
    quizzes: Arc<dyn QuizRepository>,
}

impl AccessValidator {
    pub fn new(quizzes: Arc<dyn QuizRepository>) -> Self {
        Self { quizzes }
    }

    /// `true` only when the quiz exists and is owned by `user_id`. An unknown
    /// quiz is never authorized. Store failures are returned as errors, not
    /// as a decision.
    pub async fn validate_user_access(&self, quiz_id: &str, user_id: &str) -> AppResult<bool> {
        let allowed = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .map(|quiz| quiz.is_owned_by(user_id))
            .unwrap_or(false);

        Ok(allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::AppError,
        repositories::MockQuizRepository,
        test_utils::fixtures::quiz_owned_by,
    };

    fn validator_with(quiz_owner: Option<&'static str>) -> AccessValidator {
        let mut repo = MockQuizRepository::new();
        repo.expect_find_by_id().returning(move |id| {
            Ok(quiz_owner.filter(|_| id == "quiz-1").map(|owner| {
                let mut quiz = quiz_owned_by(owner);
                quiz.id = id.to_string();
                quiz
            }))
        });
        AccessValidator::new(Arc::new(repo))
    }

    #[actix_rt::test]
    async fn owner_is_allowed() {
        let validator = validator_with(Some("user-a"));
        assert!(validator.validate_user_access("quiz-1", "user-a").await.unwrap());
    }

    #[actix_rt::test]
    async fn other_user_is_denied() {
        let validator = validator_with(Some("user-a"));
        assert!(!validator.validate_user_access("quiz-1", "user-b").await.unwrap());
    }

    #[actix_rt::test]
    async fn unknown_quiz_fails_closed() {
        let validator = validator_with(Some("user-a"));
        assert!(!validator.validate_user_access("quiz-404", "user-a").await.unwrap());

        let empty = validator_with(None);
        assert!(!empty.validate_user_access("quiz-1", "user-a").await.unwrap());
    }

    #[actix_rt::test]
    async fn store_failure_is_an_error_not_a_decision() {
        let mut repo = MockQuizRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(AppError::DatabaseError("timeout".into())));
        let validator = AccessValidator::new(Arc::new(repo));

        let result = validator.validate_user_access("quiz-1", "user-a").await;
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }
}
