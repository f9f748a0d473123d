use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::Quiz, dto::request::QuizCreate},
    repositories::QuizRepository,
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_quiz(&self, owner_id: &str, request: QuizCreate) -> AppResult<Quiz> {
        request.validate()?;

        let quiz = Quiz::new(owner_id, &request.title, request.description);
        let created = self.repository.create(quiz).await?;

        log::info!("Created quiz {} for user {}", created.id, owner_id);
        Ok(created)
    }

    /// Existence is checked before ownership, same as for questions.
    pub async fn get_quiz(&self, quiz_id: &str, user_id: &str) -> AppResult<Quiz> {
        let quiz = self
            .repository
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        if !quiz.is_owned_by(user_id) {
            return Err(AppError::Unauthorized(
                "Not authorized to access this quiz".to_string(),
            ));
        }

        Ok(quiz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{repositories::MockQuizRepository, test_utils::fixtures::quiz_owned_by};

    #[actix_rt::test]
    async fn create_quiz_sets_owner() {
        let mut repo = MockQuizRepository::new();
        repo.expect_create().times(1).returning(Ok);
        let service = QuizService::new(Arc::new(repo));

        let quiz = service
            .create_quiz(
                "user-a",
                QuizCreate {
                    title: "Borrow checker".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(quiz.owner_id, "user-a");
        assert_eq!(quiz.title, "Borrow checker");
    }

    #[actix_rt::test]
    async fn create_quiz_rejects_blank_title() {
        let mut repo = MockQuizRepository::new();
        repo.expect_create().never();
        let service = QuizService::new(Arc::new(repo));

        let result = service
            .create_quiz(
                "user-a",
                QuizCreate {
                    title: String::new(),
                    description: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_rt::test]
    async fn get_quiz_checks_existence_then_owner() {
        let mut repo = MockQuizRepository::new();
        repo.expect_find_by_id().returning(|id| {
            Ok((id == "quiz-1").then(|| quiz_owned_by("user-a")))
        });
        let service = QuizService::new(Arc::new(repo));

        assert!(service.get_quiz("quiz-1", "user-a").await.is_ok());
        assert!(matches!(
            service.get_quiz("quiz-1", "user-b").await,
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            service.get_quiz("quiz-2", "user-b").await,
            Err(AppError::NotFound(_))
        ));
    }
}
