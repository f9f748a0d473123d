use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::{Database, HealthCheck},
    errors::AppResult,
    repositories::{MongoQuestionRepository, MongoQuizRepository, QuestionRepository, QuizRepository},
    services::{AccessValidator, QuestionGateway, QuizService},
};

/// Everything a handler needs, built once at startup and shared read-only
/// across workers.
#[derive(Clone)]
pub struct AppState {
    pub access_validator: Arc<AccessValidator>,
    pub question_gateway: Arc<QuestionGateway>,
    pub quiz_service: Arc<QuizService>,
    pub jwt_service: Arc<JwtService>,
    pub store: Arc<dyn HealthCheck>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db, &config.quizzes_collection));
        quiz_repository.ensure_indexes().await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(
            &db,
            &config.questions_collection,
        ));
        question_repository.ensure_indexes().await?;

        Ok(Self::from_parts(
            config,
            quiz_repository,
            question_repository,
            Arc::new(db),
        ))
    }

    /// Wires the services over arbitrary repository implementations.
    pub fn from_parts(
        config: Config,
        quizzes: Arc<dyn QuizRepository>,
        questions: Arc<dyn QuestionRepository>,
        store: Arc<dyn HealthCheck>,
    ) -> Self {
        Self {
            access_validator: Arc::new(AccessValidator::new(quizzes.clone())),
            question_gateway: Arc::new(QuestionGateway::new(questions, quizzes.clone())),
            quiz_service: Arc::new(QuizService::new(quizzes)),
            jwt_service: Arc::new(JwtService::new(&config.jwt_secret)),
            store,
            config: Arc::new(config),
        }
    }
}
