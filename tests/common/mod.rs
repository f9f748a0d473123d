#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use quiz_question_server::{
    app_state::AppState,
    config::Config,
    db::HealthCheck,
    errors::{AppError, AppResult},
    models::domain::{Question, Quiz},
    repositories::{QuestionRepository, QuizRepository},
};

/// Builds the full application around an `AppState` for `actix_web::test`.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.clone()))
                .wrap(quiz_question_server::middleware::RequestIdMiddleware)
                .configure(quiz_question_server::handlers::configure),
        )
        .await
    };
}

pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<String, Quiz>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            quizzes: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned())
    }

    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        quizzes.insert(quiz.id.clone(), quiz.clone());
        Ok(quiz)
    }
}

pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<HashMap<String, Question>>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self {
            questions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.questions.read().await.len()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        questions.insert(question.id.clone(), question.clone());
        Ok(question)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.get(id).cloned())
    }

    async fn find_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        let mut items: Vec<_> = questions
            .values()
            .filter(|q| q.quiz_id == quiz_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.order.cmp(&b.order).then(a.created_at.cmp(&b.created_at)));
        Ok(items)
    }

    async fn update(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        if !questions.contains_key(&question.id) {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                question.id
            )));
        }
        questions.insert(question.id.clone(), question.clone());
        Ok(question)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut questions = self.questions.write().await;
        if questions.remove(id).is_none() {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }
        Ok(())
    }
}

/// Question store that fails every call, for exercising the 500 path.
pub struct BrokenQuestionRepository;

#[async_trait]
impl QuestionRepository for BrokenQuestionRepository {
    async fn create(&self, _question: Question) -> AppResult<Question> {
        Err(broken())
    }

    async fn find_by_id(&self, _id: &str) -> AppResult<Option<Question>> {
        Err(broken())
    }

    async fn find_by_quiz(&self, _quiz_id: &str) -> AppResult<Vec<Question>> {
        Err(broken())
    }

    async fn update(&self, _question: Question) -> AppResult<Question> {
        Err(broken())
    }

    async fn delete(&self, _id: &str) -> AppResult<()> {
        Err(broken())
    }
}

fn broken() -> AppError {
    AppError::DatabaseError("connection pool exhausted at 10.1.2.3:27017".to_string())
}

pub struct StubStore {
    pub healthy: bool,
}

#[async_trait]
impl HealthCheck for StubStore {
    async fn health_check(&self) -> AppResult<()> {
        if self.healthy {
            Ok(())
        } else {
            Err(AppError::DatabaseError("ping failed".to_string()))
        }
    }
}

pub fn test_config() -> Config {
    Config {
        app_env: "test".to_string(),
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "quiz-test".to_string(),
        quizzes_collection: "quizzes".to_string(),
        questions_collection: "questions".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        jwt_secret: SecretString::from("integration_test_jwt_secret".to_string()),
        cors_allowed_origins: vec![],
    }
}

pub struct Harness {
    pub state: AppState,
    pub quizzes: Arc<InMemoryQuizRepository>,
    pub questions: Arc<InMemoryQuestionRepository>,
}

impl Harness {
    pub fn new() -> Self {
        let quizzes = Arc::new(InMemoryQuizRepository::new());
        let questions = Arc::new(InMemoryQuestionRepository::new());
        let state = AppState::from_parts(
            test_config(),
            quizzes.clone(),
            questions.clone(),
            Arc::new(StubStore { healthy: true }),
        );

        Self {
            state,
            quizzes,
            questions,
        }
    }

    /// Same quizzes, but every question operation fails.
    pub fn with_broken_questions(&self) -> AppState {
        AppState::from_parts(
            test_config(),
            self.quizzes.clone(),
            Arc::new(BrokenQuestionRepository),
            Arc::new(StubStore { healthy: true }),
        )
    }

    pub fn bearer(&self, user_id: &str) -> (String, String) {
        let token = self
            .state
            .jwt_service
            .create_token(user_id, 1)
            .expect("token should be created");
        ("Authorization".to_string(), format!("Bearer {}", token))
    }

    pub async fn seed_quiz(&self, owner_id: &str) -> Quiz {
        self.quizzes
            .create(Quiz::new(owner_id, "Seeded quiz", None))
            .await
            .expect("seed quiz")
    }
}
