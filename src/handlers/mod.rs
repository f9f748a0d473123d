pub mod health_handler;
pub mod question_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::{auth::AuthMiddleware, errors::AppError};

pub use health_handler::{health_check, health_check_ready};
pub use question_handler::{create_question, delete_question, get_question, update_question};
pub use quiz_handler::{create_quiz, get_quiz, list_quiz_questions};

/// Registers every route. Health probes are public; `/api/v1` requires a
/// bearer token.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(health_check)
        .service(health_check_ready)
        .service(
            web::scope("/api/v1")
                .wrap(AuthMiddleware)
                .service(create_quiz)
                .service(get_quiz)
                .service(list_quiz_questions)
                .service(create_question)
                .service(get_question)
                .service(update_question)
                .service(delete_question),
        );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}
