use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    middleware::RequestId,
    models::dto::{request::QuizCreate, response::QuestionView},
};

#[post("/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<QuizCreate>,
    auth: AuthenticatedUser,
    request_id: RequestId,
) -> Result<HttpResponse, AppError> {
    let user_id = auth.user_id();
    log::info!("Creating quiz for user {}", user_id);

    let quiz = state
        .quiz_service
        .create_quiz(user_id, request.into_inner())
        .await
        .map_err(|e| {
            e.surface(
                "Failed to create quiz",
                &format!("request_id={} user_id={}", request_id, user_id),
            )
        })?;

    Ok(HttpResponse::Created().json(quiz))
}

#[get("/quizzes/{quiz_id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<Uuid>,
    auth: AuthenticatedUser,
    request_id: RequestId,
) -> Result<HttpResponse, AppError> {
    let quiz_id = quiz_id.into_inner().to_string();
    let user_id = auth.user_id();

    let quiz = state
        .quiz_service
        .get_quiz(&quiz_id, user_id)
        .await
        .map_err(|e| {
            e.surface(
                "Failed to fetch quiz",
                &format!("request_id={} quiz_id={} user_id={}", request_id, quiz_id, user_id),
            )
        })?;

    Ok(HttpResponse::Ok().json(quiz))
}

#[get("/quizzes/{quiz_id}/questions")]
pub async fn list_quiz_questions(
    state: web::Data<AppState>,
    quiz_id: web::Path<Uuid>,
    auth: AuthenticatedUser,
    request_id: RequestId,
) -> Result<HttpResponse, AppError> {
    let quiz_id = quiz_id.into_inner().to_string();
    let user_id = auth.user_id();
    let context = format!("request_id={} quiz_id={} user_id={}", request_id, quiz_id, user_id);
    log::info!("Listing questions of quiz {}", quiz_id);

    state
        .quiz_service
        .get_quiz(&quiz_id, user_id)
        .await
        .map_err(|e| e.surface("Failed to list questions", &context))?;

    let views: Vec<QuestionView> = state
        .question_gateway
        .list_for_quiz(&quiz_id)
        .await
        .map_err(|e| e.surface("Failed to list questions", &context))?
        .into_iter()
        .map(QuestionView::from)
        .collect();

    Ok(HttpResponse::Ok().json(views))
}
