use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::{AppError, AppResult},
    middleware::RequestId,
    models::{
        domain::Question,
        dto::{
            request::{QuestionCreate, QuestionUpdate, QuizScope},
            response::{MessageResponse, QuestionView},
        },
    },
};

#[post("/questions")]
pub async fn create_question(
    state: web::Data<AppState>,
    scope: web::Query<QuizScope>,
    request: web::Json<QuestionCreate>,
    auth: AuthenticatedUser,
    request_id: RequestId,
) -> Result<HttpResponse, AppError> {
    let quiz_id = scope.quiz_id.to_string();
    let user_id = auth.user_id();
    let context = format!("request_id={} quiz_id={} user_id={}", request_id, quiz_id, user_id);
    log::info!("Creating question for quiz {}", quiz_id);

    let request = request.into_inner();
    request.validate()?;

    let allowed = state
        .access_validator
        .validate_user_access(&quiz_id, user_id)
        .await
        .map_err(|e| e.surface("Failed to create question", &context))?;
    if !allowed {
        log::warn!(
            "User {} attempted to create question for unauthorized quiz {}",
            user_id,
            quiz_id
        );
        return Err(AppError::Unauthorized(
            "Not authorized to add questions to this quiz".to_string(),
        ));
    }

    let question = state
        .question_gateway
        .create(&quiz_id, request)
        .await
        .map_err(|e| e.surface("Failed to create question", &context))?;

    Ok(HttpResponse::Ok().json(question))
}

#[get("/questions/{question_id}")]
pub async fn get_question(
    state: web::Data<AppState>,
    question_id: web::Path<Uuid>,
    auth: AuthenticatedUser,
    request_id: RequestId,
) -> Result<HttpResponse, AppError> {
    let question_id = question_id.into_inner().to_string();
    log::info!("Fetching question {}", question_id);

    let question = load_for_user(
        &state,
        &question_id,
        auth.user_id(),
        &request_id,
        Action::Access,
    )
    .await?;

    Ok(HttpResponse::Ok().json(QuestionView::from(question)))
}

#[put("/questions/{question_id}")]
pub async fn update_question(
    state: web::Data<AppState>,
    question_id: web::Path<Uuid>,
    request: web::Json<QuestionUpdate>,
    auth: AuthenticatedUser,
    request_id: RequestId,
) -> Result<HttpResponse, AppError> {
    let question_id = question_id.into_inner().to_string();
    log::info!("Updating question {}", question_id);

    let patch = request.into_inner();
    patch.validate()?;

    load_for_user(
        &state,
        &question_id,
        auth.user_id(),
        &request_id,
        Action::Update,
    )
    .await?;

    let updated = state
        .question_gateway
        .update(&question_id, patch)
        .await
        .map_err(|e| {
            e.surface(
                Action::Update.failure(),
                &context(&request_id, &question_id, auth.user_id()),
            )
        })?;

    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/questions/{question_id}")]
pub async fn delete_question(
    state: web::Data<AppState>,
    question_id: web::Path<Uuid>,
    auth: AuthenticatedUser,
    request_id: RequestId,
) -> Result<HttpResponse, AppError> {
    let question_id = question_id.into_inner().to_string();
    log::info!("Deleting question {}", question_id);

    load_for_user(
        &state,
        &question_id,
        auth.user_id(),
        &request_id,
        Action::Delete,
    )
    .await?;

    state
        .question_gateway
        .delete(&question_id)
        .await
        .map_err(|e| {
            e.surface(
                Action::Delete.failure(),
                &context(&request_id, &question_id, auth.user_id()),
            )
        })?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Question deleted successfully")))
}

#[derive(Clone, Copy)]
enum Action {
    Access,
    Update,
    Delete,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Action::Access => "access",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }

    fn failure(self) -> &'static str {
        match self {
            Action::Access => "Failed to fetch question",
            Action::Update => "Failed to update question",
            Action::Delete => "Failed to delete question",
        }
    }
}

fn context(request_id: &RequestId, question_id: &str, user_id: &str) -> String {
    format!(
        "request_id={} question_id={} user_id={}",
        request_id, question_id, user_id
    )
}

/// Resolves a question and authorizes the caller against its quiz. A missing
/// question is reported as not found before ownership is looked at.
async fn load_for_user(
    state: &AppState,
    question_id: &str,
    user_id: &str,
    request_id: &RequestId,
    action: Action,
) -> AppResult<Question> {
    let context = context(request_id, question_id, user_id);

    let question = state
        .question_gateway
        .get(question_id)
        .await
        .map_err(|e| e.surface(action.failure(), &context))?
        .ok_or_else(|| {
            log::warn!("Question {} not found", question_id);
            AppError::NotFound("Question not found".to_string())
        })?;

    let allowed = state
        .access_validator
        .validate_user_access(&question.quiz_id, user_id)
        .await
        .map_err(|e| e.surface(action.failure(), &context))?;
    if !allowed {
        log::warn!(
            "User {} attempted to {} unauthorized question {}",
            user_id,
            action.verb(),
            question_id
        );
        return Err(AppError::Unauthorized(format!(
            "Not authorized to {} this question",
            action.verb()
        )));
    }

    Ok(question)
}
