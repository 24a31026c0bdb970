use crate::predict_api::model::{ErrorDetail, Sentence};
use crate::predict_api::server_api::Predictor;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};

pub async fn predict_handler(
    predictor: web::Data<Predictor>,
    body: web::Json<Sentence>,
) -> HttpResponse {
    predictor.respond(&body.sentence).await
}

pub async fn health_handler(predictor: web::Data<Predictor>) -> HttpResponse {
    HttpResponse::Ok().json(predictor.health())
}

/// Ошибки разбора тела запроса отдаем как 422 (слишком большое тело как 413), а не 500
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("rejected body for {}: {err}", req.path());
    let detail = ErrorDetail {
        detail: err.to_string(),
    };
    let response = match err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            HttpResponse::PayloadTooLarge().json(detail)
        }
        _ => HttpResponse::UnprocessableEntity().json(detail),
    };
    InternalError::from_response(err, response).into()
}
