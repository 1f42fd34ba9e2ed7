//! The flat error taxonomy of the HTTP API.
//!
//! Every variant renders as `{"error": "<message>"}`. Datastore messages are
//! passed through verbatim; webhook rejections keep the destination's status.

use crate::store::StoreError;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use common::form::FormError;
use common::requests::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("로그인이 필요합니다.")]
    Unauthenticated,

    #[error("이메일 또는 비밀번호가 올바르지 않습니다.")]
    InvalidCredentials,

    #[error("어드민 권한이 없습니다.")]
    Forbidden,

    #[error("요청한 API를 찾을 수 없습니다.")]
    NotFound,

    #[error("{0}")]
    Configuration(String),

    /// The webhook answered with a non-2xx status.
    #[error("Slack 알림 전송 실패")]
    Webhook { status: u16 },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Store(#[from] StoreError),
}

impl From<FormError> for ApiError {
    fn from(e: FormError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Webhook { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Configuration(_) | ApiError::Transport(_) | ApiError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// JSON extractor configuration: malformed bodies are answered in the same
/// `{"error"}` shape as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            let body = ErrorResponse {
                error: err.to_string(),
            };
            InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_taxonomy() {
        assert_eq!(
            ApiError::from(FormError::MissingConsent).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthenticated.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Webhook { status: 404 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Webhook { status: 42 }.status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::Configuration("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_messages_are_passed_through() {
        let err = ApiError::from(StoreError::Blocking("pool gone".into()));
        assert_eq!(err.to_string(), "datastore worker failed: pool gone");
    }
}
