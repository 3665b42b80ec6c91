use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    InvalidData(String),
    #[error(transparent)]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    ForbiddenOperation(String),
    #[error("{0}")]
    FullRoom(String),
    #[error("{0}")]
    PaymentRequired(String),
    #[error("{0}")]
    UnauthorizedOperation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("ログインが必要です。")]
    UnauthenticatedError,
    #[error("トランザクションを実行できませんでした。")]
    TransactionError(#[source] sqlx::Error),
    #[error("データベース処理実行中にエラーが発生しました。")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("No rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error(transparent)]
    HashingError(#[from] bcrypt::BcryptError),
}

impl AppError {
    // エラーの種類を表す名前。レスポンスボディに載せてクライアントが判別できるようにする
    pub fn name(&self) -> &'static str {
        match self {
            AppError::EntityNotFound(_) => "NotFoundError",
            AppError::InvalidData(_) | AppError::ValidationError(_) => "InvalidDataError",
            AppError::ForbiddenOperation(_) => "ForbiddenError",
            AppError::FullRoom(_) => "FullRoomError",
            AppError::PaymentRequired(_) => "PaymentRequired",
            AppError::UnauthorizedOperation(_) | AppError::UnauthenticatedError => {
                "UnauthorizedError"
            }
            AppError::Conflict(_) => "ConflictError",
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::ConversionEntityError(_)
            | AppError::HashingError(_) => "InternalServerError",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidData(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ForbiddenOperation(_) | AppError::FullRoom(_) => StatusCode::FORBIDDEN,
            AppError::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            AppError::UnauthorizedOperation(_) | AppError::UnauthenticatedError => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::ConversionEntityError(_)
            | AppError::HashingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // 予約系のエンドポイントでは、チケット未払いも 403 として返す
    pub fn forbid_payment_required(self) -> Self {
        match self {
            AppError::PaymentRequired(msg) => AppError::ForbiddenOperation(msg),
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
            // 内部エラーの詳細はクライアントに返さない
            return status_code.into_response();
        }

        let body = ErrorBody {
            name: self.name(),
            message: self.to_string(),
        };
        (status_code, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidData(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidData(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidData(rejection.body_text())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorBody {
    name: &'static str,
    message: String,
}
