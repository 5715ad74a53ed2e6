use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error_stack::Report;
use kernel::{KernelError, Reason};
use serde::Serialize;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl From<JsonRejection> for ErrorStatus {
    fn from(rejection: JsonRejection) -> Self {
        ErrorStatus(
            Report::new(KernelError::InvalidInput)
                .attach_printable(Reason::new(rejection.body_text())),
        )
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        let report = self.0;
        let context = report.current_context();
        let status = match context {
            KernelError::InvalidInput | KernelError::AlreadyLoaned | KernelError::NotLoaned => {
                StatusCode::BAD_REQUEST
            }
            KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::DuplicateTitle => StatusCode::CONFLICT,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match context {
            KernelError::InvalidInput => report
                .downcast_ref::<Reason>()
                .map_or_else(|| context.to_string(), ToString::to_string),
            KernelError::Internal => String::from("Internal server error"),
            _ => context.to_string(),
        };

        if status.is_server_error() {
            tracing::error!("{report:?}");
        } else {
            tracing::debug!("{report:?}");
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
