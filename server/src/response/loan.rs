use crate::controller::Exhaust;
use crate::response::BookResponse;
use application::transfer::BookDto;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoanResponse {
    message: &'static str,
    book: BookResponse,
}

impl IntoResponse for LoanResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct LoanPresenter;

impl Exhaust<BookDto> for LoanPresenter {
    type To = LoanResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        LoanResponse {
            message: "Book loaned successfully!",
            book: BookResponse::from(input),
        }
    }
}

pub struct ReturnPresenter;

impl Exhaust<BookDto> for ReturnPresenter {
    type To = LoanResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        LoanResponse {
            message: "Book returned successfully!",
            book: BookResponse::from(input),
        }
    }
}
