use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{json_body, LoanRequest, LoanTransformer, ReturnRequest};
use crate::response::{LoanPresenter, ReturnPresenter};
use application::service::{LoanBookService, ReturnBookService};
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::Router;

pub trait LoanRouter {
    fn route_loan(self) -> Self;
}

impl LoanRouter for Router<AppModule> {
    fn route_loan(self) -> Self {
        self.route(
            "/loans",
            post(|State(module): State<AppModule>, body: Bytes| async move {
                let req = json_body::<LoanRequest>(&body)?;
                Controller::new(LoanTransformer, LoanPresenter)
                    .intake(req)
                    .handle(|dto| async move { module.database().loan_book(dto).await })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/returns",
            post(|State(module): State<AppModule>, body: Bytes| async move {
                let req = json_body::<ReturnRequest>(&body)?;
                Controller::new(LoanTransformer, ReturnPresenter)
                    .intake(req)
                    .handle(|dto| async move { module.database().return_book(dto).await })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
