use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    json_body, BookTransformer, CreateBookRequest, DeleteBookRequest, UpdateBookRequest,
};
use crate::response::BookPresenter;
use application::service::{
    CreateBookService, DeleteBookService, GetAllBookService, UpdateBookService,
};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::Router;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| async move { module.database().get_all_books().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(|State(module): State<AppModule>, body: Bytes| async move {
                let req = json_body::<CreateBookRequest>(&body)?;
                Controller::new(BookTransformer, BookPresenter)
                    .intake(req)
                    .handle(|dto| async move { module.database().create_book(dto).await })
                    .await
                    .map_err(ErrorStatus::from)
                    .map(|res| (StatusCode::CREATED, res))
            }),
        )
        .route(
            "/books/:id",
            put(
                |State(module): State<AppModule>,
                 Path(id): Path<String>,
                 body: Bytes| async move {
                    let req = json_body::<UpdateBookRequest>(&body)?;
                    Controller::new(BookTransformer, BookPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.database().update_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(DeleteBookRequest::new(id))
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| async move { module.database().delete_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
