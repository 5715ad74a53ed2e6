use crate::controller::{Intake, TryIntake};
use application::transfer::{CreateBookDto, DeleteBookDto, UpdateBookDto};
use error_stack::{Report, ResultExt};
use kernel::KernelError;
use serde::Deserialize;

// Absent and null fields both land on None; the application rejects them as empty.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBookRequest {
    title: Option<String>,
    publisher: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateBookRequest {
    title: Option<String>,
    publisher: Option<String>,
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: String,
}

impl DeleteBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

/// A path segment that is not an integer can never name a stored book.
fn parse_id(id: &str) -> error_stack::Result<i64, KernelError> {
    id.parse::<i64>()
        .change_context(KernelError::NotFound)
        .attach_printable_lazy(|| format!("`{id}` is not a book id"))
}

pub struct BookTransformer;

impl Intake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: CreateBookRequest) -> Self::To {
        CreateBookDto {
            title: input.title.unwrap_or_default(),
            publisher: input.publisher.unwrap_or_default(),
        }
    }
}

impl Intake<(String, UpdateBookRequest)> for BookTransformer {
    type To = UpdateBookDto;
    fn emit(&self, input: (String, UpdateBookRequest)) -> Self::To {
        let (id, input) = input;
        UpdateBookDto {
            id: id.parse().ok(),
            title: input.title.unwrap_or_default(),
            publisher: input.publisher.unwrap_or_default(),
        }
    }
}

impl TryIntake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: DeleteBookRequest) -> Result<Self::To, Self::Error> {
        Ok(DeleteBookDto {
            id: parse_id(&input.id)?,
        })
    }
}
