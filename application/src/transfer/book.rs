use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub publisher: String,
    pub loaned: bool,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            publisher,
            loan_status,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            publisher: publisher.into(),
            loaned: loan_status.into(),
        }
    }
}

pub struct CreateBookDto {
    pub title: String,
    pub publisher: String,
}

pub struct UpdateBookDto {
    /// `None` when the caller's id is not an integer; such an id names no book.
    pub id: Option<i64>,
    pub title: String,
    pub publisher: String,
}

pub struct DeleteBookDto {
    pub id: i64,
}
