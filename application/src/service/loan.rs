use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::BookTitle;
use kernel::KernelError;

use crate::transfer::{BookDto, LoanBookDto, ReturnBookDto};

fn title_not_found(title: &BookTitle) -> Report<KernelError> {
    Report::new(KernelError::NotFound)
        .attach_printable(format!("no book titled {:?}", title.as_ref()))
}

#[async_trait::async_trait]
pub trait LoanBookService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    async fn loan_book(&self, dto: LoanBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let title = BookTitle::new(dto.title);
        let book = self
            .book_query()
            .find_by_title(&mut connection, &title)
            .await?
            .ok_or_else(|| title_not_found(&title))?
            .loan()?;
        self.book_modifier().update(&mut connection, &book).await?;
        connection.commit().await?;

        Ok(BookDto::from(book))
    }
}

impl<Connection: Transaction, T> LoanBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait ReturnBookService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    async fn return_book(&self, dto: ReturnBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let title = BookTitle::new(dto.title);
        let book = self
            .book_query()
            .find_by_title(&mut connection, &title)
            .await?
            .ok_or_else(|| title_not_found(&title))?
            .return_loan()?;
        self.book_modifier().update(&mut connection, &book).await?;
        connection.commit().await?;

        Ok(BookDto::from(book))
    }
}

impl<Connection: Transaction, T> ReturnBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}
