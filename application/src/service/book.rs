use error_stack::Report;

use kernel::interface::database::{
    DatabaseConnection, DependOnDatabaseConnection, DependOnQueryDatabaseConnection,
    QueryDatabaseConnection, Transaction,
};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Book, BookId, BookPublisher, BookTitle, LoanStatus};
use kernel::{KernelError, Reason};

use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, UpdateBookDto};

fn required_fields(
    title: String,
    publisher: String,
) -> error_stack::Result<(BookTitle, BookPublisher), KernelError> {
    if title.is_empty() || publisher.is_empty() {
        return Err(Report::new(KernelError::InvalidInput)
            .attach_printable(Reason::new("Title and publisher are required")));
    }
    Ok((BookTitle::new(title), BookPublisher::new(publisher)))
}

/// Fails when `title` belongs to a stored book other than `owner`.
async fn ensure_title_available<Connection, Query>(
    query: &Query,
    con: &mut Connection,
    title: &BookTitle,
    owner: Option<&BookId>,
) -> error_stack::Result<(), KernelError>
where
    Connection: Transaction,
    Query: BookQuery<Connection>,
{
    match query.find_by_title(con, title).await? {
        Some(holder) if Some(holder.id()) != owner => {
            Err(Report::new(KernelError::DuplicateTitle).attach_printable(format!(
                "title {:?} is held by book {}",
                title.as_ref(),
                holder.id().as_ref()
            )))
        }
        _ => Ok(()),
    }
}

fn book_not_found(id: &BookId) -> Report<KernelError> {
    Report::new(KernelError::NotFound)
        .attach_printable(format!("book {} does not exist", id.as_ref()))
}

#[async_trait::async_trait]
pub trait GetAllBookService<Connection: 'static + Send>:
    'static
    + Sync
    + Send
    + DependOnQueryDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
{
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.query_database_connection().connect().await?;

        let books = self.book_query().find_all(&mut connection).await?;

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<Connection: 'static + Send, T> GetAllBookService<Connection> for T where
    T: DependOnQueryDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateBookService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let (title, publisher) = required_fields(dto.title, dto.publisher)?;

        let mut connection = self.database_connection().transact().await?;
        ensure_title_available(self.book_query(), &mut connection, &title, None).await?;

        let id = self.book_modifier().issue_id(&mut connection).await?;
        let book = Book::new(id, title, publisher, LoanStatus::Available);
        self.book_modifier().create(&mut connection, &book).await?;
        connection.commit().await?;

        Ok(BookDto::from(book))
    }
}

impl<Connection: Transaction, T> CreateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateBookService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let (title, publisher) = required_fields(dto.title, dto.publisher)?;

        let id = dto.id.map(BookId::new).ok_or_else(|| {
            Report::new(KernelError::NotFound).attach_printable("book id is not an integer")
        })?;

        let mut connection = self.database_connection().transact().await?;
        let book = self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| book_not_found(&id))?;
        ensure_title_available(self.book_query(), &mut connection, &title, Some(&id)).await?;

        let book = book.revise(title, publisher);
        self.book_modifier().update(&mut connection, &book).await?;
        connection.commit().await?;

        Ok(BookDto::from(book))
    }
}

impl<Connection: Transaction, T> UpdateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteBookService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    /// Removes the book whatever its loan status.
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        if self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .is_none()
        {
            return Err(book_not_found(&id));
        }
        self.book_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<Connection: Transaction, T> DeleteBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}

#[cfg(test)]
mod test {
    use driver::database::InMemoryDatabase;
    use kernel::KernelError;

    use crate::service::{
        CreateBookService, DeleteBookService, GetAllBookService, LoanBookService,
        UpdateBookService,
    };
    use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, LoanBookDto, UpdateBookDto};

    fn create(title: &str, publisher: &str) -> CreateBookDto {
        CreateBookDto {
            title: title.to_string(),
            publisher: publisher.to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_list() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();

        let dune = db.create_book(create("Dune", "Ace")).await?;
        assert_eq!(
            dune,
            BookDto {
                id: 1,
                title: "Dune".to_string(),
                publisher: "Ace".to_string(),
                loaned: false,
            }
        );
        let emma = db.create_book(create("Emma", "Murray")).await?;
        assert_eq!(emma.id, 2);

        let all = db.get_all_books().await?;
        assert_eq!(all, vec![dune, emma]);
        Ok(())
    }

    #[tokio::test]
    async fn create_requires_title_and_publisher() {
        let db = InMemoryDatabase::new();

        for dto in [create("", "Ace"), create("Dune", ""), create("", "")] {
            let report = db.create_book(dto).await.unwrap_err();
            assert!(matches!(
                report.current_context(),
                KernelError::InvalidInput
            ));
        }
        assert!(db.get_all_books().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_duplicate_title() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        db.create_book(create("Dune", "Ace")).await?;

        let report = db.create_book(create("Dune", "Chilton")).await.unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::DuplicateTitle
        ));
        assert_eq!(db.get_all_books().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_keeps_id_and_loan() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let dune = db.create_book(create("Dune", "Ace")).await?;
        db.loan_book(LoanBookDto {
            title: "Dune".to_string(),
        })
        .await?;

        let updated = db
            .update_book(UpdateBookDto {
                id: Some(dune.id),
                title: "Dune Messiah".to_string(),
                publisher: "Putnam".to_string(),
            })
            .await?;
        assert_eq!(updated.id, dune.id);
        assert_eq!(updated.title, "Dune Messiah");
        assert_eq!(updated.publisher, "Putnam");
        assert!(updated.loaned);

        // Keeping its own title is not a conflict.
        let renamed = db
            .update_book(UpdateBookDto {
                id: Some(dune.id),
                title: "Dune Messiah".to_string(),
                publisher: "Gollancz".to_string(),
            })
            .await?;
        assert_eq!(renamed.publisher, "Gollancz");
        assert!(renamed.loaned);
        Ok(())
    }

    #[tokio::test]
    async fn whitespace_title_is_accepted() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();

        let blank = db.create_book(create("  ", "Ace")).await?;
        assert_eq!(blank.title, "  ");
        assert_eq!(db.get_all_books().await?, vec![blank]);
        Ok(())
    }

    #[tokio::test]
    async fn update_failures() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        db.create_book(create("Dune", "Ace")).await?;
        let emma = db.create_book(create("Emma", "Murray")).await?;

        let missing = db
            .update_book(UpdateBookDto {
                id: Some(999),
                title: "Dune".to_string(),
                publisher: "Ace".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(missing.current_context(), KernelError::NotFound));

        let unparsable = db
            .update_book(UpdateBookDto {
                id: None,
                title: "Dune".to_string(),
                publisher: "Ace".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            unparsable.current_context(),
            KernelError::NotFound
        ));

        // Missing fields are reported before the id is resolved.
        let unparsable_and_invalid = db
            .update_book(UpdateBookDto {
                id: None,
                title: "Dune".to_string(),
                publisher: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            unparsable_and_invalid.current_context(),
            KernelError::InvalidInput
        ));

        let invalid = db
            .update_book(UpdateBookDto {
                id: Some(emma.id),
                title: "Emma".to_string(),
                publisher: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            invalid.current_context(),
            KernelError::InvalidInput
        ));

        let taken = db
            .update_book(UpdateBookDto {
                id: Some(emma.id),
                title: "Dune".to_string(),
                publisher: "Murray".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            taken.current_context(),
            KernelError::DuplicateTitle
        ));
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_book() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let dune = db.create_book(create("Dune", "Ace")).await?;

        db.delete_book(DeleteBookDto { id: dune.id }).await?;
        assert!(db.get_all_books().await?.is_empty());

        let again = db
            .delete_book(DeleteBookDto { id: dune.id })
            .await
            .unwrap_err();
        assert!(matches!(again.current_context(), KernelError::NotFound));

        let update = db
            .update_book(UpdateBookDto {
                id: Some(dune.id),
                title: "Dune".to_string(),
                publisher: "Ace".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(update.current_context(), KernelError::NotFound));

        let next = db.create_book(create("Emma", "Murray")).await?;
        assert_eq!(next.id, 2);
        Ok(())
    }
}
