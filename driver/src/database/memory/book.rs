use error_stack::Report;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookId, BookTitle};
use kernel::KernelError;

use crate::database::memory::{Catalog, InMemoryConnection, InMemoryTransaction};

pub struct InMemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery<InMemoryConnection> for InMemoryBookRepository {
    async fn find_all(
        &self,
        con: &mut InMemoryConnection,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(MemBookInternal::find_all(con.catalog()))
    }

    async fn find_by_id(
        &self,
        con: &mut InMemoryConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(MemBookInternal::find_by_id(con.catalog(), id))
    }

    async fn find_by_title(
        &self,
        con: &mut InMemoryConnection,
        title: &BookTitle,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(MemBookInternal::find_by_title(con.catalog(), title))
    }
}

#[async_trait::async_trait]
impl BookQuery<InMemoryTransaction> for InMemoryBookRepository {
    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(MemBookInternal::find_all(con.catalog()))
    }

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(MemBookInternal::find_by_id(con.catalog(), id))
    }

    async fn find_by_title(
        &self,
        con: &mut InMemoryTransaction,
        title: &BookTitle,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(MemBookInternal::find_by_title(con.catalog(), title))
    }
}

#[async_trait::async_trait]
impl BookModifier<InMemoryTransaction> for InMemoryBookRepository {
    async fn issue_id(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<BookId, KernelError> {
        MemBookInternal::issue_id(con.catalog_mut())
    }

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        MemBookInternal::create(con.catalog_mut(), book)
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        MemBookInternal::update(con.catalog_mut(), book)
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        MemBookInternal::delete(con.catalog_mut(), book_id)
    }
}

pub(in crate::database) struct MemBookInternal;

impl MemBookInternal {
    fn find_all(catalog: &Catalog) -> Vec<Book> {
        catalog.books.clone()
    }

    fn find_by_id(catalog: &Catalog, id: &BookId) -> Option<Book> {
        catalog.books.iter().find(|book| book.id() == id).cloned()
    }

    // First match wins; titles are kept unique by the services.
    fn find_by_title(catalog: &Catalog, title: &BookTitle) -> Option<Book> {
        catalog
            .books
            .iter()
            .find(|book| book.title() == title)
            .cloned()
    }

    fn position(catalog: &Catalog, id: &BookId) -> error_stack::Result<usize, KernelError> {
        catalog
            .books
            .iter()
            .position(|book| book.id() == id)
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("book {} does not exist", id.as_ref()))
            })
    }

    fn issue_id(catalog: &mut Catalog) -> error_stack::Result<BookId, KernelError> {
        let id = catalog.next_id;
        catalog.next_id = id.checked_add(1).ok_or_else(|| {
            Report::new(KernelError::Internal).attach_printable("book id space exhausted")
        })?;
        Ok(BookId::new(id))
    }

    fn create(catalog: &mut Catalog, book: &Book) -> error_stack::Result<(), KernelError> {
        if catalog.books.iter().any(|stored| stored.id() == book.id()) {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("book {} is already stored", book.id().as_ref())));
        }
        catalog.books.push(book.clone());
        Ok(())
    }

    fn update(catalog: &mut Catalog, book: &Book) -> error_stack::Result<(), KernelError> {
        let index = Self::position(catalog, book.id())?;
        catalog.books[index] = book.clone();
        Ok(())
    }

    fn delete(catalog: &mut Catalog, book_id: &BookId) -> error_stack::Result<(), KernelError> {
        let index = Self::position(catalog, book_id)?;
        catalog.books.remove(index);
        Ok(())
    }
}
