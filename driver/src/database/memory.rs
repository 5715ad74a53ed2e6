use std::sync::Arc;

use tokio::sync::{OwnedRwLockReadGuard, OwnedRwLockWriteGuard, RwLock};

use kernel::interface::database::{DatabaseConnection, QueryDatabaseConnection, Transaction};
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::update::DependOnBookModifier;
use kernel::prelude::entity::Book;
use kernel::KernelError;

pub use self::book::*;

mod book;

#[derive(Debug, Clone)]
pub(in crate::database) struct Catalog {
    books: Vec<Book>,
    next_id: i64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }
}

/// Process-wide book store. Clones share the same catalog.
///
/// Writers go through [`InMemoryTransaction`], which holds the write lock for its whole
/// lifetime and edits a private copy that is published only on commit. Readers go through
/// [`InMemoryConnection`] and share the read lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct InMemoryConnection {
    catalog: OwnedRwLockReadGuard<Catalog>,
}

impl InMemoryConnection {
    pub(in crate::database) fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

pub struct InMemoryTransaction {
    published: OwnedRwLockWriteGuard<Catalog>,
    working: Catalog,
}

impl InMemoryTransaction {
    pub(in crate::database) fn catalog(&self) -> &Catalog {
        &self.working
    }

    pub(in crate::database) fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.working
    }
}

#[async_trait::async_trait]
impl QueryDatabaseConnection<InMemoryConnection> for InMemoryDatabase {
    async fn connect(&self) -> error_stack::Result<InMemoryConnection, KernelError> {
        let catalog = Arc::clone(&self.catalog).read_owned().await;
        Ok(InMemoryConnection { catalog })
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<InMemoryTransaction> for InMemoryDatabase {
    async fn transact(&self) -> error_stack::Result<InMemoryTransaction, KernelError> {
        let published = Arc::clone(&self.catalog).write_owned().await;
        let working = Catalog::clone(&published);
        Ok(InMemoryTransaction { published, working })
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        let Self {
            mut published,
            working,
        } = self;
        *published = working;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        drop(self);
        Ok(())
    }
}

impl DependOnBookQuery<InMemoryConnection> for InMemoryDatabase {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &InMemoryBookRepository
    }
}

impl DependOnBookQuery<InMemoryTransaction> for InMemoryDatabase {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &InMemoryBookRepository
    }
}

impl DependOnBookModifier<InMemoryTransaction> for InMemoryDatabase {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &InMemoryBookRepository
    }
}
