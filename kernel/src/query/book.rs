use crate::entity::{Book, BookId, BookTitle};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookQuery<Connection: 'static + Send>: Sync + Send + 'static {
    /// Every stored book, in insertion order.
    async fn find_all(&self, con: &mut Connection) -> error_stack::Result<Vec<Book>, KernelError>;
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError>;
    async fn find_by_title(
        &self,
        con: &mut Connection,
        title: &BookTitle,
    ) -> error_stack::Result<Option<Book>, KernelError>;
}

pub trait DependOnBookQuery<Connection: 'static + Send>: Sync + Send + 'static {
    type BookQuery: BookQuery<Connection>;
    fn book_query(&self) -> &Self::BookQuery;
}
