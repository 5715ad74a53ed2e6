use crate::KernelError;

/// Opens a read-write unit of work. Nothing becomes visible to other callers until
/// [`Transaction::commit`] runs.
#[async_trait::async_trait]
pub trait DatabaseConnection<Connection: Transaction>: 'static + Sync + Send {
    async fn transact(&self) -> error_stack::Result<Connection, KernelError>;
}

pub trait DependOnDatabaseConnection<Connection: Transaction>: 'static + Sync + Send {
    type DatabaseConnection: DatabaseConnection<Connection>;
    fn database_connection(&self) -> &Self::DatabaseConnection;
}

impl<Connection, T> DependOnDatabaseConnection<Connection> for T
where
    Connection: Transaction,
    T: DatabaseConnection<Connection>,
{
    type DatabaseConnection = T;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self
    }
}

/// Opens a read-only view. Readers may share it with each other but never with a writer.
#[async_trait::async_trait]
pub trait QueryDatabaseConnection<Connection: 'static + Send>: 'static + Sync + Send {
    async fn connect(&self) -> error_stack::Result<Connection, KernelError>;
}

pub trait DependOnQueryDatabaseConnection<Connection: 'static + Send>:
    'static + Sync + Send
{
    type QueryDatabaseConnection: QueryDatabaseConnection<Connection>;
    fn query_database_connection(&self) -> &Self::QueryDatabaseConnection;
}

impl<Connection, T> DependOnQueryDatabaseConnection<Connection> for T
where
    Connection: 'static + Send,
    T: QueryDatabaseConnection<Connection>,
{
    type QueryDatabaseConnection = T;
    fn query_database_connection(&self) -> &Self::QueryDatabaseConnection {
        self
    }
}

#[async_trait::async_trait]
pub trait Transaction: 'static + Sync + Send {
    async fn commit(self) -> error_stack::Result<(), KernelError>;
    async fn roll_back(self) -> error_stack::Result<(), KernelError>;
}
