use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::types::ClientId;
use crate::pagination::PageRequest;
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Diesel-backed repository shared by every request handler.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Filter and paging options for [`ClientReader::list_clients`].
#[derive(Debug, Clone, Default)]
pub struct ClientListQuery {
    /// Only clients whose income is greater than or equal to this value.
    pub min_income: Option<f64>,
    pub pagination: Option<PageRequest>,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_income(mut self, income: f64) -> Self {
        self.min_income = Some(income);
        self
    }

    pub fn paginate(mut self, request: PageRequest) -> Self {
        self.pagination = Some(request);
        self
    }
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    fn client_exists(&self, id: ClientId) -> RepositoryResult<bool>;
    /// Returns the total number of matching clients along with the requested
    /// slice, ordered by id. Results never contain the same client twice.
    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
    fn list_clients_with_children(&self) -> RepositoryResult<Vec<Client>>;
    fn find_clients_by_name(&self, name: &str) -> RepositoryResult<Vec<Client>>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    /// Overwrites every mutable column. Fails with `NotFound` when no row
    /// matches `client_id`.
    fn update_client(&self, client_id: ClientId, updates: &UpdateClient)
    -> RepositoryResult<Client>;
    /// Fails with `NotFound` when no row was removed and with
    /// `ForeignKeyViolation` when other rows still reference the client.
    fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()>;
}
