use std::str::FromStr;

use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        client::{Client, NewClient, UpdateClient},
        types::ClientId,
    },
    repository::errors::RepositoryResult,
};

pub mod client;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LINES_PER_PAGE: usize = 12;

/// Zero-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: DEFAULT_LINES_PER_PAGE,
        }
    }
}

/// Column a client listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Id,
    #[default]
    Name,
    Cpf,
    Income,
    BirthDate,
    Children,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "cpf" => Ok(Self::Cpf),
            "income" => Ok(Self::Income),
            "birthDate" => Ok(Self::BirthDate),
            "children" => Ok(Self::Children),
            other => Err(format!("unknown orderBy field: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(format!("unknown direction: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Row filter applied before sorting and paging.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientFilter {
    /// Income equal to the value.
    Income(f64),
    /// Income strictly greater than the value.
    IncomeGreaterThan(f64),
    /// CPF starting with the given text.
    CpfPrefix(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClientListQuery {
    pub filter: Option<ClientFilter>,
    pub sort: Sort,
    pub pagination: Pagination,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn income(mut self, income: f64) -> Self {
        self.filter = Some(ClientFilter::Income(income));
        self
    }

    pub fn income_greater_than(mut self, income: f64) -> Self {
        self.filter = Some(ClientFilter::IncomeGreaterThan(income));
        self
    }

    pub fn cpf_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.filter = Some(ClientFilter::CpfPrefix(prefix.into()));
        self
    }

    pub fn order_by(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort = Sort { field, direction };
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Pagination { page, per_page };
        self
    }
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    /// Returns the total number of matching rows and the requested page.
    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    /// Fails with [`errors::RepositoryError::NotFound`] when the id is unknown.
    fn update_client(&self, client_id: ClientId, updates: &UpdateClient)
    -> RepositoryResult<Client>;
    /// Fails with [`errors::RepositoryError::NotFound`] when the id is unknown.
    fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()>;
}

/// Diesel-backed repository shared by all handlers.
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
