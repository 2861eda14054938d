//! Client resource operations.

use crate::domain::client::{NewClient, UpdateClient};
use crate::domain::types::ClientId;
use crate::dto::api::PageParams;
use crate::dto::client::ClientDto;
use crate::forms::client::ClientForm;
use crate::pagination::Page;
use crate::repository::{
    ClientListQuery, ClientReader, ClientWriter, DEFAULT_LINES_PER_PAGE, SortDirection, SortField,
};
use crate::services::{ServiceError, ServiceResult};

/// Applies paging/ordering parameters to `query`, rejecting unknown values.
fn apply_page_params(query: ClientListQuery, params: PageParams) -> ServiceResult<ClientListQuery> {
    let page = params.page.unwrap_or(0);
    let per_page = params.lines_per_page.unwrap_or(DEFAULT_LINES_PER_PAGE);
    if per_page == 0 {
        return Err(ServiceError::BadRequest(
            "linesPerPage must be greater than zero".to_string(),
        ));
    }

    let field = match params.order_by.as_deref() {
        Some(raw) => raw.parse::<SortField>().map_err(ServiceError::BadRequest)?,
        None => SortField::default(),
    };
    let direction = match params.direction.as_deref() {
        Some(raw) => raw.parse::<SortDirection>().map_err(ServiceError::BadRequest)?,
        None => SortDirection::default(),
    };

    Ok(query.order_by(field, direction).paginate(page, per_page))
}

fn finite(income: f64) -> ServiceResult<f64> {
    if income.is_finite() {
        Ok(income)
    } else {
        Err(ServiceError::BadRequest(
            "income must be a finite number".to_string(),
        ))
    }
}

fn load_page<R>(repo: &R, query: ClientListQuery) -> ServiceResult<Page<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    let pagination = query.pagination;
    let (total, clients) = repo.list_clients(query).map_err(|err| {
        log::error!("Failed to list clients: {err}");
        err
    })?;

    Ok(Page::new(clients, pagination.page, pagination.per_page, total).map(ClientDto::from))
}

/// Lists all clients, one page at a time.
pub fn list_clients<R>(repo: &R, params: PageParams) -> ServiceResult<Page<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    let query = apply_page_params(ClientListQuery::new(), params)?;
    load_page(repo, query)
}

/// Lists clients whose income equals `income` exactly.
pub fn find_by_income<R>(
    repo: &R,
    income: f64,
    params: PageParams,
) -> ServiceResult<Page<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    let query = apply_page_params(ClientListQuery::new().income(finite(income)?), params)?;
    load_page(repo, query)
}

/// Lists clients whose income is strictly greater than `income`.
pub fn find_by_income_greater_than<R>(
    repo: &R,
    income: f64,
    params: PageParams,
) -> ServiceResult<Page<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    let query = apply_page_params(
        ClientListQuery::new().income_greater_than(finite(income)?),
        params,
    )?;
    load_page(repo, query)
}

/// Lists clients whose CPF starts with `prefix`.
pub fn find_by_cpf<R>(repo: &R, prefix: &str, params: PageParams) -> ServiceResult<Page<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    let query = apply_page_params(ClientListQuery::new().cpf_prefix(prefix.trim()), params)?;
    load_page(repo, query)
}

/// Fetches a single client.
pub fn get_client<R>(repo: &R, client_id: i64) -> ServiceResult<ClientDto>
where
    R: ClientReader + ?Sized,
{
    let client_id = ClientId::try_from(client_id)?;

    match repo.get_client_by_id(client_id) {
        Ok(Some(client)) => Ok(client.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(err) => {
            log::error!("Failed to get client {client_id}: {err}");
            Err(err.into())
        }
    }
}

/// Validates the payload and inserts a new client.
pub fn create_client<R>(repo: &R, form: ClientForm) -> ServiceResult<ClientDto>
where
    R: ClientWriter + ?Sized,
{
    let new_client = NewClient::try_from(form)?;

    let client = repo.create_client(&new_client).map_err(|err| {
        log::error!("Failed to create client: {err}");
        err
    })?;

    log::info!("Created client {}", client.id);
    Ok(client.into())
}

/// Replaces every mutable field of an existing client.
pub fn update_client<R>(repo: &R, client_id: i64, form: ClientForm) -> ServiceResult<ClientDto>
where
    R: ClientWriter + ?Sized,
{
    let client_id = ClientId::try_from(client_id)?;
    let updates = UpdateClient::try_from(form)?;

    let client = repo
        .update_client(client_id, &updates)
        .map_err(ServiceError::from)
        .inspect_err(|err| {
            if !matches!(err, ServiceError::NotFound) {
                log::error!("Failed to update client {client_id}: {err}");
            }
        })?;

    Ok(client.into())
}

/// Removes a client permanently.
pub fn delete_client<R>(repo: &R, client_id: i64) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    let client_id = ClientId::try_from(client_id)?;

    repo.delete_client(client_id)
        .map_err(ServiceError::from)
        .inspect_err(|err| {
            if !matches!(err, ServiceError::NotFound) {
                log::error!("Failed to delete client {client_id}: {err}");
            }
        })?;

    log::info!("Deleted client {client_id}");
    Ok(())
}
