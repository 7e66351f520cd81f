//! Services orchestrating client lookups and mutations.

use crate::domain::client::{NewClient, UpdateClient};
use crate::domain::types::ClientId;
use crate::dto::client::ClientDto;
use crate::pagination::{Page, PageRequest};
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Non-positive ids can never have been assigned by the store.
fn parse_client_id(client_id: i32) -> ServiceResult<ClientId> {
    ClientId::new(client_id).map_err(|_| ServiceError::NotFound)
}

/// Fetches a single client by its identifier.
pub fn find_client_by_id<R>(repo: &R, client_id: i32) -> ServiceResult<ClientDto>
where
    R: ClientReader + ?Sized,
{
    let client_id = parse_client_id(client_id)?;

    repo.get_client_by_id(client_id)?
        .map(ClientDto::from)
        .ok_or(ServiceError::NotFound)
}

/// Returns every stored client without pagination.
pub fn find_all_clients<R>(repo: &R) -> ServiceResult<Vec<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    let (_total, clients) = repo.list_clients(ClientListQuery::new())?;

    Ok(clients.into_iter().map(ClientDto::from).collect())
}

/// Returns one page of the full client table.
pub fn find_all_clients_paged<R>(repo: &R, request: PageRequest) -> ServiceResult<Page<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    let (total, clients) = repo.list_clients(ClientListQuery::new().paginate(request))?;

    Ok(Page::new(clients, total, request).map(ClientDto::from))
}

/// Returns one page of clients whose income is at least `income`.
pub fn find_clients_by_income<R>(
    repo: &R,
    income: f64,
    request: PageRequest,
) -> ServiceResult<Page<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    if !income.is_finite() {
        return Err(ServiceError::InvalidInput(
            "income threshold must be a finite number".to_string(),
        ));
    }

    let query = ClientListQuery::new().min_income(income).paginate(request);
    let (total, clients) = repo.list_clients(query)?;

    Ok(Page::new(clients, total, request).map(ClientDto::from))
}

/// Returns clients with at least one dependent.
pub fn find_clients_with_children<R>(repo: &R) -> ServiceResult<Vec<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    let clients = repo.list_clients_with_children()?;

    Ok(clients.into_iter().map(ClientDto::from).collect())
}

/// Returns clients whose name matches `name` ignoring case.
pub fn find_clients_by_name<R>(repo: &R, name: &str) -> ServiceResult<Vec<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    let name = name.trim();
    if name.is_empty() {
        return Ok(Vec::new());
    }

    let clients = repo.find_clients_by_name(name)?;

    Ok(clients.into_iter().map(ClientDto::from).collect())
}

/// Stores a new client. Any id carried by `dto` is ignored.
pub fn insert_client<R>(repo: &R, dto: &ClientDto) -> ServiceResult<ClientDto>
where
    R: ClientWriter + ?Sized,
{
    let new_client = NewClient::from(dto);

    let client = repo.create_client(&new_client).map_err(|err| {
        log::error!("Failed to insert client: {err}");
        err
    })?;

    log::info!("Created client {}", client.id);

    Ok(client.into())
}

/// Replaces every mutable field of an existing client.
///
/// Existence is checked first; a missing client yields `NotFound` without any
/// write being issued.
pub fn update_client<R>(repo: &R, client_id: i32, dto: &ClientDto) -> ServiceResult<ClientDto>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let client_id = parse_client_id(client_id)?;

    if !repo.client_exists(client_id)? {
        return Err(ServiceError::NotFound);
    }

    let updates = UpdateClient::from(dto);
    let client = repo.update_client(client_id, &updates).map_err(|err| {
        log::error!("Failed to update client {client_id}: {err}");
        err
    })?;

    log::info!("Updated client {client_id}");

    Ok(client.into())
}

/// Deletes a client, surfacing the store's outcome.
pub fn delete_client<R>(repo: &R, client_id: i32) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    let client_id = parse_client_id(client_id)?;

    repo.delete_client(client_id).map_err(|err| {
        log::error!("Failed to delete client {client_id}: {err}");
        err
    })?;

    log::info!("Deleted client {client_id}");

    Ok(())
}
