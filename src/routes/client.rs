use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;
use validator::Validate;

use crate::dto::client::ClientDto;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{PageParams, error_response};
use crate::services::{ServiceError, client as client_service};

#[derive(Debug, Deserialize)]
pub struct IncomeParams {
    pub income: f64,
    pub page: Option<usize>,
    pub size: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: String,
}

fn validate_payload(dto: &ClientDto) -> Result<(), ServiceError> {
    dto.validate()
        .map_err(|e| ServiceError::InvalidInput(e.to_string()))
}

#[get("/clients")]
pub async fn list_clients_paged(
    req: HttpRequest,
    params: web::Query<PageParams>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let result = params
        .into_inner()
        .into_request(server_config.default_page_size)
        .and_then(|request| client_service::find_all_clients_paged(repo.get_ref(), request));

    match result {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(&err, &req),
    }
}

#[get("/clients/findAll")]
pub async fn list_all_clients(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::find_all_clients(repo.get_ref()) {
        Ok(clients) => HttpResponse::Ok().json(clients),
        Err(err) => error_response(&err, &req),
    }
}

#[get("/clients/income")]
pub async fn list_clients_by_income(
    req: HttpRequest,
    params: web::Query<IncomeParams>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let IncomeParams { income, page, size } = params.into_inner();

    let result = PageParams { page, size }
        .into_request(server_config.default_page_size)
        .and_then(|request| {
            client_service::find_clients_by_income(repo.get_ref(), income, request)
        });

    match result {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(&err, &req),
    }
}

#[get("/clients/children")]
pub async fn list_clients_with_children(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::find_clients_with_children(repo.get_ref()) {
        Ok(clients) => HttpResponse::Ok().json(clients),
        Err(err) => error_response(&err, &req),
    }
}

#[get("/clients/search")]
pub async fn search_clients_by_name(
    req: HttpRequest,
    params: web::Query<SearchParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::find_clients_by_name(repo.get_ref(), &params.name) {
        Ok(clients) => HttpResponse::Ok().json(clients),
        Err(err) => error_response(&err, &req),
    }
}

#[get("/clients/{client_id}")]
pub async fn show_client(
    req: HttpRequest,
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::find_client_by_id(repo.get_ref(), client_id.into_inner()) {
        Ok(client) => HttpResponse::Ok().json(client),
        Err(err) => error_response(&err, &req),
    }
}

#[post("/clients")]
pub async fn create_client(
    req: HttpRequest,
    web::Json(dto): web::Json<ClientDto>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let result = validate_payload(&dto)
        .and_then(|()| client_service::insert_client(repo.get_ref(), &dto));

    match result {
        Ok(client) => {
            let location = match client.id {
                Some(id) => format!("/clients/{id}"),
                None => "/clients".to_string(),
            };
            HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(client)
        }
        Err(err) => error_response(&err, &req),
    }
}

#[put("/clients/{client_id}")]
pub async fn update_client(
    req: HttpRequest,
    client_id: web::Path<i32>,
    web::Json(dto): web::Json<ClientDto>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let result = validate_payload(&dto).and_then(|()| {
        client_service::update_client(repo.get_ref(), client_id.into_inner(), &dto)
    });

    match result {
        Ok(client) => HttpResponse::Ok().json(client),
        Err(err) => error_response(&err, &req),
    }
}

#[delete("/clients/{client_id}")]
pub async fn delete_client(
    req: HttpRequest,
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::delete_client(repo.get_ref(), client_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&err, &req),
    }
}
