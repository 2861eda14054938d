use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::{CpfParams, IncomeParams, PageParams};
use crate::forms::client::ClientForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::client as client_service;

#[get("/clients")]
pub async fn list_clients(
    req: HttpRequest,
    params: web::Query<PageParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::list_clients(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, req.path()),
    }
}

#[get("/clients/income")]
pub async fn find_by_income(
    req: HttpRequest,
    filter: web::Query<IncomeParams>,
    params: web::Query<PageParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::find_by_income(repo.get_ref(), filter.income, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, req.path()),
    }
}

#[get("/clients/incomeGreaterThan")]
pub async fn find_by_income_greater_than(
    req: HttpRequest,
    filter: web::Query<IncomeParams>,
    params: web::Query<PageParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::find_by_income_greater_than(
        repo.get_ref(),
        filter.income,
        params.into_inner(),
    ) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, req.path()),
    }
}

#[get("/clients/cpf")]
pub async fn find_by_cpf(
    req: HttpRequest,
    filter: web::Query<CpfParams>,
    params: web::Query<PageParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::find_by_cpf(repo.get_ref(), &filter.cpf, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, req.path()),
    }
}

#[get("/clients/id/{client_id}")]
pub async fn show_client(
    req: HttpRequest,
    client_id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::get_client(repo.get_ref(), client_id.into_inner()) {
        Ok(client) => HttpResponse::Ok().json(client),
        Err(err) => error_response(err, req.path()),
    }
}

#[post("/clients")]
pub async fn create_client(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ClientForm>,
) -> impl Responder {
    match client_service::create_client(repo.get_ref(), form) {
        Ok(client) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/clients/id/{}", client.id)))
            .json(client),
        Err(err) => error_response(err, req.path()),
    }
}

#[put("/clients/{client_id}")]
pub async fn update_client(
    req: HttpRequest,
    client_id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ClientForm>,
) -> impl Responder {
    match client_service::update_client(repo.get_ref(), client_id.into_inner(), form) {
        Ok(client) => HttpResponse::Ok().json(client),
        Err(err) => error_response(err, req.path()),
    }
}

#[delete("/clients/{client_id}")]
pub async fn delete_client(
    req: HttpRequest,
    client_id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::delete_client(repo.get_ref(), client_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, req.path()),
    }
}
