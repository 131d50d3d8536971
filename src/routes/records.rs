use actix_web::{web, HttpResponse, Responder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use validator::Validate;

use crate::models::{ErrorResponse, Opportunity, Team};
use crate::routes::matches::{validation_failed, AppState};
use crate::services::{Record, Store, StoreError};

/// Records exposed over the CRUD routes
pub trait Resource: Record + Validate + Serialize + DeserializeOwned {
    const KIND: &'static str;

    fn store(state: &AppState) -> &Arc<dyn Store<Self>>;
}

impl Resource for Team {
    const KIND: &'static str = "team";

    fn store(state: &AppState) -> &Arc<dyn Store<Self>> {
        &state.teams
    }
}

impl Resource for Opportunity {
    const KIND: &'static str = "opportunity";

    fn store(state: &AppState) -> &Arc<dyn Store<Self>> {
        &state.opportunities
    }
}

/// Configure CRUD routes for teams and opportunities
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .service(resource_scope::<Team>("/teams"))
        .service(resource_scope::<Opportunity>("/opportunities"));
}

fn resource_scope<T: Resource>(path: &str) -> actix_web::Scope {
    web::scope(path)
        .route("", web::get().to(list::<T>))
        .route("", web::post().to(create::<T>))
        .route("/{id}", web::get().to(fetch::<T>))
        .route("/{id}", web::put().to(update::<T>))
        .route("/{id}", web::delete().to(remove::<T>))
}

fn store_error(kind: &str, err: StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound(_) => {
            HttpResponse::NotFound().json(ErrorResponse::new(format!("{} not found", kind), err.to_string(), 404))
        }
        StoreError::AlreadyExists(_) => {
            HttpResponse::Conflict().json(ErrorResponse::new(format!("{} already exists", kind), err.to_string(), 409))
        }
    }
}

async fn list<T: Resource>(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(T::store(&state).list().await)
}

async fn fetch<T: Resource>(state: web::Data<AppState>, id: web::Path<String>) -> impl Responder {
    match T::store(&state).get(&id).await {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => store_error(T::KIND, e),
    }
}

async fn create<T: Resource>(state: web::Data<AppState>, body: web::Json<T>) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed(errors);
    }

    match T::store(&state).add(body.into_inner()).await {
        Ok(record) => {
            tracing::info!("Created {} {}", T::KIND, record.id());
            HttpResponse::Created().json(record)
        }
        Err(e) => store_error(T::KIND, e),
    }
}

async fn update<T: Resource>(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<T>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed(errors);
    }

    match T::store(&state).update(&id, body.into_inner()).await {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => store_error(T::KIND, e),
    }
}

async fn remove<T: Resource>(state: web::Data<AppState>, id: web::Path<String>) -> impl Responder {
    match T::store(&state).delete(&id).await {
        Ok(()) => {
            tracing::info!("Deleted {} {}", T::KIND, id.as_str());
            HttpResponse::NoContent().finish()
        }
        Err(e) => store_error(T::KIND, e),
    }
}
