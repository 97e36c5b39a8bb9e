#![allow(non_snake_case)]

pub mod middleware;
pub mod routes;

use axum::Router;

pub fn api_router() -> Router {
    routes::api_routes()
}
