pub mod session;

use axum::Router;

pub fn api_routes() -> Router {
    Router::new().merge(session::routes())
}
