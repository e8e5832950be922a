use actix_web::web;

use crate::middleware::bearer_auth::BearerAuth;

pub mod auth;
pub mod health;
pub mod todos;

/// Wire all application routes.
///
/// Health and auth endpoints are public; everything under `/api/todos` sits
/// behind the bearer gate.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .service(web::scope("/api/auth").configure(auth::configure_routes))
        .service(
            web::scope("/api/todos")
                .wrap(BearerAuth)
                .configure(todos::configure_routes),
        );
}
