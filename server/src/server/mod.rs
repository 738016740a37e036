//! Server construction and route wiring.
//!
//! The routing table is assembled here once per worker from state built at
//! startup; nothing registers routes anywhere else.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::booking::{
    assign_to_route, book_cargo, change_destination, list_cargos, list_locations, load_cargo,
    request_routes,
};
use crate::inbound::http::error::{json_config, path_config};
use crate::inbound::http::handling::register_incident;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;

/// Assemble the application from the shared state bundles.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let booking = web::scope("/booking/v1")
        .service(book_cargo)
        .service(list_cargos)
        .service(load_cargo)
        .service(request_routes)
        .service(assign_to_route)
        .service(change_destination)
        .service(list_locations);
    let handling = web::scope("/handling/v1").service(register_incident);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(path_config())
        .wrap(Trace);

    // Docs must register ahead of the booking scope: a scope swallows every
    // request under its prefix.
    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/booking/v1/docs/{_:.*}")
            .url("/booking/v1/docs/openapi.json", ApiDoc::openapi()),
    );

    app.service(booking)
        .service(handling)
        .service(ready)
        .service(live)
}

/// Construct an HTTP server serving the booking and handling APIs.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: HttpState,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let state = web::Data::new(http_state);
    let server = HttpServer::new(move || build_app(server_health_state.clone(), state.clone()))
        .bind(config.bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}
