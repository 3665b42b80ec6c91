use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::ticket::{create_ticket, show_ticket, show_ticket_types};

pub fn build_ticket_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_ticket).post(create_ticket))
        .route("/types", get(show_ticket_types));

    Router::new().nest("/tickets", routers)
}
