use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{create_booking, show_booking, update_booking};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_booking).post(create_booking))
        .route("/:booking_id", put(update_booking));

    Router::new().nest("/booking", routers)
}
