use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::payment::{process_payment, show_payment};

pub fn build_payment_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_payment))
        .route("/process", post(process_payment));

    Router::new().nest("/payments", routers)
}
