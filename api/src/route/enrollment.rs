use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::enrollment::{show_enrollment, upsert_enrollment};

pub fn build_enrollment_routers() -> Router<AppRegistry> {
    Router::new().route(
        "/enrollments",
        get(show_enrollment).post(upsert_enrollment),
    )
}
