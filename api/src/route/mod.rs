pub mod auth;
pub mod booking;
pub mod enrollment;
pub mod health;
pub mod hotel;
pub mod payment;
pub mod ticket;
pub mod user;

use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(health::build_health_check_routers())
        .merge(user::build_user_routers())
        .merge(auth::build_auth_routers())
        .merge(enrollment::build_enrollment_routers())
        .merge(ticket::build_ticket_routers())
        .merge(hotel::build_hotel_routers())
        .merge(booking::build_booking_routers())
        .merge(payment::build_payment_routers())
}
