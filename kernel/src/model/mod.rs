pub mod auth;
pub mod booking;
pub mod enrollment;
pub mod hotel;
pub mod id;
pub mod payment;
pub mod ticket;
pub mod user;
