//! HTTP handlers.

pub mod front;
pub mod health;

pub use front::front_controller;
pub use health::health_handler;
