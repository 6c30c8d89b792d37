pub mod models;
pub mod request;

pub use request::{ActivationParams, build_activation_request};
