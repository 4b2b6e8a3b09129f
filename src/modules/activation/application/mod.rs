pub mod domain;
pub mod ports;
pub mod services;
mod activation_use_cases;

pub use activation_use_cases::ActivationUseCases;
