pub mod ports;
pub mod services;
mod set_use_cases;

pub use set_use_cases::SetUseCases;
