mod class_use_cases;
pub mod domain;
pub mod ports;
pub mod services;

pub use class_use_cases::ClassUseCases;
