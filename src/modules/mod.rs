pub mod activation;
pub mod auth;
pub mod class;
pub mod email;
pub mod lesson;
pub mod question;
pub mod set;
