mod otp_generator_rand;
mod otp_repository_postgres;
pub mod sea_orm_entity;

pub use otp_generator_rand::OsRngOtpGenerator;
pub use otp_repository_postgres::OtpRepositoryPostgres;
