mod auth;
mod technician;
mod token;
mod user;

#[rustfmt::skip]
pub use {
    auth::{hash_password, verify_password, AuthServiceImpl},
    technician::TechnicianServiceImpl,
    token::TokenSettings,
    user::UserServiceImpl,
};
