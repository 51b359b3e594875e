mod auth;
mod technician;
mod user;

#[rustfmt::skip]
pub use {
    auth::AuthService,
    technician::TechnicianService,
    user::UserService,
};
