mod session;
mod shift;
mod user;

#[rustfmt::skip]
pub use {
    session::SessionStore,
    shift::ShiftRepo,
    user::UserRepo,
};
