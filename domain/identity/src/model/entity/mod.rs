mod shift;
mod user;

#[rustfmt::skip]
pub use {
    shift::Shift,
    user::{Role, User},
};
