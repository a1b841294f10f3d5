//! Pure data structures produced by the [`UserFactory`](crate::user_factory::UserFactory).

pub mod user;

pub use user::*;
