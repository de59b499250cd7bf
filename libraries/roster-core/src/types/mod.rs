//! Domain types for the user directory

mod ids;
mod user;

pub use ids::UserId;
pub use user::User;
