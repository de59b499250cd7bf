/// API route modules
pub mod calculate;
pub mod health;
pub mod home;
pub mod status;
pub mod users;
pub mod version;
