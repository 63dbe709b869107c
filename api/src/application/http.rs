pub mod health;
pub mod plan;
pub mod server;
