pub mod bot;
pub mod server;
