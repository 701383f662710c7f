//! HTTP query surface

pub mod handler;
pub mod server;

pub use server::HttpServer;
