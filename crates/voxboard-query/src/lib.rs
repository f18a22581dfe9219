// voxboard-query: Async Rust client for the TeamSpeak 3 ServerQuery admin protocol

pub mod client;
pub mod error;
pub mod escape;
pub mod models;
pub mod wire;

pub use client::QueryClient;
pub use error::Error;
pub use models::{Channel, ClientInfo, OnlineClient, ServerInfo};
