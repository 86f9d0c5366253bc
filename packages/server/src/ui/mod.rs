//! UI 層：HTTP / WebSocket のエンドポイントとサーバーの起動処理

mod handler;
mod router;
mod runner;
mod signal;
pub mod state;

pub use router::create_app;
pub use runner::{run, serve};
