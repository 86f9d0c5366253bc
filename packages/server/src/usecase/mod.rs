//! UseCase 層
//!
//! リレーのビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層（接続レジストリ）を操作します。

pub mod admit_connection;
pub mod broadcast_message;
pub mod error;
pub mod remove_connection;

pub use admit_connection::AdmitConnectionUseCase;
pub use broadcast_message::{BroadcastMessageUseCase, BroadcastPolicy, BroadcastReport};
pub use error::{AdmitError, BroadcastError};
pub use remove_connection::RemoveConnectionUseCase;
