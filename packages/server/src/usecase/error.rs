//! UseCase 層のエラー定義

use thiserror::Error;

/// 接続受け入れ時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdmitError {
    /// 同じ ID の接続がすでに存在する
    #[error("Connection '{0}' is already registered")]
    DuplicateConnectionId(String),
}

/// ブロードキャスト時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BroadcastError {
    /// 送信者がレジストリに存在しない
    #[error("Sender '{0}' is not a registered connection")]
    UnknownSender(String),

    /// フレームのエンコードに失敗した
    #[error("Failed to encode broadcast frame: {0}")]
    Encode(String),
}
