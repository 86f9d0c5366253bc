//! UseCase: 接続受け入れ処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - AdmitConnectionUseCase::execute() メソッド
//! - 接続のレジストリ登録と、新しい接続だけに送る挨拶メッセージ
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規接続が登録され、"Hello" を 1 回だけ受け取る
//! - 異常系：同じ ID での二重登録
//! - エッジケース：既存の接続には挨拶が届かない

use std::sync::Arc;

use crate::{
    domain::{
        BroadcastMessage, Connection, ConnectionId, ConnectionRepository, Outbound, Timestamp,
    },
    infrastructure::dto::websocket::WireEvent,
};

use super::error::AdmitError;

/// 接続受け入れのユースケース
pub struct AdmitConnectionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ConnectionRepository>,
}

impl AdmitConnectionUseCase {
    /// 新しい AdmitConnectionUseCase を作成
    pub fn new(repository: Arc<dyn ConnectionRepository>) -> Self {
        Self { repository }
    }

    /// 接続受け入れを実行
    ///
    /// # Arguments
    ///
    /// * `id` - トランスポートが割り当てた接続 ID
    /// * `outbound` - ソケット書き込みタスクへのチャンネル
    ///
    /// # Returns
    ///
    /// * `Ok(ConnectionId)` - 登録された接続 ID
    /// * `Err(AdmitError)` - 登録失敗
    pub async fn execute(
        &self,
        id: ConnectionId,
        outbound: Outbound,
    ) -> Result<ConnectionId, AdmitError> {
        let connection = Connection::new(id, Timestamp::now(), outbound);

        // 1. レジストリに登録
        let id = self
            .repository
            .admit(connection.clone())
            .await
            .map_err(|e| {
                tracing::warn!("Failed to admit connection: {}", e);
                AdmitError::DuplicateConnectionId(connection.id.to_string())
            })?;

        // 2. 新しい接続だけに挨拶を送る（ブロードキャストではない）
        self.greet(&connection);

        Ok(id)
    }

    fn greet(&self, connection: &Connection) {
        let greeting = BroadcastMessage::greeting();
        let frame = match WireEvent::message(greeting.payload()).encode() {
            Ok(frame) => frame,
            Err(e) => {
                tracing::error!("Failed to encode greeting: {}", e);
                return;
            }
        };

        match connection.deliver(frame) {
            Ok(()) => tracing::debug!("Sent greeting to '{}'", connection.id),
            Err(e) => tracing::warn!("Failed to greet '{}': {}", connection.id, e),
        }
    }
}
