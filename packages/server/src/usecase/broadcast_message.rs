//! UseCase: メッセージのブロードキャスト処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - BroadcastMessageUseCase::execute() メソッド
//! - 送信者を含む全接続への配信（自分自身へのエコーは仕様どおりの動作）
//! - 1 件の配信失敗が他の接続への配信を止めないこと
//!
//! ### どのような状況を想定しているか
//! - 正常系：全接続が "<送信者 ID>: <本文>" を 1 回ずつ受け取る
//! - 異常系：登録されていない送信者
//! - エッジケース：スナップショット取得後に切断された接続（配信されず、エラーにもならない）
//! - エッジケース：書き込みタスクが終了した接続

use std::sync::Arc;

use crate::{
    domain::{BroadcastMessage, ConnectionId, ConnectionRepository},
    infrastructure::dto::websocket::WireEvent,
};

use super::error::BroadcastError;

/// 配信対象の選び方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BroadcastPolicy {
    /// 送信者自身にも配信するか
    pub include_sender: bool,
}

impl BroadcastPolicy {
    /// リレーの既定ポリシー：送信者を含む全接続に配信する
    pub const ALL_CONNECTIONS: Self = Self {
        include_sender: true,
    };
}

impl Default for BroadcastPolicy {
    fn default() -> Self {
        Self::ALL_CONNECTIONS
    }
}

/// 1 回のブロードキャストの結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// 配信できた接続数
    pub delivered: usize,
    /// 配信に失敗し、スキップした接続数
    pub failed: usize,
}

/// メッセージブロードキャストのユースケース
pub struct BroadcastMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ConnectionRepository>,
    policy: BroadcastPolicy,
}

impl BroadcastMessageUseCase {
    /// 既定ポリシーで BroadcastMessageUseCase を作成
    pub fn new(repository: Arc<dyn ConnectionRepository>) -> Self {
        Self::with_policy(repository, BroadcastPolicy::default())
    }

    pub fn with_policy(repository: Arc<dyn ConnectionRepository>, policy: BroadcastPolicy) -> Self {
        Self { repository, policy }
    }

    /// ブロードキャストを実行
    ///
    /// # Arguments
    ///
    /// * `sender` - 送信者の接続 ID（登録済みであること）
    /// * `text` - 本文（長さ・内容の検証はしない）
    ///
    /// # Returns
    ///
    /// * `Ok(BroadcastReport)` - 配信結果
    /// * `Err(BroadcastError)` - 送信者が未登録、またはエンコード失敗
    pub async fn execute(
        &self,
        sender: ConnectionId,
        text: String,
    ) -> Result<BroadcastReport, BroadcastError> {
        // 1. 送信者の確認
        if self.repository.get(&sender).await.is_none() {
            return Err(BroadcastError::UnknownSender(sender.into_string()));
        }

        // 2. 送信者タグ付きのフレームを 1 回だけエンコード
        let message = BroadcastMessage::from_connection(sender.clone(), text);
        let frame = WireEvent::message(message.payload())
            .encode()
            .map_err(|e| BroadcastError::Encode(e.to_string()))?;

        // 3. スナップショット上で配信（レジストリのロックは保持しない）
        let mut report = BroadcastReport::default();
        for target in self.repository.all().await {
            if !self.policy.include_sender && target.id == sender {
                continue;
            }

            match target.deliver(frame.clone()) {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    tracing::warn!("Failed to send message to '{}': {}", target.id, e);
                    report.failed += 1;
                }
            }
        }

        tracing::debug!(
            "Broadcast from '{}' delivered to {} connection(s), {} failed",
            sender,
            report.delivered,
            report.failed
        );

        Ok(report)
    }
}
