//! UseCase: 接続削除処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RemoveConnectionUseCase::execute() メソッド
//! - 切断された接続がレジストリから取り除かれること
//!
//! ### どのような状況を想定しているか
//! - 正常系：接続の削除
//! - エッジケース：最後の接続の削除
//! - エッジケース：存在しない接続の削除（no-op、エラーにしない）

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRepository};

/// 接続削除のユースケース
pub struct RemoveConnectionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ConnectionRepository>,
}

impl RemoveConnectionUseCase {
    /// 新しい RemoveConnectionUseCase を作成
    pub fn new(repository: Arc<dyn ConnectionRepository>) -> Self {
        Self { repository }
    }

    /// 接続削除を実行
    ///
    /// 正常切断・異常切断のどちらからも呼ばれるため冪等です。
    ///
    /// # Returns
    ///
    /// 実際に削除した場合は `true`、登録されていなかった場合は `false`
    pub async fn execute(&self, id: &ConnectionId) -> bool {
        let removed = self.repository.remove(id).await;
        if !removed {
            tracing::debug!("Connection '{}' was already removed", id);
        }
        removed
    }

    /// 残りの接続数を取得
    pub async fn count_remaining(&self) -> usize {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Connection, Timestamp},
        infrastructure::repository::InMemoryConnectionRepository,
    };
    use tokio::sync::mpsc;

    fn id(value: &str) -> ConnectionId {
        ConnectionId::new(value.to_string()).unwrap()
    }

    async fn admit(
        repository: &InMemoryConnectionRepository,
        value: &str,
    ) -> mpsc::UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        repository
            .admit(Connection::new(id(value), Timestamp::new(0), tx))
            .await
            .unwrap();
        rx
    }

    #[tokio::test]
    async fn test_remove_connection_success() {
        // テスト項目: 接続を削除でき、残りの接続数が減る
        // given (前提条件):
        let repository = Arc::new(InMemoryConnectionRepository::new());
        let usecase = RemoveConnectionUseCase::new(repository.clone());
        let _rx1 = admit(&repository, "alice").await;
        let _rx2 = admit(&repository, "bob").await;
        let _rx3 = admit(&repository, "charlie").await;

        // when (操作):
        let removed = usecase.execute(&id("alice")).await;

        // then (期待する結果):
        assert!(removed);
        assert_eq!(usecase.count_remaining().await, 2);
    }

    #[tokio::test]
    async fn test_remove_last_connection() {
        // テスト項目: 最後の接続を削除するとレジストリは空になる
        // given (前提条件):
        let repository = Arc::new(InMemoryConnectionRepository::new());
        let usecase = RemoveConnectionUseCase::new(repository.clone());
        let _rx = admit(&repository, "alice").await;

        // when (操作):
        usecase.execute(&id("alice")).await;

        // then (期待する結果):
        assert_eq!(usecase.count_remaining().await, 0);
        assert!(repository.all().await.is_empty());
    }

    #[tokio::test]
    async fn test_remove_nonexistent_connection_is_noop() {
        // テスト項目: 存在しない接続の削除はエラーにならず、何も変えない
        // given (前提条件):
        let repository = Arc::new(InMemoryConnectionRepository::new());
        let usecase = RemoveConnectionUseCase::new(repository.clone());
        let _rx = admit(&repository, "alice").await;

        // when (操作):
        let removed = usecase.execute(&id("nonexistent")).await;

        // then (期待する結果):
        assert!(!removed);
        assert_eq!(usecase.count_remaining().await, 1);
    }

    #[tokio::test]
    async fn test_remove_twice_is_idempotent() {
        // テスト項目: 同じ接続を 2 回削除しても 2 回目は no-op
        // given (前提条件):
        let repository = Arc::new(InMemoryConnectionRepository::new());
        let usecase = RemoveConnectionUseCase::new(repository.clone());
        let _rx = admit(&repository, "alice").await;

        // when (操作):
        let first = usecase.execute(&id("alice")).await;
        let second = usecase.execute(&id("alice")).await;

        // then (期待する結果):
        assert!(first);
        assert!(!second);
    }
}
