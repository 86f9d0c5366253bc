//! InMemory Connection Repository 実装
//!
//! ドメイン層が定義する ConnectionRepository trait の具体的な実装。
//! HashMap をインメモリの接続レジストリとして使用します。
//!
//! admit / remove / snapshot はすべて同じ Mutex の下で直列化されます。
//! `all()` はロック中に接続をクローンして返すため、ブロードキャストは
//! ロックを保持せずにスナップショット上で反復できます。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Connection, ConnectionId, ConnectionRepository, RepositoryError};

/// インメモリ Connection Repository 実装
#[derive(Default)]
pub struct InMemoryConnectionRepository {
    /// 接続中のクライアント（WebSocket sender を含む）
    connections: Arc<Mutex<HashMap<ConnectionId, Connection>>>,
}

impl InMemoryConnectionRepository {
    /// 空のレジストリを作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRepository for InMemoryConnectionRepository {
    async fn admit(&self, connection: Connection) -> Result<ConnectionId, RepositoryError> {
        let mut connections = self.connections.lock().await;
        if connections.contains_key(&connection.id) {
            return Err(RepositoryError::DuplicateConnection(
                connection.id.to_string(),
            ));
        }

        let id = connection.id.clone();
        connections.insert(id.clone(), connection);
        Ok(id)
    }

    async fn remove(&self, id: &ConnectionId) -> bool {
        let mut connections = self.connections.lock().await;
        match connections.remove(id) {
            Some(connection) => {
                connection.mark_closed();
                true
            }
            None => false,
        }
    }

    async fn get(&self, id: &ConnectionId) -> Option<Connection> {
        let connections = self.connections.lock().await;
        connections.get(id).cloned()
    }

    async fn all(&self) -> Vec<Connection> {
        let connections = self.connections.lock().await;
        connections.values().cloned().collect()
    }

    async fn count(&self) -> usize {
        let connections = self.connections.lock().await;
        connections.len()
    }

    async fn drain(&self) -> usize {
        let mut connections = self.connections.lock().await;
        let drained = connections.len();
        for (_, connection) in connections.drain() {
            connection.mark_closed();
        }
        drained
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timestamp;
    use tokio::sync::mpsc;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryConnectionRepository の admit / remove / all / drain
    // - remove の冪等性（存在しない ID の削除は何もしない）
    // - スナップショットと生存フラグの関係
    //
    // 【どのようなシナリオをテストするか】
    // 1. N 件 admit した直後の all() は N 件
    // 2. 1 件 remove した直後の all() は N-1 件
    // 3. 存在しない ID の remove は no-op
    // 4. 同じ ID の二重 admit はエラー
    // 5. remove 済みの接続はスナップショット上でも閉じている
    // ========================================

    fn connection(id: &str) -> (Connection, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let conn = Connection::new(
            ConnectionId::new(id.to_string()).unwrap(),
            Timestamp::new(1000),
            tx,
        );
        (conn, rx)
    }

    #[tokio::test]
    async fn test_admit_returns_identifier() {
        // テスト項目: admit は接続 ID を返し、レジストリに追加する
        // given (前提条件):
        let repo = InMemoryConnectionRepository::new();
        let (alice, _rx) = connection("alice");

        // when (操作):
        let result = repo.admit(alice).await;

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "alice");
        assert_eq!(repo.count().await, 1);
        assert!(
            repo.get(&ConnectionId::new("alice".to_string()).unwrap())
                .await
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_all_tracks_admit_and_remove() {
        // テスト項目: N 件 admit 後は N 件、1 件 remove 後は N-1 件
        // given (前提条件):
        let repo = InMemoryConnectionRepository::new();
        let mut receivers = Vec::new();
        for id in ["alice", "bob", "charlie", "dave"] {
            let (conn, rx) = connection(id);
            repo.admit(conn).await.unwrap();
            receivers.push(rx);
        }
        assert_eq!(repo.all().await.len(), 4);

        // when (操作):
        let removed = repo
            .remove(&ConnectionId::new("bob".to_string()).unwrap())
            .await;

        // then (期待する結果):
        assert!(removed);
        let remaining = repo.all().await;
        assert_eq!(remaining.len(), 3);
        assert!(remaining.iter().all(|c| c.id.as_str() != "bob"));
    }

    #[tokio::test]
    async fn test_remove_nonexistent_is_noop() {
        // テスト項目: 登録されていない ID の削除はエラーにならず、何も変わらない
        // given (前提条件):
        let repo = InMemoryConnectionRepository::new();
        let (alice, _rx) = connection("alice");
        repo.admit(alice).await.unwrap();

        // when (操作):
        let missing = ConnectionId::new("ghost".to_string()).unwrap();
        let first = repo.remove(&missing).await;
        let second = repo.remove(&missing).await;

        // then (期待する結果):
        assert!(!first);
        assert!(!second);
        assert_eq!(repo.all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_admit_duplicate_fails() {
        // テスト項目: 同じ ID の接続を二重に admit できない
        // given (前提条件):
        let repo = InMemoryConnectionRepository::new();
        let (first, _rx1) = connection("alice");
        let (second, _rx2) = connection("alice");
        repo.admit(first).await.unwrap();

        // when (操作):
        let result = repo.admit(second).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RepositoryError::DuplicateConnection("alice".to_string()))
        );
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_removed_connection_is_closed_in_snapshot() {
        // テスト項目: スナップショット取得後に remove された接続は閉じた状態になる
        // given (前提条件):
        let repo = InMemoryConnectionRepository::new();
        let (alice, mut rx) = connection("alice");
        repo.admit(alice).await.unwrap();
        let snapshot = repo.all().await;

        // when (操作):
        repo.remove(&ConnectionId::new("alice".to_string()).unwrap())
            .await;

        // then (期待する結果):
        assert!(!snapshot[0].is_live());
        assert!(snapshot[0].deliver("late".to_string()).is_err());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_drain_closes_everything() {
        // テスト項目: drain は全接続を閉じてレジストリを空にする
        // given (前提条件):
        let repo = InMemoryConnectionRepository::new();
        let (alice, _rx1) = connection("alice");
        let (bob, _rx2) = connection("bob");
        repo.admit(alice).await.unwrap();
        repo.admit(bob).await.unwrap();
        let snapshot = repo.all().await;

        // when (操作):
        let drained = repo.drain().await;

        // then (期待する結果):
        assert_eq!(drained, 2);
        assert_eq!(repo.count().await, 0);
        assert!(snapshot.iter().all(|c| !c.is_live()));
    }
}
