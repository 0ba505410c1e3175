//! 通知中心：尽力而为的连接生命周期事件广播
//!
//! 服务启动时创建、通过 `web::Data` 注入处理器，进程结束即销毁。
//! 不保证送达、不持久化、不重放；落后的订阅者丢弃积压消息。

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast;

const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// 广播给订阅者的事件
#[derive(Debug, Clone, Serialize)]
pub struct NotificationEvent {
    pub event: String,
    pub payload: serde_json::Value,
}

/// 连接名册条目，仅用于观测与日志
#[derive(Debug, Clone, Serialize)]
pub struct ConnectedClient {
    pub id: String,
    pub connected_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct NotificationHub {
    server_tx: broadcast::Sender<NotificationEvent>,
    clients: Arc<DashMap<String, ConnectedClient>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (server_tx, _) = broadcast::channel(capacity);
        Self {
            server_tx,
            clients: Arc::new(DashMap::new()),
        }
    }

    /// 发布事件到所有当前订阅者，无订阅者时静默丢弃
    pub fn publish(&self, event: &str, payload: serde_json::Value) {
        let notification = NotificationEvent {
            event: event.to_string(),
            payload,
        };
        if let Err(e) = self.server_tx.send(notification) {
            log::debug!("No subscribers for event '{event}': {e}");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.server_tx.subscribe()
    }

    /// 登记新连接并广播 connect 事件
    pub fn register_client(&self, client_id: &str) {
        self.clients.insert(
            client_id.to_string(),
            ConnectedClient {
                id: client_id.to_string(),
                connected_at: Utc::now(),
            },
        );
        log::info!("Client {client_id} connected ({} active)", self.clients.len());
        self.publish("connect", serde_json::json!({ "clientId": client_id }));
    }

    /// 注销连接并广播 disconnect 事件
    pub fn deregister_client(&self, client_id: &str) {
        self.clients.remove(client_id);
        log::info!(
            "Client {client_id} disconnected ({} active)",
            self.clients.len()
        );
        self.publish("disconnect", serde_json::json!({ "clientId": client_id }));
    }

    pub fn connected_clients(&self) -> Vec<ConnectedClient> {
        self.clients
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_reaches_subscriber() {
        let hub = NotificationHub::new();
        let mut rx = hub.subscribe();

        hub.publish("connect", serde_json::json!({ "clientId": "abc" }));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event, "connect");
        assert_eq!(event.payload["clientId"], "abc");
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_silent() {
        let hub = NotificationHub::new();
        // 无订阅者时不 panic、不返回错误
        hub.publish("connect", serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_roster_lifecycle() {
        let hub = NotificationHub::new();
        assert_eq!(hub.client_count(), 0);

        hub.register_client("c1");
        hub.register_client("c2");
        assert_eq!(hub.client_count(), 2);

        hub.deregister_client("c1");
        assert_eq!(hub.client_count(), 1);
        assert_eq!(hub.connected_clients()[0].id, "c2");
    }

    #[tokio::test]
    async fn test_register_broadcasts_connect_then_disconnect() {
        let hub = NotificationHub::new();
        let mut rx = hub.subscribe();

        hub.register_client("c1");
        hub.deregister_client("c1");

        let first = rx.recv().await.unwrap();
        assert_eq!(first.event, "connect");
        let second = rx.recv().await.unwrap();
        assert_eq!(second.event, "disconnect");
        assert_eq!(second.payload["clientId"], "c1");
    }
}
