pub mod message;
pub mod wecom_notifier;

use anyhow::Result;
use async_trait::async_trait;

pub type DynamicNotifier = Box<dyn Notifier + Send + Sync>;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers an already formatted message. Any error means nothing was
    /// delivered.
    async fn send(&self, content: &str) -> Result<()>;
}
