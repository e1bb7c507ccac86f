// Ports for read model persistence and projector watermark tracking.

pub mod in_memory;

use async_trait::async_trait;

/// Rows are stored under their own identifier.
pub trait Keyed {
    fn key(&self) -> &str;
}

#[async_trait]
pub trait ReadModelRepository<Row: Send + 'static>: Send + Sync {
    async fn upsert(&self, row: Row) -> anyhow::Result<()>;
    async fn remove(&self, key: &str) -> anyhow::Result<()>;
}

#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()>;
}
