use crate::shared::infrastructure::read_model::{Keyed, ReadModelRepository, WatermarkRepository};
use std::collections::HashMap;
use tokio::sync::RwLock;

pub struct InMemoryReadModel<Row> {
    rows: RwLock<HashMap<String, Row>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl<Row> Default for InMemoryReadModel<Row> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            watermark: RwLock::new(HashMap::new()),
            is_offline: false,
        }
    }
}

impl<Row> InMemoryReadModel<Row>
where
    Row: Keyed + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn find(&self, key: &str) -> anyhow::Result<Option<Row>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Read model offline"));
        }
        Ok(self.rows.read().await.get(key).cloned())
    }

    pub async fn filter<F>(&self, predicate: F) -> anyhow::Result<Vec<Row>>
    where
        F: Fn(&Row) -> bool + Send,
    {
        if self.is_offline {
            return Err(anyhow::anyhow!("Read model offline"));
        }
        let guard = self.rows.read().await;
        let rows = guard.values().filter(|&row| predicate(row)).cloned();
        Ok(rows.collect())
    }
}

#[async_trait::async_trait]
impl<Row> ReadModelRepository<Row> for InMemoryReadModel<Row>
where
    Row: Keyed + Clone + Send + Sync + 'static,
{
    async fn upsert(&self, row: Row) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Read model offline"));
        }
        let mut guard = self.rows.write().await;
        guard.insert(row.key().to_string(), row);
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Read model offline"));
        }
        self.rows.write().await.remove(key);
        Ok(())
    }
}

#[async_trait::async_trait]
impl<Row> WatermarkRepository for InMemoryReadModel<Row>
where
    Row: Send + Sync + 'static,
{
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }
        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }
        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_read_model_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        user_id: String,
    }

    impl Keyed for Row {
        fn key(&self) -> &str {
            &self.id
        }
    }

    #[fixture]
    fn row() -> Row {
        Row {
            id: "te-0001".into(),
            user_id: "user-0001".into(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_upsert_and_find_a_row(row: Row) {
        let model = InMemoryReadModel::<Row>::new();
        model.upsert(row.clone()).await.unwrap();
        assert_eq!(model.find("te-0001").await.unwrap(), Some(row));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_replace_a_row_under_the_same_key(row: Row) {
        let model = InMemoryReadModel::<Row>::new();
        model.upsert(row.clone()).await.unwrap();
        let replaced = Row {
            user_id: "user-0002".into(),
            ..row
        };
        model.upsert(replaced.clone()).await.unwrap();
        let all = model.filter(|_| true).await.unwrap();
        assert_eq!(all, vec![replaced]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_remove_a_row(row: Row) {
        let model = InMemoryReadModel::<Row>::new();
        model.upsert(row).await.unwrap();
        model.remove("te-0001").await.unwrap();
        assert_eq!(model.find("te-0001").await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_filter_rows(row: Row) {
        let model = InMemoryReadModel::<Row>::new();
        model.upsert(row.clone()).await.unwrap();
        model
            .upsert(Row {
                id: "te-0002".into(),
                user_id: "user-0002".into(),
            })
            .await
            .unwrap();
        let mine = model.filter(|r| r.user_id == "user-0001").await.unwrap();
        assert_eq!(mine, vec![row]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_set_the_watermark_and_confirm_its_set() {
        let model = InMemoryReadModel::<Row>::new();
        model.set("projector-name", "stream:1").await.unwrap();
        assert_eq!(
            model.get("projector-name").await.unwrap(),
            Some(String::from("stream:1"))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_read_model_is_offline(row: Row) {
        let mut model = InMemoryReadModel::<Row>::new();
        model.toggle_offline();
        let result = model.upsert(row).await;
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Read model offline"));
        let result = model.set("projector-name", "stream:1").await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Watermark repository offline")
        );
    }
}
