// Applies read model mutations for one event and advances the watermark to
// `{stream_id}:{version}`.

use crate::shared::core::decider::Mutation;
use crate::shared::infrastructure::read_model::{ReadModelRepository, WatermarkRepository};
use std::marker::PhantomData;
use std::sync::Arc;

pub struct Projector<Row, TRepository>
where
    Row: Send + 'static,
    TRepository: ReadModelRepository<Row> + WatermarkRepository + 'static,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    _row: PhantomData<fn() -> Row>,
}

impl<Row, TRepository> Projector<Row, TRepository>
where
    Row: Send + 'static,
    TRepository: ReadModelRepository<Row> + WatermarkRepository + 'static,
{
    pub fn new(name: impl Into<String>, repository: Arc<TRepository>) -> Self {
        Self {
            name: name.into(),
            repository,
            _row: PhantomData,
        }
    }

    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        mutations: Vec<Mutation<Row>>,
    ) -> anyhow::Result<()> {
        for mutation in mutations {
            match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::Remove(key) => self.repository.remove(&key).await?,
            }
        }
        self.repository
            .set(&self.name, &format!("{stream_id}:{version}"))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod projector_tests {
    use super::*;
    use crate::shared::infrastructure::read_model::Keyed;
    use crate::shared::infrastructure::read_model::in_memory::InMemoryReadModel;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
    }

    impl Keyed for Row {
        fn key(&self) -> &str {
            &self.id
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_apply_mutations_and_advance_the_watermark() {
        let model = Arc::new(InMemoryReadModel::<Row>::new());
        let projector = Projector::new("rows", model.clone());
        projector
            .apply_one(
                "Stream-1",
                2,
                vec![
                    Mutation::Upsert(Row { id: "a".into() }),
                    Mutation::Upsert(Row { id: "b".into() }),
                    Mutation::Remove("a".into()),
                ],
            )
            .await
            .expect("apply_one failed");
        assert_eq!(model.find("a").await.unwrap(), None);
        assert!(model.find("b").await.unwrap().is_some());
        assert_eq!(
            model.get("rows").await.unwrap(),
            Some(String::from("Stream-1:2"))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_repository_is_offline() {
        let mut model = InMemoryReadModel::<Row>::new();
        model.toggle_offline();
        let projector = Projector::new("rows", Arc::new(model));
        let row = Mutation::Upsert(Row { id: "a".into() });
        let result = projector.apply_one("Stream-1", 1, vec![row]).await;
        assert!(result.unwrap_err().to_string().contains("offline"));
    }
}
