// Write flow shared by every event-sourced aggregate.
//
// - Load the stream and fold it into state.
// - Let the decider validate the command.
// - Append new events with optimistic concurrency.
// - Project each new event inline so queries see it immediately.

use crate::shared::application::projector::Projector;
use crate::shared::core::decider::{Projection, Rejection, RejectionKind};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shared::infrastructure::read_model::{ReadModelRepository, WatermarkRepository};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    EventStore(#[from] EventStoreError),

    #[error("{message}")]
    Domain {
        kind: RejectionKind,
        message: String,
    },

    #[error("projection failed: {0}")]
    Projection(String),
}

impl ApplicationError {
    pub fn rejected(error: impl Rejection) -> Self {
        ApplicationError::Domain {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

pub struct CommandHandler<D, TEventStore, TReadModel>
where
    D: Projection,
    TEventStore: EventStore<D::Event> + 'static,
    TReadModel: ReadModelRepository<D::Row> + WatermarkRepository + 'static,
{
    decider: D,
    event_store: Arc<TEventStore>,
    projector: Projector<D::Row, TReadModel>,
}

impl<D, TEventStore, TReadModel> CommandHandler<D, TEventStore, TReadModel>
where
    D: Projection,
    TEventStore: EventStore<D::Event> + 'static,
    TReadModel: ReadModelRepository<D::Row> + WatermarkRepository + 'static,
{
    pub fn new(
        decider: D,
        event_store: Arc<TEventStore>,
        projector: Projector<D::Row, TReadModel>,
    ) -> Self {
        Self {
            decider,
            event_store,
            projector,
        }
    }

    pub fn decider(&self) -> &D {
        &self.decider
    }

    pub fn event_store(&self) -> &Arc<TEventStore> {
        &self.event_store
    }

    /// Current state of a stream, without deciding anything.
    pub async fn load(&self, stream_id: &str) -> Result<D::State, ApplicationError> {
        let stream = self.event_store.load(stream_id).await?;
        Ok(self.decider.fold(&stream.events))
    }

    /// Runs `command` against the stream and returns the state after the
    /// accepted events.
    pub async fn handle(
        &self,
        stream_id: &str,
        command: D::Command,
    ) -> Result<D::State, ApplicationError> {
        let stream = self.event_store.load(stream_id).await?;
        let mut state = self.decider.fold(&stream.events);

        let events = match self.decider.decide(&state, command) {
            Ok(events) => events,
            Err(reason) => {
                tracing::warn!(stream_id, %reason, "command rejected");
                return Err(ApplicationError::rejected(reason));
            }
        };

        self.event_store
            .append(stream_id, stream.version, &events)
            .await?;

        let mut version = stream.version;
        for event in &events {
            state = self.decider.evolve(state, event);
            version += 1;
            let mutations = self.decider.project(&state, event);
            self.projector
                .apply_one(stream_id, version, mutations)
                .await
                .map_err(|e| ApplicationError::Projection(e.to_string()))?;
        }
        tracing::debug!(stream_id, version, "command accepted");
        Ok(state)
    }
}
