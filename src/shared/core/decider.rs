// Decider contract implemented by every event-sourced aggregate.
//
// decide: pure validation of a command against folded state, yields events.
// evolve: deterministic transition for one event.
// project: read model mutations for an event, given the state right after it.
//
// No input or output in implementations of these traits.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    Invalid,
    NotFound,
    Forbidden,
    Conflict,
}

/// Classifies a domain error so the transport layer can pick a status code.
pub trait Rejection: std::error::Error {
    fn kind(&self) -> RejectionKind;
}

pub trait Decider: Send + Sync + 'static {
    type State: Default + Send + Sync;
    type Command: Send;
    type Event: Clone + Send + Sync + 'static;
    type Error: Rejection;

    fn decide(
        &self,
        state: &Self::State,
        command: Self::Command,
    ) -> Result<Vec<Self::Event>, Self::Error>;

    fn evolve(&self, state: Self::State, event: &Self::Event) -> Self::State;

    fn fold<'a>(&self, events: impl IntoIterator<Item = &'a Self::Event>) -> Self::State {
        events
            .into_iter()
            .fold(Self::State::default(), |state, event| {
                self.evolve(state, event)
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation<Row> {
    Upsert(Row),
    Remove(String),
}

pub trait Projection: Decider {
    type Row: Clone + Send + Sync + 'static;

    fn project(&self, state: &Self::State, event: &Self::Event) -> Vec<Mutation<Self::Row>>;
}
