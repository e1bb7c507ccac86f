// Read-only GraphQL surface. Every request carries the signed-in user as
// context data next to the AppState.

use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

use crate::modules::orders::use_cases::list_orders::graphql::OrdersQuery;
use crate::modules::time_tracking::use_cases::list_time_entries::graphql::TimeEntriesQuery;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(TimeEntriesQuery, OrdersQuery);

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(state)
        .finish()
}
