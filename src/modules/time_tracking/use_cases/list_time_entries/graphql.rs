use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::time_tracking::core::projections::TimeEntryView;
use crate::modules::time_tracking::use_cases::list_time_entries::queries_port::TimeEntryFilter;
use crate::shared::core::access::Permission;
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub clock_in: String,
    pub clock_out: Option<String>,
    pub break_minutes: i64,
    pub total_hours: String,
    pub total_minutes: i64,
    pub regular_hours: String,
    pub overtime_hours: String,
    pub status: String,
    pub description: Option<String>,
}

impl From<TimeEntryView> for GqlTimeEntry {
    fn from(v: TimeEntryView) -> Self {
        Self {
            id: v.id,
            user_id: v.user_id,
            date: v.date.to_string(),
            clock_in: v.clock_in.to_string(),
            clock_out: v.clock_out.map(|at| at.to_string()),
            break_minutes: v.break_minutes,
            total_hours: v.total_hours,
            total_minutes: v.total_minutes,
            regular_hours: v.regular_hours.to_string(),
            overtime_hours: v.overtime_hours.to_string(),
            status: v.status.to_string(),
            description: v.description,
        }
    }
}

#[derive(Default)]
pub struct TimeEntriesQuery;

#[Object]
impl TimeEntriesQuery {
    /// The signed-in employee's entries, newest first.
    async fn my_time_entries(
        &self,
        context: &Context<'_>,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let current = context.data::<CurrentUser>()?;
        if !current.role().can(Permission::TrackOwnTime) {
            return Err("not permitted".into());
        }
        let list = state
            .time_entries
            .list(&TimeEntryFilter::for_user(current.id()))
            .await?;
        Ok(list
            .into_iter()
            .skip(offset.unwrap_or(0).max(0) as usize)
            .take(limit.unwrap_or(20).max(0) as usize)
            .map(Into::into)
            .collect())
    }
}
