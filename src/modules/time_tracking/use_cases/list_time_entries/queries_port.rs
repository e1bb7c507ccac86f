use crate::modules::time_tracking::core::projections::TimeEntryView;
use crate::modules::time_tracking::core::state::EntryStatus;
use async_trait::async_trait;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeEntryFilter {
    pub user_id: Option<String>,
    pub status: Option<EntryStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl TimeEntryFilter {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, view: &TimeEntryView) -> bool {
        self.user_id.as_ref().is_none_or(|u| *u == view.user_id)
            && self.status.is_none_or(|s| s == view.status)
            && self.from.is_none_or(|from| view.date >= from)
            && self.to.is_none_or(|to| view.date <= to)
    }
}

#[async_trait]
pub trait TimeEntryQueries: Send + Sync {
    async fn find(&self, entry_id: &str) -> anyhow::Result<Option<TimeEntryView>>;

    /// Entries matching `filter`, newest clock-in first.
    async fn list(&self, filter: &TimeEntryFilter) -> anyhow::Result<Vec<TimeEntryView>>;
}
