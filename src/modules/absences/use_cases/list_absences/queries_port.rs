use crate::modules::absences::core::projections::AbsenceView;
use crate::shared::core::approval::ApprovalStatus;
use async_trait::async_trait;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbsenceFilter {
    pub user_id: Option<String>,
    pub status: Option<ApprovalStatus>,
}

impl AbsenceFilter {
    pub fn matches(&self, view: &AbsenceView) -> bool {
        self.user_id.as_ref().is_none_or(|u| *u == view.user_id)
            && self.status.is_none_or(|s| s == view.status)
    }
}

#[async_trait]
pub trait AbsenceQueries: Send + Sync {
    async fn find(&self, absence_id: &str) -> anyhow::Result<Option<AbsenceView>>;

    /// Matching absences by start date, latest first.
    async fn list(&self, filter: &AbsenceFilter) -> anyhow::Result<Vec<AbsenceView>>;
}
