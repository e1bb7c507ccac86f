use crate::modules::daily_reports::core::projections::DailyReportView;
use crate::modules::daily_reports::core::state::ReportDraft;
use crate::shared::core::approval::ApprovalStatus;
use crate::tests::fixtures::time::{day, utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub struct ReportDraftBuilder {
    draft: ReportDraft,
}

impl ReportDraftBuilder {
    pub fn new() -> Self {
        Self {
            draft: ReportDraft {
                date: day("2026-10-14"),
                description: "Tragseile geprueft, Tuerkontakt getauscht".into(),
                hours: dec!(7.5),
                materials: Some("Tuerkontakt".into()),
                order_id: None,
                emergency: false,
            },
        }
    }

    pub fn date(mut self, value: &str) -> Self {
        self.draft.date = day(value);
        self
    }

    pub fn hours(mut self, hours: Decimal) -> Self {
        self.draft.hours = hours;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.draft.description = description.into();
        self
    }

    pub fn build(self) -> ReportDraft {
        self.draft
    }
}

/// An approved eight hour report from October 2026.
pub struct DailyReportViewBuilder {
    view: DailyReportView,
}

impl DailyReportViewBuilder {
    pub fn new() -> Self {
        Self {
            view: DailyReportView {
                id: "rep-0001".into(),
                user_id: "user-0001".into(),
                date: day("2026-10-14"),
                description: "Jahreswartung".into(),
                hours: dec!(8),
                materials: None,
                order_id: None,
                emergency: false,
                status: ApprovalStatus::Approved,
                submitted_at: utc("2026-10-14 17:00"),
                corrected_at: None,
                approved_by: Some("meister-0001".into()),
                approved_at: Some(utc("2026-10-15 08:00")),
                review_comment: None,
            },
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.view.id = id.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.view.user_id = user_id.into();
        self
    }

    pub fn date(mut self, value: &str) -> Self {
        self.view.date = day(value);
        self
    }

    pub fn hours(mut self, hours: Decimal) -> Self {
        self.view.hours = hours;
        self
    }

    pub fn emergency(mut self, emergency: bool) -> Self {
        self.view.emergency = emergency;
        self
    }

    pub fn status(mut self, status: ApprovalStatus) -> Self {
        self.view.status = status;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.view.description = description.into();
        self
    }

    pub fn build(self) -> DailyReportView {
        self.view
    }
}
