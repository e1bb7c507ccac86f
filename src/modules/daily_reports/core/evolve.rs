use crate::modules::daily_reports::core::events::DailyReportEvent;
use crate::modules::daily_reports::core::state::{DailyReport, DailyReportState};

pub fn evolve(mut state: DailyReportState, event: &DailyReportEvent) -> DailyReportState {
    match event {
        DailyReportEvent::ReportSubmittedV1 {
            report_id,
            user_id,
            draft,
            submitted_at,
        } => {
            state.report = Some(DailyReport {
                id: report_id.clone(),
                user_id: user_id.clone(),
                draft: draft.clone(),
                submitted_at: *submitted_at,
                corrected_at: None,
                approval: None,
            });
        }
        DailyReportEvent::ReportCorrectedV1 {
            draft,
            corrected_at,
            ..
        } => {
            if let Some(report) = state.report.as_mut() {
                report.draft = draft.clone();
                report.corrected_at = Some(*corrected_at);
            }
        }
        DailyReportEvent::ReportReviewedV1 { record, .. } => {
            if let Some(report) = state.report.as_mut() {
                report.approval = Some(record.clone());
            }
        }
    }
    state
}
