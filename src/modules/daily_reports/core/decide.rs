// Daily report rules. A report can be submitted, corrected by its author and
// approved by a supervisor only while no more than the correction window's
// days have passed since the report date. Rejection stays possible after the
// window.

use crate::modules::daily_reports::core::commands::DailyReportCommand;
use crate::modules::daily_reports::core::events::DailyReportEvent;
use crate::modules::daily_reports::core::state::{DailyReport, DailyReportState, ReportDraft};
use crate::shared::core::access::Permission;
use crate::shared::core::approval::{ApprovalError, ApprovalStatus, Verdict, review};
use crate::shared::core::decider::{Rejection, RejectionKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("hours must be greater than 0 and at most 24, got {0}")]
    InvalidHours(Decimal),

    #[error("report date {0} lies in the future")]
    FutureDate(NaiveDate),

    #[error("work description must not be empty")]
    EmptyDescription,

    #[error("daily report {0} already exists")]
    AlreadyExists(String),

    #[error("daily report not found")]
    NotFound,

    #[error("only the author may correct a daily report")]
    NotAuthor,

    #[error("report is {0} and can no longer be corrected")]
    Locked(ApprovalStatus),

    #[error("the {days}-day window for the report of {date} has expired")]
    WindowExpired { date: NaiveDate, days: i64 },

    #[error(transparent)]
    Approval(#[from] ApprovalError),
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::InvalidHours(_)
            | DecideError::FutureDate(_)
            | DecideError::EmptyDescription => RejectionKind::Invalid,
            DecideError::AlreadyExists(_)
            | DecideError::Locked(_)
            | DecideError::WindowExpired { .. } => RejectionKind::Conflict,
            DecideError::NotFound => RejectionKind::NotFound,
            DecideError::NotAuthor => RejectionKind::Forbidden,
            DecideError::Approval(inner) => inner.kind(),
        }
    }
}

pub fn decide(
    state: &DailyReportState,
    command: DailyReportCommand,
    window_days: i64,
) -> Result<Vec<DailyReportEvent>, DecideError> {
    match command {
        DailyReportCommand::Submit {
            report_id,
            user_id,
            draft,
            at,
            today,
        } => {
            if state.report.is_some() {
                return Err(DecideError::AlreadyExists(report_id));
            }
            let draft = validate(draft, today)?;
            ensure_within_window_of(draft.date, today, window_days)?;
            Ok(vec![DailyReportEvent::ReportSubmittedV1 {
                report_id,
                user_id,
                draft,
                submitted_at: at,
            }])
        }

        DailyReportCommand::Correct {
            by,
            draft,
            at,
            today,
        } => {
            let report = existing(state)?;
            if report.user_id != by {
                return Err(DecideError::NotAuthor);
            }
            if report.status() != ApprovalStatus::Pending {
                return Err(DecideError::Locked(report.status()));
            }
            ensure_within_window(report, today, window_days)?;
            let draft = validate(draft, today)?;
            // The corrected date has to stay inside the window as well.
            ensure_within_window_of(draft.date, today, window_days)?;
            Ok(vec![DailyReportEvent::ReportCorrectedV1 {
                report_id: report.id.clone(),
                draft,
                corrected_at: at,
            }])
        }

        DailyReportCommand::Review {
            review: request,
            today,
        } => {
            let report = existing(state)?;
            let record = review(
                report.status(),
                &report.user_id,
                &request,
                Permission::ReviewReports,
            )?;
            if request.verdict == Verdict::Approve {
                ensure_within_window(report, today, window_days)?;
            }
            Ok(vec![DailyReportEvent::ReportReviewedV1 {
                report_id: report.id.clone(),
                record,
            }])
        }
    }
}

fn existing(state: &DailyReportState) -> Result<&DailyReport, DecideError> {
    state.report.as_ref().ok_or(DecideError::NotFound)
}

fn validate(mut draft: ReportDraft, today: NaiveDate) -> Result<ReportDraft, DecideError> {
    draft.description = draft.description.trim().to_string();
    if draft.description.is_empty() {
        return Err(DecideError::EmptyDescription);
    }
    if draft.hours <= Decimal::ZERO || draft.hours > Decimal::from(24) {
        return Err(DecideError::InvalidHours(draft.hours));
    }
    if draft.date > today {
        return Err(DecideError::FutureDate(draft.date));
    }
    Ok(draft)
}

fn ensure_within_window(
    report: &DailyReport,
    today: NaiveDate,
    window_days: i64,
) -> Result<(), DecideError> {
    ensure_within_window_of(report.draft.date, today, window_days)
}

fn ensure_within_window_of(
    date: NaiveDate,
    today: NaiveDate,
    window_days: i64,
) -> Result<(), DecideError> {
    if (today - date).num_days() > window_days {
        return Err(DecideError::WindowExpired {
            date,
            days: window_days,
        });
    }
    Ok(())
}
