// CSV downloads for the office and payroll. Every file starts with its
// fixed header row, even when there are no records.

use crate::modules::absences::use_cases::list_absences::queries_port::AbsenceFilter;
use crate::modules::daily_reports::use_cases::list_daily_reports::queries_port::DailyReportFilter;
use crate::modules::exports::core::records::{
    AbsenceRecord, DailyReportRecord, OrderRecord, PremiumPayRecord, TimeEntryRecord,
};
use crate::modules::orders::use_cases::list_orders::queries_port::OrderFilter;
use crate::modules::payroll::use_cases::premium_pay::inbound::http::{MonthQuery, load_lines};
use crate::modules::time_tracking::use_cases::list_time_entries::queries_port::TimeEntryFilter;
use crate::shared::core::access::Permission;
use crate::shared::infrastructure::csv_export::{CsvRecord, write_csv};
use crate::shell::response::ApiError;
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};

fn csv_response<T: CsvRecord>(filename: &str, records: &[T]) -> Result<Response, ApiError> {
    let body = write_csv(records)?;
    tracing::debug!(filename, rows = records.len(), "csv export");
    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
        ],
        body,
    )
        .into_response())
}

pub async fn time_entries(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Response, ApiError> {
    current.require(Permission::ExportData)?;
    let views = state.time_entries.list(&TimeEntryFilter::default()).await?;
    let records: Vec<TimeEntryRecord> = views.iter().map(TimeEntryRecord::from).collect();
    csv_response("time-entries.csv", &records)
}

pub async fn orders(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Response, ApiError> {
    current.require(Permission::ExportData)?;
    let views = state.order_queries.list(&OrderFilter::default()).await?;
    let records: Vec<OrderRecord> = views.iter().map(OrderRecord::from).collect();
    csv_response("orders.csv", &records)
}

pub async fn absences(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Response, ApiError> {
    current.require(Permission::ExportData)?;
    let views = state.absence_queries.list(&AbsenceFilter::default()).await?;
    let records: Vec<AbsenceRecord> = views.iter().map(AbsenceRecord::from).collect();
    csv_response("absences.csv", &records)
}

pub async fn daily_reports(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Response, ApiError> {
    current.require(Permission::ExportData)?;
    let views = state
        .daily_report_queries
        .list(&DailyReportFilter::default())
        .await?;
    let records: Vec<DailyReportRecord> = views.iter().map(DailyReportRecord::from).collect();
    csv_response("daily-reports.csv", &records)
}

pub async fn premium_pay(
    State(state): State<AppState>,
    current: CurrentUser,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    current.require(Permission::ExportData)?;
    let Query(query) = query?;
    let month = query.resolve(&state)?;
    let lines = load_lines(&state, month).await?;
    let records: Vec<PremiumPayRecord> = lines.iter().map(PremiumPayRecord::from).collect();
    csv_response(
        &format!("premium-pay-{}-{:02}.csv", month.year, month.month),
        &records,
    )
}

#[cfg(test)]
mod download_exports_http_inbound_tests {
    use crate::shared::core::access::Role;
    use crate::tests::fixtures::app::TestApp;
    use axum::http::StatusCode;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("/api/export/time-entries.csv", "id,user_id,date,clock_in")]
    #[case("/api/export/orders.csv", "id,order_type,title")]
    #[case("/api/export/absences.csv", "id,user_id,absence_type")]
    #[case("/api/export/daily-reports.csv", "id,user_id,date")]
    #[case("/api/export/premium-pay.csv?year=2026&month=10", "user_id,name,month")]
    #[tokio::test]
    async fn it_should_serve_csv_with_a_header_row(#[case] uri: &str, #[case] header_start: &str) {
        let app = TestApp::new();
        let buero = app.sign_in(Role::Buero).await;
        let response = app.get(uri, &buero).await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.content_type.unwrap().starts_with("text/csv"));
        assert!(response.text.starts_with(header_start), "{}", response.text);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_export_one_row_per_entry() {
        let app = TestApp::new();
        let monteur = app.sign_in(Role::Monteur).await;
        for (start, end) in [("08:00", "12:00"), ("13:00", "16:00")] {
            app.post(
                "/api/monteur/time-entries",
                &monteur,
                json!({ "date": "2026-10-13", "clock_in": start, "clock_out": end }),
            )
            .await;
        }
        let buero = app.sign_in(Role::Buero).await;
        let response = app.get("/api/export/time-entries.csv", &buero).await;
        assert_eq!(response.text.lines().count(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_technicians_out_of_exports() {
        let app = TestApp::new();
        let monteur = app.sign_in(Role::Monteur).await;
        let response = app.get("/api/export/orders.csv", &monteur).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN);
    }
}
