use crate::config::Config;
use crate::modules::absences::core::decider::Absences;
use crate::modules::absences::core::events::AbsenceEvent;
use crate::modules::absences::core::projections::AbsenceView;
use crate::modules::absences::use_cases::list_absences::queries_port::AbsenceQueries;
use crate::modules::customers::adapters::outbound::customers_in_memory::InMemoryCustomerRepository;
use crate::modules::customers::core::customer::CustomerRepository;
use crate::modules::daily_reports::core::decider::DailyReports;
use crate::modules::daily_reports::core::events::DailyReportEvent;
use crate::modules::daily_reports::core::projections::DailyReportView;
use crate::modules::daily_reports::use_cases::list_daily_reports::queries_port::DailyReportQueries;
use crate::modules::identity::adapters::outbound::sessions_in_memory::InMemorySessionStore;
use crate::modules::identity::adapters::outbound::users_in_memory::InMemoryUserRepository;
use crate::modules::identity::core::ports::{SessionStore, UserRepository};
use crate::modules::orders::core::decider::Orders;
use crate::modules::orders::core::events::OrderEvent;
use crate::modules::orders::core::projections::OrderView;
use crate::modules::orders::use_cases::list_orders::queries_port::OrderQueries;
use crate::modules::payroll::core::premium_pay::{PayRates, PremiumPayCalculator};
use crate::modules::time_tracking::core::decider::TimeSheet;
use crate::modules::time_tracking::core::duration::DurationCalculator;
use crate::modules::time_tracking::core::events::TimeSheetEvent;
use crate::modules::time_tracking::core::projections::TimeEntryView;
use crate::modules::time_tracking::use_cases::list_time_entries::queries_port::TimeEntryQueries;
use crate::shared::application::command_handler::CommandHandler;
use crate::shared::application::projector::Projector;
use crate::shared::core::clock::{Clock, SystemClock};
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::read_model::in_memory::InMemoryReadModel;
use std::sync::Arc;

pub type TimeSheetHandler = CommandHandler<
    TimeSheet,
    InMemoryEventStore<TimeSheetEvent>,
    InMemoryReadModel<TimeEntryView>,
>;
pub type OrderHandler =
    CommandHandler<Orders, InMemoryEventStore<OrderEvent>, InMemoryReadModel<OrderView>>;
pub type AbsenceHandler =
    CommandHandler<Absences, InMemoryEventStore<AbsenceEvent>, InMemoryReadModel<AbsenceView>>;
pub type DailyReportHandler = CommandHandler<
    DailyReports,
    InMemoryEventStore<DailyReportEvent>,
    InMemoryReadModel<DailyReportView>,
>;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub clock: Arc<dyn Clock>,

    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<dyn SessionStore>,
    pub customers: Arc<dyn CustomerRepository>,

    pub time_sheets: Arc<TimeSheetHandler>,
    pub time_entries: Arc<dyn TimeEntryQueries>,
    pub orders: Arc<OrderHandler>,
    pub order_queries: Arc<dyn OrderQueries>,
    pub absences: Arc<AbsenceHandler>,
    pub absence_queries: Arc<dyn AbsenceQueries>,
    pub daily_reports: Arc<DailyReportHandler>,
    pub daily_report_queries: Arc<dyn DailyReportQueries>,

    pub premium_pay: PremiumPayCalculator,
}

impl AppState {
    /// Wires every port to its in-memory adapter.
    pub fn in_memory(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        let time_entry_rows = Arc::new(InMemoryReadModel::<TimeEntryView>::new());
        let order_rows = Arc::new(InMemoryReadModel::<OrderView>::new());
        let absence_rows = Arc::new(InMemoryReadModel::<AbsenceView>::new());
        let report_rows = Arc::new(InMemoryReadModel::<DailyReportView>::new());

        let time_sheets = Arc::new(CommandHandler::new(
            TimeSheet::new(DurationCalculator::new(config.overtime_threshold_minutes)),
            Arc::new(InMemoryEventStore::new()),
            Projector::new("time_entries", time_entry_rows.clone()),
        ));
        let orders = Arc::new(CommandHandler::new(
            Orders,
            Arc::new(InMemoryEventStore::new()),
            Projector::new("orders", order_rows.clone()),
        ));
        let absences = Arc::new(CommandHandler::new(
            Absences,
            Arc::new(InMemoryEventStore::new()),
            Projector::new("absences", absence_rows.clone()),
        ));
        let daily_reports = Arc::new(CommandHandler::new(
            DailyReports::new(config.correction_window_days),
            Arc::new(InMemoryEventStore::new()),
            Projector::new("daily_reports", report_rows.clone()),
        ));

        let premium_pay = PremiumPayCalculator::new(PayRates {
            base: config.pay_base_rate,
            overtime: config.pay_overtime_rate,
            emergency: config.pay_emergency_rate,
        });

        Self {
            config: Arc::new(config),
            clock,
            users: Arc::new(InMemoryUserRepository::new()),
            sessions: Arc::new(InMemorySessionStore::new()),
            customers: Arc::new(InMemoryCustomerRepository::new()),
            time_sheets,
            time_entries: time_entry_rows,
            orders,
            order_queries: order_rows,
            absences,
            absence_queries: absence_rows,
            daily_reports,
            daily_report_queries: report_rows,
            premium_pay,
        }
    }
}
