pub mod absences;
pub mod app;
pub mod orders;
pub mod reports;
pub mod time;
pub mod users;
pub mod views;
