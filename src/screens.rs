pub mod state;
pub use state::{DialogState, Frame, LoadState};
pub mod properties;
pub use properties::PropertiesScreen;
pub mod customers;
pub use customers::CustomersScreen;
pub mod deals;
pub use deals::{DealRow, DealsScreen};
pub mod brokerage;
pub use brokerage::BrokerageScreen;
pub mod projects;
pub use projects::ProjectsScreen;
pub mod calendar;
pub use calendar::CalendarScreen;
pub mod dashboard;
pub use dashboard::DashboardScreen;
