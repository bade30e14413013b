pub mod auth;
pub use auth::AuthService;
pub mod store;
pub use store::CollectionStore;
pub mod filter;
pub use filter::{visible_subset, Filterable, FACET_ALL};
pub mod metrics;
pub mod currency;
pub use currency::{format_money, parse_money};
pub mod export;
pub use export::CsvExport;
pub mod calculators;
