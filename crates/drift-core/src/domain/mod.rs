mod auth;
mod chart;
mod site_usage;
mod time_range;

pub use auth::{AuthToken, Credentials};
pub use chart::{build_chart_data, others_label, ChartDataError, ChartEntry, ChartKind};
pub use site_usage::SiteUsage;
pub use time_range::TimeRange;
