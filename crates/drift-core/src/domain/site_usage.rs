/// Total time spent on one site within a reporting window, as returned by
/// the wellbeing server. Sites are not guaranteed unique in raw input.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteUsage {
    pub site: String,
    pub total_seconds: f64,
}

impl SiteUsage {
    pub fn new(site: impl Into<String>, total_seconds: f64) -> Self {
        Self {
            site: site.into(),
            total_seconds,
        }
    }
}
