pub mod activity_log;
pub mod arrival;
pub mod auth_event;
pub mod dashboard;
pub mod delivery;
pub mod health;
pub mod security_status;

use serde::Deserialize;

use devtrack_domain::pagination::PageRequest;

/// `page` / `per-page` query parameters of offset-paged list endpoints.
#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct PageQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl PageQuery {
    pub fn page_request(&self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest {
            per_page: self.per_page.unwrap_or(defaults.per_page),
            page: self.page.unwrap_or(defaults.page),
        }
    }
}
