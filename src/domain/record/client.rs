//! Lookup sub-client — one category, normalized search.

use crate::client::LookupClient;
use crate::domain::record::DisplayResult;
use crate::error::LookupError;
use crate::shared::{Category, Endpoint};

/// Sub-client bound to a single category.
pub struct Lookup<'a> {
    pub(crate) client: &'a LookupClient,
    pub(crate) category: Category,
}

impl<'a> Lookup<'a> {
    pub fn category(&self) -> Category {
        self.category
    }

    /// Look up a user-entered name (normalized first).
    pub async fn get(&self, raw_name: &str) -> Result<DisplayResult, LookupError> {
        self.client.search(raw_name, self.category).await
    }

    /// Look up an already normalized endpoint.
    pub async fn get_endpoint(&self, endpoint: &Endpoint) -> Result<DisplayResult, LookupError> {
        self.client.fetch_and_display(endpoint, self.category).await
    }

    /// Request URL this sub-client would hit for `raw_name`.
    pub fn url_for(&self, raw_name: &str) -> String {
        self.client
            .request_url(self.category, &crate::shared::normalize_name(raw_name))
    }
}
