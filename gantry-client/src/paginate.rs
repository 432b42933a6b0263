//! Link-header pagination
//!
//! GitHub list endpoints return one page at a time and point at the next one
//! with `Link: <url>; rel="next"`.

use reqwest::header::{HeaderMap, LINK};
use serde::de::DeserializeOwned;

use crate::GitHubClient;
use crate::error::Result;
use gantry_core::domain::runner::Runner;
use gantry_core::dto::runner::RunnerList;

/// Largest page size GitHub accepts
pub(crate) const PER_PAGE: u32 = 100;

/// A page of a list endpoint that can be flattened into its items
pub trait Page: DeserializeOwned {
    type Item;

    fn into_items(self) -> Vec<Self::Item>;
}

impl Page for RunnerList {
    type Item = Runner;

    fn into_items(self) -> Vec<Runner> {
        self.runners
    }
}

/// Extracts the `rel="next"` target from a `Link` header
pub(crate) fn next_link(headers: &HeaderMap) -> Option<String> {
    let link = headers.get(LINK)?.to_str().ok()?;

    link.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|param| param.trim() == r#"rel="next""#);

        if is_next && target.starts_with('<') && target.ends_with('>') {
            Some(target[1..target.len() - 1].to_string())
        } else {
            None
        }
    })
}

impl GitHubClient {
    /// Fetches every page of a list endpoint and concatenates the items
    ///
    /// # Arguments
    /// * `path` - Endpoint path relative to the API root, without query
    pub(crate) async fn paginate<P: Page>(&self, path: &str) -> Result<Vec<P::Item>> {
        let mut url = Some(format!("{}{}?per_page={}", self.api_url, path, PER_PAGE));
        let mut items = Vec::new();

        while let Some(current) = url {
            let response = self.send(reqwest::Method::GET, &current).await?;
            url = next_link(response.headers());

            let page: P = self.handle_response(response).await?;
            items.extend(page.into_items());
        }

        Ok(items)
    }
}
