pub mod iwencai_source;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::stock_listing::NewListings;

pub type DynamicListingSource = Box<dyn ListingSource + Send + Sync>;

#[async_trait]
pub trait ListingSource: Send + Sync {
    /// One bounded attempt. Retrying is the caller's business.
    async fn fetch_new_listings(&self) -> Result<NewListings>;
}
