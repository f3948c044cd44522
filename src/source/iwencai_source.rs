use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};

use crate::source::ListingSource;
use crate::types::stock_listing::{NewListings, StockListing};

const RESULT_URL: &str = "https://www.iwencai.com/unifiedwap/result";
const QUERY: &[(&str, &str)] = &[("w", "今日新股"), ("querytype", "stock")];
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Only the first few items on the page are reported.
const MAX_LISTINGS: usize = 5;
const UNKNOWN_FIELD: &str = "未知";

/// Scrapes today's new listings from the iwencai search result page.
#[derive(Clone, Debug)]
pub struct IwencaiSource {
    http: reqwest::Client,
    url: String,
}

impl IwencaiSource {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build listing http client")?;

        Ok(Self {
            http,
            url: RESULT_URL.to_string(),
        })
    }
}

#[async_trait]
impl ListingSource for IwencaiSource {
    async fn fetch_new_listings(&self) -> Result<NewListings> {
        let response = self
            .http
            .get(&self.url)
            .query(QUERY)
            .send()
            .await
            .context("listing page request failed")?
            .error_for_status()
            .context("listing page returned an error status")?;

        let body = response
            .text()
            .await
            .context("read listing page body failed")?;

        let listings = parse_listings(&body)?;
        tracing::debug!(count = listings.len(), "parsed listing page");

        Ok(listings)
    }
}

pub fn parse_listings(body: &str) -> Result<NewListings> {
    let item = selector(".stock-item")?;
    let name = selector(".stock-name")?;
    let code = selector(".stock-code")?;
    let price = selector(".stock-price")?;

    let document = Html::parse_document(body);
    let listings = document
        .select(&item)
        .take(MAX_LISTINGS)
        .map(|element| {
            StockListing::new(
                field_text(element, &name),
                field_text(element, &code),
                field_text(element, &price),
            )
        })
        .collect();

    Ok(NewListings::from_listings(listings))
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector {css}: {e:?}"))
}

fn field_text(element: ElementRef<'_>, field: &Selector) -> String {
    element
        .select(field)
        .next()
        .map(|node| node.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| UNKNOWN_FIELD.to_string())
}
