use std::sync::Arc;

use anyhow::Context;
use log::{debug, info};
use reqwest::cookie::Jar;
use reqwest::header::{self, HeaderMap, HeaderValue};
use scraper::Html;
use strum::IntoEnumIterator;
use url::Url;

use crate::credentials::Credentials;
use crate::subject_trait::{Category, SubjectTrait, UserId};

const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.14; rv:65.0) Gecko/20100101 Firefox/65.0";
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "ja,zh-CN;q=0.8,en-US;q=0.5,en;q=0.3";

pub struct DoubanClient {
    client: reqwest::Client,
}

impl DoubanClient {
    /// Builds the client for one category crawl.  The header set is fixed for
    /// the lifetime of the crawl; `Host` and `Referer` are derived from the
    /// start URL's origin.  The tracking cookie is seeded into the jar so that
    /// cookies the server sets along the way are carried too.
    pub fn new(start_url: &Url, credentials: &Credentials) -> anyhow::Result<Self> {
        let jar = Arc::new(Jar::default());
        jar.add_cookie_str(
            &format!("gr_user_id={}; Path=/", credentials.gr_user_id),
            start_url,
        );
        let client = reqwest::Client::builder()
            .cookie_provider(jar)
            .default_headers(default_headers(start_url)?)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches one listing page.  A non-2xx response is the normal end of
    /// pagination and yields `None`; transport failures are fatal.
    pub async fn fetch_listing(&self, url: &Url) -> anyhow::Result<Option<Html>> {
        debug!("Fetching {url}");
        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            info!(
                "Server returned {} for {url}; stopping pagination.",
                response.status()
            );
            return Ok(None);
        }
        Ok(Some(Html::parse_document(&response.text().await?)))
    }
}

fn default_headers(start_url: &Url) -> anyhow::Result<HeaderMap> {
    let host = authority(start_url)?;
    let mut referer = start_url.clone();
    referer.set_path("/mine");
    referer.set_query(None);

    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static(ACCEPT_LANGUAGE),
    );
    headers.insert(header::HOST, HeaderValue::from_str(&host)?);
    headers.insert(header::REFERER, HeaderValue::from_str(referer.as_str())?);
    Ok(headers)
}

fn authority(url: &Url) -> anyhow::Result<String> {
    let host = url
        .host_str()
        .with_context(|| format!("No host in {url}"))?;
    Ok(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_owned(),
    })
}

/// Resolves the link inside the pagination control, if any, against the
/// crawl's start URL.
pub fn next_page_url(start_url: &Url, html: &Html) -> Option<Url> {
    html.select(selector!(".paginator > .next"))
        .flat_map(|control| control.select(selector!("a[href]")))
        .find_map(|link| start_url.join(link.value().attr("href")?).ok())
}

/// Crawls one category: fetch, extract, follow the pagination control until
/// it runs out.  A failing first fetch yields no records at all.
pub async fn scrape_category<T: SubjectTrait>(
    client: &DoubanClient,
    start_url: &Url,
) -> anyhow::Result<Vec<T::Record>> {
    let mut records = vec![];
    let mut link = start_url.clone();
    loop {
        let Some(page) = client.fetch_listing(&link).await? else {
            break;
        };
        records.extend(T::extract(&page));
        match next_page_url(start_url, &page) {
            Some(next) => link = next,
            None => break,
        }
    }
    Ok(records)
}

/// Crawls every category of `T`'s domain in declaration order and
/// concatenates the records.
pub async fn scrape<T: SubjectTrait>(
    credentials: &Credentials,
    user_id: &UserId,
) -> anyhow::Result<Vec<T::Record>> {
    let mut records = vec![];
    for category in Category::iter() {
        let start_url = Url::parse(&T::category_url(category, user_id))?;
        info!("Scraping \"{category}\" records under {start_url}");
        let client = DoubanClient::new(&start_url, credentials)?;
        records.extend(scrape_category::<T>(&client, &start_url).await?);
    }
    Ok(records)
}
