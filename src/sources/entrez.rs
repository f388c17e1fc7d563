//! NCBI E-utilities record fetcher.
use std::io::BufReader;
use std::time::Duration;

use log::{debug, info};
use url::Url;

use crate::error::Error;

use super::{pubmed, Fetcher, RawRecord};

const BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/";
const DATABASE: &str = "pubmed";

/// Holds the efetch endpoint and
/// http client that will make the requests.
pub struct EntrezFetcher {
    endpoint: Url,
    tool: String,
    email: Option<String>,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl EntrezFetcher {
    /// Build the efetch url for a set of ids.
    pub fn url(&self, ids: &[String]) -> Result<Url, Error> {
        let ids = ids.join(",");
        let mut params = vec![
            ("db", DATABASE),
            ("id", ids.as_str()),
            ("retmode", "xml"),
            ("tool", self.tool.as_str()),
        ];
        if let Some(email) = &self.email {
            params.push(("email", email.as_str()));
        }
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.as_str()));
        }

        Ok(Url::parse_with_params(self.endpoint.as_str(), &params)?)
    }
}

impl Fetcher for EntrezFetcher {
    fn fetch(&self, ids: &[String]) -> Result<Vec<RawRecord>, Error> {
        // fire blocking request, then decode the body as it arrives.
        let url = self.url(ids)?;
        debug!("fetching {}", url);
        let response = self.client.get(url).send()?.error_for_status()?;
        let records = pubmed::parse_article_set(BufReader::new(response))?;
        info!("got {}/{} records", records.len(), ids.len());
        Ok(records)
    }
}

/// [EntrezFetcher] builder.
pub struct EntrezFetcherBuilder {
    base_url: String,
    tool: String,
    email: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
}

impl Default for EntrezFetcherBuilder {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            tool: env!("CARGO_PKG_NAME").to_string(),
            email: None,
            api_key: None,
            timeout: Duration::from_secs(60),
        }
    }
}

impl EntrezFetcherBuilder {
    pub fn base_url(&mut self, base_url: &str) -> &mut Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn tool(&mut self, tool: &str) -> &mut Self {
        self.tool = tool.to_string();
        self
    }

    pub fn email(&mut self, email: Option<String>) -> &mut Self {
        self.email = email;
        self
    }

    pub fn api_key(&mut self, api_key: Option<String>) -> &mut Self {
        self.api_key = api_key;
        self
    }

    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = timeout;
        self
    }

    pub fn build(&self) -> Result<EntrezFetcher, Error> {
        // join drops the last segment if there's no trailing slash
        let base = if self.base_url.ends_with('/') {
            Url::parse(&self.base_url)?
        } else {
            Url::parse(&format!("{}/", self.base_url))?
        };
        let endpoint = base.join("efetch.fcgi")?;

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        Ok(EntrezFetcher {
            endpoint,
            tool: self.tool.clone(),
            email: self.email.clone(),
            api_key: self.api_key.clone(),
            client,
        })
    }
}
