use std::fmt::Display;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::error::AppResult;

const APIKEY: HeaderName = HeaderName::from_static("apikey");
const PREFER: HeaderName = HeaderName::from_static("prefer");

/// PostgREST client for the Supabase data API.
///
/// Every request carries the same static header set: `apikey` and a bearer
/// `Authorization` (only when a key is configured), a JSON content type and
/// `Prefer: return=representation` so inserts echo the created rows.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    rest_url: Url,
}

impl RestClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .default_headers(default_headers(config.api_key.as_deref())?)
            .build()?;

        Ok(Self {
            client,
            rest_url: config.rest_url()?,
        })
    }

    pub fn table_url(&self, table: &str) -> AppResult<Url> {
        Ok(self.rest_url.join(table)?)
    }

    /// `GET /rest/v1/{table}` with PostgREST filter parameters
    pub async fn select(&self, table: &str, params: &[(&str, String)]) -> AppResult<Response> {
        let url = self.table_url(table)?;
        tracing::debug!("GET {} params={:?}", url, params);

        let response = self.client.get(url).query(params).send().await?;
        tracing::debug!("GET {} -> {}", table, response.status());
        Ok(response)
    }

    /// `POST /rest/v1/{table}` with a JSON body
    pub async fn insert<T: Serialize>(&self, table: &str, body: &T) -> AppResult<Response> {
        let url = self.table_url(table)?;
        tracing::debug!("POST {}", url);

        let response = self.client.post(url).json(body).send().await?;
        tracing::debug!("POST {} -> {}", table, response.status());
        Ok(response)
    }
}

/// PostgREST equality filter value (`eq.<value>`)
pub fn eq(value: impl Display) -> String {
    format!("eq.{}", value)
}

fn default_headers(api_key: Option<&str>) -> AppResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    if let Some(key) = api_key {
        let mut apikey = HeaderValue::from_str(key)?;
        apikey.set_sensitive(true);
        headers.insert(APIKEY, apikey);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", key))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
    }

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(PREFER, HeaderValue::from_static("return=representation"));
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_filter() {
        assert_eq!(eq("test119-ca665cae"), "eq.test119-ca665cae");
        assert_eq!(eq(12000), "eq.12000");
    }

    #[test]
    fn test_default_headers_with_key() {
        let headers = default_headers(Some("secret")).unwrap();
        assert_eq!(headers.get("apikey").unwrap(), "secret");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer secret");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get("prefer").unwrap(), "return=representation");
    }

    #[test]
    fn test_default_headers_without_key() {
        let headers = default_headers(None).unwrap();
        assert!(headers.get("apikey").is_none());
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_key_with_newline_rejected() {
        assert!(default_headers(Some("bad\nkey")).is_err());
    }

    #[test]
    fn test_table_url() {
        let config = Config::new("https://example.supabase.co", None).unwrap();
        let client = RestClient::new(&config).unwrap();
        assert_eq!(
            client.table_url("services").unwrap().as_str(),
            "https://example.supabase.co/rest/v1/services"
        );
    }
}
