use std::env;

use url::Url;

use crate::error::{AppError, AppResult};

/// Project the seed targets when `SUPABASE_URL` is not set
pub const DEFAULT_SUPABASE_URL: &str = "https://yfxuqyvsccheqhzjopuj.supabase.co";

#[derive(Clone, Debug)]
pub struct Config {
    pub supabase_url: Url,
    pub api_key: Option<String>,
}

impl Config {
    pub fn new(supabase_url: &str, api_key: Option<String>) -> AppResult<Self> {
        let supabase_url = Url::parse(supabase_url)?;
        if supabase_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "SUPABASE_URL must be an absolute http(s) URL, got {}",
                supabase_url
            )));
        }

        Ok(Config {
            supabase_url,
            // An empty key is as good as no key
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }

    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Self::new(
            &env::var("SUPABASE_URL").unwrap_or_else(|_| DEFAULT_SUPABASE_URL.to_string()),
            env::var("SUPABASE_KEY").ok(),
        )
    }

    /// Base of the PostgREST endpoints, always ending in `/rest/v1/`
    pub fn rest_url(&self) -> AppResult<Url> {
        let mut base = self.supabase_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join("rest/v1/")?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_url_from_bare_host() {
        let config = Config::new("https://example.supabase.co", None).unwrap();
        assert_eq!(
            config.rest_url().unwrap().as_str(),
            "https://example.supabase.co/rest/v1/"
        );
    }

    #[test]
    fn test_rest_url_keeps_path_prefix() {
        let config = Config::new("http://127.0.0.1:54321/proxy", None).unwrap();
        assert_eq!(
            config.rest_url().unwrap().as_str(),
            "http://127.0.0.1:54321/proxy/rest/v1/"
        );
    }

    #[test]
    fn test_empty_key_treated_as_missing() {
        let config = Config::new(DEFAULT_SUPABASE_URL, Some(String::new())).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_rejects_non_base_url() {
        let result = Config::new("mailto:ops@example.com", Some("key".to_string()));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_relative_url() {
        let result = Config::new("not a url", None);
        assert!(matches!(result, Err(AppError::InvalidUrl(_))));
    }
}
