use std::{env, net::SocketAddr};

use url::Url;

use crate::{error::AppError, query::KeywordMatch};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub trips_api_url: Url,
    pub listen_addr: SocketAddr,
    pub keyword_match: KeywordMatch,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let trips_api_url = env::var("TRIPS_API_URL")
            .map_err(|_| AppError::Config("TRIPS_API_URL is not defined".into()))?;
        let trips_api_url = Url::parse(&trips_api_url)
            .map_err(|err| AppError::Config(format!("invalid TRIPS_API_URL: {err}")))?;

        let listen_addr: SocketAddr = env::var("APP_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?;

        let keyword_match = match env::var("KEYWORD_REGEX").as_deref() {
            Ok("true") => KeywordMatch::Regex,
            _ => KeywordMatch::Substring,
        };

        Ok(Self {
            trips_api_url,
            listen_addr,
            keyword_match,
        })
    }
}
