use std::time::Instant;

use serde::Deserialize;
use teloxide::Bot;
use url::Url;

use crate::errors::{MarketError, MarketResult};

pub const PLACEHOLDER_WEB_APP_URL: &str = "https://your-webapp.onrender.com";
const DEFAULT_SERVER_HTTP_ADDRESS: &str = "0.0.0.0:3000";

#[derive(Deserialize, Debug)]
struct EnvConfig {
    telegram_bot_token: String,
    web_app_url: Option<String>,
    server_http_address: Option<String>,
    port: Option<u16>,
}

impl EnvConfig {
    fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> MarketResult<Self> {
        let env: Self = envy::from_iter(vars)?;

        if env.telegram_bot_token.trim().is_empty() {
            return Err(MarketError::EmptyBotToken);
        }

        Ok(env)
    }
}

/// Immutable settings read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    web_app_url: Url,
    server_http_address: String,
}

impl Config {
    pub fn new(web_app_url: Option<&str>, server_http_address: Option<&str>, port: Option<u16>) -> Self {
        let address = server_http_address
            .filter(|address| !address.is_empty())
            .unwrap_or(DEFAULT_SERVER_HTTP_ADDRESS);

        let server_http_address = match port {
            Some(port) => {
                let host = address.rsplit_once(':').map_or(address, |(host, _)| host);

                format!("{host}:{port}")
            },
            None => address.to_owned(),
        };

        Self {
            web_app_url: resolve_web_app_url(web_app_url),
            server_http_address,
        }
    }

    pub fn web_app_url(&self) -> &Url {
        &self.web_app_url
    }

    /// Web app URL, optionally pointed at a single category
    pub fn launch_url(&self, category: Option<&str>) -> Url {
        let mut url = self.web_app_url.clone();

        if let Some(category) = category {
            url.query_pairs_mut().append_pair("category", category);
        }

        url
    }

    pub fn server_http_address(&self) -> &str {
        &self.server_http_address
    }
}

fn placeholder_url() -> Url {
    Url::parse(PLACEHOLDER_WEB_APP_URL).unwrap_or_else(|_| unreachable!("placeholder is a valid url"))
}

fn resolve_web_app_url(raw: Option<&str>) -> Url {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        tracing::warn!(
            placeholder = PLACEHOLDER_WEB_APP_URL,
            "WEB_APP_URL is not set. Launch buttons will point to the placeholder"
        );

        return placeholder_url();
    };

    match Url::parse(raw) {
        Ok(url) => url,
        Err(err) => {
            tracing::warn!(
                err = ?err,
                web_app_url = raw,
                placeholder = PLACEHOLDER_WEB_APP_URL,
                "WEB_APP_URL is not a valid url. Launch buttons will point to the placeholder"
            );

            placeholder_url()
        },
    }
}

pub struct App {
    bot: Bot,
    config: Config,
    started_at: Instant,
}

impl App {
    pub fn new(bot: Bot, config: Config) -> Self {
        Self {
            bot,
            config,
            started_at: Instant::now(),
        }
    }

    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn init() -> MarketResult<&'static Self> {
        tracing::trace!("Init application");

        dotenv::dotenv().ok();

        let env = EnvConfig::from_vars(std::env::vars())?;

        let config = Config::new(
            env.web_app_url.as_deref(),
            env.server_http_address.as_deref(),
            env.port,
        );

        let app = Box::new(Self::new(Bot::new(&env.telegram_bot_token), config));

        // Lives for the whole process, shared by the bot worker and the health server
        Ok(&*Box::leak(app))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(vars: &[(&str, &str)]) -> Vec<(String, String)> {
        vars.iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[test]
    fn env_with_token() {
        let env = EnvConfig::from_vars(vars(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("WEB_APP_URL", "https://market.example.com"),
            ("PORT", "10000"),
        ]))
        .unwrap();

        assert_eq!(env.telegram_bot_token, "123:abc");
        assert_eq!(env.web_app_url.as_deref(), Some("https://market.example.com"));
        assert_eq!(env.port, Some(10000));
    }

    #[test]
    fn missing_token_is_configuration_error() {
        let err = EnvConfig::from_vars(vars(&[("WEB_APP_URL", "https://market.example.com")]))
            .unwrap_err();

        assert!(matches!(err, MarketError::Configuration(_)));
    }

    #[test]
    fn empty_token_is_configuration_error() {
        for token in ["", "   "] {
            let err = EnvConfig::from_vars(vars(&[("TELEGRAM_BOT_TOKEN", token)])).unwrap_err();

            assert!(matches!(err, MarketError::EmptyBotToken));
            assert!(err.to_string().starts_with("Configuration error"));
        }
    }

    #[test]
    fn launch_url_without_category() {
        let config = Config::new(Some("https://market.example.com"), None, None);

        assert_eq!(config.launch_url(None).as_str(), "https://market.example.com/");
    }

    #[test]
    fn launch_url_with_category() {
        let config = Config::new(Some("https://market.example.com/app"), None, None);

        assert_eq!(
            config.launch_url(Some("gift-cards")).as_str(),
            "https://market.example.com/app?category=gift-cards"
        );
    }

    #[test]
    fn missing_web_app_url_falls_back_to_placeholder() {
        let config = Config::new(None, None, None);

        assert_eq!(config.web_app_url().as_str(), "https://your-webapp.onrender.com/");
    }

    #[test]
    fn blank_web_app_url_falls_back_to_placeholder() {
        let config = Config::new(Some("   "), None, None);

        assert_eq!(config.web_app_url().as_str(), "https://your-webapp.onrender.com/");
    }

    #[test]
    fn broken_web_app_url_falls_back_to_placeholder() {
        let config = Config::new(Some("not a url"), None, None);

        assert_eq!(config.web_app_url().as_str(), "https://your-webapp.onrender.com/");
    }

    #[test]
    fn default_server_address() {
        let config = Config::new(None, None, None);

        assert_eq!(config.server_http_address(), "0.0.0.0:3000");
    }

    #[test]
    fn port_overrides_server_address_port() {
        let config = Config::new(None, Some("127.0.0.1:8080"), Some(10000));

        assert_eq!(config.server_http_address(), "127.0.0.1:10000");
    }
}
