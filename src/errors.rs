pub type MarketResult<T, E = MarketError> = Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum MarketError {
    /// Required environment is absent or malformed. Fatal at startup.
    #[error("Configuration error: {0}")]
    Configuration(#[from] envy::Error),

    /// Token variable is present but blank. Fatal at startup.
    #[error("Configuration error: TELEGRAM_BOT_TOKEN is empty")]
    EmptyBotToken,

    /// Outbound call to the platform failed. Logged and dropped, never retried.
    #[error("Failed to {action}: {source}")]
    Delivery {
        action: &'static str,
        #[source]
        source: teloxide::RequestError,
    },

    /// Callback token outside of the known set
    #[error("Unknown callback token: {0:?}")]
    UnknownCallback(String),
}

impl MarketError {
    pub fn delivery(action: &'static str) -> impl FnOnce(teloxide::RequestError) -> Self {
        move |source| Self::Delivery { action, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_callback_message_quotes_token() {
        let err = MarketError::UnknownCallback("buy_now".into());

        assert_eq!(err.to_string(), "Unknown callback token: \"buy_now\"");
    }

    #[test]
    fn delivery_message_names_action() {
        let err = MarketError::delivery("answer callback")(teloxide::RequestError::Api(
            teloxide::ApiError::BotBlocked,
        ));

        assert!(err.to_string().starts_with("Failed to answer callback"));
    }
}
