use teloxide::utils::command::BotCommands;

#[derive(BotCommands, PartialEq, Eq, Debug, Clone)]
#[command(rename_rule = "snake_case")]
pub enum UserCommand {
    // Payload is the deep-link parameter, if any. It is not interpreted.
    #[command(description = "open the marketplace menu")]
    Start(String),
}

impl UserCommand {
    /// Command addressed to this bot, or `None` for anything else
    /// (plain text, unknown commands, commands meant for another bot)
    pub fn recognize(text: &str, bot_name: &str) -> Option<Self> {
        Self::parse(text, bot_name).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognize_start() {
        assert_eq!(
            UserCommand::recognize("/start", "TeleMarketBot"),
            Some(UserCommand::Start(String::new()))
        );
    }

    #[test]
    fn recognize_start_with_bot_mention() {
        assert!(UserCommand::recognize("/start@TeleMarketBot", "TeleMarketBot").is_some());
    }

    #[test]
    fn recognize_start_with_deep_link() {
        assert_eq!(
            UserCommand::recognize("/start promo_42", "TeleMarketBot"),
            Some(UserCommand::Start("promo_42".into()))
        );
    }

    #[test]
    fn ignore_start_for_another_bot() {
        assert_eq!(UserCommand::recognize("/start@OtherBot", "TeleMarketBot"), None);
    }

    #[test]
    fn ignore_unknown_commands() {
        assert_eq!(UserCommand::recognize("/help", "TeleMarketBot"), None);
        assert_eq!(UserCommand::recognize("/starts", "TeleMarketBot"), None);
    }

    #[test]
    fn ignore_plain_text() {
        assert_eq!(UserCommand::recognize("start", "TeleMarketBot"), None);
    }

    #[test]
    fn start_is_listed() {
        let descriptions = UserCommand::descriptions().to_string();

        assert!(descriptions.contains("/start"));
    }
}
