use std::borrow::Cow;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::screens::Screen;

/// Callback tokens attached to inline buttons. The set is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum InlineButtons {
    Categories,
    Stars,
    Help,
    BackToMenu,
}

impl InlineButtons {
    #[must_use]
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            InlineButtons::Categories => t!("inline-buttons.categories"),
            InlineButtons::Stars => t!("inline-buttons.stars"),
            InlineButtons::Help => t!("inline-buttons.help"),
            InlineButtons::BackToMenu => t!("inline-buttons.back-to-menu"),
        }
    }

    /// Screen this button leads to
    #[must_use]
    pub fn target(&self) -> Screen {
        match self {
            InlineButtons::Categories => Screen::Categories,
            InlineButtons::Stars => Screen::Stars,
            InlineButtons::Help => Screen::Help,
            InlineButtons::BackToMenu => Screen::MainMenu,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator as _;

    use super::*;

    #[test]
    fn tokens_are_fixed() {
        let tokens: Vec<_> = InlineButtons::iter().map(|button| button.to_string()).collect();

        assert_eq!(tokens, vec!["categories", "stars", "help", "back_to_menu"]);
    }

    #[test]
    fn parse_known_tokens() {
        for button in InlineButtons::iter() {
            assert_eq!(button.as_ref().parse::<InlineButtons>(), Ok(button));
        }
    }

    #[test]
    fn parse_unknown_token() {
        assert!("checkout".parse::<InlineButtons>().is_err());
        assert!("Categories".parse::<InlineButtons>().is_err());
        assert!("".parse::<InlineButtons>().is_err());
    }

    #[test]
    fn every_token_targets_one_screen() {
        assert_eq!(InlineButtons::Categories.target(), Screen::Categories);
        assert_eq!(InlineButtons::Stars.target(), Screen::Stars);
        assert_eq!(InlineButtons::Help.target(), Screen::Help);
        assert_eq!(InlineButtons::BackToMenu.target(), Screen::MainMenu);
    }
}
