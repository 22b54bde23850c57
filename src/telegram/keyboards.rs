use teloxide::types::{InlineKeyboardButton, InlineKeyboardButtonKind, InlineKeyboardMarkup, WebAppInfo};
use url::Url;

use super::inline_buttons::InlineButtons;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    /// Opens the web app inside the client
    LaunchUrl(Url),
    Callback(InlineButtons),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn launch(label: impl Into<String>, url: Url) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::LaunchUrl(url),
        }
    }

    pub fn callback(button: InlineButtons) -> Self {
        Self {
            label: button.label().into_owned(),
            action: ButtonAction::Callback(button),
        }
    }
}

impl From<InlineButtons> for Button {
    fn from(button: InlineButtons) -> Self {
        Self::callback(button)
    }
}

impl From<Button> for InlineKeyboardButton {
    fn from(button: Button) -> Self {
        let kind = match button.action {
            ButtonAction::LaunchUrl(url) => InlineKeyboardButtonKind::WebApp(WebAppInfo { url }),
            ButtonAction::Callback(token) => InlineKeyboardButtonKind::CallbackData(token.to_string()),
        };

        InlineKeyboardButton::new(button.label, kind)
    }
}

/// Rows of buttons, top to bottom
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keyboard(pub Vec<Vec<Button>>);

impl Keyboard {
    pub fn rows(&self) -> &[Vec<Button>] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every button, row by row
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.0.iter().flatten()
    }
}

impl From<Keyboard> for InlineKeyboardMarkup {
    fn from(keyboard: Keyboard) -> Self {
        InlineKeyboardMarkup::new(
            keyboard
                .0
                .into_iter()
                .map(|row| row.into_iter().map(InlineKeyboardButton::from)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_button_carries_token() {
        let button: InlineKeyboardButton = Button::callback(InlineButtons::BackToMenu).into();

        assert_eq!(button.text, "🔙 Back to Menu");
        assert_eq!(
            button.kind,
            InlineKeyboardButtonKind::CallbackData("back_to_menu".into())
        );
    }

    #[test]
    fn launch_button_becomes_web_app() {
        let url = Url::parse("https://market.example.com/?category=gift-cards").unwrap();
        let button: InlineKeyboardButton = Button::launch("🎁 Gift Cards", url.clone()).into();

        assert_eq!(button.kind, InlineKeyboardButtonKind::WebApp(WebAppInfo { url }));
    }

    #[test]
    fn markup_keeps_row_layout() {
        let keyboard = Keyboard(vec![
            vec![InlineButtons::Categories.into(), InlineButtons::Stars.into()],
            vec![InlineButtons::Help.into()],
        ]);

        let markup: InlineKeyboardMarkup = keyboard.into();

        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 2);
        assert_eq!(markup.inline_keyboard[1].len(), 1);
    }
}
