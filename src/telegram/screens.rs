use std::borrow::Cow;

use strum::IntoEnumIterator as _;
use strum_macros::{AsRefStr, EnumIter};

use super::inline_buttons::InlineButtons;
use super::keyboards::{Button, Keyboard};
use super::outbound::{OutboundMessage, TextFormat};
use crate::app::Config;

/// Catalogue sections understood by the web app. Declaration order is display order,
/// `as_ref()` gives the slug passed as `?category=`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    StickerPacks,
    PremiumFeatures,
    DigitalCollectibles,
    GiftCards,
    CustomThemes,
    TelegramStars,
}

impl Category {
    #[must_use]
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Category::StickerPacks => t!("categories.sticker-packs"),
            Category::PremiumFeatures => t!("categories.premium-features"),
            Category::DigitalCollectibles => t!("categories.digital-collectibles"),
            Category::GiftCards => t!("categories.gift-cards"),
            Category::CustomThemes => t!("categories.custom-themes"),
            Category::TelegramStars => t!("categories.telegram-stars"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
pub enum Screen {
    MainMenu,
    Categories,
    Stars,
    Help,
}

impl Screen {
    /// `first_name` is only used by the main menu greeting
    pub fn render(self, config: &Config, first_name: Option<&str>) -> OutboundMessage {
        match self {
            Screen::MainMenu => render_main_menu(config, first_name),
            Screen::Categories => render_categories(config),
            Screen::Stars => render_stars(config),
            Screen::Help => render_help(config),
        }
    }
}

fn greeting_name(first_name: Option<&str>) -> Cow<'_, str> {
    match first_name.filter(|name| !name.is_empty()) {
        Some(name) => Cow::Borrowed(name),
        None => t!("main-menu.default-name"),
    }
}

pub fn main_menu_keyboard(config: &Config) -> Keyboard {
    #[rustfmt::skip]
    let rows = vec![
        vec![Button::launch(t!("inline-buttons.open-marketplace"), config.launch_url(None))],
        vec![InlineButtons::Categories.into(), InlineButtons::Stars.into()],
        vec![InlineButtons::Help.into()],
    ];

    Keyboard(rows)
}

pub fn render_main_menu(config: &Config, first_name: Option<&str>) -> OutboundMessage {
    OutboundMessage {
        text: t!("main-menu.welcome", name = greeting_name(first_name)).into_owned(),
        format: TextFormat::Plain,
        keyboard: main_menu_keyboard(config),
    }
}

fn render_categories(config: &Config) -> OutboundMessage {
    let mut rows: Vec<Vec<Button>> = Category::iter()
        .map(|category| {
            vec![Button::launch(
                category.label(),
                config.launch_url(Some(category.as_ref())),
            )]
        })
        .collect();

    rows.push(vec![InlineButtons::BackToMenu.into()]);

    OutboundMessage {
        text: t!("categories.title").into_owned(),
        format: TextFormat::Plain,
        keyboard: Keyboard(rows),
    }
}

fn render_stars(config: &Config) -> OutboundMessage {
    #[rustfmt::skip]
    let rows = vec![
        vec![Button::launch(t!("inline-buttons.buy-stars"), config.launch_url(Some(Category::TelegramStars.as_ref())))],
        vec![InlineButtons::BackToMenu.into()],
    ];

    OutboundMessage {
        text: t!("stars.text").into_owned(),
        format: TextFormat::Rich,
        keyboard: Keyboard(rows),
    }
}

fn render_help(config: &Config) -> OutboundMessage {
    #[rustfmt::skip]
    let rows = vec![
        vec![Button::launch(t!("inline-buttons.start-shopping"), config.launch_url(None))],
        vec![InlineButtons::BackToMenu.into()],
    ];

    OutboundMessage {
        text: t!("help.text").into_owned(),
        format: TextFormat::Rich,
        keyboard: Keyboard(rows),
    }
}

/// Reply to free text: a single launch button
pub fn render_redirect(config: &Config) -> OutboundMessage {
    OutboundMessage {
        text: t!("redirect.text").into_owned(),
        format: TextFormat::Plain,
        keyboard: Keyboard(vec![vec![Button::launch(
            t!("inline-buttons.open-marketplace"),
            config.launch_url(None),
        )]]),
    }
}
