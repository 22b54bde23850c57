//! Maps inbound events to the actions the bot has to perform.
//!
//! Nothing here talks to the network or keeps state between events: the same event
//! always yields the same actions. Delivery is done by [`super::outbound::deliver`].

use teloxide::types::{ChatId, MessageId};

use super::commands::UserCommand;
use super::inline_buttons::InlineButtons;
use super::outbound::{OutboundAction, OutboundMessage};
use super::screens::{self, Screen};
use crate::app::Config;
use crate::errors::MarketError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandEvent {
    pub chat_id: ChatId,
    pub first_name: Option<String>,
}

/// Message the pressed button is attached to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallbackOrigin {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackEvent {
    pub id: String,
    /// `None` when the platform no longer exposes the message
    pub origin: Option<CallbackOrigin>,
    pub data: Option<String>,
    pub first_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEvent {
    pub chat_id: ChatId,
    pub text: Option<String>,
    pub first_name: Option<String>,
}

pub struct MenuDispatcher<'a> {
    config: &'a Config,
    bot_name: String,
}

impl<'a> MenuDispatcher<'a> {
    pub fn new(config: &'a Config, bot_name: impl Into<String>) -> Self {
        Self {
            config,
            bot_name: bot_name.into(),
        }
    }

    fn send(&self, chat_id: ChatId, message: OutboundMessage) -> OutboundAction {
        OutboundAction::SendMessage { chat_id, message }
    }

    /// Start command: greet the sender with the main menu
    #[tracing::instrument(skip_all, fields(chat_id = %event.chat_id))]
    pub fn handle_command(&self, event: &CommandEvent) -> Vec<OutboundAction> {
        let message = screens::render_main_menu(self.config, event.first_name.as_deref());

        vec![self.send(event.chat_id, message)]
    }

    /// Button press. The callback is always answered, last, even for unknown tokens.
    #[tracing::instrument(
        skip_all,
        fields(
            callback_id = %event.id,
            chat_id = event.origin.map(|origin| origin.chat_id.0),
            data = ?event.data,
        )
    )]
    pub fn handle_callback(&self, event: &CallbackEvent) -> Vec<OutboundAction> {
        let mut actions = Vec::with_capacity(2);

        match event.data.as_deref().unwrap_or_default().parse::<InlineButtons>() {
            Ok(button) => {
                if let Some(action) = self.screen_action(button, event) {
                    actions.push(action);
                }
            },
            Err(_) => {
                let err = MarketError::UnknownCallback(event.data.clone().unwrap_or_default());

                tracing::warn!(err = %err, "Callback left without screen change");
            },
        }

        actions.push(OutboundAction::AnswerCallback {
            callback_id: event.id.clone(),
        });

        actions
    }

    fn screen_action(&self, button: InlineButtons, event: &CallbackEvent) -> Option<OutboundAction> {
        let screen = button.target();

        let Some(origin) = event.origin else {
            tracing::warn!(screen = screen.as_ref(), "Callback message is not available");

            return None;
        };

        tracing::debug!(screen = screen.as_ref(), "Switching screen");

        // Main menu is edited in place as well, so the chat keeps a single menu message
        Some(OutboundAction::EditMessage {
            chat_id: origin.chat_id,
            message_id: origin.message_id,
            message: screen.render(self.config, event.first_name.as_deref()),
        })
    }

    /// Free text: point the user to the start command and the web app
    #[tracing::instrument(skip_all, fields(chat_id = %event.chat_id))]
    pub fn handle_plain_message(&self, event: &MessageEvent) -> Vec<OutboundAction> {
        vec![self.send(event.chat_id, screens::render_redirect(self.config))]
    }

    /// Routes any inbound message: start command, other commands (ignored) or free text
    pub fn handle_message(&self, event: &MessageEvent) -> Vec<OutboundAction> {
        let Some(text) = event.text.as_deref() else {
            return vec![];
        };

        if !text.starts_with('/') {
            return self.handle_plain_message(event);
        }

        match UserCommand::recognize(text, &self.bot_name) {
            Some(UserCommand::Start(_)) => self.handle_command(&CommandEvent {
                chat_id: event.chat_id,
                first_name: event.first_name.clone(),
            }),
            None => {
                tracing::debug!(chat_id = %event.chat_id, text, "Ignoring unknown command");

                vec![]
            },
        }
    }
}
