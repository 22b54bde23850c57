use std::future::Future;

use strum_macros::AsRefStr;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MessageId, ParseMode};

use super::keyboards::Keyboard;
use crate::errors::{MarketError, MarketResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextFormat {
    Plain,
    /// HTML markup
    Rich,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMessage {
    pub text: String,
    pub format: TextFormat,
    pub keyboard: Keyboard,
}

impl OutboundMessage {
    fn parse_mode(&self) -> Option<ParseMode> {
        match self.format {
            TextFormat::Plain => None,
            TextFormat::Rich => Some(ParseMode::Html),
        }
    }
}

fn markup(keyboard: Keyboard) -> Option<InlineKeyboardMarkup> {
    (!keyboard.is_empty()).then(|| keyboard.into())
}

#[derive(Clone, Debug, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum OutboundAction {
    SendMessage {
        chat_id: ChatId,
        message: OutboundMessage,
    },
    EditMessage {
        chat_id: ChatId,
        message_id: MessageId,
        message: OutboundMessage,
    },
    DeleteMessage {
        chat_id: ChatId,
        message_id: MessageId,
    },
    AnswerCallback {
        callback_id: String,
    },
}

/// Everything the bot can ask the platform to do
pub trait Outbound: Sync {
    fn send_message(
        &self,
        chat_id: ChatId,
        message: OutboundMessage,
    ) -> impl Future<Output = MarketResult<()>> + Send;

    fn edit_message(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        message: OutboundMessage,
    ) -> impl Future<Output = MarketResult<()>> + Send;

    fn delete_message(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
    ) -> impl Future<Output = MarketResult<()>> + Send;

    fn answer_callback(&self, callback_id: String) -> impl Future<Output = MarketResult<()>> + Send;
}

impl Outbound for Bot {
    async fn send_message(&self, chat_id: ChatId, message: OutboundMessage) -> MarketResult<()> {
        let parse_mode = message.parse_mode();
        let OutboundMessage { text, keyboard, .. } = message;
        let mut request = Requester::send_message(self, chat_id, text);

        if let Some(parse_mode) = parse_mode {
            request = request.parse_mode(parse_mode);
        }

        if let Some(markup) = markup(keyboard) {
            request = request.reply_markup(markup);
        }

        request
            .await
            .map_err(MarketError::delivery("send message"))?;

        Ok(())
    }

    async fn edit_message(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        message: OutboundMessage,
    ) -> MarketResult<()> {
        let parse_mode = message.parse_mode();
        let OutboundMessage { text, keyboard, .. } = message;
        let mut request = Requester::edit_message_text(self, chat_id, message_id, text);

        if let Some(parse_mode) = parse_mode {
            request = request.parse_mode(parse_mode);
        }

        if let Some(markup) = markup(keyboard) {
            request = request.reply_markup(markup);
        }

        request
            .await
            .map_err(MarketError::delivery("edit message"))?;

        Ok(())
    }

    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> MarketResult<()> {
        Requester::delete_message(self, chat_id, message_id)
            .await
            .map_err(MarketError::delivery("delete message"))?;

        Ok(())
    }

    async fn answer_callback(&self, callback_id: String) -> MarketResult<()> {
        Requester::answer_callback_query(self, callback_id)
            .await
            .map_err(MarketError::delivery("answer callback"))?;

        Ok(())
    }
}

/// Executes actions in order. A failed action is logged and skipped, the rest still run.
/// Returns the number of failed actions.
#[tracing::instrument(skip_all, fields(actions = actions.len()))]
pub async fn deliver<O: Outbound>(outbound: &O, actions: Vec<OutboundAction>) -> usize {
    let mut failed = 0;

    for action in actions {
        let kind = action.as_ref().to_owned();

        let result = match action {
            OutboundAction::SendMessage { chat_id, message } => {
                outbound.send_message(chat_id, message).await
            },
            OutboundAction::EditMessage {
                chat_id,
                message_id,
                message,
            } => outbound.edit_message(chat_id, message_id, message).await,
            OutboundAction::DeleteMessage {
                chat_id,
                message_id,
            } => outbound.delete_message(chat_id, message_id).await,
            OutboundAction::AnswerCallback { callback_id } => {
                outbound.answer_callback(callback_id).await
            },
        };

        if let Err(err) = result {
            tracing::error!(err = ?err, action = kind, "Delivery failed");

            failed += 1;
        }
    }

    failed
}
