use teloxide::types::Message;

use super::HandleStatus;
use crate::telegram::dispatcher::{MenuDispatcher, MessageEvent};
use crate::telegram::outbound::{deliver, Outbound};

impl From<&Message> for MessageEvent {
    fn from(m: &Message) -> Self {
        Self {
            chat_id: m.chat.id,
            text: m.text().map(ToOwned::to_owned),
            first_name: m.from.as_ref().map(|user| user.first_name.clone()),
        }
    }
}

#[tracing::instrument(skip_all, fields(chat_id = %m.chat.id))]
pub async fn handle<O: Outbound>(
    outbound: &O,
    dispatcher: &MenuDispatcher<'_>,
    m: &Message,
) -> HandleStatus {
    let actions = dispatcher.handle_message(&MessageEvent::from(m));

    if actions.is_empty() {
        return HandleStatus::Skipped;
    }

    let failed = deliver(outbound, actions).await;

    if failed > 0 {
        tracing::warn!(failed, "Reply was not fully delivered");
    }

    HandleStatus::Handled
}
