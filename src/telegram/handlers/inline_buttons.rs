use teloxide::dispatching::dialogue::GetChatId as _;
use teloxide::types::CallbackQuery;

use crate::telegram::dispatcher::{CallbackEvent, CallbackOrigin, MenuDispatcher};
use crate::telegram::outbound::{deliver, Outbound};

impl From<&CallbackQuery> for CallbackEvent {
    fn from(q: &CallbackQuery) -> Self {
        let message_id = q.message.as_ref().map(|message| message.id());

        Self {
            id: q.id.clone(),
            origin: q
                .chat_id()
                .zip(message_id)
                .map(|(chat_id, message_id)| CallbackOrigin {
                    chat_id,
                    message_id,
                }),
            data: q.data.clone(),
            first_name: Some(q.from.first_name.clone()),
        }
    }
}

#[tracing::instrument(skip_all, fields(user_id = %q.from.id, chat_id = q.chat_id().map(|chat_id| chat_id.0)))]
pub async fn handle<O: Outbound>(outbound: &O, dispatcher: &MenuDispatcher<'_>, q: &CallbackQuery) {
    let actions = dispatcher.handle_callback(&CallbackEvent::from(q));

    let failed = deliver(outbound, actions).await;

    if failed > 0 {
        tracing::warn!(failed, "Callback was not fully handled");
    }
}
