use teloxide::prelude::*;
use teloxide::utils::command::BotCommands as _;

use crate::app::App;
use crate::telegram::commands::UserCommand;
use crate::telegram::handlers;
use crate::telegram::MenuDispatcher;

async fn bot_name(app: &'static App) -> String {
    match app.bot().get_me().await {
        Ok(me) => me.user.username.unwrap_or_default(),
        Err(err) => {
            tracing::error!(err = ?err, "Cannot fetch bot username. Only bare /start will be recognized");

            String::new()
        },
    }
}

#[tracing::instrument(skip_all)]
pub async fn work(app: &'static App) {
    if let Err(err) = app.bot().set_my_commands(UserCommand::bot_commands()).await {
        tracing::error!(err = ?err, "Failed to register bot commands");
    }

    let bot_name = bot_name(app).await;

    tracing::info!(bot_name = bot_name.as_str(), "Listening for updates");

    let dispatcher: &'static MenuDispatcher<'static> =
        Box::leak(Box::new(MenuDispatcher::new(app.config(), bot_name)));

    let handler = dptree::entry()
        .branch(
            Update::filter_message().endpoint(move |m: Message| async move {
                handlers::message::handle(app.bot(), dispatcher, &m).await;

                anyhow::Ok(())
            }),
        )
        .branch(Update::filter_callback_query().endpoint(
            move |q: CallbackQuery| async move {
                handlers::inline_buttons::handle(app.bot(), dispatcher, &q).await;

                anyhow::Ok(())
            },
        ));

    let mut dispatcher = Dispatcher::builder(app.bot().clone(), handler).build();

    let token = dispatcher.shutdown_token();

    tokio::spawn(async move {
        crate::utils::ctrl_c().await;

        match token.shutdown() {
            Ok(done) => done.await,
            Err(err) => tracing::warn!(err = ?err, "Dispatcher was not running"),
        }
    });

    dispatcher.dispatch().await;

    tracing::info!("Bot stopped");
}
