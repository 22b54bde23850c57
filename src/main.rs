use telemarket::app::App;
use telemarket::{infrastructure, utils, workers};

async fn run() -> anyhow::Result<()> {
    infrastructure::logger::init()?;

    tracing::info!(
        git_commit_timestamp = env!("GIT_COMMIT_TIMESTAMP"),
        git_sha = env!("GIT_SHA"),
        "Starting TeleMarket bot..."
    );

    let app = match App::init() {
        Ok(app) => app,
        Err(err) => {
            tracing::error!(err = %err, "Cannot start without configuration");

            return Err(err.into());
        },
    };

    tracing::info!(
        web_app_url = %app.config().web_app_url(),
        "Web app url configured"
    );

    tokio::spawn(utils::listen_for_ctrl_c());

    let server = tokio::spawn(workers::server::work(app));

    workers::bot::work(app).await;

    // Bot is down: take the health endpoint down with it
    utils::shutdown();
    server.await.ok();

    Ok(())
}

#[tokio::main(worker_threads = 4)]
async fn main() -> anyhow::Result<()> {
    run().await
}
