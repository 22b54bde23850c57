use std::collections::HashMap;
use std::str::FromStr;

use tracing_loki::Layer;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub fn loki() -> anyhow::Result<Option<Layer>> {
    let Ok(loki_url) = dotenv::var("LOKI_URL") else {
        return Ok(None);
    };

    if loki_url.is_empty() {
        return Ok(None);
    }

    let (layer, task) = tracing_loki::layer(
        url::Url::parse(&loki_url)?,
        vec![
            ("app".into(), "telemarket".into()),
            (
                "instance".into(),
                dotenv::var("LOKI_INSTANCE").unwrap_or_else(|_| "unknown".into()),
            ),
        ]
        .into_iter()
        .collect(),
        HashMap::new(),
    )?;

    tokio::spawn(task);

    Ok(Some(layer))
}

fn targets(level: &str) -> anyhow::Result<Targets> {
    Ok(Targets::new()
        .with_target(
            env!("CARGO_PKG_NAME").replace('-', "_"),
            tracing::Level::TRACE,
        )
        .with_target("teloxide", tracing::Level::INFO)
        .with_default(tracing::Level::from_str(level)?))
}

/// Must be called inside of the tokio runtime when `LOKI_URL` is set
pub fn init() -> anyhow::Result<()> {
    let loki = loki()?;

    let level = dotenv::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());

    let subscriber = tracing_subscriber::fmt()
        .with_file(false)
        .with_line_number(true)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    subscriber.with(loki).with(targets(&level)?).try_init()?;

    tracing::trace!(level = level.as_str(), "Logger initialized");

    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    use super::*;

    #[test]
    fn crate_is_traced_regardless_of_level() {
        let targets = targets("warn").unwrap();

        assert!(targets.would_enable("telemarket::telegram", &Level::TRACE));
        assert!(!targets.would_enable("hyper", &Level::INFO));
        assert!(targets.would_enable("teloxide::dispatching", &Level::INFO));
        assert!(!targets.would_enable("teloxide::dispatching", &Level::DEBUG));
    }

    #[test]
    fn broken_level_is_an_error() {
        assert!(targets("loud").is_err());
    }
}
