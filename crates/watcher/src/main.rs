use homework_common::config::AppConfig;
use homework_notifier::TelegramNotifier;
use homework_watcher::client::PracticumClient;
use homework_watcher::poller::HomeworkPoller;
use homework_watcher::telemetry;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing before the config check
    telemetry::init_tracing(&AppConfig::log_file_from_env())?;

    tracing::info!("Homework watcher starting...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Fatal configuration error, refusing to start");
            return Err(e.into());
        }
    };

    tracing::info!(
        endpoint = %config.endpoint,
        chat_id = %config.telegram_chat_id,
        retry_interval_secs = config.retry_interval.as_secs(),
        request_timeout_secs = config.request_timeout.as_secs(),
        "Configuration loaded"
    );

    let api = PracticumClient::from_config(&config)?;
    let notifier = TelegramNotifier::from_config(&config)?;
    let mut poller = HomeworkPoller::from_config(api, notifier, &config);

    tokio::select! {
        _ = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping...");
        }
    }

    tracing::info!("Homework watcher stopped.");
    Ok(())
}
