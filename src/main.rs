mod common;
mod config;
mod network;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use network::{ApiWorker, BackendClient};
use tokio::sync::mpsc;
use ui::GhassanApp;
use ui::router::Route;
use ui::state::chat::ChatOptions;

#[derive(Parser)]
#[command(
    name = "ghassan",
    version,
    about = "Desktop client for the Ghassan Omani literature assistant"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Backend base URL, overrides config and environment
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,
    /// View to open on start (/, /audiobooks, /contact, /knowledge, /upload)
    #[arg(long, default_value = "/")]
    route: String,
    /// Continue an existing chat session instead of opening a new one
    #[arg(long, value_name = "SESSION_ID")]
    resume: Option<String>,
    /// Use the advanced chat endpoint
    #[arg(long)]
    advanced: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config)
        .with_env_overrides()
        .with_backend_override(cli.backend_url);

    let client = BackendClient::new(&app_config.backend_url)?;
    let route = Route::from_path(&cli.route);
    let chat_options = ChatOptions {
        advanced: cli.advanced || app_config.advanced_chat,
        history_limit: app_config.history_limit,
        resume_session: cli.resume,
    };

    // 1. Tạo các kênh giao tiếp (Channels)
    // UI -> API worker
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // API worker -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    // 2. Khởi chạy API worker (Chạy ngầm)
    tokio::spawn(ApiWorker::new(client, event_tx, cmd_rx).run());

    // 3. Khởi chạy UI (Chạy trên Main Thread)
    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);
    let mut chat_options = Some(chat_options);
    let font_path = app_config.font_path.clone();

    eframe::run_native(
        "غسان",
        options,
        Box::new(move |cc| {
            let (Some(event_receiver), Some(chat_options)) = (event_rx.take(), chat_options.take())
            else {
                return Err("GhassanApp should only be initialized once".into());
            };

            log::info!(
                "Client started against {} on {}",
                app_config.backend_url,
                route.path()
            );

            Ok(Box::new(GhassanApp::new(
                cc,
                cmd_tx.clone(),
                event_receiver,
                route,
                chat_options,
                font_path.as_deref(),
            )))
        }),
    )?;

    Ok(())
}
