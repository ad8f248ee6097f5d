use postboard::app::{App, AppMessage};
use postboard::cli::{parse_args, version_string, CliCommand, USAGE};
use postboard::config::AppConfig;
use postboard::logging::init_logging;
use postboard::terminal::{setup_panic_hook, TerminalManager};
use postboard::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Spinner frame interval.
const TICK_RATE: Duration = Duration::from_millis(80);

fn main() -> Result<()> {
    let config = match parse_args(std::env::args()) {
        Ok(CliCommand::Version) => {
            println!("{}", version_string());
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(CliCommand::Run(config)) => config,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    // The TUI owns stdout, so logs go to a file. Running without them is fine.
    if let Err(e) = init_logging(&config.log_path()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        url = %config.posts_url,
        data_dir = ?config.data_dir,
        "starting"
    );

    let mut app = App::from_config(&config)?;
    let mut manager = TerminalManager::new()?;
    app.start();

    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore();

    // Let queued favorite saves finish before exiting
    app.shutdown().await;

    if let Err(ref e) = result {
        error!(error = %e, "event loop failed");
    }
    info!("exiting");
    result
}

/// Draw when dirty and react to key presses, background completions and
/// spinner ticks until the user quits.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    let mut ticker = tokio::time::interval(TICK_RATE);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        error!(error = %e, "terminal event error");
                    }
                    // Input closed; nothing more can happen
                    None => app.quit(),
                }
            }

            Some(message) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
