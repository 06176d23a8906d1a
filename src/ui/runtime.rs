use crate::api::PredictClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_worker;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the terminal UI until the user quits.
///
/// The UI loop stays on this thread; requests run on a small tokio runtime.
pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("summariser-worker")
        .enable_all()
        .build()?;

    let client = {
        let _enter = runtime.enter();
        PredictClient::new(&config.api)?
    };

    // Raw mode and bracketed paste must be on before input is polled
    let (mut terminal, guard) = setup_terminal()?;

    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(client.endpoint());
    app.set_command_sender(spawn_worker(runtime.handle(), client, events.sender()));

    tracing::info!(endpoint = %app.endpoint(), "Starting summariser UI");

    loop {
        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => apply_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(200));
    tracing::info!("Summariser UI stopped");
    Ok(())
}

fn apply_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Paste(text) => app.on_paste(&text),
        AppEvent::Tick => app.on_tick(),
        // Next draw picks up the new size
        AppEvent::Resize(_, _) => {}
        AppEvent::Summary { request_id, result } => app.on_summary(request_id, result),
        AppEvent::InputClosed => {
            tracing::warn!("Terminal input closed, shutting down");
            app.request_quit();
        }
    }
}
