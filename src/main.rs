use ask_tui::app::{App, AppMessage};
use ask_tui::cli::{parse_args, run_ask_command, version_line, CliCommand, CliOverrides, USAGE};
use ask_tui::config::ClientConfig;
use ask_tui::input::{InputAction, KeybindingConfig};
use ask_tui::logging;
use ask_tui::query::QueryClient;
use ask_tui::terminal::{setup_panic_hook, TerminalManager};
use ask_tui::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

/// Animation tick
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("ask-tui: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let (overrides, one_shot) = match command {
        CliCommand::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        CliCommand::Ask {
            question,
            overrides,
        } => (overrides, Some(question)),
        CliCommand::RunTui(overrides) => (overrides, None),
    };

    color_eyre::install()?;

    let config = load_config(&overrides)?;
    if let Some(path) = &config.log_file {
        logging::init(path)?;
    }
    info!(
        endpoint = %config.endpoint,
        submit_policy = ?config.submit_policy,
        one_shot = one_shot.is_some(),
        "starting"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let client = Arc::new(QueryClient::with_reqwest(config.endpoint.clone()));

    if let Some(question) = one_shot {
        let code = runtime.block_on(run_ask_command(
            &client,
            &question,
            &mut io::stdout(),
            &mut io::stderr(),
        ));
        std::process::exit(code);
    }

    setup_panic_hook();
    let mut term = TerminalManager::new()?;
    let mut app = App::new(client, &config);

    let result = runtime.block_on(run_app(term.terminal(), &mut app));

    term.restore()?;
    result
}

fn load_config(overrides: &CliOverrides) -> Result<ClientConfig> {
    let config = ClientConfig::from_env()?.apply_overrides(overrides);
    config.validate()?;
    Ok(config)
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let keybindings = KeybindingConfig::new();
    let mut event_stream = EventStream::new();

    // Take the receiver so select! can own it
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    while !app.should_quit {
        if app.needs_redraw || app.state().is_pending() {
            let size = terminal.size()?;
            ui::sync_answer_scroll(app, Rect::new(0, 0, size.width, size.height));
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if let Some(action) = keybindings.action_for(key) {
                            app.apply_action(action);
                        }
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.apply_action(InputAction::paste(&text));
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }
    }

    info!("quitting");
    Ok(())
}
