use super::handler;
use super::message::{Message, PlaygroundMessage};
use super::state::State;
use super::view;
use crate::core::{PlaygroundController, SnippetCatalog, Timing};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    crossterm::{
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    Terminal,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::{io::stdout, panic};
use tokio::sync::mpsc;
use tracing::{error, info};

fn init_terminal() -> Result<Terminal<impl Backend>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = stdout().execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
        original_hook(panic_info);
    }));
}

fn draw<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut State,
    playground: &PlaygroundController,
) -> Result<()> {
    let mut max_scroll = state.max_scroll;
    let current: &State = state;
    terminal.draw(|f| max_scroll = view::render(current, playground, f))?;
    state.max_scroll = max_scroll;
    state.scroll = state.scroll.min(max_scroll);
    Ok(())
}

pub async fn start(catalog: SnippetCatalog, timing: Timing) -> Result<()> {
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, catalog, timing).await;
    restore_terminal()?;
    if let Err(err) = &result {
        error!(%err, "event loop failed");
    }
    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    catalog: SnippetCatalog,
    timing: Timing,
) -> Result<()> {
    let (mut playground, mut playground_events) = PlaygroundController::mount(catalog, timing);
    let mut state = State::default();

    let (key_sender, mut key_receiver) = mpsc::unbounded_channel::<KeyEvent>();
    let exit_flag = Arc::new(AtomicBool::new(false));
    let exit_flag_clone = exit_flag.clone();
    let ui_event_loop = tokio::task::spawn_blocking(move || -> Result<()> {
        while !exit_flag_clone.load(Ordering::Relaxed) {
            if let Some(key) = handler::user_event()? {
                if key_sender.send(key).is_err() {
                    break;
                }
            }
        }
        Ok(())
    });

    let outcome = async {
        draw(terminal, &mut state, &playground)?;
        loop {
            let msg = tokio::select! {
                key = key_receiver.recv() => match key {
                    Some(key) => Message::KeyPressed(key),
                    None => break,
                },
                Some(event) = playground_events.recv() => {
                    Message::Playground(PlaygroundMessage::Timer(event))
                }
                else => break,
            };

            handler::update(&mut state, &mut playground, msg);
            if state.quit {
                break;
            }
            draw(terminal, &mut state, &playground)?;
        }
        Ok::<(), anyhow::Error>(())
    }
    .await;

    exit_flag.store(true, Ordering::Relaxed);
    playground.teardown();
    drop(key_receiver);
    ui_event_loop.await??;
    info!("event loop finished");
    outcome
}
