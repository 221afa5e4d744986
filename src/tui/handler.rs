use super::message::{Message, NewsletterMessage, PageMessage, PlaygroundMessage};
use super::state::{Mode, State, Subscription};
use crate::core::{Direction, PlaygroundController};
use anyhow::Result;
use crossterm::event;
use crossterm::event::{Event, KeyCode, KeyEvent};
use std::time::Duration;
use tracing::{debug, info};

const PAGE_STEP: i32 = 10;

pub fn user_event() -> Result<Option<KeyEvent>> {
    if event::poll(Duration::from_millis(10))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == event::KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}

pub fn handle_key(mode: Mode, key: KeyEvent) -> Option<Message> {
    match mode {
        Mode::Navigate => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
            KeyCode::Left | KeyCode::Char('h') => {
                Some(Message::Playground(PlaygroundMessage::Previous))
            }
            KeyCode::Right | KeyCode::Char('l') => {
                Some(Message::Playground(PlaygroundMessage::Next))
            }
            KeyCode::Enter | KeyCode::Char('r') => Some(Message::Playground(PlaygroundMessage::Run)),
            KeyCode::Up | KeyCode::Char('k') => Some(Message::Page(PageMessage::Scroll(-1))),
            KeyCode::Down | KeyCode::Char('j') => Some(Message::Page(PageMessage::Scroll(1))),
            KeyCode::PageUp => Some(Message::Page(PageMessage::Scroll(-PAGE_STEP))),
            KeyCode::PageDown => Some(Message::Page(PageMessage::Scroll(PAGE_STEP))),
            KeyCode::Home | KeyCode::Char('g') => Some(Message::Page(PageMessage::ScrollToTop)),
            KeyCode::Char('s') => Some(Message::Newsletter(NewsletterMessage::Focus)),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),
            _ => None,
        },
        Mode::EditNewsletter => match key.code {
            KeyCode::Esc => Some(Message::Newsletter(NewsletterMessage::Blur)),
            KeyCode::Enter => Some(Message::Newsletter(NewsletterMessage::Subscribe)),
            _ => Some(Message::Newsletter(NewsletterMessage::Input(key))),
        },
    }
}

pub fn update(state: &mut State, playground: &mut PlaygroundController, msg: Message) {
    match msg {
        Message::KeyPressed(key) => {
            if let Some(msg) = handle_key(state.mode, key) {
                update(state, playground, msg);
            }
        }
        Message::Quit => {
            info!("quit requested");
            state.quit = true;
        }
        Message::ToggleHelp => state.show_help = !state.show_help,
        Message::Playground(msg) => match msg {
            PlaygroundMessage::Previous => playground.advance(Direction::Previous),
            PlaygroundMessage::Next => playground.advance(Direction::Next),
            PlaygroundMessage::Run => playground.run_current(),
            PlaygroundMessage::Timer(event) => playground.handle(event),
        },
        Message::Page(msg) => match msg {
            PageMessage::Scroll(delta) => state.scroll_by(delta),
            PageMessage::ScrollToTop => state.scroll = 0,
        },
        Message::Newsletter(msg) => match msg {
            NewsletterMessage::Focus => {
                state.show_help = false;
                state.mode = Mode::EditNewsletter;
                state.scroll = state.max_scroll;
            }
            NewsletterMessage::Blur => state.mode = Mode::Navigate,
            NewsletterMessage::Input(key) => {
                state.newsletter.input.input(key);
            }
            NewsletterMessage::Subscribe => match state.newsletter.subscribe() {
                Subscription::Subscribed(email) => {
                    info!(%email, "newsletter subscription recorded");
                    state.mode = Mode::Navigate;
                }
                other => debug!(?other, "newsletter address rejected"),
            },
        },
    }
}
