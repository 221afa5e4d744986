use crate::core::PlaygroundEvent;
use crossterm::event::KeyEvent;

#[derive(Debug, PartialEq)]
pub enum Message {
    KeyPressed(KeyEvent),
    Playground(PlaygroundMessage),
    Page(PageMessage),
    Newsletter(NewsletterMessage),
    ToggleHelp,
    Quit,
}

#[derive(Debug, PartialEq)]
pub enum PlaygroundMessage {
    Previous,
    Next,
    Run,
    Timer(PlaygroundEvent),
}

#[derive(Debug, PartialEq)]
pub enum PageMessage {
    Scroll(i32),
    ScrollToTop,
}

#[derive(Debug, PartialEq)]
pub enum NewsletterMessage {
    Focus,
    Blur,
    Input(KeyEvent),
    Subscribe,
}
