use super::content::NEWSLETTER_PLACEHOLDER;
use tui_textarea::TextArea;

#[derive(Debug, Default)]
pub struct State<'a> {
    pub mode: Mode,
    pub quit: bool,
    pub show_help: bool,
    pub scroll: u16,
    pub max_scroll: u16,
    pub newsletter: Newsletter<'a>,
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    #[default]
    Navigate,
    EditNewsletter,
}

#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub enum Subscription {
    #[default]
    Pending,
    Subscribed(String),
    Rejected(String),
}

#[derive(Debug)]
pub struct Newsletter<'a> {
    pub input: TextArea<'a>,
    pub subscription: Subscription,
}

impl Default for Newsletter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Newsletter<'_> {
    pub fn new() -> Self {
        Self {
            input: email_input(),
            subscription: Subscription::Pending,
        }
    }

    pub fn email(&self) -> String {
        self.input.lines().join("").trim().to_string()
    }

    /// Nothing is sent anywhere; a plausible address is simply remembered.
    pub fn subscribe(&mut self) -> &Subscription {
        let email = self.email();
        self.subscription = match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && domain.contains('.') => {
                self.input = email_input();
                Subscription::Subscribed(email)
            }
            _ => Subscription::Rejected(email),
        };
        &self.subscription
    }
}

fn email_input<'a>() -> TextArea<'a> {
    let mut input = TextArea::default();
    input.set_placeholder_text(NEWSLETTER_PLACEHOLDER);
    input.set_cursor_line_style(Default::default());
    input
}

impl State<'_> {
    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll) + delta;
        self.scroll = next.clamp(0, i32::from(self.max_scroll)) as u16;
    }
}
