use super::content::*;
use super::state::{Mode, State, Subscription};
use crate::core::{PlaygroundController, RunStatus};
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Flex, Layout, Rect};
use ratatui::prelude::{Color, Line, Modifier, Span, Style, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget, Wrap};
use ratatui::Frame;

const ACCENT: Color = Color::Yellow;
const SURFACE: Color = Color::Magenta;
const SECTION_GAP: u16 = 1;

#[derive(Debug, Clone, Copy)]
enum Section {
    Hero,
    Playground,
    Features,
    CallToAction,
    Testimonials,
    Newsletter,
    Contact,
    Footer,
}

const SECTIONS: [Section; 8] = [
    Section::Hero,
    Section::Playground,
    Section::Features,
    Section::CallToAction,
    Section::Testimonials,
    Section::Newsletter,
    Section::Contact,
    Section::Footer,
];

impl Section {
    fn height(self, playground: &PlaygroundController) -> u16 {
        match self {
            Section::Hero => 5,
            // borders, title, subtitle, gap, carousel, code borders, gap, run row
            Section::Playground => playground.catalog().max_code_lines() as u16 + 10,
            Section::Features => 8,
            Section::CallToAction => 6,
            Section::Testimonials => 20,
            Section::Newsletter => 8,
            Section::Contact => 4,
            Section::Footer => 1,
        }
    }
}

fn page_height(playground: &PlaygroundController) -> u16 {
    let sections: u16 = SECTIONS.iter().map(|s| s.height(playground)).sum();
    sections + SECTION_GAP * (SECTIONS.len() as u16 - 1)
}

fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

fn panel() -> Block<'static> {
    Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(SURFACE))
}

fn button(label: &str, enabled: bool) -> Paragraph<'_> {
    let style = if enabled {
        Style::from((Color::Black, ACCENT)).add_modifier(Modifier::BOLD)
    } else {
        Style::from((Color::Black, Color::Gray))
    };
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
}

fn render_navbar(state: &State, frame: &mut Frame, rect: Rect) {
    let mut spans = vec![
        Span::styled(
            format!(" {BRAND} "),
            Style::new().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    for tab in NAV_TABS {
        spans.push(Span::raw(tab));
        spans.push(Span::styled("  ·  ", Style::new().fg(Color::DarkGray)));
    }
    spans.pop();
    if state.scroll > 0 {
        spans.push(Span::styled(
            "   ↑ Home: back to top",
            Style::new().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::new().bg(Color::Black)),
        rect,
    );
}

fn render_status_line(
    state: &State,
    playground: &PlaygroundController,
    frame: &mut Frame,
    rect: Rect,
) {
    let style = Style::new().bg(Color::Gray).fg(Color::Black);
    let mode_str = match state.mode {
        Mode::Navigate => "NAVI",
        Mode::EditNewsletter => "EDIT",
    };
    let snippet_no = format!(
        "snippet {}/{}",
        playground.current_index() + 1,
        playground.catalog().len()
    );
    let run_status = match playground.run_status() {
        RunStatus::Idle => "Idle",
        RunStatus::Running => "Running",
    };

    let parts = [
        mode_str,
        snippet_no.as_str(),
        playground.current_snippet().language.as_str(),
        run_status,
        "? help",
    ];
    let mut status = parts.join(" • ");
    status.insert(0, ' ');

    frame.render_widget(
        Paragraph::new(status).style(style).wrap(Wrap::default()),
        rect,
    )
}

fn render_hero(area: Rect, buf: &mut Buffer) {
    let text = Text::from(vec![
        Line::default(),
        Line::styled(
            HERO_TITLE,
            Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(HERO_TAGLINE, Style::new().fg(Color::Gray)),
    ]);
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_playground(playground: &PlaygroundController, area: Rect, buf: &mut Buffer) {
    let block = panel().padding(Padding::horizontal(2));
    let inner = block.inner(area);
    block.render(area, buf);

    let [title, subtitle, _, carousel, code, _, run_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    Paragraph::new(PLAYGROUND_TITLE)
        .style(Style::new().add_modifier(Modifier::BOLD))
        .render(title, buf);
    Paragraph::new(PLAYGROUND_SUBTITLE)
        .style(Style::new().fg(Color::Gray))
        .render(subtitle, buf);

    let snippet = playground.current_snippet();
    let arrow = Style::new().fg(ACCENT).add_modifier(Modifier::BOLD);
    Paragraph::new(Line::from(vec![
        Span::styled("◀ h", arrow),
        Span::raw("     "),
        Span::styled(
            snippet.language.as_str(),
            Style::new().add_modifier(Modifier::BOLD),
        ),
        Span::raw("     "),
        Span::styled("l ▶", arrow),
    ]))
    .alignment(Alignment::Center)
    .render(carousel, buf);

    Paragraph::new(snippet.code.as_str())
        .block(
            Block::bordered()
                .border_style(Style::new().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        )
        .render(code, buf);

    let [run_button, _, output] = Layout::horizontal([
        Constraint::Length(16),
        Constraint::Min(1),
        Constraint::Length(40),
    ])
    .areas(run_row);

    match playground.run_status() {
        RunStatus::Idle => button("Run Code (r)", true).render(run_button, buf),
        RunStatus::Running => button("Running...", false).render(run_button, buf),
    }

    if let Some(result) = playground.displayed_output() {
        Paragraph::new(format!(" Output: {result} "))
            .alignment(Alignment::Right)
            .style(Style::from((Color::Black, Color::Green)))
            .render(output, buf);
    }
}

fn render_features(area: Rect, buf: &mut Buffer) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4])
        .spacing(1)
        .split(area);

    for (feature, column) in FEATURES.iter().zip(columns.iter()) {
        let text = Text::from(vec![
            Line::styled(feature.icon, Style::new().fg(ACCENT)),
            Line::styled(feature.title, Style::new().add_modifier(Modifier::BOLD)),
            Line::default(),
            Line::styled(feature.description, Style::new().fg(Color::Gray)),
        ]);
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(panel().padding(Padding::horizontal(1)))
            .render(*column, buf);
    }
}

fn render_call_to_action(area: Rect, buf: &mut Buffer) {
    let [title, body, _, buttons] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    Paragraph::new(CTA_TITLE)
        .alignment(Alignment::Center)
        .style(Style::new().add_modifier(Modifier::BOLD))
        .render(title, buf);
    Paragraph::new(CTA_BODY)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(body, buf);

    let [_, first, _, second, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(29),
        Constraint::Length(2),
        Constraint::Length(10),
        Constraint::Fill(1),
    ])
    .areas(buttons);
    button(CTA_BUTTONS[0], true).render(first, buf);
    button(CTA_BUTTONS[1], true).render(second, buf);
}

fn render_testimonials(area: Rect, buf: &mut Buffer) {
    let block = panel().title(Line::from(TESTIMONIALS_TITLE).centered());
    let inner = block.inner(area);
    block.render(area, buf);

    let rows = Layout::vertical([Constraint::Ratio(1, 2); 2]).split(inner);
    for (row, testimonials) in rows.iter().zip(TESTIMONIALS.chunks(4)) {
        let cards = Layout::horizontal([Constraint::Ratio(1, 4); 4])
            .spacing(1)
            .split(*row);
        for (card, testimonial) in cards.iter().zip(testimonials) {
            let text = Text::from(vec![
                Line::styled(
                    testimonial.name,
                    Style::new().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                Line::styled(testimonial.role, Style::new().fg(ACCENT)),
                Line::default(),
                Line::styled(
                    testimonial.quote,
                    Style::new().add_modifier(Modifier::ITALIC),
                ),
            ]);
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::bordered().border_type(BorderType::Rounded))
                .render(*card, buf);
        }
    }
}

fn render_newsletter(state: &State, area: Rect, buf: &mut Buffer) {
    let block = panel().padding(Padding::horizontal(2));
    let inner = block.inner(area);
    block.render(area, buf);

    let [title, body, form, notice] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    Paragraph::new(NEWSLETTER_TITLE)
        .alignment(Alignment::Center)
        .style(Style::new().add_modifier(Modifier::BOLD))
        .render(title, buf);
    Paragraph::new(NEWSLETTER_BODY)
        .alignment(Alignment::Center)
        .render(body, buf);

    let [_, input, subscribe, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(40),
        Constraint::Length(13),
        Constraint::Fill(1),
    ])
    .areas(form);

    let focused = state.mode == Mode::EditNewsletter;
    let input_border = if focused { ACCENT } else { Color::DarkGray };
    let mut textarea = state.newsletter.input.clone();
    textarea.set_block(
        Block::bordered()
            .border_style(Style::new().fg(input_border))
            .title(if focused { " Enter ↵ · Esc " } else { " s " }),
    );
    if !focused {
        textarea.set_cursor_style(Style::default());
    }
    (&textarea).render(input, buf);

    let [_, subscribe, _] = Layout::vertical([Constraint::Length(1); 3]).areas(subscribe);
    button("Subscribe", true).render(subscribe, buf);

    let (message, color) = match &state.newsletter.subscription {
        Subscription::Pending => (String::new(), Color::Reset),
        Subscription::Subscribed(email) => {
            (format!("Thanks! {email} is on the list."), Color::Green)
        }
        Subscription::Rejected(email) if email.is_empty() => {
            ("Please enter your email.".to_string(), Color::Red)
        }
        Subscription::Rejected(email) => {
            (format!("\"{email}\" does not look like an email address."), Color::Red)
        }
    };
    Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::new().fg(color))
        .render(notice, buf);
}

fn render_contact(area: Rect, buf: &mut Buffer) {
    let text = Text::from(vec![
        Line::styled(CONTACT_TITLE, Style::new().add_modifier(Modifier::BOLD)),
        Line::default(),
        Line::styled(CONTACT_BODY, Style::new().fg(Color::Gray)),
    ]);
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_footer(area: Rect, buf: &mut Buffer) {
    Paragraph::new(FOOTER)
        .alignment(Alignment::Center)
        .style(Style::new().fg(Color::White).bg(Color::DarkGray))
        .render(area, buf);
}

fn render_page(state: &State, playground: &PlaygroundController, width: u16) -> Buffer {
    let area = Rect::new(0, 0, width, page_height(playground));
    let mut buf = Buffer::empty(area);

    let areas = Layout::vertical(SECTIONS.map(|s| Constraint::Length(s.height(playground))))
        .spacing(SECTION_GAP)
        .split(area);

    for (section, area) in SECTIONS.iter().zip(areas.iter().copied()) {
        match section {
            Section::Hero => render_hero(area, &mut buf),
            Section::Playground => render_playground(playground, area, &mut buf),
            Section::Features => render_features(area, &mut buf),
            Section::CallToAction => render_call_to_action(area, &mut buf),
            Section::Testimonials => render_testimonials(area, &mut buf),
            Section::Newsletter => render_newsletter(state, area, &mut buf),
            Section::Contact => render_contact(area, &mut buf),
            Section::Footer => render_footer(area, &mut buf),
        }
    }
    buf
}

/// Copies the rows of `page` starting at `scroll` into `area`.
fn blit(page: &Buffer, scroll: u16, frame: &mut Frame, area: Rect) {
    let target = frame.buffer_mut();
    for y in 0..area.height {
        for x in 0..area.width {
            if let (Some(src), Some(dst)) = (
                page.cell((x, y + scroll)),
                target.cell_mut((area.x + x, area.y + y)),
            ) {
                *dst = src.clone();
            }
        }
    }
}

fn render_help(frame: &mut Frame) {
    let help = indoc! {"
            ←, h     - previous snippet
            →, l     - next snippet
            r, ↵     - run current snippet
            ↑, k     - scroll up
            ↓, j     - scroll down
            PgUp/Dn  - scroll a page
            Home, g  - back to top
            s        - subscribe to the newsletter
            q, Esc   - quit
            ?, F1    - show this help
            "};

    let height = help.lines().count() + 2;
    let width = help
        .lines()
        .map(|l| l.chars().count())
        .max()
        .map(|l| l + 4)
        .unwrap_or_default();
    let area = centered_area(frame.area(), width as u16, height as u16);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .padding(Padding::new(1u16, 1u16, 0, 0));
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(help).block(block), area);
}

/// Draws the whole screen and returns the largest useful scroll offset.
pub fn render(state: &State, playground: &PlaygroundController, frame: &mut Frame) -> u16 {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_navbar(state, frame, layout[0]);
    render_status_line(state, playground, frame, layout[2]);

    let viewport = layout[1];
    let page = render_page(state, playground, viewport.width);
    let max_scroll = page.area.height.saturating_sub(viewport.height);
    blit(&page, state.scroll.min(max_scroll), frame, viewport);

    if state.show_help {
        render_help(frame);
    }

    max_scroll
}
