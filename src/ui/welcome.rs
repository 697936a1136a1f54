use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ BANK",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} questions in the bank", app.store().len()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from("questions to practice".fg(Color::DarkGray)),
        Line::from(Span::styled(
            format!("< {} >", app.requested_count()),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to draw a random quiz".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new(super::footer(
        app,
        "h/l change count  ·  pgup/pgdn ±10  ·  enter start  ·  q quit",
    ))
    .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[3]);
}
