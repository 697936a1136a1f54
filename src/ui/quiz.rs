use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::QuizOption;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], &question.text);
    render_options(
        frame,
        chunks[2],
        &question.options,
        app.selected_option(),
        app.current_answer(),
    );

    let controls = Paragraph::new(super::footer(
        app,
        "j/k option · enter pick · bksp clear · h/l move · s submit · n new · q quit",
    ))
    .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[3]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "{} answered  ·  {}/{}",
        app.answered_count(),
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[QuizOption],
    selected: usize,
    answer: Option<&str>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let is_recorded = answer == Some(option.value.as_str());
        let style = match (is_selected, is_recorded) {
            (true, _) => Style::default().fg(Color::Cyan).bold(),
            (false, true) => Style::default().fg(Color::Green),
            (false, false) => Style::default().fg(Color::Gray),
        };
        let marker = if is_selected { ">" } else { " " };
        let recorded = if is_recorded { "*" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {}{} ", marker, recorded), style),
            Span::styled(format!("{}. ", option.label), style),
            Span::styled(option.value.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}
