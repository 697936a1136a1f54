use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::session::{Grade, ScoreReport};

const QUESTION_PREVIEW_LENGTH: usize = 70;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(report) = app.report() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], report);
    render_question_breakdown(frame, chunks[1], app, report);

    let controls = Paragraph::new(super::footer(
        app,
        "j/k scroll  ·  n new quiz  ·  r restart  ·  q quit",
    ))
    .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[2]);
}

fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::Excellent => Color::Green,
        Grade::Good => Color::Cyan,
        Grade::Pass => Color::Yellow,
        Grade::Fail => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, report: &ScoreReport) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({:.0}%)",
                report.correct_count,
                report.total_count,
                report.percentage()
            ),
            Style::default().fg(grade_color(report.grade())).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

/// Lines drawn per verdict. Lines are clipped, not wrapped, so scrolling
/// one verdict is a fixed offset.
const LINES_PER_VERDICT: usize = 5;

fn render_question_breakdown(frame: &mut Frame, area: Rect, app: &App, report: &ScoreReport) {
    let mut lines: Vec<Line> = Vec::with_capacity(report.verdicts.len() * LINES_PER_VERDICT);

    for (index, verdict) in report.verdicts.iter().enumerate() {
        let Some(question) = app.store().get(verdict.question_id) else {
            continue;
        };
        let (symbol, color) = if verdict.is_correct {
            ("+", Color::Green)
        } else {
            ("-", Color::Red)
        };
        let label = |value: &str| {
            question
                .label_of(value)
                .map(|label| format!("{}. ", label))
                .unwrap_or_default()
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{:2}. ", index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(truncate_question(&question.text), Style::default().fg(Color::Gray)),
        ]));

        let yours = match verdict.user_value.as_deref() {
            Some(value) => Span::styled(
                format!("{}{}", label(value), value),
                Style::default().fg(color),
            ),
            None => Span::styled("no answer", Style::default().fg(Color::DarkGray).italic()),
        };
        lines.push(Line::from(vec![
            Span::styled("       yours:   ", Style::default().fg(Color::DarkGray)),
            yours,
        ]));
        lines.push(Line::from(vec![
            Span::styled("       correct: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}{}", label(&verdict.correct_value), verdict.correct_value),
                Style::default().fg(Color::Green),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("       ref:     ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(
                    "{}  ·  {}",
                    question.reference.document, question.reference.clause
                ),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(""));
    }

    let scroll = scroll_offset(app.result_scroll());
    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll, 0));
    frame.render_widget(widget, area);
}

/// Line offset of the breakdown, saturating at the widest offset a
/// paragraph accepts.
fn scroll_offset(verdicts_skipped: usize) -> u16 {
    u16::try_from(verdicts_skipped.saturating_mul(LINES_PER_VERDICT)).unwrap_or(u16::MAX)
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
