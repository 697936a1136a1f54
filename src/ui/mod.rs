mod quiz;
mod result;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Welcome => welcome::render(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
    }
}

/// One-line footer: the last rejected action if there is one, otherwise the
/// key bindings.
fn footer<'a>(app: &'a App, controls: &'a str) -> Line<'a> {
    match app.notice() {
        Some(notice) => Line::from(Span::styled(notice, Style::default().fg(Color::Red))),
        None => Line::from(Span::styled(controls, Style::default().fg(Color::DarkGray))),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::config::QuizConfig;
    use crate::data::QuestionStore;
    use crate::models::{OptionLabel, QuestionRecord, QuizOption, Reference};

    fn app() -> App {
        app_with_prompt(|id| format!("Which article covers case {}?", id))
    }

    fn app_with_prompt(prompt: fn(usize) -> String) -> App {
        let questions = (0..4)
            .map(|id| QuestionRecord {
                id,
                text: prompt(id),
                options: vec![
                    QuizOption {
                        label: OptionLabel::A,
                        value: "Article 5".to_string(),
                    },
                    QuizOption {
                        label: OptionLabel::B,
                        value: "Article 9".to_string(),
                    },
                ],
                correct_label: OptionLabel::B,
                reference: Reference {
                    document: "Circular 12".to_string(),
                    clause: "Art. 9.2".to_string(),
                },
            })
            .collect();
        let config = QuizConfig {
            count: Some(2),
            seed: Some(3),
            ..QuizConfig::default()
        };
        App::new(QuestionStore::new(questions).unwrap(), &config)
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn welcome_shows_bank_size_and_count() {
        let text = screen(&app());
        assert!(text.contains("QUIZ BANK"), "{}", text);
        assert!(text.contains("4 questions in the bank"), "{}", text);
        assert!(text.contains("< 2 >"), "{}", text);
    }

    #[test]
    fn quiz_shows_question_and_options() {
        let mut app = app();
        app.start_quiz();
        let text = screen(&app);

        assert!(text.contains("Which article covers case"), "{}", text);
        assert!(text.contains("A. Article 5"), "{}", text);
        assert!(text.contains("B. Article 9"), "{}", text);
        assert!(text.contains("1/2"), "{}", text);
    }

    #[test]
    fn long_prompts_are_shown_in_full() {
        let mut app = app_with_prompt(|_| {
            format!(
                "{} which clause applies? LASTWORD",
                "Under the procurement circular as amended by the later decree, ".repeat(7)
            )
        });
        app.start_quiz();
        let text = screen(&app);

        assert!(text.contains("LASTWORD"), "{}", text);
        assert!(text.contains("B. Article 9"), "{}", text);
    }

    #[test]
    fn results_show_score_and_reference() {
        let mut app = app();
        app.start_quiz();
        app.select_next_option();
        app.choose_option();
        app.submit();
        let text = screen(&app);

        assert!(text.contains("1 / 2  (50%)"), "{}", text);
        assert!(text.contains("Circular 12"), "{}", text);
        assert!(text.contains("no answer"), "{}", text);
    }

    #[test]
    fn notice_replaces_controls() {
        let mut app = app();
        app.start_quiz();
        app.submit();
        app.state = AppState::Quiz;
        app.choose_option();
        let text = screen(&app);

        assert!(text.contains("quiz already submitted"), "{}", text);
    }
}
