//! 主布局

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{App, SessionState};

use super::pages;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    // 顶部留白一行 + 页面
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(frame.area());

    let page_area = main_layout[1];

    match &app.state {
        SessionState::List => pages::list::render(app, frame, page_area),
        SessionState::Input { active } => pages::input::render(app, *active, frame, page_area),
        SessionState::Error { error, width } => {
            pages::error::render(app, error, *width, frame, page_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::model::test_support::{harness, press, rule, FakeProvider};

    fn screen(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn list_has_top_margin_rows_and_hint() {
        let h = harness(FakeProvider::with_rules(vec![
            rule("b@example.com", "2", "y@test.com"),
            rule("a@example.com", "1", "x@test.com"),
        ]));
        let lines = screen(&h.app, 100, 8);

        assert!(lines[0].trim().is_empty());
        let text = lines.join("\n");
        assert!(text.contains("From"));
        assert!(text.contains("b@example.com"));
        assert!(text.contains("x@test.com"));
        assert!(lines[7].contains("quit"));
        let b = lines.iter().position(|l| l.contains("b@example.com"));
        let a = lines.iter().position(|l| l.contains("a@example.com"));
        assert!(b < a);
    }

    #[test]
    fn input_shows_local_part_above_destination() {
        let mut h = harness(FakeProvider::default());
        press(&mut h.app, KeyCode::Char('a'));
        let lines = screen(&h.app, 60, 8);

        let local = lines.iter().position(|l| l.contains("@example.com"));
        let dest = lines.iter().position(|l| l.contains("default@example.org"));
        assert_eq!(local, Some(1));
        assert_eq!(dest, Some(2));
    }

    #[test]
    fn error_message_is_wrapped_to_width() {
        let mut h = harness(FakeProvider::default());
        h.app.width = 20;
        h.app.fail(anyhow::anyhow!("something went quite badly wrong"));
        let lines = screen(&h.app, 40, 8);

        assert!(lines[1].starts_with("something went quite"));
        assert!(lines[2].starts_with("badly wrong"));
    }
}
