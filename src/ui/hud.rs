use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::{GameState, GameStatus};

/// Supplemental values displayed by the HUD row.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub theme: &'a Theme,
    /// Longest body achieved since program start, across field resets.
    pub best_len: usize,
}

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let theme = info.theme;
    let text = Style::new().fg(theme.hud_text);
    let accent = Style::new().fg(theme.hud_accent);

    let status = match state.status {
        GameStatus::Playing => "",
        GameStatus::Paused => "paused   ",
    };

    let line = Line::from(vec![
        Span::styled(status, accent),
        Span::styled("length ", text),
        Span::styled(state.snake.len().to_string(), accent),
        Span::styled("   score ", text),
        Span::styled(state.score.to_string(), accent),
        Span::styled("   best ", text),
        Span::styled(info.best_len.to_string(), accent),
        Span::raw(" "),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Right),
        status_area,
    );

    play_area
}
