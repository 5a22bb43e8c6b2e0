use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    GridSize, Theme, BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
};
use crate::food::Food;
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snake::{Position, Snake};
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{render_pause_menu, render_start_menu};

/// One terminal cell an entity wants painted this frame.
#[derive(Debug, Clone, Copy)]
pub struct DrawCell {
    pub position: Position,
    pub glyph: &'static str,
    pub style: Style,
}

/// Render capability for field entities.
///
/// Snake and Food implement this independently; the renderer needs nothing
/// else from them. Styles come from the active theme so the entities stay
/// free of color decisions.
pub trait Drawable {
    /// Cells to paint, in paint order.
    fn draw_cells(&self, theme: &Theme) -> Vec<DrawCell>;
}

impl Drawable for Food {
    fn draw_cells(&self, theme: &Theme) -> Vec<DrawCell> {
        vec![DrawCell {
            position: self.position,
            glyph: GLYPH_FOOD,
            style: Style::new().fg(theme.food),
        }]
    }
}

impl Drawable for Snake {
    fn draw_cells(&self, theme: &Theme) -> Vec<DrawCell> {
        let last_index = self.len().saturating_sub(1);

        self.segments()
            .enumerate()
            .map(|(index, segment)| {
                if index == 0 {
                    DrawCell {
                        position: *segment,
                        glyph: head_glyph(self.direction()),
                        style: Style::new()
                            .fg(theme.snake_head)
                            .add_modifier(Modifier::BOLD),
                    }
                } else if index == last_index {
                    DrawCell {
                        position: *segment,
                        glyph: GLYPH_SNAKE_TAIL,
                        style: Style::new().fg(theme.snake_tail),
                    }
                } else {
                    DrawCell {
                        position: *segment,
                        glyph: GLYPH_SNAKE_BODY,
                        style: Style::new().fg(theme.snake_body),
                    }
                }
            })
            .collect()
    }
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, info: &HudInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, info);

    let theme = info.theme;
    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_entity(frame, inner, state.bounds(), &state.food, theme);
    render_entity(frame, inner, state.bounds(), &state.snake, theme);

    if state.is_start_screen() {
        render_start_menu(frame, play_area, theme);
        return;
    }

    if state.status == GameStatus::Paused {
        render_pause_menu(frame, play_area, theme);
    }
}

/// Paints one drawable entity into the play area.
fn render_entity(
    frame: &mut Frame<'_>,
    inner: Rect,
    bounds: GridSize,
    entity: &dyn Drawable,
    theme: &Theme,
) {
    let buffer = frame.buffer_mut();
    for cell in entity.draw_cells(theme) {
        let Some((x, y)) = logical_to_terminal(inner, bounds, cell.position) else {
            continue;
        };

        buffer.set_string(x, y, cell.glyph, cell.style);
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::config::{GridSize, GLYPH_FOOD, GLYPH_SNAKE_HEAD_RIGHT, THEME_CLASSIC};
    use crate::food::Food;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{logical_to_terminal, Drawable};

    #[test]
    fn food_draws_a_single_cell() {
        let food = Food::at(Position { x: 3, y: 2 });

        let cells = food.draw_cells(&THEME_CLASSIC);

        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].position, Position { x: 3, y: 2 });
        assert_eq!(cells[0].glyph, GLYPH_FOOD);
    }

    #[test]
    fn snake_draws_every_segment_head_first() {
        let snake = Snake::from_segments(
            vec![
                Position { x: 4, y: 4 },
                Position { x: 3, y: 4 },
                Position { x: 2, y: 4 },
            ],
            Direction::Right,
        );

        let cells = snake.draw_cells(&THEME_CLASSIC);

        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].position, Position { x: 4, y: 4 });
        assert_eq!(cells[0].glyph, GLYPH_SNAKE_HEAD_RIGHT);
    }

    #[test]
    fn cells_outside_the_visible_area_are_skipped() {
        let inner = Rect::new(1, 1, 4, 4);
        let bounds = GridSize {
            width: 10,
            height: 10,
        };

        assert_eq!(
            logical_to_terminal(inner, bounds, Position { x: 0, y: 0 }),
            Some((1, 1))
        );
        // Inside the grid but beyond the terminal area on a small screen.
        assert_eq!(
            logical_to_terminal(inner, bounds, Position { x: 8, y: 8 }),
            None
        );
    }
}
