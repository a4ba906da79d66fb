use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType};

use crate::config::Palette;
use crate::game::{Game, GameStatus};
use crate::grid::Cell;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

const GLYPH_HEAD: char = '█';
const GLYPH_BODY: char = '▓';
const GLYPH_TAIL: char = '▒';
const GLYPH_FOOD: char = '●';

/// Drawing parameters owned by the front end.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub palette: Palette,
    /// Terminal columns per grid cell.
    pub cell_width: u16,
}

/// Renders the full frame from immutable game state: food first, then the snake.
pub fn render(frame: &mut Frame<'_>, game: &Game, ctx: &RenderContext) {
    let area = frame.area();
    let palette = ctx.palette;
    frame.render_widget(
        Block::new().style(Style::new().bg(palette.background)),
        area,
    );

    let remaining = render_hud(frame, area, game.score, palette);
    let board_area = board_rect(remaining, game.cell_count(), ctx.cell_width);

    let block = Block::bordered()
        .border_type(BorderType::Thick)
        .border_style(Style::new().fg(palette.foreground).bg(palette.background));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_food(frame, inner, game, ctx);
    render_snake(frame, inner, game, ctx);

    if game.status == GameStatus::GameOver {
        render_game_over_menu(frame, board_area, game.death_reason, palette);
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, game: &Game, ctx: &RenderContext) {
    let Some((x, y)) = cell_to_terminal(inner, game.cell_count(), ctx.cell_width, game.food.position)
    else {
        return;
    };

    let style = Style::new().fg(ctx.palette.food).bg(ctx.palette.background);
    frame
        .buffer_mut()
        .set_string(x, y, cell_glyph(GLYPH_FOOD, ctx.cell_width), style);
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, game: &Game, ctx: &RenderContext) {
    let last = game.snake.len().saturating_sub(1);
    let base = Style::new()
        .fg(ctx.palette.foreground)
        .bg(ctx.palette.background);

    let buffer = frame.buffer_mut();
    for (index, segment) in game.snake.segments().enumerate() {
        let Some((x, y)) = cell_to_terminal(inner, game.cell_count(), ctx.cell_width, *segment)
        else {
            continue;
        };

        let (glyph, style) = match index {
            0 => (GLYPH_HEAD, base.add_modifier(Modifier::BOLD)),
            index if index == last => (GLYPH_TAIL, base),
            _ => (GLYPH_BODY, base),
        };
        buffer.set_string(x, y, cell_glyph(glyph, ctx.cell_width), style);
    }
}

fn cell_glyph(glyph: char, cell_width: u16) -> String {
    std::iter::repeat_n(glyph, usize::from(cell_width)).collect()
}

/// Centers a bordered board for `cell_count` cells inside `area`, clamped to fit.
#[must_use]
pub fn board_rect(area: Rect, cell_count: u16, cell_width: u16) -> Rect {
    let width = cell_count
        .saturating_mul(cell_width)
        .saturating_add(2)
        .min(area.width);
    let height = cell_count.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Maps a grid cell to the terminal position of its left column, or `None`
/// when the cell is off the board or clipped by a small terminal.
#[must_use]
pub fn cell_to_terminal(
    inner: Rect,
    cell_count: u16,
    cell_width: u16,
    cell: Cell,
) -> Option<(u16, u16)> {
    if !cell.is_within(cell_count) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(cell_width)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.checked_add(x_offset)?;
    let y = inner.y.checked_add(y_offset)?;
    if x.saturating_add(cell_width) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
