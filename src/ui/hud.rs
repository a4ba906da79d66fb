use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Palette;

const HUD_MARGIN_X: u16 = 2;

/// Renders the score row and returns the area left for the board below it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, score: u32, palette: Palette) -> Rect {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    let hud_area = inset_horizontal(hud_area, HUD_MARGIN_X);

    let base = Style::new().fg(palette.foreground).bg(palette.background);
    let [score_area, hint_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Min(0)]).areas(hud_area);

    frame.render_widget(
        Paragraph::new(score_line(score)).style(base),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from("arrows/WASD move  [Q] quit"))
            .alignment(Alignment::Right)
            .style(base),
        hint_area,
    );

    play_area
}

fn score_line(score: u32) -> Line<'static> {
    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(score.to_string(), Style::new().add_modifier(Modifier::BOLD)),
    ])
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}
