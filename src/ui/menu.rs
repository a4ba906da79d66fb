use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Palette;
use crate::game::DeathReason;

const POPUP_WIDTH: u16 = 32;
const POPUP_HEIGHT: u16 = 7;

/// Draws the game-over prompt centered over `area`.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    death_reason: Option<DeathReason>,
    palette: Palette,
) {
    let popup = centered_popup(area, POPUP_WIDTH, POPUP_HEIGHT);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("Game Over").style(Style::new().add_modifier(Modifier::BOLD)),
        Line::from(death_reason.map_or("", cause_text)),
        Line::from(""),
        Line::from("To play again press ENTER"),
        Line::from("[Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(palette.foreground).bg(palette.background))
            .block(Block::bordered()),
        popup,
    );
}

fn cause_text(reason: DeathReason) -> &'static str {
    match reason {
        DeathReason::WallCollision => "You hit the wall",
        DeathReason::SelfCollision => "You bit yourself",
    }
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    center
}
