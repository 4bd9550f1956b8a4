use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{grid, Game};
use crate::metrics::SessionStats;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, game: &Game, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = self.render_stats(game, stats);
        frame.render_widget(header, chunks[0]);

        match board_rect(game.config().cell_count, chunks[1]) {
            Some(board) => self.render_board(frame, game, board),
            None => {
                let notice = Paragraph::new("Terminal too small for the board")
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center);
                frame.render_widget(notice, chunks[1]);
            }
        }

        let footer = self.render_controls(game);
        frame.render_widget(footer, chunks[2]);
    }

    fn render_board(&self, frame: &mut Frame, game: &Game, board: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Green))
            .title(" Retro Snake ");
        frame.render_widget(block, board);

        // One rectangle per segment, head colored apart from the body
        let head = game.snake().head();
        for &cell in game.snake().body() {
            let color = if cell == head { Color::LightGreen } else { Color::Green };
            let segment = Block::default().style(Style::default().bg(color));
            frame.render_widget(segment, grid::cell_rect(cell, board));
        }

        let food = Block::default().style(Style::default().bg(Color::Red));
        frame.render_widget(food, grid::cell_rect(game.food().position(), board));
    }

    fn render_stats(&self, game: &Game, stats: &SessionStats) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                game.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.games_played.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format_elapsed(stats.elapsed()),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self, game: &Game) -> Paragraph<'_> {
        let text = if game.is_running() {
            vec![Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])]
        } else {
            vec![Line::from(vec![
                Span::styled(
                    "Crashed! ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("Press an arrow key to play again, or "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])]
        };

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Session time as mm:ss for the header line
fn format_elapsed(elapsed: std::time::Duration) -> String {
    let total_secs = elapsed.as_secs();
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Board rectangle centered in `area`, or None if it does not fit
fn board_rect(cell_count: i32, area: Rect) -> Option<Rect> {
    let (width, height) = grid::board_size(cell_count);
    if area.width < width || area.height < height {
        return None;
    }
    Some(Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    ))
}
