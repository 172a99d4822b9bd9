use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Cell, GameOutcome, GameState, SessionState};
use crate::metrics::GameMetrics;

const HEAD: Color = Color::Rgb(255, 85, 85);
const BODY: Color = Color::Rgb(255, 0, 0);
const FOOD: Color = Color::Rgb(255, 51, 51);
const GRID: Color = Color::Rgb(60, 0, 0);

/// Size of the start and game-over panels drawn over the board
const OVERLAY_WIDTH: u16 = 46;
const OVERLAY_HEIGHT: u16 = 8;

/// Draws a read-only snapshot of the game; never touches game state
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        // The board stays visible under the start and game-over panels
        frame.render_widget(self.render_grid(state), game_area);

        let overlay = match state.session {
            SessionState::Idle => Some(self.render_idle()),
            SessionState::Running => None,
            SessionState::Over => Some(self.render_game_over(state)),
        };
        if let Some(panel) = overlay {
            let area = centered(game_area, OVERLAY_WIDTH, OVERLAY_HEIGHT);
            frame.render_widget(Clear, area);
            frame.render_widget(panel, area);
        }

        frame.render_widget(self.render_controls(state.session), chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let head = state.snake.head();
        let mut lines = Vec::with_capacity(state.grid_count);

        for y in 0..state.grid_count {
            let mut spans = Vec::with_capacity(state.grid_count);

            for x in 0..state.grid_count {
                let cell = Cell::new(x as i32, y as i32);

                let span = if cell == head {
                    Span::styled("█ ", Style::default().fg(HEAD).add_modifier(Modifier::BOLD))
                } else if state.is_occupied_by_snake(cell) {
                    Span::styled("■ ", Style::default().fg(BODY))
                } else if cell == state.food {
                    Span::styled("● ", Style::default().fg(FOOD).add_modifier(Modifier::BOLD))
                } else {
                    Span::styled("· ", Style::default().fg(GRID))
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(BODY))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.snake.len().to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.games_played.to_string(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_idle(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "SNAKE",
                Style::default().fg(HEAD).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BODY)),
        )
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let (title, color) = match state.outcome {
            Some(GameOutcome::BoardFull) => ("BOARD CLEARED - YOU WIN", Color::Green),
            _ => ("GAME OVER", Color::Red),
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart, ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_controls(&self, session: SessionState) -> Paragraph<'_> {
        let session_hint = match session {
            SessionState::Idle => Span::styled("Enter to start | ", Style::default().fg(Color::Green)),
            SessionState::Over => Span::styled("R or Enter to restart | ", Style::default().fg(Color::Green)),
            SessionState::Running => Span::raw(""),
        };

        let text = vec![Line::from(vec![
            session_hint,
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(", "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("mouse drag", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

/// A `width` x `height` rect centred in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
