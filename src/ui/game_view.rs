use crate::config::PlayersConfig;
use crate::game::{Cell, RulesEngine};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    engine: &RulesEngine,
    players: &PlayersConfig,
    selected_column: usize,
    message: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(engine.height() as u16 + 4), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, players, chunks[0]);
    render_board(frame, engine, players, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, engine.width(), chunks[3]);
}

fn render_header(frame: &mut Frame, engine: &RulesEngine, players: &PlayersConfig, area: Rect) {
    let style = players.style(engine.active_player());

    let status = if engine.is_over() {
        "Game Over".to_string()
    } else {
        format!("Current Player: {}", style.name)
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(style.terminal_color())
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    engine: &RulesEngine,
    players: &PlayersConfig,
    selected_column: usize,
    area: Rect,
) {
    let board = engine.board();
    let mut lines = Vec::new();

    // Column numbers double as the drop targets
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..board.width() {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(board.width() * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..board.width() {
            let (symbol, color) = match board.get(row, col).unwrap_or(Cell::Empty).owner() {
                None => (" . ", Color::DarkGray),
                Some(player) => (" ● ", players.style(player).terminal_color()),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..board.width() {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, width: usize, area: Rect) {
    let line = Line::from(format!(
        "←/→: Move  |  Enter: Drop  |  1-{width}: Drop in column  |  R: Restart  |  Q: Quit"
    ));

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
