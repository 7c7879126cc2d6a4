use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
    Frame,
};
use tickli_core::{Filter, TaskStore};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, InputMode};

pub fn draw<S: TaskStore>(f: &mut Frame, app: &mut App<S>) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Composer
            Constraint::Min(1),    // Task list
            Constraint::Length(2), // Status + help
        ])
        .split(size);

    draw_header(f, main_chunks[0]);
    draw_composer(f, app, main_chunks[1]);
    draw_task_list(f, app, main_chunks[2]);
    draw_footer(f, app, main_chunks[3]);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("TICKLI")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, area);
}

fn draw_composer<S: TaskStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (style, title) = match app.input_mode {
        InputMode::Adding => (Style::default().fg(Color::Yellow), " New Task "),
        InputMode::Normal => (Style::default().fg(Color::DarkGray), " New Task (a) "),
    };
    let input = Paragraph::new(app.input.as_str()).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title),
    );
    f.render_widget(input, area);

    if let InputMode::Adding = app.input_mode {
        // Offset by display width, not char count, so wide glyphs line up
        let prefix: String = app.input.chars().take(app.cursor_position).collect();
        let x = area.x + 1 + prefix.width() as u16;
        f.set_cursor_position((x, area.y + 1));
    }
}

fn draw_task_list<S: TaskStore>(f: &mut Frame, app: &mut App<S>, area: Rect) {
    let rows: Vec<Row> = app
        .rows
        .iter()
        .map(|task| {
            let mark = if task.completed { "✔" } else { "☐" };
            let text_style = if task.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };
            Row::new(vec![
                Span::raw(mark),
                Span::styled(task.text.clone(), text_style),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(3), Constraint::Min(10)])
        .block(
            Block::default()
                .title(" Tasks ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_footer<S: TaskStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let mut spans = Vec::new();
    for filter in Filter::variants() {
        let style = if filter == app.service.filter() {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("{} left", app.service.active_count()),
        Style::default().fg(Color::White),
    ));
    let completed = app.service.completed_count();
    if completed > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("c: clear completed ({completed})"),
            Style::default().fg(Color::Red),
        ));
    }
    let status = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let help = match app.input_mode {
        InputMode::Normal => {
            "j/k: Navigate | Space: Toggle | a: Add | d: Delete | 1/2/3: Filter | q: Quit"
        }
        InputMode::Adding => "Enter: Add | Esc: Cancel",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[1]);
}
