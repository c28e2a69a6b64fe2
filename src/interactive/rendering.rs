//! TUI rendering with ratatui
//!
//! Layout for the word generator: results on the left, diacritic palette and
//! messages on the right.

use super::app::{App, InputMode, MessageStyle, ResultLine};
use crate::core::{SLOVAK_DIACRITICS, base_letter};
use crate::engine::{MatchResult, ResultView};
use crate::output::formatters::{describe_allowed, length_label, score_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, List, ListItem, Paragraph, Row, Table, Tabs},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(62), // Results
            Constraint::Percentage(38), // Palette and messages
        ])
        .split(chunks[1]);

    render_results(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🇸🇰 SLOVAK WORD GENERATOR")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let titles: Vec<String> = ResultView::ALL
        .iter()
        .map(|view| view.title().to_string())
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.view.position())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Views (←/→) "),
        );
    f.render_widget(tabs, chunks[0]);

    let Some(results) = &app.results else {
        let paragraph = Paragraph::new("No results yet. Type letters and press Enter.").block(
            Block::default()
                .title(" Results ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(paragraph, chunks[1]);
        return;
    };

    let best = results.best().map_or(0, |r| r.score);
    let rows: Vec<Row> = app
        .result_lines()
        .into_iter()
        .skip(app.scroll)
        .map(|line| match line {
            ResultLine::Group { length, count } => group_row(length, count),
            ResultLine::Entry { rank, result } => result_row(rank, result, best, app.view),
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Min(12),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(4),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(vec!["#", "Word", "Score", "Length", "Diac", ""])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .title(format!(" Results: {} words ", results.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(table, chunks[1]);
}

fn group_row(length: usize, count: usize) -> Row<'static> {
    let style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    Row::new([
        Cell::from("──"),
        Cell::from(length_label(length)),
        Cell::from(format!("({count})")),
    ])
    .style(style)
}

fn result_row(rank: usize, result: &MatchResult, best: u32, view: ResultView) -> Row<'static> {
    let highlight = match view {
        ResultView::Score => 2,
        ResultView::Length | ResultView::Grouped => 3,
        ResultView::Diacritics => 4,
    };

    let cells = [
        rank.to_string(),
        result.word.clone(),
        result.score.to_string(),
        result.length.to_string(),
        result.diacritics.to_string(),
        score_bar(result.score, best, 10),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, text)| {
        let style = if i == highlight {
            Style::default().fg(Color::Yellow)
        } else if i == 1 {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        Cell::from(text).style(style)
    });

    Row::new(cells)
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Palette
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_palette(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_palette(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.input_mode == InputMode::Palette;

    let mut rows: Vec<Line> = SLOVAK_DIACRITICS
        .chunks(6)
        .enumerate()
        .map(|(row, chars)| {
            let spans: Vec<Span> = chars
                .iter()
                .enumerate()
                .map(|(col, &c)| {
                    let index = row * 6 + col;
                    let mut style = if app.config.allowed.contains(c) {
                        Style::default().fg(Color::Black).bg(Color::Green)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    if focused && index == app.palette_cursor {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                    }
                    Span::styled(format!(" {c} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let selected = app.selected_diacritic();
    rows.push(Line::from(""));
    rows.push(Line::from(format!(
        "Allowed: {}",
        describe_allowed(app.config.allowed)
    )));
    if focused {
        rows.push(Line::from(Span::styled(
            format!(
                "'{selected}' → '{}' unless allowed",
                base_letter(selected).unwrap_or(selected)
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let border_color = if focused { Color::Yellow } else { Color::White };
    let palette = Paragraph::new(rows).block(
        Block::default()
            .title(" Diacritics (SPACE allow, ENTER insert) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(border_color)),
    );
    f.render_widget(palette, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let count = app.pool_length();
    let target = app.config.target_length;
    let color = match (app.input_mode, count == target) {
        (InputMode::Palette, _) => Color::DarkGray,
        (InputMode::Letters, true) => Color::Green,
        (InputMode::Letters, false) => Color::Yellow,
    };

    let title = format!(" Letters ({count}/{target}) | ENTER generate, ESC clear ");
    let input = Paragraph::new(app.letters.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let mode = match app.input_mode {
        InputMode::Letters => "Letters",
        InputMode::Palette => "Palette",
    };
    let text = format!(
        "Mode: {mode} | Dictionary: {} words | TAB: switch | F2: length | F3: all diacritics | ↑/↓: scroll | Ctrl-C: quit",
        app.generator.dictionary().len()
    );

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
