use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Text},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table, TableState, Wrap},
};

use super::player::play_pause_symbol;
use crate::app::App;
use crate::catalog::{PlaylistDetails, format_total_minutes};
use crate::config::UiSettings;

/// `Spotify • 50 songs, 3 hr 25 min`
pub(super) fn summary_line(details: &PlaylistDetails) -> String {
    format!(
        "{} • {} songs, {}",
        details.creator,
        details.song_count,
        format_total_minutes(details.total_duration_minutes)
    )
}

fn header(details: &PlaylistDetails) -> Paragraph<'_> {
    let cover = if details.cover.is_some() { "▣" } else { "□" };
    let mut lines = vec![
        Line::from(format!("{cover} {}", details.kind)).dim(),
        Line::from(details.title.as_str()).bold(),
    ];
    if let Some(description) = &details.description {
        lines.push(Line::from(description.as_str()));
    }
    lines.push(Line::from(summary_line(details)).dim());

    Paragraph::new(lines)
        .block(Block::bordered().padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        }))
        .wrap(Wrap { trim: true })
}

pub(super) fn draw(frame: &mut Frame, app: &App, ui: &UiSettings, area: Rect) {
    let details = &app.catalog.details;
    let header_height = if details.description.is_some() { 6 } else { 5 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(header_height), Constraint::Min(1)])
        .split(area);

    frame.render_widget(header(details), chunks[0]);

    let playing = app.transport.is_playing();
    let rows: Vec<Row> = app
        .catalog
        .songs
        .iter()
        .enumerate()
        .map(|(i, song)| {
            let loaded = app.now_playing == Some(i);
            let number = if loaded {
                play_pause_symbol(playing).to_string()
            } else {
                (i + 1).to_string()
            };
            let title = Text::from(vec![
                Line::from(song.title.as_str()),
                Line::from(song.artist.as_str()).dim(),
            ]);

            let mut cells = vec![Cell::from(number), Cell::from(title)];
            if ui.show_album {
                cells.push(Cell::from(song.album.as_str()));
            }
            cells.push(Cell::from(song.duration_display()));

            let row = Row::new(cells).height(2);
            if loaded {
                row.style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                row
            }
        })
        .collect();

    let mut widths = vec![Constraint::Length(3), Constraint::Fill(3)];
    let mut header_cells = vec!["#", "Title"];
    if ui.show_album {
        widths.push(Constraint::Fill(2));
        header_cells.push("Album");
    }
    widths.push(Constraint::Length(6));
    header_cells.push("⏱");

    let table = Table::new(rows, widths)
        .header(Row::new(header_cells).dim())
        .block(Block::default().borders(Borders::ALL).title(" songs "))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if app.has_songs() {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(table, chunks[1], &mut state);
}
