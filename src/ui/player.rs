use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::transport::{RepeatMode, TrackInfo, Transport, TransportView};

pub(crate) fn play_pause_symbol(playing: bool) -> &'static str {
    if playing { "⏸" } else { "▶" }
}

pub(crate) fn repeat_symbol(mode: RepeatMode) -> &'static str {
    match mode {
        RepeatMode::Track => "↻1",
        RepeatMode::Off | RepeatMode::Context => "↻",
    }
}

pub(crate) fn repeat_label(mode: RepeatMode) -> &'static str {
    match mode {
        RepeatMode::Off => "Repeat Off",
        RepeatMode::Context => "Repeat Playlist",
        RepeatMode::Track => "Repeat Track",
    }
}

/// Muted glyph also covers a volume of zero.
pub(crate) fn volume_symbol(muted: bool, volume: u8) -> &'static str {
    if muted || volume == 0 { "🔇" } else { "🔊" }
}

pub(super) fn art_glyph(track: &TrackInfo) -> &'static str {
    if track.artwork.is_some() { "▣" } else { "□" }
}

fn toggle_style(active: bool) -> Style {
    if active {
        Style::default().green().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn now_playing(view: &TransportView) -> Paragraph<'_> {
    let lines = match &view.track {
        Some(track) => {
            let art = art_glyph(track);
            vec![
                Line::from(vec![
                    Span::raw(format!("{art} ")),
                    Span::raw(track.title.as_str()).bold(),
                ]),
                Line::from(format!("  {}", track.artist)).dim(),
            ]
        }
        None => vec![Line::from("No song playing").dim()],
    };
    Paragraph::new(lines)
}

fn buttons(view: &TransportView) -> Line<'static> {
    Line::from(vec![
        Span::styled("⤮", toggle_style(view.shuffle)),
        Span::raw("   ⏮   "),
        Span::raw(play_pause_symbol(view.is_playing())).bold(),
        Span::raw("   ⏭   "),
        Span::styled(
            repeat_symbol(view.repeat),
            toggle_style(view.repeat != RepeatMode::Off),
        ),
    ])
}

pub(super) fn draw(frame: &mut Frame, transport: &Transport, area: Rect) {
    let view = &transport.view();
    let enabled = transport.controls_enabled();
    let block = Block::default().borders(Borders::ALL).title(" now playing ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(45),
            Constraint::Percentage(25),
        ])
        .split(inner);

    frame.render_widget(now_playing(view), columns[0]);

    let center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(columns[1]);

    let mut controls = Paragraph::new(buttons(view)).alignment(Alignment::Center);
    if !enabled {
        controls = controls.dim();
    }
    frame.render_widget(controls, center[0]);

    let progress_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(4),
            Constraint::Length(7),
        ])
        .split(center[1]);
    frame.render_widget(
        Paragraph::new(view.current_time.as_str()).alignment(Alignment::Right),
        progress_row[0],
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().green())
            .ratio((view.progress / 100.0).clamp(0.0, 1.0))
            .label("")
            .use_unicode(true),
        progress_row[1],
    );
    frame.render_widget(
        Paragraph::new(format!(" {}", view.duration)),
        progress_row[2],
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(columns[2]);
    frame.render_widget(
        Paragraph::new(repeat_label(view.repeat))
            .alignment(Alignment::Right)
            .dim(),
        right[0],
    );

    let volume_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(right[1]);
    frame.render_widget(
        Paragraph::new(volume_symbol(view.muted, view.volume)),
        volume_row[0],
    );
    let level = transport.effective_volume();
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().white())
            .ratio(f64::from(level) / 100.0)
            .label(format!("{level}"))
            .use_unicode(true),
        volume_row[1],
    );
}
