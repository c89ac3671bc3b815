use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::player::art_glyph;
use crate::catalog::Catalog;
use crate::transport::TrackInfo;

/// Separator line plus title and artist.
const CARD_HEIGHT: u16 = 3;

fn entry(label: &str, active: bool) -> ListItem<'_> {
    if active {
        ListItem::new(format!("▌ {label}")).style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        ListItem::new(format!("  {label}")).dim()
    }
}

/// Cut `text` to `width` columns, ending in `…` when shortened.
pub(super) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let kept: String = text.chars().take(width - 1).collect();
    let mut out = kept.trim_end().to_string();
    out.push('…');
    out
}

fn now_playing_card(track: &TrackInfo, width: u16) -> Paragraph<'static> {
    // "▣ " and the matching indent take two columns.
    let width = usize::from(width).saturating_sub(2);
    Paragraph::new(vec![
        Line::from(vec![
            Span::raw(format!("{} ", art_glyph(track))),
            Span::raw(truncate(&track.title, width)).bold(),
        ]),
        Line::from(format!("  {}", truncate(&track.artist, width))).dim(),
    ])
    .block(Block::default().borders(Borders::TOP))
}

pub(super) fn draw(frame: &mut Frame, catalog: &Catalog, track: Option<&TrackInfo>, area: Rect) {
    let top_len = (catalog.nav.len() + catalog.library.len() + 3) as u16;
    let card_len = if track.is_some() { CARD_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top_len),
            Constraint::Min(1),
            Constraint::Length(card_len),
        ])
        .split(area);

    let mut items: Vec<ListItem> = catalog
        .nav
        .iter()
        .map(|n| entry(&n.label, n.active))
        .collect();
    items.push(ListItem::new(""));
    items.extend(catalog.library.iter().map(|n| entry(&n.label, n.active)));

    let nav = List::new(items).block(Block::default().borders(Borders::ALL).title(" playbar "));
    frame.render_widget(nav, chunks[0]);

    let playlists: Vec<ListItem> = catalog
        .playlists
        .iter()
        .map(|p| entry(&p.name, p.active))
        .collect();
    let list = List::new(playlists).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" PLAYLISTS "),
    );
    frame.render_widget(list, chunks[1]);

    if let Some(track) = track {
        frame.render_widget(now_playing_card(track, chunks[2].width), chunks[2]);
    }
}
