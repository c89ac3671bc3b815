//! UI rendering helpers for the terminal user interface.
//!
//! The screen mirrors the playlist page: sidebar (with a now-playing card) on
//! the left, playlist header and song table on the right, the player bar and a
//! key help footer below.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::App;
use crate::config::{ControlsSettings, UiSettings};

mod player;
mod playlist;
mod sidebar;


const SIDEBAR_WIDTH: u16 = 26;
const PLAYER_HEIGHT: u16 = 5;

static CONTROLS_MAP: LazyLock<BTreeMap<String, String>> = LazyLock::new(|| {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    map.insert("j/k".to_string(), "up/down".to_string());
    map.insert("gg/G".to_string(), "top/bottom".to_string());
    map.insert("enter".to_string(), "play selected song".to_string());
    map.insert("P".to_string(), "play playlist".to_string());
    map.insert("space/p".to_string(), "play/pause".to_string());
    // h/l and +/- are filled dynamically from config.
    map.insert("0-9".to_string(), "seek to 0-90%".to_string());
    map.insert("s".to_string(), "shuffle".to_string());
    map.insert("r".to_string(), "repeat".to_string());
    map.insert("m".to_string(), "mute".to_string());
    map.insert("q".to_string(), "quit".to_string());
    map
});

/// Render the controls help text, incorporating scrub and volume steps.
fn controls_text(controls: &ControlsSettings) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = [
        "j/k", "gg/G", "enter", "P", "space/p", "h/l", "0-9", "+/-", "m", "s", "r", "q",
    ];
    order
        .iter()
        .filter_map(|k| match *k {
            "h/l" => Some(format!("[h/l] scrub -/+{}s", controls.scrub_seconds)),
            "+/-" => Some(format!("[+/-] volume ±{}", controls.volume_step)),
            _ => CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v)),
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(PLAYER_HEIGHT),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let main_area = if ui_settings.show_sidebar {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
            .split(rows[0]);
        sidebar::draw(frame, &app.catalog, app.transport.track(), columns[0]);
        columns[1]
    } else {
        rows[0]
    };

    playlist::draw(frame, app, ui_settings, main_area);
    player::draw(frame, &app.transport, rows[1]);

    let footer = Paragraph::new(controls_text(controls_settings))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(footer, rows[2]);
}
