use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::control::ControlCmd;
use crate::mpris::MprisHandle;
use crate::runtime::mpris_sync::MprisSync;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
    /// What MPRIS last saw.
    pub mpris: MprisSync,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Main terminal event loop: draws, applies queued commands (timer ticks
/// included) and handles keys. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    mpris: Option<&MprisHandle>,
    control_tx: &mpsc::Sender<ControlCmd>,
    control_rx: &mpsc::Receiver<ControlCmd>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        state.mpris.update(mpris, app);

        terminal.draw(|f| ui::draw(f, app, &settings.ui, &settings.controls))?;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, app) {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, &settings.controls, app, control_tx, state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one queued command to the transport. Returns true on quit.
pub(super) fn handle_control_cmd(cmd: ControlCmd, app: &mut App) -> bool {
    let transport = &mut app.transport;
    match cmd {
        ControlCmd::Quit => {
            info!("quit requested");
            return true;
        }
        ControlCmd::Tick(id) => transport.on_timer(id),
        ControlCmd::Play => transport.play(),
        ControlCmd::Pause => transport.pause(),
        ControlCmd::PlayPause => transport.toggle_play_pause(),
        ControlCmd::Stop => transport.stop(),
        ControlCmd::SetShuffle(on) => transport.set_shuffle(on),
        ControlCmd::SetRepeat(mode) => transport.set_repeat(mode),
        ControlCmd::SetVolume(level) => transport.set_volume(level),
        ControlCmd::SeekBy(secs) => transport.seek_by(secs),
        ControlCmd::SetPosition(secs) => transport.seek_to(secs),
    }

    false
}

/// Handle one key press. Returns true on quit.
pub(super) fn handle_key_event(
    key: KeyEvent,
    controls: &config::ControlsSettings,
    app: &mut App,
    control_tx: &mpsc::Sender<ControlCmd>,
    state: &mut EventLoopState,
) -> bool {
    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    let scrub = controls.scrub_seconds as f64;
    let step = i32::from(controls.volume_step);

    match key.code {
        KeyCode::Char('q') => {
            return true;
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.first();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => app.last(),
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Enter => app.play_selected(),
        KeyCode::Char('P') => app.play_playlist(),
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            // Behave like MPRIS PlayPause.
            let _ = control_tx.send(ControlCmd::PlayPause);
        }
        KeyCode::Char('s') => app.transport.toggle_shuffle(),
        KeyCode::Char('r') => app.transport.cycle_repeat(),
        KeyCode::Char('m') => app.transport.toggle_mute(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.transport.adjust_volume(step),
        KeyCode::Char('-') => app.transport.adjust_volume(-step),
        KeyCode::Char('l') | KeyCode::Right => app.transport.seek_by(scrub),
        KeyCode::Char('h') | KeyCode::Left => app.transport.seek_by(-scrub),
        KeyCode::Char(c @ '0'..='9') => {
            let tenths = c.to_digit(10).unwrap_or(0);
            debug!("seek to {}0%", tenths);
            app.transport.seek(f64::from(tenths) * 10.0);
        }
        _ => {}
    }

    false
}
