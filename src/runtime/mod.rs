use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use log::warn;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::catalog;
use crate::cli::Args;
use crate::control::ControlCmd;
use crate::logging;
use crate::transport::{ThreadScheduler, Transport};

mod event_loop;
mod mpris_sync;
mod settings;
mod startup;

#[cfg(test)]
mod tests;

pub fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings(args.config.clone());

    if args.dump_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    if let Err(e) = logging::init(&settings.log) {
        eprintln!("playbar: logging disabled: {e}");
    }

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let transport = Transport::new(Box::new(ThreadScheduler::new(control_tx.clone())));
    let mut app = App::new(catalog::daily_mix(), transport);
    startup::apply_playback_defaults(&mut app, &settings);

    let mpris = if settings.mpris.enabled && !args.no_mpris {
        Some(crate::mpris::spawn_mpris(
            control_tx.clone(),
            &settings.mpris.identity,
        ))
    } else {
        None
    };

    if let Err(e) = enable_raw_mode() {
        warn!("failed to enable raw mode: {e}");
        app.transport.shutdown();
        return Err(e.into());
    }
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new();

        event_loop::run(
            &mut terminal,
            &settings,
            &mut app,
            mpris.as_ref(),
            &control_tx,
            &control_rx,
            &mut state,
        )
    })();

    app.transport.shutdown();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
