use std::sync::mpsc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::event_loop::{EventLoopState, handle_control_cmd, handle_key_event};
use super::mpris_sync::MprisSync;
use super::settings::load_settings;
use super::startup::apply_playback_defaults;
use crate::app::App;
use crate::catalog;
use crate::config::tests::{EnvGuard, env_lock};
use crate::config::{ControlsSettings, RepeatModeSetting, Settings};
use crate::control::ControlCmd;
use crate::transport::{ManualScheduler, RepeatMode, TimerId, Transport};

fn app() -> (App, ManualScheduler) {
    let scheduler = ManualScheduler::default();
    let transport = Transport::new(Box::new(scheduler.clone()));
    (App::new(catalog::daily_mix(), transport), scheduler)
}

fn press(
    app: &mut App,
    state: &mut EventLoopState,
    tx: &mpsc::Sender<ControlCmd>,
    code: KeyCode,
) -> bool {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    handle_key_event(key, &ControlsSettings::default(), app, tx, state)
}

#[test]
fn playback_defaults_park_demo_track_at_quarter() {
    let (mut app, scheduler) = app();
    apply_playback_defaults(&mut app, &Settings::default());

    let t = &app.transport;
    assert_eq!(t.track().unwrap().title, "Yesterday");
    assert!(!t.is_playing());
    assert_eq!(t.current_time_display(), "0:31");
    assert_eq!(t.volume(), 50);
    assert_eq!(t.repeat(), RepeatMode::Off);
    assert_eq!(scheduler.started_count(), 0);
}

#[test]
fn playback_defaults_honour_settings() {
    let (mut app, _) = app();
    let mut settings = Settings::default();
    settings.playback.volume = 0;
    settings.playback.shuffle = true;
    settings.playback.repeat = RepeatModeSetting::Context;
    settings.playback.load_demo_track = false;
    apply_playback_defaults(&mut app, &settings);

    let t = &app.transport;
    assert!(t.track().is_none());
    assert!(t.is_muted());
    assert!(t.shuffle());
    assert_eq!(t.repeat(), RepeatMode::Context);
}

#[test]
fn control_commands_drive_the_transport() {
    let (mut app, scheduler) = app();
    apply_playback_defaults(&mut app, &Settings::default());

    assert!(!handle_control_cmd(ControlCmd::PlayPause, &mut app));
    assert!(app.transport.is_playing());

    let id = scheduler.last_started().unwrap();
    assert!(!handle_control_cmd(ControlCmd::Tick(id), &mut app));
    assert_eq!(app.transport.current_time_display(), "0:32");

    handle_control_cmd(ControlCmd::SetVolume(130), &mut app);
    handle_control_cmd(ControlCmd::SetRepeat(RepeatMode::Track), &mut app);
    handle_control_cmd(ControlCmd::SetShuffle(true), &mut app);
    handle_control_cmd(ControlCmd::SetPosition(100.0), &mut app);
    assert_eq!(app.transport.volume(), 100);
    assert_eq!(app.transport.repeat(), RepeatMode::Track);
    assert!(app.transport.shuffle());
    assert_eq!(app.transport.current_time_display(), "1:40");

    handle_control_cmd(ControlCmd::Stop, &mut app);
    assert!(!app.transport.is_playing());
    assert_eq!(app.transport.elapsed_secs(), 0.0);

    assert!(handle_control_cmd(ControlCmd::Quit, &mut app));
}

#[test]
fn stale_tick_from_channel_is_ignored() {
    let (mut app, _) = app();
    apply_playback_defaults(&mut app, &Settings::default());
    handle_control_cmd(ControlCmd::Play, &mut app);

    handle_control_cmd(ControlCmd::Tick(TimerId(9_999)), &mut app);
    assert_eq!(app.transport.current_time_display(), "0:31");
}

#[test]
fn keys_map_to_transport_and_selection() {
    let (mut app, _) = app();
    apply_playback_defaults(&mut app, &Settings::default());
    let (tx, rx) = mpsc::channel();
    let mut state = EventLoopState::new();

    press(&mut app, &mut state, &tx, KeyCode::Char('s'));
    press(&mut app, &mut state, &tx, KeyCode::Char('r'));
    press(&mut app, &mut state, &tx, KeyCode::Char('r'));
    assert!(app.transport.shuffle());
    assert_eq!(app.transport.repeat(), RepeatMode::Track);

    press(&mut app, &mut state, &tx, KeyCode::Char('+'));
    assert_eq!(app.transport.volume(), 55);
    press(&mut app, &mut state, &tx, KeyCode::Char('m'));
    assert!(app.transport.is_muted());

    press(&mut app, &mut state, &tx, KeyCode::Char('l'));
    assert_eq!(app.transport.current_time_display(), "0:36");
    press(&mut app, &mut state, &tx, KeyCode::Left);
    press(&mut app, &mut state, &tx, KeyCode::Left);
    assert_eq!(app.transport.current_time_display(), "0:26");

    press(&mut app, &mut state, &tx, KeyCode::Char('5'));
    assert!((app.transport.progress_ratio() - 50.0).abs() < 1e-9);

    press(&mut app, &mut state, &tx, KeyCode::Char(' '));
    assert_eq!(rx.try_recv().unwrap(), ControlCmd::PlayPause);
    assert!(!app.transport.is_playing(), "space goes through the channel");

    assert!(press(&mut app, &mut state, &tx, KeyCode::Char('q')));
}

#[test]
fn gg_and_g_jump_and_enter_plays_row() {
    let (mut app, _) = app();
    let (tx, _rx) = mpsc::channel();
    let mut state = EventLoopState::new();

    press(&mut app, &mut state, &tx, KeyCode::Char('G'));
    assert_eq!(app.selected, 9);

    press(&mut app, &mut state, &tx, KeyCode::Char('g'));
    press(&mut app, &mut state, &tx, KeyCode::Char('j'));
    assert_eq!(app.selected, 0, "j after a single g wraps, it does not jump");
    assert!(!state.pending_gg);

    press(&mut app, &mut state, &tx, KeyCode::Down);
    press(&mut app, &mut state, &tx, KeyCode::Down);
    press(&mut app, &mut state, &tx, KeyCode::Char('g'));
    press(&mut app, &mut state, &tx, KeyCode::Char('g'));
    assert_eq!(app.selected, 0);

    press(&mut app, &mut state, &tx, KeyCode::Down);
    press(&mut app, &mut state, &tx, KeyCode::Enter);
    assert_eq!(app.now_playing, Some(1));
    assert!(app.transport.is_playing());

    press(&mut app, &mut state, &tx, KeyCode::Char('P'));
    assert_eq!(app.now_playing, Some(0));
}

#[test]
fn mpris_sync_only_publishes_changes() {
    let (mut app, _) = app();
    let mut sync = MprisSync::default();

    assert!(sync.update(None, &app));
    assert!(!sync.update(None, &app));

    app.transport.toggle_mute();
    assert!(sync.update(None, &app));

    app.play_selected();
    assert!(sync.update(None, &app));
    assert!(!sync.update(None, &app));
}

#[test]
fn missing_explicit_config_falls_back_to_defaults() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("PLAYBAR__CONTROLS__SCRUB_SECONDS");

    let dir = tempfile::tempdir().unwrap();
    let s = load_settings(Some(dir.path().join("typo.toml")));
    assert_eq!(s.controls.scrub_seconds, Settings::default().controls.scrub_seconds);
    assert_eq!(s.playback.volume, Settings::default().playback.volume);
}
