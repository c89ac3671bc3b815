use super::*;
use crate::transport::{PlaybackStatus, TrackInfo};
use std::sync::mpsc;

fn loaded_view(status: PlaybackStatus) -> TransportView {
    TransportView {
        track: Some(
            TrackInfo::new("Yesterday", "The Beatles", 125).with_artwork("https://example.test/help.jpg"),
        ),
        status,
        progress: 25.0,
        elapsed_secs: 31.25,
        volume: 50,
        current_time: "0:31".to_string(),
        duration: "2:05".to_string(),
        ..TransportView::default()
    }
}

fn player() -> (PlayerIface, MprisHandle, mpsc::Receiver<ControlCmd>) {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (tx, rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface {
        tx,
        state: state.clone(),
    };
    (iface, MprisHandle { state }, rx)
}

#[test]
fn sync_sets_and_clears_track_id() {
    let (_iface, handle, _rx) = player();

    handle.sync(&loaded_view(PlaybackStatus::Stopped), Some("s7"));
    {
        let s = handle.state.lock().unwrap();
        assert_eq!(
            s.track_id.as_ref().map(|p| p.as_str()),
            Some("/org/mpris/MediaPlayer2/track/s7")
        );
    }

    handle.sync(&loaded_view(PlaybackStatus::Stopped), None);
    {
        let s = handle.state.lock().unwrap();
        assert_eq!(
            s.track_id.as_ref().map(|p| p.as_str()),
            Some("/org/mpris/MediaPlayer2/track/demo")
        );
    }

    handle.sync(&TransportView::default(), Some("s7"));
    assert!(handle.state.lock().unwrap().track_id.is_none());
}

#[test]
fn playback_status_distinguishes_paused_from_stopped() {
    let (iface, handle, _rx) = player();
    assert_eq!(iface.playback_status(), "Stopped");

    handle.sync(&loaded_view(PlaybackStatus::Stopped), None);
    assert_eq!(iface.playback_status(), "Paused");

    handle.sync(&loaded_view(PlaybackStatus::Playing), None);
    assert_eq!(iface.playback_status(), "Playing");
}

#[test]
fn loop_status_follows_repeat_mode() {
    let (iface, handle, _rx) = player();
    for (mode, text) in [
        (RepeatMode::Off, "None"),
        (RepeatMode::Context, "Playlist"),
        (RepeatMode::Track, "Track"),
    ] {
        let view = TransportView {
            repeat: mode,
            ..loaded_view(PlaybackStatus::Stopped)
        };
        handle.sync(&view, None);
        assert_eq!(iface.loop_status(), text);
    }
}

#[test]
fn metadata_includes_expected_keys_when_loaded() {
    let (iface, handle, _rx) = player();
    assert!(iface.metadata().is_empty());

    handle.sync(&loaded_view(PlaybackStatus::Playing), Some("s1"));
    let map = iface.metadata();
    for k in [
        "mpris:trackid",
        "mpris:length",
        "mpris:artUrl",
        "xesam:title",
        "xesam:artist",
    ] {
        assert!(map.contains_key(k), "missing key: {k}");
    }
    let length = i64::try_from(map["mpris:length"].clone()).unwrap();
    assert_eq!(length, 125_000_000);
}

#[test]
fn volume_and_position_are_scaled() {
    let (iface, handle, _rx) = player();
    handle.sync(&loaded_view(PlaybackStatus::Playing), None);
    assert_eq!(iface.volume(), 0.5);
    assert_eq!(iface.position(), 31_250_000);

    let muted = TransportView {
        muted: true,
        ..loaded_view(PlaybackStatus::Playing)
    };
    handle.sync(&muted, None);
    assert_eq!(iface.volume(), 0.0);
}

#[test]
fn capabilities_require_a_loaded_track() {
    let (iface, handle, _rx) = player();
    assert!(!iface.can_play());
    assert!(!iface.can_seek());

    handle.sync(&loaded_view(PlaybackStatus::Stopped), None);
    assert!(iface.can_control());
    assert!(iface.can_play());
    assert!(iface.can_pause());
    assert!(iface.can_seek());
    assert!(!iface.can_go_next());
    assert!(!iface.can_go_previous());
}

#[test]
fn methods_and_setters_only_send_commands() {
    let (mut iface, handle, rx) = player();
    handle.sync(&loaded_view(PlaybackStatus::Stopped), Some("s2"));

    iface.play_pause();
    iface.stop();
    iface.set_shuffle(true);
    iface.set_loop_status("Track".to_string());
    iface.set_loop_status("Sometimes".to_string());
    iface.set_volume(0.42);
    iface.set_volume(7.0);
    iface.seek(-5_000_000);
    iface.next();

    let cmds: Vec<ControlCmd> = rx.try_iter().collect();
    assert_eq!(
        cmds,
        vec![
            ControlCmd::PlayPause,
            ControlCmd::Stop,
            ControlCmd::SetShuffle(true),
            ControlCmd::SetRepeat(RepeatMode::Track),
            ControlCmd::SetVolume(42),
            ControlCmd::SetVolume(100),
            ControlCmd::SeekBy(-5.0),
        ]
    );
    assert!(!iface.shuffle(), "snapshot is only updated by sync");
}

#[test]
fn set_position_checks_track_id_and_range() {
    let (iface, handle, rx) = player();
    handle.sync(&loaded_view(PlaybackStatus::Playing), Some("s2"));

    let current = OwnedObjectPath::try_from("/org/mpris/MediaPlayer2/track/s2").unwrap();
    let other = OwnedObjectPath::try_from("/org/mpris/MediaPlayer2/track/s3").unwrap();

    iface.set_position(other, 1_000_000);
    iface.set_position(current.clone(), -1);
    iface.set_position(current.clone(), 126_000_000);
    iface.set_position(current, 60_000_000);

    let cmds: Vec<ControlCmd> = rx.try_iter().collect();
    assert_eq!(cmds, vec![ControlCmd::SetPosition(60.0)]);
}

#[test]
fn seek_without_track_is_dropped() {
    let (iface, _handle, rx) = player();
    iface.seek(1_000_000);
    assert!(rx.try_recv().is_err());
}
