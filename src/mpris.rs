//! MPRIS (`org.mpris.MediaPlayer2`) bridge so media keys and `playerctl` can
//! drive the simulated player bar.
//!
//! The D-Bus side only reads a snapshot of the transport and sends
//! [`ControlCmd`]s back to the runtime; it never touches the transport itself.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, mpsc::Sender};

use async_io::{Timer, block_on};
use log::{debug, info, warn};
use zbus::{Connection, interface};
use zvariant::{OwnedObjectPath, OwnedValue, Value};

use crate::control::ControlCmd;
use crate::transport::{RepeatMode, TransportView};

const OBJECT_PATH: &str = "/org/mpris/MediaPlayer2";
const TRACK_PATH_PREFIX: &str = "/org/mpris/MediaPlayer2/track/";

#[derive(Debug, Default)]
struct SharedState {
    view: TransportView,
    track_id: Option<OwnedObjectPath>,
}

pub struct MprisHandle {
    state: Arc<Mutex<SharedState>>,
}

impl MprisHandle {
    /// Refresh the snapshot the D-Bus properties are served from.
    ///
    /// `song_id` names the loaded playlist row; a loaded track that did not
    /// come from the playlist is published as `.../track/demo`.
    pub fn sync(&self, view: &TransportView, song_id: Option<&str>) {
        let track_id = view
            .track
            .as_ref()
            .and_then(|_| track_object_path(song_id.unwrap_or("demo")));
        if let Ok(mut s) = self.state.lock() {
            s.view = view.clone();
            s.track_id = track_id;
        }
    }
}

fn track_object_path(key: &str) -> Option<OwnedObjectPath> {
    OwnedObjectPath::try_from(format!("{TRACK_PATH_PREFIX}{key}")).ok()
}

fn secs_to_micros(secs: f64) -> i64 {
    (secs * 1_000_000.0) as i64
}

fn micros_to_secs(micros: i64) -> f64 {
    micros as f64 / 1_000_000.0
}

struct RootIface {
    tx: Sender<ControlCmd>,
    identity: String,
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootIface {
    fn raise(&self) {
        // No-op for TUI.
    }

    fn quit(&self) {
        let _ = self.tx.send(ControlCmd::Quit);
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn identity(&self) -> String {
        self.identity.clone()
    }

    #[zbus(property)]
    fn supported_uri_schemes(&self) -> Vec<String> {
        vec![]
    }

    #[zbus(property)]
    fn supported_mime_types(&self) -> Vec<String> {
        vec![]
    }
}

struct PlayerIface {
    tx: Sender<ControlCmd>,
    state: Arc<Mutex<SharedState>>,
}

impl PlayerIface {
    fn snapshot<T>(&self, f: impl FnOnce(&SharedState) -> T, fallback: T) -> T {
        match self.state.lock() {
            Ok(s) => f(&s),
            Err(_) => fallback,
        }
    }

    fn has_track(&self) -> bool {
        self.snapshot(|s| s.view.track.is_some(), false)
    }

    fn send(&self, cmd: ControlCmd) {
        debug!("mpris -> {cmd:?}");
        let _ = self.tx.send(cmd);
    }
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerIface {
    /// The playlist mockup has no queue to advance through.
    fn next(&self) {}

    fn previous(&self) {}

    fn play(&self) {
        self.send(ControlCmd::Play);
    }

    fn pause(&self) {
        self.send(ControlCmd::Pause);
    }

    fn play_pause(&self) {
        self.send(ControlCmd::PlayPause);
    }

    fn stop(&self) {
        self.send(ControlCmd::Stop);
    }

    /// Relative seek, `offset` in microseconds.
    fn seek(&self, offset: i64) {
        if self.has_track() {
            self.send(ControlCmd::SeekBy(micros_to_secs(offset)));
        }
    }

    /// Absolute seek. Ignored unless `track_id` is the loaded track and
    /// `position` lies within it.
    fn set_position(&self, track_id: OwnedObjectPath, position: i64) {
        let (current, length) = self.snapshot(
            |s| {
                (
                    s.track_id.clone(),
                    s.view.track.as_ref().map(|t| t.duration_secs),
                )
            },
            (None, None),
        );
        let Some(length) = length else {
            return;
        };
        if current.as_ref() != Some(&track_id) {
            debug!("mpris: SetPosition for stale track {}", track_id.as_str());
            return;
        }
        if position < 0 || position > secs_to_micros(length as f64) {
            return;
        }
        self.send(ControlCmd::SetPosition(micros_to_secs(position)));
    }

    fn open_uri(&self, _uri: String) {}

    #[zbus(property)]
    fn playback_status(&self) -> &str {
        self.snapshot(
            |s| match (&s.view.track, s.view.is_playing()) {
                (None, _) => "Stopped",
                (Some(_), true) => "Playing",
                (Some(_), false) => "Paused",
            },
            "Stopped",
        )
    }

    #[zbus(property)]
    fn loop_status(&self) -> String {
        self.snapshot(|s| s.view.repeat.as_loop_status(), "None")
            .to_string()
    }

    #[zbus(property)]
    fn set_loop_status(&mut self, value: String) {
        match RepeatMode::from_loop_status(&value) {
            Some(mode) => self.send(ControlCmd::SetRepeat(mode)),
            None => warn!("mpris: unknown LoopStatus {value:?}"),
        }
    }

    #[zbus(property)]
    fn shuffle(&self) -> bool {
        self.snapshot(|s| s.view.shuffle, false)
    }

    #[zbus(property)]
    fn set_shuffle(&mut self, value: bool) {
        self.send(ControlCmd::SetShuffle(value));
    }

    /// `0.0..=1.0`; reports silence while muted.
    #[zbus(property)]
    fn volume(&self) -> f64 {
        self.snapshot(|s| f64::from(s.view.effective_volume()) / 100.0, 0.0)
    }

    #[zbus(property)]
    fn set_volume(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        let level = (value.clamp(0.0, 1.0) * 100.0).round() as i32;
        self.send(ControlCmd::SetVolume(level));
    }

    #[zbus(property)]
    fn position(&self) -> i64 {
        self.snapshot(|s| secs_to_micros(s.view.elapsed_secs), 0)
    }

    #[zbus(property)]
    fn rate(&self) -> f64 {
        1.0
    }

    #[zbus(property)]
    fn minimum_rate(&self) -> f64 {
        1.0
    }

    #[zbus(property)]
    fn maximum_rate(&self) -> f64 {
        1.0
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        self.has_track()
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        self.has_track()
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        self.has_track()
    }

    #[zbus(property)]
    fn can_seek(&self) -> bool {
        self.has_track()
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn metadata(&self) -> HashMap<String, OwnedValue> {
        let mut map = HashMap::new();
        let Ok(s) = self.state.lock() else {
            return map;
        };
        let Some(track) = s.view.track.as_ref() else {
            return map;
        };

        let mut insert = |key: &str, value: Value<'static>| {
            if let Ok(v) = OwnedValue::try_from(value) {
                map.insert(key.to_string(), v);
            }
        };

        if let Some(id) = s.track_id.clone() {
            insert("mpris:trackid", Value::from(id.into_inner()));
        }
        insert(
            "mpris:length",
            Value::from(secs_to_micros(track.duration_secs as f64)),
        );
        insert("xesam:title", Value::from(track.title.clone()));
        insert("xesam:artist", Value::from(vec![track.artist.clone()]));
        if let Some(art) = &track.artwork {
            insert("mpris:artUrl", Value::from(art.clone()));
        }
        map
    }
}

/// Register the player on the session bus from a background thread.
///
/// Failures are logged and leave the app running without MPRIS.
pub fn spawn_mpris(tx: Sender<ControlCmd>, identity: &str) -> MprisHandle {
    let state = Arc::new(Mutex::new(SharedState::default()));

    let state_for_thread = state.clone();
    let identity = identity.to_string();
    std::thread::spawn(move || {
        block_on(async move {
            let connection = match Connection::session().await {
                Ok(c) => c,
                Err(e) => {
                    warn!("MPRIS: failed to connect to session bus: {e}");
                    return;
                }
            };

            let bus_name = format!("org.mpris.MediaPlayer2.{identity}");
            if let Err(e) = connection.request_name(bus_name.as_str()).await {
                warn!("MPRIS: failed to acquire name {bus_name}: {e}");
                return;
            }

            let object_server = connection.object_server();

            if let Err(e) = object_server
                .at(
                    OBJECT_PATH,
                    RootIface {
                        tx: tx.clone(),
                        identity,
                    },
                )
                .await
            {
                warn!("MPRIS: failed to register root iface: {e}");
                return;
            }

            if let Err(e) = object_server
                .at(
                    OBJECT_PATH,
                    PlayerIface {
                        tx,
                        state: state_for_thread,
                    },
                )
                .await
            {
                warn!("MPRIS: failed to register player iface: {e}");
                return;
            }

            info!("MPRIS: registered as {bus_name}");

            // Keep the service alive.
            loop {
                Timer::after(std::time::Duration::from_secs(3600)).await;
            }
        });
    });

    MprisHandle { state }
}

#[cfg(test)]
mod tests;
