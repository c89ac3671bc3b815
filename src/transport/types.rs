//! Small value types shared by the transport, the UI and MPRIS.

/// The track currently loaded into the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    pub title: String,
    pub artist: String,
    /// Album art reference; `None` makes the view draw a placeholder.
    pub artwork: Option<String>,
    /// Total length in whole seconds. Expected to be positive.
    pub duration_secs: u64,
}

impl TrackInfo {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, duration_secs: u64) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            artwork: None,
            duration_secs,
        }
    }

    pub fn with_artwork(mut self, artwork: impl Into<String>) -> Self {
        self.artwork = Some(artwork.into());
        self
    }
}

/// Repeat behaviour shown on the repeat button. Only a label here: nothing
/// advances or restarts when a track ends.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RepeatMode {
    #[default]
    Off,
    /// Repeat the whole playlist.
    Context,
    /// Repeat the current track.
    Track,
}

impl RepeatMode {
    /// Next mode in the `Off -> Context -> Track -> Off` cycle.
    pub fn next(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::Context,
            RepeatMode::Context => RepeatMode::Track,
            RepeatMode::Track => RepeatMode::Off,
        }
    }

    /// MPRIS `LoopStatus` value.
    pub fn as_loop_status(self) -> &'static str {
        match self {
            RepeatMode::Off => "None",
            RepeatMode::Context => "Playlist",
            RepeatMode::Track => "Track",
        }
    }

    pub fn from_loop_status(status: &str) -> Option<Self> {
        match status {
            "None" => Some(RepeatMode::Off),
            "Playlist" => Some(RepeatMode::Context),
            "Track" => Some(RepeatMode::Track),
            _ => None,
        }
    }
}

/// Playback sub-state of the transport.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
}

/// Snapshot of everything the view layer renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransportView {
    pub track: Option<TrackInfo>,
    pub status: PlaybackStatus,
    /// Percentage of the track elapsed, `0.0..=100.0`.
    pub progress: f64,
    pub elapsed_secs: f64,
    pub volume: u8,
    pub muted: bool,
    pub shuffle: bool,
    pub repeat: RepeatMode,
    pub current_time: String,
    pub duration: String,
}

impl TransportView {
    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    /// Volume as heard: zero while muted.
    pub fn effective_volume(&self) -> u8 {
        if self.muted { 0 } else { self.volume }
    }
}
