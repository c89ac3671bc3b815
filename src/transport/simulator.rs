use std::time::Duration;

use log::{debug, info, trace, warn};

use super::time::{format_time, whole_seconds};
use super::timer::{Scheduler, TimerHandle, TimerId};
use super::types::{PlaybackStatus, RepeatMode, TrackInfo, TransportView};

/// Cadence of the progress tick while playing.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Volume restored when unmuting from a stored level of zero.
pub const DEFAULT_UNMUTE_VOLUME: u8 = 50;

const RATIO_SCALE: f64 = 1e9;

/// Playback state owner for the control bar.
///
/// All mutation goes through the methods below; the tick timer only ever
/// delivers [`TimerId`]s back through the owner (see [`Transport::on_timer`]),
/// so there is exactly one writer.
pub struct Transport {
    track: Option<TrackInfo>,
    playing: bool,
    /// Seconds into the current track. Progress is derived from this.
    elapsed: f64,
    volume: u8,
    muted: bool,
    shuffle: bool,
    repeat: RepeatMode,

    scheduler: Box<dyn Scheduler>,
    timer: Option<TimerHandle>,
    next_timer_id: u64,
}

impl Transport {
    pub fn new(scheduler: Box<dyn Scheduler>) -> Self {
        Self {
            track: None,
            playing: false,
            elapsed: 0.0,
            volume: DEFAULT_UNMUTE_VOLUME,
            muted: false,
            shuffle: false,
            repeat: RepeatMode::Off,
            scheduler,
            timer: None,
            next_timer_id: 0,
        }
    }

    /// Replace the loaded track. Stops playback and rewinds to the start.
    pub fn load_track(&mut self, mut track: TrackInfo) {
        if track.duration_secs == 0 {
            warn!("track {:?} has no duration, treating it as 1s", track.title);
            track.duration_secs = 1;
        }

        self.cancel_timer();
        self.playing = false;
        self.elapsed = 0.0;
        info!(
            "loaded {:?} by {:?} ({})",
            track.title,
            track.artist,
            format_time(track.duration_secs)
        );
        self.track = Some(track);
    }

    /// Flip between playing and stopped. Does nothing without a track.
    pub fn toggle_play_pause(&mut self) {
        self.set_playing(!self.playing);
    }

    pub fn play(&mut self) {
        self.set_playing(true);
    }

    pub fn pause(&mut self) {
        self.set_playing(false);
    }

    /// Pause and rewind to the start of the track.
    pub fn stop(&mut self) {
        self.set_playing(false);
        self.elapsed = 0.0;
    }

    fn set_playing(&mut self, playing: bool) {
        if self.track.is_none() {
            debug!("ignoring play state change: no track loaded");
            return;
        }
        if self.playing == playing {
            return;
        }

        self.playing = playing;
        if playing {
            self.start_timer();
        } else {
            self.cancel_timer();
        }
        debug!("transport {:?}", self.status());
    }

    pub fn toggle_shuffle(&mut self) {
        self.set_shuffle(!self.shuffle);
    }

    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
        debug!("shuffle {}", if shuffle { "on" } else { "off" });
    }

    /// Advance `Off -> Context -> Track -> Off`.
    pub fn cycle_repeat(&mut self) {
        self.set_repeat(self.repeat.next());
    }

    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.repeat = repeat;
        debug!("repeat {:?}", repeat);
    }

    /// Set the volume, clamped to `0..=100`. A level of zero means muted,
    /// anything else unmutes.
    pub fn set_volume(&mut self, level: i32) {
        let level = level.clamp(0, 100);
        self.volume = level as u8;
        self.muted = level == 0;
    }

    pub fn adjust_volume(&mut self, delta: i32) {
        self.set_volume(i32::from(self.volume) + delta);
    }

    /// Flip mute. Unmuting with a stored volume of zero restores
    /// [`DEFAULT_UNMUTE_VOLUME`]; any other stored level is kept.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        if !self.muted && self.volume == 0 {
            self.volume = DEFAULT_UNMUTE_VOLUME;
        }
        debug!("muted={} volume={}", self.muted, self.volume);
    }

    /// Jump to `ratio` percent of the track, clamped to `0..=100`.
    pub fn seek(&mut self, ratio: f64) {
        let Some(duration) = self.duration_secs() else {
            return;
        };
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 100.0)
        };
        self.elapsed = ratio / 100.0 * duration;
    }

    /// Jump to an absolute position in seconds, clamped into the track.
    pub fn seek_to(&mut self, secs: f64) {
        let Some(duration) = self.duration_secs() else {
            return;
        };
        self.elapsed = if secs.is_nan() {
            0.0
        } else {
            secs.clamp(0.0, duration)
        };
    }

    /// Scrub relative to the current position.
    pub fn seek_by(&mut self, delta_secs: f64) {
        self.seek_to(self.elapsed + delta_secs);
    }

    /// Advance one second. Reaching the end of the track stops playback and
    /// pins progress at exactly 100%.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        let Some(duration) = self.duration_secs() else {
            return;
        };

        let next = self.elapsed + 1.0;
        if next >= duration {
            self.elapsed = duration;
            self.playing = false;
            self.cancel_timer();
            info!("reached end of track");
        } else {
            self.elapsed = next;
        }
    }

    /// Deliver a tick from the timer identified by `id`. Ticks from any timer
    /// other than the live one are dropped.
    pub fn on_timer(&mut self, id: TimerId) {
        let live = matches!(&self.timer, Some(h) if h.id() == id && !h.is_cancelled());
        if live {
            self.tick();
        } else {
            trace!("dropping stale tick from {:?}", id);
        }
    }

    /// Teardown: cancel the tick timer and stop playing.
    pub fn shutdown(&mut self) {
        self.cancel_timer();
        self.playing = false;
    }

    fn start_timer(&mut self) {
        self.cancel_timer();
        let id = TimerId(self.next_timer_id);
        self.next_timer_id += 1;
        self.timer = Some(self.scheduler.start(id, TICK_PERIOD));
    }

    fn cancel_timer(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
    }

    fn duration_secs(&self) -> Option<f64> {
        self.track.as_ref().map(|t| t.duration_secs as f64)
    }

    pub fn track(&self) -> Option<&TrackInfo> {
        self.track.as_ref()
    }

    /// Transport buttons are only live with a track loaded.
    pub fn controls_enabled(&self) -> bool {
        self.track.is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn status(&self) -> PlaybackStatus {
        if self.playing {
            PlaybackStatus::Playing
        } else {
            PlaybackStatus::Stopped
        }
    }

    /// Percentage of the track elapsed. Zero without a track.
    ///
    /// Rounded to nine decimals so a [`Transport::seek`] reads back as the
    /// ratio that was requested.
    pub fn progress_ratio(&self) -> f64 {
        match self.duration_secs() {
            Some(duration) => {
                let ratio = (self.elapsed / duration * 100.0).clamp(0.0, 100.0);
                (ratio * RATIO_SCALE).round() / RATIO_SCALE
            }
            None => 0.0,
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Level the volume slider shows: zero while muted.
    pub fn effective_volume(&self) -> u8 {
        if self.muted { 0 } else { self.volume }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    pub fn current_time_display(&self) -> String {
        format_time(whole_seconds(self.elapsed))
    }

    pub fn duration_display(&self) -> String {
        format_time(self.track.as_ref().map_or(0, |t| t.duration_secs))
    }

    pub fn view(&self) -> TransportView {
        TransportView {
            track: self.track().cloned(),
            status: self.status(),
            progress: self.progress_ratio(),
            elapsed_secs: self.elapsed_secs(),
            volume: self.volume(),
            muted: self.is_muted(),
            shuffle: self.shuffle(),
            repeat: self.repeat(),
            current_time: self.current_time_display(),
            duration: self.duration_display(),
        }
    }

    #[cfg(test)]
    pub(crate) fn timer_id(&self) -> Option<TimerId> {
        self.timer.as_ref().map(|t| t.id())
    }
}
