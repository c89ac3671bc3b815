//! Application model: the playlist page plus the transport that drives the
//! player bar.

use log::debug;

use crate::catalog::Catalog;
use crate::transport::{TrackInfo, Transport};

/// The main application model.
pub struct App {
    pub catalog: Catalog,
    /// Highlighted row in the song table.
    pub selected: usize,
    pub transport: Transport,
    /// Row whose song is loaded in the player bar, if it came from the table.
    pub now_playing: Option<usize>,
}

impl App {
    /// Create a new `App` over `catalog`, driving `transport`.
    pub fn new(catalog: Catalog, transport: Transport) -> Self {
        Self {
            catalog,
            selected: 0,
            transport,
            now_playing: None,
        }
    }

    /// Return true if the playlist has any songs.
    pub fn has_songs(&self) -> bool {
        !self.catalog.songs.is_empty()
    }

    /// Move selection to the next song, wrapping to the first.
    pub fn next(&mut self) {
        let len = self.catalog.songs.len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
    }

    /// Move selection to the previous song, wrapping to the last.
    pub fn prev(&mut self) {
        let len = self.catalog.songs.len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        self.selected = self.catalog.songs.len().saturating_sub(1);
    }

    /// Load the highlighted song and start playing it.
    ///
    /// A song that is already loaded resumes from its current position rather
    /// than rewinding.
    pub fn play_selected(&mut self) {
        let Some(song) = self.catalog.songs.get(self.selected) else {
            return;
        };

        if self.now_playing == Some(self.selected) {
            if !self.transport.is_playing() {
                self.transport.play();
            }
            return;
        }

        debug!("playing row {} ({})", self.selected, song.id);
        self.transport.load_track(song.track_info());
        self.now_playing = Some(self.selected);
        self.transport.play();
    }

    /// Start the playlist from its first song.
    pub fn play_playlist(&mut self) {
        self.first();
        self.play_selected();
    }

    /// Put `track` in the player bar paused at `start_at_percent`.
    pub fn load_demo(&mut self, track: TrackInfo, start_at_percent: f64) {
        self.transport.load_track(track);
        self.transport.seek(start_at_percent);
        self.now_playing = None;
    }

    /// Id of the loaded song row, if any.
    pub fn now_playing_id(&self) -> Option<&str> {
        self.now_playing
            .and_then(|i| self.catalog.songs.get(i))
            .map(|s| s.id.as_str())
    }
}
