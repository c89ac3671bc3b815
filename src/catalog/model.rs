use crate::transport::{TrackInfo, format_time};

/// One row of the song table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration_secs: u64,
    pub cover: Option<String>,
}

impl Song {
    pub fn duration_display(&self) -> String {
        format_time(self.duration_secs)
    }

    /// The transport-facing description of this row.
    pub fn track_info(&self) -> TrackInfo {
        TrackInfo {
            title: self.title.clone(),
            artist: self.artist.clone(),
            artwork: self.cover.clone(),
            duration_secs: self.duration_secs,
        }
    }
}

/// Details shown above the song table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistDetails {
    /// Small caps label above the title, e.g. `PLAYLIST`.
    pub kind: String,
    pub title: String,
    pub creator: String,
    pub description: Option<String>,
    /// Advertised size of the playlist; the table only shows a sample.
    pub song_count: u32,
    pub total_duration_minutes: u32,
    pub cover: Option<String>,
}

/// A sidebar navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub active: bool,
}

/// A playlist link in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistLink {
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub nav: Vec<NavItem>,
    pub library: Vec<NavItem>,
    pub playlists: Vec<PlaylistLink>,
    pub details: PlaylistDetails,
    pub songs: Vec<Song>,
}
