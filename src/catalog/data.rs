use crate::transport::TrackInfo;

use super::model::{Catalog, NavItem, PlaylistDetails, PlaylistLink, Song};

fn nav(label: &str, active: bool) -> NavItem {
    NavItem {
        label: label.to_string(),
        active,
    }
}

fn playlist(name: &str, active: bool) -> PlaylistLink {
    PlaylistLink {
        name: name.to_string(),
        active,
    }
}

fn song(id: &str, title: &str, artist: &str, album: &str, duration_secs: u64) -> Song {
    Song {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        duration_secs,
        cover: None,
    }
}

/// The "Daily Mix 1" page.
pub fn daily_mix() -> Catalog {
    Catalog {
        nav: vec![
            nav("Home", true),
            nav("Search", false),
            nav("Your Library", false),
        ],
        library: vec![nav("Create Playlist", false), nav("Liked Songs", false)],
        playlists: vec![
            playlist("Chill Vibes", false),
            playlist("Workout Mix", false),
            playlist("90s Throwback", true),
            playlist("Indie Acoustic", false),
            playlist("Focus Playlist", false),
            playlist("Road Trip Tunes", false),
            playlist("Rainy Day Jazz", false),
            playlist("Summer Hits", false),
            playlist("Deep Focus Coding", false),
            playlist("Late Night Lo-Fi", false),
            playlist("Morning Commute Classics", false),
        ],
        details: PlaylistDetails {
            kind: "PLAYLIST".to_string(),
            title: "Daily Mix 1".to_string(),
            creator: "Spotify".to_string(),
            description: Some(
                "Your personalized mix of songs you love and new discoveries, updated daily."
                    .to_string(),
            ),
            song_count: 50,
            total_duration_minutes: 205,
            cover: None,
        },
        songs: vec![
            song("s1", "Bohemian Rhapsody", "Queen", "A Night at the Opera", 355),
            song("s2", "Stairway to Heaven", "Led Zeppelin", "Led Zeppelin IV", 482),
            song("s3", "Imagine", "John Lennon", "Imagine", 181),
            song("s4", "Smells Like Teen Spirit", "Nirvana", "Nevermind", 301),
            song("s5", "Hotel California", "Eagles", "Hotel California", 390),
            song("s6", "Like a Rolling Stone", "Bob Dylan", "Highway 61 Revisited", 373),
            song("s7", "Hey Jude", "The Beatles", "Hey Jude (Single)", 431),
            song("s8", "Wonderwall", "Oasis", "(What's the Story) Morning Glory?", 258),
            song("s9", "Billie Jean", "Michael Jackson", "Thriller", 294),
            song("s10", "Sweet Child O' Mine", "Guns N' Roses", "Appetite for Destruction", 356),
        ],
    }
}

/// Track sitting in the player bar when the app starts.
pub fn demo_track() -> TrackInfo {
    TrackInfo::new("Yesterday", "The Beatles", 125)
        .with_artwork("https://upload.wikimedia.org/wikipedia/en/e/e7/Help_album_cover.jpg")
}
