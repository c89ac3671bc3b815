use crate::app::App;
use crate::mpris::MprisHandle;
use crate::transport::TransportView;

/// Last snapshot published to MPRIS.
#[derive(Default)]
pub struct MprisSync {
    last_view: Option<TransportView>,
    last_song: Option<String>,
}

impl MprisSync {
    /// Push the transport snapshot to MPRIS if it changed since the last call.
    ///
    /// Returns true when a new snapshot was published.
    pub fn update(&mut self, mpris: Option<&MprisHandle>, app: &App) -> bool {
        let view = app.transport.view();
        let song = app.now_playing_id().map(str::to_string);
        if self.last_view.as_ref() == Some(&view) && self.last_song == song {
            return false;
        }

        if let Some(mpris) = mpris {
            mpris.sync(&view, song.as_deref());
        }
        self.last_view = Some(view);
        self.last_song = song;
        true
    }
}
