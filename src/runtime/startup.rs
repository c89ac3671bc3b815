use log::info;

use crate::app::App;
use crate::catalog;
use crate::config;

/// Seed the transport from `[playback]` before the first frame is drawn.
pub fn apply_playback_defaults(app: &mut App, settings: &config::Settings) {
    let playback = &settings.playback;

    app.transport.set_volume(i32::from(playback.volume));
    app.transport.set_shuffle(playback.shuffle);
    app.transport.set_repeat(playback.repeat.into());

    if playback.load_demo_track {
        app.load_demo(catalog::demo_track(), playback.start_at_percent);
        info!(
            "demo track parked at {}/{}",
            app.transport.current_time_display(),
            app.transport.duration_display()
        );
    }
}
