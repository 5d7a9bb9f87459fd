//! Runtime state for the video lightbox.
//!
//! All progress writes go through a single owner ([`PlaybackState::apply_progress`])
//! with two request types: the per-frame poll and the seek drag. The `seeking`
//! flag decides which writer currently holds authority over `progress`, so the
//! two can never race on the field.

/// How long the lightbox controls stay visible after the last pointer
/// movement, in milliseconds.
pub const CONTROLS_HIDE_DELAY_MS: f64 = 2000.0;

/// A request to write the playback progress ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressUpdate {
    /// Written by the per-frame poll. Ignored while a seek is in progress.
    Poll(f64),
    /// Written by the seek drag. Ignored unless a seek is in progress.
    Seek(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackState {
    pub open: bool,
    pub playing: bool,
    pub muted: bool,
    /// Fraction of the video played, in `[0, 1]`.
    pub progress: f64,
    pub seeking: bool,
    pub controls_visible: bool,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closing rewinds everything except the mute preference, which survives
    /// until the component is gone.
    pub fn close(&mut self) {
        *self = Self {
            muted: self.muted,
            ..Self::default()
        };
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    pub fn toggle_muted(&mut self) {
        self.muted = !self.muted;
    }

    pub fn begin_seek(&mut self) {
        self.seeking = true;
    }

    pub fn end_seek(&mut self) {
        self.seeking = false;
    }

    pub fn show_controls(&mut self) {
        self.controls_visible = true;
    }

    pub fn hide_controls(&mut self) {
        self.controls_visible = false;
    }

    /// The single write point for `progress`. Whichever writer does not hold
    /// authority right now has its update dropped on the floor.
    pub fn apply_progress(&mut self, update: ProgressUpdate) {
        match update {
            ProgressUpdate::Poll(ratio) if !self.seeking => {
                self.progress = clamp_ratio(ratio);
            }
            ProgressUpdate::Seek(ratio) if self.seeking => {
                self.progress = clamp_ratio(ratio);
            }
            ProgressUpdate::Poll(_) | ProgressUpdate::Seek(_) => {}
        }
    }
}

fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

/// Maps a horizontal pointer position to a `[0, 1]` ratio within the seek
/// bar's bounds.
pub fn seek_ratio(client_x: f64, bar_left: f64, bar_width: f64) -> f64 {
    if bar_width <= 0.0 {
        return 0.0;
    }
    clamp_ratio((client_x - bar_left) / bar_width)
}

/// Converts a progress ratio into a playback position in seconds.
pub fn seek_position_secs(ratio: f64, duration_secs: f64) -> f64 {
    clamp_ratio(ratio) * duration_secs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_resets_playback() {
        let mut state = PlaybackState::new();
        state.open();
        assert!(state.open);

        state.set_playing(true);
        state.apply_progress(ProgressUpdate::Poll(0.73));
        state.show_controls();
        assert_eq!(state.progress, 0.73);

        state.close();
        assert!(!state.open);
        assert!(!state.playing);
        assert!(!state.seeking);
        assert!(!state.controls_visible);
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn test_close_preserves_mute_preference() {
        let mut state = PlaybackState::new();
        state.open();
        state.toggle_muted();
        assert!(state.muted);

        state.close();
        assert!(state.muted);

        state.open();
        state.toggle_muted();
        state.close();
        assert!(!state.muted);
    }

    #[test]
    fn test_poll_is_ignored_while_seeking() {
        let mut state = PlaybackState::new();
        state.apply_progress(ProgressUpdate::Poll(0.2));
        assert_eq!(state.progress, 0.2);

        state.begin_seek();
        state.apply_progress(ProgressUpdate::Seek(0.5));
        assert_eq!(state.progress, 0.5);

        // The poll loop keeps firing during the drag but must not win
        state.apply_progress(ProgressUpdate::Poll(0.21));
        assert_eq!(state.progress, 0.5);

        state.end_seek();
        state.apply_progress(ProgressUpdate::Poll(0.52));
        assert_eq!(state.progress, 0.52);
    }

    #[test]
    fn test_seek_is_ignored_when_not_seeking() {
        let mut state = PlaybackState::new();
        state.apply_progress(ProgressUpdate::Poll(0.4));

        // A stray seek write after mouseup must not move the bar
        state.apply_progress(ProgressUpdate::Seek(0.9));
        assert_eq!(state.progress, 0.4);
    }

    #[test]
    fn test_progress_is_clamped_at_the_single_owner() {
        let mut state = PlaybackState::new();
        state.apply_progress(ProgressUpdate::Poll(1.5));
        assert_eq!(state.progress, 1.0);

        state.begin_seek();
        state.apply_progress(ProgressUpdate::Seek(-0.25));
        assert_eq!(state.progress, 0.0);

        state.apply_progress(ProgressUpdate::Seek(f64::NAN));
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn test_play_mute_toggles() {
        let mut state = PlaybackState::new();
        state.toggle_playing();
        assert!(state.playing);
        state.toggle_playing();
        assert!(!state.playing);

        state.toggle_muted();
        assert!(state.muted);
        state.toggle_muted();
        assert!(!state.muted);
    }

    #[test]
    fn test_controls_visibility_transitions() {
        let mut state = PlaybackState::new();
        assert!(!state.controls_visible);

        state.show_controls();
        assert!(state.controls_visible);

        // Movement while visible keeps them visible; only the timer or the
        // pointer leaving hides them
        state.show_controls();
        assert!(state.controls_visible);

        state.hide_controls();
        assert!(!state.controls_visible);
    }

    #[test]
    fn test_seek_ratio_within_bar_bounds() {
        // Bar from x=100 to x=300
        assert_eq!(seek_ratio(200.0, 100.0, 200.0), 0.5);
        assert_eq!(seek_ratio(100.0, 100.0, 200.0), 0.0);
        assert_eq!(seek_ratio(300.0, 100.0, 200.0), 1.0);
    }

    #[test]
    fn test_seek_ratio_clamps_outside_bar_bounds() {
        assert_eq!(seek_ratio(50.0, 100.0, 200.0), 0.0);
        assert_eq!(seek_ratio(400.0, 100.0, 200.0), 1.0);
        // Degenerate bar
        assert_eq!(seek_ratio(150.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn test_seek_position_maps_ratio_to_seconds() {
        assert_eq!(seek_position_secs(0.5, 10.0), 5.0);
        assert_eq!(seek_position_secs(0.0, 10.0), 0.0);
        assert_eq!(seek_position_secs(1.0, 42.0), 42.0);
        // Out-of-range ratios are clamped before scaling
        assert_eq!(seek_position_secs(2.0, 10.0), 10.0);
    }
}
