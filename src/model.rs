//! Core data models for the transcript player: the UI-state store,
//! transcript segments, and the playback reducer.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }
}

/// Body class for a theme choice. `System` follows the host's
/// `prefers-color-scheme`, passed in as `system_dark` so this stays pure.
pub fn theme_class(theme: Theme, system_dark: bool) -> &'static str {
    match theme {
        Theme::Light => "theme-light",
        Theme::Dark => "theme-dark",
        Theme::System => {
            if system_dark {
                "theme-dark"
            } else {
                "theme-light"
            }
        }
    }
}

/// Global UI state shared via context: current theme and whether the app
/// is busy loading. No derived state, nothing persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub loading: bool,
}

#[derive(Clone, Copy, Debug)]
pub enum UiAction {
    SetTheme(Theme),
    SetLoading(bool),
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = *self;
        match action {
            UiAction::SetTheme(t) => new.theme = t,
            UiAction::SetLoading(l) => new.loading = l,
        }
        Rc::new(new)
    }
}

/// One transcript line with the playback time it starts at.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: String,
    pub start_secs: f64,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub duration_secs: f64,
    pub segments: Vec<Segment>,
}

/// Parse a transcript document, segments sorted by start time.
pub fn parse_transcript(raw: &str) -> Result<Transcript, serde_json::Error> {
    let mut t: Transcript = serde_json::from_str(raw)?;
    t.segments.sort_by(|a, b| {
        a.start_secs
            .partial_cmp(&b.start_secs)
            .unwrap_or(Ordering::Equal)
    });
    Ok(t)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerState {
    /// Current playback position in seconds; always within [0, duration].
    pub position_secs: f64,
    pub duration_secs: f64,
    pub playing: bool,
    pub segments: Vec<Segment>,
}

impl PlayerState {
    /// Index of the segment the position currently falls in: the last
    /// segment whose start is at or before the position.
    pub fn active_segment_index(&self) -> Option<usize> {
        let mut active = None;
        for (i, seg) in self.segments.iter().enumerate() {
            if seg.start_secs <= self.position_secs {
                active = Some(i);
            } else {
                break;
            }
        }
        active
    }
}

#[derive(Clone, Debug)]
pub enum PlayerAction {
    SetTranscript { transcript: Transcript },
    TogglePlay,
    Tick { dt: f64 },
    SeekTo { secs: f64 },
}

impl Reducible for PlayerState {
    type Action = PlayerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use PlayerAction::*;
        let mut new = (*self).clone();
        match action {
            SetTranscript { transcript } => {
                new.duration_secs = if transcript.duration_secs.is_finite() {
                    transcript.duration_secs.max(0.0)
                } else {
                    0.0
                };
                new.segments = transcript.segments;
                new.position_secs = 0.0;
                new.playing = false;
            }
            TogglePlay => {
                // Nothing to play until a transcript is loaded.
                if !new.playing && new.duration_secs <= 0.0 {
                    return self;
                }
                new.playing = !new.playing;
            }
            Tick { dt } => {
                if !new.playing || !dt.is_finite() || dt <= 0.0 {
                    return self;
                }
                new.position_secs = (new.position_secs + dt).min(new.duration_secs);
                if new.position_secs >= new.duration_secs {
                    new.playing = false;
                }
            }
            SeekTo { secs } => {
                if !secs.is_finite() {
                    return self;
                }
                new.position_secs = secs.clamp(0.0, new.duration_secs);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch<S: Reducible>(state: S, action: S::Action) -> Rc<S> {
        Rc::new(state).reduce(action)
    }

    fn transcript() -> Transcript {
        Transcript {
            duration_secs: 120.0,
            segments: vec![
                Segment {
                    id: "s1".into(),
                    start_secs: 0.0,
                    text: "First line".into(),
                },
                Segment {
                    id: "s2".into(),
                    start_secs: 40.0,
                    text: "Second line".into(),
                },
                Segment {
                    id: "s3".into(),
                    start_secs: 90.0,
                    text: "Third line".into(),
                },
            ],
        }
    }

    fn loaded_player() -> PlayerState {
        let state = dispatch(
            PlayerState::default(),
            PlayerAction::SetTranscript {
                transcript: transcript(),
            },
        );
        (*state).clone()
    }

    #[test]
    fn ui_store_sets_theme() {
        let state = dispatch(UiState::default(), UiAction::SetTheme(Theme::Dark));
        assert_eq!(state.theme, Theme::Dark);
        assert!(!state.loading);
    }

    #[test]
    fn ui_store_sets_loading() {
        let state = dispatch(UiState::default(), UiAction::SetLoading(true));
        assert!(state.loading);
        let state = dispatch(*state, UiAction::SetLoading(false));
        assert!(!state.loading);
    }

    #[test]
    fn theme_class_resolution() {
        assert_eq!(theme_class(Theme::Light, true), "theme-light");
        assert_eq!(theme_class(Theme::Dark, false), "theme-dark");
        assert_eq!(theme_class(Theme::System, true), "theme-dark");
        assert_eq!(theme_class(Theme::System, false), "theme-light");
    }

    #[test]
    fn parse_transcript_sorts_segments() {
        let raw = r#"{
            "duration_secs": 30.0,
            "segments": [
                { "id": "b", "start_secs": 12.5, "text": "later" },
                { "id": "a", "start_secs": 2.0, "text": "earlier" }
            ]
        }"#;
        let t = parse_transcript(raw).expect("valid transcript");
        assert_eq!(t.duration_secs, 30.0);
        assert_eq!(t.segments[0].id, "a");
        assert_eq!(t.segments[1].id, "b");
    }

    #[test]
    fn parse_transcript_rejects_malformed_input() {
        assert!(parse_transcript("not json").is_err());
        assert!(parse_transcript(r#"{ "segments": [] }"#).is_err());
    }

    #[test]
    fn set_transcript_resets_playback() {
        let playing = PlayerState {
            position_secs: 55.0,
            playing: true,
            ..loaded_player()
        };
        let state = dispatch(
            playing,
            PlayerAction::SetTranscript {
                transcript: transcript(),
            },
        );
        assert_eq!(state.position_secs, 0.0);
        assert!(!state.playing);
        assert_eq!(state.segments.len(), 3);
    }

    #[test]
    fn toggle_play_requires_a_transcript() {
        let state = dispatch(PlayerState::default(), PlayerAction::TogglePlay);
        assert!(!state.playing);
        let state = dispatch(loaded_player(), PlayerAction::TogglePlay);
        assert!(state.playing);
    }

    #[test]
    fn tick_is_a_no_op_while_paused() {
        let state = dispatch(loaded_player(), PlayerAction::Tick { dt: 1.0 });
        assert_eq!(state.position_secs, 0.0);
    }

    #[test]
    fn tick_advances_and_stops_at_duration() {
        let mut player = loaded_player();
        player.playing = true;
        player.position_secs = 119.5;
        let state = dispatch(player, PlayerAction::Tick { dt: 2.0 });
        assert_eq!(state.position_secs, 120.0);
        assert!(!state.playing);
    }

    #[test]
    fn tick_ignores_bad_deltas() {
        let mut player = loaded_player();
        player.playing = true;
        player.position_secs = 10.0;
        let state = dispatch(player.clone(), PlayerAction::Tick { dt: -1.0 });
        assert_eq!(state.position_secs, 10.0);
        let state = dispatch(player, PlayerAction::Tick { dt: f64::NAN });
        assert_eq!(state.position_secs, 10.0);
    }

    #[test]
    fn seek_clamps_into_range() {
        let state = dispatch(loaded_player(), PlayerAction::SeekTo { secs: -5.0 });
        assert_eq!(state.position_secs, 0.0);
        let state = dispatch(loaded_player(), PlayerAction::SeekTo { secs: 500.0 });
        assert_eq!(state.position_secs, 120.0);
        let state = dispatch(loaded_player(), PlayerAction::SeekTo { secs: 42.0 });
        assert_eq!(state.position_secs, 42.0);
    }

    #[test]
    fn seek_ignores_non_finite_targets() {
        let mut player = loaded_player();
        player.position_secs = 33.0;
        let state = dispatch(player, PlayerAction::SeekTo { secs: f64::NAN });
        assert_eq!(state.position_secs, 33.0);
    }

    #[test]
    fn active_segment_tracks_position() {
        let mut player = loaded_player();
        assert_eq!(player.active_segment_index(), Some(0));
        player.position_secs = 39.9;
        assert_eq!(player.active_segment_index(), Some(0));
        player.position_secs = 40.0;
        assert_eq!(player.active_segment_index(), Some(1));
        player.position_secs = 120.0;
        assert_eq!(player.active_segment_index(), Some(2));
    }

    #[test]
    fn active_segment_edge_cases() {
        let empty = PlayerState::default();
        assert_eq!(empty.active_segment_index(), None);

        let mut player = loaded_player();
        player.segments[0].start_secs = 5.0;
        player.position_secs = 2.0;
        assert_eq!(player.active_segment_index(), None);
    }
}
