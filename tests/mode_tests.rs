// Host-side tests for mode ids, titles and panel copy.

use takeoff_core::info;
use takeoff_core::{ModeError, TakeoffMode};

#[test]
fn ids_parse_back_to_their_mode() {
    for mode in TakeoffMode::ALL {
        assert_eq!(mode.id().parse::<TakeoffMode>(), Ok(mode));
        assert_eq!(mode.to_string(), mode.id());
    }
    assert_eq!("FAST".parse::<TakeoffMode>(), Ok(TakeoffMode::Fast));
}

#[test]
fn unknown_ids_are_rejected() {
    for bad in ["", "warp", "slowest", "1"] {
        assert_eq!(
            bad.parse::<TakeoffMode>(),
            Err(ModeError::InvalidMode(bad.to_string()))
        );
    }
    let msg = ModeError::InvalidMode("warp".into()).to_string();
    assert!(msg.contains("warp"));
}

#[test]
fn cue_names_follow_the_mode_id() {
    assert_eq!(TakeoffMode::Slow.cue_name(), "slow-takeoff");
    assert_eq!(TakeoffMode::Moderate.cue_name(), "moderate-takeoff");
    assert_eq!(TakeoffMode::Fast.cue_name(), "fast-takeoff");
}

#[test]
fn default_mode_is_slow() {
    assert_eq!(TakeoffMode::default(), TakeoffMode::Slow);
    assert_eq!(TakeoffMode::ALL[0], TakeoffMode::default());
}

#[test]
fn cards_match_their_mode() {
    for mode in TakeoffMode::ALL {
        let card = info::card(mode);
        assert_eq!(card.title, mode.title());
        assert!(!card.subtitle.is_empty());
        assert!(card.body.to_lowercase().contains(mode.id()));
        assert!(mode.title().starts_with(info::tab_label(mode)));
    }
}

#[test]
fn control_captions() {
    assert_eq!(info::mute_tooltip(false), "Mute sounds");
    assert_eq!(info::mute_tooltip(true), "Unmute sounds");
    assert_eq!(info::panel_toggle_label(true), "Hide");
    assert_eq!(info::panel_toggle_label(false), "Show");
    assert_eq!(info::RESET_LABEL, "Reset View");
    assert_eq!(info::ABOUT_PARAGRAPHS.len(), 3);
}
