// Host-side tests for the web front-end constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use takeoff_core::TakeoffMode;

#[test]
fn cue_urls_point_into_the_sounds_folder() {
    assert_eq!(cue_url(&TakeoffMode::Fast.cue_name()), "sounds/fast-takeoff.mp3");
    assert_eq!(cue_url("slow-takeoff"), "sounds/slow-takeoff.mp3");
}

#[test]
fn css_colors_are_clamped_bytes() {
    assert_eq!(css_rgb([1.0, 1.0, 1.0]), "rgb(255, 255, 255)");
    assert_eq!(css_rgb([0.0, 0.5, 2.0]), "rgb(0, 128, 255)");
    assert_eq!(css_rgb([-1.0, 0.0, 0.0]), "rgb(0, 0, 0)");
}

#[test]
fn mode_selector_matches_the_attribute() {
    assert_eq!(MODE_SELECTOR, format!("[{}]", MODE_ATTR));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lighting_and_label_limits_are_sane() {
    assert!(AMBIENT > 0.0 && AMBIENT < 1.0);
    assert!(LIGHT_DIR.iter().any(|c| *c != 0.0));
    assert!(MIN_LABEL_PX > 0.0);
    assert_ne!(BUTTON_PRIMARY, BUTTON_SECONDARY);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        APP_TITLE_ID,
        APP_SUBTITLE_ID,
        CARD_TITLE_ID,
        CARD_SUBTITLE_ID,
        CARD_BODY_ID,
        INFO_TOGGLE_ID,
        INFO_CONTENT_ID,
        RESET_BUTTON_ID,
        MUTE_BUTTON_ID,
        LABEL_LAYER_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(ids[i + 1..].iter().all(|b| a != b), "duplicate id {a}");
    }
}
