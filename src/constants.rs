/// Page wiring and lighting constants for the web front-end.
///
/// Kept free of web-sys types so host tests can include this file directly.
// Element ids expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const APP_TITLE_ID: &str = "app-title";
pub const APP_SUBTITLE_ID: &str = "app-subtitle";
pub const CARD_TITLE_ID: &str = "panel-title";
pub const CARD_SUBTITLE_ID: &str = "panel-subtitle";
pub const CARD_BODY_ID: &str = "panel-body";
pub const INFO_TOGGLE_ID: &str = "info-toggle";
pub const INFO_CONTENT_ID: &str = "info-content";
pub const RESET_BUTTON_ID: &str = "reset-view";
pub const MUTE_BUTTON_ID: &str = "mute-toggle";
pub const LABEL_LAYER_ID: &str = "label-layer";

// Tabs carry the mode id in this attribute
pub const MODE_ATTR: &str = "data-mode";
pub const MODE_SELECTOR: &str = "[data-mode]";

pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";
pub const MUTED_CLASS: &str = "muted";

// Cues are served as `<CUE_DIR>/<mode>-takeoff.<CUE_EXT>`
pub const CUE_DIR: &str = "sounds";
pub const CUE_EXT: &str = "mp3";

pub const LABEL_FONT_FAMILY: &str = "TakeoffLabel, system-ui, sans-serif";
pub const FALLBACK_FONT_FAMILY: &str = "system-ui, sans-serif";
// Labels smaller than this are hidden rather than drawn illegibly
pub const MIN_LABEL_PX: f32 = 4.0;

// Lighting
pub const AMBIENT: f32 = 0.25;
pub const LIGHT_DIR: [f32; 3] = [0.4, 0.8, 0.45];

// Mouse buttons as reported by MouseEvent.button
pub const BUTTON_PRIMARY: i16 = 0;
pub const BUTTON_MIDDLE: i16 = 1;
pub const BUTTON_SECONDARY: i16 = 2;

/// Relative URL of the cue file named `cue_name`.
pub fn cue_url(cue_name: &str) -> String {
    format!("{}/{}.{}", CUE_DIR, cue_name, CUE_EXT)
}

/// CSS `rgb()` string for a linear 0..1 triple.
pub fn css_rgb(rgb: [f32; 3]) -> String {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgb({}, {}, {})", c(rgb[0]), c(rgb[1]), c(rgb[2]))
}
