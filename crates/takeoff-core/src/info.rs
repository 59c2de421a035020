//! Static copy for the informational panel, tab cards and controls.

use crate::mode::TakeoffMode;

pub const APP_TITLE: &str = "AI Takeoff Visualization";
pub const APP_SUBTITLE: &str =
    "Visualizing different intelligence explosion scenarios from a seed AI";

pub const ABOUT_TITLE: &str = "About This Visualization";
pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "This 3D model demonstrates different theoretical patterns of AI capability growth from a seed AI. \
     The visualization shows how intelligence might develop over time according to different takeoff scenarios.",
    "The concept of AI takeoff refers to the hypothetical future event where an artificial intelligence system \
     rapidly improves its capabilities, potentially leading to artificial general intelligence (AGI) or superintelligence.",
    "Each node in the visualization represents a generation of AI improvement, with the size and color indicating \
     the level of capability. The connections between nodes show the development path.",
];
pub const DISCLAIMER: &str =
    "Note: This is a conceptual visualization and not a precise prediction of how AI development will unfold.";

pub const RESET_LABEL: &str = "Reset View";

/// Card shown under the tab strip for the selected mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelCard {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: &'static str,
}

pub fn card(mode: TakeoffMode) -> PanelCard {
    match mode {
        TakeoffMode::Slow => PanelCard {
            title: mode.title(),
            subtitle: "Gradual improvement over decades",
            body: "In a slow takeoff scenario, AI capabilities improve gradually over many years or decades. \
                   Progress is visible but incremental, giving society time to adapt to each advancement.",
        },
        TakeoffMode::Moderate => PanelCard {
            title: mode.title(),
            subtitle: "Significant progress over years",
            body: "A moderate takeoff involves more rapid advancement than a slow takeoff, with significant \
                   capabilities emerging over a period of years rather than decades, but still allowing some \
                   time for adaptation.",
        },
        TakeoffMode::Fast => PanelCard {
            title: mode.title(),
            subtitle: "Rapid intelligence explosion",
            body: "In a fast takeoff scenario, once a seed AI reaches a certain threshold, it rapidly \
                   self-improves in a matter of days or weeks, potentially leading to superintelligence \
                   before human intervention is possible.",
        },
    }
}

pub fn tab_label(mode: TakeoffMode) -> &'static str {
    match mode {
        TakeoffMode::Slow => "Slow",
        TakeoffMode::Moderate => "Moderate",
        TakeoffMode::Fast => "Fast",
    }
}

pub fn mute_tooltip(muted: bool) -> &'static str {
    if muted {
        "Unmute sounds"
    } else {
        "Mute sounds"
    }
}

pub fn panel_toggle_label(open: bool) -> &'static str {
    if open {
        "Hide"
    } else {
        "Show"
    }
}
