use crate::constants::*;
use crate::dom;
use takeoff_core::info;
use takeoff_core::instances::PlacedLabel;
use takeoff_core::state::OrbitCamera;
use takeoff_core::{RenderStyle, TakeoffMode};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fill the static copy: titles, about text, tab labels and button captions.
pub fn populate(document: &web::Document) {
    dom::set_text(document, APP_TITLE_ID, info::APP_TITLE);
    dom::set_text(document, APP_SUBTITLE_ID, info::APP_SUBTITLE);
    dom::set_text(document, RESET_BUTTON_ID, info::RESET_LABEL);

    if let Some(content) = document.get_element_by_id(INFO_CONTENT_ID) {
        content.set_text_content(None);
        let mut blocks: Vec<(&str, &str)> = vec![("h3", info::ABOUT_TITLE)];
        blocks.extend(info::ABOUT_PARAGRAPHS.iter().map(|p| ("p", *p)));
        blocks.push(("p", info::DISCLAIMER));
        for (tag, text) in blocks {
            if let Ok(el) = document.create_element(tag) {
                el.set_text_content(Some(text));
                _ = content.append_child(&el);
            }
        }
    }

    for tab in mode_tabs(document) {
        let label = tab
            .get_attribute(MODE_ATTR)
            .and_then(|id| id.parse::<TakeoffMode>().ok())
            .map(info::tab_label);
        if let Some(label) = label {
            tab.set_text_content(Some(label));
        }
    }
}

/// All elements carrying a mode id.
pub fn mode_tabs(document: &web::Document) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(MODE_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Highlight the active tab and show its card.
pub fn show_mode(document: &web::Document, mode: TakeoffMode) {
    for tab in mode_tabs(document) {
        let active = tab.get_attribute(MODE_ATTR).as_deref() == Some(mode.id());
        dom::set_class(&tab, ACTIVE_CLASS, active);
    }
    let card = info::card(mode);
    dom::set_text(document, CARD_TITLE_ID, card.title);
    dom::set_text(document, CARD_SUBTITLE_ID, card.subtitle);
    dom::set_text(document, CARD_BODY_ID, card.body);
}

pub fn show_muted(document: &web::Document, muted: bool) {
    if let Some(el) = document.get_element_by_id(MUTE_BUTTON_ID) {
        dom::set_class(&el, MUTED_CLASS, muted);
        _ = el.set_attribute("title", info::mute_tooltip(muted));
        _ = el.set_attribute("aria-label", info::mute_tooltip(muted));
    }
}

#[inline]
pub fn panel_is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(INFO_CONTENT_ID)
        .map(|el| !el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(false)
}

pub fn set_panel_open(document: &web::Document, open: bool) {
    if let Some(el) = document.get_element_by_id(INFO_CONTENT_ID) {
        dom::set_class(&el, HIDDEN_CLASS, !open);
    }
    dom::set_text(document, INFO_TOGGLE_ID, info::panel_toggle_label(open));
}

#[inline]
pub fn toggle_panel(document: &web::Document) {
    set_panel_open(document, !panel_is_open(document));
}

/// Absolutely positioned text nodes over the canvas, one per placed label.
pub struct LabelLayer {
    document: web::Document,
    root: Option<web::Element>,
    items: Vec<web::HtmlElement>,
}

impl LabelLayer {
    pub fn new(document: &web::Document) -> Self {
        let root = document.get_element_by_id(LABEL_LAYER_ID);
        if root.is_none() {
            log::warn!("[labels] missing #{}; drawing placeholders", LABEL_LAYER_ID);
        }
        Self {
            document: document.clone(),
            root,
            items: Vec::new(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.root.is_some()
    }

    pub fn update(
        &mut self,
        labels: &[PlacedLabel],
        camera: &OrbitCamera,
        style: RenderStyle,
        (width, height): (f32, f32),
    ) {
        let Some(root) = self.root.as_ref() else {
            return;
        };
        while self.items.len() < labels.len() {
            let Some(el) = self
                .document
                .create_element("div")
                .ok()
                .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
            else {
                return;
            };
            _ = el.set_attribute("class", "scene-label");
            _ = root.append_child(&el);
            self.items.push(el);
        }

        let family = match style.label_font() {
            Some(_) => LABEL_FONT_FAMILY,
            None => FALLBACK_FONT_FAMILY,
        };
        for (i, el) in self.items.iter().enumerate() {
            let s = el.style();
            let placed = labels.get(i).and_then(|label| {
                let [x, y] = camera.project(label.position, width, height)?;
                let px = camera.world_to_pixels(label.size, label.position, height);
                (px >= MIN_LABEL_PX).then_some((label, x, y, px))
            });
            let Some((label, x, y, px)) = placed else {
                _ = s.set_property("display", "none");
                continue;
            };
            if el.text_content().as_deref() != Some(label.text) {
                el.set_text_content(Some(label.text));
            }
            _ = s.set_property("display", "block");
            _ = s.set_property("left", &format!("{:.1}px", x));
            _ = s.set_property("top", &format!("{:.1}px", y));
            _ = s.set_property("font-size", &format!("{:.1}px", px));
            _ = s.set_property("font-family", family);
            _ = s.set_property("color", &css_rgb(label.color));
        }
    }
}
