//! Draw Page Elements
//!
//! Handles to the server-rendered elements of the drawing result page.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, HtmlElement, HtmlImageElement, HtmlMediaElement};

use crate::models::{GiftDrawnFlag, GiftId};
use crate::reveal::{Display, RevealConfig, Visibility};

pub const GIFT_CONTAINER_ID: &str = "gift-container";
pub const ANIMATION_ID: &str = "my-animation";
pub const AWARD_TABLE_ID: &str = "award-table";

pub const GIFT_DRAWN_ATTR: &str = "data-gift-drawn";
pub const GIFT_ID_ATTR: &str = "data-gift-id";
pub const REVEAL_DELAY_ATTR: &str = "data-reveal-delay-ms";

/// Values the page hands over on the gift container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageData {
    /// Only the winners fetch needs it; the reveal runs without it
    pub gift_id: Result<GiftId, String>,
    pub drawn: GiftDrawnFlag,
    pub config: RevealConfig,
}

impl PageData {
    pub fn from_attributes(gift_id: Option<&str>, drawn: Option<&str>, delay_ms: Option<&str>) -> Self {
        let gift_id = gift_id
            .ok_or_else(|| format!("#{} has no {}", GIFT_CONTAINER_ID, GIFT_ID_ATTR))
            .and_then(GiftId::parse);
        let config = RevealConfig::from_attribute(delay_ms).unwrap_or_else(|e| {
            web_sys::console::warn_1(&format!("[Reveal] {}, using default delay", e).into());
            RevealConfig::default()
        });
        Self {
            gift_id,
            drawn: GiftDrawnFlag::from_attribute(drawn),
            config,
        }
    }
}

#[derive(Clone)]
pub struct DrawPage {
    gift_container: HtmlElement,
    animation: Option<HtmlElement>,
    award_table: HtmlElement,
}

fn html_element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

impl DrawPage {
    /// `Ok(None)` when this is not a drawing result page
    pub fn find(document: &Document) -> Result<Option<Self>, String> {
        let Some(gift_container) = html_element_by_id(document, GIFT_CONTAINER_ID) else {
            return Ok(None);
        };
        let award_table = html_element_by_id(document, AWARD_TABLE_ID)
            .ok_or_else(|| format!("#{} not found", AWARD_TABLE_ID))?;
        let animation = html_element_by_id(document, ANIMATION_ID);
        Ok(Some(Self {
            gift_container,
            animation,
            award_table,
        }))
    }

    pub fn read_data(&self) -> PageData {
        let el = &self.gift_container;
        PageData::from_attributes(
            el.get_attribute(GIFT_ID_ATTR).as_deref(),
            el.get_attribute(GIFT_DRAWN_ATTR).as_deref(),
            el.get_attribute(REVEAL_DELAY_ATTR).as_deref(),
        )
    }

    /// Replace the award table's contents with server markup
    pub fn set_award_table_html(&self, html: &str, revision: u32) {
        self.award_table.set_inner_html(html);
        if let Err(e) = self.award_table.set_attribute("data-revision", &revision.to_string()) {
            web_sys::console::error_1(&e);
        }
    }

    /// Attach one click listener to the award table. The table element itself
    /// is never replaced, so this serves every fragment it will ever hold.
    pub fn on_award_table_click(&self, mut f: impl FnMut(web_sys::MouseEvent, &Element) + 'static) {
        let table: Element = self.award_table.clone().into();
        let handler = Closure::wrap(Box::new(move |ev: web_sys::MouseEvent| {
            f(ev, &table);
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        if let Err(e) = self
            .award_table
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        {
            web_sys::console::error_1(&e);
        }
        handler.forget();
    }

    pub fn apply(&self, visibility: Visibility) {
        if let Some(animation) = &self.animation {
            set_display(animation, visibility.animation);
        }
        set_display(&self.gift_container, visibility.gift_container);
        set_display(&self.award_table, visibility.award_table);
    }

    /// Calls `on_finished` once the reveal animation is over.
    ///
    /// A `<video>` reports the end itself. Anything else (the GIF) is given
    /// `delay_ms` of playback after it has loaded.
    pub fn watch_animation(&self, delay_ms: u32, on_finished: impl FnOnce() + 'static) {
        let Some(animation) = &self.animation else {
            web_sys::console::warn_1(&format!("[Reveal] #{} not found, revealing now", ANIMATION_ID).into());
            on_finished();
            return;
        };

        if let Some(media) = animation.dyn_ref::<HtmlMediaElement>() {
            if media.ended() {
                on_finished();
            } else {
                add_once_listener(animation, "ended", move || {
                    web_sys::console::log_1(&"[Reveal] Animation ended".into());
                    on_finished();
                });
            }
            return;
        }

        let play = move || {
            web_sys::console::log_1(&"[Reveal] Animation loaded".into());
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                web_sys::console::log_1(&"[Reveal] Animation completed".into());
                on_finished();
            });
        };

        let already_loaded = animation
            .dyn_ref::<HtmlImageElement>()
            .map(|img| img.complete())
            .unwrap_or(false);
        if already_loaded {
            play();
        } else {
            add_once_listener(animation, "load", play);
        }
    }
}

fn set_display(el: &HtmlElement, display: Display) {
    let style = el.style();
    let result = match display.css_value() {
        Some(value) => style.set_property("display", value),
        None => style.remove_property("display").map(|_| ()),
    };
    if let Err(e) = result {
        web_sys::console::error_1(&e);
    }
}

fn add_once_listener(el: &HtmlElement, event: &str, f: impl FnOnce() + 'static) {
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(move |_event: web_sys::Event| f());
    if let Err(e) = el.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &options,
    ) {
        web_sys::console::error_1(&e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_data_without_gift_id_keeps_reveal_inputs() {
        let data = PageData::from_attributes(None, Some("1"), None);
        assert!(data.gift_id.is_err());
        assert!(!data.drawn.pending_reveal);
        assert_eq!(data.config, RevealConfig::default());

        let pending = PageData::from_attributes(Some(""), Some("0"), Some("1200"));
        assert!(pending.gift_id.is_err());
        assert!(pending.drawn.pending_reveal);
        assert_eq!(pending.config.delay_ms, 1200);
    }

    #[test]
    fn test_page_data_with_gift_id() {
        let data = PageData::from_attributes(Some("G1"), Some("0"), None);
        assert_eq!(data.gift_id, GiftId::parse("G1"));
        assert!(data.drawn.pending_reveal);
    }
}
