use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Storage, Window};

const FOCUSABLE_SELECTOR: &str = "button, [href], input, select, textarea";

#[derive(Debug, Error)]
pub enum DomError {
    #[error("missing {0}")]
    MissingElement(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::MissingElement("window"))
}

pub fn document() -> Result<Document, DomError> {
    window()?
        .document()
        .ok_or(DomError::MissingElement("document"))
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, DomError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn query_one(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub fn local_storage() -> Option<Storage> {
    window().ok()?.local_storage().ok().flatten()
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .ok()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn viewport_height() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0)
}

pub fn set_transform(element: &HtmlElement, value: &str) {
    let style = element.style();
    if value.is_empty() {
        let _ = style.remove_property("transform");
    } else {
        let _ = style.set_property("transform", value);
    }
}

pub fn set_scroll_locked(locked: bool) {
    let Some(body) = document().ok().and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}

pub fn focus_first_control(root: &Element) {
    let focusable = root
        .query_selector(FOCUSABLE_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());

    if let Some(element) = focusable {
        let _ = element.focus();
    }
}

/// Enter and Space activate focusable cards and slides.
pub fn is_activation_key(event: &KeyboardEvent) -> bool {
    matches!(event.key().as_str(), "Enter" | " ")
}
