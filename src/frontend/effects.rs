//! Page-wide behaviors wired once the page has rendered: scroll reveals,
//! parallax, magnetic buttons and smooth in-page anchors.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use super::dom::{
    self, prefers_reduced_motion, query_all, query_one, set_transform, viewport_height, DomError,
};
use crate::motion::{
    header_parallax, magnetic_offset, parallax_offset, reveal_delay_ms, translate, translate_y,
    LatestFrame, FLOAT_PARALLAX_FACTOR,
};

const REVEAL_SELECTOR: &str = "[data-aos]";
const REVEAL_DELAY_ATTR: &str = "data-aos-delay";
const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEALED_CLASS: &str = "aos-animate";

type FrameSlot = Rc<RefCell<LatestFrame<AnimationFrame>>>;

/// Calls `on_visible` the first time each target crosses `threshold`, then
/// stops watching that target.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityWatch {
    pub fn once<I, F>(targets: I, threshold: f64, mut on_visible: F) -> Result<Self, DomError>
    where
        I: IntoIterator<Item = Element>,
        F: FnMut(Element) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        for target in targets {
            observer.observe(&target);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn reveal_on_scroll(document: &Document) -> Result<VisibilityWatch, DomError> {
    let targets = query_all(document, REVEAL_SELECTOR)?;
    let count = targets.len();

    let watch = VisibilityWatch::once(
        targets.into_iter().map(Element::from),
        REVEAL_THRESHOLD,
        |element| {
            let delay = reveal_delay_ms(element.get_attribute(REVEAL_DELAY_ATTR).as_deref());
            if delay == 0 {
                let _ = element.class_list().add_1(REVEALED_CLASS);
                return;
            }
            Timeout::new(delay, move || {
                let _ = element.class_list().add_1(REVEALED_CLASS);
            })
            .forget();
        },
    )?;

    log::debug!("reveal scheduler observing {count} elements");
    Ok(watch)
}

pub struct ParallaxDriver {
    _scroll: EventListener,
    _frame: FrameSlot,
}

impl ParallaxDriver {
    pub fn install(window: &Window, document: &Document) -> Result<Option<Self>, DomError> {
        if prefers_reduced_motion() {
            log::debug!("reduced motion requested, parallax disabled");
            return Ok(None);
        }

        let floating = query_one(document, ".parallax-element");
        let headers = Rc::new(query_all(document, ".parallax-header")?);
        let frame = FrameSlot::default();
        let ticking = Rc::new(Cell::new(false));

        let scroll = {
            let frame = frame.clone();
            EventListener::new(window, "scroll", move |_| {
                if ticking.replace(true) {
                    return;
                }
                let ticking = ticking.clone();
                let floating = floating.clone();
                let headers = headers.clone();
                let handle = request_animation_frame(move |_| {
                    ticking.set(false);
                    update_parallax(floating.as_ref(), &headers);
                });
                frame.borrow_mut().schedule(handle);
            })
        };

        Ok(Some(Self {
            _scroll: scroll,
            _frame: frame,
        }))
    }
}

fn update_parallax(floating: Option<&HtmlElement>, headers: &[HtmlElement]) {
    let viewport = viewport_height();

    if let Some(element) = floating {
        let rect = element.get_bounding_client_rect();
        let offset = parallax_offset(rect.top(), rect.height(), viewport, FLOAT_PARALLAX_FACTOR);
        set_transform(element, &translate_y(offset));
    }

    for header in headers {
        let revealed = header.class_list().contains(REVEALED_CLASS);
        let rect = header.get_bounding_client_rect();
        if let Some(offset) = header_parallax(revealed, rect.top(), rect.height(), viewport) {
            set_transform(header, &translate_y(offset));
        }
    }
}

pub struct MagneticButtons {
    _listeners: Vec<EventListener>,
}

impl MagneticButtons {
    pub fn install(document: &Document) -> Result<Option<Self>, DomError> {
        if prefers_reduced_motion() {
            return Ok(None);
        }

        let mut listeners = Vec::new();
        for button in query_all(document, ".magnetic-btn")? {
            let pending = FrameSlot::default();

            let on_move = {
                let pending = pending.clone();
                let target = button.clone();
                EventListener::new(&button, "mousemove", move |event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let pointer_x = f64::from(event.client_x());
                    let pointer_y = f64::from(event.client_y());
                    let target = target.clone();
                    let frame = request_animation_frame(move |_| {
                        let rect = target.get_bounding_client_rect();
                        let (dx, dy) = magnetic_offset(
                            pointer_x,
                            pointer_y,
                            rect.left(),
                            rect.top(),
                            rect.width(),
                            rect.height(),
                        );
                        set_transform(&target, &translate(dx, dy));
                    });
                    // The superseded frame is cancelled as it drops.
                    drop(pending.borrow_mut().schedule(frame));
                })
            };

            let on_leave = {
                let target = button.clone();
                EventListener::new(&button, "mouseleave", move |_| {
                    drop(pending.borrow_mut().cancel());
                    set_transform(&target, "");
                })
            };

            listeners.push(on_move);
            listeners.push(on_leave);
        }

        log::debug!("magnetic effect on {} buttons", listeners.len() / 2);
        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}

pub struct SmoothScroll {
    _listeners: Vec<EventListener>,
}

impl SmoothScroll {
    pub fn install(document: &Document) -> Result<Self, DomError> {
        let listeners = query_all(document, "a[href^=\"#\"]")?
            .into_iter()
            .map(|anchor| {
                let document = document.clone();
                let link = anchor.clone();
                EventListener::new_with_options(
                    &anchor,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        let Some(href) = link.get_attribute("href") else {
                            return;
                        };
                        // A bare "#" is not a valid selector; the browser handles it.
                        let Some(target) = document.query_selector(&href).ok().flatten() else {
                            return;
                        };
                        event.prevent_default();
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Start);
                        target.scroll_into_view_with_scroll_into_view_options(&options);
                    },
                )
            })
            .collect();

        Ok(Self {
            _listeners: listeners,
        })
    }
}

/// Everything wired at load; dropping it detaches all listeners.
#[derive(Default)]
pub struct PageEffects {
    _reveal: Option<VisibilityWatch>,
    _parallax: Option<ParallaxDriver>,
    _magnetic: Option<MagneticButtons>,
    _anchors: Option<SmoothScroll>,
}

impl PageEffects {
    pub fn install() -> Self {
        let page = dom::window().and_then(|window| Ok((dom::document()?, window)));
        let (document, window) = match page {
            Ok(page) => page,
            Err(error) => {
                log::warn!("page effects not installed: {error}");
                return Self::default();
            }
        };

        Self {
            _reveal: installed("reveal scheduler", reveal_on_scroll(&document)),
            _parallax: installed("parallax", ParallaxDriver::install(&window, &document)).flatten(),
            _magnetic: installed("magnetic buttons", MagneticButtons::install(&document)).flatten(),
            _anchors: installed("smooth scroll", SmoothScroll::install(&document)),
        }
    }
}

fn installed<T>(name: &str, result: Result<T, DomError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            log::warn!("{name} not installed: {error}");
            None
        }
    }
}
