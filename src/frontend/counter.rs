use std::{cell::RefCell, rc::Rc};

use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::Element;
use yew::prelude::*;

use super::effects::VisibilityWatch;
use crate::counter::{format_short, CounterAnimation};

const COUNTER_THRESHOLD: f64 = 0.5;

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u64,
    pub label: AttrValue,
}

/// Counts up from zero the first time half of the number is on screen.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let text = use_state(|| format_short(0));

    {
        let node = node.clone();
        let text = text.clone();
        use_effect_with(props.target, move |&target| {
            let frame = FrameSlot::default();
            let watch = node.cast::<Element>().and_then(|element| {
                let frame = frame.clone();
                VisibilityWatch::once([element], COUNTER_THRESHOLD, move |_| {
                    animate(CounterAnimation::new(target), None, text.clone(), frame.clone());
                })
                .map_err(|error| log::warn!("stat counter not observed: {error}"))
                .ok()
            });

            move || {
                drop(watch);
                frame.borrow_mut().take();
            }
        });
    }

    html! {
        <div class="stat" data-aos="fade-up">
            <span class="stat-number" ref={node} data-target={props.target.to_string()}>
                {(*text).clone()}
            </span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}

fn animate(
    animation: CounterAnimation,
    started: Option<f64>,
    text: UseStateHandle<String>,
    frame: FrameSlot,
) {
    let slot = frame.clone();
    let handle = request_animation_frame(move |timestamp| {
        slot.borrow_mut().take();
        let started = started.unwrap_or(timestamp);
        let current = animation.frame(timestamp - started);
        text.set(current.text);
        if !current.finished {
            animate(animation, Some(started), text, slot);
        }
    });
    *frame.borrow_mut() = Some(handle);
}
