use std::rc::Rc;

use gloo::timers::callback::Interval;
use web_sys::{KeyboardEvent, MouseEvent, TouchEvent};
use yew::prelude::*;

use super::dom::is_activation_key;
use crate::carousel::{Carousel, CarouselAction, AUTOPLAY_INTERVAL_MS};
use crate::content::Testimonial;

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

fn first_touch_x(event: &TouchEvent) -> Option<f64> {
    event
        .changed_touches()
        .get(0)
        .map(|touch| f64::from(touch.screen_x()))
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub testimonials: &'static [Testimonial],
    pub on_open: Callback<usize>,
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let count = props.testimonials.len();
    let carousel = use_reducer(move || Carousel::new(count));
    let len = carousel.len();
    let touch_start_x = use_mut_ref(|| 0.0_f64);

    {
        let dispatcher = carousel.dispatcher();
        let clock = *carousel.autoplay();
        let idle = clock.is_paused() || carousel.is_empty();
        use_effect_with((clock.generation(), idle), move |&(_, idle)| {
            let interval = (!idle).then(|| {
                Interval::new(AUTOPLAY_INTERVAL_MS, move || {
                    dispatcher.dispatch(CarouselAction::Elapsed(AUTOPLAY_INTERVAL_MS));
                })
            });
            move || drop(interval)
        });
    }

    if carousel.is_empty() {
        return html! {};
    }

    let step = |delta: i64| {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Step(delta)))
    };

    let onmouseenter = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Pause))
    };

    let onmouseleave = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Resume))
    };

    let ontouchstart = {
        let touch_start_x = touch_start_x.clone();
        Callback::from(move |event: TouchEvent| {
            if let Some(x) = first_touch_x(&event) {
                *touch_start_x.borrow_mut() = x;
            }
        })
    };

    let ontouchend = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |event: TouchEvent| {
            if let Some(end_x) = first_touch_x(&event) {
                let start_x = *touch_start_x.borrow();
                dispatcher.dispatch(CarouselAction::Swipe { start_x, end_x });
            }
        })
    };

    let slides = props
        .testimonials
        .iter()
        .enumerate()
        .map(|(index, testimonial)| {
            let current = carousel.is_current(index);

            let onclick = {
                let on_open = props.on_open.clone();
                Callback::from(move |_: MouseEvent| on_open.emit(index))
            };

            let onkeydown = {
                let on_open = props.on_open.clone();
                Callback::from(move |event: KeyboardEvent| {
                    if is_activation_key(&event) {
                        event.prevent_default();
                        on_open.emit(index);
                    }
                })
            };

            let on_read_more = {
                let on_open = props.on_open.clone();
                Callback::from(move |event: MouseEvent| {
                    event.stop_propagation();
                    on_open.emit(index);
                })
            };

            html! {
                <div
                    key={index}
                    class="slide"
                    data-testimonial-id={index.to_string()}
                    tabindex="0"
                    role="group"
                    aria-roledescription="slide"
                    aria-label={format!("{} of {len}", index + 1)}
                    aria-hidden={if current { "false" } else { "true" }}
                    {onclick}
                    {onkeydown}
                >
                    <blockquote class="testimonial-quote">{testimonial.quote}</blockquote>
                    <button class="read-more-link" type="button" onclick={on_read_more}>
                        {"Read more"}
                    </button>
                    <p class="testimonial-author"><strong>{testimonial.author}</strong></p>
                    <p class="testimonial-title">{testimonial.title}</p>
                </div>
            }
        })
        .collect::<Html>();

    let dots = (0..len)
        .map(|index| {
            let current = carousel.is_current(index);
            let onclick = {
                let dispatcher = carousel.dispatcher();
                Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::GoTo(index)))
            };

            html! {
                <button
                    key={index}
                    class={classes!("carousel-dot", current.then_some("active"))}
                    type="button"
                    role="tab"
                    data-index={index.to_string()}
                    aria-selected={if current { "true" } else { "false" }}
                    aria-label={format!("Show testimonial {}", index + 1)}
                    {onclick}
                />
            }
        })
        .collect::<Html>();

    html! {
        <div class="carousel" {onmouseenter} {onmouseleave}>
            <div class="carousel-track" {ontouchstart} {ontouchend}>
                <div class="slider" style={format!("transform: {};", carousel.strip_transform())}>
                    {slides}
                </div>
            </div>
            <button class="carousel-btn prev" type="button" aria-label="Previous testimonial" onclick={step(-1)}>
                {"‹"}
            </button>
            <button class="carousel-btn next" type="button" aria-label="Next testimonial" onclick={step(1)}>
                {"›"}
            </button>
            <div class="carousel-dots" role="tablist" aria-label="Testimonials">
                {dots}
            </div>
            <p class="sr-only" aria-live="polite">
                {format!("Testimonial {} of {len}", carousel.index() + 1)}
            </p>
        </div>
    }
}
