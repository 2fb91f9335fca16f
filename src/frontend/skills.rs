use std::rc::Rc;

use gloo::timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::skills::{Disclosure, DisclosureAction, CONTRACTING_MS};

impl Reducible for Disclosure {
    type Action = DisclosureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillsDisclosureProps {
    pub major: &'static [&'static str],
    pub minor: &'static [&'static str],
}

#[function_component(SkillsDisclosure)]
pub fn skills_disclosure(props: &SkillsDisclosureProps) -> Html {
    let disclosure = use_reducer(Disclosure::default);

    {
        let dispatcher = disclosure.dispatcher();
        use_effect_with(disclosure.contracting_epoch(), move |&epoch| {
            let timer = epoch.map(|epoch| {
                Timeout::new(CONTRACTING_MS, move || {
                    dispatcher.dispatch(DisclosureAction::FinishContracting(epoch));
                })
            });
            move || drop(timer)
        });
    }

    let onclick = {
        let dispatcher = disclosure.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(DisclosureAction::Toggle))
    };

    html! {
        <div class="skills-block" data-aos="fade-up">
            <div class="skills major-skills">
                { for props.major.iter().map(|skill| html! {
                    <div class="skill major-skill">{*skill}</div>
                }) }
            </div>
            <div
                class={classes!("minor-skills-wrapper", disclosure.is_expanded().then_some("expanded"))}
            >
                <div id="minor-skills" class="skills minor-skills">
                    { for props.minor.iter().map(|skill| html! {
                        <div class="skill minor-skill">{*skill}</div>
                    }) }
                </div>
            </div>
            <div
                class={classes!(
                    "show-more-btn-container",
                    disclosure.is_contracting().then_some("contracting")
                )}
            >
                <button
                    class="show-more-btn"
                    type="button"
                    aria-controls="minor-skills"
                    aria-expanded={disclosure.aria_expanded()}
                    {onclick}
                >
                    {disclosure.label()}
                </button>
            </div>
        </div>
    }
}
