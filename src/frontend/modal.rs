use std::rc::Rc;

use gloo::timers::callback::Timeout;
use js_sys::Object;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use super::dom::focus_first_control;
use crate::modal::{ModalAction, ModalMachine, ModalPhase, CLOSE_DURATION_MS, FOCUS_DELAY_MS, SHOW_DELAY_MS};

impl Reducible for ModalMachine {
    type Action = ModalAction;

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
pub struct ModalShellProps {
    pub id: AttrValue,
    pub labelled_by: AttrValue,
    pub close_id: AttrValue,
    pub machine: ModalMachine,
    pub on_action: Callback<ModalAction>,
    #[prop_or_default]
    pub children: Html,
}

/// Backdrop, content frame and close control shared by both content modals.
///
/// Each transition schedules its own timers; a newer transition drops the
/// older timers before they fire.
#[function_component(ModalShell)]
pub fn modal_shell(props: &ModalShellProps) -> Html {
    let node = use_node_ref();
    let machine = props.machine;

    {
        let node = node.clone();
        let on_action = props.on_action.clone();
        let phase = machine.phase();
        use_effect_with(machine.epoch(), move |&epoch| {
            let mut timers = Vec::new();
            match phase {
                ModalPhase::Opening => {
                    let settle = on_action.clone();
                    timers.push(Timeout::new(SHOW_DELAY_MS, move || {
                        settle.emit(ModalAction::Settle(epoch));
                    }));
                    timers.push(Timeout::new(FOCUS_DELAY_MS, move || {
                        if let Some(root) = node.cast::<Element>() {
                            focus_first_control(&root);
                        }
                    }));
                }
                ModalPhase::Closing => {
                    timers.push(Timeout::new(CLOSE_DURATION_MS, move || {
                        on_action.emit(ModalAction::Settle(epoch));
                    }));
                }
                ModalPhase::Closed | ModalPhase::Open => {}
            }
            move || drop(timers)
        });
    }

    let onbackdrop = {
        let node = node.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |event: MouseEvent| {
            let on_backdrop = match (event.target(), node.get()) {
                (Some(target), Some(modal)) => Object::is(&target, &modal),
                _ => false,
            };
            if on_backdrop {
                on_action.emit(ModalAction::Close);
            }
        })
    };

    let onclose = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(ModalAction::Close))
    };

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!("modal", machine.is_shown().then_some("show"))}
            style={if machine.is_displayed() { "display: block;" } else { "display: none;" }}
            role="dialog"
            aria-modal="true"
            aria-labelledby={props.labelled_by.clone()}
            aria-hidden={machine.is_hidden_from_assistive_tech().then_some(AttrValue::from("true"))}
            onclick={onbackdrop}
        >
            <div class={classes!("modal-content", machine.is_closing().then_some("closing"))}>
                <button
                    id={props.close_id.clone()}
                    class="modal-close-btn"
                    type="button"
                    aria-label="Close dialog"
                    onclick={onclose}
                >
                    {"×"}
                </button>
                {props.children.clone()}
            </div>
        </div>
    }
}
