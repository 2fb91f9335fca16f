mod carousel;
mod counter;
mod dom;
mod effects;
mod modal;
mod projects;
mod skills;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use self::carousel::TestimonialCarousel;
use self::counter::StatCounter;
use self::dom::{document, local_storage};
use self::effects::PageEffects;
use self::modal::ModalShell;
use self::projects::{ProjectDetails, ProjectGallery};
use self::skills::SkillsDisclosure;
use crate::content::{self, Project, Testimonial, MAJOR_SKILLS, MINOR_SKILLS, STATS};
use crate::modal::{ModalAction, ModalMachine, ScrollLock};
use crate::theme::{Theme, THEME_KEY};

const LOADER_DELAY_MS: u32 = 700;
const DARK_MODE_CLASS: &str = "dark-mode";

fn read_stored_theme() -> Theme {
    let stored = local_storage().and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

fn apply_theme(theme: Theme) {
    if let Some(body) = document().ok().and_then(|d| d.body()) {
        let class_list = body.class_list();
        if theme.is_dark() {
            let _ = class_list.add_1(DARK_MODE_CLASS);
        } else {
            let _ = class_list.remove_1(DARK_MODE_CLASS);
        }
    }
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

fn modal_callback(modal: &UseReducerHandle<ModalMachine>) -> Callback<ModalAction> {
    let dispatcher = modal.dispatcher();
    Callback::from(move |action| dispatcher.dispatch(action))
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(read_stored_theme);
    let loader_hidden = use_state(|| false);
    let testimonial_modal = use_reducer(ModalMachine::default);
    let project_modal = use_reducer(ModalMachine::default);
    let selected_testimonial = use_state(|| None::<&'static Testimonial>);
    let selected_project = use_state(|| None::<&'static Project>);

    use_effect_with(*theme, |&theme| {
        apply_theme(theme);
        || ()
    });

    {
        let loader_hidden = loader_hidden.clone();
        use_effect_with((), move |_| {
            let effects = PageEffects::install();
            let loader = Timeout::new(LOADER_DELAY_MS, move || loader_hidden.set(true));
            move || {
                drop(loader);
                drop(effects);
            }
        });
    }

    {
        let testimonial = testimonial_modal.dispatcher();
        let project = project_modal.dispatcher();
        use_effect_with((), move |_| {
            let listener = dom::window().ok().map(|window| {
                EventListener::new(&window, "keydown", move |event| {
                    let escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .map_or(false, |event| event.key() == "Escape");
                    if escape {
                        project.dispatch(ModalAction::Escape);
                        testimonial.dispatch(ModalAction::Escape);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let scroll_locked = ScrollLock::from_holders([
        testimonial_modal.holds_scroll_lock(),
        project_modal.holds_scroll_lock(),
    ])
    .is_locked();
    use_effect_with(scroll_locked, |&locked| {
        dom::set_scroll_locked(locked);
        || ()
    });

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).toggled();
            persist_theme(next);
            theme.set(next);
        })
    };

    let on_open_testimonial = {
        let selected = selected_testimonial.clone();
        let modal = testimonial_modal.dispatcher();
        Callback::from(move |index: usize| match content::testimonial(index) {
            Some(testimonial) => {
                selected.set(Some(testimonial));
                modal.dispatch(ModalAction::Open);
            }
            None => log::debug!("no testimonial at index {index}"),
        })
    };

    let on_open_project = {
        let selected = selected_project.clone();
        let modal = project_modal.dispatcher();
        Callback::from(move |id: u32| match content::project(id) {
            Some(project) => {
                selected.set(Some(project));
                modal.dispatch(ModalAction::Open);
            }
            None => log::debug!("no project with id {id}"),
        })
    };

    let testimonial_body = match *selected_testimonial {
        Some(testimonial) => html! {
            <>
                <p id="modal-text">{testimonial.quote}</p>
                <div id="modal-author-info">
                    <p><strong>{testimonial.author}</strong></p>
                    <p>{testimonial.title}</p>
                    <p>{testimonial.date}</p>
                </div>
            </>
        },
        None => html! {
            <>
                <p id="modal-text"></p>
                <div id="modal-author-info"></div>
            </>
        },
    };

    html! {
        <>
            <div class={classes!("loader", (*loader_hidden).then_some("hidden"))} aria-hidden="true">
                <div class="loader-ring"></div>
            </div>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <header class="site-header">
                <a class="brand" href="#home">{"Dawood"}</a>
                <nav aria-label="Primary">
                    <ul class="nav-links">
                        <li><a href="#about">{"About"}</a></li>
                        <li><a href="#skills">{"Skills"}</a></li>
                        <li><a href="#testimonials">{"Testimonials"}</a></li>
                        <li><a href="#projects">{"Projects"}</a></li>
                    </ul>
                </nav>
                <button
                    id="mode-toggle"
                    class="theme-toggle"
                    type="button"
                    aria-label={(*theme).toggle_label()}
                    aria-pressed={(*theme).is_dark().to_string()}
                    onclick={on_toggle_theme}
                >
                    <i id="mode-icon" class={classes!("fas", (*theme).icon_class())} aria-hidden="true"></i>
                </button>
            </header>

            <main id="content">
                <section id="home" class="hero">
                    <div class="hero-copy" data-aos="fade-right">
                        <h1>{"Hi, I'm Dawood"}</h1>
                        <p class="hero-tagline">
                            {"DevOps engineer automating delivery pipelines, Kubernetes platforms and observability."}
                        </p>
                        <div class="hero-actions">
                            <a class="btn primary magnetic-btn" href="#projects">{"View Projects"}</a>
                            <a class="btn secondary magnetic-btn" href="#contact">{"Get in Touch"}</a>
                        </div>
                    </div>
                    <div class="hero-photo" data-aos="zoom-in" data-aos-delay="200">
                        <img class="parallax-element" src="/assets/profile.webp" alt="Portrait of Dawood" />
                    </div>
                </section>

                <section id="about" class="section-block" aria-labelledby="about-heading">
                    <h2 id="about-heading" class="section-title parallax-header" data-aos="fade-up">{"About"}</h2>
                    <p data-aos="fade-up" data-aos-delay="100">
                        {"I build and run cloud-native infrastructure: containerized services on Kubernetes, \
                          repeatable provisioning with Ansible and Terraform, and monitoring that tells the team \
                          what broke before users do."}
                    </p>
                    <div class="stats">
                        { for STATS.iter().map(|stat| html! {
                            <StatCounter target={stat.target} label={stat.label} />
                        }) }
                    </div>
                </section>

                <section id="skills" class="section-block" aria-labelledby="skills-heading">
                    <h2 id="skills-heading" class="section-title parallax-header" data-aos="fade-up">{"Skills"}</h2>
                    <SkillsDisclosure major={MAJOR_SKILLS} minor={MINOR_SKILLS} />
                </section>

                <section id="testimonials" class="section-block" aria-labelledby="testimonials-heading">
                    <h2 id="testimonials-heading" class="section-title parallax-header" data-aos="fade-up">
                        {"Testimonials"}
                    </h2>
                    <TestimonialCarousel testimonials={content::TESTIMONIALS} on_open={on_open_testimonial} />
                </section>

                <section id="projects" class="section-block" aria-labelledby="projects-heading">
                    <h2 id="projects-heading" class="section-title parallax-header" data-aos="fade-up">{"Projects"}</h2>
                    <ProjectGallery projects={content::PROJECTS} on_open={on_open_project} />
                </section>
            </main>

            <footer id="contact" class="site-footer">
                <a class="btn primary magnetic-btn" href="https://github.com/idavidkhan" target="_blank" rel="noopener noreferrer">
                    {"GitHub"}
                </a>
                <a class="back-to-top" href="#home">{"Back to top"}</a>
            </footer>

            <ModalShell
                id="testimonial-modal"
                labelled_by="modal-author-info"
                close_id="modal-close-btn"
                machine={*testimonial_modal}
                on_action={modal_callback(&testimonial_modal)}
            >
                {testimonial_body}
            </ModalShell>

            <ModalShell
                id="project-modal"
                labelled_by="project-modal-title"
                close_id="project-modal-close-btn"
                machine={*project_modal}
                on_action={modal_callback(&project_modal)}
            >
                <ProjectDetails project={*selected_project} />
            </ModalShell>
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    let Some(root) = document().ok().and_then(|d| d.get_element_by_id("app")) else {
        log::error!("missing #app mount point");
        return;
    };
    yew::Renderer::<App>::with_root(root).render();
}
