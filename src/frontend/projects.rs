use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::dom::is_activation_key;
use crate::content::Project;

const CARD_SKILL_PREVIEW: usize = 3;

#[derive(Properties, PartialEq)]
pub struct ProjectGalleryProps {
    pub projects: &'static [Project],
    pub on_open: Callback<u32>,
}

#[function_component(ProjectGallery)]
pub fn project_gallery(props: &ProjectGalleryProps) -> Html {
    let cards = props
        .projects
        .iter()
        .enumerate()
        .map(|(position, project)| {
            let id = project.id;

            let onclick = {
                let on_open = props.on_open.clone();
                Callback::from(move |_: MouseEvent| on_open.emit(id))
            };

            let onkeydown = {
                let on_open = props.on_open.clone();
                Callback::from(move |event: KeyboardEvent| {
                    if is_activation_key(&event) {
                        event.prevent_default();
                        on_open.emit(id);
                    }
                })
            };

            html! {
                <article
                    key={id}
                    class="project-card"
                    data-project-id={id.to_string()}
                    data-aos="fade-up"
                    data-aos-delay={(position * 100).to_string()}
                    tabindex="0"
                    role="button"
                    aria-label={format!("Open details for {}", project.title)}
                    {onclick}
                    {onkeydown}
                >
                    <h3 class="project-title">{project.title}</h3>
                    <div class="project-skills">
                        { for project.skills.iter().take(CARD_SKILL_PREVIEW).map(|skill| html! {
                            <span class="skill">{*skill}</span>
                        }) }
                    </div>
                    <span class="project-more">{"View details"}</span>
                </article>
            }
        })
        .collect::<Html>();

    html! {
        <div class="projects-grid">
            {cards}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectDetailsProps {
    pub project: Option<&'static Project>,
}

/// Body of the project modal: title, description, tag chips and actions.
#[function_component(ProjectDetails)]
pub fn project_details(props: &ProjectDetailsProps) -> Html {
    let Some(project) = props.project else {
        return html! {
            <h2 id="project-modal-title"></h2>
        };
    };

    let source = project.source_link();
    let live_demo = project.live_demo_link();
    let live_demo_style = if live_demo.is_some() {
        "display: inline-flex;"
    } else {
        "display: none;"
    };
    let (live_demo_href, live_demo_label) = match live_demo {
        Some(link) => (
            Some(AttrValue::from(link.href)),
            Some(AttrValue::from(link.label)),
        ),
        None => (None, None),
    };

    html! {
        <>
            <h2 id="project-modal-title">{project.title}</h2>
            <p id="project-modal-description">{project.description}</p>
            <div id="project-modal-tags" class="skills">
                { for project.skills.iter().map(|skill| html! {
                    <div class="skill major-skill">{*skill}</div>
                }) }
            </div>
            <div class="project-modal-actions">
                <a
                    id="project-github-btn"
                    class="btn primary"
                    href={source.href}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label={source.label}
                >
                    {"Source code"}
                </a>
                <a
                    id="project-live-demo-btn"
                    class="btn secondary"
                    href={live_demo_href}
                    style={live_demo_style}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label={live_demo_label}
                >
                    {"Live demo"}
                </a>
            </div>
        </>
    }
}
