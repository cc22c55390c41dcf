//! Dioxus views: the search screen and the results grid.

use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::api::{DogApiClient, ImageSource};
use crate::config::Config;
use crate::controller::{ViewMode, ViewState};
use crate::messages;

const STYLESHEET: &str = include_str!("../../assets/main.css");

/// Shared by both screens through the context API.
#[derive(Clone)]
struct Services {
    source: Rc<dyn ImageSource>,
    max_images: usize,
}

impl Services {
    fn from_config(config: &Config) -> Self {
        Self {
            source: Rc::new(DogApiClient::new(config.api.base_url.clone())),
            max_images: config.api.max_images,
        }
    }
}

/// Mount the app on the page with `config` in the root context.
pub fn launch(config: Config) {
    LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<Config>();
    let services = use_context_provider(|| Services::from_config(&config));
    let state = use_signal(ViewState::new);

    let view = state.read().view;

    rsx! {
        style { {STYLESHEET} }
        div { class: "app-container",
            if view == ViewMode::Search {
                SearchView { state }
            } else {
                ResultsView { state }
            }
        }
    }
}

#[component]
fn SearchView(state: Signal<ViewState>) -> Element {
    let mut state = state;
    let services = use_context::<Services>();

    let (term, loading, error) = {
        let s = state.read();
        (s.search_term.clone(), s.loading, s.error.clone())
    };
    let button_label = if loading {
        messages::SEARCHING
    } else {
        messages::SEARCH_BUTTON
    };

    let on_submit = move |_: FormEvent| {
        let Some(breed) = state.write().begin_search() else {
            return;
        };
        debug!(breed = %breed, "search submitted");
        let services = services.clone();
        spawn(async move {
            let result = services.source.breed_images(&breed).await;
            state
                .write()
                .complete_search(&breed, result, services.max_images);
        });
    };

    rsx! {
        section { class: "search-view",
            div { class: "search-content",
                h1 { class: "dogg-title",
                    span { style: "color: #4285F4", "D" }
                    span { style: "color: #EA4335", "o" }
                    span { style: "color: #FBBC05", "g" }
                    span { style: "color: #34A853", "g" }
                }
                form {
                    class: "search-form",
                    prevent_default: "onsubmit",
                    onsubmit: on_submit,
                    div { class: "search-bar-wrapper",
                        input {
                            r#type: "text",
                            class: "search-input",
                            placeholder: messages::SEARCH_PLACEHOLDER,
                            value: "{term}",
                            autofocus: true,
                            oninput: move |evt: FormEvent| state.write().set_search_term(evt.value()),
                        }
                    }
                    div { class: "search-buttons",
                        button {
                            r#type: "submit",
                            class: "dogg-button",
                            disabled: loading,
                            "{button_label}"
                        }
                    }
                    if let Some(error) = error {
                        p { class: "error-text", "{error}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ResultsView(state: Signal<ViewState>) -> Element {
    let mut state = state;
    let (term, images) = {
        let s = state.read();
        (s.search_term.clone(), s.images.clone())
    };

    rsx! {
        section { class: "results-view",
            header { class: "results-header",
                div { class: "header-content",
                    button {
                        class: "back-button",
                        onclick: move |_| state.write().go_back(),
                        {messages::BACK_BUTTON}
                    }
                    h2 {
                        {messages::RESULTS_HEADING}
                        " "
                        span { "{term}" }
                    }
                }
            }
            main { class: "image-grid",
                for (index, url) in images.into_iter().enumerate() {
                    div { key: "{index}", class: "image-card",
                        img {
                            src: "{url}",
                            alt: messages::IMAGE_ALT,
                            "loading": "lazy",
                        }
                    }
                }
            }
        }
    }
}
