//! Search/results view state and the transitions between them.
//!
//! States: Search(idle), Search(loading), Search(error), Results.
//! A search is split around its single await point so that the UI can hold
//! the state in a signal without borrowing it across the request:
//! [`ViewState::begin_search`] before, [`ViewState::complete_search`] after.
//!
//! A submit while a request is in flight is ignored, the same rule that
//! disables the submit button. [`ViewState::search_breed`] runs both halves
//! around one request; the UI runs them itself with a spawned task between.

use thiserror::Error;
use tracing::{info, warn};

use crate::api::{ApiError, BreedImagesResponse, ImageSource};
use crate::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Search,
    Results,
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    Transport(#[from] ApiError),
    #[error("breed not found: {breed}")]
    NotFound { breed: String },
}

impl SearchError {
    /// Inline text for the search screen.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Transport(_) => messages::SEARCH_FAILED.to_string(),
            SearchError::NotFound { breed } => messages::breed_not_found(breed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub search_term: String,
    pub images: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub view: ViewMode,
}

/// Trim and lowercase; the API only knows lowercase breed names.
pub fn normalize_breed(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    /// Start a search for the current term. Returns the normalized breed to
    /// request, or `None` (with no state change) when the term is blank or a
    /// search is already in flight.
    pub fn begin_search(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let breed = normalize_breed(&self.search_term);
        if breed.is_empty() {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(breed)
    }

    /// Apply the outcome of the request started by `begin_search`.
    /// Always clears `loading`.
    pub fn complete_search(
        &mut self,
        breed: &str,
        result: Result<BreedImagesResponse, ApiError>,
        max_images: usize,
    ) {
        match classify(breed, result) {
            Ok(mut images) => {
                images.truncate(max_images);
                info!(breed = breed, images = images.len(), "breed search succeeded");
                self.images = images;
                self.view = ViewMode::Results;
            }
            Err(e) => {
                warn!(breed = breed, error = %e, "breed search failed");
                self.error = Some(e.user_message());
            }
        }
        self.loading = false;
    }

    /// Run one full search against `source`.
    pub async fn search_breed<S: ImageSource + ?Sized>(
        &mut self,
        source: &S,
        max_images: usize,
    ) {
        let Some(breed) = self.begin_search() else {
            return;
        };
        let result = source.breed_images(&breed).await;
        self.complete_search(&breed, result, max_images);
    }

    /// Back to an empty search screen.
    pub fn go_back(&mut self) {
        self.view = ViewMode::Search;
        self.search_term.clear();
        self.images.clear();
        self.error = None;
    }
}

fn classify(
    breed: &str,
    result: Result<BreedImagesResponse, ApiError>,
) -> Result<Vec<String>, SearchError> {
    result?
        .into_images()
        .ok_or_else(|| SearchError::NotFound {
            breed: breed.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiMessage, ApiStatus};
    use futures::executor::block_on;
    use futures::future::LocalBoxFuture;
    use futures::FutureExt;
    use std::cell::RefCell;

    enum Reply {
        Body(BreedImagesResponse),
        /// Build a real reqwest transport error without touching the network.
        Transport,
    }

    struct MockSource {
        reply: Reply,
        calls: RefCell<Vec<String>>,
    }

    impl MockSource {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ImageSource for MockSource {
        fn breed_images<'a>(
            &'a self,
            breed: &'a str,
        ) -> LocalBoxFuture<'a, Result<BreedImagesResponse, ApiError>> {
            self.calls.borrow_mut().push(breed.to_string());
            let result = match &self.reply {
                Reply::Body(body) => Ok(body.clone()),
                Reply::Transport => Err(transport_error()),
            };
            async move { result }.boxed_local()
        }
    }

    fn transport_error() -> ApiError {
        // An unparseable URL fails in the builder, before any I/O.
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        ApiError::Request(err)
    }

    fn urls(n: usize) -> Vec<String> {
        (1..=n)
            .map(|i| format!("https://images.dog.ceo/breeds/hound/{i}.jpg"))
            .collect()
    }

    fn found(images: Vec<String>) -> BreedImagesResponse {
        BreedImagesResponse {
            message: ApiMessage::Images(images),
            status: ApiStatus::Success,
        }
    }

    fn not_found() -> BreedImagesResponse {
        BreedImagesResponse {
            message: ApiMessage::Text("Breed not found (main breed does not exist)".to_string()),
            status: ApiStatus::Error,
        }
    }

    fn search(state: &mut ViewState, source: &MockSource) {
        block_on(state.search_breed(source, 30));
    }

    #[test]
    fn test_blank_term_is_a_no_op() {
        let source = MockSource::new(Reply::Body(found(urls(3))));
        for term in ["", "   ", "\t\n"] {
            let mut state = ViewState::new();
            state.set_search_term(term);
            let before = state.clone();
            search(&mut state, &source);
            assert_eq!(state, before);
        }
        assert!(source.calls.borrow().is_empty());
    }

    #[test]
    fn test_success_caps_at_thirty_in_order() {
        let source = MockSource::new(Reply::Body(found(urls(40))));
        let mut state = ViewState::new();
        state.set_search_term("hound");
        assert!(!state.loading);

        search(&mut state, &source);

        assert_eq!(state.images, urls(30));
        assert_eq!(state.view, ViewMode::Results);
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[test]
    fn test_configured_cap_is_applied() {
        let source = MockSource::new(Reply::Body(found(urls(40))));
        let mut state = ViewState::new();
        state.set_search_term("hound");

        block_on(state.search_breed(&source, 5));

        assert_eq!(state.images, urls(5));
        assert_eq!(state.view, ViewMode::Results);
        assert!(!state.loading);
    }

    #[test]
    fn test_success_with_fewer_images() {
        let source = MockSource::new(Reply::Body(found(urls(2))));
        let mut state = ViewState::new();
        state.set_search_term("hound");

        search(&mut state, &source);

        assert_eq!(state.images, urls(2));
        assert_eq!(state.view, ViewMode::Results);
        assert!(!state.loading);
    }

    #[test]
    fn test_term_is_trimmed_and_lowercased() {
        let source = MockSource::new(Reply::Body(found(urls(1))));
        let mut state = ViewState::new();
        state.set_search_term("  HoUnD ");

        search(&mut state, &source);

        assert_eq!(*source.calls.borrow(), vec!["hound".to_string()]);
        // the heading shows what the user typed
        assert_eq!(state.search_term, "  HoUnD ");
    }

    #[test]
    fn test_not_found_names_breed_and_stays_on_search() {
        let source = MockSource::new(Reply::Body(BreedImagesResponse {
            message: ApiMessage::Images(Vec::new()),
            status: ApiStatus::Error,
        }));
        let mut state = ViewState::new();
        state.set_search_term("xyz");

        search(&mut state, &source);

        assert_eq!(state.error.as_deref(), Some("Raça \"xyz\" não encontrada."));
        assert_eq!(state.view, ViewMode::Search);
        assert!(state.images.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn test_transport_failure_shows_generic_message() {
        let source = MockSource::new(Reply::Transport);
        let mut state = ViewState::new();
        state.set_search_term("hound");

        search(&mut state, &source);

        assert_eq!(state.error.as_deref(), Some("Erro ao buscar."));
        assert_eq!(state.view, ViewMode::Search);
        assert!(state.images.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn test_new_search_clears_previous_error() {
        let mut state = ViewState::new();
        state.set_search_term("xyz");
        search(&mut state, &MockSource::new(Reply::Body(not_found())));
        assert!(state.error.is_some());

        state.set_search_term("hound");
        assert_eq!(state.begin_search().as_deref(), Some("hound"));
        assert!(state.loading);
        assert!(!state.can_submit());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_submit_ignored_while_in_flight() {
        let mut state = ViewState::new();
        state.set_search_term("hound");
        let breed = state.begin_search().unwrap();

        state.set_search_term("pug");
        let during = state.clone();
        assert_eq!(state.begin_search(), None);
        assert_eq!(state, during);

        // the same guard applies through the full search path
        let source = MockSource::new(Reply::Body(found(urls(3))));
        search(&mut state, &source);
        assert!(source.calls.borrow().is_empty());
        assert!(state.loading);

        state.complete_search(&breed, Ok(found(urls(3))), 30);
        assert_eq!(state.images, urls(3));
        assert!(!state.loading);
        assert!(state.can_submit());
    }

    #[test]
    fn test_go_back_resets_and_is_idempotent() {
        let source = MockSource::new(Reply::Body(found(urls(5))));
        let mut state = ViewState::new();
        state.set_search_term("hound");
        search(&mut state, &source);
        assert_eq!(state.view, ViewMode::Results);

        state.go_back();
        assert_eq!(state, ViewState::new());
        state.go_back();
        assert_eq!(state, ViewState::new());
    }

    #[test]
    fn test_user_message() {
        let err = SearchError::NotFound {
            breed: "xyz".to_string(),
        };
        assert_eq!(err.user_message(), "Raça \"xyz\" não encontrada.");
        assert_eq!(SearchError::from(transport_error()).user_message(), "Erro ao buscar.");
    }
}
