use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The question bank has nothing to play.
    EmptyBank,
    /// Records could not be read or written.
    Storage,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::EmptyBank => "No questions available. Add questions to the bank.",
            ViewError::Storage => "Saved scores could not be reached. Please try again.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<services::SessionError> for ViewError {
    fn from(err: services::SessionError) -> Self {
        match err {
            services::SessionError::EmptyBank => ViewError::EmptyBank,
            services::SessionError::Storage(_) => ViewError::Storage,
            _ => ViewError::Unknown,
        }
    }
}

impl From<services::RecordsError> for ViewError {
    fn from(_: services::RecordsError) -> Self {
        ViewError::Storage
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
