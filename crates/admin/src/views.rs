//! Presentation state for the list and detail views.
//!
//! A view starts `Loading`, settles to `Loaded` or `Error`, and list views
//! then apply successful mutations locally instead of refetching.

use serde::Serialize;
use tracing::warn;

use crate::filters::{ListFilter, Searchable};
use crate::models::Record;

/// Load state of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Loaded(T),
}

impl<T> ViewState<T> {
    /// Settle from a load result.
    pub fn from_load<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Loaded(data),
            Err(e) => Self::Error(e.to_string()),
        }
    }

    /// The loaded data, if any.
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            Self::Loading | Self::Error(_) => None,
        }
    }

    /// Whether a load is still pending.
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// Transient message shown after a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    /// A success message.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    /// An error message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// A filterable list view over one collection.
#[derive(Debug, Clone)]
pub struct ListPage<T: Searchable> {
    pub state: ViewState<Vec<T>>,
    pub filter: ListFilter<T::Category>,
}

impl<T> ListPage<T>
where
    T: Record + Searchable,
{
    /// A page waiting for its first load.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            state: ViewState::Loading,
            filter: ListFilter::default(),
        }
    }

    /// A page already holding `rows`, filtered by `filter`.
    #[must_use]
    pub const fn with_rows(rows: Vec<T>, filter: ListFilter<T::Category>) -> Self {
        Self {
            state: ViewState::Loaded(rows),
            filter,
        }
    }

    /// How many rows are loaded, ignoring the filter.
    #[must_use]
    pub fn total(&self) -> usize {
        self.state.loaded().map_or(0, Vec::len)
    }

    /// Apply a fresh load. A failed load replaces the rows with an error.
    pub fn load<E: std::fmt::Display>(&mut self, result: Result<Vec<T>, E>) {
        self.state = ViewState::from_load(result);
    }

    /// The rows that pass the current filter; empty unless loaded.
    #[must_use]
    pub fn visible(&self) -> Vec<&T> {
        self.state
            .loaded()
            .map(|rows| self.filter.apply(rows))
            .unwrap_or_default()
    }

    /// Append a newly created record, matching the repository's order.
    pub fn apply_created(&mut self, record: T) {
        if let ViewState::Loaded(rows) = &mut self.state {
            rows.push(record);
        }
    }

    /// Replace the row with the same ID.
    pub fn apply_updated(&mut self, record: T) {
        if let ViewState::Loaded(rows) = &mut self.state
            && let Some(row) = rows.iter_mut().find(|r| r.id() == record.id())
        {
            *row = record;
        }
    }

    /// Drop the row with `id`.
    pub fn apply_deleted(&mut self, id: &T::Id) {
        if let ViewState::Loaded(rows) = &mut self.state {
            rows.retain(|r| r.id() != id);
        }
    }

    /// Report a failed mutation. Rows are left as they were.
    pub fn fail(&self, error: &impl std::fmt::Display) -> Notification {
        warn!(kind = T::KIND, error = %error, "Mutation failed");
        Notification::error(error.to_string())
    }
}
