/// Load state of a single remote data source.
///
/// Each source a view reads from gets its own `LoadState`, so readiness of the
/// view is composed from the individual states instead of one shared flag.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T, E> {
    /// No request has been issued yet
    NotStarted,
    /// A request is in flight
    Loading,
    /// The request settled with data
    Ready(T),
    /// The request settled with an error
    Failed(E),
}

impl<T, E> Default for LoadState<T, E> {
    fn default() -> Self {
        LoadState::NotStarted
    }
}

impl<T, E> LoadState<T, E> {
    /// True until the request has settled, either way.
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::NotStarted | LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

impl<T: Clone + Default, E> LoadState<T, E> {
    /// The loaded data, or an empty value when the source is pending or failed.
    pub fn data_or_default(&self) -> T {
        self.data().cloned().unwrap_or_default()
    }
}

impl<T, E> From<Result<T, E>> for LoadState<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => LoadState::Ready(data),
            Err(err) => LoadState::Failed(err),
        }
    }
}
