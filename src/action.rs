use crate::error::ReelError;
use crate::types::MoviePage;

#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    Back,
    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,
    Select,

    // Pagination
    NextPage,
    PrevPage,

    // Search input
    EnterSearch,
    ExitSearch,
    SearchInput(char),
    SearchBackspace,
    SearchClear,
    /// Commit the current input as the active query (debounce expiry or Enter).
    CommitSearch,

    // Fetch settlement; load_id pairs a response with the request that
    // produced it so stale responses can be dropped.
    MoviesLoaded {
        page: Box<MoviePage>,
        load_id: u64,
    },
    FetchFailed {
        message: String,
        load_id: u64,
    },

    // Polish
    Refresh,
    OpenInBrowser,
    YankUrl,

    Error(String),
    None,
}

impl From<ReelError> for Action {
    fn from(err: ReelError) -> Self {
        Action::Error(err.to_string())
    }
}
