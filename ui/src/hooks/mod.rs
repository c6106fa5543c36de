mod use_fetch;
mod use_property;

pub use use_fetch::{FetchHookReturn, use_fetch_with_cache};
pub use use_property::use_property;

/// Distinguishes "not fetched yet" from "fetched", including fetched-but-
/// empty data.
#[derive(Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(value) => Some(value),
            Self::NotFetched => None,
        }
    }
}
