use thiserror::Error;

use crate::models::counter::CounterId;

/// Rejections raised by [`super::CountdownService`] mutations. A rejected
/// call leaves the counter list untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountdownError {
    #[error("Please enter a title for the countdown")]
    BlankTitle,
    #[error("no countdown with id {0}")]
    NotFound(CounterId),
}
