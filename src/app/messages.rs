//! Messages sent from background tasks back to the UI loop.

use crate::error::{FetchError, StoreError};
use crate::favorites::FavoriteSet;
use crate::models::Post;

/// Completion of a background I/O task.
#[derive(Debug)]
pub enum AppMessage {
    /// The posts request finished
    PostsLoaded(Result<Vec<Post>, FetchError>),
    /// Stored favorites were read
    FavoritesLoaded(Result<FavoriteSet, StoreError>),
    /// A favorites write finished; `count` is the size of the saved set
    FavoritesSaved {
        count: usize,
        result: Result<(), StoreError>,
    },
}
