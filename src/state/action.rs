//! State transitions.

use super::ViewState;
use crate::favorites::{toggle_favorite, FavoriteSet};
use crate::models::Post;

/// The operations that may change [`ViewState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A fetch was issued (startup or retry).
    FetchStarted,
    /// The fetch finished. `Err` carries the user-facing message.
    FetchCompleted(Result<Vec<Post>, String>),
    /// Stored favorites were read.
    FavoritesLoaded(FavoriteSet),
    /// The user toggled a post in or out of the favorites.
    FavoriteToggled(Post),
    /// The user switched between all posts and favorites.
    ViewToggled,
}

/// Apply `action` to `state`.
///
/// Fetch actions touch only `loading`, `error` and `posts`. Favorite actions
/// touch only `favorites`, and the view toggle only `show_favorites`.
pub fn reduce(mut state: ViewState, action: &Action) -> ViewState {
    match action {
        Action::FetchStarted => {
            state.loading = true;
            state.error = None;
        }
        Action::FetchCompleted(Ok(posts)) => {
            state.loading = false;
            state.error = None;
            state.posts = posts.clone();
        }
        Action::FetchCompleted(Err(message)) => {
            state.loading = false;
            state.error = Some(message.clone());
        }
        Action::FavoritesLoaded(favorites) => {
            state.favorites = favorites.clone();
        }
        Action::FavoriteToggled(post) => {
            state.favorites = toggle_favorite(&state.favorites, post);
        }
        Action::ViewToggled => {
            state.show_favorites = !state.show_favorites;
        }
    }
    state
}
