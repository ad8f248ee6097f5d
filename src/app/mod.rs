//! Application controller.
//!
//! [`App`] owns the [`StateContainer`] and is the only code that dispatches
//! actions. Background tasks (posts fetch, favorites load, favorites save)
//! report back through [`AppMessage`]s on an unbounded channel which the UI
//! loop drains alongside terminal events.

mod messages;
mod persistence;

pub use messages::AppMessage;
pub use persistence::spawn_persistence_worker;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::widgets::ListState;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::adapters::{FileStore, ReqwestHttpClient};
use crate::api::PostsClient;
use crate::config::AppConfig;
use crate::favorites::{toggle_favorite, FavoriteSet, FavoritesStore};
use crate::input::{command_for_key, Command};
use crate::models::Post;
use crate::state::{Action, Listener, Screen, StateContainer, SubscriptionId, ViewState};

/// Rows moved by PageUp/PageDown until the first render measures the list.
const DEFAULT_PAGE_SIZE: usize = 10;

pub struct App {
    view: StateContainer,
    /// Selection and scroll offset of the post list
    pub list_state: ListState,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set when something visible changed since the last draw
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Posts that fit on one page, updated by the renderer
    pub page_size: usize,
    /// Receiver for background task completions
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for background task completions (clone this into tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    posts_client: PostsClient,
    favorites_store: FavoritesStore,
    save_tx: mpsc::UnboundedSender<FavoriteSet>,
    save_rx: Option<mpsc::UnboundedReceiver<FavoriteSet>>,
    persistence: Option<JoinHandle<()>>,
    /// Set once the stored favorites have been read (or failed to read)
    favorites_loaded: bool,
    /// Posts toggled before the stored favorites arrived, in toggle order
    early_toggles: Vec<Post>,
}

impl App {
    /// Create an app over the given I/O capabilities. Nothing runs until
    /// [`App::start`].
    pub fn new(posts_client: PostsClient, favorites_store: FavoritesStore) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let (save_tx, save_rx) = mpsc::unbounded_channel();

        let mut view = StateContainer::new();
        view.subscribe(screen_logger());

        Self {
            view,
            list_state: ListState::default(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            page_size: DEFAULT_PAGE_SIZE,
            message_rx: Some(message_rx),
            message_tx,
            posts_client,
            favorites_store,
            save_tx,
            save_rx: Some(save_rx),
            persistence: None,
            favorites_loaded: false,
            early_toggles: Vec::new(),
        }
    }

    /// Create an app using reqwest and the file store in `config.data_dir`.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout)
            .wrap_err("Failed to build HTTP client")?;
        let posts_client = PostsClient::new(Arc::new(http), config.posts_url.clone());
        let favorites_store = FavoritesStore::new(Arc::new(FileStore::new(&config.data_dir)));
        Ok(Self::new(posts_client, favorites_store))
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        self.view.state()
    }

    pub fn screen(&self) -> Screen {
        self.view.state().screen()
    }

    /// Register a listener on state changes.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        self.view.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.view.unsubscribe(id)
    }

    /// Kick off the posts fetch and the favorites load without waiting on
    /// either, and start the persistence worker. Must run inside a tokio
    /// runtime.
    pub fn start(&mut self) {
        if let Some(saves) = self.save_rx.take() {
            self.persistence = Some(spawn_persistence_worker(
                self.favorites_store.clone(),
                saves,
                self.message_tx.clone(),
            ));
        }
        self.request_favorites();
        self.request_posts();
    }

    /// Enter Loading and issue a fetch. In-flight fetches are not
    /// cancelled; whichever completes last wins.
    pub fn request_posts(&mut self) {
        self.dispatch(Action::FetchStarted);

        let client = self.posts_client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            debug!(url = client.url(), "fetching posts");
            let result = client.fetch_posts().await;
            let _ = tx.send(AppMessage::PostsLoaded(result));
        });
    }

    /// Read stored favorites in the background.
    pub fn request_favorites(&self) {
        let store = self.favorites_store.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = store.load_favorites().await;
            let _ = tx.send(AppMessage::FavoritesLoaded(result));
        });
    }

    /// Retry after a failed fetch.
    pub fn retry(&mut self) {
        info!("retrying posts fetch");
        self.request_posts();
    }

    /// Toggle `post` in the favorites and queue the new set for saving.
    ///
    /// The state changes immediately whether or not the save succeeds.
    pub fn toggle_favorite(&mut self, post: Post) {
        let id = post.id;
        if !self.favorites_loaded {
            self.early_toggles.push(post.clone());
        }
        self.dispatch(Action::FavoriteToggled(post));

        let favorites = self.state().favorites.clone();
        debug!(post_id = id, favorite = favorites.contains(id), "favorite toggled");
        self.queue_save(favorites);
    }

    fn queue_save(&self, favorites: FavoriteSet) {
        let count = favorites.len();
        if self.save_tx.send(favorites).is_err() {
            warn!(count, "persistence worker stopped; favorites not saved");
        }
    }

    /// Install the stored favorites. Posts the user toggled before they
    /// arrived keep the membership the user gave them, and the merged set is
    /// saved so memory and storage agree.
    fn apply_loaded_favorites(&mut self, stored: FavoriteSet) {
        self.favorites_loaded = true;
        let early = std::mem::take(&mut self.early_toggles);
        if early.is_empty() {
            self.dispatch(Action::FavoritesLoaded(stored));
            return;
        }

        let current = &self.state().favorites;
        let merged = early.iter().fold(stored, |set, post| {
            if current.contains(post.id) == set.contains(post.id) {
                set
            } else {
                toggle_favorite(&set, post)
            }
        });
        debug!(replayed = early.len(), count = merged.len(), "merged early favorite toggles");
        self.dispatch(Action::FavoritesLoaded(merged.clone()));
        self.queue_save(merged);
    }

    /// Toggle the selected post, if any.
    pub fn toggle_selected_favorite(&mut self) {
        if let Some(post) = self.selected_post().cloned() {
            self.toggle_favorite(post);
        }
    }

    /// Switch between all posts and favorites. Never refetches.
    pub fn toggle_view(&mut self) {
        self.dispatch(Action::ViewToggled);
        self.select_first();
    }

    /// Apply a background completion to the state.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::PostsLoaded(Ok(posts)) => {
                info!(count = posts.len(), "posts loaded");
                self.dispatch(Action::FetchCompleted(Ok(posts)));
            }
            AppMessage::PostsLoaded(Err(e)) => {
                warn!(error = %e, "posts fetch failed");
                self.dispatch(Action::FetchCompleted(Err(e.user_message().to_string())));
            }
            AppMessage::FavoritesLoaded(Ok(favorites)) => {
                info!(count = favorites.len(), "favorites loaded");
                self.apply_loaded_favorites(favorites);
            }
            AppMessage::FavoritesLoaded(Err(e)) => {
                error!(error = %e, "failed to load favorites; keeping in-memory set");
                self.favorites_loaded = true;
                self.early_toggles.clear();
            }
            AppMessage::FavoritesSaved { count, result: Ok(()) } => {
                debug!(count, "favorites saved");
            }
            AppMessage::FavoritesSaved { count, result: Err(e) } => {
                error!(count, error = %e, "failed to save favorites");
            }
        }
    }

    /// Wait for the next background completion.
    ///
    /// Returns `None` once the receiver has been taken by the UI loop.
    pub async fn recv_message(&mut self) -> Option<AppMessage> {
        match self.message_rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(command) = command_for_key(&key, self.screen()) {
            self.handle_command(command);
        }
    }

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Quit => self.quit(),
            Command::SelectNext => self.select_next(),
            Command::SelectPrevious => self.select_previous(),
            Command::PageDown => self.select_by(self.page_size as isize),
            Command::PageUp => self.select_by(-(self.page_size as isize)),
            Command::SelectFirst => self.select_first(),
            Command::SelectLast => self.select_last(),
            Command::ToggleFavorite => self.toggle_selected_favorite(),
            Command::ToggleView => self.toggle_view(),
            Command::Retry => self.retry(),
        }
        self.mark_dirty();
    }

    /// Posts listed in the current view mode.
    pub fn visible_posts(&self) -> &[Post] {
        self.state().visible_posts()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.selected_index()
            .and_then(|i| self.visible_posts().get(i))
    }

    pub fn select_next(&mut self) {
        self.select_by(1);
    }

    pub fn select_previous(&mut self) {
        self.select_by(-1);
    }

    pub fn select_first(&mut self) {
        let first = if self.visible_posts().is_empty() { None } else { Some(0) };
        self.list_state.select(first);
    }

    pub fn select_last(&mut self) {
        let len = self.visible_posts().len();
        self.list_state.select(len.checked_sub(1));
    }

    fn select_by(&mut self, delta: isize) {
        let len = self.visible_posts().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.selected_index().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.list_state.select(Some(next));
    }

    /// Keep the selection inside the visible list.
    fn clamp_selection(&mut self) {
        let len = self.visible_posts().len();
        let selected = match (len, self.selected_index()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.list_state.select(selected);
    }

    fn dispatch(&mut self, action: Action) {
        self.view.dispatch(action);
        self.clamp_selection();
        self.mark_dirty();
    }

    /// Advance animations. Only the spinner animates.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.state().loading {
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Stop accepting saves and wait for queued ones to be written.
    pub async fn shutdown(&mut self) {
        let (closed_tx, _) = mpsc::unbounded_channel();
        drop(std::mem::replace(&mut self.save_tx, closed_tx));
        if let Some(handle) = self.persistence.take() {
            let _ = handle.await;
        }
    }
}

/// Listener that logs every screen transition once.
fn screen_logger() -> Listener {
    let mut last: Option<Screen> = None;
    Box::new(move |state: &ViewState| {
        let screen = state.screen();
        if last != Some(screen) {
            debug!(
                ?screen,
                posts = state.posts.len(),
                favorites = state.favorites.len(),
                "screen changed"
            );
            last = Some(screen);
        }
    })
}
