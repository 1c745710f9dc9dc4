// Rust guideline compliant 2026-02-09

//! The content store.
//!
//! `ChallengeStore` owns the authoritative dataset for the current language and
//! every piece of state derived from it: the selected challenges, the flattened
//! doha sequence the deck walks through, and the three-slot deck rotator.
//! Callers read a [`StoreState`] snapshot and change it only through the named
//! actions; each action commits atomically and then notifies subscribers.

use crate::error::{AppError, Result};
use crate::persistence::ContentStorage;
use crate::remote::RemoteSource;
use crate::subscribe::{Registry, Subscription};
use dohas_core::{
    bundled, reconcile, sort_and_flatten, sort_challenges, validate_dataset, Challenge,
    DeckMode, DeckRotator, Doha, IdFilter, Language, Slot, SortOrder, DECK_SIZE,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

/// Outcome category of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// The action succeeded.
    Success,
    /// The action failed.
    Failure,
}

/// A transient message for the user, such as the result of a remote refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Success or failure.
    pub kind: NoticeKind,
    /// Message text.
    pub message: String,
}

impl Notice {
    fn success(message: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.to_string(),
        }
    }

    fn failure(message: &str) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.to_string(),
        }
    }
}

/// Snapshot of everything the store owns.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    /// Language of `challenges_data`.
    pub language: Language,
    /// Parent order of the selection.
    pub sort_order: SortOrder,
    /// Deck presentation mode.
    pub mode: DeckMode,
    /// Authoritative dataset for `language`.
    pub challenges_data: Vec<Challenge>,
    /// Challenges chosen by the filter, in `sort_order`.
    pub selected_challenges: Vec<Challenge>,
    /// Flattened dohas of the selection; shuffled while `randomized`.
    pub dohas: Vec<Doha>,
    /// Current filter text.
    pub filter_string: String,
    /// Whether `dohas` is a random permutation.
    pub randomized: bool,
    /// Advisory busy flag for an in-flight remote refresh.
    pub is_fetching_remote: bool,
    /// Slot priorities and data indices of the card stack.
    pub deck: DeckRotator,
    /// Latest notice, if not yet dismissed.
    pub notice: Option<Notice>,
}

impl StoreState {
    /// Returns true if the filter (or an empty dataset) left nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_challenges.is_empty()
    }
}

/// Partial initial state for [`ChallengeStore::new`]. Unset fields take their
/// defaults; unset data is derived from the bundled dataset.
#[derive(Debug, Clone, Default)]
pub struct InitialState {
    /// Starting language.
    pub language: Option<Language>,
    /// Starting sort order.
    pub sort_order: Option<SortOrder>,
    /// Starting presentation mode.
    pub mode: Option<DeckMode>,
    /// Starting filter text.
    pub filter_string: Option<String>,
    /// Whether to start with a shuffled deck.
    pub randomized: Option<bool>,
    /// Authoritative dataset to start from.
    pub challenges: Option<Vec<Challenge>>,
    /// Flattened sequence to start from, overriding the derived one.
    pub dohas: Option<Vec<Doha>>,
    /// Seed for the shuffle generator; entropy when unset.
    pub seed: Option<u64>,
}

/// The content store.
pub struct ChallengeStore<S, R> {
    state: StoreState,
    storage: S,
    remote: R,
    rng: StdRng,
    listeners: Registry,
}

impl<S, R> ChallengeStore<S, R>
where
    S: ContentStorage,
    R: RemoteSource,
{
    /// Creates a store.
    ///
    /// # Arguments
    ///
    /// * `storage` - Durable storage for fetched datasets
    /// * `remote` - Remote content source
    /// * `initial` - Partial initial state
    ///
    /// # Returns
    ///
    /// A store whose selection is derived from the initial dataset, filter and
    /// sort order. No I/O happens here; call
    /// [`initialize_challenges`](Self::initialize_challenges) to load stored data.
    pub fn new(storage: S, remote: R, initial: InitialState) -> Self {
        let mut rng = match initial.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let language = initial.language.unwrap_or_default();
        let sort_order = initial.sort_order.unwrap_or_default();
        let filter_string = initial.filter_string.unwrap_or_default();
        let randomized = initial.randomized.unwrap_or(false);
        let challenges_data = initial
            .challenges
            .unwrap_or_else(|| bundled::challenges(language));

        let selected_challenges =
            sort_challenges(&IdFilter::parse(&filter_string).apply(&challenges_data), sort_order);
        let dohas = initial.dohas.unwrap_or_else(|| {
            let mut dohas = sort_and_flatten(&selected_challenges, sort_order);
            if randomized {
                dohas.shuffle(&mut rng);
            }
            dohas
        });

        Self {
            state: StoreState {
                language,
                sort_order,
                mode: initial.mode.unwrap_or_default(),
                challenges_data,
                selected_challenges,
                dohas,
                filter_string,
                randomized,
                is_fetching_remote: false,
                deck: DeckRotator::new(),
                notice: None,
            },
            storage,
            remote,
            rng,
            listeners: Registry::default(),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Returns the durable storage backing the store.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Subscribes to a slice of the state.
    ///
    /// `callback` receives `(new, old)` whenever the value returned by
    /// `selector` changes after an action.
    ///
    /// # Returns
    ///
    /// A handle that detaches the listener.
    pub fn subscribe<T, Sel, F>(&self, selector: Sel, mut callback: F) -> Subscription
    where
        T: PartialEq + Send + 'static,
        Sel: Fn(&StoreState) -> T + Send + 'static,
        F: FnMut(&T, &T) + Send + 'static,
    {
        let mut last = selector(&self.state);
        self.listeners.insert(Box::new(move |state: &StoreState| {
            let next = selector(state);
            if next != last {
                let previous = std::mem::replace(&mut last, next);
                callback(&last, &previous);
            }
        }))
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn commit<F>(&mut self, update: F)
    where
        F: FnOnce(&mut StoreState),
    {
        update(&mut self.state);
        self.listeners.notify(&self.state);
    }
}

impl<S, R> ChallengeStore<S, R>
where
    S: ContentStorage,
    R: RemoteSource,
{
    /// Switches the presentation mode.
    pub fn set_mode(&mut self, mode: DeckMode) {
        self.commit(|s| s.mode = mode);
    }

    /// Applies a new filter to the authoritative dataset.
    ///
    /// The selection is rebuilt from `challenges_data`, not from the previous
    /// selection, and the deck returns to canonical order from the top.
    pub fn set_filter_string(&mut self, filter: &str) {
        let filtered = IdFilter::parse(filter).apply(&self.state.challenges_data);
        let selected = sort_challenges(&filtered, self.state.sort_order);
        let dohas = sort_and_flatten(&selected, self.state.sort_order);

        self.commit(|s| {
            s.selected_challenges = selected;
            s.dohas = dohas;
            s.filter_string = filter.to_string();
            s.randomized = false;
            s.deck.reset();
        });
    }

    /// Flips the sort order and re-derives the selection and flattened dohas.
    pub fn toggle_sort(&mut self) {
        let sort_order = self.state.sort_order.toggled();
        let selected = sort_challenges(&self.state.selected_challenges, sort_order);
        let dohas = sort_and_flatten(&selected, sort_order);

        self.commit(|s| {
            s.sort_order = sort_order;
            s.selected_challenges = selected;
            s.dohas = dohas;
            s.randomized = false;
            s.deck.reset();
        });
    }

    /// Shuffles the deck, or restores canonical order.
    pub fn set_randomized(&mut self, randomized: bool) {
        let dohas = if randomized {
            let mut dohas = self.state.dohas.clone();
            dohas.shuffle(&mut self.rng);
            dohas
        } else {
            sort_and_flatten(&self.state.selected_challenges, self.state.sort_order)
        };

        self.commit(|s| {
            s.dohas = dohas;
            s.randomized = randomized;
            s.deck.reset();
        });
    }

    /// Moves the last doha to the front of the sequence.
    pub fn go_backwards(&mut self) {
        self.commit(|s| {
            if !s.dohas.is_empty() {
                s.dohas.rotate_right(1);
            }
        });
    }

    /// Advances the card stack by one swipe.
    pub fn shuffle(&mut self) {
        self.commit(|s| s.deck.shuffle());
    }

    /// Points a slot at a position in the flattened sequence.
    ///
    /// The index wraps modulo the sequence length; an empty sequence stores 0.
    pub fn set_data_index(&mut self, slot: Slot, index: i64) {
        self.commit(|s| {
            let len = s.dohas.len();
            s.deck.set_data_index(slot, index, len);
        });
    }

    /// Returns the doha shown in each physical slot.
    #[must_use]
    pub fn visible_cards(&self) -> [Option<&Doha>; DECK_SIZE] {
        self.state.deck.visible(&self.state.dohas)
    }

    /// Clears the current notice.
    pub fn dismiss_notice(&mut self) {
        self.commit(|s| s.notice = None);
    }
}

impl<S, R> ChallengeStore<S, R>
where
    S: ContentStorage,
    R: RemoteSource,
{
    /// Loads the dataset for the current language and derives a fresh selection.
    ///
    /// Storage failures are logged and fall back to the bundled dataset; this
    /// action never fails.
    pub async fn initialize_challenges(&mut self) {
        let data = self.load_challenges_data(self.state.language).await;
        let derived = reconcile(&data, &[], &[], &self.state.filter_string, self.state.sort_order);

        self.commit(|s| {
            s.challenges_data = data;
            s.selected_challenges = derived.selection;
            s.dohas = derived.flattened;
            s.randomized = false;
            s.deck.reset();
        });
    }

    /// Switches language, keeping the selection and card positions.
    pub async fn set_language(&mut self, language: Language) {
        let data = self.load_challenges_data(language).await;
        self.apply_dataset(language, data);
    }

    /// Fetches every language from the remote, persists the results and
    /// reloads the current language.
    ///
    /// `is_fetching_remote` is set for the duration of the call and reset on
    /// every path. A success or failure notice is committed when done.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any language fails to download or comes back empty
    /// - Any dataset fails validation
    /// - Writing to durable storage fails
    pub async fn fetch_remote_content(&mut self) -> Result<()> {
        self.commit(|s| {
            s.is_fetching_remote = true;
            s.notice = None;
        });

        let outcome = self.refresh_from_remote().await;

        let notice = match &outcome {
            Ok(()) => Notice::success("Successfully updated challenges!"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch challenges from remote");
                Notice::failure("Failed to fetch challenges from remote.")
            }
        };
        self.commit(|s| {
            s.is_fetching_remote = false;
            s.notice = Some(notice);
        });

        outcome
    }

    async fn refresh_from_remote(&mut self) -> Result<()> {
        let remote = &self.remote;
        let datasets = futures::future::try_join_all(
            Language::ALL
                .into_iter()
                .map(|language| fetch_checked(remote, language)),
        )
        .await?;

        for (language, challenges) in &datasets {
            let json = serde_json::to_string(challenges).map_err(dohas_core::Error::from)?;
            self.storage
                .set_item(&language.storage_key(), &json)
                .await
                .map_err(|source| {
                    tracing::error!(%language, error = %source, "Failed to save challenges data");
                    AppError::Persist { source }
                })?;
        }
        tracing::info!(languages = datasets.len(), "remote content stored");

        let language = self.state.language;
        let data = self.load_challenges_data(language).await;
        self.apply_dataset(language, data);
        Ok(())
    }

    fn apply_dataset(&mut self, language: Language, data: Vec<Challenge>) {
        let reconciled = reconcile(
            &data,
            &self.state.selected_challenges,
            &self.state.dohas,
            &self.state.filter_string,
            self.state.sort_order,
        );

        self.commit(|s| {
            s.language = language;
            s.challenges_data = data;
            s.selected_challenges = reconciled.selection;
            s.dohas = reconciled.flattened;
        });
    }

    /// Reads a language's dataset from storage, falling back to the bundled one.
    async fn load_challenges_data(&self, language: Language) -> Vec<Challenge> {
        let key = language.storage_key();
        match self.storage.get_item(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Challenge>>(&raw) {
                Ok(data) => return data,
                Err(e) => tracing::warn!(%key, error = %e, "stored dataset is unreadable"),
            },
            Ok(None) => tracing::debug!(%key, "no stored dataset"),
            Err(e) => {
                tracing::warn!(%key, error = %e, "Failed to get challenges data from storage");
            }
        }
        bundled::challenges(language)
    }
}

async fn fetch_checked<R>(remote: &R, language: Language) -> Result<(Language, Vec<Challenge>)>
where
    R: RemoteSource + ?Sized,
{
    let challenges = remote
        .fetch(language)
        .await?
        .filter(|data| !data.is_empty())
        .ok_or(AppError::EmptyResponse { language })?;
    validate_dataset(&challenges)?;
    Ok((language, challenges))
}
