//! List + form controller shared by every entity screen.
//!
//! An [`EntityPage`] owns a snapshot of one collection and the create/edit
//! form bound to it. Network work runs on the page's [`TaskScope`]; results
//! come back over a channel and are applied by [`EntityPage::poll`] on the UI
//! thread. The list is never edited in place: every successful mutation is
//! followed by a refetch.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::api::{ApiClient, ListParams, RequestError};
use crate::entities::Resource;
use crate::form::{Draft, FieldErrors, FormMode};
use crate::scope::TaskScope;

type ListFuture<R> = Pin<Box<dyn Future<Output = Result<Vec<R>, RequestError>> + Send>>;
type ListSource<R> = Arc<dyn Fn(ApiClient) -> ListFuture<R> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Commit {
    Save,
    Delete,
    Mutation,
}

enum Message<R> {
    /// Listing result tagged with the load generation that asked for it.
    Fetched(u64, Result<Vec<R>, RequestError>),
    Committed(Commit, Result<(), RequestError>),
}

pub struct EntityPage<R: Resource> {
    pub items: Vec<R>,
    pub loading: bool,
    pub saving: bool,
    pub mode: FormMode<R>,
    pub draft: R::Draft,
    pub errors: FieldErrors,
    /// Row awaiting delete confirmation.
    pub pending_delete: Option<R>,
    pub last_error: Option<String>,
    pub last_fetch: Option<DateTime<Utc>>,

    client: ApiClient,
    source: Option<ListSource<R>>,
    scope: TaskScope,
    tx: flume::Sender<Message<R>>,
    rx: flume::Receiver<Message<R>>,
    /// Spawned tasks whose message has not been applied yet.
    pending: usize,
    /// Bumped by every [`Self::load`]; only the newest listing is applied.
    generation: u64,
}

impl<R: Resource> EntityPage<R> {
    pub fn new(client: ApiClient) -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            items: Vec::new(),
            loading: false,
            saving: false,
            mode: FormMode::Closed,
            draft: R::Draft::default(),
            errors: FieldErrors::new(),
            pending_delete: None,
            last_error: None,
            last_fetch: None,
            client,
            source: None,
            scope: TaskScope::new(),
            tx,
            rx,
            pending: 0,
            generation: 0,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// True while any request of this page is outstanding.
    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }

    /// Replaces the default `GET {endpoint}` listing, e.g. with a search or
    /// a filtered endpoint. Takes effect on the next [`Self::load`].
    pub fn set_source<F, Fut>(&mut self, source: F)
    where
        F: Fn(ApiClient) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<R>, RequestError>> + Send + 'static,
    {
        self.source = Some(Arc::new(move |client| -> ListFuture<R> {
            Box::pin(source(client))
        }));
    }

    /// Goes back to listing the whole collection.
    pub fn reset_source(&mut self) {
        self.source = None;
    }

    /// Fetches the collection. The current items stay until the response
    /// arrives, and stay as they are if it fails. A listing still in flight
    /// from an earlier call is discarded when it lands.
    pub fn load(&mut self) {
        self.loading = true;
        self.generation += 1;
        let generation = self.generation;
        let client = self.client.clone();
        let work: ListFuture<R> = match &self.source {
            Some(source) => source(client),
            None => {
                let params = ListParams::new().limit(client.config().page_size);
                Box::pin(async move {
                    let page = client.get_all::<R>(R::ENDPOINT, &params).await?;
                    Ok(page.data)
                })
            }
        };
        debug!("Fetching {}", R::ENDPOINT);

        let tx = self.tx.clone();
        self.pending += 1;
        self.scope.spawn(work, move |result| {
            let _ = tx.send(Message::Fetched(generation, result));
        });
    }

    pub fn open_create(&mut self) {
        self.mode = FormMode::Creating;
        self.draft = R::Draft::default();
        self.errors = FieldErrors::new();
    }

    pub fn open_edit(&mut self, row: &R) {
        self.draft = row.to_draft();
        self.mode = FormMode::Editing(row.clone());
        self.errors = FieldErrors::new();
    }

    pub fn close_form(&mut self) {
        self.mode = FormMode::Closed;
        self.draft = R::Draft::default();
        self.errors = FieldErrors::new();
    }

    /// Creates or updates from the draft, depending on the form mode.
    ///
    /// Returns `false` without any request when the form is closed or the
    /// draft fails validation; the field errors are kept for display.
    pub fn submit(&mut self) -> bool {
        self.errors = self.draft.validate();
        if !self.errors.is_empty() {
            debug!("{} draft has {} invalid field(s)", R::NOUN, self.errors.len());
            return false;
        }

        let editing = match &self.mode {
            FormMode::Closed => return false,
            FormMode::Creating => None,
            FormMode::Editing(record) => Some(record.id()),
        };

        let client = self.client.clone();
        let draft = self.draft.clone();
        match editing {
            None => {
                info!("Creating {}", R::NOUN);
                self.commit(Commit::Save, async move {
                    client
                        .create::<serde_json::Value, _>(R::ENDPOINT, &draft)
                        .await
                        .map(drop)
                });
            }
            Some(id) => {
                info!("Updating {} {id}", R::NOUN);
                self.commit(Commit::Save, async move {
                    client
                        .update::<serde_json::Value, _>(R::ENDPOINT, id, &draft)
                        .await
                        .map(drop)
                });
            }
        }
        true
    }

    pub fn request_delete(&mut self, row: &R) {
        self.pending_delete = Some(row.clone());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Deletes the row awaiting confirmation, if any.
    pub fn confirm_delete(&mut self) -> bool {
        let Some(row) = self.pending_delete.take() else {
            return false;
        };
        let id = row.id();
        info!("Deleting {} {id}", R::NOUN);

        let client = self.client.clone();
        self.commit(Commit::Delete, async move {
            client.delete(R::ENDPOINT, id).await.map(drop)
        });
        true
    }

    /// Sends the full record with its activation flag flipped.
    pub fn toggle(&mut self, row: &R) -> bool {
        let Some(draft) = row.toggled() else {
            warn!("{} has no activation flag to toggle", R::NOUN);
            return false;
        };
        let id = row.id();

        let client = self.client.clone();
        self.commit(Commit::Mutation, async move {
            client
                .update::<serde_json::Value, _>(R::ENDPOINT, id, &draft)
                .await
                .map(drop)
        });
        true
    }

    /// Runs a one-off mutation (bespoke endpoint) and refetches on success.
    pub fn run<F, Fut, T>(&mut self, mutation: F)
    where
        F: FnOnce(ApiClient) -> Fut,
        Fut: Future<Output = Result<T, RequestError>> + Send + 'static,
        T: Send + 'static,
    {
        let work = mutation(self.client.clone());
        self.commit(Commit::Mutation, async move { work.await.map(drop) });
    }

    fn commit<F>(&mut self, what: Commit, work: F)
    where
        F: Future<Output = Result<(), RequestError>> + Send + 'static,
    {
        if what == Commit::Save {
            self.saving = true;
        }
        let tx = self.tx.clone();
        self.pending += 1;
        self.scope.spawn(work, move |result| {
            let _ = tx.send(Message::Committed(what, result));
        });
    }

    /// Applies every result that has arrived. Returns whether anything did.
    pub fn poll(&mut self) -> bool {
        let messages: Vec<Message<R>> = self.rx.try_iter().collect();
        let changed = !messages.is_empty();
        for message in messages {
            self.apply(message);
        }
        changed
    }

    /// Waits until every outstanding request, including refetches triggered
    /// by their results, has been applied.
    pub async fn settle(&mut self) {
        while self.pending > 0 {
            match self.rx.recv_async().await {
                Ok(message) => self.apply(message),
                Err(_) => break,
            }
        }
    }

    /// Abandons every outstanding request.
    pub fn cancel(&mut self) {
        self.scope.cancel_all();
    }

    fn apply(&mut self, message: Message<R>) {
        self.pending = self.pending.saturating_sub(1);
        match message {
            Message::Fetched(generation, _) if generation != self.generation => {
                debug!("Dropping stale {} listing", R::ENDPOINT);
            }
            Message::Fetched(_, Ok(items)) => {
                debug!("Fetched {} {} row(s)", items.len(), R::ENDPOINT);
                self.items = items;
                self.loading = false;
                self.last_error = None;
                self.last_fetch = Some(Utc::now());
            }
            Message::Fetched(_, Err(err)) => {
                self.loading = false;
                if !err.is_cancelled() {
                    self.last_error = Some(format!("Failed to load {}: {err}", R::ENDPOINT));
                }
            }
            Message::Committed(what, Ok(())) => {
                if what == Commit::Save {
                    self.saving = false;
                    self.close_form();
                }
                self.last_error = None;
                self.load();
            }
            Message::Committed(what, Err(err)) => {
                if what == Commit::Save {
                    self.saving = false;
                }
                if !err.is_cancelled() {
                    self.last_error = Some(match what {
                        Commit::Save => format!("Failed to save {}: {err}", R::NOUN),
                        Commit::Delete => format!("Failed to delete {}: {err}", R::NOUN),
                        Commit::Mutation => format!("Failed to update {}: {err}", R::NOUN),
                    });
                }
            }
        }
    }
}

impl<R: Resource> std::fmt::Debug for EntityPage<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityPage")
            .field("endpoint", &R::ENDPOINT)
            .field("items", &self.items.len())
            .field("loading", &self.loading)
            .field("mode", &self.mode)
            .field("last_error", &self.last_error)
            .field("pending", &self.pending)
            .finish()
    }
}
