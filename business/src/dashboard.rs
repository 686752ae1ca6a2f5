//! Overview numbers and API health for the landing page.

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::api::{ApiClient, HealthStatus, RequestError};
use crate::entities::{CustomerReview, Project, Resource, Service, Subscriber};
use crate::scope::TaskScope;

/// Row counts shown on the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub subscribers: u64,
    pub reviews: u64,
    pub services: u64,
    pub projects: u64,
}

enum Message {
    Stats(Result<DashboardStats, RequestError>),
    Health(Result<HealthStatus, RequestError>),
}

pub struct DashboardState {
    /// `None` until the first complete batch of counts arrives.
    pub stats: Option<DashboardStats>,
    pub health: Option<HealthStatus>,
    pub health_error: Option<String>,
    pub loading: bool,
    pub last_error: Option<String>,
    pub last_fetch: Option<DateTime<Utc>>,

    client: ApiClient,
    scope: TaskScope,
    tx: flume::Sender<Message>,
    rx: flume::Receiver<Message>,
    pending: usize,
}

impl DashboardState {
    pub fn new(client: ApiClient) -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            stats: None,
            health: None,
            health_error: None,
            loading: false,
            last_error: None,
            last_fetch: None,
            client,
            scope: TaskScope::new(),
            tx,
            rx,
            pending: 0,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }

    /// Fetches the four counts together and the health status separately.
    ///
    /// The counts are all-or-nothing: one failure discards the whole batch.
    pub fn refresh(&mut self) {
        info!("Refreshing dashboard");
        self.loading = true;

        let client = self.client.clone();
        let tx = self.tx.clone();
        self.pending += 1;
        self.scope.spawn(
            async move {
                let (subscribers, reviews, services, projects) = tokio::try_join!(
                    client.count(Subscriber::ENDPOINT),
                    client.count(CustomerReview::ENDPOINT),
                    client.count(Service::ENDPOINT),
                    client.count(Project::ENDPOINT),
                )?;
                Ok(DashboardStats {
                    subscribers,
                    reviews,
                    services,
                    projects,
                })
            },
            move |result| {
                let _ = tx.send(Message::Stats(result));
            },
        );

        let client = self.client.clone();
        let tx = self.tx.clone();
        self.pending += 1;
        self.scope.spawn(
            async move {
                let response = client.health().await?;
                Ok(response.data.unwrap_or_default())
            },
            move |result| {
                let _ = tx.send(Message::Health(result));
            },
        );
    }

    pub fn poll(&mut self) -> bool {
        let messages: Vec<Message> = self.rx.try_iter().collect();
        let changed = !messages.is_empty();
        for message in messages {
            self.apply(message);
        }
        changed
    }

    /// Abandons the outstanding refresh, if any.
    pub fn cancel(&mut self) {
        self.scope.cancel_all();
    }

    pub async fn settle(&mut self) {
        while self.pending > 0 {
            match self.rx.recv_async().await {
                Ok(message) => self.apply(message),
                Err(_) => break,
            }
        }
    }

    fn apply(&mut self, message: Message) {
        self.pending = self.pending.saturating_sub(1);
        match message {
            Message::Stats(Ok(stats)) => {
                debug!("Dashboard stats: {stats:?}");
                self.stats = Some(stats);
                self.loading = false;
                self.last_error = None;
                self.last_fetch = Some(Utc::now());
            }
            Message::Stats(Err(err)) => {
                self.loading = false;
                if !err.is_cancelled() {
                    self.last_error = Some(format!("Failed to load statistics: {err}"));
                }
            }
            Message::Health(Ok(health)) => {
                self.health = Some(health);
                self.health_error = None;
            }
            Message::Health(Err(err)) => {
                if !err.is_cancelled() {
                    self.health = None;
                    self.health_error = Some(err.to_string());
                }
            }
        }
    }
}

impl std::fmt::Debug for DashboardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardState")
            .field("stats", &self.stats)
            .field("health", &self.health)
            .field("loading", &self.loading)
            .field("last_error", &self.last_error)
            .finish()
    }
}
