//! Interval-driven polling of the TV.
//!
//! A [`Coordinator`] owns one [`DataSource`] and caches the latest result
//! of polling it. Views read [`Snapshot`]s from it while refreshes run.

use std::future::Future;
use std::time::Duration;

use log::{debug, warn};
use serde_json::Value;
use tokio::sync::RwLock;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::errors::Error;
use crate::snapshot::Snapshot;

type Result<T> = std::result::Result<T, Error>;

/// How often the configured state (power, brightness, effect) is polled.
pub const CONFIG_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// How often the measured LED colors are polled.
pub const MEASURED_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Something that can be polled for a JSON snapshot, usually the TV's API
/// client.
pub trait DataSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<Value>> + Send;
}

#[derive(Debug, Default)]
struct CoordinatorState {
    data: Option<Value>,
    last_update_success: bool,
    last_error: Option<String>,
    last_refresh: Option<Instant>,
}

/// Caches the latest poll result of a [`DataSource`].
///
/// # Example
///
/// ```
/// use ambilight_rs::coordinator::{Coordinator, DataSource};
/// use ambilight_rs::{average_all, Color, Error};
/// use serde_json::{json, Value};
///
/// struct FixedTv;
///
/// impl DataSource for FixedTv {
///     async fn fetch(&self) -> Result<Value, Error> {
///         Ok(json!({ "left": { "0": [10, 20, 30] } }))
///     }
/// }
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let coordinator = Coordinator::measured(FixedTv);
/// coordinator.refresh().await.unwrap();
/// let snapshot = coordinator.snapshot().await;
/// assert_eq!(average_all(snapshot.fresh().unwrap()), Some(Color::rgb(10, 20, 30)));
/// # });
/// ```
#[derive(Debug)]
pub struct Coordinator<S> {
    name: String,
    source: S,
    interval: Duration,
    state: RwLock<CoordinatorState>,
}

impl<S: DataSource> Coordinator<S> {
    pub fn new(name: &str, source: S, interval: Duration) -> Self {
        Coordinator {
            name: name.to_string(),
            source,
            interval,
            state: RwLock::new(CoordinatorState::default()),
        }
    }

    /// Coordinator for the configured state, polled every 30 seconds.
    pub fn config(source: S) -> Self {
        Self::new("custom_ambilight_config", source, CONFIG_POLL_INTERVAL)
    }

    /// Coordinator for the measured colors, polled twice a second.
    pub fn measured(source: S) -> Self {
        Self::new("custom_ambilight_measured", source, MEASURED_POLL_INTERVAL)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Poll the source once.
    ///
    /// On failure the previous data is kept and the error is returned.
    pub async fn refresh(&self) -> Result<()> {
        let result = self.source.fetch().await;
        let mut state = self.state.write().await;
        state.last_refresh = Some(Instant::now());

        match result {
            Ok(data) => {
                debug!("{} refreshed", self.name);
                state.data = Some(data);
                state.last_update_success = true;
                state.last_error = None;
                Ok(())
            }
            Err(e) => {
                let reason = e.to_string();
                warn!("{} refresh failed: {}", self.name, reason);
                state.last_update_success = false;
                state.last_error = Some(reason.clone());
                Err(Error::refresh(&self.name, &reason))
            }
        }
    }

    /// Data of the last successful refresh.
    pub async fn data(&self) -> Option<Value> {
        self.state.read().await.data.clone()
    }

    pub async fn last_update_success(&self) -> bool {
        self.state.read().await.last_update_success
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error.clone()
    }

    /// Time since the last refresh attempt, successful or not.
    pub async fn since_last_refresh(&self) -> Option<Duration> {
        self.state.read().await.last_refresh.map(|t| t.elapsed())
    }

    pub async fn snapshot(&self) -> Snapshot {
        let state = self.state.read().await;
        Snapshot {
            data: state.data.clone(),
            last_update_success: state.last_update_success,
        }
    }

    /// Refresh every interval until the returned future is dropped.
    ///
    /// Failures are logged by [`Coordinator::refresh`] and do not stop the
    /// loop.
    pub async fn run(&self) {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let _ = self.refresh().await;
        }
    }
}
