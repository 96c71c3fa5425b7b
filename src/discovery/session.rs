use crate::api::{DiscoClient, PackageQuery};
use crate::discovery::index::categorize;
use crate::discovery::list::{ListStatus, PackageIndex, VersionList};
use crate::error::{KavaError, Result};
use crate::models::distribution::JavaDistribution;
use crate::models::platform::Platform;
use crate::models::version::RemoteVersion;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::thread;
use std::time::{Duration, Instant};

/// The network-bound half of discovery. Implementations run on worker
/// threads and must not touch session state.
pub trait FetchVersionList: Send + Sync {
    fn fetch(
        &self,
        distribution: JavaDistribution,
        platform: Platform,
    ) -> Result<Vec<RemoteVersion>>;
}

impl FetchVersionList for DiscoClient {
    fn fetch(
        &self,
        distribution: JavaDistribution,
        platform: Platform,
    ) -> Result<Vec<RemoteVersion>> {
        let query = PackageQuery::new()
            .distribution(distribution.api_parameter())
            .operating_system(platform.os.to_string())
            .architecture(platform.arch.to_string())
            .directly_downloadable(true);

        let packages = self.get_packages(Some(query))?;

        let mut versions = Vec::with_capacity(packages.len());
        for package in packages {
            match RemoteVersion::from_package(package) {
                Ok(version) => versions.push(version),
                Err(e) => debug!("Skipping package: {e}"),
            }
        }
        Ok(versions)
    }
}

/// Completion messages posted by fetch workers onto the session queue.
pub enum SessionEvent {
    ListLoaded {
        distribution: JavaDistribution,
        outcome: Result<PackageIndex>,
    },
}

/// Session-scoped store of version lists, one entry per distribution.
///
/// All list state lives on the thread that owns the session. Fetches
/// run on worker threads and report back through the event queue, so a
/// completion only mutates state when the owner drains the queue via
/// [`pump`](Self::pump) or [`wait_for`](Self::wait_for). A fetch is
/// started at most once per distribution per session; there is no
/// cancellation, and a completion for a distribution the caller has
/// moved away from settles into an unobserved entry.
pub struct DiscoverySession {
    platform: Platform,
    fetcher: Arc<dyn FetchVersionList>,
    lists: HashMap<JavaDistribution, VersionList>,
    events_tx: Sender<SessionEvent>,
    events_rx: Receiver<SessionEvent>,
}

impl DiscoverySession {
    pub fn new(fetcher: Arc<dyn FetchVersionList>, platform: Platform) -> Self {
        let (events_tx, events_rx) = channel();
        Self {
            platform,
            fetcher,
            lists: HashMap::new(),
            events_tx,
            events_rx,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Return the distribution's list, starting its fetch on first
    /// request. Later requests return the same entry unchanged, even
    /// after a failed load.
    pub fn get_or_fetch(&mut self, distribution: JavaDistribution) -> &VersionList {
        if !self.lists.contains_key(&distribution) {
            debug!("Starting version list fetch for {distribution}");
            self.lists.insert(distribution, VersionList::loading());
            self.spawn_fetch(distribution);
        }
        &self.lists[&distribution]
    }

    pub fn list(&self, distribution: JavaDistribution) -> Option<&VersionList> {
        self.lists.get(&distribution)
    }

    pub fn list_mut(&mut self, distribution: JavaDistribution) -> Option<&mut VersionList> {
        self.lists.get_mut(&distribution)
    }

    /// Apply any completions already sitting in the queue, without
    /// blocking.
    pub fn pump(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
        }
    }

    /// Block on the queue, applying completions as they arrive, until
    /// the distribution's list is terminal. Starts the fetch if it has
    /// not been requested yet.
    pub fn wait_for(
        &mut self,
        distribution: JavaDistribution,
        timeout: Duration,
    ) -> Result<&VersionList> {
        self.get_or_fetch(distribution);

        let deadline = Instant::now() + timeout;
        loop {
            if self
                .lists
                .get(&distribution)
                .is_some_and(|list| list.status() != ListStatus::Loading)
            {
                break;
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(KavaError::VersionListTimeout(
                    distribution.display_name().to_string(),
                ));
            }

            match self.events_rx.recv_timeout(remaining) {
                Ok(event) => self.apply(event),
                Err(RecvTimeoutError::Timeout) => {
                    return Err(KavaError::VersionListTimeout(
                        distribution.display_name().to_string(),
                    ));
                }
                // Unreachable while the session holds its own sender,
                // but the channel API demands an answer.
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(KavaError::VersionListFetch(
                        "version list event queue closed".to_string(),
                    ));
                }
            }
        }

        Ok(&self.lists[&distribution])
    }

    fn spawn_fetch(&self, distribution: JavaDistribution) {
        let fetcher = Arc::clone(&self.fetcher);
        let events_tx = self.events_tx.clone();
        let platform = self.platform;

        thread::spawn(move || {
            let outcome = fetcher.fetch(distribution, platform).map(categorize);
            // A closed queue means the session is gone; the result is
            // of no use to anyone.
            let _ = events_tx.send(SessionEvent::ListLoaded {
                distribution,
                outcome,
            });
        });
    }

    fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::ListLoaded {
                distribution,
                outcome,
            } => match self.lists.get_mut(&distribution) {
                Some(list) => list.complete(outcome),
                None => debug!("Dropping completion for unrequested distribution {distribution}"),
            },
        }
    }
}
