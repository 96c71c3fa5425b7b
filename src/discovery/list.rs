use crate::error::Result;
use crate::models::package::JavaPackageType;
use crate::models::version::RemoteVersion;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::collections::BTreeMap;

/// Versions grouped by package type, each group ordered newest major first.
pub type PackageIndex = BTreeMap<JavaPackageType, Vec<RemoteVersion>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Success,
    Failed,
}

pub type ListObserver = Box<dyn FnMut(&VersionList)>;

enum ListState {
    Loading,
    Ready(PackageIndex),
    Failed,
}

/// One distribution's asynchronously loaded version list.
///
/// The entry starts `Loading` and completes exactly once, to `Success`
/// (carrying the categorized versions) or `Failed`. There is no retry:
/// a terminal entry is replayed for the rest of the session.
pub struct VersionList {
    state: ListState,
    observer: Option<ListObserver>,
    loaded_at: Option<DateTime<Utc>>,
}

impl VersionList {
    pub(crate) fn loading() -> Self {
        Self {
            state: ListState::Loading,
            observer: None,
            loaded_at: None,
        }
    }

    pub fn status(&self) -> ListStatus {
        match self.state {
            ListState::Loading => ListStatus::Loading,
            ListState::Ready(_) => ListStatus::Success,
            ListState::Failed => ListStatus::Failed,
        }
    }

    /// The categorized versions; present exactly when `status()` is
    /// `Success`. An empty index means the fetch succeeded but nothing
    /// is on offer, which is not a failure.
    pub fn versions(&self) -> Option<&PackageIndex> {
        match &self.state {
            ListState::Ready(index) => Some(index),
            _ => None,
        }
    }

    pub fn versions_for(&self, package_type: JavaPackageType) -> Option<&[RemoteVersion]> {
        self.versions()
            .and_then(|index| index.get(&package_type))
            .map(Vec::as_slice)
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Attach the observer, replacing any previous one. Only the UI
    /// element currently displaying this distribution may hold the slot;
    /// it must call [`unsubscribe`](Self::unsubscribe) when it stops
    /// displaying it, so a stale observer never fires.
    pub fn subscribe(&mut self, observer: ListObserver) {
        self.observer = Some(observer);
    }

    pub fn unsubscribe(&mut self) {
        self.observer = None;
    }

    pub(crate) fn complete(&mut self, outcome: Result<PackageIndex>) {
        if !matches!(self.state, ListState::Loading) {
            debug!("Ignoring completion for an already terminal version list");
            return;
        }

        match outcome {
            Ok(index) => {
                self.state = ListState::Ready(index);
            }
            Err(e) => {
                warn!("Failed to load version list: {e}");
                self.state = ListState::Failed;
            }
        }
        self.loaded_at = Some(Utc::now());
        self.notify();
    }

    fn notify(&mut self) {
        // The slot is emptied for the duration of the call; observers
        // only see the list through `&`, so they cannot re-subscribe
        // from inside the callback.
        if let Some(mut observer) = self.observer.take() {
            observer(self);
            self.observer = Some(observer);
        }
    }
}
