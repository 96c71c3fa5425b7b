//! Session-scoped discovery of downloadable Java runtimes: per-distribution
//! version lists loaded off-thread, and selection reconciliation across
//! list reloads.

mod index;
mod list;
mod reconcile;
mod session;

pub use index::categorize;
pub use list::{ListObserver, ListStatus, PackageIndex, VersionList};
pub use reconcile::reconcile;
pub use session::{DiscoverySession, FetchVersionList, SessionEvent};
