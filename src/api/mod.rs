mod client;
mod models;
mod query;

pub use client::DiscoClient;
pub use models::{Distribution, Links, Package};
pub use query::PackageQuery;
