//! ESPN fantasy football API access: routing, transport, correlation and entities.

pub mod client;
pub mod correlate;
pub mod era;
pub mod http;
pub mod query;
pub mod route;
pub mod types;

pub use client::EspnClient;
pub use era::Era;
pub use http::{ReqwestTransport, Transport};
pub use query::{BoxscoreQuery, ScheduleQuery, WeekQuery};
pub use route::Endpoints;
