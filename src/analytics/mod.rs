pub mod tracker;

pub use tracker::{AnalyticsEvent, Tracker};
