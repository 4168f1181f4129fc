//! Browser-side adapters: console logging, wall clock and HTTP.

pub mod http;
pub mod services;

pub use http::PlotDataClient;
pub use services::{BrowserTimeProvider, ConsoleLogger};
