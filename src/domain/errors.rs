use derive_more::Display;

/// Errors surfaced by the plot. None of them is fatal to the host page:
/// configuration errors are absorbed by the facade setters and logged,
/// the rest degrade to "plot not drawn".
#[derive(Debug, Clone, PartialEq, Display)]
pub enum PlotError {
    #[display(fmt = "Invalid zoom bounds: min {} must be below max {}", min, max)]
    InvalidZoomBounds { min: f64, max: f64 },
    #[display(fmt = "Viewport has zero size")]
    EmptyViewport,
    #[display(fmt = "Invalid radius: {}", _0)]
    InvalidRadius(f64),
    #[display(fmt = "Plot is not initialized")]
    NotReady,
    #[display(fmt = "Network Error: {}", _0)]
    Network(String),
    #[display(fmt = "Data Error: {}", _0)]
    Data(String),
    #[display(fmt = "Stale response {} (latest request is {})", token, latest)]
    StaleResponse { token: u64, latest: u64 },
}

impl std::error::Error for PlotError {}

impl From<serde_json::Error> for PlotError {
    fn from(err: serde_json::Error) -> Self {
        PlotError::Data(err.to_string())
    }
}

pub type PlotResult<T> = Result<T, PlotError>;
