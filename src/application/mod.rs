pub mod data_loader;
pub mod needle_plot;
pub mod overlay;

pub use data_loader::{DataLoader, RequestToken, RequestTracker};
pub use needle_plot::{NeedlePlot, PlotCallbacks};
pub use overlay::{Rect, TooltipAnchor, clamp_into_viewport};
