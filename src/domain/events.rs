use std::fmt::Debug;

use crate::domain::logging::{LogComponent, get_time_provider};
use crate::log_trace;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
    fn timestamp(&self) -> u64 {
        get_time_provider().current_timestamp()
    }
}

/// Events emitted by a needle plot instance
#[derive(Debug, Clone, PartialEq)]
pub enum PlotEvent {
    /// Geometry changed; overlays must re-anchor themselves.
    TransformChanged { scale: f64, position: f64 },
    DataLoaded { markers: usize, sites: usize },
    HeadGroupExpanded { key: String, members: usize },
    HeadGroupCollapsed { key: String },
    Destroyed,
}

impl DomainEvent for PlotEvent {
    fn event_type(&self) -> &'static str {
        match self {
            PlotEvent::TransformChanged { .. } => "TransformChanged",
            PlotEvent::DataLoaded { .. } => "DataLoaded",
            PlotEvent::HeadGroupExpanded { .. } => "HeadGroupExpanded",
            PlotEvent::HeadGroupCollapsed { .. } => "HeadGroupCollapsed",
            PlotEvent::Destroyed => "Destroyed",
        }
    }
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish(&self, event: PlotEvent);
}

/// Simple in-memory event dispatcher
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    handlers: Vec<Box<dyn Fn(&PlotEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&PlotEvent) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish(&self, event: PlotEvent) {
        log_trace!(
            LogComponent::Domain("Events"),
            "{} at {} to {} handlers",
            event.event_type(),
            event.timestamp(),
            self.handlers.len()
        );
        for handler in &self.handlers {
            handler(&event);
        }
    }
}

/// Anything layered over the plot (tooltips, popovers) that has to follow
/// the element it is attached to. Show/hide/stick stay the overlay's own
/// business; the plot only says "geometry changed".
pub trait Overlay {
    fn move_to_element(&self);
}
