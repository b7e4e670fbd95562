//! Structural change notifications
//!
//! The graph owns a [`Notifier`] and emits one [`GraphEvent`] per successful
//! mutation, synchronously and in listener registration order. No-op
//! mutations emit nothing.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::edge::Edge;
use crate::error::GraphError;
use crate::node::Node;

/// Names of the events a graph emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    NodeAdded,
    EdgeAdded,
    NodeRemoved,
    EdgeRemoved,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::NodeAdded,
        EventKind::EdgeAdded,
        EventKind::NodeRemoved,
        EventKind::EdgeRemoved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::NodeAdded => "node.added",
            EventKind::EdgeAdded => "edge.added",
            EventKind::NodeRemoved => "node.removed",
            EventKind::EdgeRemoved => "edge.removed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GraphError::invalid_argument("event name", s))
    }
}

/// A structural change, borrowed from the graph at emission time
#[derive(Debug)]
pub enum GraphEvent<'a, P> {
    NodeAdded(&'a Node<P>),
    EdgeAdded(&'a Edge),
    NodeRemoved(&'a str),
    EdgeRemoved { source: &'a str, target: &'a str },
}

impl<P> GraphEvent<'_, P> {
    pub fn kind(&self) -> EventKind {
        match self {
            GraphEvent::NodeAdded(_) => EventKind::NodeAdded,
            GraphEvent::EdgeAdded(_) => EventKind::EdgeAdded,
            GraphEvent::NodeRemoved(_) => EventKind::NodeRemoved,
            GraphEvent::EdgeRemoved { .. } => EventKind::EdgeRemoved,
        }
    }
}

/// Handle returned on registration, used to remove a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<P> = Box<dyn FnMut(&GraphEvent<'_, P>)>;

/// Ordered listener lists keyed by event kind
pub struct Notifier<P> {
    listeners: HashMap<EventKind, Vec<(ListenerId, Listener<P>)>>,
    next_id: u64,
}

impl<P> Notifier<P> {
    pub fn new() -> Self {
        Notifier {
            listeners: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn subscribe<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: FnMut(&GraphEvent<'_, P>) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(kind)
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        for listeners in self.listeners.values_mut() {
            if let Some(pos) = listeners.iter().position(|(lid, _)| *lid == id) {
                listeners.remove(pos);
                return true;
            }
        }
        false
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    pub fn emit(&mut self, event: &GraphEvent<'_, P>) {
        if let Some(listeners) = self.listeners.get_mut(&event.kind()) {
            for (_, listener) in listeners.iter_mut() {
                listener(event);
            }
        }
    }
}

impl<P> Default for Notifier<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for Notifier<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for kind in EventKind::ALL {
            map.entry(&kind.as_str(), &self.listener_count(kind));
        }
        map.finish()
    }
}
