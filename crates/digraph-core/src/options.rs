//! Option types for edge creation and route queries

/// Options for creating an edge
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeOptions {
    /// Cost of traversing the edge, summed into route weights
    pub weight: f64,
}

impl EdgeOptions {
    pub fn weighted(weight: f64) -> Self {
        EdgeOptions { weight }
    }
}

/// Constraints a discovered route must satisfy to be returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteFilter {
    /// Exact number of nodes in the route path
    pub length: Option<usize>,
}

impl RouteFilter {
    pub fn accepts(&self, path_len: usize) -> bool {
        self.length.is_none_or(|length| length == path_len)
    }
}

/// Options for route enumeration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteQuery {
    /// Head of every returned route (required)
    pub from: Option<String>,
    /// Only return routes ending at this node
    pub to: Option<String>,
    pub filter: RouteFilter,
}

impl RouteQuery {
    pub fn starting_at(from: impl Into<String>) -> Self {
        RouteQuery {
            from: Some(from.into()),
            ..Default::default()
        }
    }

    pub fn to(mut self, target: impl Into<String>) -> Self {
        self.to = Some(target.into());
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.filter.length = Some(length);
        self
    }
}
