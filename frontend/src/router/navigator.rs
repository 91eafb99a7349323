use super::{
    history::{strip_fragment, strip_query},
    HistoryStrategy, Route, RouteError, RouteTable,
};
use once_cell::sync::OnceCell;

static NAVIGATOR: OnceCell<Navigator> = OnceCell::new();

/// Install the process-wide navigator. Can only be done once.
pub fn install(navigator: Navigator) -> Result<&'static Navigator, RouteError> {
    NAVIGATOR
        .try_insert(navigator)
        .map_err(|_| RouteError::AlreadyInstalled)
}

/// The process-wide navigator, if one was installed.
pub fn navigator() -> Option<&'static Navigator> {
    NAVIGATOR.get()
}

/// Resolves URLs to routes of a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    table: RouteTable,
    strategy: HistoryStrategy,
}

impl Navigator {
    pub fn new(table: RouteTable, strategy: HistoryStrategy) -> Self {
        Self { table, strategy }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn routes(&self) -> &[Route] {
        self.table.routes()
    }

    pub fn strategy(&self) -> HistoryStrategy {
        self.strategy
    }

    /// Resolve a URL path by exact match, ignoring query and fragment.
    pub fn resolve(&self, url: &str) -> Option<&Route> {
        let path = strip_query(strip_fragment(url));
        let route = self.table.by_path(path);
        log::debug!("Resolved {url:?} to {:?}", route.map(|r| r.name));
        route
    }

    /// Resolve a browser location according to the history strategy.
    pub fn resolve_location(&self, location: &str) -> Option<&Route> {
        self.resolve(self.strategy.route_path(location))
    }

    /// The location under which the named route is reachable.
    pub fn href(&self, name: &str) -> Option<String> {
        self.table
            .by_name(name)
            .map(|route| self.strategy.location(route.path))
    }

    /// Resolve the live browser location.
    pub fn current(&self) -> Option<&Route> {
        let location = self
            .strategy
            .current_location()
            .unwrap_or_else(|| "/".to_string());

        let route = self.resolve_location(&location);
        if route.is_none() {
            log::warn!("No route for location: {location}");
        }
        route
    }
}
