use crate::pages::View;
use yew_nested_router::Target;

mod history;
mod navigator;

pub use history::*;
pub use navigator::*;

/// The history strategy the application navigates with.
pub const HISTORY: HistoryStrategy = HistoryStrategy::Web;

/// The static route table of the application.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "LapDashboard",
        view: View::LapDashboard,
    },
    Route {
        path: "/results",
        name: "Results",
        view: View::Results,
    },
];

const _: () = assert!(
    unique_paths_and_names(ROUTES),
    "route paths and names must be unique"
);

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("duplicate route path: {0}")]
    DuplicatePath(&'static str),
    #[error("duplicate route name: {0}")]
    DuplicateName(&'static str),
    #[error("route path must start with '/': {0:?}")]
    InvalidPath(&'static str),
    #[error("route path is not served by the router: {0}")]
    Unrouted(&'static str),
    #[error("navigator already installed")]
    AlreadyInstalled,
}

/// An association of an exact path with a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table, rejecting duplicate paths or names.
    pub fn new(routes: impl IntoIterator<Item = Route>) -> Result<Self, RouteError> {
        let mut table: Vec<Route> = Vec::new();

        for route in routes {
            if !route.path.starts_with('/') {
                return Err(RouteError::InvalidPath(route.path));
            }
            if table.iter().any(|r| r.path == route.path) {
                return Err(RouteError::DuplicatePath(route.path));
            }
            if table.iter().any(|r| r.name == route.name) {
                return Err(RouteError::DuplicateName(route.name));
            }
            table.push(route);
        }

        Ok(Self { routes: table })
    }

    pub fn standard() -> Result<Self, RouteError> {
        Self::new(ROUTES.iter().copied())
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn by_path(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Check that the router serves every path with the route's view.
    pub fn verify_targets(&self) -> Result<(), RouteError> {
        for route in &self.routes {
            match AppRoute::for_path(route.path) {
                Some(target) if target.view() == route.view => {}
                _ => return Err(RouteError::Unrouted(route.path)),
            }
        }
        Ok(())
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn unique_paths_and_names(routes: &[Route]) -> bool {
    let mut i = 0;
    while i < routes.len() {
        let mut j = i + 1;
        while j < routes.len() {
            if str_eq(routes[i].path, routes[j].path) || str_eq(routes[i].name, routes[j].name) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Target of the browser history router.
#[derive(Clone, Debug, Default, PartialEq, Eq, Target)]
pub enum AppRoute {
    #[default]
    #[target(index)]
    Index,
    Results,
}

impl AppRoute {
    pub fn view(&self) -> View {
        match self {
            Self::Index => View::LapDashboard,
            Self::Results => View::Results,
        }
    }

    /// Parse a route path into a router target.
    pub fn for_path(path: &str) -> Option<Self> {
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();
        Self::parse_path(&segments)
    }

    pub fn from_view(view: View) -> Self {
        match view {
            View::LapDashboard => Self::Index,
            View::Results => Self::Results,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn route(path: &'static str, name: &'static str) -> Route {
        Route {
            path,
            name,
            view: View::LapDashboard,
        }
    }

    #[test]
    fn test_standard_table() {
        let table = RouteTable::standard().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.by_path("/").map(|r| r.name), Some("LapDashboard"));
        assert_eq!(table.by_path("/results").map(|r| r.name), Some("Results"));
        assert_eq!(table.by_name("Results").map(|r| r.view), Some(View::Results));
    }

    #[test]
    fn test_unique_paths_and_names() {
        let table = RouteTable::standard().unwrap();
        let routes = table.routes();
        for (i, a) in routes.iter().enumerate() {
            for b in &routes[i + 1..] {
                assert_ne!(a.path, b.path);
                assert_ne!(a.name, b.name);
            }
        }
        assert!(unique_paths_and_names(ROUTES));
    }

    #[test]
    fn test_duplicate_path() {
        let result = RouteTable::new([route("/", "a"), route("/", "b")]);
        assert_eq!(result, Err(RouteError::DuplicatePath("/")));
        assert!(!unique_paths_and_names(&[route("/", "a"), route("/", "b")]));
    }

    #[test]
    fn test_duplicate_name() {
        let result = RouteTable::new([route("/", "a"), route("/b", "a")]);
        assert_eq!(result, Err(RouteError::DuplicateName("a")));
        assert!(!unique_paths_and_names(&[route("/", "a"), route("/b", "a")]));
    }

    #[test]
    fn test_invalid_path() {
        let result = RouteTable::new([route("results", "Results")]);
        assert_eq!(result, Err(RouteError::InvalidPath("results")));
    }

    #[test]
    fn test_empty_table() {
        let table = RouteTable::new(std::iter::empty()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.by_path("/"), None);
    }

    #[test]
    fn test_app_route_views() {
        for route in ROUTES {
            assert_eq!(AppRoute::from_view(route.view).view(), route.view);
        }
        assert_eq!(AppRoute::default().view(), View::LapDashboard);
    }

    #[test]
    fn test_app_route_paths() {
        for route in ROUTES {
            let target = AppRoute::from_view(route.view);
            assert_eq!(AppRoute::for_path(route.path), Some(target.clone()));
            assert_eq!(format!("/{}", target.render_path().join("/")), route.path);
        }
        assert_eq!(AppRoute::for_path("/foo"), None);
    }

    #[test]
    fn test_verify_targets() {
        assert_eq!(RouteTable::standard().unwrap().verify_targets(), Ok(()));

        let moved = RouteTable::new([
            route("/", "LapDashboard"),
            Route {
                path: "/standings",
                name: "Results",
                view: View::Results,
            },
        ])
        .unwrap();
        assert_eq!(moved.verify_targets(), Err(RouteError::Unrouted("/standings")));

        let swapped = RouteTable::new([Route {
            path: "/results",
            name: "Results",
            view: View::LapDashboard,
        }])
        .unwrap();
        assert_eq!(swapped.verify_targets(), Err(RouteError::Unrouted("/results")));
    }
}
