/// How navigable URLs are represented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryStrategy {
    /// HTML5 history API, the route path is the URL path.
    #[default]
    Web,
    /// The route path is carried in the URL fragment.
    Hash,
    /// No browser URL, locations are route paths.
    Memory,
}

impl HistoryStrategy {
    /// Extract the route path from a location of the form `path?query#fragment`.
    pub fn route_path<'a>(&self, location: &'a str) -> &'a str {
        match self {
            Self::Web | Self::Memory => strip_query(strip_fragment(location)),
            Self::Hash => match location.split_once('#') {
                Some((_, fragment)) => match strip_query(fragment) {
                    "" => "/",
                    path => path,
                },
                None => "/",
            },
        }
    }

    /// Render the location a route path is reachable under.
    pub fn location(&self, path: &str) -> String {
        match self {
            Self::Web | Self::Memory => path.to_string(),
            Self::Hash => format!("/#{path}"),
        }
    }

    /// The live location of the browser window, if this strategy has one.
    pub fn current_location(&self) -> Option<String> {
        let location = match self {
            Self::Memory => return None,
            Self::Web | Self::Hash => gloo_utils::window().location(),
        };

        let path = location.pathname().ok()?;
        Some(match self {
            Self::Hash => format!("{path}{}", location.hash().unwrap_or_default()),
            _ => path,
        })
    }
}

pub(crate) fn strip_fragment(url: &str) -> &str {
    url.split_once('#').map(|(path, _)| path).unwrap_or(url)
}

pub(crate) fn strip_query(url: &str) -> &str {
    url.split_once('?').map(|(path, _)| path).unwrap_or(url)
}
