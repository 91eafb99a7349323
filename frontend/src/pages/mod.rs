use yew::prelude::*;

mod dashboard;
mod not_found;
mod results;

pub use dashboard::*;
pub use not_found::*;
pub use results::*;

/// A view which can be mounted for an active route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    LapDashboard,
    Results,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::LapDashboard => "Lap Dashboard",
            Self::Results => "Results",
        }
    }

    pub fn render(&self) -> Html {
        match self {
            Self::LapDashboard => html!(<LapDashboard/>),
            Self::Results => html!(<ResultsView/>),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(View::LapDashboard.title(), "Lap Dashboard");
        assert_eq!(View::Results.title(), "Results");
    }
}
