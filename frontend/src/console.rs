use crate::{
    pages,
    router::{self, AppRoute, Navigator, Route},
};
use patternfly_yew::prelude::*;
use yew::prelude::*;
use yew_nested_router::prelude::{Switch as RouterSwitch, *};

#[function_component(Console)]
pub fn console() -> Html {
    let logo = html!(
        <span class="pf-u-font-size-xl pf-u-color-light-100">{ "Lap Tracker" }</span>
    );

    let entries = router::navigator()
        .map(|nav| {
            nav.routes()
                .iter()
                .filter_map(|route| Some((*route, target(nav, route)?)))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let sidebar = html_nested!(
        <PageSidebar>
            <Nav>
                <NavList>
                    { for entries.into_iter().map(|(route, target)| html!(
                        <NavRouterItem<AppRoute> to={target}>
                            { route.view.title() }
                        </NavRouterItem<AppRoute>>
                    ))}
                </NavList>
            </Nav>
        </PageSidebar>
    );

    html!(
        <Router<AppRoute>>
            <Page {logo} {sidebar}>
                <RouterSwitch<AppRoute> {render} default={html!(<pages::NotFound/>)}/>
            </Page>
        </Router<AppRoute>>
    )
}

/// The router target linking to a route, following the navigator's href.
fn target(nav: &Navigator, route: &Route) -> Option<AppRoute> {
    let href = nav.href(route.name)?;
    AppRoute::for_path(nav.strategy().route_path(&href))
}

fn render(route: AppRoute) -> Html {
    log::info!("Route: {route:?}");

    match router::navigator().and_then(|nav| nav.current()) {
        Some(active) => {
            if active.view != route.view() {
                log::warn!("Router target {route:?} disagrees with route {}", active.name);
            }
            active.view.render()
        }
        None => html!(<pages::NotFound/>),
    }
}
