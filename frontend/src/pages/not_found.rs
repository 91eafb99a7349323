use crate::router::AppRoute;
use patternfly_yew::prelude::*;
use yew::prelude::*;
use yew_nested_router::components::Link;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html!(
        <PageSection variant={PageSectionVariant::Light} fill=true>
            <Bullseye>
                <Content>
                    <Title>{ "Page not found" }</Title>
                    <Link<AppRoute> target={AppRoute::Index}>
                        { "Back to the dashboard" }
                    </Link<AppRoute>>
                </Content>
            </Bullseye>
        </PageSection>
    )
}
