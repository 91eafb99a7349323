use super::View;
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[function_component(ResultsView)]
pub fn results_view() -> Html {
    html!(
        <>
            <PageSection variant={PageSectionVariant::Light}>
                <Title>{ View::Results.title() }</Title>
            </PageSection>
            <PageSection variant={PageSectionVariant::Light} fill=true>
                <Content>{ "Session results." }</Content>
            </PageSection>
        </>
    )
}
