use super::View;
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[function_component(LapDashboard)]
pub fn lap_dashboard() -> Html {
    html!(
        <>
            <PageSection variant={PageSectionVariant::Light}>
                <Title>{ View::LapDashboard.title() }</Title>
            </PageSection>
            <PageSection variant={PageSectionVariant::Light} fill=true>
                <Content>{ "Live lap timing." }</Content>
            </PageSection>
        </>
    )
}
