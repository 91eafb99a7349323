use crate::console::Console;
use yew::prelude::*;

#[function_component(Application)]
pub fn app() -> Html {
    html!(<Console />)
}
