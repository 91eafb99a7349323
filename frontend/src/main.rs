use lap_tracker_frontend::{
    app,
    router::{self, Navigator, RouteTable},
};
use wasm_bindgen::prelude::*;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Info;
#[cfg(debug_assertions)]
const LOG_LEVEL: log::Level = log::Level::Trace;

pub fn main() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));

    let table = RouteTable::standard().map_err(|err| JsValue::from_str(&err.to_string()))?;
    table
        .verify_targets()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    let navigator = router::install(Navigator::new(table, router::HISTORY))
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    log::info!(
        "Starting with {} routes ({:?} history), initial route: {:?}",
        navigator.table().len(),
        navigator.strategy(),
        navigator.current().map(|r| r.name)
    );

    yew::Renderer::<app::Application>::new().render();
    Ok(())
}
