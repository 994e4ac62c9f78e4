use crate::app::{App, AppProps};
use common::config::AppConfig;

mod app;
mod components;
mod data_source;

fn main() {
    let config = AppConfig::from_value(option_env!("SUBMISSIONS_URL"));
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
