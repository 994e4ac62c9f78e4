use crate::components::lookup::LookupComponent;
use common::config::AppConfig;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: AppConfig,
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-shell">
                <LookupComponent data_url={ctx.props().config.data_url.clone()} />
            </div>
        }
    }
}
