//! Submission lookup page: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic and view rendering.
//!
//! On first render, when a data source is configured, the rows are fetched
//! once and handed to `update` as `Msg::Loaded` or `Msg::LoadFailed`.

use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::data_source::load_from;
pub use messages::Msg;
pub use props::LookupProps;
pub use state::LookupComponent;

impl Component for LookupComponent {
    type Message = Msg;
    type Properties = LookupProps;

    fn create(ctx: &Context<Self>) -> Self {
        LookupComponent::new(ctx.props().data_url.is_some())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            if let Some(url) = ctx.props().data_url.clone() {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match load_from(&url).await {
                        Ok(records) => link.send_message(Msg::Loaded(records)),
                        Err(err) => link.send_message(Msg::LoadFailed(err)),
                    }
                });
            }
        }
    }
}
