//! Image block: one labelled image with automatic fallback.
//!
//! The retry order lives in `common::image::ImageState`; this component only
//! forwards the browser's `load` and `error` events to it and renders the
//! active candidate or the placeholder.

use common::image::ImageState;
use gloo_console::log;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageBlockProps {
    /// Caption and `alt` text.
    pub label: AttrValue,
    /// Photo value as stored on the record.
    #[prop_or_default]
    pub src: AttrValue,
}

pub enum Msg {
    Loaded,
    Failed,
    OpenInNewTab,
}

pub struct ImageBlock {
    state: ImageState,
}

impl Component for ImageBlock {
    type Message = Msg;
    type Properties = ImageBlockProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: ImageState::new(&ctx.props().src),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().src != old_props.src {
            self.state = ImageState::new(&ctx.props().src);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded => {
                self.state.on_load();
                false
            }
            Msg::Failed => {
                let changed = self.state.on_error();
                if changed && self.state.active_url().is_none() {
                    log!(format!("No candidate could be loaded for {}", ctx.props().label));
                }
                changed
            }
            Msg::OpenInNewTab => {
                if let (Some(url), Some(window)) = (self.state.active_url(), web_sys::window()) {
                    window
                        .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
                        .ok();
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let label = ctx.props().label.clone();

        html! {
            <div class="image-block">
                <div class="image-frame">
                    <img
                        src={self.state.display_src().to_string()}
                        alt={label.clone()}
                        loading="eager"
                        referrerpolicy="no-referrer"
                        crossorigin="anonymous"
                        onload={link.callback(|_: Event| Msg::Loaded)}
                        onerror={link.callback(|_: Event| Msg::Failed)}
                    />
                </div>
                <div class="image-label">{ label.to_string() }</div>
                <button
                    type="button"
                    class="open-button"
                    onclick={link.callback(|_| Msg::OpenInNewTab)}
                    disabled={self.state.active_url().is_none()}
                >
                    {"Open in new tab"}
                </button>
            </div>
        }
    }
}
