//! Update function for the lookup component.
//!
//! Elm-style: receives the state, the `Context` and a `Msg`, mutates the state
//! and returns whether the view should re-render.

use common::lookup::lookup;
use gloo_console::{error, log};
use yew::prelude::*;

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::LookupComponent;

pub fn update(component: &mut LookupComponent, _ctx: &Context<LookupComponent>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateQuery(query) => {
            if component.query == query {
                return false;
            }
            component.query = query;
            true
        }
        Msg::Submit => {
            component.lookup = lookup(&component.store, &component.query);
            true
        }
        Msg::QuickFill(id) => {
            component.query = id;
            true
        }
        Msg::Loaded(records) => {
            log!(format!("Loaded {} submissions", records.len()));
            // Single assignment; the collection is never patched in place.
            component.store.replace(records);
            component.fetch_error = None;
            component.loading = false;
            true
        }
        Msg::LoadFailed(err) => {
            let message = err.to_string();
            error!(format!("Submission load failed: {message}"));
            show_toast(&message);
            component.fetch_error = Some(message);
            component.loading = false;
            true
        }
    }
}
