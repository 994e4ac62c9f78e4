//! View rendering for the lookup component.
//!
//! Two sections: the search panel (input, submit button, quick-fill chips)
//! and the result area, which shows the loading panel, the selected record
//! with its two image blocks, or an empty state carrying the current message.

use common::model::SubmissionRecord;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::LookupComponent;
use crate::components::image_block::ImageBlock;

pub fn view(component: &LookupComponent, ctx: &Context<LookupComponent>) -> Html {
    let link = ctx.link();

    html! {
        <>
            <section class="panel">
                { build_search_form(component, link) }
            </section>
            <section class="result-area">
                { build_result_area(component) }
            </section>
        </>
    }
}

/// Search form with the id input and the quick-fill chips.
fn build_search_form(component: &LookupComponent, link: &Scope<LookupComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateQuery(input.value())
    });

    html! {
        <form class="search-form" {onsubmit}>
            <label for="submissionId">{"Submission ID"}</label>
            <div class="input-row">
                <input
                    id="submissionId"
                    name="submissionId"
                    value={component.query.clone()}
                    {oninput}
                    placeholder="e.g. bfcd74b0"
                    autocomplete="off"
                />
                <button type="submit">{"Show details"}</button>
            </div>
            <p class="helper">
                {"Tip: match the value exactly as it appears in the sheet. IDs are case-insensitive here."}
            </p>
            { build_chips(component, link) }
        </form>
    }
}

/// Quick-fill buttons for every known id. Clicking fills the input only.
fn build_chips(component: &LookupComponent, link: &Scope<LookupComponent>) -> Html {
    let ids = component.store.ids();
    if ids.is_empty() {
        return html! {};
    }

    let chips = ids
        .into_iter()
        .enumerate()
        .map(|(idx, id)| {
            let value = id.to_string();
            html! {
                <button
                    key={format!("{idx}-{id}")}
                    type="button"
                    class="chip"
                    onclick={link.callback(move |_| Msg::QuickFill(value.clone()))}
                >
                    { id.to_string() }
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="chips">
            <span class="chip-label">{"Try:"}</span>
            { chips }
        </div>
    }
}

fn build_result_area(component: &LookupComponent) -> Html {
    if component.loading {
        return html! {
            <div class="empty-state">
                <h3>{"Loading rows…"}</h3>
                <p>{"Fetching the latest submissions from your sheet."}</p>
            </div>
        };
    }

    match component.lookup.selected() {
        Some(record) => build_record(record),
        None => html! {
            <div class="empty-state">
                <h3>{"No submission selected"}</h3>
                <p>{ component.empty_state_message() }</p>
            </div>
        },
    }
}

/// Result card plus the photo and village photo blocks.
fn build_record(record: &SubmissionRecord) -> Html {
    let details = record
        .detail_rows()
        .into_iter()
        .map(|(label, value)| {
            html! {
                <div key={label} class="detail-item">
                    <p class="detail-label">{ label }</p>
                    <p class="detail-value">{ value }</p>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <div class="result-card">
                <div class="result-head">
                    <div>
                        <p class="eyebrow">{"Result"}</p>
                        <h2>{ format!("Submission {}", record.submission_id) }</h2>
                    </div>
                    <div class="pill">{ record.status_label().to_string() }</div>
                </div>
                <div class="details-grid">
                    { details }
                </div>
            </div>

            <div class="image-grid">
                <ImageBlock label="Photo" src={record.photo.clone()} />
                <ImageBlock label="Village Photo" src={record.village_photo.clone()} />
            </div>
        </>
    }
}
