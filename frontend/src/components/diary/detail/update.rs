//! Update function for the diary detail editor.
//!
//! Elm-style: receives the current state, the context and a `Msg`, mutates
//! the state and returns whether the view should re-render. All commit
//! outcomes are recovered here; nothing throws past this boundary.

use serde_json::{json, Value};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::draft::Concern;
use common::model::record::fields;

use crate::api::{self, FetchError};

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::DiaryDetail;

pub fn update(component: &mut DiaryDetail, ctx: &Context<DiaryDetail>, msg: Msg) -> bool {
    match msg {
        Msg::RecordLoaded(record) => {
            component.records.replace(record.clone());
            component.details.load_record(record.clone());
            component.follow_up.load_record(record.clone());
            component.lines.load_record(record);
            component.load_error = None;
            if component.details.is_dirty()
                || component.follow_up.is_dirty()
                || component.lines.is_dirty()
            {
                show_toast("Recovered unsaved changes from your last visit.");
            }
            true
        }
        Msg::RecordLoadFailed(err) => {
            // Drafts stay put for a later retry; nothing is fabricated.
            component.details.load_failed();
            component.follow_up.load_failed();
            component.lines.load_failed();
            component.load_error = Some(err.to_string());
            show_toast(&format!("Could not load the diary entry: {}", err));
            true
        }
        Msg::SetTab(tab) => {
            if tab == component.active_tab {
                return false;
            }
            let leaving = component.active_concern();
            component.active_tab = tab;
            // Flush the surface being left so its edits are not stranded.
            if component.session(leaving).is_dirty() {
                component.autosave.cancel();
                start_commit(component, ctx, leaving);
            }
            true
        }
        Msg::EditField {
            concern,
            field,
            value,
        } => {
            component.session_mut(concern).edit(field, value);
            schedule_autosave(component, ctx, concern);
            true
        }
        Msg::Save(concern) => {
            component.autosave.cancel();
            start_commit(component, ctx, concern);
            true
        }
        Msg::AutoSave(concern) => {
            start_commit(component, ctx, concern);
            true
        }
        Msg::CommitFinished { ticket, result } => {
            let concern = ticket.concern;
            match result {
                Ok(record) => {
                    component.records.replace(record.clone());
                    let cleared = component
                        .session_mut(concern)
                        .commit_succeeded(&ticket, record);
                    if cleared {
                        show_toast("Saved.");
                    } else {
                        // A newer edit arrived mid-flight; commit it on the
                        // usual debounce cycle.
                        schedule_autosave(component, ctx, concern);
                    }
                }
                Err(FetchError::Unauthorized) => {
                    component.session_mut(concern).commit_failed(&ticket);
                    api::redirect_to_sign_in();
                }
                Err(err) => {
                    component.session_mut(concern).commit_failed(&ticket);
                    show_toast(&format!("Could not save: {}", err));
                }
            }
            true
        }
        Msg::Discard(concern) => {
            component.autosave.cancel();
            component.session_mut(concern).discard();
            show_toast("Changes discarded.");
            true
        }
        Msg::AddProductLine => {
            let mut lines = component.product_lines();
            lines.push(json!({
                "description": "",
                "quantity": 1,
                "amount_cents": 0,
            }));
            set_product_lines(component, ctx, lines);
            true
        }
        Msg::RemoveProductLine(index) => {
            let mut lines = component.product_lines();
            if index < lines.len() {
                lines.remove(index);
                set_product_lines(component, ctx, lines);
                return true;
            }
            false
        }
        Msg::EditProductLine {
            index,
            field,
            value,
        } => {
            let mut lines = component.product_lines();
            match lines.get_mut(index).and_then(Value::as_object_mut) {
                Some(line) => {
                    line.insert(field, value);
                    set_product_lines(component, ctx, lines);
                    true
                }
                None => false,
            }
        }
    }
}

fn set_product_lines(component: &mut DiaryDetail, ctx: &Context<DiaryDetail>, lines: Vec<Value>) {
    component
        .lines
        .edit(fields::PRODUCT_LINES, Value::Array(lines));
    schedule_autosave(component, ctx, Concern::ProductLines);
}

fn schedule_autosave(component: &DiaryDetail, ctx: &Context<DiaryDetail>, concern: Concern) {
    let link = ctx.link().clone();
    component
        .autosave
        .schedule(move || link.send_message(Msg::AutoSave(concern)));
}

/// Kicks off a commit for one surface unless one is already in flight or
/// there is nothing to send; the response comes back as `CommitFinished`.
fn start_commit(component: &mut DiaryDetail, ctx: &Context<DiaryDetail>, concern: Concern) {
    if let Some(ticket) = component.session_mut(concern).begin_commit() {
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = api::commit_record(&ticket.record_id, &ticket.payload).await;
            link.send_message(Msg::CommitFinished { ticket, result });
        });
    }
}
