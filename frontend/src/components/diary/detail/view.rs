//! View rendering for the diary detail editor.

use serde_json::{json, Value};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use common::model::draft::Concern;
use common::model::record::{fields, status};

use crate::editor::session::EditorPhase;

use super::helpers::{
    field_bool, field_str, format_amount_cents, is_valid_order_ref, lines_total_cents,
    relative_updated,
};
use super::messages::Msg;
use super::state::{DiaryDetail, EditorTab};
use super::styles;

pub fn view(component: &DiaryDetail, ctx: &Context<DiaryDetail>) -> Html {
    html! {
        <div style={styles::PAGE}>
            <h2>{ if component.is_new { "New diary entry" } else { "Diary entry" } }</h2>
            if let Some(record) = component.records.get(&component.record_id) {
                <p style={styles::FIELD_LABEL}>
                    { relative_updated(record.updated_at, js_sys::Date::now()) }
                </p>
            }
            if let Some(error) = &component.load_error {
                <div style={styles::ERROR_BANNER}>{ error.clone() }</div>
            }
            { tab_bar(component, ctx) }
            {
                match component.active_tab {
                    EditorTab::Details => details_tab(component, ctx),
                    EditorTab::FollowUp => follow_up_tab(component, ctx),
                    EditorTab::Products => products_tab(component, ctx),
                }
            }
        </div>
    }
}

fn tab_bar(component: &DiaryDetail, ctx: &Context<DiaryDetail>) -> Html {
    let tabs = [EditorTab::Details, EditorTab::FollowUp, EditorTab::Products];
    html! {
        <div style={styles::TAB_BAR}>
            { for tabs.iter().map(|tab| {
                let tab = *tab;
                let active = component.active_tab == tab;
                let dirty = component.session(tab.concern()).is_dirty();
                let onclick = ctx.link().callback(move |_| Msg::SetTab(tab));
                html! {
                    <button
                        style={if active { styles::TAB_ACTIVE } else { styles::TAB_IDLE }}
                        {onclick}
                    >
                        { tab.label() }
                        if dirty { <span>{ " \u{25CF}" }</span> }
                    </button>
                }
            }) }
        </div>
    }
}

fn details_tab(component: &DiaryDetail, ctx: &Context<DiaryDetail>) -> Html {
    let form = component.details.form();
    let order_ref = field_str(form, fields::ORDER_REF);
    let order_ref_hint = if is_valid_order_ref(&order_ref) {
        None
    } else {
        Some("Expected a reference like AB-12345")
    };
    html! {
        <div>
            { text_field(ctx, "Customer name", Concern::DiaryFields, fields::CUSTOMER_NAME,
                field_str(form, fields::CUSTOMER_NAME), None) }
            { text_field(ctx, "Phone", Concern::DiaryFields, fields::PHONE,
                field_str(form, fields::PHONE), None) }
            { text_field(ctx, "Order reference", Concern::DiaryFields, fields::ORDER_REF,
                order_ref, order_ref_hint) }
            { status_select(ctx, &field_str(form, fields::STATUS)) }
            { paid_checkbox(ctx, field_bool(form, fields::IS_PAID)) }
            { action_row(component, ctx, Concern::DiaryFields) }
        </div>
    }
}

fn follow_up_tab(component: &DiaryDetail, ctx: &Context<DiaryDetail>) -> Html {
    let note = field_str(component.follow_up.form(), fields::FOLLOWUP_NOTE);
    let oninput = ctx.link().callback(|e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::EditField {
            concern: Concern::FollowUpComposer,
            field: fields::FOLLOWUP_NOTE.to_string(),
            value: json!(textarea.value()),
        }
    });
    html! {
        <div>
            <div style={styles::FIELD_ROW}>
                <label style={styles::FIELD_LABEL}>{ "Follow-up note" }</label>
                <textarea style={styles::FIELD_INPUT} rows="8" value={note} {oninput} />
            </div>
            { action_row(component, ctx, Concern::FollowUpComposer) }
        </div>
    }
}

fn products_tab(component: &DiaryDetail, ctx: &Context<DiaryDetail>) -> Html {
    let lines = component.product_lines();
    let total = format_amount_cents(lines_total_cents(&lines));
    let add = ctx.link().callback(|_| Msg::AddProductLine);
    html! {
        <div>
            { for lines.iter().enumerate().map(|(index, line)| product_line_row(ctx, index, line)) }
            <div style={styles::BUTTON_ROW}>
                <button style={styles::DISCARD_BUTTON} onclick={add}>{ "Add line" }</button>
            </div>
            <div style={styles::TOTAL_ROW}>{ format!("Total: {}", total) }</div>
            { action_row(component, ctx, Concern::ProductLines) }
        </div>
    }
}

fn product_line_row(ctx: &Context<DiaryDetail>, index: usize, line: &Value) -> Html {
    let description = line
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let quantity = line
        .get("quantity")
        .and_then(Value::as_i64)
        .unwrap_or(1)
        .to_string();
    let amount = line
        .get("amount_cents")
        .and_then(Value::as_i64)
        .unwrap_or(0)
        .to_string();

    let on_description = ctx.link().callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditProductLine {
            index,
            field: "description".to_string(),
            value: json!(input.value()),
        }
    });
    let on_quantity = ctx.link().callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditProductLine {
            index,
            field: "quantity".to_string(),
            value: json!(input.value().parse::<i64>().unwrap_or(1)),
        }
    });
    let on_amount = ctx.link().callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditProductLine {
            index,
            field: "amount_cents".to_string(),
            value: json!(input.value().parse::<i64>().unwrap_or(0)),
        }
    });
    let on_remove = ctx.link().callback(move |_| Msg::RemoveProductLine(index));

    html! {
        <div style={styles::LINE_ROW}>
            <input style={styles::FIELD_INPUT} placeholder="Description"
                value={description} oninput={on_description} />
            <input style={styles::FIELD_INPUT} type="number" min="1" placeholder="Qty"
                value={quantity} oninput={on_quantity} />
            <input style={styles::FIELD_INPUT} type="number" min="0" placeholder="Amount (cents)"
                value={amount} oninput={on_amount} />
            <button style={styles::DISCARD_BUTTON} onclick={on_remove}>{ "Remove" }</button>
        </div>
    }
}

fn text_field(
    ctx: &Context<DiaryDetail>,
    label: &str,
    concern: Concern,
    name: &'static str,
    value: String,
    hint: Option<&str>,
) -> Html {
    let oninput = ctx.link().callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditField {
            concern,
            field: name.to_string(),
            value: json!(input.value()),
        }
    });
    html! {
        <div style={styles::FIELD_ROW}>
            <label style={styles::FIELD_LABEL}>{ label }</label>
            <input style={styles::FIELD_INPUT} {value} {oninput} />
            if let Some(hint) = hint {
                <span style={styles::FIELD_HINT}>{ hint }</span>
            }
        </div>
    }
}

fn status_select(ctx: &Context<DiaryDetail>, current: &str) -> Html {
    let onchange = ctx.link().callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::EditField {
            concern: Concern::DiaryFields,
            field: fields::STATUS.to_string(),
            value: json!(select.value()),
        }
    });
    html! {
        <div style={styles::FIELD_ROW}>
            <label style={styles::FIELD_LABEL}>{ "Status" }</label>
            <select style={styles::FIELD_INPUT} {onchange}>
                { for status::ALL.iter().map(|value| html! {
                    <option value={*value} selected={current == *value}>{ *value }</option>
                }) }
            </select>
        </div>
    }
}

fn paid_checkbox(ctx: &Context<DiaryDetail>, checked: bool) -> Html {
    let onchange = ctx.link().callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditField {
            concern: Concern::DiaryFields,
            field: fields::IS_PAID.to_string(),
            value: json!(input.checked()),
        }
    });
    html! {
        <div style={styles::FIELD_ROW}>
            <label style={styles::FIELD_LABEL}>
                <input type="checkbox" {checked} {onchange} />
                { " Paid" }
            </label>
        </div>
    }
}

fn action_row(component: &DiaryDetail, ctx: &Context<DiaryDetail>, concern: Concern) -> Html {
    let phase = component.session(concern).phase();
    let save = ctx.link().callback(move |_| Msg::Save(concern));
    let discard = ctx.link().callback(move |_| Msg::Discard(concern));
    let save_label = if phase == EditorPhase::Committing {
        "Saving\u{2026}"
    } else {
        "Save"
    };
    html! {
        <div style={styles::BUTTON_ROW}>
            <button
                style={styles::SAVE_BUTTON}
                disabled={phase == EditorPhase::Clean}
                onclick={save}
            >
                { save_label }
            </button>
            <button
                style={styles::DISCARD_BUTTON}
                disabled={phase == EditorPhase::Clean}
                onclick={discard}
            >
                { "Discard" }
            </button>
        </div>
    }
}
