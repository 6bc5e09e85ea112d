//! Small utilities shared by the diary editor's update and view logic.

use num_format::{Buffer, Locale};
use regex::Regex;
use serde_json::Value;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use common::model::record::FieldMap;

/// Shows a temporary notification at the bottom of the screen.
///
/// Injects a styled `div` that removes itself after a few seconds. Used for
/// save confirmations, recovered-draft notices and commit failures.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// String value of a form field, empty when absent or non-string.
pub fn field_str(form: &FieldMap, name: &str) -> String {
    form.get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Boolean value of a form field, false when absent.
pub fn field_bool(form: &FieldMap, name: &str) -> bool {
    form.get(name).and_then(Value::as_bool).unwrap_or(false)
}

/// Order references look like `AB-12345`: a short letter prefix, a dash and
/// the numeric order number. An empty value is fine (nothing ordered yet).
pub fn is_valid_order_ref(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    let re = Regex::new(r"^[A-Za-z]{2,4}-[0-9]{3,8}$").unwrap();
    re.is_match(value)
}

/// Formats an amount in cents as a grouped currency string, e.g. `$1,234.50`.
/// Negative amounts carry the sign ahead of the currency symbol.
pub fn format_amount_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let whole = (cents / 100).abs();
    let fraction = (cents % 100).abs();
    let mut buf = Buffer::default();
    buf.write_formatted(&whole, &Locale::en);
    format!("{}${}.{:02}", sign, buf.as_str(), fraction)
}

/// Human-readable age of the record's last-modified marker.
pub fn relative_updated(updated_at_secs: i64, now_ms: f64) -> String {
    if updated_at_secs <= 0 {
        return "never saved".to_string();
    }
    let elapsed_secs = (now_ms / 1000.0) as i64 - updated_at_secs;
    if elapsed_secs < 60 {
        "updated just now".to_string()
    } else if elapsed_secs < 3600 {
        format!("updated {}m ago", elapsed_secs / 60)
    } else if elapsed_secs < 86_400 {
        format!("updated {}h ago", elapsed_secs / 3600)
    } else {
        format!("updated {}d ago", elapsed_secs / 86_400)
    }
}

/// Sum of the `amount_cents` of every product line.
pub fn lines_total_cents(lines: &[Value]) -> i64 {
    lines
        .iter()
        .map(|line| {
            line.get("amount_cents")
                .and_then(Value::as_i64)
                .unwrap_or(0)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_ref_validation() {
        assert!(is_valid_order_ref(""));
        assert!(is_valid_order_ref("AB-12345"));
        assert!(is_valid_order_ref("ord-001"));
        assert!(!is_valid_order_ref("12345"));
        assert!(!is_valid_order_ref("AB_12345"));
        assert!(!is_valid_order_ref("A-123"));
    }

    #[test]
    fn amount_formatting_groups_thousands() {
        assert_eq!(format_amount_cents(123450), "$1,234.50");
        assert_eq!(format_amount_cents(5), "$0.05");
        assert_eq!(format_amount_cents(0), "$0.00");
        assert_eq!(format_amount_cents(-123450), "-$1,234.50");
        assert_eq!(format_amount_cents(-5), "-$0.05");
    }

    #[test]
    fn relative_updated_buckets_by_age() {
        assert_eq!(relative_updated(0, 1000.0), "never saved");
        assert_eq!(relative_updated(100, 110_000.0), "updated just now");
        assert_eq!(relative_updated(1000, (1000 + 120) as f64 * 1000.0), "updated 2m ago");
        assert_eq!(relative_updated(1000, (1000 + 7200) as f64 * 1000.0), "updated 2h ago");
        assert_eq!(relative_updated(1000, (1000 + 200_000) as f64 * 1000.0), "updated 2d ago");
    }

    #[test]
    fn line_totals_ignore_malformed_entries() {
        let lines = vec![
            json!({"description": "frame", "amount_cents": 2500}),
            json!({"description": "glass"}),
            json!({"description": "fitting", "amount_cents": 1000}),
        ];
        assert_eq!(lines_total_cents(&lines), 3500);
    }
}
