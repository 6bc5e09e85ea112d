use yew::{html, Component, Context, Html};

use crate::components::diary::detail::DiaryDetail;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let record_id = current_record_id();
        html! {
            <div>
                <DiaryDetail {record_id} />
            </div>
        }
    }
}

/// Record id from the `id` query parameter, if the page was opened on one.
fn current_record_id() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    record_id_from_query(&search)
}

fn record_id_from_query(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("id="))
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::record_id_from_query;

    #[test]
    fn extracts_id_from_query_string() {
        assert_eq!(
            record_id_from_query("?tab=details&id=abc-123"),
            Some("abc-123".to_string())
        );
        assert_eq!(record_id_from_query("?id="), None);
        assert_eq!(record_id_from_query(""), None);
    }
}
