//! Diary detail editor: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering
//! and helpers.
//!
//! On first render the record is fetched and reconciled against any pending
//! drafts; a 404 for a freshly generated id means a new entry and starts
//! from an empty record. A 401 redirects to sign-in, leaving drafts in
//! sessionStorage for after re-authentication.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::record::DiaryRecord;

use crate::api::{self, FetchError};

mod helpers;
mod messages;
mod props;
mod state;
mod styles;
mod update;
mod view;

pub use messages::Msg;
pub use props::DiaryDetailProps;
pub use state::DiaryDetail;

impl Component for DiaryDetail {
    type Message = Msg;
    type Properties = DiaryDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        DiaryDetail::new(ctx.props().record_id.clone())
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

            let link = ctx.link().clone();
            let record_id = self.record_id.clone();
            let is_new = self.is_new;
            spawn_local(async move {
                match api::fetch_record(&record_id).await {
                    Ok(record) => link.send_message(Msg::RecordLoaded(record)),
                    Err(FetchError::Unauthorized) => api::redirect_to_sign_in(),
                    Err(FetchError::Rejected { status: 404, .. }) if is_new => {
                        link.send_message(Msg::RecordLoaded(DiaryRecord::empty(record_id.clone())));
                    }
                    Err(err) => link.send_message(Msg::RecordLoadFailed(err)),
                }
            });
        }
    }
}
