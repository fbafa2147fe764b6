//! Contact section: an inquiry form that hands off to a messaging app through a
//! pre-filled deep link, plus the firm's contact details and office hours.
//!
//! There is no server round trip. After submit the button stays disabled and a
//! confirmation shows for a fixed period, whether or not the message was sent.

use common::config::{ContactConfig, CONTACT_CONFIRMATION_MS};
use common::model::contact::{ConfirmationTicket, ContactField, ContactForm};
use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::open_in_new_tab;

mod view;

pub enum Msg {
    Edit(ContactField, String),
    Submit,
    ClearSubmitted(ConfirmationTicket),
}

#[derive(Properties, PartialEq, Clone)]
pub struct ContactProps {
    pub config: ContactConfig,
}

pub struct ContactSection {
    pub form: ContactForm,
}

impl Component for ContactSection {
    type Message = Msg;
    type Properties = ContactProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                self.form.edit(field, value);
                true
            }
            Msg::Submit => {
                let Some((url, ticket)) = self.form.submit(&ctx.props().config) else {
                    return false;
                };
                if open_in_new_tab(&url) {
                    log!("Opened messaging deep link");
                }

                let link = ctx.link().clone();
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(CONTACT_CONFIRMATION_MS).await;
                    link.send_message(Msg::ClearSubmitted(ticket));
                });
                true
            }
            Msg::ClearSubmitted(ticket) => self.form.clear_submitted(ticket),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
