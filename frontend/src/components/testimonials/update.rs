//! Update function for the testimonials section.
//!
//! Elm-style: each `Msg` is applied to the `common` state machines and the
//! return value says whether to re-render. The only side effects are the
//! repository calls of a submission and the timer that hides the thank-you note.

use common::carousel::FetchDisposition;
use common::config::SUBMISSION_SUCCESS_MS;
use common::submission::{submit_testimonial, SubmitOutcome};
use gloo_console::{log, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::TestimonialsSection;

pub fn update(
    section: &mut TestimonialsSection,
    ctx: &Context<TestimonialsSection>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::FetchCompleted(ticket, result) => {
            section.carousel.on_fetch_result(ticket, result) == FetchDisposition::Applied
        }
        Msg::Previous => {
            section.carousel.previous();
            true
        }
        Msg::Next => {
            section.carousel.next();
            true
        }
        Msg::Select(index) => section.carousel.select(index),
        Msg::Key(key) => section.carousel.on_key(&key),
        Msg::ToggleForm => {
            section.form.toggle_visibility();
            true
        }
        Msg::Edit(field, value) => {
            section.form.edit(field, value);
            true
        }
        Msg::Submit => {
            let Some(candidate) = section.form.begin_submit() else {
                // Blank field or a submission already running: the store is not contacted.
                return true;
            };
            let repository = section.repository.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = submit_testimonial(repository.as_ref(), &candidate).await;
                link.send_message(Msg::SubmitFinished(outcome));
            });
            true
        }
        Msg::SubmitFinished(outcome) => {
            match &outcome {
                SubmitOutcome::VerifyFailed(e) => warn!("Duplicate check failed:", e.to_string()),
                SubmitOutcome::InsertFailed(e) => warn!("Testimonial insert failed:", e.to_string()),
                SubmitOutcome::Duplicate => log!("Rejected duplicate testimonial submission"),
                SubmitOutcome::Accepted { created, .. } => {
                    log!("Testimonial stored with id", created.id.clone())
                }
            }

            if let Some(accepted) = section.form.finish_submit(outcome) {
                if let Err(e) = &accepted.refreshed {
                    warn!("Could not refresh testimonials:", e.to_string());
                }
                section.carousel.on_refresh(accepted.refreshed);

                let ticket = accepted.success_ticket;
                let link = ctx.link().clone();
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(SUBMISSION_SUCCESS_MS).await;
                    link.send_message(Msg::ClearSuccess(ticket));
                });
            }
            true
        }
        Msg::ClearSuccess(ticket) => section.form.clear_success(ticket),
    }
}
