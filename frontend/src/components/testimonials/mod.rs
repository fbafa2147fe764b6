//! Client testimonials: a keyboard-navigable carousel over the stored
//! testimonials and a form for visitors to add their own.
//!
//! Responsibilities
//! - Fetch the list once when the section is created; discard the result if the
//!   section is gone by the time it arrives.
//! - Delegate every state change to `update::update` and rendering to `view::view`.
//! - Deactivate the carousel on destroy so late results are ignored.

use common::repository::TestimonialRepository;
use gloo_console::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::TestimonialsProps;
pub use state::TestimonialsSection;

impl Component for TestimonialsSection {
    type Message = Msg;
    type Properties = TestimonialsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut section = TestimonialsSection::new(ctx.props().repository.clone());
        fetch_testimonials(&mut section, ctx);
        section
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.carousel.deactivate();
    }
}

/// Starts a list fetch; the result comes back as `Msg::FetchCompleted`.
fn fetch_testimonials(section: &mut TestimonialsSection, ctx: &Context<TestimonialsSection>) {
    let ticket = section.carousel.on_fetch_start();
    let repository = section.repository.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = repository.list_all().await;
        if let Err(e) = &result {
            warn!("Could not load testimonials:", e.to_string());
        }
        link.send_message(Msg::FetchCompleted(ticket, result));
    });
}
