//! View rendering for the testimonials section: the submission form (toggled by
//! a button) above the carousel with its controls and pagination dots.

use common::carousel::{CarouselDisplay, CarouselState};
use common::model::testimonial::DraftField;
use common::submission::MSG_THANK_YOU;
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::{input_value, textarea_value};

use super::messages::Msg;
use super::state::TestimonialsSection;

pub fn view(section: &TestimonialsSection, ctx: &Context<TestimonialsSection>) -> Html {
    let link = ctx.link();

    html! {
        <section id="testimonials" class="testimonials">
            <div class="section-heading">
                <h2>{"Client Testimonials"}</h2>
                <p>{"Hear what our clients have to say about working with Bilal Ayub & Co."}</p>
            </div>

            <div class="testimonial-form-area">
                <button
                    class="btn primary small"
                    aria-expanded={section.form.is_visible().to_string()}
                    onclick={link.callback(|_| Msg::ToggleForm)}
                >
                    { if section.form.is_visible() { "Cancel" } else { "Submit Your Own Testimonial" } }
                </button>
                { if section.form.is_visible() { submission_form(section, link) } else { html! {} } }
                {
                    if section.form.success() {
                        html! { <div class="form-success">{MSG_THANK_YOU}</div> }
                    } else {
                        html! {}
                    }
                }
            </div>

            { carousel(section, link) }
        </section>
    }
}

fn submission_form(section: &TestimonialsSection, link: &Scope<TestimonialsSection>) -> Html {
    let draft = section.form.draft();

    html! {
        <form
            class="testimonial-form"
            aria-label="Submit testimonial"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            <h3>{"Share Your Experience"}</h3>
            <label for="testimonial-name">{"Your Name"}</label>
            <input
                id="testimonial-name"
                type="text"
                value={draft.name.clone()}
                oninput={link.callback(|e: InputEvent| Msg::Edit(DraftField::Name, input_value(&e)))}
                required=true
            />
            <label for="testimonial-role">
                {"Case Type / Your Relationship (e.g., Property Law Client)"}
            </label>
            <input
                id="testimonial-role"
                type="text"
                value={draft.role.clone()}
                oninput={link.callback(|e: InputEvent| Msg::Edit(DraftField::Role, input_value(&e)))}
                required=true
            />
            <label for="testimonial-review">{"Your Testimonial"}</label>
            <textarea
                id="testimonial-review"
                rows="4"
                value={draft.review.clone()}
                oninput={link.callback(|e: InputEvent| Msg::Edit(DraftField::Review, textarea_value(&e)))}
                required=true
            />
            {
                match section.form.error() {
                    Some(error) => html! { <div class="form-error" role="alert">{error.to_string()}</div> },
                    None => html! {},
                }
            }
            <button type="submit" class="btn primary" disabled={section.form.is_submitting()}>
                { if section.form.is_submitting() { "Submitting..." } else { "Submit" } }
            </button>
        </form>
    }
}

fn carousel(section: &TestimonialsSection, link: &Scope<TestimonialsSection>) -> Html {
    let carousel = &section.carousel;
    let nav_disabled = !carousel.navigation_enabled();

    let card = match carousel.display() {
        CarouselDisplay::Showing(testimonial) => html! {
            <div class="testimonial-card" key={testimonial.id.clone()}>
                <p class="quote">{format!("\"{}\"", testimonial.review)}</p>
                <div class="author">{testimonial.name.clone()}</div>
                <div class="author-role">{testimonial.role.clone()}</div>
            </div>
        },
        CarouselDisplay::Placeholder => html! {
            <div class="testimonial-card" key="placeholder">
                <p class="quote muted">{"Loading testimonial..."}</p>
            </div>
        },
    };

    html! {
        <div
            class="carousel"
            tabindex="0"
            aria-label="Testimonials carousel"
            onkeydown={link.batch_callback(|e: KeyboardEvent| {
                let key = e.key();
                if !CarouselState::handles_key(&key) {
                    return None;
                }
                e.prevent_default();
                Some(Msg::Key(key))
            })}
        >
            { card }
            <div class="carousel-controls">
                <button
                    type="button"
                    class="round"
                    aria-label="Previous testimonial"
                    disabled={nav_disabled}
                    onclick={link.callback(|_| Msg::Previous)}
                >
                    {"‹"}
                </button>
                <div class="dots">
                    { for carousel.items().iter().enumerate().map(|(i, testimonial)| {
                        let class = if i == carousel.current() { "dot active" } else { "dot" };
                        html! {
                            <button
                                type="button"
                                key={testimonial.id.clone()}
                                class={class}
                                aria-label={format!("Show testimonial {}", i + 1)}
                                disabled={carousel.is_loading()}
                                onclick={link.callback(move |_| Msg::Select(i))}
                            />
                        }
                    }) }
                </div>
                <button
                    type="button"
                    class="round"
                    aria-label="Next testimonial"
                    disabled={nav_disabled}
                    onclick={link.callback(|_| Msg::Next)}
                >
                    {"›"}
                </button>
            </div>
            <div class="carousel-count">{carousel.count_label()}</div>
        </div>
    }
}
