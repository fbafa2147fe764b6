use common::model::contact::{ContactField, LawArea};
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::{input_value, select_value, textarea_value};

use super::{ContactSection, Msg};

const OFFICE_HOURS: [(&str, &str); 3] = [
    ("Monday - Friday:", "9:00 AM - 6:00 PM"),
    ("Saturday:", "10:00 AM - 4:00 PM"),
    ("Sunday:", "Closed"),
];

const MAP_EMBED: &str = "https://maps.google.com/maps?q=Suite%20No.608,%206th%20floor,%20Al%20Ayesha%20Chamber,%20Karachi-74200&t=&z=15&ie=UTF8&iwloc=&output=embed";

pub fn view(section: &ContactSection, ctx: &Context<ContactSection>) -> Html {
    let link = ctx.link();

    html! {
        <section id="contact" class="contact">
            <div class="contact-banner">
                <h2>{"Get In Touch With Our Legal Experts"}</h2>
                <p>
                    {"Our experienced legal team is ready to address your inquiry with discretion, \
                      efficiency, and professionalism."}
                </p>
            </div>
            <div class="contact-grid">
                { inquiry_form(section, link) }
                { contact_details() }
            </div>
            <div class="map">
                <iframe
                    title="Suite No.608, 6th floor, Al Ayesha Chamber, Karachi-74200"
                    src={MAP_EMBED}
                    loading="lazy"
                />
            </div>
        </section>
    }
}

fn text_input(
    link: &Scope<ContactSection>,
    field: ContactField,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: &str,
) -> Html {
    html! {
        <div class="field">
            <label for={id}>{label}<span class="required">{" *"}</span></label>
            <input
                type={input_type}
                id={id}
                name={id}
                required=true
                placeholder={placeholder}
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| Msg::Edit(field, input_value(&e)))}
            />
        </div>
    }
}

fn inquiry_form(section: &ContactSection, link: &Scope<ContactSection>) -> Html {
    let inquiry = section.form.inquiry();
    let submitted = section.form.is_submitted();

    html! {
        <div class="contact-form">
            <h3>{"Contact Form"}</h3>
            <p>
                {"Complete your details below and a senior attorney will reach out shortly. \
                  All inquiries are strictly confidential."}
            </p>
            {
                if submitted {
                    html! {
                        <div class="form-success">
                            {"Thank you! We have received your message and will respond soon."}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <form onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                { text_input(link, ContactField::Name, "name", "Full Name", "text", "Your full name", &inquiry.name) }
                { text_input(link, ContactField::Email, "email", "Email Address", "email", "your.email@example.com", &inquiry.email) }
                { text_input(link, ContactField::Phone, "phone", "Phone Number", "tel", "+92 305 269 2482", &inquiry.phone) }
                <div class="field">
                    <label for="caseType">{"Area of Law"}</label>
                    <select
                        id="caseType"
                        name="caseType"
                        onchange={link.callback(|e: Event| Msg::Edit(ContactField::CaseType, select_value(&e)))}
                    >
                        <option value="" selected={inquiry.case_type.is_empty()}>{"Select an area"}</option>
                        { for LawArea::ALL.iter().map(|area| html! {
                            <option value={area.code()} selected={inquiry.case_type == area.code()}>
                                {area.label()}
                            </option>
                        }) }
                    </select>
                </div>
                { text_input(link, ContactField::Subject, "subject", "Subject", "text", "Inquiry Subject", &inquiry.subject) }
                <div class="field">
                    <label for="message">{"Your Message"}<span class="required">{" *"}</span></label>
                    <textarea
                        id="message"
                        name="message"
                        required=true
                        rows="6"
                        placeholder="Describe your legal matter in detail..."
                        value={inquiry.message.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Edit(ContactField::Message, textarea_value(&e)))}
                    />
                </div>
                <button type="submit" class="btn primary" disabled={submitted}>
                    { if submitted { "Sending..." } else { "Send via WhatsApp" } }
                </button>
            </form>
        </div>
    }
}

fn contact_details() -> Html {
    html! {
        <div class="contact-details">
            <h3>{"Firm Contact Information"}</h3>
            <p>{"Suite No.608, 6th floor, Al Ayesha Chamber, Karachi-74200"}</p>
            <p><a href="tel:+923052692482">{"+92 305 269 2482"}</a></p>
            <p><a href="mailto:m.bilalayubbhatti@gmail.com">{"m.bilalayubbhatti@gmail.com"}</a></p>
            <p><a href="https://wa.me/923052692482" target="_blank" rel="noopener">{"WhatsApp: +92 305 269 2482"}</a></p>

            <h4>{"Office Hours"}</h4>
            <dl class="hours">
                { for OFFICE_HOURS.iter().map(|(day, hours)| html! {
                    <>
                        <dt>{*day}</dt>
                        <dd>{*hours}</dd>
                    </>
                }) }
            </dl>

            <div class="emergency">
                <h4>{"Emergency Legal Line"}</h4>
                <p>{"Call our emergency lawyer hotline at any time for fast response."}</p>
                <a class="btn outline" href="tel:+923052692482">{"+92 305 269 2482"}</a>
            </div>
        </div>
    }
}
