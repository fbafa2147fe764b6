use common::model::contact::LawArea;
use yew::{html, Component, Context, Html};

/// Practice areas, rendered from the same table the contact form uses so the
/// two never drift apart.
pub struct Services;

impl Component for Services {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Services
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section id="services" class="services">
                <h2>{"Our Practice Areas"}</h2>
                <p class="section-lead">{"Comprehensive legal services for individuals and businesses."}</p>
                <div class="card-grid">
                    { for LawArea::ALL.iter().filter(|a| **a != LawArea::Other).map(|area| html! {
                        <article class="card">
                            <h3>{area.label()}</h3>
                            <p>{area.summary()}</p>
                        </article>
                    }) }
                </div>
            </section>
        }
    }
}
