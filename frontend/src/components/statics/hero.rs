use yew::{html, Component, Context, Html};

pub struct Hero;

impl Component for Hero {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Hero
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section id="home" class="hero">
                <div class="hero-text">
                    <h1>{"Trusted Legal Counsel in Karachi"}</h1>
                    <p>
                        {"Bilal Ayub & Co. provides dedicated representation in civil, criminal, \
                          family, property and corporate matters, with the care every client deserves."}
                    </p>
                    <div class="hero-actions">
                        <a class="btn primary" href="#contact">{"Book a Consultation"}</a>
                        <a class="btn outline" href="tel:+923052692482">{"Call +92 305 269 2482"}</a>
                    </div>
                </div>
                <div class="hero-portrait" aria-hidden="true">
                    <span class="monogram">{"BA"}</span>
                </div>
            </section>
        }
    }
}
