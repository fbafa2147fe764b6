//! Page shell.
//!
//! Loads the store configuration from the hosting server once, builds the single
//! testimonial repository from it and injects that into the testimonials section.
//! Everything else on the page is static and renders immediately.

use std::rc::Rc;

use common::config::{ContactConfig, StoreConfig, STORE_KEY_VAR, STORE_URL_VAR};
use gloo_console::{log, warn};
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use crate::components::contact::ContactSection;
use crate::components::statics::about::About;
use crate::components::statics::footer::Footer;
use crate::components::statics::header::Header;
use crate::components::statics::hero::Hero;
use crate::components::statics::loading::Loading;
use crate::components::statics::services::Services;
use crate::components::testimonials::TestimonialsSection;
use crate::repository::HttpTestimonialRepository;

const CONFIG_ENDPOINT: &str = "/api/config";

pub enum Msg {
    ConfigLoaded(StoreConfig),
}

pub struct App {
    repository: Option<Rc<HttpTestimonialRepository>>,
    contact: ContactConfig,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(load_store_config().await));
        });
        Self {
            repository: None,
            contact: ContactConfig::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                if config.is_placeholder() {
                    warn!(
                        "Testimonial store is not configured; set",
                        STORE_URL_VAR,
                        "and",
                        STORE_KEY_VAR
                    );
                }
                self.repository = Some(Rc::new(HttpTestimonialRepository::new(&config)));
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <Header />
                <main>
                    <Hero />
                    <About />
                    <Services />
                    {
                        match &self.repository {
                            Some(repository) => html! {
                                <TestimonialsSection repository={repository.clone()} />
                            },
                            None => html! { <Loading /> },
                        }
                    }
                    <ContactSection config={self.contact.clone()} />
                </main>
                <Footer />
            </>
        }
    }
}

/// Asks the hosting server for the store settings. When the bundle is served
/// without it (e.g. `trunk serve`), falls back to values baked in at compile
/// time, then to the documented placeholders.
async fn load_store_config() -> StoreConfig {
    match Request::get(CONFIG_ENDPOINT).send().await {
        Ok(resp) if resp.ok() => match resp.json::<StoreConfig>().await {
            Ok(config) => return config,
            Err(e) => warn!("Invalid store configuration from server:", e.to_string()),
        },
        Ok(resp) => warn!("Store configuration endpoint answered", resp.status()),
        Err(e) => warn!("Store configuration endpoint unreachable:", e.to_string()),
    }

    log!("Using compile-time store configuration");
    StoreConfig::from_lookup(|key| match key {
        STORE_URL_VAR => option_env!("TESTIMONIAL_STORE_URL").map(str::to_string),
        STORE_KEY_VAR => option_env!("TESTIMONIAL_STORE_KEY").map(str::to_string),
        _ => None,
    })
}
