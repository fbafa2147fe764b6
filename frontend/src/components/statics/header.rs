use yew::{html, Component, Context, Html};

/// In-page navigation targets, in display order.
const NAV_ITEMS: [(&str, &str); 5] = [
    ("Home", "#home"),
    ("About", "#about"),
    ("Services", "#services"),
    ("Testimonials", "#testimonials"),
    ("Contact", "#contact"),
];

pub enum Msg {
    ToggleMenu,
    CloseMenu,
}

pub struct Header {
    menu_open: bool,
}

impl Component for Header {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { menu_open: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => self.menu_open = !self.menu_open,
            Msg::CloseMenu => self.menu_open = false,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let nav_class = if self.menu_open { "site-nav open" } else { "site-nav" };

        html! {
            <header class="site-header">
                <a class="brand" href="#home" aria-label="Home">{"Bilal Ayub & Co."}</a>
                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded={self.menu_open.to_string()}
                    onclick={link.callback(|_| Msg::ToggleMenu)}
                >
                    {"☰"}
                </button>
                <nav class={nav_class}>
                    { for NAV_ITEMS.iter().map(|(name, href)| html! {
                        <a href={*href} onclick={link.callback(|_| Msg::CloseMenu)}>{*name}</a>
                    }) }
                    <a class="nav-cta" href="#contact" onclick={link.callback(|_| Msg::CloseMenu)}>
                        {"Free Consultation"}
                    </a>
                </nav>
            </header>
        }
    }
}
