use yew::{html, Component, Context, Html};

pub struct Footer;

impl Component for Footer {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Footer
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <footer class="site-footer">
                <p>{"Bilal Ayub & Co. · Advocates & Legal Consultants"}</p>
                <p>{"Suite No.608, 6th floor, Al Ayesha Chamber, Karachi-74200"}</p>
            </footer>
        }
    }
}
