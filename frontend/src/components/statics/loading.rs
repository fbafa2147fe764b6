use yew::{html, Component, Context, Html};

/// Full-section spinner shown while the page is still being configured.
pub struct Loading;

impl Component for Loading {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Loading
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="loading" role="status">
                <span class="spinner"></span>
                <span class="loading-label">{"Loading..."}</span>
            </div>
        }
    }
}
