//! Small browser utilities shared by the components.

use gloo_console::warn;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Opens `url` in a new browsing context. Returns `false` when the browser
/// refused (popup blockers answer with a null window).
pub fn open_in_new_tab(url: &str) -> bool {
    let opened = web_sys::window()
        .and_then(|w| w.open_with_url_and_target(url, "_blank").ok())
        .flatten()
        .is_some();
    if !opened {
        warn!("The browser blocked opening", url.to_string());
    }
    opened
}

pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}
