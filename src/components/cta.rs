use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub large: bool,
    /// Defaults to the offer section.
    #[prop_or(AttrValue::Static(config::OFFER_ANCHOR))]
    pub href: AttrValue,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    html! {
        <a href={props.href.clone()} class={classes!("cta-button", "cta-pulse", props.large.then(|| "large"))}>
            {props.text.clone()}
            <span class="cta-arrow">{"→"}</span>
        </a>
    }
}

/// Pill in the corner that follows the reader once they are past the hero.
#[function_component(FloatingCta)]
pub fn floating_cta() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let shown = scroll_y > config::FLOATING_CTA_SCROLL_Y;

    html! {
        <div class={classes!("floating-cta", shown.then(|| "shown"))}>
            <a href={config::OFFER_ANCHOR}>{"♡ Quero começar"}</a>
        </div>
    }
}
