use yew::prelude::*;
use log::{error, info};
use stylist::yew::Global;

mod config;
mod theme;
mod timeline;
mod visibility;
mod devotional {
    pub mod months;
    pub mod calendar;
    pub mod stagger;
    pub mod carousel;
    pub mod typewriter;
}
mod components {
    pub mod scheduler;
    pub mod reveal;
    pub mod typewriter;
    pub mod month_preview;
    pub mod cta;
    pub mod star_rating;
}
mod pages {
    pub mod landing;
    pub mod faq;
}

use devotional::months::{validate_months, MONTHS};
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    let global = match theme::global_style() {
        Ok(css) => html! { <Global {css} /> },
        Err(e) => {
            error!("Failed to parse the global stylesheet: {}", e);
            html! {}
        }
    };

    html! {
        <>
            { global }
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    // The page still renders with bad content, the preview just looks off
    if let Err(e) = validate_months(&MONTHS) {
        error!("Month content is inconsistent: {}", e);
    }

    info!("Starting Devocional 365");
    yew::Renderer::<App>::new().render();
}
