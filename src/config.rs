use log::Level;

/// In-page anchor of the offer section that every call-to-action scrolls to.
pub const OFFER_ANCHOR: &str = "#oferta";

/// Scroll distance after which the floating call-to-action appears.
pub const FLOATING_CTA_SCROLL_Y: f64 = 900.0;

/// External checkout link, baked in at build time through
/// `DEVOCIONAL_CHECKOUT_URL`. Without it the buttons fall back to the offer.
pub fn get_checkout_url() -> &'static str {
    match option_env!("DEVOCIONAL_CHECKOUT_URL") {
        Some(url) => url,
        None => OFFER_ANCHOR,
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
