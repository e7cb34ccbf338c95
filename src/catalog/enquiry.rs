//! WhatsApp enquiry links for product cards.

use crate::constants::enquiry::WHATSAPP_BASE_URL;
use crate::constants::pricing::CURRENCY_SYMBOL;
use crate::models::Product;

/// Prints whole prices without a fractional part (`450`, not `450.0`).
#[must_use]
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        format!("{price:.0}")
    } else {
        price.to_string()
    }
}

#[must_use]
pub fn enquiry_message(product: &Product) -> String {
    format!(
        "Hi, I'm interested in {} (Price: {}{}). Can you provide more details?",
        product.name,
        CURRENCY_SYMBOL,
        format_price(product.price)
    )
}

/// Link that opens a chat with `number` without prefilled text.
#[must_use]
pub fn contact_url(number: &str) -> String {
    format!("{WHATSAPP_BASE_URL}/{}", phone_digits(number))
}

#[must_use]
pub fn whatsapp_url(number: &str, message: &str) -> String {
    format!(
        "{}?text={}",
        contact_url(number),
        urlencoding::encode(message)
    )
}

fn phone_digits(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}
