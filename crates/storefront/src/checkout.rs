//! WhatsApp checkout handoff formatting.
//!
//! Checkout is an enquiry, not a payment: the cart is serialized into a
//! human-readable WhatsApp message plus a `wa.me` deep link, and the UI
//! shell opens the link. Both functions are pure string construction -
//! no I/O, no side effects.

use gilded_hamper_core::Price;

use crate::cart::CartLine;

const ENQUIRY_HEADER: &str = "🌸 *Gilded Hamper Co. — Gift Enquiry*";
const ENQUIRY_FOOTER: &str = "Please confirm availability and final pricing. Thank you! 🙏";

/// Render the cart as a WhatsApp enquiry message.
///
/// One bullet line per cart line (name, optional code, quantity, line
/// total), then the estimated total and a fixed confirmation request.
#[must_use]
pub fn format_whatsapp_message(lines: &[CartLine], total: Price) -> String {
    let body = lines
        .iter()
        .map(|line| {
            let code = if line.product.code.is_empty() {
                String::new()
            } else {
                format!(" ({})", line.product.code)
            };
            format!(
                "• *{}*{} ×{} — {}",
                line.product.name,
                code,
                line.quantity,
                line.line_total()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{ENQUIRY_HEADER}\n\n{body}\n\n💰 *Estimated Total: {total}*\n\n{ENQUIRY_FOOTER}"
    )
}

/// Build the `wa.me` deep link carrying a message.
///
/// The phone number is a bare digit string (validated at config load); the
/// message is URL-encoded into the `text` parameter.
#[must_use]
pub fn build_deep_link(phone_number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{phone_number}?text={}",
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use gilded_hamper_core::ProductId;

    use crate::catalog::Product;

    use super::*;

    fn line(name: &str, code: &str, price: i64, quantity: u32) -> CartLine {
        CartLine {
            product: Product {
                id: ProductId::new(name.to_lowercase()),
                name: name.to_owned(),
                code: code.to_owned(),
                description: String::new(),
                items: Vec::new(),
                price: Price::new(price),
                category: "womensday".to_owned(),
                featured: false,
                image: None,
            },
            quantity,
        }
    }

    #[test]
    fn message_lists_each_line_with_totals() {
        let lines = vec![
            line("Glam Starter Kit", "WD1", 999, 2),
            line("Spa Hamper", "", 1299, 1),
        ];
        let message = format_whatsapp_message(&lines, Price::new(3297));

        assert!(message.contains("• *Glam Starter Kit* (WD1) ×2 — ₹1,998"));
        // No code means no parenthesised code tag.
        assert!(message.contains("• *Spa Hamper* ×1 — ₹1,299"));
        assert!(message.contains("Estimated Total: ₹3,297"));
        assert!(message.starts_with(ENQUIRY_HEADER));
        assert!(message.ends_with(ENQUIRY_FOOTER));
    }

    #[test]
    fn deep_link_url_encodes_the_message() {
        let link = build_deep_link("919999999999", "Gift Enquiry: ₹1,499 & more");

        assert!(link.starts_with("https://wa.me/919999999999?text="));
        assert!(!link.contains(' '));
        // The ampersand inside the message must not survive as a raw
        // query-string separator.
        assert!(!link.contains('&'));
        assert!(link.contains("%20"));
    }

    #[test]
    fn deep_link_round_trips_through_decode() {
        let message = "🌸 Total: ₹2,500\nThank you!";
        let link = build_deep_link("911234567890", message);

        let encoded = link
            .split("text=")
            .nth(1)
            .expect("link carries a text parameter");
        assert_eq!(urlencoding::decode(encoded).expect("valid encoding"), message);
    }
}
