//! Order message
//!
//! Serialises the cart into the WhatsApp order text and its deep link. The
//! message is assembled as a list of lines and joined at the end; every
//! optional section is included only when its field is present, so building
//! never fails, even on an empty cart.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{cart::Cart, config::StoreInfo, money::format_ars, shipping::FREE_PICKUP_ZIP};

/// Bytes escaped when embedding the message in the deep link. Everything
/// outside the unreserved set of `encodeURIComponent`.
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the order summary text for the current cart state.
///
/// Sections, in order: header, customer details, numbered product lines in
/// insertion order, shipping, grand total, the store's fixed payment
/// instructions, and the closing receipt request.
#[must_use]
pub fn order_message(cart: &Cart, store: &StoreInfo) -> String {
    let mut lines = vec![format!("🛍️ *Nuevo Pedido - {}*", store.name)];

    let contact = contact_lines(cart);
    if !contact.is_empty() {
        lines.push(String::new());
        lines.extend(contact);
    }

    lines.push(String::new());
    lines.push("📦 Productos:".to_string());

    for (index, item) in cart.items().iter().enumerate() {
        lines.push(format!(
            "{}. {} - Talle {} x{} - ${}",
            index + 1,
            item.product().name,
            item.size(),
            item.quantity(),
            format_ars(&item.line_total()),
        ));
    }

    if let Some(shipping) = shipping_line(cart) {
        lines.push(String::new());
        lines.push(shipping);
    }

    lines.push(String::new());
    lines.push(format!(
        "💰 *Total Final: ${}*",
        format_ars(&cart.grand_total())
    ));

    lines.push(String::new());
    lines.push("💳 Datos para la transferencia:".to_string());
    lines.push(format!("Banco: {}", store.payment.bank));
    lines.push(format!("Alias: {}", store.payment.alias));
    lines.push(format!("Titular: {}", store.payment.holder));
    lines.push(format!("CUIL: {}", store.payment.tax_id));

    lines.push(String::new());
    lines.push("📎 _Adjunto comprobante de transferencia_".to_string());
    lines.push(String::new());
    lines.push("¡Gracias! 🙏".to_string());

    lines.join("\n")
}

/// Builds the `wa.me` deep link carrying the percent-encoded order message.
#[must_use]
pub fn order_url(cart: &Cart, store: &StoreInfo) -> String {
    let message = order_message(cart, store);
    let encoded = utf8_percent_encode(&message, MESSAGE_ENCODE_SET);

    format!("https://wa.me/{}?text={encoded}", store.whatsapp_number)
}

fn contact_lines(cart: &Cart) -> Vec<String> {
    let customer = cart.customer();
    let mut lines = Vec::new();

    if !customer.name.is_empty() {
        lines.push(format!("👤 Cliente: {}", customer.name));
    }

    if !customer.address.is_empty() {
        lines.push(format!("📍 Dirección: {}", customer.address));
    }

    if !cart.zip_code().is_empty() {
        lines.push(format!("📮 CP: {}", cart.zip_code()));
    }

    lines
}

fn shipping_line(cart: &Cart) -> Option<String> {
    if cart.shipping_cost().to_minor_units() > 0 {
        Some(format!(
            "🚚 Envío (CP {}): ${}",
            cart.zip_code(),
            format_ars(&cart.shipping_cost())
        ))
    } else if cart.zip_code() == FREE_PICKUP_ZIP {
        Some("🚚 Retiro en Local / Winifreda (Gratis)".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use smallvec::{SmallVec, smallvec};

    use crate::{
        customers::Customer,
        money::pesos,
        products::{CategoryId, Product, ProductId},
    };

    use super::*;

    fn product(id: i64, name: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: None,
            price: pesos(price),
            image: None,
            sizes: smallvec!["S".to_string(), "M".to_string()],
            colors: SmallVec::new(),
            stock: 10,
            category_id: CategoryId::new(1),
            active: true,
            category_name: None,
        }
    }

    fn pickup_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(&product(1, "Remera", 1_000), "M", 2, None);
        cart.calculate_shipping("6313");
        cart
    }

    #[test]
    fn message_lists_items_with_formatted_line_totals() {
        let message = order_message(&pickup_cart(), &StoreInfo::default());

        assert!(
            message.contains("1. Remera - Talle M x2 - $2.000"),
            "unexpected message: {message}"
        );
    }

    #[test]
    fn message_numbers_items_in_insertion_order() {
        let mut cart = pickup_cart();
        cart.add_item(&product(2, "Pantalón", 3_500), "S", 1, None);

        let message = order_message(&cart, &StoreInfo::default());

        assert!(message.contains("1. Remera - Talle M x2 - $2.000"));
        assert!(message.contains("2. Pantalón - Talle S x1 - $3.500"));
    }

    #[test]
    fn pickup_zip_gets_the_free_pickup_notice() {
        let message = order_message(&pickup_cart(), &StoreInfo::default());

        assert!(message.contains("🚚 Retiro en Local / Winifreda (Gratis)"));
        assert!(message.contains("💰 *Total Final: $2.000*"));
    }

    #[test]
    fn paid_shipping_gets_a_cost_line_and_enters_the_total() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, "Remera", 1_000), "M", 2, None);
        cart.calculate_shipping("6300");

        let message = order_message(&cart, &StoreInfo::default());

        assert!(message.contains("🚚 Envío (CP 6300): $5.500"));
        assert!(message.contains("💰 *Total Final: $7.500*"));
    }

    #[test]
    fn no_zip_means_no_shipping_line() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, "Remera", 1_000), "M", 1, None);

        let message = order_message(&cart, &StoreInfo::default());

        assert!(!message.contains("🚚"));
    }

    #[test]
    fn customer_lines_appear_only_when_filled_in() {
        let mut cart = pickup_cart();

        let without = order_message(&cart, &StoreInfo::default());
        assert!(!without.contains("👤 Cliente:"));
        assert!(!without.contains("📍 Dirección:"));

        cart.set_customer(Customer {
            name: "Ana López".to_string(),
            address: "Calle 9 de Julio 120".to_string(),
        });

        let with = order_message(&cart, &StoreInfo::default());
        assert!(with.contains("👤 Cliente: Ana López"));
        assert!(with.contains("📍 Dirección: Calle 9 de Julio 120"));
        assert!(with.contains("📮 CP: 6313"));
    }

    #[test]
    fn payment_block_quotes_the_store_details() {
        let message = order_message(&pickup_cart(), &StoreInfo::default());

        assert!(message.contains("Banco: Mercado Pago"));
        assert!(message.contains("Alias: pazsport"));
        assert!(message.contains("Titular: Maria Paz Maldonado"));
        assert!(message.contains("CUIL: 27-41831394-9"));
    }

    #[test]
    fn empty_cart_still_builds_a_message() {
        let message = order_message(&Cart::new(), &StoreInfo::default());

        assert!(message.contains("📦 Productos:"));
        assert!(message.contains("💰 *Total Final: $0*"));
    }

    #[test]
    fn url_targets_the_store_number() {
        let url = order_url(&pickup_cart(), &StoreInfo::default());

        assert!(
            url.starts_with("https://wa.me/5492302462479?text="),
            "unexpected url: {url}"
        );
    }

    #[test]
    fn url_payload_is_fully_percent_encoded() {
        let url = order_url(&pickup_cart(), &StoreInfo::default());
        let (_, payload) = url.split_once("?text=").expect("url should carry text");

        assert!(!payload.contains(' '));
        assert!(!payload.contains('\n'));
        assert!(payload.contains("Remera"));
        assert!(payload.contains("%0A"), "newlines should encode to %0A");
    }
}
