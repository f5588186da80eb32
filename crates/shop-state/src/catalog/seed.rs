//! The fixed product list the catalog starts with.

use crate::catalog::Product;
use crate::money::{Currency, Money};

/// Build the demo catalog, priced in `currency`.
pub fn seed_products(currency: Currency) -> Vec<Product> {
    vec![
        Product::new("1", "Classic T-Shirt", Money::new(2999, currency), "clothing")
            .with_description("A comfortable and stylish t-shirt made from 100% cotton.")
            .with_image("/images/tshirt-white-1.jpg")
            .with_image("/images/tshirt-white-2.jpg")
            .with_variant("White", "#FFFFFF")
            .with_variant("Black", "#000000")
            .with_variant("Navy", "#000080")
            .with_sizes(["XS", "S", "M", "L", "XL"])
            .with_best_seller(true),
        Product::new("2", "Slim Fit Jeans", Money::new(5999, currency), "clothing")
            .with_description("Modern slim fit jeans with stretch for maximum comfort.")
            .with_image("/images/jeans-blue-1.jpg")
            .with_image("/images/jeans-blue-2.jpg")
            .with_variant("Light Blue", "#ADD8E6")
            .with_variant("Dark Blue", "#00008B")
            .with_variant("Black", "#000000")
            .with_sizes(["28", "30", "32", "34", "36"])
            .with_best_seller(true),
        Product::new("3", "Running Shoes", Money::new(8999, currency), "footwear")
            .with_description(
                "Lightweight running shoes with cushioned soles for maximum comfort.",
            )
            .with_image("/images/shoes-1.jpg")
            .with_image("/images/shoes-2.jpg")
            .with_variant("Red", "#FF0000")
            .with_variant("Blue", "#0000FF")
            .with_variant("Black", "#000000")
            .with_sizes(["7", "8", "9", "10", "11", "12"])
            .with_best_seller(false),
        Product::new("4", "Leather Wallet", Money::new(3999, currency), "accessories")
            .with_description("Genuine leather wallet with multiple card slots and coin pocket.")
            .with_image("/images/wallet-1.jpg")
            .with_image("/images/wallet-2.jpg")
            .with_variant("Brown", "#8B4513")
            .with_variant("Black", "#000000")
            .with_best_seller(true),
        Product::new("5", "Wireless Headphones", Money::new(12999, currency), "electronics")
            .with_description("Noise-cancelling wireless headphones with 20-hour battery life.")
            .with_image("/images/headphones-1.jpg")
            .with_image("/images/headphones-2.jpg")
            .with_variant("Black", "#000000")
            .with_variant("White", "#FFFFFF")
            .with_variant("Silver", "#C0C0C0")
            .with_best_seller(true),
        Product::new("6", "Backpack", Money::new(4999, currency), "accessories")
            .with_description("Durable backpack with laptop compartment and multiple pockets.")
            .with_image("/images/backpack-1.jpg")
            .with_image("/images/backpack-2.jpg")
            .with_variant("Gray", "#808080")
            .with_variant("Blue", "#0000FF")
            .with_variant("Black", "#000000")
            .with_best_seller(false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let products = seed_products(Currency::USD);
        let ids: HashSet<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(products.len(), 6);
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_seed_prices_are_non_negative() {
        for product in seed_products(Currency::USD) {
            assert!(product.price.amount_cents >= 0, "{} has a negative price", product.id);
            assert!(product.in_stock);
        }
    }

    #[test]
    fn test_sizeless_goods() {
        let sizeless: Vec<_> = seed_products(Currency::USD)
            .into_iter()
            .filter(|p| !p.has_sizes())
            .map(|p| p.name)
            .collect();
        assert_eq!(sizeless, vec!["Leather Wallet", "Wireless Headphones", "Backpack"]);
    }

    #[test]
    fn test_seed_uses_requested_currency() {
        assert!(seed_products(Currency::EUR)
            .iter()
            .all(|p| p.price.currency == Currency::EUR));
    }
}
