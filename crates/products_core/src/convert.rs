//! Mapping between wire shapes and the product entity. Both directions are
//! total and side-effect free.

use crate::dto::{ProductRequest, ProductResponse};
use crate::types::Product;

impl From<ProductRequest> for Product {
    /// The identifier is left unset; storage assigns it.
    fn from(request: ProductRequest) -> Self {
        Product {
            id: None,
            name: request.name,
            description: request.description,
            price: request.price,
            stock: request.stock,
            category: request.category,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            category: product.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn category() -> impl Strategy<Value = Category> {
        proptest::sample::select(Category::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn request_fields_survive_entity_and_back(
            name in "[A-Za-z0-9 ]{3,100}",
            description in proptest::option::of("[ -~]{0,500}"),
            cents in 1i64..10_000_000,
            stock in 0i32..=i32::MAX,
            category in category(),
        ) {
            let request = ProductRequest {
                name,
                description,
                price: Decimal::new(cents, 2),
                stock,
                category,
            };
            let response = ProductResponse::from(Product::from(request.clone()));

            prop_assert_eq!(response.id, None);
            prop_assert_eq!(response.name, request.name);
            prop_assert_eq!(response.description, request.description);
            prop_assert_eq!(response.price, request.price);
            prop_assert_eq!(response.stock, request.stock);
            prop_assert_eq!(response.category, request.category);
        }
    }

    #[test]
    fn response_carries_identifier() {
        let product = Product {
            id: Some(42),
            name: "Desk Lamp".into(),
            description: None,
            price: Decimal::new(1999, 2),
            stock: 3,
            category: Category::Home,
        };
        let response = ProductResponse::from(product);
        assert_eq!(response.id, Some(42));
        assert_eq!(response.name, "Desk Lamp");
    }
}
