// src/catalog.rs
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

const TUBE_IMAGE_URL: &str = "https://media.istockphoto.com/id/1218450334/photo/flat-lay-flatlay-top-above-overhead-view-photo-of-blank-empty-white-tube-for-cream-isolated.jpg?s=612x612&w=0&k=20&c=Fp38-GfhHTe-tweUOpalawrY1ydgyehbNtAmOcctZJQ=";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub skin_type: String,
    pub price: f64,
    pub image_url: String,
    pub description: String,
}

/// Read-only product list shared by every request.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products: products.into() }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Deref for Catalog {
    type Target = [Product];

    fn deref(&self) -> &Self::Target {
        &self.products
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            Product {
                name: "Gentle Cleanser".to_string(),
                product_type: "face wash".to_string(),
                skin_type: "acne-prone".to_string(),
                price: 27.89,
                image_url: TUBE_IMAGE_URL.to_string(),
                description: "A gentle cleanser perfect for acne-prone skin, helps control breakouts while maintaining skin's natural balance.".to_string(),
            },
            Product {
                name: "Exfoliating Face Wash".to_string(),
                product_type: "face wash".to_string(),
                skin_type: "acne-prone".to_string(),
                price: 21.64,
                image_url: TUBE_IMAGE_URL.to_string(),
                description: "An exfoliating face wash that helps remove dead skin cells and unclog pores, ideal for acne-prone skin.".to_string(),
            },
            Product {
                name: "Foaming Face Wash".to_string(),
                product_type: "face wash".to_string(),
                skin_type: "acne-prone".to_string(),
                price: 19.06,
                image_url: TUBE_IMAGE_URL.to_string(),
                description: "A foaming face wash that deeply cleanses while being gentle on sensitive, acne-prone skin.".to_string(),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_serializes_with_wire_names() {
        let catalog = Catalog::default();
        let value = serde_json::to_value(&catalog[0]).unwrap();
        assert_eq!(value["type"], "face wash");
        assert_eq!(value["skin_type"], "acne-prone");
        assert_eq!(value["price"], 27.89);
        assert!(value.get("product_type").is_none());
    }

    #[test]
    fn clones_share_the_same_products() {
        let catalog = Catalog::default();
        let other = catalog.clone();
        assert_eq!(catalog.len(), 3);
        assert!(std::ptr::eq(catalog.products(), other.products()));
    }
}
