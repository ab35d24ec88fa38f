// src/services/recommender.rs
use crate::catalog::Product;

const ACNE_KEYWORDS: &[&str] = &["acne", "pimple", "breakout"];
const FACE_WASH_KEYWORDS: &[&str] = &["face wash", "cleanser"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concern {
    Acne,
    FaceWash,
    Unrelated,
}

pub fn detect_concern(msg: &str) -> Concern {
    let msg_lower = msg.to_lowercase();

    if ACNE_KEYWORDS.iter().any(|k| msg_lower.contains(k)) {
        Concern::Acne
    } else if FACE_WASH_KEYWORDS.iter().any(|k| msg_lower.contains(k)) {
        Concern::FaceWash
    } else {
        Concern::Unrelated
    }
}

/// Products relevant to `msg`, in catalog order.
pub fn filter_products(msg: &str, catalog: &[Product]) -> Vec<Product> {
    let keep: fn(&Product) -> bool = match detect_concern(msg) {
        Concern::Acne => |p| p.skin_type == "acne-prone",
        Concern::FaceWash => |p| p.product_type == "face wash",
        Concern::Unrelated => return Vec::new(),
    };

    catalog.iter().filter(|p| keep(p)).cloned().collect()
}

/// Grounding text for the system prompt. Empty when nothing matched.
pub fn build_context(products: &[Product]) -> String {
    if products.is_empty() {
        return String::new();
    }

    let lines: Vec<String> = products
        .iter()
        .map(|p| format!("- {}: {} (${})", p.name, p.description, format_price(p.price)))
        .collect();

    format!("Available products:\n{}", lines.join("\n"))
}

/// Whole prices keep one decimal place (`18.0`), others print as-is (`27.89`).
pub fn format_price(price: f64) -> String {
    if price.is_finite() && price.fract() == 0.0 {
        format!("{price:.1}")
    } else {
        price.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acne_wins_over_face_wash() {
        assert_eq!(detect_concern("Is this cleanser ok for PIMPLES?"), Concern::Acne);
        assert_eq!(detect_concern("need a Face Wash"), Concern::FaceWash);
        assert_eq!(detect_concern("face-wash please"), Concern::Unrelated);
    }

    #[test]
    fn whole_prices_keep_a_decimal() {
        assert_eq!(format_price(18.0), "18.0");
        assert_eq!(format_price(27.89), "27.89");
        assert_eq!(format_price(19.06), "19.06");
        assert_eq!(format_price(0.5), "0.5");
    }

    #[test]
    fn empty_context_for_no_products() {
        assert_eq!(build_context(&[]), "");
    }
}
