use chrono::{DateTime, Utc};
use contracts::domain::a001_product::Product;

/// Cached `{id, name}` list from `GET /products`.
///
/// Replaced wholesale on every refresh (login, session restore, import).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    products: Vec<Product>,
    refreshed_at: Option<DateTime<Utc>>,
}

impl ProductCatalog {
    pub fn replace(&mut self, products: Vec<Product>) {
        self.replace_at(products, Utc::now());
    }

    fn replace_at(&mut self, products: Vec<Product>, at: DateTime<Utc>) {
        log::debug!("Product catalog refreshed: {} products", products.len());
        self.products = products;
        self.refreshed_at = Some(at);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Last refresh as `DD.MM.YYYY HH:MM:SS` (UTC); `None` before the first load
    pub fn refreshed_label(&self) -> Option<String> {
        self.refreshed_at
            .map(|at| at.format("%d.%m.%Y %H:%M:%S").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut catalog = ProductCatalog::default();
        assert!(catalog.is_empty());

        catalog.replace(vec![product("1", "Widget"), product("2", "Gadget")]);
        assert_eq!(catalog.products().len(), 2);
        assert_eq!(catalog.name_of("2"), Some("Gadget"));

        catalog.replace(vec![product("3", "Gizmo")]);
        assert_eq!(catalog.products(), &[product("3", "Gizmo")]);
        assert_eq!(catalog.name_of("1"), None);
        assert_eq!(catalog.name_of("3"), Some("Gizmo"));
    }

    #[test]
    fn test_refreshed_label() {
        let mut catalog = ProductCatalog::default();
        assert_eq!(catalog.refreshed_label(), None);

        let at = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        catalog.replace_at(Vec::new(), at);
        assert!(catalog.is_empty());
        assert_eq!(catalog.refreshed_label().as_deref(), Some("15.03.2024 14:02:26"));
    }

    #[test]
    fn test_unknown_id() {
        let catalog = ProductCatalog::default();
        assert_eq!(catalog.name_of("missing"), None);
    }
}
