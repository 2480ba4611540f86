//! The product catalog store.

use vitrine_commerce::catalog::Product;
use vitrine_commerce::ids::ProductId;

/// In-memory holder of product records and their query operations.
///
/// Constructed once at process start; products are immutable for the
/// process lifetime (there are no update or delete operations).
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Create a store over an explicit product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Create a store seeded with the sample catalog.
    pub fn with_sample_catalog() -> Self {
        Self::new(crate::seed::sample_products())
    }

    /// All products, in seed order.
    pub fn get_all(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Look up a product by id. O(n) scan over the catalog.
    pub fn get_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// The featured subsequence, original order preserved.
    pub fn get_featured(&self) -> Vec<Product> {
        self.products.iter().filter(|p| p.featured).cloned().collect()
    }

    /// Products whose category matches exactly (case-sensitive).
    ///
    /// An unknown category string yields an empty list rather than an error.
    pub fn get_by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category.as_str() == category)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over name, description, and tags.
    ///
    /// No ranking, no fuzzy matching. The empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<Product> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
                    || p.tags.iter().any(|t| t.to_lowercase().contains(&query))
            })
            .cloned()
            .collect()
    }

    /// Distinct category strings present in the catalog, first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for product in &self.products {
            let category = product.category.as_str().to_string();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CatalogStore {
        CatalogStore::with_sample_catalog()
    }

    #[test]
    fn test_get_by_id_round_trips() {
        let store = store();
        for product in store.get_all() {
            let found = store.get_by_id(&product.id).unwrap();
            assert_eq!(found.id, product.id);
        }
        assert!(store.get_by_id(&ProductId::new("no-such-id")).is_none());
    }

    #[test]
    fn test_featured_is_exact_subset_in_order() {
        let store = store();
        let featured = store.get_featured();
        assert!(!featured.is_empty());
        assert!(featured.iter().all(|p| p.featured));

        // Order matches the full catalog's order.
        let expected: Vec<_> = store
            .get_all()
            .into_iter()
            .filter(|p| p.featured)
            .collect();
        assert_eq!(featured, expected);
    }

    #[test]
    fn test_category_match_is_exact_and_case_sensitive() {
        let store = store();
        let courses = store.get_by_category("courses");
        assert!(!courses.is_empty());
        assert!(courses.iter().all(|p| p.category.as_str() == "courses"));

        assert!(store.get_by_category("Courses").is_empty());
        assert!(store.get_by_category("nonsense").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = store();
        let lower = store.search("marketing");
        let upper = store.search("MARKETING");
        assert!(!lower.is_empty());
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_search_matches_tags() {
        let store = store();
        let hits = store.search("royalty free");
        assert!(hits
            .iter()
            .any(|p| p.tags.iter().any(|t| t.contains("royalty"))));
    }

    #[test]
    fn test_empty_search_returns_all() {
        let store = store();
        assert_eq!(store.search("").len(), store.len());
    }

    #[test]
    fn test_categories_distinct_first_seen_order() {
        let store = store();
        let categories = store.categories();
        let unique: std::collections::HashSet<_> = categories.iter().collect();
        assert_eq!(unique.len(), categories.len());
        assert!(categories.contains(&"courses".to_string()));
        assert!(categories.contains(&"ebooks".to_string()));
        // First product in the seed is a course.
        assert_eq!(categories[0], "courses");
    }
}
