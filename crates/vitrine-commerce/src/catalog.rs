//! Product catalog types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Fixed set of digital product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ebooks,
    Courses,
    Software,
    Templates,
    Music,
    Videos,
}

impl Category {
    /// Get the category as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ebooks => "ebooks",
            Category::Courses => "courses",
            Category::Software => "software",
            Category::Templates => "templates",
            Category::Music => "music",
            Category::Videos => "videos",
        }
    }

    /// Parse a category from its wire string (exact, case-sensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ebooks" => Some(Category::Ebooks),
            "courses" => Some(Category::Courses),
            "software" => Some(Category::Software),
            "templates" => Some(Category::Templates),
            "music" => Some(Category::Music),
            "videos" => Some(Category::Videos),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A digital product in the catalog.
///
/// Products are seeded once at process start and treated as immutable for
/// the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Category this product belongs to.
    pub category: Category,
    /// Image URL for listings.
    pub image_url: String,
    /// Download URL delivered after purchase.
    pub download_url: String,
    /// Human-readable file size (e.g. "2.5 GB").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    /// Delivery format (e.g. "MP4 + PDF").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Whether the product is featured on the home page.
    pub featured: bool,
    /// Tags for search.
    pub tags: Vec<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
}
