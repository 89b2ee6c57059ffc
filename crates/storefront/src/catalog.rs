//! Product catalog.
//!
//! The catalog is fixed at build time. Shop filtering is by category and a
//! case-insensitive name/description search.

use core::fmt;
use core::str::FromStr;

use optimistics_core::{Price, ProductId};

use crate::models::CartProduct;

/// Product categories shown as shop filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Oils,
    Butters,
    Soaps,
    Skincare,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [Self::Oils, Self::Butters, Self::Soaps, Self::Skincare];

    /// URL slug.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Oils => "oils",
            Self::Butters => "butters",
            Self::Soaps => "soaps",
            Self::Skincare => "skincare",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Oils => "Oils",
            Self::Butters => "Butters",
            Self::Soaps => "Soaps",
            Self::Skincare => "Skincare",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error parsing a [`Category`] slug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// A product for sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Price,
    pub image_url: String,
    pub description: String,
    /// Shown on the home page.
    pub featured: bool,
}

impl Product {
    /// The fields a cart line copies from this product.
    #[must_use]
    pub fn to_cart_product(&self) -> CartProduct {
        CartProduct {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            image_url: self.image_url.clone(),
        }
    }

    fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// The set of products on sale.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products flagged for the home page.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.featured)
    }

    /// Products in `category` (all when `None`) whose name or description
    /// contains `query`, ignoring case. A blank query matches everything.
    #[must_use]
    pub fn filter(&self, category: Option<Category>, query: Option<&str>) -> Vec<&Product> {
        let needle = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        self.products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .filter(|p| needle.as_deref().is_none_or(|n| p.matches_query(n)))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(default_products())
    }
}

fn product(
    id: &str,
    name: &str,
    category: Category,
    naira: u64,
    description: &str,
    featured: bool,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        category,
        price: Price::from_naira(naira),
        image_url: format!("/static/img/products/{id}.jpg"),
        description: description.to_owned(),
        featured,
    }
}

fn default_products() -> Vec<Product> {
    vec![
        product(
            "castor-oil",
            "Castor Oil",
            Category::Oils,
            5_000,
            "Cold-pressed castor oil for hair growth and scalp care.",
            true,
        ),
        product(
            "coconut-oil",
            "Coconut Oil",
            Category::Oils,
            4_500,
            "Virgin coconut oil for skin, hair, and everyday moisture.",
            false,
        ),
        product(
            "black-seed-oil",
            "Black Seed Oil",
            Category::Oils,
            6_500,
            "Pure black seed oil, rich in antioxidants.",
            false,
        ),
        product(
            "radiant-glow-shea-butter",
            "Radiant Glow Face Shea Butter",
            Category::Butters,
            5_000,
            "Whipped shea butter blended for a radiant, even complexion.",
            true,
        ),
        product(
            "raw-shea-butter",
            "Raw Shea Butter",
            Category::Butters,
            3_500,
            "Unrefined shea butter sourced from northern Nigeria.",
            false,
        ),
        product(
            "african-black-soap",
            "African Black Soap",
            Category::Soaps,
            2_500,
            "Traditional black soap for gentle, deep cleansing.",
            true,
        ),
        product(
            "turmeric-soap",
            "Turmeric Glow Soap",
            Category::Soaps,
            3_000,
            "Turmeric and honey bar soap for brightening.",
            false,
        ),
        product(
            "hibiscus-toner",
            "Hibiscus Face Toner",
            Category::Skincare,
            7_500,
            "Alcohol-free hibiscus toner to balance and refresh.",
            false,
        ),
    ]
}
