//! Catalog domain types and their wire conversions.

use std::fmt;

use crate::api::CatalogError;
use crate::{SAMPLE_PRODUCT_ID, proto};

/// Price in whole dollars and cents. Never a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price {
    dollars: u32,
    cents: u8,
}

impl Price {
    /// Build a price; cents of 100 or more carry into dollars.
    #[must_use]
    pub const fn new(dollars: u32, cents: u8) -> Self {
        Self {
            dollars: dollars.saturating_add((cents / 100) as u32),
            cents: cents % 100,
        }
    }

    #[must_use]
    pub const fn dollars(&self) -> u32 {
        self.dollars
    }

    #[must_use]
    pub const fn cents(&self) -> u8 {
        self.cents
    }

    /// Parse the wire representation (`price_dollars`, `price_cents`).
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidData`] if either part is not a number
    /// or the cents are not below 100.
    pub fn parse(dollars: &str, cents: &str) -> Result<Self, CatalogError> {
        let d: u32 = dollars
            .trim()
            .parse()
            .map_err(|e| CatalogError::InvalidData(format!("price_dollars '{dollars}': {e}")))?;
        let c: u8 = cents
            .trim()
            .parse()
            .map_err(|e| CatalogError::InvalidData(format!("price_cents '{cents}': {e}")))?;
        if c >= 100 {
            return Err(CatalogError::InvalidData(format!(
                "price_cents '{cents}' must be below 100"
            )));
        }
        Ok(Self { dollars: d, cents: c })
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars, self.cents)
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub price: Price,
}

impl From<&CatalogItem> for proto::CatalogItem {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            author: item.author.clone(),
            description: item.description.clone(),
            rating: i32::from(item.rating),
            price_dollars: item.price.dollars().to_string(),
            price_cents: format!("{:02}", item.price.cents()),
        }
    }
}

impl TryFrom<proto::CatalogItem> for CatalogItem {
    type Error = CatalogError;

    fn try_from(wire: proto::CatalogItem) -> Result<Self, Self::Error> {
        let rating = u8::try_from(wire.rating)
            .ok()
            .filter(|r| (1..=5).contains(r))
            .ok_or_else(|| {
                CatalogError::InvalidData(format!(
                    "item '{}' has rating {} outside 1..=5",
                    wire.id, wire.rating
                ))
            })?;
        let price = Price::parse(&wire.price_dollars, &wire.price_cents)?;

        Ok(Self {
            id: wire.id,
            title: wire.title,
            author: wire.author,
            description: wire.description,
            rating,
            price,
        })
    }
}

/// What a catalog call asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    /// Up to `max_results` distinct random items.
    Sample { max_results: u32 },
    /// The single item with this id, if it exists.
    ById { product_id: String },
}

impl CatalogQuery {
    #[must_use]
    pub const fn sample(max_results: u32) -> Self {
        Self::Sample { max_results }
    }

    #[must_use]
    pub fn by_id(product_id: impl Into<String>) -> Self {
        Self::ById {
            product_id: product_id.into(),
        }
    }
}

/// Whether a wire `product_id` requests sampling instead of a lookup.
///
/// Only [`SAMPLE_PRODUCT_ID`] does; an empty id is a lookup that finds
/// nothing.
#[must_use]
pub fn is_sample_sentinel(product_id: &str) -> bool {
    product_id == SAMPLE_PRODUCT_ID
}

impl From<CatalogQuery> for proto::CatalogRequest {
    fn from(query: CatalogQuery) -> Self {
        match query {
            CatalogQuery::Sample { max_results } => Self {
                max_results,
                product_id: SAMPLE_PRODUCT_ID.to_owned(),
            },
            CatalogQuery::ById { product_id } => Self {
                max_results: 1,
                product_id,
            },
        }
    }
}

impl From<proto::CatalogRequest> for CatalogQuery {
    fn from(wire: proto::CatalogRequest) -> Self {
        if is_sample_sentinel(&wire.product_id) {
            Self::Sample {
                max_results: wire.max_results,
            }
        } else {
            Self::ById {
                product_id: wire.product_id,
            }
        }
    }
}
