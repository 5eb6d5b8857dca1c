//! Product records.
use std::fmt;

use serde::Serialize;

/// The fields of a product that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    product_type: String,
    product_date: String,
    product_rating: String,
}
impl NewProduct {
    /// Create a new [NewProduct]. The date and rating are stored as given, unparsed.
    pub fn new<S>(product_type: S, product_date: S, product_rating: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            product_type: product_type.into(),
            product_date: product_date.into(),
            product_rating: product_rating.into(),
        }
    }

    /// Break this [NewProduct] into its fields, in column order.
    pub fn into_fields(self) -> [String; 3] {
        [self.product_type, self.product_date, self.product_rating]
    }
}

/// A row of the `product` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    product_id: i64,
    product_type: String,
    product_date: String,
    product_rating: String,
}
impl Product {
    /// Create a [Product] from its fields.
    pub fn from_fields(
        product_id: i64,
        product_type: String,
        product_date: String,
        product_rating: String,
    ) -> Self {
        Self {
            product_id,
            product_type,
            product_date,
            product_rating,
        }
    }

    /// Get the `product_id` of this [Product].
    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    /// Get the `product_type` of this [Product].
    pub fn product_type(&self) -> &str {
        &self.product_type
    }

    /// Get the `product_date` of this [Product].
    pub fn product_date(&self) -> &str {
        &self.product_date
    }

    /// Get the `product_rating` of this [Product].
    pub fn product_rating(&self) -> &str {
        &self.product_rating
    }
}
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "product_id: {}, product_type: {}, product_date: {}, product_rating: {}",
            self.product_id, self.product_type, self.product_date, self.product_rating
        )
    }
}
