//! Client-side list filtering.
//!
//! Every list view narrows its rows by a free-text search over a few text
//! fields plus one categorical field (product status, order status or
//! customer segment).

use backoffice_core::{CustomerSegment, OrderStatus, ProductStatus};

use crate::models::{Customer, Order, Product};

/// Categorical filter value: everything, or one exact category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: PartialEq> CategoryFilter<C> {
    /// Whether `value` passes this filter.
    pub fn accepts(&self, value: &C) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<C> From<Option<C>> for CategoryFilter<C> {
    fn from(value: Option<C>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

/// A record that can be narrowed by a [`ListFilter`].
pub trait Searchable {
    /// The categorical field type.
    type Category: PartialEq + Copy + std::fmt::Debug;

    /// Text fields matched by the free-text search.
    fn search_fields(&self) -> Vec<&str>;

    /// The categorical field.
    fn category(&self) -> Self::Category;
}

impl Searchable for Product {
    type Category = ProductStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn category(&self) -> ProductStatus {
        self.status
    }
}

impl Searchable for Order {
    type Category = OrderStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.number.as_str(), self.customer_name.as_str()]
    }

    fn category(&self) -> OrderStatus {
        self.status
    }
}

impl Searchable for Customer {
    type Category = CustomerSegment;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn category(&self) -> CustomerSegment {
        self.segment
    }
}

/// Search text plus category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter<C> {
    pub search: String,
    pub category: CategoryFilter<C>,
}

impl<C> Default for ListFilter<C> {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
        }
    }
}

impl<C: PartialEq> ListFilter<C> {
    /// Build a filter from raw search text and an optional category.
    #[must_use]
    pub fn new(search: impl Into<String>, category: Option<C>) -> Self {
        Self {
            search: search.into(),
            category: CategoryFilter::from(category),
        }
    }

    /// Whether `record` passes both the search and the category.
    ///
    /// The search is trimmed and compared case-insensitively as a substring;
    /// an empty search matches everything.
    pub fn matches<T>(&self, record: &T) -> bool
    where
        T: Searchable<Category = C>,
    {
        let needle = self.search.trim().to_lowercase();
        let text_ok = needle.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        text_ok && self.category.accepts(&record.category())
    }

    /// Keep the records that match, preserving order.
    pub fn apply<'r, T>(&self, records: &'r [T]) -> Vec<&'r T>
    where
        T: Searchable<Category = C>,
    {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}
