//! Sort Spec
//!
//! Sort key/order for the catalog and the toggle rule used by the sort bar.

use std::cmp::Ordering;

use crate::models::Sweet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Quantity,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Price, SortKey::Quantity];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Price => "Price",
            SortKey::Quantity => "Stock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    /// Same key flips the order; a new key starts ascending
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self { key, order: self.order.flipped() }
        } else {
            Self { key, order: SortOrder::Asc }
        }
    }

    /// Three-way comparison honouring key and order
    pub fn compare(&self, a: &Sweet, b: &Sweet) -> Ordering {
        let ord = match self.key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Quantity => a.quantity.cmp(&b.quantity),
        };
        match self.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }

    /// Indicator shown next to a sort button
    pub fn indicator(&self, key: SortKey) -> &'static str {
        match (self.key == key, self.order) {
            (false, _) => "↕",
            (true, SortOrder::Asc) => "↑",
            (true, SortOrder::Desc) => "↓",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let spec = SortSpec::default();
        assert_eq!(spec, SortSpec { key: SortKey::Name, order: SortOrder::Asc });

        let flipped = spec.toggle(SortKey::Name);
        assert_eq!(flipped.order, SortOrder::Desc);
        assert_eq!(flipped.toggle(SortKey::Name).order, SortOrder::Asc);

        let by_price = flipped.toggle(SortKey::Price);
        assert_eq!(by_price, SortSpec { key: SortKey::Price, order: SortOrder::Asc });
    }

    #[test]
    fn test_equal_keys_compare_equal() {
        let a = Sweet { id: 1, name: "Toffee".to_string(), category: crate::models::Category::Candy, price: 2.0, quantity: 3 };
        let b = Sweet { id: 2, name: "toffee".to_string(), ..a.clone() };
        for key in SortKey::ALL {
            let spec = SortSpec { key, order: SortOrder::Desc };
            assert_eq!(spec.compare(&a, &b), Ordering::Equal);
        }
    }

    #[test]
    fn test_indicator() {
        let spec = SortSpec { key: SortKey::Price, order: SortOrder::Desc };
        assert_eq!(spec.indicator(SortKey::Price), "↓");
        assert_eq!(spec.indicator(SortKey::Name), "↕");
    }
}
