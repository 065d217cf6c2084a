//! Filter Spec
//!
//! Optional predicates over the sweet list; every set predicate must hold.

use crate::models::{Category, Sweet};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    pub category: Option<Category>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl FilterSpec {
    /// Build from raw form values; empty or unparseable fields are absent
    pub fn from_form(name: &str, category: &str, min_price: &str, max_price: &str) -> Self {
        Self {
            name: non_empty(name).map(str::to_string),
            category: non_empty(category).and_then(Category::parse),
            min_price: parse_price(min_price),
            max_price: parse_price(max_price),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of predicates in effect
    pub fn active_count(&self) -> usize {
        [
            self.name.is_some(),
            self.category.is_some(),
            self.min_price.is_some(),
            self.max_price.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    pub fn matches(&self, sweet: &Sweet) -> bool {
        if let Some(name) = &self.name {
            if !sweet.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = self.category {
            if sweet.category != category {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if sweet.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if sweet.price > max {
                return false;
            }
        }
        true
    }

    /// Query parameters for the remote search endpoint (set fields only)
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(name) = &self.name {
            params.push(("name", name.clone()));
        }
        if let Some(category) = self.category {
            params.push(("category", category.as_str().to_string()));
        }
        if let Some(min) = self.min_price {
            params.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price {
            params.push(("maxPrice", max.to_string()));
        }
        params
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

fn parse_price(s: &str) -> Option<f64> {
    non_empty(s)?.parse::<f64>().ok().filter(|p| p.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweet(name: &str, category: Category, price: f64) -> Sweet {
        Sweet { id: 1, name: name.to_string(), category, price, quantity: 1 }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = FilterSpec::from_form("", " ", "", "");
        assert!(filter.is_empty());
        assert!(filter.matches(&sweet("Anything", Category::Other, 99.0)));
    }

    #[test]
    fn test_name_is_case_insensitive_substring() {
        let filter = FilterSpec::from_form("CHOC", "", "", "");
        assert!(filter.matches(&sweet("Dark chocolate bar", Category::Chocolate, 1.0)));
        assert!(!filter.matches(&sweet("Lollipop", Category::Candy, 1.0)));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filter = FilterSpec::from_form("", "", "1", "5");
        assert!(filter.matches(&sweet("a", Category::Candy, 1.0)));
        assert!(filter.matches(&sweet("b", Category::Candy, 5.0)));
        assert!(!filter.matches(&sweet("c", Category::Candy, 5.01)));
        assert!(!filter.matches(&sweet("d", Category::Candy, 0.99)));
    }

    #[test]
    fn test_unparseable_price_is_absent() {
        let filter = FilterSpec::from_form("", "", "cheap", "NaN");
        assert_eq!(filter.min_price, None);
        assert_eq!(filter.max_price, None);
    }

    #[test]
    fn test_query_params_skip_absent() {
        let filter = FilterSpec::from_form("", "Ice Cream", "", "5");
        assert_eq!(filter.active_count(), 2);
        assert_eq!(
            filter.query_params(),
            vec![("category", "Ice Cream".to_string()), ("maxPrice", "5".to_string())]
        );
    }
}
