//! Catalog Composer
//!
//! Filter, then sort. Pure and deterministic; recomputed on every input change.

use crate::models::Sweet;
use super::{FilterSpec, SortSpec};

/// Produce the display list from the fetched items
pub fn compose(items: &[Sweet], filter: &FilterSpec, sort: &SortSpec) -> Vec<Sweet> {
    let mut shown: Vec<Sweet> = items
        .iter()
        .filter(|sweet| filter.matches(sweet))
        .cloned()
        .collect();
    // Stable: ties keep backend order
    shown.sort_by(|a, b| sort.compare(a, b));
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sort::{SortKey, SortOrder};
    use crate::models::Category;

    fn make_sweet(id: u64, name: &str, category: Category, price: f64, quantity: u32) -> Sweet {
        Sweet { id, name: name.to_string(), category, price, quantity }
    }

    fn names(list: &[Sweet]) -> Vec<&str> {
        list.iter().map(|s| s.name.as_str()).collect()
    }

    fn sample() -> Vec<Sweet> {
        vec![
            make_sweet(1, "banana taffy", Category::Candy, 3.0, 10),
            make_sweet(2, "Apple pie", Category::Pie, 7.5, 2),
            make_sweet(3, "Cola bottles", Category::Candy, 0.5, 40),
            make_sweet(4, "Mint gum", Category::Gum, 1.0, 0),
            make_sweet(5, "Gummy bears", Category::Candy, 5.0, 12),
        ]
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let items = vec![
            make_sweet(1, "banana", Category::Other, 1.0, 1),
            make_sweet(2, "Apple", Category::Other, 1.0, 1),
        ];
        let shown = compose(&items, &FilterSpec::default(), &SortSpec::default());
        assert_eq!(names(&shown), vec!["Apple", "banana"]);
    }

    #[test]
    fn test_category_and_price_window() {
        let candy = FilterSpec { category: Some(Category::Candy), ..Default::default() };
        let shown = compose(&sample(), &candy, &SortSpec::default());
        assert_eq!(names(&shown), vec!["banana taffy", "Cola bottles", "Gummy bears"]);

        let window = FilterSpec { min_price: Some(1.0), max_price: Some(5.0), ..candy };
        let shown = compose(&sample(), &window, &SortSpec::default());
        assert_eq!(names(&shown), vec!["banana taffy", "Gummy bears"]);
        assert!(shown.iter().all(|s| s.category == Category::Candy && (1.0..=5.0).contains(&s.price)));
    }

    #[test]
    fn test_price_sort_and_toggle() {
        let items = vec![
            make_sweet(1, "c", Category::Cake, 3.0, 1),
            make_sweet(2, "a", Category::Cake, 1.0, 1),
            make_sweet(3, "b", Category::Cake, 2.0, 1),
        ];
        let prices = |sort: &SortSpec| -> Vec<f64> {
            compose(&items, &FilterSpec::default(), sort).iter().map(|s| s.price).collect()
        };

        let asc = SortSpec::default().toggle(SortKey::Price);
        assert_eq!(prices(&asc), vec![1.0, 2.0, 3.0]);

        let desc = asc.toggle(SortKey::Price);
        assert_eq!(desc.order, SortOrder::Desc);
        assert_eq!(prices(&desc), vec![3.0, 2.0, 1.0]);

        assert_eq!(prices(&desc.toggle(SortKey::Price)), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_quantity_sort_keeps_ties_in_input_order() {
        let items = vec![
            make_sweet(1, "x", Category::Gum, 1.0, 5),
            make_sweet(2, "y", Category::Gum, 1.0, 1),
            make_sweet(3, "z", Category::Gum, 1.0, 5),
        ];
        let sort = SortSpec { key: SortKey::Quantity, order: SortOrder::Asc };
        let ids: Vec<u64> = compose(&items, &FilterSpec::default(), &sort).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_compose_does_not_touch_input() {
        let items = sample();
        let before = items.clone();
        let filter = FilterSpec { name: Some("GUM".to_string()), ..Default::default() };
        let shown = compose(&items, &filter, &SortSpec::default());
        assert_eq!(items, before);
        assert_eq!(names(&shown), vec!["Gummy bears", "Mint gum"]);
    }
}
