//! Inventory Statistics
//!
//! Dashboard and catalog footer figures, plus per-item stock levels.

use std::collections::HashMap;

use crate::models::{Category, Sweet};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryStats {
    pub total: usize,
    /// Items with 0 < quantity < 10
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub in_stock: usize,
    /// Sum of price × quantity, rounded to cents
    pub total_value: f64,
    pub popular_category: Option<Category>,
    pub category_count: usize,
}

impl InventoryStats {
    pub fn from_sweets(sweets: &[Sweet]) -> Self {
        let mut per_category: HashMap<Category, usize> = HashMap::new();
        for sweet in sweets {
            *per_category.entry(sweet.category).or_default() += 1;
        }

        // Ties go to the earlier category in Category::ALL
        let popular_category = Category::ALL
            .into_iter()
            .filter_map(|c| per_category.get(&c).map(|n| (c, *n)))
            .fold(None::<(Category, usize)>, |best, (c, n)| match best {
                Some((_, best_n)) if best_n >= n => best,
                _ => Some((c, n)),
            })
            .map(|(c, _)| c);

        let value: f64 = sweets.iter().map(|s| s.price * f64::from(s.quantity)).sum();

        Self {
            total: sweets.len(),
            low_stock: sweets.iter().filter(|s| s.quantity > 0 && s.quantity < 10).count(),
            out_of_stock: sweets.iter().filter(|s| s.quantity == 0).count(),
            in_stock: sweets.iter().filter(|s| s.quantity > 0).count(),
            total_value: (value * 100.0).round() / 100.0,
            popular_category,
            category_count: per_category.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    OutOfStock,
    Low,
    InStock,
    Plenty,
}

impl StockLevel {
    pub fn of(quantity: u32) -> Self {
        match quantity {
            0 => StockLevel::OutOfStock,
            1..=4 => StockLevel::Low,
            5..=19 => StockLevel::InStock,
            _ => StockLevel::Plenty,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::OutOfStock => "Out of Stock",
            StockLevel::Low => "Low Stock",
            StockLevel::InStock => "In Stock",
            StockLevel::Plenty => "Plenty Available",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StockLevel::OutOfStock => "stock stock-out",
            StockLevel::Low => "stock stock-low",
            StockLevel::InStock => "stock stock-ok",
            StockLevel::Plenty => "stock stock-plenty",
        }
    }
}
