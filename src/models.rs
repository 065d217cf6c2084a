//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Account role (matches backend `USER` / `ADMIN`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

/// Logged-in account as returned by the login endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// First letter of the name, uppercased, for the avatar badge
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }
}

/// Persisted proof of login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Sweet category (14 fixed values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Chocolate,
    Candy,
    Gum,
    Biscuit,
    Cake,
    Pastry,
    Donut,
    Brownie,
    Pudding,
    #[serde(rename = "Ice Cream")]
    IceCream,
    Cupcake,
    Muffin,
    Pie,
    Other,
}

impl Category {
    pub const ALL: [Category; 14] = [
        Category::Chocolate,
        Category::Candy,
        Category::Gum,
        Category::Biscuit,
        Category::Cake,
        Category::Pastry,
        Category::Donut,
        Category::Brownie,
        Category::Pudding,
        Category::IceCream,
        Category::Cupcake,
        Category::Muffin,
        Category::Pie,
        Category::Other,
    ];

    /// Wire/display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Chocolate => "Chocolate",
            Category::Candy => "Candy",
            Category::Gum => "Gum",
            Category::Biscuit => "Biscuit",
            Category::Cake => "Cake",
            Category::Pastry => "Pastry",
            Category::Donut => "Donut",
            Category::Brownie => "Brownie",
            Category::Pudding => "Pudding",
            Category::IceCream => "Ice Cream",
            Category::Cupcake => "Cupcake",
            Category::Muffin => "Muffin",
            Category::Pie => "Pie",
            Category::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Chocolate | Category::Brownie => "🍫",
            Category::Candy => "🍬",
            Category::Gum => "🫧",
            Category::Biscuit => "🍪",
            Category::Cake => "🎂",
            Category::Pastry => "🥐",
            Category::Donut => "🍩",
            Category::Pudding => "🍮",
            Category::IceCream => "🍦",
            Category::Cupcake | Category::Muffin => "🧁",
            Category::Pie => "🥧",
            Category::Other => "🍭",
        }
    }
}

/// Sweet data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweet {
    pub id: u64,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub quantity: u32,
}

/// Body for add/update requests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweetDraft {
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub quantity: u32,
}

impl SweetDraft {
    /// Validate raw form input
    pub fn from_form(name: &str, category: &str, price: &str, quantity: &str) -> AppResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Please give the sweet a name.".to_string()));
        }
        let category = Category::parse(category)
            .ok_or_else(|| AppError::Validation("Please choose a category.".to_string()))?;
        let price = price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| AppError::Validation("Price must be a number of at least 0.".to_string()))?;
        let quantity = quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::Validation("Quantity must be a whole number of at least 0.".to_string()))?;

        Ok(Self { name: name.to_string(), category, price, quantity })
    }
}

impl From<&Sweet> for SweetDraft {
    fn from(sweet: &Sweet) -> Self {
        Self {
            name: sweet.name.clone(),
            category: sweet.category,
            price: sweet.price,
            quantity: sweet.quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self { token: resp.token, user: resp.user }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        let user: User = serde_json::from_str(r#"{"name":"ann","role":"ADMIN"}"#).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.email, None);
        assert!(serde_json::from_str::<User>(r#"{"name":"ann","role":"root"}"#).is_err());
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::ALL.len(), 14);
        assert_eq!(Category::parse("Ice Cream"), Some(Category::IceCream));
        assert_eq!(Category::parse("ice cream"), None);
        let json = serde_json::to_string(&Category::IceCream).unwrap();
        assert_eq!(json, r#""Ice Cream""#);
    }

    #[test]
    fn test_draft_validation() {
        let draft = SweetDraft::from_form(" Fudge ", "Candy", "2.50", "12").unwrap();
        assert_eq!(draft.name, "Fudge");
        assert_eq!(draft.category, Category::Candy);
        assert_eq!(draft.quantity, 12);

        assert!(SweetDraft::from_form("", "Candy", "1", "1").is_err());
        assert!(SweetDraft::from_form("Fudge", "", "1", "1").is_err());
        assert!(SweetDraft::from_form("Fudge", "Candy", "-1", "1").is_err());
        assert!(SweetDraft::from_form("Fudge", "Candy", "1", "1.5").is_err());
    }

    #[test]
    fn test_user_initial() {
        let user = User { name: "bob".to_string(), email: None, role: Role::User };
        assert_eq!(user.initial(), 'B');
        let nameless = User { name: String::new(), email: None, role: Role::User };
        assert_eq!(nameless.initial(), 'U');
    }
}
