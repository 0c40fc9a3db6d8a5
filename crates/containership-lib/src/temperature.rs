//! Temperature validation for refrigerated cargo.
//!
//! Each product category carries a fixed temperature floor; a refrigerated
//! container is only accepted when its maintained temperature sits at or
//! above that floor. Colder values are rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Closed enumeration of product categories carried in refrigerated containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    Bananas,
    Chocolate,
    Meat,
    Fish,
    IceCream,
    Cheese,
    FrozenPizza,
    Butter,
    Sausages,
    Eggs,
}

impl ProductType {
    /// Every known product category, in declaration order.
    pub const ALL: [ProductType; 10] = [
        ProductType::Bananas,
        ProductType::Chocolate,
        ProductType::Meat,
        ProductType::Fish,
        ProductType::IceCream,
        ProductType::Cheese,
        ProductType::FrozenPizza,
        ProductType::Butter,
        ProductType::Sausages,
        ProductType::Eggs,
    ];
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProductType::Bananas => "bananas",
            ProductType::Chocolate => "chocolate",
            ProductType::Meat => "meat",
            ProductType::Fish => "fish",
            ProductType::IceCream => "ice-cream",
            ProductType::Cheese => "cheese",
            ProductType::FrozenPizza => "frozen-pizza",
            ProductType::Butter => "butter",
            ProductType::Sausages => "sausages",
            ProductType::Eggs => "eggs",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ProductType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bananas" => Ok(ProductType::Bananas),
            "chocolate" => Ok(ProductType::Chocolate),
            "meat" => Ok(ProductType::Meat),
            "fish" => Ok(ProductType::Fish),
            "ice-cream" | "icecream" => Ok(ProductType::IceCream),
            "cheese" => Ok(ProductType::Cheese),
            "frozen-pizza" | "frozenpizza" => Ok(ProductType::FrozenPizza),
            "butter" => Ok(ProductType::Butter),
            "sausages" => Ok(ProductType::Sausages),
            "eggs" => Ok(ProductType::Eggs),
            other => Err(Error::UnknownProduct {
                name: other.to_string(),
            }),
        }
    }
}

/// Minimum allowed maintained temperature for a product category.
///
/// # Example
///
/// ```
/// use containership_lib::temperature::{minimum_temperature, ProductType};
///
/// assert_eq!(minimum_temperature(ProductType::Fish), -15.0);
/// ```
pub fn minimum_temperature(product: ProductType) -> f64 {
    match product {
        ProductType::Bananas => 13.3,
        ProductType::Chocolate => 18.0,
        ProductType::Meat => 2.0,
        ProductType::Fish => -15.0,
        ProductType::IceCream => -18.0,
        ProductType::Cheese => -30.0,
        ProductType::FrozenPizza => 7.2,
        ProductType::Butter => 5.0,
        ProductType::Sausages => 20.5,
        ProductType::Eggs => 19.0,
    }
}

/// Check a maintained temperature against the product's floor.
///
/// The floor is inclusive: a temperature exactly at the minimum is valid,
/// anything colder is not.
pub fn is_valid(product: ProductType, current_temperature: f64) -> bool {
    current_temperature >= minimum_temperature(product)
}
