use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stock level shown on the product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    #[default]
    InStock,
    Limited,
    OutOfStock,
}

impl Availability {
    pub const ALL: [Self; 3] = [Self::InStock, Self::Limited, Self::OutOfStock];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in-stock",
            Self::Limited => "limited",
            Self::OutOfStock => "out-of-stock",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::Limited => "Limited Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| {
                format!("Invalid availability '{s}'. Expected in-stock, limited or out-of-stock")
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Builds a fresh record from validated input. Both timestamps are set to `now`.
    #[must_use]
    pub fn from_new(id: String, input: NewProduct, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
            image: input.image,
            availability: input.availability,
            category: input.category,
            description: input.description,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Merges the provided fields over this record and refreshes `updated_at`.
    pub fn apply_patch(&mut self, patch: ProductPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(availability) = patch.availability {
            self.availability = availability;
        }
        if let Some(category) = patch.category {
            self.category = non_blank(Some(category));
        }
        if let Some(description) = patch.description {
            self.description = non_blank(Some(description));
        }
        self.updated_at = Some(now);
    }
}

/// Input for creating a product. `id` and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub image: String,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            image: image.into(),
            availability: Availability::default(),
            category: None,
            description: None,
        }
    }

    #[must_use]
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Trims text fields and drops blank optional ones.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            price: self.price,
            image: self.image.trim().to_string(),
            availability: self.availability,
            category: non_blank(self.category),
            description: non_blank(self.description),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)?;
        validate_price(self.price)?;
        validate_image(&self.image)
    }
}

/// Field-level update. Absent fields keep their current value; a blank
/// category or description clears that field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub availability: Option<Availability>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl ProductPatch {
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.map(|n| n.trim().to_string()),
            price: self.price,
            image: self.image.map(|i| i.trim().to_string()),
            availability: self.availability,
            category: self.category.map(|c| c.trim().to_string()),
            description: self.description.map(|d| d.trim().to_string()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(image) = &self.image {
            validate_image(image)?;
        }
        Ok(())
    }
}

/// Current time truncated to milliseconds, the precision stored timestamps carry.
#[must_use]
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Product name is required".to_string());
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), String> {
    if !price.is_finite() {
        return Err("Product price must be a number".to_string());
    }
    if price < 0.0 {
        return Err("Price must be positive".to_string());
    }
    Ok(())
}

pub fn validate_image(image: &str) -> Result<(), String> {
    if image.trim().is_empty() {
        return Err("Product image is required".to_string());
    }
    Ok(())
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
