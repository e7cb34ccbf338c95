use serde::{Deserialize, Serialize};

use crate::models::{Availability, NewProduct, ProductPatch};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            message: Some(message.into()),
        }
    }
}

/// The admin form posts prices either as numbers or as the raw input text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    pub fn parse(&self) -> Result<f64, String> {
        match self {
            PriceInput::Number(n) => Ok(*n),
            PriceInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("Invalid price: '{}'", s)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<PriceInput>,
    pub image: Option<String>,
    pub availability: Option<Availability>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl CreateProductRequest {
    /// Missing (absent, null or blank) name, price or image is rejected as a whole.
    pub fn into_new_product(self) -> Result<NewProduct, String> {
        let (Some(name), Some(price), Some(image)) = (
            self.name.filter(|n| !n.trim().is_empty()),
            self.price,
            self.image.filter(|i| !i.trim().is_empty()),
        ) else {
            return Err("Missing required fields".to_string());
        };

        Ok(NewProduct {
            name,
            price: price.parse()?,
            image,
            availability: self.availability.unwrap_or_default(),
            category: self.category,
            description: self.description,
        })
    }
}

/// Partial update. Identity and timestamps sent by the client are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<PriceInput>,
    pub image: Option<String>,
    pub availability: Option<Availability>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl UpdateProductRequest {
    pub fn into_patch(self) -> Result<ProductPatch, String> {
        let price = self.price.as_ref().map(PriceInput::parse).transpose()?;

        Ok(ProductPatch {
            name: self.name,
            price,
            image: self.image,
            availability: self.availability,
            category: self.category,
            description: self.description,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct EnquiryDto {
    pub message: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatusDto {
    pub version: String,
    pub backend: String,
    pub product_count: usize,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_accepts_string_price() {
        let req: CreateProductRequest = serde_json::from_str(
            r#"{"name":"Oil 1L","price":"900","image":"oil.png","category":"cooking-oil"}"#,
        )
        .unwrap();
        let product = req.into_new_product().unwrap();
        assert_eq!(product.price, 900.0);
        assert_eq!(product.availability, Availability::InStock);
        assert_eq!(product.category.as_deref(), Some("cooking-oil"));
    }

    #[test]
    fn test_create_request_missing_fields() {
        let req: CreateProductRequest =
            serde_json::from_str(r#"{"name":"Oil 1L","image":"oil.png"}"#).unwrap();
        assert_eq!(
            req.into_new_product().unwrap_err(),
            "Missing required fields"
        );

        let req: CreateProductRequest =
            serde_json::from_str(r#"{"name":"","price":10,"image":"oil.png"}"#).unwrap();
        assert!(req.into_new_product().is_err());
    }

    #[test]
    fn test_create_request_allows_zero_price() {
        let req: CreateProductRequest =
            serde_json::from_str(r#"{"name":"Sample","price":0,"image":"s.png"}"#).unwrap();
        assert_eq!(req.into_new_product().unwrap().price, 0.0);
    }

    #[test]
    fn test_update_request_ignores_identity_fields() {
        let req: UpdateProductRequest = serde_json::from_str(
            r#"{"_id":"other","createdAt":"2020-01-01T00:00:00Z","price":"12.5"}"#,
        )
        .unwrap();
        let patch = req.into_patch().unwrap();
        assert_eq!(patch.price, Some(12.5));
        assert!(patch.name.is_none());
    }

    #[test]
    fn test_update_request_rejects_bad_price_text() {
        let req: UpdateProductRequest = serde_json::from_str(r#"{"price":"cheap"}"#).unwrap();
        assert!(req.into_patch().is_err());
    }
}
