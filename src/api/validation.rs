use super::ApiError;

pub fn validate_product_id(id: &str) -> Result<&str, ApiError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("Product ID cannot be empty"));
    }

    Ok(trimmed)
}

pub fn validate_search_query(query: &str) -> Result<&str, ApiError> {
    if query.len() > 200 {
        return Err(ApiError::validation(
            "Search text must be 200 characters or less",
        ));
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert_eq!(validate_product_id("1714557600000").unwrap(), "1714557600000");
        assert_eq!(validate_product_id(" abc ").unwrap(), "abc");
        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        let long = "a".repeat(80);
        assert_eq!(validate_product_id(&long).unwrap(), long);
    }

    #[test]
    fn test_validate_search_query() {
        assert!(validate_search_query("").is_ok());
        assert!(validate_search_query("rice").is_ok());
        assert!(validate_search_query(&"x".repeat(201)).is_err());
    }
}
