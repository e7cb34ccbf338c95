use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub slug: &'static str,
    pub label: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category {
        slug: "biscuits-snacks",
        label: "Biscuits & Snacks",
    },
    Category {
        slug: "rice-pulses",
        label: "Rice & Pulses",
    },
    Category {
        slug: "cooking-oil",
        label: "Cooking Oil",
    },
    Category {
        slug: "spices",
        label: "Spices & Masala",
    },
    Category {
        slug: "namkeen",
        label: "Namkeen",
    },
    Category {
        slug: "soap-shampoo",
        label: "Soap & Shampoo",
    },
    Category {
        slug: "detergents",
        label: "Detergents",
    },
    Category {
        slug: "household",
        label: "Household Items",
    },
    Category {
        slug: "general",
        label: "General",
    },
];

/// Display label for a category tag. Unknown tags are shown as-is.
#[must_use]
pub fn category_label(slug: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|c| c.slug == slug)
        .map_or(slug, |c| c.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_labels() {
        assert_eq!(category_label("rice-pulses"), "Rice & Pulses");
        assert_eq!(category_label("frozen"), "frozen");
    }
}
