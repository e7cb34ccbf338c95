use crate::entities::{prelude::*, products};
use crate::models::product::non_blank;
use crate::models::{Availability, NewProduct, Product, ProductPatch};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set};
use tracing::info;

pub struct ProductRepository {
    conn: DatabaseConnection,
}

impl ProductRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model_to_product(model: products::Model) -> Product {
        Product {
            id: model.id,
            name: model.name,
            price: model.price,
            image: model.image,
            availability: model.availability.parse().unwrap_or(Availability::InStock),
            category: model.category,
            description: model.description,
            created_at: Some(model.created_at),
            updated_at: Some(model.updated_at),
        }
    }

    /// Newest first.
    pub async fn list_all(&self) -> anyhow::Result<Vec<Product>> {
        let rows = Products::find()
            .order_by_desc(products::Column::CreatedAt)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model_to_product).collect())
    }

    pub async fn get(&self, id: &str) -> anyhow::Result<Option<Product>> {
        let row = Products::find_by_id(id.to_string()).one(&self.conn).await?;
        Ok(row.map(Self::map_model_to_product))
    }

    pub async fn count(&self) -> anyhow::Result<u64> {
        use sea_orm::PaginatorTrait;
        Ok(Products::find().count(&self.conn).await?)
    }

    pub async fn insert(&self, input: NewProduct) -> anyhow::Result<Product> {
        let active_model = products::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(input.name),
            price: Set(input.price),
            image: Set(input.image),
            availability: Set(input.availability.to_string()),
            category: Set(input.category),
            description: Set(input.description),
            ..Default::default()
        };

        let model = active_model.insert(&self.conn).await?;
        info!("Added product: {} ({})", model.name, model.id);
        Ok(Self::map_model_to_product(model))
    }

    pub async fn update(&self, id: &str, patch: ProductPatch) -> anyhow::Result<Option<Product>> {
        let Some(existing) = Products::find_by_id(id.to_string()).one(&self.conn).await? else {
            return Ok(None);
        };

        let mut active_model = existing.into_active_model();
        if let Some(name) = patch.name {
            active_model.name = Set(name);
        }
        if let Some(price) = patch.price {
            active_model.price = Set(price);
        }
        if let Some(image) = patch.image {
            active_model.image = Set(image);
        }
        if let Some(availability) = patch.availability {
            active_model.availability = Set(availability.to_string());
        }
        if let Some(category) = patch.category {
            active_model.category = Set(non_blank(Some(category)));
        }
        if let Some(description) = patch.description {
            active_model.description = Set(non_blank(Some(description)));
        }

        let model = active_model.update(&self.conn).await?;
        Ok(Some(Self::map_model_to_product(model)))
    }

    pub async fn delete(&self, id: &str) -> anyhow::Result<bool> {
        let result = Products::delete_by_id(id.to_string())
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
