use chrono::{DateTime, SubsecRound, Utc};
use sea_orm::ActiveValue;
use sea_orm::entity::prelude::*;

use crate::models::Availability;
use crate::models::product::{validate_image, validate_name, validate_price};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub image: String,
    /// One of `in-stock`, `limited`, `out-of-stock`; enforced in `before_save`.
    pub availability: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

fn current<V>(value: &ActiveValue<V>) -> Option<&V>
where
    V: Into<sea_orm::Value>,
{
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(v),
        ActiveValue::NotSet => None,
    }
}

fn invalid(message: impl Into<String>) -> DbErr {
    DbErr::Custom(format!("Product validation failed: {}", message.into()))
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let name = current(&self.name).ok_or_else(|| invalid("Product name is required"))?;
        validate_name(name).map_err(invalid)?;

        let price = current(&self.price).ok_or_else(|| invalid("Product price is required"))?;
        validate_price(*price).map_err(invalid)?;

        let image = current(&self.image).ok_or_else(|| invalid("Product image is required"))?;
        validate_image(image).map_err(invalid)?;

        match current(&self.availability).cloned() {
            Some(availability) => {
                availability.parse::<Availability>().map_err(invalid)?;
            }
            None => {
                self.availability = ActiveValue::Set(Availability::default().to_string());
            }
        }

        let now = Utc::now().trunc_subsecs(3);
        if insert && current(&self.created_at).is_none() {
            self.created_at = ActiveValue::Set(now);
        }
        self.updated_at = ActiveValue::Set(now);

        Ok(self)
    }
}
