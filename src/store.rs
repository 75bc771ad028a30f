use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect,
};

use crate::{entities::movie, listing::{ListParams, SortColumn}};

/// All reads and writes of the `movies` table. Nothing is cached; every call
/// round-trips to the store.
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(&self, id: i32) -> Result<Option<movie::Model>, DbErr> {
        movie::Entity::find_by_id(id).one(&self.db).await
    }

    pub async fn insert(&self, model: movie::ActiveModel) -> Result<movie::Model, DbErr> {
        model.insert(&self.db).await
    }

    pub async fn update(&self, model: movie::ActiveModel) -> Result<movie::Model, DbErr> {
        model.update(&self.db).await
    }

    /// Returns the requested page together with the total row count.
    pub async fn page(&self, params: &ListParams) -> Result<(Vec<movie::Model>, u64), DbErr> {
        let total = movie::Entity::find().count(&self.db).await?;
        let Some(offset) = params.offset() else {
            return Ok((Vec::new(), total));
        };

        let mut query =
            movie::Entity::find().order_by(params.sort.as_column(), params.order.as_order());
        if params.sort != SortColumn::Id {
            query = query.order_by_asc(movie::Column::Id);
        }

        let rows = query.limit(params.limit).offset(offset).all(&self.db).await?;
        tracing::debug!(total, rows = rows.len(), page = params.page, "listed movies");
        Ok((rows, total))
    }

    /// Returns the number of rows removed.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }
}
