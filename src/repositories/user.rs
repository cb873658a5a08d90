use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Set};

use crate::entities::user;

pub struct UserRepository;

impl UserRepository {
    /// Insert-or-increment the view counter for `user_id`.
    ///
    /// The whole read-modify-write happens inside one `INSERT ... ON CONFLICT
    /// DO UPDATE` statement, with the increment expressed in SQL, so concurrent
    /// requests for the same id serialize at the database and no update is
    /// lost. `RETURNING` hands back the row exactly as this statement left it;
    /// a follow-up SELECT could observe a later increment instead. On SQLite
    /// that requires the `sqlite-use-returning-for-3_35` feature, otherwise
    /// sea-orm falls back to insert-then-select.
    pub async fn increment_views(
        db: &impl ConnectionTrait,
        user_id: &str,
    ) -> Result<user::Model, DbErr> {
        let now = Utc::now();

        let new_user = user::ActiveModel {
            id: Set(user_id.to_owned()),
            views: Set(1),
            created_at: Set(now),
            updated_at: Set(now),
        };

        user::Entity::insert(new_user)
            .on_conflict(
                OnConflict::column(user::Column::Id)
                    .value(
                        user::Column::Views,
                        Expr::col((user::Entity, user::Column::Views)).add(1),
                    )
                    .value(user::Column::UpdatedAt, now)
                    .to_owned(),
            )
            .exec_with_returning(db)
            .await
    }
}
