use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, JoinType, QuerySelect};
use serde::Serialize;

use crate::models::admin_role::{self, Capability};
use crate::models::user_admin_role;

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name.
    pub name: String,
    /// User's unique email address.
    pub email: String,
    /// Optional path or URL of the profile picture.
    pub profile_picture: Option<String>,
    /// Timestamp when the user was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the user was last updated.
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_admin_role::Entity")]
    UserAdminRoles,
}

impl Related<super::user_admin_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAdminRoles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, name: &str, email: &str) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            profile_picture: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Checks whether the user holds the given capability through one of their admin roles.
    pub async fn has_capability(
        db: &DbConn,
        user_id: i64,
        capability: Capability,
    ) -> Result<bool, DbErr> {
        let count = user_admin_role::Entity::find()
            .join(JoinType::InnerJoin, user_admin_role::Relation::AdminRole.def())
            .filter(user_admin_role::Column::UserId.eq(user_id))
            .filter(admin_role::Column::RoleName.eq(capability.to_string()))
            .count(db)
            .await?;

        Ok(count > 0)
    }

    /// Grants a capability to a user, creating the backing admin role on first use.
    ///
    /// Granting a capability the user already holds is a no-op.
    pub async fn grant_capability(
        db: &DbConn,
        user_id: i64,
        capability: Capability,
    ) -> Result<(), DbErr> {
        if Self::has_capability(db, user_id, capability).await? {
            return Ok(());
        }

        let role = admin_role::Model::find_or_create(db, capability).await?;
        user_admin_role::ActiveModel {
            user_id: Set(user_id),
            admin_role_id: Set(role.id),
        }
        .insert(db)
        .await?;

        Ok(())
    }
}
