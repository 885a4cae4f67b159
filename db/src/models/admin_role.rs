use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Named administrative role. Each row backs exactly one [`Capability`].
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "admin_roles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub role_name: String,
}

/// Capabilities a user can be granted through admin roles.
///
/// The string form is what gets stored in `admin_roles.role_name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    ReportAdmin,
    StudentAdmin,
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
    pub async fn find_or_create(db: &DbConn, capability: Capability) -> Result<Model, DbErr> {
        let role_name = capability.to_string();
        if let Some(existing) = Entity::find()
            .filter(Column::RoleName.eq(role_name.as_str()))
            .one(db)
            .await?
        {
            return Ok(existing);
        }

        ActiveModel {
            role_name: Set(role_name),
            ..Default::default()
        }
        .insert(db)
        .await
    }
}
