use serde::Deserialize;

/// Row of `organizations` fetched with `select=id`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrganizationModel {
    pub id: uuid::Uuid,
}
