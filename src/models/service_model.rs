use serde::{Deserialize, Serialize};

pub const TEST_SERVICE_TITLE: &str = "Test Air Conditioner";
pub const TEST_SERVICE_DESCRIPTION: &str = "Standard cleaning test service";
pub const TEST_SERVICE_BASE_PRICE: i64 = 12000;
pub const TEST_SERVICE_DURATION_MINUTES: i32 = 60;
pub const TEST_SERVICE_CATEGORY: &str = "Air Conditioner";

/// Row of `services` as returned by the data store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceModel {
    pub id: uuid::Uuid,
    pub organization_id: Option<uuid::Uuid>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub base_price: Option<i64>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Insert payload for `services`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewServiceModel {
    pub organization_id: uuid::Uuid,
    pub title: String,
    pub description: String,
    /// Minor currency units
    pub base_price: i64,
    /// Minutes
    pub duration: i32,
    pub category: String,
    pub is_active: bool,
}

impl NewServiceModel {
    pub fn test_air_conditioner(organization_id: uuid::Uuid) -> Self {
        Self {
            organization_id,
            title: TEST_SERVICE_TITLE.to_string(),
            description: TEST_SERVICE_DESCRIPTION.to_string(),
            base_price: TEST_SERVICE_BASE_PRICE,
            duration: TEST_SERVICE_DURATION_MINUTES,
            category: TEST_SERVICE_CATEGORY.to_string(),
            is_active: true,
        }
    }
}
