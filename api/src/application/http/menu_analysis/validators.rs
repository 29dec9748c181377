use nutriflow_core::domain::{menu_analysis::entities::MenuItem, profile::UserProfile};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeMenuValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "menuItems must be a non-empty list"))]
    pub menu_items: Vec<MenuItem>,
    #[serde(default)]
    pub user_profile: UserProfile,
}
