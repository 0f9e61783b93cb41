//! Tools for reading the HR policy catalog.
//!
//! Policy names are matched exactly on their canonical key, e.g.
//! `vacation_policy`. An unknown name is answered with the full list of keys.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mcp::{dataset::Dataset, error::HrError, format, matching::catalog_key};

#[derive(Serialize, Deserialize, JsonSchema)]
pub struct PolicyRequest {
    #[schemars(
        description = "Name of the policy: vacation_policy, sick_leave, remote_work, dress_code or benefits_overview"
    )]
    pub policy_name: String,
}

/// # Errors
/// `PolicyNotFound` listing every known key when nothing matches.
pub fn get_policy(dataset: &Dataset, policy_name: &str) -> Result<String, HrError> {
    let key = catalog_key(policy_name);
    debug!(%key, "policy lookup");
    dataset.policy(&key).map(format::policy).ok_or_else(|| HrError::PolicyNotFound {
        available: dataset.policy_keys().map(str::to_string).collect(),
        key,
    })
}

#[must_use]
pub fn list_policies(dataset: &Dataset) -> String {
    format::policy_list(dataset.policies())
}
