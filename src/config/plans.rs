//! Plan catalog configuration
//!
//! Maps checkout plan ids to monetary amounts. The catalog holds up to two
//! plans read from the environment; entries with a missing id or a
//! non-positive value are skipped at load time.

use serde::Deserialize;
use uuid::Uuid;

/// A purchasable plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    pub id: Uuid,
    pub value: f64,
}

/// Raw plan slots as they appear in the environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanConfig {
    pub plan_1_id: Option<Uuid>,
    pub plan_1_value: Option<f64>,
    pub plan_2_id: Option<Uuid>,
    pub plan_2_value: Option<f64>,
}

impl PlanConfig {
    /// Build the catalog, dropping incomplete or non-positive entries.
    pub fn catalog(&self) -> PlanCatalog {
        let mut plans = Vec::new();
        for (id, value) in [
            (self.plan_1_id, self.plan_1_value),
            (self.plan_2_id, self.plan_2_value),
        ] {
            match (id, value) {
                (Some(id), Some(value)) if value > 0.0 => plans.push(Plan { id, value }),
                (Some(id), _) => {
                    tracing::warn!(plan_id = %id, "Skipping plan with missing or non-positive value");
                }
                _ => {}
            }
        }
        PlanCatalog { plans }
    }
}

/// Validated plan lookup table.
#[derive(Debug, Clone, Default)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    /// Look a plan up by id. Uuid parsing on the way in already normalizes
    /// case and surrounding whitespace, matching how ids arrive from URLs.
    pub fn find(&self, id: Uuid) -> Option<Plan> {
        self.plans.iter().copied().find(|p| p.id == id)
    }

    /// All configured plans.
    pub fn all(&self) -> &[Plan] {
        &self.plans
    }
}
