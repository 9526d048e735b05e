//! Canonical identifier minting.
//!
//! All identifiers in a response (record ids, predecessor links and
//! containment references) come from [`encode`], so a period computed as a
//! leaf and the same period computed as a container share one id.

use uuid::Uuid;

use crate::models::{PeriodId, PeriodInterval};

/// Namespace for name-based period identifiers.
const PERIOD_NAMESPACE: Uuid = Uuid::from_u128(0x3b6f_2c1e_9a4d_5e70_8c21_d4a7_0f5b_9e36);

/// Mint the identifier for a canonical date key.
pub fn encode(date_key: &str) -> PeriodId {
    PeriodId::new(Uuid::new_v5(&PERIOD_NAMESPACE, date_key.as_bytes()))
}

/// Identifier of an aligned interval.
pub fn period_id(interval: &PeriodInterval) -> PeriodId {
    encode(&interval.canonical_key())
}
