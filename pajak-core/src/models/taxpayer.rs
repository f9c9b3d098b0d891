use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of dependents that can raise the PTKP exemption.
pub const MAX_PTKP_DEPENDENTS: u8 = 3;

/// Saturates a declared dependent count into `0..=MAX_PTKP_DEPENDENTS`.
///
/// # Example
///
/// ```
/// use pajak_core::clamp_dependents;
///
/// assert_eq!(clamp_dependents(2), 2);
/// assert_eq!(clamp_dependents(300), 3);
/// assert_eq!(clamp_dependents(-1), 0);
/// ```
pub fn clamp_dependents(count: i64) -> u8 {
    let clamped = count.clamp(0, i64::from(MAX_PTKP_DEPENDENTS));
    if clamped != count {
        debug!(count, clamped, "dependent count clamped");
    }
    u8::try_from(clamped).unwrap_or(MAX_PTKP_DEPENDENTS)
}

struct DependentsVisitor;

impl Visitor<'_> for DependentsVisitor {
    type Value = u8;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a whole number of dependents")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<u8, E> {
        Ok(clamp_dependents(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<u8, E> {
        Ok(clamp_dependents(i64::try_from(value).unwrap_or(i64::MAX)))
    }
}

fn deserialize_dependents<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_i64(DependentsVisitor)
}

/// Personal status that drives the PTKP exemption and the NPWP surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxpayerProfile {
    #[serde(default)]
    pub married: bool,

    /// Declared dependents. Anything above [`MAX_PTKP_DEPENDENTS`] does not
    /// raise the exemption further; on the wire any count is accepted and
    /// saturated into range.
    #[serde(default, deserialize_with = "deserialize_dependents")]
    pub dependents: u8,

    /// Whether the taxpayer holds an NPWP (taxpayer identification number).
    #[serde(default = "default_has_tax_id")]
    pub has_tax_id: bool,
}

fn default_has_tax_id() -> bool {
    true
}

impl TaxpayerProfile {
    pub fn new(
        married: bool,
        dependents: u8,
        has_tax_id: bool,
    ) -> Self {
        Self {
            married,
            dependents,
            has_tax_id,
        }
    }
}

impl Default for TaxpayerProfile {
    /// Single, no dependents, holding an NPWP.
    fn default() -> Self {
        Self::new(false, 0, true)
    }
}
