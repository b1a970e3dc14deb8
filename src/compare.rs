//! Comparison of system and DoH answers.

use crate::resolver::AddressSet;

/// Returns the addresses the system resolver returned that the DoH resolver did not.
///
/// An empty input means that lookup failed, so nothing is compared and the
/// result is empty: missing data is never evidence of spoofing. Addresses only
/// DoH returned are not flagged; the system resolver is the one under suspicion.
pub fn compare(system: &AddressSet, doh: &AddressSet) -> AddressSet {
    if system.is_empty() || doh.is_empty() {
        return AddressSet::new();
    }
    system.difference(doh).copied().collect()
}
