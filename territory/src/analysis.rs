use std::collections::HashSet;

use tracing::debug;

use crate::chain::flood;
use crate::error::TerritoryError;
use crate::territory::Territory;
use crate::valley::valley;

/// Number of cells occupied by mountains.
pub fn mountain_count(territory: &Territory) -> usize {
    territory
        .coords()
        .filter(|&coord| !territory.is_free(coord))
        .count()
}

/// Number of distinct mountain chains.
///
/// Scans column-major, row ascending. Every discovered chain is marked in a
/// local covered-set so each chain is counted exactly once.
#[tracing::instrument(skip(territory))]
pub fn mountain_chain_count(territory: &Territory) -> usize {
    let mut covered = HashSet::new();
    let mut chains = 0;

    for coord in territory.coords() {
        if territory.is_free(coord) || covered.contains(&coord) {
            continue;
        }
        let members = flood(territory, coord);
        debug!("new chain at {coord} with {} members", members.len());
        covered.extend(members);
        chains += 1;
    }

    chains
}

/// Total number of distinct coordinates across all valleys of the
/// territory. Every mountain cell seeds a valley; overlapping valleys are
/// merged into one accumulator, so shared cells count once.
///
/// # Errors
/// `InvalidArgument` cannot actually occur for seeds produced by the scan;
/// the signature propagates the valley resolver's contract unchanged.
#[tracing::instrument(skip(territory))]
pub fn total_valley_area(territory: &Territory) -> Result<usize, TerritoryError> {
    let mut floor = HashSet::new();

    for coord in territory.coords() {
        if !territory.is_free(coord) {
            floor.extend(valley(territory, coord)?);
        }
    }

    Ok(floor.len())
}
