use std::collections::HashSet;

use itertools::Itertools;
use tracing::debug;

use crate::coord::Coord;
use crate::error::TerritoryError;
use crate::territory::Territory;

/// Flood-fills from `seed` across same-valued cells. The caller guarantees
/// `seed` is contained in the territory; the visited set is bounded by the
/// grid, so the worklist always drains.
pub(crate) fn flood(territory: &Territory, seed: Coord) -> HashSet<Coord> {
    let target = territory.value_at(seed);

    let mut visited = HashSet::new();
    let mut stack = vec![seed];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        for neighbor in territory.adjacent(current) {
            if !visited.contains(&neighbor) && territory.value_at(neighbor) == target {
                stack.push(neighbor);
            }
        }
    }

    visited
}

/// Returns the maximal set of same-valued coordinates connected to `seed`,
/// sorted in canonical reading order.
///
/// # Errors
/// `InvalidArgument` when `seed` is outside the territory.
#[tracing::instrument(skip(territory))]
pub fn chain(territory: &Territory, seed: Coord) -> Result<Vec<Coord>, TerritoryError> {
    if !territory.contains(seed) {
        return Err(TerritoryError::InvalidArgument(format!(
            "chain: coordinate {seed} is outside the territory"
        )));
    }

    let members = flood(territory, seed);
    debug!("chain at {seed} has {} members", members.len());

    Ok(members.into_iter().sorted().collect())
}

/// True iff `a` and `b` lie on the same chain. Membership is an equivalence
/// relation on same-valued cells, so the result is symmetric in `a` and `b`.
///
/// # Errors
/// `InvalidArgument` when either coordinate is outside the territory.
pub fn connected(territory: &Territory, a: Coord, b: Coord) -> Result<bool, TerritoryError> {
    for coord in [a, b] {
        if !territory.contains(coord) {
            return Err(TerritoryError::InvalidArgument(format!(
                "connected: coordinate {coord} is outside the territory"
            )));
        }
    }

    Ok(flood(territory, a).contains(&b))
}
