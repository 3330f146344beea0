use std::collections::HashSet;

use itertools::Itertools;
use tracing::debug;

use crate::chain::chain;
use crate::coord::Coord;
use crate::error::TerritoryError;
use crate::territory::Territory;

/// Returns the valley of the mountain at `seed`: the free coordinates
/// bordering the seed's mountain chain, sorted in canonical reading order.
///
/// Expansion runs in two tiers: the seed's full chain, then every mountain
/// adjacent to a chain member (the chain's own members qualify, since
/// neighboring mountains are by definition part of the chain), then every
/// free neighbor of that border. This collects all free cells touching any
/// mountain reachable from the seed.
///
/// The fallback branch fires only when no *direct neighbor of the seed* is
/// a mountain; it intentionally ignores the rest of the chain and returns
/// the seed's own free neighbors.
///
/// # Errors
/// `InvalidArgument` when `seed` is outside the territory or not a mountain.
#[tracing::instrument(skip(territory))]
pub fn valley(territory: &Territory, seed: Coord) -> Result<Vec<Coord>, TerritoryError> {
    if !territory.contains(seed) {
        return Err(TerritoryError::InvalidArgument(format!(
            "valley: coordinate {seed} is outside the territory"
        )));
    }
    if territory.is_free(seed) {
        return Err(TerritoryError::InvalidArgument(format!(
            "valley: coordinate {seed} is not occupied by a mountain"
        )));
    }

    let links = chain(territory, seed)?;

    // The branch condition looks at the seed's direct neighbors only, never
    // at the rest of the chain.
    let seed_touches_mountain = territory
        .adjacent(seed)
        .into_iter()
        .any(|neighbor| !territory.is_free(neighbor));

    let floor: HashSet<Coord> = if seed_touches_mountain {
        let border: HashSet<Coord> = links
            .iter()
            .flat_map(|&link| territory.adjacent(link))
            .filter(|&neighbor| !territory.is_free(neighbor))
            .collect();
        debug!("chain of {} links, mountain border of {}", links.len(), border.len());

        border
            .into_iter()
            .flat_map(|mountain| territory.adjacent(mountain))
            .filter(|&neighbor| territory.is_free(neighbor))
            .collect()
    } else {
        territory
            .adjacent(seed)
            .into_iter()
            .filter(|&neighbor| territory.is_free(neighbor))
            .collect()
    };

    Ok(floor.into_iter().sorted().collect())
}
