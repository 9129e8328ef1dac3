use std::collections::HashMap;
use std::hash::Hash;
use std::num::NonZeroUsize;

use lodestone_util::random::RandomSource;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("not enough players: {players} players do not overflow a single team of {cap}")]
    NotEnoughPlayers { players: usize, cap: usize },
    #[error("not enough teams: {required} teams required but only {available} available")]
    NotEnoughTeams { required: usize, available: usize },
}

/// Randomly partitions `players` across `teams`.
///
/// With `cap = None` the players are spread as evenly as possible: every
/// roster ends with `players / teams` entries, and a uniformly random subset
/// of teams absorbs one extra player each for the remainder. Every team
/// appears in the result, with an empty roster when there are more teams
/// than players.
///
/// With `cap = Some(n)` every team holds at most `n` players. Only
/// `ceil(players / n)` teams are kept - surplus teams are discarded
/// uniformly at random and are absent from the result. Preconditions are
/// checked before any work and no partial result is ever produced.
///
/// The inputs are never mutated; team identifiers are assumed distinct.
pub fn dispatch<T, P>(
    teams: &[T],
    players: &[P],
    cap: Option<NonZeroUsize>,
    rng: &mut impl RandomSource,
) -> Result<HashMap<T, Vec<P>>, DispatchError>
where
    T: Eq + Hash + Clone,
    P: Clone,
{
    match cap {
        None => dispatch_evenly(teams, players, rng),
        Some(cap) => dispatch_capped(teams, players, cap.get(), rng),
    }
}

fn dispatch_evenly<T, P>(
    teams: &[T],
    players: &[P],
    rng: &mut impl RandomSource,
) -> Result<HashMap<T, Vec<P>>, DispatchError>
where
    T: Eq + Hash + Clone,
    P: Clone,
{
    if teams.is_empty() {
        if players.is_empty() {
            return Ok(HashMap::new());
        }
        return Err(DispatchError::NotEnoughTeams {
            required: 1,
            available: 0,
        });
    }

    let quotient = players.len() / teams.len();
    let remainder = players.len() % teams.len();

    // Draw the rosters' capacities up front: a random subset of `remainder`
    // teams takes one extra player.
    let mut capacities = vec![quotient; teams.len()];
    let mut candidates: Vec<usize> = (0..teams.len()).collect();
    for _ in 0..remainder {
        let pick = rng.next_bounded(candidates.len());
        capacities[candidates.swap_remove(pick)] += 1;
    }

    let pool: Vec<usize> = (0..teams.len())
        .filter(|&team| capacities[team] > 0)
        .collect();
    let rosters = fill_rosters(teams.len(), pool, &capacities, players, rng);

    Ok(teams.iter().cloned().zip(rosters).collect())
}

fn dispatch_capped<T, P>(
    teams: &[T],
    players: &[P],
    cap: usize,
    rng: &mut impl RandomSource,
) -> Result<HashMap<T, Vec<P>>, DispatchError>
where
    T: Eq + Hash + Clone,
    P: Clone,
{
    if players.len() <= cap {
        return Err(DispatchError::NotEnoughPlayers {
            players: players.len(),
            cap,
        });
    }

    let required = players.len().div_ceil(cap);
    if required > teams.len() {
        return Err(DispatchError::NotEnoughTeams {
            required,
            available: teams.len(),
        });
    }

    let mut survivors: Vec<usize> = (0..teams.len()).collect();
    if teams.len() > required {
        log::debug!(
            "discarding {} surplus team(s), keeping {required}",
            teams.len() - required
        );
        for _ in 0..teams.len() - required {
            let pick = rng.next_bounded(survivors.len());
            survivors.swap_remove(pick);
        }
    }

    let capacities = vec![cap; teams.len()];
    let mut rosters = fill_rosters(teams.len(), survivors.clone(), &capacities, players, rng);

    Ok(survivors
        .into_iter()
        .map(|team| (teams[team].clone(), std::mem::take(&mut rosters[team])))
        .collect())
}

/// Assigns each player in turn to a uniformly random team from `pool`,
/// swap-removing a team the instant its roster reaches its capacity.
///
/// The pool's total capacity must be at least `players.len()`; both callers
/// guarantee that, so the pool never runs dry mid-assignment.
fn fill_rosters<P: Clone>(
    team_count: usize,
    mut pool: Vec<usize>,
    capacities: &[usize],
    players: &[P],
    rng: &mut impl RandomSource,
) -> Vec<Vec<P>> {
    let mut rosters: Vec<Vec<P>> = vec![Vec::new(); team_count];
    for player in players {
        let slot = rng.next_bounded(pool.len());
        let team = pool[slot];
        rosters[team].push(player.clone());
        if rosters[team].len() == capacities[team] {
            pool.swap_remove(slot);
        }
    }
    rosters
}

/// Returns a random permutation of `items`, drawn by uniform
/// without-replacement sampling.
pub fn shuffled<T>(mut items: Vec<T>, rng: &mut impl RandomSource) -> Vec<T> {
    let mut mixed = Vec::with_capacity(items.len());
    while !items.is_empty() {
        let pick = rng.next_bounded(items.len());
        mixed.push(items.swap_remove(pick));
    }
    mixed
}
