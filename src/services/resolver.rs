//! Most-confident-first slot resolution.
//!
//! Every edge orbit and the corners form a pool: one legal color combination
//! per slot, derived from the cube's frame. Each round every unresolved slot
//! ranks the distinct combinations still in the pool, and the slot whose best
//! choice leads its runner-up by the widest margin is committed. Committing
//! removes one instance of that combination from the pool.

use cube_color::{ColorName, DistanceCache, Lab};

use super::permutations::permutations;
use crate::error::ConsistencyError;
use crate::models::{Anchor, CubeState, ResolutionStep, SideId, Stage};

type Combination = Vec<ColorName>;

/// A group of squares on one physical piece.
#[derive(Debug, Clone)]
struct Slot {
    label: String,
    positions: Vec<usize>,
    /// Combination this slot holds on a solved cube.
    home: Combination,
}

#[derive(Debug, Clone)]
struct Scored {
    combination: Combination,
    /// Best ordering of `combination` over the slot's squares.
    colors: Vec<ColorName>,
    score: f64,
}

/// Outcome of one resolved pool.
#[derive(Debug, Clone)]
pub struct StageOutcome {
    pub steps: Vec<ResolutionStep>,
    pub leftover: usize,
}

/// Resolves edge and corner slots of one cube.
pub struct SlotResolver<'a> {
    cube: &'a mut CubeState,
    cache: &'a mut DistanceCache,
    /// Reference Lab per color, indexed by [`ColorName::index`].
    references: [Lab; 6],
    /// Solved-cube color per side, indexed by [`SideId::ordinal`].
    frame: [ColorName; 6],
}

impl<'a> SlotResolver<'a> {
    /// Scores are measured against each anchor's scanned color, which tracks
    /// this scan's lighting better than a fixed palette.
    pub fn new(
        cube: &'a mut CubeState,
        cache: &'a mut DistanceCache,
        anchors: &[Anchor; 6],
        frame: [ColorName; 6],
    ) -> Self {
        let mut references = [Lab::new(0.0, 0.0, 0.0); 6];
        for anchor in anchors {
            references[anchor.name.index()] = anchor.lab;
        }
        Self {
            cube,
            cache,
            references,
            frame,
        }
    }

    /// Resolve every edge orbit, then the corners.
    pub fn resolve_all(&mut self) -> Result<StageOutcome, ConsistencyError> {
        let mut outcome = StageOutcome {
            steps: Vec::new(),
            leftover: 0,
        };

        for orbit in 0..self.cube.size().orbit_count() {
            let slots: Vec<Slot> = self
                .cube
                .topology()
                .edges_in_orbit(orbit)
                .map(|slot| self.slot(slot.label(), &slot.positions, &slot.sides))
                .collect();
            let stage = self.resolve_stage(Stage::Edges { orbit }, slots)?;
            outcome.steps.extend(stage.steps);
            outcome.leftover += stage.leftover;
        }

        let slots: Vec<Slot> = self
            .cube
            .topology()
            .corners()
            .iter()
            .map(|slot| self.slot(slot.label(), &slot.positions, &slot.sides))
            .collect();
        let stage = self.resolve_stage(Stage::Corners, slots)?;
        outcome.steps.extend(stage.steps);
        outcome.leftover += stage.leftover;

        Ok(outcome)
    }

    fn slot(&self, label: String, positions: &[usize], sides: &[SideId]) -> Slot {
        let mut home: Combination = sides
            .iter()
            .map(|side| self.frame[side.ordinal()])
            .collect();
        home.sort_unstable();
        Slot {
            label,
            positions: positions.to_vec(),
            home,
        }
    }

    fn resolve_stage(
        &mut self,
        stage: Stage,
        pending: Vec<Slot>,
    ) -> Result<StageOutcome, ConsistencyError> {
        let mut pool: Vec<Combination> =
            pending.iter().map(|slot| slot.home.clone()).collect();
        pool.sort();
        self.resolve_pool(stage, pending, pool)
    }

    /// Commit slots until none are pending.
    ///
    /// A pool built from its own slots always holds one combination per
    /// pending slot, so running dry means the pool and slots disagree.
    fn resolve_pool(
        &mut self,
        stage: Stage,
        mut pending: Vec<Slot>,
        mut pool: Vec<Combination>,
    ) -> Result<StageOutcome, ConsistencyError> {
        let mut steps = Vec::with_capacity(pending.len());

        while !pending.is_empty() {
            let mut candidates: Vec<(f64, Scored)> = Vec::with_capacity(pending.len());
            for slot in &pending {
                let mut ranked = self.rank(slot, &pool).into_iter();
                let best = ranked
                    .next()
                    .ok_or_else(|| ConsistencyError::NoLegalCombination {
                        stage,
                        slot: slot.label.clone(),
                        remaining: pool.len(),
                    })?;
                let margin = ranked
                    .next()
                    .map_or(best.score, |second| second.score - best.score);
                tracing::debug!(slot = %slot.label, score = best.score, margin, "Ranked slot");
                candidates.push((margin, best));
            }

            let mut chosen = 0;
            for (i, (margin, _)) in candidates.iter().enumerate() {
                if *margin > candidates[chosen].0 {
                    chosen = i;
                }
            }
            let competing_margin = candidates
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != chosen)
                .map(|(_, (margin, _))| *margin)
                .reduce(f64::max);

            let (margin, best) = candidates.swap_remove(chosen);
            let slot = pending.remove(chosen);

            let assignments: Vec<(usize, ColorName)> = slot
                .positions
                .iter()
                .copied()
                .zip(best.colors.iter().copied())
                .collect();
            self.cube.assign_all(&assignments)?;
            if let Some(i) = pool.iter().position(|c| *c == best.combination) {
                pool.remove(i);
            }

            tracing::info!(
                %stage,
                slot = %slot.label,
                colors = ?best.colors,
                score = best.score,
                margin,
                "Committed slot"
            );

            steps.push(ResolutionStep {
                stage,
                slot: slot.label,
                colors: best.colors,
                score: best.score,
                margin,
                competing_margin,
            });
        }

        tracing::info!(
            %stage,
            slots = steps.len(),
            leftover = pool.len(),
            "Resolved stage"
        );

        Ok(StageOutcome {
            steps,
            leftover: pool.len(),
        })
    }

    /// Distinct pool combinations for `slot`, best first.
    fn rank(&mut self, slot: &Slot, pool: &[Combination]) -> Vec<Scored> {
        let mut ranked: Vec<Scored> = Vec::new();
        for combination in pool {
            if ranked.iter().any(|s| &s.combination == combination) {
                continue;
            }
            let (score, colors) = self.best_ordering(&slot.positions, combination);
            ranked.push(Scored {
                combination: combination.clone(),
                colors,
                score,
            });
        }
        ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
        ranked
    }

    /// Cheapest way to lay `combination` onto `positions`.
    fn best_ordering(
        &mut self,
        positions: &[usize],
        combination: &[ColorName],
    ) -> (f64, Vec<ColorName>) {
        let mut best = (f64::INFINITY, combination.to_vec());
        for order in permutations(combination.len()) {
            let mut total = 0.0;
            for (&position, &i) in positions.iter().zip(&order) {
                let reference = self.references[combination[i].index()];
                total += self.cache.distance(self.cube.lab(position), reference);
            }
            if total < best.0 {
                best = (total, order.iter().map(|&i| combination[i]).collect());
            }
        }
        best
    }
}
