//! Construction categories and the candidate-list synthesis engine.

use std::fmt;

use ev_core::units::RValue;
use ev_core::Real;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assembly::{Assembly, materialize};
use crate::cmu::CmuSet;
use crate::double_stud::DoubleStudSet;
use crate::error::{ConstructionError, ConstructionResult};
use crate::generic::GenericSet;
use crate::icf::IcfSet;
use crate::sip::SipSet;
use crate::steel_stud::SteelStudSet;
use crate::traits::ConstructionSet;
use crate::wood_stud::WoodStudSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    WoodStud,
    SteelStud,
    DoubleStud,
    Sip,
    Cmu,
    Icf,
    GenericMass,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CategoryKind::WoodStud => "WoodStud",
            CategoryKind::SteelStud => "SteelStud",
            CategoryKind::DoubleStud => "DoubleStud",
            CategoryKind::Sip => "SIP",
            CategoryKind::Cmu => "CMU",
            CategoryKind::Icf => "ICF",
            CategoryKind::GenericMass => "GenericMass",
        };
        f.write_str(name)
    }
}

/// A category with its prioritized candidate sets.
///
/// Candidates run from the most typical construction to a fallback with
/// minimal fixed resistance, which always produces a result.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstructionCategory {
    WoodStud(Vec<WoodStudSet>),
    SteelStud(Vec<SteelStudSet>),
    DoubleStud(Vec<DoubleStudSet>),
    Sip(Vec<SipSet>),
    Cmu(Vec<CmuSet>),
    Icf(Vec<IcfSet>),
    GenericMass(Vec<GenericSet>),
}

impl ConstructionCategory {
    pub fn kind(&self) -> CategoryKind {
        match self {
            ConstructionCategory::WoodStud(_) => CategoryKind::WoodStud,
            ConstructionCategory::SteelStud(_) => CategoryKind::SteelStud,
            ConstructionCategory::DoubleStud(_) => CategoryKind::DoubleStud,
            ConstructionCategory::Sip(_) => CategoryKind::Sip,
            ConstructionCategory::Cmu(_) => CategoryKind::Cmu,
            ConstructionCategory::Icf(_) => CategoryKind::Icf,
            ConstructionCategory::GenericMass(_) => CategoryKind::GenericMass,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ConstructionCategory::WoodStud(v) => v.len(),
            ConstructionCategory::SteelStud(v) => v.len(),
            ConstructionCategory::DoubleStud(v) => v.len(),
            ConstructionCategory::Sip(v) => v.len(),
            ConstructionCategory::Cmu(v) => v.len(),
            ConstructionCategory::Icf(v) => v.len(),
            ConstructionCategory::GenericMass(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Candidate at `index`, in priority order.
    pub fn candidate(&self, index: usize) -> Option<CandidateSet> {
        match self {
            ConstructionCategory::WoodStud(v) => v.get(index).cloned().map(CandidateSet::WoodStud),
            ConstructionCategory::SteelStud(v) => {
                v.get(index).cloned().map(CandidateSet::SteelStud)
            }
            ConstructionCategory::DoubleStud(v) => {
                v.get(index).cloned().map(CandidateSet::DoubleStud)
            }
            ConstructionCategory::Sip(v) => v.get(index).cloned().map(CandidateSet::Sip),
            ConstructionCategory::Cmu(v) => v.get(index).cloned().map(CandidateSet::Cmu),
            ConstructionCategory::Icf(v) => v.get(index).cloned().map(CandidateSet::Icf),
            ConstructionCategory::GenericMass(v) => {
                v.get(index).cloned().map(CandidateSet::GenericMass)
            }
        }
    }
}

/// One chosen candidate, owned.
#[derive(Debug, Clone, PartialEq)]
pub enum CandidateSet {
    WoodStud(WoodStudSet),
    SteelStud(SteelStudSet),
    DoubleStud(DoubleStudSet),
    Sip(SipSet),
    Cmu(CmuSet),
    Icf(IcfSet),
    GenericMass(GenericSet),
}

impl CandidateSet {
    pub fn as_dyn(&self) -> &dyn ConstructionSet {
        match self {
            CandidateSet::WoodStud(s) => s,
            CandidateSet::SteelStud(s) => s,
            CandidateSet::DoubleStud(s) => s,
            CandidateSet::Sip(s) => s,
            CandidateSet::Cmu(s) => s,
            CandidateSet::Icf(s) => s,
            CandidateSet::GenericMass(s) => s,
        }
    }

    pub fn kind(&self) -> CategoryKind {
        match self {
            CandidateSet::WoodStud(_) => CategoryKind::WoodStud,
            CandidateSet::SteelStud(_) => CategoryKind::SteelStud,
            CandidateSet::DoubleStud(_) => CategoryKind::DoubleStud,
            CandidateSet::Sip(_) => CategoryKind::Sip,
            CandidateSet::Cmu(_) => CategoryKind::Cmu,
            CandidateSet::Icf(_) => CategoryKind::Icf,
            CandidateSet::GenericMass(_) => CategoryKind::GenericMass,
        }
    }
}

/// Outcome of [`synthesize`].
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedConstruction {
    pub set: CandidateSet,
    pub candidate_index: usize,
    /// Solved layer R-value, never negative.
    pub unknown_r: RValue,
    /// False when the fallback candidate had to be used.
    pub matched: bool,
    pub film_r: RValue,
    pub requested_r: RValue,
}

impl SolvedConstruction {
    pub fn kind(&self) -> CategoryKind {
        self.set.kind()
    }

    pub fn non_cavity_r(&self) -> RValue {
        self.set.as_dyn().non_cavity_r(self.film_r)
    }

    /// Assembly R-value the chosen set delivers with the solved unknown.
    pub fn achieved_r(&self) -> RValue {
        self.set
            .as_dyn()
            .assembly_r(self.non_cavity_r(), self.unknown_r)
    }

    pub fn materialize(&self, name: impl Into<String>) -> ConstructionResult<Assembly> {
        materialize(name, self.set.as_dyn(), self.film_r, self.unknown_r)
    }
}

/// Pick the first candidate whose solved unknown is positive.
///
/// When every preferred candidate fails, the last candidate is used unmatched:
/// its unknown is clamped to zero or above and the result carries
/// `matched = false`.
pub fn synthesize(
    category: &ConstructionCategory,
    assembly_r: RValue,
    film_r: RValue,
) -> ConstructionResult<SolvedConstruction> {
    if !assembly_r.is_finite() || assembly_r <= 0.0 {
        return Err(ConstructionError::NonPhysical {
            what: "assembly R-value",
            value: assembly_r,
        });
    }
    if !film_r.is_finite() || film_r < 0.0 {
        return Err(ConstructionError::NonPhysical {
            what: "air film R-value",
            value: film_r,
        });
    }

    let request = Request { assembly_r, film_r };
    match category {
        ConstructionCategory::WoodStud(v) => request.pick(v, CandidateSet::WoodStud),
        ConstructionCategory::SteelStud(v) => request.pick(v, CandidateSet::SteelStud),
        ConstructionCategory::DoubleStud(v) => request.pick(v, CandidateSet::DoubleStud),
        ConstructionCategory::Sip(v) => request.pick(v, CandidateSet::Sip),
        ConstructionCategory::Cmu(v) => request.pick(v, CandidateSet::Cmu),
        ConstructionCategory::Icf(v) => request.pick(v, CandidateSet::Icf),
        ConstructionCategory::GenericMass(v) => request.pick(v, CandidateSet::GenericMass),
    }
}

struct Request {
    assembly_r: RValue,
    film_r: RValue,
}

impl Request {
    fn pick<S>(
        &self,
        candidates: &[S],
        wrap: fn(S) -> CandidateSet,
    ) -> ConstructionResult<SolvedConstruction>
    where
        S: ConstructionSet + Clone,
    {
        let Some((fallback, preferred)) = candidates.split_last() else {
            return Err(ConstructionError::InvalidArg {
                what: "candidate list is empty",
            });
        };

        for (index, set) in preferred.iter().enumerate() {
            match self.solve(set) {
                Some(x) if x > 0.0 => return Ok(self.solved(wrap(set.clone()), index, x, true)),
                solved => debug!(
                    candidate = index,
                    set = %set.describe(),
                    ?solved,
                    requested = self.assembly_r,
                    "candidate rejected"
                ),
            }
        }

        let unknown = self.solve(fallback).map_or(0.0, |x| x.max(0.0));
        debug!(
            set = %fallback.describe(),
            unknown,
            requested = self.assembly_r,
            "using fallback candidate"
        );
        Ok(self.solved(wrap(fallback.clone()), preferred.len(), unknown, false))
    }

    fn solve<S: ConstructionSet>(&self, set: &S) -> Option<Real> {
        let non_cavity = set.non_cavity_r(self.film_r);
        set.solve_unknown(self.assembly_r, non_cavity)
    }

    fn solved(
        &self,
        set: CandidateSet,
        candidate_index: usize,
        unknown_r: RValue,
        matched: bool,
    ) -> SolvedConstruction {
        SolvedConstruction {
            set,
            candidate_index,
            unknown_r,
            matched,
            film_r: self.film_r,
            requested_r: self.assembly_r,
        }
    }
}
