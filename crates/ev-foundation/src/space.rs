use std::fmt;

use serde::{Deserialize, Serialize};

/// Interior space adjacent to a foundation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoundationSpace {
    /// Slab-on-grade under living space.
    ConditionedSpace,
    BasementConditioned,
    BasementUnconditioned,
    CrawlspaceVented,
    CrawlspaceUnvented,
    CrawlspaceConditioned,
    Garage,
}

impl FoundationSpace {
    /// Slab-on-grade spaces, which may legitimately have no foundation wall.
    pub fn is_wall_less(self) -> bool {
        matches!(
            self,
            FoundationSpace::ConditionedSpace | FoundationSpace::Garage
        )
    }
}

impl fmt::Display for FoundationSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FoundationSpace::ConditionedSpace => "conditioned space",
            FoundationSpace::BasementConditioned => "conditioned basement",
            FoundationSpace::BasementUnconditioned => "unconditioned basement",
            FoundationSpace::CrawlspaceVented => "vented crawlspace",
            FoundationSpace::CrawlspaceUnvented => "unvented crawlspace",
            FoundationSpace::CrawlspaceConditioned => "conditioned crawlspace",
            FoundationSpace::Garage => "garage",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slab_on_grade_spaces_are_wall_less() {
        assert!(FoundationSpace::ConditionedSpace.is_wall_less());
        assert!(FoundationSpace::Garage.is_wall_less());
        assert!(!FoundationSpace::BasementConditioned.is_wall_less());
        assert!(!FoundationSpace::CrawlspaceVented.is_wall_less());
    }
}
