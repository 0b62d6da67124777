//! Reference grid scenarios.
//!
//! Each fixture returns the dimension lengths, the bridges to place, and
//! whether the resulting grid spans.

/// A named bridge layout with its expected spanning result.
pub struct Scenario {
    pub name: &'static str,
    pub lengths: &'static [i32],
    pub bridges: &'static [&'static [i32]],
    pub spans: bool,
}

/// Connected path from column 0 to column 2 on a 3x4 grid.
pub const LINKED_3X4: Scenario = Scenario {
    name: "linked 3x4",
    lengths: &[3, 4],
    bridges: &[&[0, 0], &[0, 2], &[1, 0], &[1, 1], &[2, 1]],
    spans: true,
};

/// [`LINKED_3X4`] with the `(1, 0)` link removed.
pub const BROKEN_3X4: Scenario = Scenario {
    name: "broken 3x4",
    lengths: &[3, 4],
    bridges: &[&[0, 0], &[0, 2], &[1, 1], &[2, 1]],
    spans: false,
};

/// The single cell of a length-1 line.
pub const SINGLE_CELL_LINE: Scenario = Scenario {
    name: "single cell line",
    lengths: &[1],
    bridges: &[&[0]],
    spans: true,
};

/// No bridges at all.
pub const EMPTY_4X4: Scenario = Scenario {
    name: "empty 4x4",
    lengths: &[4, 4],
    bridges: &[],
    spans: false,
};

/// A straight rod through a 4x3x3 box along axis 0.
pub const ROD_4X3X3: Scenario = Scenario {
    name: "rod 4x3x3",
    lengths: &[4, 3, 3],
    bridges: &[&[0, 1, 1], &[1, 1, 1], &[2, 1, 1], &[3, 1, 1]],
    spans: true,
};

/// Two bridges on opposite faces of a 3x3x3 box, not connected.
pub const SPLIT_3X3X3: Scenario = Scenario {
    name: "split 3x3x3",
    lengths: &[3, 3, 3],
    bridges: &[&[0, 0, 0], &[2, 2, 2]],
    spans: false,
};

/// Every reference scenario.
pub const ALL: &[Scenario] = &[
    LINKED_3X4,
    BROKEN_3X4,
    SINGLE_CELL_LINE,
    EMPTY_4X4,
    ROD_4X3X3,
    SPLIT_3X3X3,
];

impl Scenario {
    /// Build the scenario's grid with its bridges placed.
    pub fn build(&self) -> orth_grid::Grid {
        crate::grid_with_bridges(self.lengths, self.bridges)
    }
}
