//! Target arrangements for the tiles.
//!
//! Every layout is a pure function of a record's index (and, for the sphere,
//! the record count). Nothing here looks at where tiles currently are.

use std::fmt;
use std::str::FromStr;

use crate::math::bounds::AABB;
use crate::scene_graph::Transform;

pub mod grid;
pub mod helix;
pub mod sphere;
pub mod table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Table,
    Sphere,
    Helix,
    Grid,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 4] = [
        LayoutKind::Table,
        LayoutKind::Sphere,
        LayoutKind::Helix,
        LayoutKind::Grid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::Table => "table",
            LayoutKind::Sphere => "sphere",
            LayoutKind::Helix => "helix",
            LayoutKind::Grid => "grid",
        }
    }

    fn target(&self, index: usize, count: usize) -> Transform {
        match self {
            LayoutKind::Table => table::transform(index),
            LayoutKind::Sphere => sphere::transform(index, count),
            LayoutKind::Helix => helix::transform(index),
            LayoutKind::Grid => grid::transform(index),
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout `{0}`, expected one of table, sphere, helix, grid")]
pub struct UnknownLayout(pub String);

impl FromStr for LayoutKind {
    type Err = UnknownLayout;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        LayoutKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| UnknownLayout(name.to_string()))
    }
}

/// Target transforms for every layout, one per record in record order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutSet {
    table: Vec<Transform>,
    sphere: Vec<Transform>,
    helix: Vec<Transform>,
    grid: Vec<Transform>,
}

impl LayoutSet {
    pub fn get(&self, kind: LayoutKind) -> &[Transform] {
        match kind {
            LayoutKind::Table => &self.table,
            LayoutKind::Sphere => &self.sphere,
            LayoutKind::Helix => &self.helix,
            LayoutKind::Grid => &self.grid,
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn bounds(&self, kind: LayoutKind) -> Option<AABB> {
        AABB::from_points(self.get(kind).iter().map(|target| target.position))
    }
}

pub fn compute_layouts(count: usize) -> LayoutSet {
    let build = |kind: LayoutKind| -> Vec<Transform> {
        (0..count).map(|index| kind.target(index, count)).collect()
    };

    LayoutSet {
        table: build(LayoutKind::Table),
        sphere: build(LayoutKind::Sphere),
        helix: build(LayoutKind::Helix),
        grid: build(LayoutKind::Grid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_layout_has_one_target_per_record() {
        for count in [0, 1, 2, 19, 20, 21, 199, 200, 201, 450] {
            let layouts = compute_layouts(count);
            for kind in LayoutKind::ALL {
                assert_eq!(layouts.get(kind).len(), count, "{kind} with {count}");
            }
        }
    }

    #[test]
    fn empty_count_yields_empty_layouts() {
        let layouts = compute_layouts(0);
        assert!(layouts.is_empty());
        assert!(layouts.bounds(LayoutKind::Grid).is_none());
    }

    #[test]
    fn computing_twice_is_bit_identical() {
        let first = compute_layouts(200);
        let second = compute_layouts(200);

        for kind in LayoutKind::ALL {
            for (a, b) in first.get(kind).iter().zip(second.get(kind)) {
                let bits = |transform: &Transform| {
                    (
                        transform.position.to_array().map(f32::to_bits),
                        transform.rotation.to_array().map(f32::to_bits),
                    )
                };
                assert_eq!(bits(a), bits(b));
            }
        }
    }

    #[test]
    fn table_example_positions() {
        let layouts = compute_layouts(2);
        let table = layouts.get(LayoutKind::Table);
        assert_eq!(table[0].position.to_array(), [-1700.0, 1000.0, 0.0]);
        assert_eq!(table[1].position.to_array(), [-1520.0, 1000.0, 0.0]);
    }

    #[test]
    fn names_round_trip_and_unknown_fails() {
        for kind in LayoutKind::ALL {
            assert_eq!(kind.as_str().parse::<LayoutKind>(), Ok(kind));
        }
        assert_eq!(
            "spiral".parse::<LayoutKind>(),
            Err(UnknownLayout("spiral".to_string()))
        );
    }

    #[test]
    fn grid_bounds_cover_lattice() {
        let layouts = compute_layouts(40);
        let bounds = layouts.bounds(LayoutKind::Grid).unwrap();
        assert_eq!(bounds.min.to_array(), [-800.0, -600.0, 200.0]);
        assert_eq!(bounds.max.to_array(), [800.0, 600.0, 1000.0]);
    }
}
