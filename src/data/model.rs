// ---------------------------------------------------------------------------
// PointTable – column-oriented x / y / z table
// ---------------------------------------------------------------------------

/// One row per source record, in record order. Row index doubles as the
/// point's label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointTable {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

/// Per-axis extent of a non-empty table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Bounds {
    pub fn center(&self) -> [f64; 3] {
        std::array::from_fn(|axis| 0.5 * (self.min[axis] + self.max[axis]))
    }

    pub fn span(&self) -> [f64; 3] {
        std::array::from_fn(|axis| self.max[axis] - self.min[axis])
    }
}

impl PointTable {
    /// Build the table from ordered `(x, y, z)` tuples.
    pub fn from_points(points: &[[f64; 3]]) -> Self {
        points.iter().copied().collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    pub fn row(&self, index: usize) -> Option<[f64; 3]> {
        Some([
            *self.x.get(index)?,
            *self.y.get(index)?,
            *self.z.get(index)?,
        ])
    }

    /// Rows in order, re-assembled from the columns.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = [f64; 3]> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((&x, &y), &z)| [x, y, z])
    }

    pub fn to_points(&self) -> Vec<[f64; 3]> {
        self.rows().collect()
    }

    /// Per-axis min / max, ignoring NaN. `None` when there are no rows.
    pub fn bounds(&self) -> Option<Bounds> {
        if self.is_empty() {
            return None;
        }
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for row in self.rows() {
            for axis in 0..3 {
                min[axis] = min[axis].min(row[axis]);
                max[axis] = max[axis].max(row[axis]);
            }
        }
        Some(Bounds { min, max })
    }
}

impl FromIterator<[f64; 3]> for PointTable {
    fn from_iter<I: IntoIterator<Item = [f64; 3]>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut table = PointTable {
            x: Vec::with_capacity(lower),
            y: Vec::with_capacity(lower),
            z: Vec::with_capacity(lower),
        };
        for [x, y, z] in iter {
            table.x.push(x);
            table.y.push(y);
            table.z.push(z);
        }
        table
    }
}
