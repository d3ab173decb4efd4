/// Generic axis-aligned bounding box for N-dimensional space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox<const D: usize> {
    pub min: [f64; D],
    pub max: [f64; D],
}

impl<const D: usize> BoundingBox<D> {
    pub fn new(min: [f64; D], max: [f64; D]) -> Self {
        Self { min, max }
    }

    /// Computes the tightest box around `points`, or `None` when there are none.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a [f64; D]>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut min = *first;
        let mut max = *first;

        for p in iter {
            for axis in 0..D {
                if p[axis] < min[axis] { min[axis] = p[axis]; }
                if p[axis] > max[axis] { max[axis] = p[axis]; }
            }
        }
        Some(Self { min, max })
    }

    /// Width of the box along every axis.
    pub fn size(&self) -> [f64; D] {
        let mut size = [0.0; D];
        for axis in 0..D {
            size[axis] = self.max[axis] - self.min[axis];
        }
        size
    }

    /// Grows the box by `margin` on every side.
    pub fn padded(&self, margin: f64) -> Self {
        let mut min = self.min;
        let mut max = self.max;
        for axis in 0..D {
            min[axis] -= margin;
            max[axis] += margin;
        }
        Self { min, max }
    }

    pub fn contains(&self, point: &[f64; D]) -> bool {
        (0..D).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }
}

/// How the subdivision builder reads the second corner of its working region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExtentMode {
    /// `extent` is the absolute upper corner of the region.
    #[default]
    Absolute,
    /// `extent` is the width and height of the region, measured from `origin`.
    Size,
}

/// Working region handed to a planar subdivision builder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubdivisionRegion {
    pub origin: [f64; 2],
    pub extent: [f64; 2],
    pub mode: ExtentMode,
}

impl SubdivisionRegion {
    /// Derives the region from the bounds of a point set, expressed in `mode`.
    pub fn from_bounds(bounds: &BoundingBox<2>, mode: ExtentMode) -> Self {
        let extent = match mode {
            ExtentMode::Absolute => bounds.max,
            ExtentMode::Size => bounds.size(),
        };
        Self { origin: bounds.min, extent, mode }
    }

    /// Absolute upper corner of the region.
    pub fn upper(&self) -> [f64; 2] {
        match self.mode {
            ExtentMode::Absolute => self.extent,
            ExtentMode::Size => [self.origin[0] + self.extent[0], self.origin[1] + self.extent[1]],
        }
    }

    pub fn to_bounds(&self) -> BoundingBox<2> {
        BoundingBox::new(self.origin, self.upper())
    }
}

/// Calculates the ID for a bounding box side based on the axis and direction.
///
/// The IDs start at -1 and decrease, so they never collide with seed indices.
/// - Axis 0 (X) Min: -1
/// - Axis 0 (X) Max: -2
/// - Axis 1 (Y) Min: -3
/// - Axis 1 (Y) Max: -4
pub fn box_side(axis: usize, is_max: bool) -> i32 {
    -1 - (axis * 2 + if is_max { 1 } else { 0 }) as i32
}
