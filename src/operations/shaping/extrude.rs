use std::f64::consts::FRAC_PI_2;

use crate::error::{OperationError, Result};
use crate::geometry::surface::unit_newell_normal;
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::operations::creation::{MakeFace, MakeSolid, MakeWire};
use crate::topology::{FaceId, ShellData, SolidId, TopologyStore};

/// Times the bevel inset is halved looking for a rim that does not cross
/// itself before the bevel is dropped.
const MAX_INSET_HALVINGS: u32 = 8;
/// Shares of the inset at which the rim ring is checked.
const INSET_FIT_SAMPLES: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Rounded inset applied to the top rim of an extrusion.
///
/// The rim is replaced by `segments` quarter-round steps: step `k` sits at
/// angle `θ = k / segments · π/2`, inset by `inset · (1 - cos θ)` and raised
/// to `length - height + height · sin θ`. The top cap is inset by `inset`;
/// the footprint never grows.
///
/// When the inset rim would cross itself, as at the sharp turns of a
/// stretched outline, the inset is halved until it fits. A bevel that never
/// fits is dropped and the rim stays square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bevel {
    /// Horizontal inset of the top cap.
    pub inset: f64,
    /// Vertical extent of the rounded band.
    pub height: f64,
    /// Number of steps in the quarter-round.
    pub segments: u32,
}

/// Extrudes a planar face along a direction vector to create a solid.
pub struct Extrude {
    face: FaceId,
    direction: Vector3,
    bevel: Option<Bevel>,
}

impl Extrude {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(face: FaceId, direction: Vector3) -> Self {
        Self {
            face,
            direction,
            bevel: None,
        }
    }

    /// Rounds the top rim with the given bevel.
    #[must_use]
    pub fn with_bevel(mut self, bevel: Bevel) -> Self {
        self.bevel = Some(bevel);
        self
    }

    /// Executes the extrusion, creating the solid in the topology store.
    ///
    /// The shell consists of the bottom cap, one quad per base edge per ring
    /// band, and the top cap. Neighbouring faces share bit-identical corner
    /// points.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the direction is zero-length,
    /// the face has inner wires, or the bevel is taller than the extrusion.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let length = self.direction.norm();
        if length < TOLERANCE {
            return Err(
                OperationError::InvalidInput("extrude direction must be non-zero".into()).into(),
            );
        }
        let unit_dir = self.direction / length;

        let face = store.face(self.face)?;
        if !face.inner_wires.is_empty() {
            return Err(OperationError::InvalidInput(
                "extrusion of faces with holes is not supported".into(),
            )
            .into());
        }
        let base_points = store.wire_points(face.outer_wire)?;

        let normal = unit_newell_normal(&base_points).ok_or_else(|| {
            OperationError::Failed("degenerate polygon: cannot compute normal".into())
        })?;

        // Orient the base so it winds counter-clockwise around the direction:
        // the reversed base then faces down and every side quad faces out.
        let base_points: Vec<Point3> = if normal.dot(&self.direction) > 0.0 {
            base_points
        } else {
            base_points.into_iter().rev().collect()
        };
        let normal = if normal.dot(&self.direction) > 0.0 {
            normal
        } else {
            -normal
        };

        let mut rings = vec![base_points.clone()];
        match self.bevel.filter(|b| b.inset > TOLERANCE && b.height > TOLERANCE) {
            Some(bevel) => {
                if bevel.height >= length {
                    return Err(OperationError::InvalidInput(format!(
                        "bevel height {} must be less than extrusion length {length}",
                        bevel.height
                    ))
                    .into());
                }
                let miters = inward_miters(&base_points, &normal)?;
                let inset = fitted_inset(&base_points, &miters, &normal, bevel.inset);
                if inset > 0.0 {
                    let steps = bevel.segments.max(1);
                    for k in 0..=steps {
                        let theta = f64::from(k) / f64::from(steps) * FRAC_PI_2;
                        let step_inset = inset * (1.0 - theta.cos());
                        let rise = length - bevel.height + bevel.height * theta.sin();
                        rings.push(
                            base_points
                                .iter()
                                .zip(&miters)
                                .map(|(p, m)| p + m * step_inset + unit_dir * rise)
                                .collect(),
                        );
                    }
                } else {
                    tracing::debug!(inset = bevel.inset, "bevel does not fit the outline, dropped");
                    rings.push(base_points.iter().map(|p| p + self.direction).collect());
                }
            }
            None => rings.push(base_points.iter().map(|p| p + self.direction).collect()),
        }

        let n = base_points.len();
        let mut all_faces = Vec::with_capacity(2 + n * (rings.len() - 1));

        let bottom_points: Vec<Point3> = base_points.iter().rev().copied().collect();
        all_faces.push(make_planar_face(store, &bottom_points)?);

        for band in rings.windows(2) {
            let (lower, upper) = (&band[0], &band[1]);
            for i in 0..n {
                let j = (i + 1) % n;
                let quad = [lower[i], lower[j], upper[j], upper[i]];
                all_faces.push(make_planar_face(store, &quad)?);
            }
        }

        if let Some(top) = rings.last() {
            all_faces.push(make_planar_face(store, top)?);
        }

        tracing::trace!(faces = all_faces.len(), rings = rings.len(), "extruded face");

        let shell_id = store.add_shell(ShellData {
            faces: all_faces,
            is_closed: true,
        });
        MakeSolid::new(shell_id, vec![]).execute(store)
    }
}

/// Per-vertex inset vectors that move every edge inward by one unit.
///
/// `points` must wind counter-clockwise around `normal`.
fn inward_miters(points: &[Point3], normal: &Vector3) -> Result<Vec<Vector3>> {
    let n = points.len();
    let mut inward = Vec::with_capacity(n);
    for i in 0..n {
        let edge = points[(i + 1) % n] - points[i];
        let len = edge.norm();
        if len < TOLERANCE {
            return Err(OperationError::InvalidInput("zero-length edge in base polygon".into()).into());
        }
        inward.push(normal.cross(&(edge / len)));
    }

    Ok((0..n)
        .map(|i| {
            let prev = inward[(i + n - 1) % n];
            let next = inward[i];
            let denom = 1.0 + prev.dot(&next);
            if denom < 1e-6 {
                next
            } else {
                (prev + next) / denom
            }
        })
        .collect())
}

/// Largest inset, starting from `inset` and halving, whose rim rings keep
/// every edge direction and cross no other edge. Zero if none does.
fn fitted_inset(points: &[Point3], miters: &[Vector3], normal: &Vector3, inset: f64) -> f64 {
    let mut inset = inset;
    for _ in 0..=MAX_INSET_HALVINGS {
        let fits = INSET_FIT_SAMPLES.iter().all(|&f| {
            let ring: Vec<Point3> = points
                .iter()
                .zip(miters)
                .map(|(p, m)| p + m * (inset * f))
                .collect();
            ring_fits(points, &ring, normal)
        });
        if fits {
            return inset;
        }
        inset /= 2.0;
    }
    0.0
}

/// Checks that `ring` is a simple loop whose edges run the same way as the
/// matching edges of `base`. Both lie in planes perpendicular to `normal`.
fn ring_fits(base: &[Point3], ring: &[Point3], normal: &Vector3) -> bool {
    let n = ring.len();
    let edge = |pts: &[Point3], i: usize| pts[(i + 1) % n] - pts[i];
    if (0..n).any(|i| edge(ring, i).dot(&edge(base, i)) <= 0.0) {
        return false;
    }
    let side = |a: &Point3, b: &Point3, c: &Point3| normal.dot(&(b - a).cross(&(c - a)));
    for i in 0..n {
        let (a, b) = (&ring[i], &ring[(i + 1) % n]);
        // Skip the edge itself and its two neighbours.
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (c, d) = (&ring[j], &ring[(j + 1) % n]);
            if side(a, b, c) * side(a, b, d) < 0.0 && side(c, d, a) * side(c, d, b) < 0.0 {
                return false;
            }
        }
    }
    true
}

/// Creates a planar face from a closed loop of points using `MakeWire` + `MakeFace`.
fn make_planar_face(store: &mut TopologyStore, points: &[Point3]) -> Result<FaceId> {
    let wire = MakeWire::new(points.to_vec(), true).execute(store)?;
    MakeFace::new(wire, vec![]).execute(store)
}
