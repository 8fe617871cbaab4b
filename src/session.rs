//! Design session state.
//!
//! The session owns the current [`PoolSpec`], the placed elements and a
//! solid cache. Every edit replaces whole records rather than mutating them
//! in place, which keeps undo/redo trivial and lets a renderer detect changes
//! by comparison.

use std::sync::Arc;

use serde::Serialize;

use crate::config::BuildOptions;
use crate::error::{DesignError, Result};
use crate::math::Point3;
use crate::pool::{Dimensions, FinishKind, GeneratedSolid, PoolSpec, ShapeKind, SolidCache};
use crate::scene::{ring_position, ComposeScene, ElementKind, SceneDescription, SceneElement, TimeOfDay};

/// Itemized project cost, in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    /// Rim area times the finish rate.
    pub shell: f64,
    pub shape_surcharge: f64,
    pub elements: f64,
    pub total: f64,
}

/// One user's in-progress design.
#[derive(Debug)]
pub struct DesignSession {
    spec: PoolSpec,
    elements: Vec<SceneElement>,
    next_element_id: u32,
    undo_stack: Vec<PoolSpec>,
    redo_stack: Vec<PoolSpec>,
    cache: SolidCache,
    options: BuildOptions,
}

impl Default for DesignSession {
    fn default() -> Self {
        Self::new(PoolSpec::default(), BuildOptions::default())
    }
}

impl DesignSession {
    #[must_use]
    pub fn new(spec: PoolSpec, options: BuildOptions) -> Self {
        Self {
            spec,
            elements: Vec::new(),
            next_element_id: 1,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            cache: SolidCache::default(),
            options,
        }
    }

    #[must_use]
    pub fn spec(&self) -> &PoolSpec {
        &self.spec
    }

    #[must_use]
    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    #[must_use]
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    #[must_use]
    pub fn cache(&self) -> &SolidCache {
        &self.cache
    }

    /// Replaces the pool spec, recording the old one for undo. No-op edits are
    /// not recorded.
    fn commit(&mut self, next: PoolSpec) {
        if next == self.spec {
            return;
        }
        self.undo_stack.push(std::mem::replace(&mut self.spec, next));
        self.redo_stack.clear();
    }

    pub fn set_shape(&mut self, shape: ShapeKind) {
        self.commit(self.spec.with_shape(shape));
    }

    pub fn set_finish(&mut self, finish: FinishKind) {
        self.commit(self.spec.with_finish(finish));
    }

    pub fn set_time_of_day(&mut self, time_of_day: TimeOfDay) {
        self.commit(self.spec.with_time_of_day(time_of_day));
    }

    /// Validates and applies new dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::InvalidDimension`] and leaves the pool spec untouched
    /// if any value is not finite and positive.
    pub fn set_dimensions(&mut self, length: f64, width: f64, depth: f64) -> Result<()> {
        let dimensions = Dimensions::new(length, width, depth)?;
        self.commit(self.spec.with_dimensions(dimensions));
        Ok(())
    }

    /// Restores the previous spec. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(std::mem::replace(&mut self.spec, previous));
        true
    }

    /// Re-applies the last undone spec. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(std::mem::replace(&mut self.spec, next));
        true
    }

    /// Returns the solid for the current spec, building it on a cache miss.
    ///
    /// # Errors
    ///
    /// Propagates geometry build errors.
    pub fn solid(&mut self) -> Result<Arc<GeneratedSolid>> {
        self.cache
            .get_or_build(self.spec.shape, &self.spec.dimensions, &self.options)
    }

    /// Places a new element on the ring around the pool and returns its id.
    ///
    /// # Errors
    ///
    /// Propagates geometry build errors from sizing the pool footprint.
    pub fn add_element(&mut self, kind: ElementKind) -> Result<u32> {
        let footprint = self.solid()?.footprint;
        let id = self.next_element_id;
        self.next_element_id += 1;
        let position = ring_position(self.elements.len(), &footprint);
        self.elements = self
            .elements
            .iter()
            .copied()
            .chain(std::iter::once(SceneElement::new(id, kind, position)))
            .collect();
        tracing::debug!(id, ?kind, "added scene element");
        Ok(id)
    }

    /// Makes `id` the only selected element.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::UnknownElement`] if no element has that id.
    pub fn select_element(&mut self, id: u32) -> Result<()> {
        self.ensure_element(id)?;
        self.replace_elements(|e| SceneElement {
            selected: e.id == id,
            ..*e
        });
        Ok(())
    }

    /// Starts dragging `id`; it becomes the selected element.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::UnknownElement`] if no element has that id.
    pub fn begin_drag(&mut self, id: u32) -> Result<()> {
        self.ensure_element(id)?;
        self.replace_elements(|e| SceneElement {
            selected: e.id == id,
            dragging: e.id == id,
            ..*e
        });
        Ok(())
    }

    /// Moves `id` to a ground position; the height is pinned to grade.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::UnknownElement`] if no element has that id.
    pub fn drag_element(&mut self, id: u32, position: Point3) -> Result<()> {
        self.ensure_element(id)?;
        let grounded = Point3::new(position.x, 0.0, position.z);
        self.replace_elements(|e| {
            if e.id == id {
                e.with_position(grounded)
            } else {
                *e
            }
        });
        Ok(())
    }

    /// Ends the drag of `id`, keeping it selected.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::UnknownElement`] if no element has that id.
    pub fn end_drag(&mut self, id: u32) -> Result<()> {
        self.ensure_element(id)?;
        self.replace_elements(|e| SceneElement {
            dragging: false,
            ..*e
        });
        Ok(())
    }

    /// Removes every element.
    pub fn reset_elements(&mut self) {
        self.elements = Vec::new();
    }

    /// Prices the current design.
    ///
    /// # Errors
    ///
    /// Propagates geometry build errors.
    pub fn estimate(&mut self) -> Result<CostEstimate> {
        let area = self.solid()?.surface_area();
        let shell = area * self.spec.finish_profile().cost_per_sq_ft;
        let shape_surcharge = self.spec.shape_profile().surcharge;
        let elements = self.elements.iter().map(|e| e.profile().unit_cost).sum::<f64>();
        Ok(CostEstimate {
            shell,
            shape_surcharge,
            elements,
            total: shell + shape_surcharge + elements,
        })
    }

    /// Composes the scene for the current state at `elapsed` seconds.
    ///
    /// # Errors
    ///
    /// Propagates geometry and fixture build errors.
    pub fn compose(&mut self, elapsed: f64) -> Result<SceneDescription> {
        let solid = self.solid()?;
        ComposeScene::new(&self.spec, &self.elements, self.spec.time_of_day.profile())
            .at_time(elapsed)
            .execute_with_solid(&solid, &self.options)
    }

    fn ensure_element(&self, id: u32) -> Result<()> {
        if self.elements.iter().any(|e| e.id == id) {
            Ok(())
        } else {
            Err(DesignError::UnknownElement(id).into())
        }
    }

    fn replace_elements(&mut self, edit: impl Fn(&SceneElement) -> SceneElement) {
        self.elements = self.elements.iter().map(edit).collect();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::PoolscapeError;

    #[test]
    fn undo_and_redo_walk_spec_history() {
        let mut session = DesignSession::default();
        let original = *session.spec();
        session.set_shape(ShapeKind::Kidney);
        session.set_finish(FinishKind::GlassTile);
        assert!(session.undo());
        assert_eq!(session.spec().finish, original.finish);
        assert_eq!(session.spec().shape, ShapeKind::Kidney);
        assert!(session.undo());
        assert_eq!(*session.spec(), original);
        assert!(!session.undo());
        assert!(session.redo());
        assert_eq!(session.spec().shape, ShapeKind::Kidney);
    }

    #[test]
    fn new_edit_clears_redo() {
        let mut session = DesignSession::default();
        session.set_shape(ShapeKind::Lap);
        session.undo();
        session.set_finish(FinishKind::Quartzite);
        assert!(!session.redo());
    }

    #[test]
    fn repeated_edit_is_not_recorded() {
        let mut session = DesignSession::default();
        session.set_time_of_day(TimeOfDay::Night);
        session.set_time_of_day(TimeOfDay::Night);
        assert!(session.undo());
        assert!(!session.undo());
    }

    #[test]
    fn invalid_dimensions_leave_spec_untouched() {
        let mut session = DesignSession::default();
        let before = *session.spec();
        let err = session.set_dimensions(20.0, -3.0, 5.0).unwrap_err();
        assert!(matches!(err, PoolscapeError::Design(DesignError::InvalidDimension { name: "width", .. })));
        assert_eq!(*session.spec(), before);
        assert!(!session.undo());
    }

    #[test]
    fn selection_and_drag_replace_records() {
        let mut session = DesignSession::default();
        let a = session.add_element(ElementKind::FirePit).unwrap();
        let b = session.add_element(ElementKind::Hedge).unwrap();
        session.select_element(a).unwrap();
        session.begin_drag(b).unwrap();
        session.drag_element(b, Point3::new(30.0, 5.0, -2.0)).unwrap();
        session.end_drag(b).unwrap();

        let elements = session.elements();
        assert!(!elements[0].selected);
        assert!(elements[1].selected && !elements[1].dragging);
        assert_eq!(elements[1].position, Point3::new(30.0, 0.0, -2.0));
    }

    #[test]
    fn unknown_element_is_an_error() {
        let mut session = DesignSession::default();
        let err = session.select_element(42).unwrap_err();
        assert!(matches!(err, PoolscapeError::Design(DesignError::UnknownElement(42))));
    }

    #[test]
    fn reset_keeps_ids_unique() {
        let mut session = DesignSession::default();
        let first = session.add_element(ElementKind::Shrub).unwrap();
        session.reset_elements();
        assert!(session.elements().is_empty());
        assert_ne!(session.add_element(ElementKind::Shrub).unwrap(), first);
    }

    #[test]
    fn estimate_adds_shell_surcharge_and_elements() {
        let spec = PoolSpec::new(
            ShapeKind::Infinity,
            FinishKind::PebbleTec,
            Dimensions::new(20.0, 10.0, 5.0).unwrap(),
        );
        let mut session = DesignSession::new(spec, BuildOptions::default());
        session.add_element(ElementKind::Pergola).unwrap();
        let estimate = session.estimate().unwrap();
        assert_relative_eq!(estimate.shell, 200.0 * 85.0, epsilon = 1e-9);
        assert_relative_eq!(estimate.shape_surcharge, 15_000.0);
        assert_relative_eq!(estimate.elements, 9_500.0);
        assert_relative_eq!(estimate.total, 17_000.0 + 15_000.0 + 9_500.0, epsilon = 1e-9);
    }

    #[test]
    fn inverted_segment_bounds_fail_instead_of_panicking() {
        let spec = PoolSpec::new(ShapeKind::Lagoon, FinishKind::Plaster, Dimensions::default());
        let options = BuildOptions {
            min_curve_segments: 10,
            max_curve_segments: 2,
            ..BuildOptions::default()
        };
        let mut session = DesignSession::new(spec, options);
        let err = session.compose(0.0).unwrap_err();
        assert!(matches!(err, PoolscapeError::Config(_)));
    }

    #[test]
    fn compose_reuses_cached_solid() {
        let mut session = DesignSession::default();
        session.compose(0.0).unwrap();
        session.compose(1.0).unwrap();
        assert_eq!(session.cache().misses(), 1);
        assert_eq!(session.cache().hits(), 1);
    }
}
