use serde::{Deserialize, Serialize};

use crate::scene::TimeOfDay;

use super::{Dimensions, FinishKind, FinishProfile, ShapeKind, ShapeProfile};

/// The user's current pool design.
///
/// Edits never mutate a spec in place; each `with_*` call consumes the
/// record and returns its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSpec {
    pub shape: ShapeKind,
    pub finish: FinishKind,
    pub dimensions: Dimensions,
    #[serde(default)]
    pub time_of_day: TimeOfDay,
}

impl PoolSpec {
    #[must_use]
    pub fn new(shape: ShapeKind, finish: FinishKind, dimensions: Dimensions) -> Self {
        Self {
            shape,
            finish,
            dimensions,
            time_of_day: TimeOfDay::default(),
        }
    }

    #[must_use]
    pub fn with_shape(self, shape: ShapeKind) -> Self {
        Self { shape, ..self }
    }

    #[must_use]
    pub fn with_finish(self, finish: FinishKind) -> Self {
        Self { finish, ..self }
    }

    #[must_use]
    pub fn with_dimensions(self, dimensions: Dimensions) -> Self {
        Self { dimensions, ..self }
    }

    #[must_use]
    pub fn with_time_of_day(self, time_of_day: TimeOfDay) -> Self {
        Self {
            time_of_day,
            ..self
        }
    }

    #[must_use]
    pub fn shape_profile(&self) -> &'static ShapeProfile {
        self.shape.profile()
    }

    #[must_use]
    pub fn finish_profile(&self) -> &'static FinishProfile {
        self.finish.profile()
    }
}
