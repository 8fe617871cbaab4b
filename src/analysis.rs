//! Site analysis service interface.
//!
//! Analysis of backyard photos is an external service. The crate defines the
//! contract and ships [`FixtureSiteAnalysis`], a deterministic implementation
//! that returns a fixed report, for demos and tests.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::pool::{Dimensions, FinishKind, PoolSpec, ShapeKind};

/// Input to a site analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRequest {
    pub address: String,
    /// Number of uploaded backyard photos.
    pub photo_count: u32,
}

/// Minimum distances from the lot lines, in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Setbacks {
    pub front: f64,
    pub side: f64,
    pub rear: f64,
}

/// Findings of a site analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteReport {
    pub address: String,
    pub lot_area_sq_ft: f64,
    pub usable_area_sq_ft: f64,
    pub setbacks: Setbacks,
    pub soil: String,
    pub permits: Vec<String>,
    pub suggested: PoolSpec,
}

/// A provider of site analyses.
pub trait SiteAnalysisService {
    /// Analyzes a site.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError`] if the request cannot be analyzed.
    fn analyze(&self, request: &SiteRequest) -> Result<SiteReport>;
}

/// Returns the same documented report for every request with photos.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSiteAnalysis;

impl SiteAnalysisService for FixtureSiteAnalysis {
    fn analyze(&self, request: &SiteRequest) -> Result<SiteReport> {
        if request.photo_count == 0 {
            return Err(AnalysisError::NoPhotos.into());
        }
        if request.address.trim().is_empty() {
            return Err(AnalysisError::Unavailable("address is required".into()).into());
        }
        Ok(SiteReport {
            address: request.address.trim().to_owned(),
            lot_area_sq_ft: 8_500.0,
            usable_area_sq_ft: 2_400.0,
            setbacks: Setbacks {
                front: 25.0,
                side: 5.0,
                rear: 10.0,
            },
            soil: "sandy loam".to_owned(),
            permits: vec![
                "residential pool building permit".to_owned(),
                "electrical permit".to_owned(),
                "barrier fence inspection".to_owned(),
            ],
            suggested: PoolSpec::new(
                ShapeKind::Lagoon,
                FinishKind::PebbleTec,
                Dimensions::new(28.0, 14.0, 6.0)?,
            ),
        })
    }
}

/// Steps of an analysis, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnalysisStage {
    Upload,
    Detection,
    Measurement,
    Compliance,
    Estimate,
}

impl AnalysisStage {
    pub const ALL: [Self; 5] = [
        Self::Upload,
        Self::Detection,
        Self::Measurement,
        Self::Compliance,
        Self::Estimate,
    ];

    /// Percent complete once this stage finishes.
    #[must_use]
    pub const fn progress(self) -> u8 {
        match self {
            Self::Upload => 20,
            Self::Detection => 40,
            Self::Measurement => 60,
            Self::Compliance => 80,
            Self::Estimate => 100,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upload => "Uploading photos",
            Self::Detection => "Detecting yard features",
            Self::Measurement => "Measuring usable area",
            Self::Compliance => "Checking setbacks and permits",
            Self::Estimate => "Preparing estimate",
        }
    }

    /// The stage after this one, or `None` once complete.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Upload => Some(Self::Detection),
            Self::Detection => Some(Self::Measurement),
            Self::Measurement => Some(Self::Compliance),
            Self::Compliance => Some(Self::Estimate),
            Self::Estimate => None,
        }
    }
}
