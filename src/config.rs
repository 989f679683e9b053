//! Tunables of the wall dimensioning command.

use crate::error::ConfigError;
use crate::host::Category;
use crate::math::VECTOR_TOLERANCE;
use crate::operations::reference::SpecialReferenceKind;

/// Distance between the wall baseline and the dimension line.
pub const DEFAULT_OFFSET: f64 = 5.0;

/// Label of the transaction the dimension is committed in.
pub const DEFAULT_TRANSACTION: &str = "Create Dimensions";

/// Prompt shown while the user picks a wall.
pub const DEFAULT_PROMPT: &str = "Select a wall to dimension";

/// Configuration for [`DimensionWall`](crate::DimensionWall).
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionConfig {
    /// Offset of the dimension line from the wall baseline, along the wall
    /// orientation. Negative values place it on the interior side.
    pub offset_distance: f64,
    /// Tolerance for normal and direction comparisons.
    pub tolerance: f64,
    /// Anchor used on every hosted opening.
    pub opening_kind: SpecialReferenceKind,
    /// Categories of hosted elements to dimension.
    pub categories: Vec<Category>,
    pub transaction_name: String,
    pub prompt: String,
}

impl Default for DimensionConfig {
    fn default() -> Self {
        Self {
            offset_distance: DEFAULT_OFFSET,
            tolerance: VECTOR_TOLERANCE,
            opening_kind: SpecialReferenceKind::CenterLR,
            categories: vec![Category::Doors, Category::Windows],
            transaction_name: DEFAULT_TRANSACTION.to_owned(),
            prompt: DEFAULT_PROMPT.to_owned(),
        }
    }
}

impl DimensionConfig {
    /// Sets the dimension line offset.
    #[must_use]
    pub fn with_offset(mut self, offset_distance: f64) -> Self {
        self.offset_distance = offset_distance;
        self
    }

    /// Sets the comparison tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the anchor used on openings.
    #[must_use]
    pub fn with_opening_kind(mut self, kind: SpecialReferenceKind) -> Self {
        self.opening_kind = kind;
        self
    }

    /// Sets the opening categories.
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Checks the configuration for values the pipeline cannot use.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.offset_distance.is_finite() {
            return Err(ConfigError::InvalidOffset(self.offset_distance));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }
        if self.transaction_name.trim().is_empty() {
            return Err(ConfigError::EmptyTransactionName);
        }
        Ok(())
    }
}
