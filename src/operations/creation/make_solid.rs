use crate::error::{OperationError, Result};
use crate::topology::{ShellId, SolidData, SolidId, TopologyStore};

/// Creates a solid from shells.
pub struct MakeSolid {
    outer_shell: ShellId,
    inner_shells: Vec<ShellId>,
    volume: f64,
}

impl MakeSolid {
    /// Creates a new `MakeSolid` operation for a solid without voids and
    /// zero recorded volume.
    #[must_use]
    pub fn new(outer_shell: ShellId) -> Self {
        Self {
            outer_shell,
            inner_shells: Vec::new(),
            volume: 0.0,
        }
    }

    /// Adds void shells.
    #[must_use]
    pub fn with_voids(mut self, inner_shells: Vec<ShellId>) -> Self {
        self.inner_shells = inner_shells;
        self
    }

    /// Records the enclosed volume.
    #[must_use]
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Executes the operation, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] for a negative or non-finite
    /// volume, or a topology error if a shell is missing.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if !self.volume.is_finite() || self.volume < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "solid volume must be finite and non-negative, got {}",
                self.volume
            ))
            .into());
        }
        for &shell in std::iter::once(&self.outer_shell).chain(&self.inner_shells) {
            store.shell(shell)?;
        }

        Ok(store.add_solid(SolidData {
            outer_shell: self.outer_shell,
            inner_shells: self.inner_shells.clone(),
            volume: self.volume,
        }))
    }
}
