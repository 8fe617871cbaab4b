use crate::error::{Result, TopologyError};
use crate::topology::{ShellId, SolidData, SolidId, TopologyStore};

/// Creates a solid from an outer shell and optional void shells.
pub struct MakeSolid {
    outer_shell: ShellId,
    inner_shells: Vec<ShellId>,
}

impl MakeSolid {
    /// Creates a new `MakeSolid` operation.
    #[must_use]
    pub fn new(outer_shell: ShellId, inner_shells: Vec<ShellId>) -> Self {
        Self {
            outer_shell,
            inner_shells,
        }
    }

    /// Executes the operation, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidTopology`] if any shell is open or has
    /// no faces.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        for &shell_id in std::iter::once(&self.outer_shell).chain(&self.inner_shells) {
            let shell = store.shell(shell_id)?;
            if !shell.is_closed || shell.faces.is_empty() {
                return Err(TopologyError::InvalidTopology(
                    "a solid must be bounded by closed, non-empty shells".into(),
                )
                .into());
            }
        }

        Ok(store.add_solid(SolidData {
            outer_shell: self.outer_shell,
            inner_shells: self.inner_shells.clone(),
        }))
    }
}
