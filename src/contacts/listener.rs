use crate::contacts::ContactPoint;
use crate::Result;

/// Observer of contact point changes
///
/// For every point of every manifold, at most one of the three methods is
/// called per step. The snapshot is only valid for the duration of the call.
/// An error returned here is propagated to whoever drives the step; the
/// contact's manifolds are already committed when the listener runs.
pub trait ContactListener {
    /// A point that did not exist in the previous step
    fn add(&mut self, _point: &ContactPoint<'_>) -> Result<()> {
        Ok(())
    }

    /// A point whose feature identity was also present in the previous step
    fn persist(&mut self, _point: &ContactPoint<'_>) -> Result<()> {
        Ok(())
    }

    /// A point from the previous step that is gone, reported with its last known geometry
    fn remove(&mut self, _point: &ContactPoint<'_>) -> Result<()> {
        Ok(())
    }
}
