//! Service facade over the current request's slot.
//!
//! Handlers never see the slot directly; they call this service, which resolves
//! the slot bound to whichever request is running.

use crate::Result;

#[derive(Debug, Default, Clone)]
pub struct DataService;

impl DataService {
    pub fn new() -> Self {
        Self
    }

    pub fn set_data_for_current_request(&self, data: &str) -> Result<()> {
        scoped_data_scope::put(data)?;
        tracing::debug!(len = data.len(), "Stored data in request slot");
        Ok(())
    }

    /// `Data: <value>, Created at: <epoch-millis>`. Check
    /// [`Self::has_data_in_current_request`] first.
    pub fn data_from_current_request(&self) -> Result<String> {
        Ok(scoped_data_scope::describe()?)
    }

    pub fn has_data_in_current_request(&self) -> Result<bool> {
        Ok(scoped_data_scope::has()?)
    }
}
