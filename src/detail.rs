//! Detail screen model.

use crate::model::RecordIndex;
use crate::shared::{AppContext, SelectionError};

/// Fields the detail screen shows for the selected record.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub name: String,
    pub phone: String,
    pub index: Option<RecordIndex>,
}

impl DetailView {
    /// Read the current selection.
    ///
    /// Navigation only reaches the detail screen after a tap, so
    /// `NoSelection` here means the caller skipped that step.
    pub fn from_context(ctx: &AppContext) -> Result<Self, SelectionError> {
        let selection = ctx.selection.read()?;
        let record = selection.record;
        Ok(Self {
            name: record.name,
            phone: record.phone,
            index: record.index,
        })
    }

    pub fn lines(&self) -> [String; 3] {
        let index = self
            .index
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        [
            format!("Name - {}", self.name),
            format!("Phone - {}", self.phone),
            format!("Index - {}", index),
        ]
    }
}
