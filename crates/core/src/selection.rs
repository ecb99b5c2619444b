//! Dependent-select state with cascading reset.
//!
//! A sub-bank selected under bank A may not exist under bank B, so
//! selecting a new value at any level discards every selection below
//! it.  This is required behavior for the dependent-select workflow,
//! not UI polish.

use crate::bank::Bank;
use crate::hierarchy::{filter_children, ChildOf};
use crate::sub_bank::SubBank;
use crate::types::EntityId;

/// Currently selected node at each level of the catalog hierarchy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HierarchySelection {
    library: Option<EntityId>,
    bank: Option<EntityId>,
    sub_bank: Option<EntityId>,
    material: Option<EntityId>,
}

impl HierarchySelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn library(&self) -> Option<EntityId> {
        self.library
    }

    pub fn bank(&self) -> Option<EntityId> {
        self.bank
    }

    pub fn sub_bank(&self) -> Option<EntityId> {
        self.sub_bank
    }

    pub fn material(&self) -> Option<EntityId> {
        self.material
    }

    /// Select a library, discarding the bank, sub-bank and material
    /// selections.
    pub fn select_library(&mut self, id: Option<EntityId>) {
        self.library = id;
        self.bank = None;
        self.sub_bank = None;
        self.material = None;
    }

    /// Select a bank, discarding the sub-bank and material selections.
    pub fn select_bank(&mut self, id: Option<EntityId>) {
        self.bank = id;
        self.sub_bank = None;
        self.material = None;
    }

    /// Select a sub-bank, discarding the material selection.
    pub fn select_sub_bank(&mut self, id: Option<EntityId>) {
        self.sub_bank = id;
        self.material = None;
    }

    pub fn select_material(&mut self, id: Option<EntityId>) {
        self.material = id;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Banks belonging to the selected library; empty when no library
    /// is selected.
    pub fn dependent_banks(&self, all: &[Bank]) -> Vec<Bank> {
        self.library
            .map(|id| filter_children(all, id))
            .unwrap_or_default()
    }

    /// Sub-banks belonging to the selected bank; empty when no bank is
    /// selected.
    pub fn dependent_sub_banks(&self, all: &[SubBank]) -> Vec<SubBank> {
        self.bank
            .map(|id| filter_children(all, id))
            .unwrap_or_default()
    }

    /// Materials belonging to the selected sub-bank; empty when no
    /// sub-bank is selected.
    pub fn dependent_materials<T: ChildOf + Clone>(&self, all: &[T]) -> Vec<T> {
        self.sub_bank
            .map(|id| filter_children(all, id))
            .unwrap_or_default()
    }
}
