//! Hierarchy composition: dependent-select filtering and the flattened
//! create-with-hierarchy payload.
//!
//! The combined create endpoint takes one flat object carrying the
//! material fields plus an id and/or name per ancestor level.  An id
//! selects an existing ancestor; a name asks the server to create one
//! inline.  Composition never invents a parent id: a level with neither
//! id nor name is a validation error.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::bank::Bank;
use crate::error::{FieldError, FieldErrors, ValidationError};
use crate::material::{Material, MaterialRecord};
use crate::sub_bank::SubBank;
use crate::types::EntityId;

/// Entities that carry a reference to their hierarchy parent.
pub trait ChildOf {
    /// The parent id, if the entity has one.
    fn parent_id(&self) -> Option<EntityId>;
}

impl ChildOf for Bank {
    fn parent_id(&self) -> Option<EntityId> {
        Some(self.library_id)
    }
}

impl ChildOf for SubBank {
    fn parent_id(&self) -> Option<EntityId> {
        Some(self.bank_id)
    }
}

impl ChildOf for Material {
    fn parent_id(&self) -> Option<EntityId> {
        self.sub_bank_id
    }
}

impl ChildOf for MaterialRecord {
    fn parent_id(&self) -> Option<EntityId> {
        self.material.sub_bank_id
    }
}

/// The children of `parent_id`, relative order preserved.
pub fn filter_children<T: ChildOf + Clone>(all: &[T], parent_id: EntityId) -> Vec<T> {
    all.iter()
        .filter(|child| child.parent_id() == Some(parent_id))
        .cloned()
        .collect()
}

/// Reference to one ancestor level of the flat payload: an existing
/// entity (id), an inline-created one (name), or both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AncestorRef {
    pub id: Option<EntityId>,
    pub name: Option<String>,
}

impl AncestorRef {
    /// Reference an existing ancestor by id.
    pub fn existing(id: EntityId) -> Self {
        Self {
            id: Some(id),
            name: None,
        }
    }

    /// Ask the server to create the ancestor inline, by name.
    pub fn inline(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    /// Both id and name, as carried by a fetched nested record.
    pub fn full(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
        }
    }

    fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.as_deref().map_or(true, str::is_empty)
    }
}

/// Material fields of the flat payload, without any ancestor data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialDraft {
    pub name: String,
    pub external_mat_id: Option<i64>,
    pub description: Option<String>,
}

/// The flattened create-with-hierarchy request.
///
/// Id fields are UUID strings on the wire; an empty or missing value
/// means "not selected" and a malformed one fails validation rather
/// than being passed through.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase", default)]
pub struct FullHierarchyRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub material_name: String,
    #[validate(range(min = 1, message = "external material id must be positive"))]
    pub mat_id: Option<i64>,
    pub description: Option<String>,
    #[validate(custom(function = uuid_shaped))]
    pub library_id: Option<String>,
    pub library_name: Option<String>,
    #[validate(custom(function = uuid_shaped))]
    pub bank_id: Option<String>,
    pub bank_name: Option<String>,
    #[validate(custom(function = uuid_shaped))]
    pub sub_bank_id: Option<String>,
    pub sub_bank_name: Option<String>,
}

/// Check that `value` is a UUID-shaped string.
pub fn uuid_shaped(value: &str) -> Result<(), validator::ValidationError> {
    if Uuid::parse_str(value).is_ok() {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new("uuid");
        err.message = Some("must be a UUID".into());
        Err(err)
    }
}

impl FullHierarchyRequest {
    /// Validate field constraints plus the per-level rule: each
    /// ancestor level needs an id or a name.
    pub fn validate_request(&self) -> Result<(), ValidationError> {
        let mut fields = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => ValidationError::from(errors).0 .0,
        };

        for (level, id, name) in [
            ("library", &self.library_id, &self.library_name),
            ("bank", &self.bank_id, &self.bank_name),
            ("sub_bank", &self.sub_bank_id, &self.sub_bank_name),
        ] {
            let id_present = id.as_deref().is_some_and(|v| !v.is_empty());
            let name_present = name.as_deref().is_some_and(|v| !v.is_empty());
            if !id_present && !name_present {
                fields.push(FieldError::new(level, "either id or name is required"));
            }
        }

        if fields.is_empty() {
            Ok(())
        } else {
            fields.sort_by(|a, b| a.field.cmp(&b.field));
            Err(ValidationError(FieldErrors(fields)))
        }
    }

    /// Lossless inverse of [`compose_full_hierarchy`]: recover the
    /// material draft and the id/name pair of each ancestor level.
    pub fn decompose(&self) -> HierarchyParts {
        HierarchyParts {
            material: MaterialDraft {
                name: self.material_name.clone(),
                external_mat_id: self.mat_id,
                description: self.description.clone(),
            },
            library: ancestor_of(&self.library_id, &self.library_name),
            bank: ancestor_of(&self.bank_id, &self.bank_name),
            sub_bank: ancestor_of(&self.sub_bank_id, &self.sub_bank_name),
        }
    }
}

fn ancestor_of(id: &Option<String>, name: &Option<String>) -> Option<AncestorRef> {
    let reference = AncestorRef {
        id: id.as_deref().and_then(|v| Uuid::parse_str(v).ok()),
        name: name.clone().filter(|n| !n.is_empty()),
    };
    (!reference.is_empty()).then_some(reference)
}

/// The individual pieces recovered from a flat payload or a nested
/// material record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HierarchyParts {
    pub material: MaterialDraft,
    pub library: Option<AncestorRef>,
    pub bank: Option<AncestorRef>,
    pub sub_bank: Option<AncestorRef>,
}

/// Build the flat create-with-hierarchy payload from a material draft
/// and one reference per ancestor level.
///
/// Fails when any level is absent or has neither id nor name, and when
/// the draft itself violates field constraints.
pub fn compose_full_hierarchy(
    material: MaterialDraft,
    library: Option<&AncestorRef>,
    bank: Option<&AncestorRef>,
    sub_bank: Option<&AncestorRef>,
) -> Result<FullHierarchyRequest, ValidationError> {
    let request = FullHierarchyRequest {
        material_name: material.name,
        mat_id: material.external_mat_id,
        description: material.description,
        library_id: library.and_then(|r| r.id).map(|id| id.to_string()),
        library_name: library.and_then(|r| r.name.clone()),
        bank_id: bank.and_then(|r| r.id).map(|id| id.to_string()),
        bank_name: bank.and_then(|r| r.name.clone()),
        sub_bank_id: sub_bank.and_then(|r| r.id).map(|id| id.to_string()),
        sub_bank_name: sub_bank.and_then(|r| r.name.clone()),
    };
    request.validate_request()?;
    Ok(request)
}

/// Project a fetched nested material record into its individual pieces,
/// for pre-filling an edit form.  Absent ancestor levels stay absent.
pub fn decompose_material_record(record: &MaterialRecord) -> HierarchyParts {
    let sub_bank = record.sub_bank.as_ref();
    let bank = sub_bank.and_then(|s| s.bank.as_ref());
    let library = bank.and_then(|b| b.library.as_ref());

    HierarchyParts {
        material: MaterialDraft {
            name: record.material.name.clone(),
            external_mat_id: record.material.external_mat_id,
            description: record.material.description.clone(),
        },
        library: library.map(|l| AncestorRef::full(l.id, l.name.clone())),
        bank: bank.map(|b| AncestorRef::full(b.id, b.name.clone())),
        sub_bank: sub_bank.map(|s| AncestorRef::full(s.id, s.name.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{BankNode, LibraryNode, SubBankNode};
    use chrono::Utc;

    fn bank(library_id: EntityId, name: &str) -> Bank {
        Bank {
            id: Uuid::new_v4(),
            library_id,
            name: name.to_string(),
            description: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn filter_children_returns_exact_subset_in_order() {
        let parent = Uuid::new_v4();
        let other = Uuid::new_v4();
        let banks = vec![
            bank(parent, "first"),
            bank(other, "foreign"),
            bank(parent, "second"),
        ];

        let children = filter_children(&banks, parent);
        let names: Vec<&str> = children.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn filter_children_of_empty_list_is_empty() {
        let banks: Vec<Bank> = Vec::new();
        assert!(filter_children(&banks, Uuid::new_v4()).is_empty());
    }

    #[test]
    fn uuid_shaped_accepts_uuid_and_rejects_garbage() {
        assert!(uuid_shaped(&Uuid::new_v4().to_string()).is_ok());
        assert!(uuid_shaped("not-a-uuid").is_err());
        assert!(uuid_shaped("").is_err());
    }

    #[test]
    fn compose_requires_every_ancestor_level() {
        let draft = MaterialDraft {
            name: "AISI 304".to_string(),
            ..Default::default()
        };
        let library = AncestorRef::existing(Uuid::new_v4());

        let err = compose_full_hierarchy(draft, Some(&library), None, None).unwrap_err();
        let fields: Vec<&str> = err.fields().iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, ["bank", "sub_bank"]);
    }

    #[test]
    fn compose_rejects_malformed_id_in_request() {
        let request = FullHierarchyRequest {
            material_name: "AISI 304".to_string(),
            library_id: Some("definitely-not-a-uuid".to_string()),
            bank_name: Some("Steels".to_string()),
            sub_bank_name: Some("Stainless".to_string()),
            ..Default::default()
        };
        let err = request.validate_request().unwrap_err();
        assert!(err.fields().iter().any(|f| f.field == "library_id"));
    }

    #[test]
    fn compose_then_decompose_recovers_ids_and_names() {
        let library = AncestorRef::full(Uuid::new_v4(), "Metals");
        let bank = AncestorRef::full(Uuid::new_v4(), "Steels");
        let sub_bank = AncestorRef::full(Uuid::new_v4(), "Stainless");
        let draft = MaterialDraft {
            name: "AISI 304".to_string(),
            external_mat_id: Some(42),
            description: Some("18/8 stainless".to_string()),
        };

        let request = compose_full_hierarchy(
            draft.clone(),
            Some(&library),
            Some(&bank),
            Some(&sub_bank),
        )
        .unwrap();
        let parts = request.decompose();

        assert_eq!(parts.material, draft);
        assert_eq!(parts.library, Some(library));
        assert_eq!(parts.bank, Some(bank));
        assert_eq!(parts.sub_bank, Some(sub_bank));
    }

    #[test]
    fn flat_payload_uses_pascal_case_wire_names() {
        let request = FullHierarchyRequest {
            material_name: "AISI 304".to_string(),
            mat_id: Some(7),
            library_id: Some(Uuid::new_v4().to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["MaterialName"], "AISI 304");
        assert_eq!(value["MatId"], 7);
        assert!(value.get("LibraryId").is_some());
        assert!(value.get("SubBankName").is_some());
    }

    #[test]
    fn decompose_material_record_maps_nested_chain() {
        let library_id = Uuid::new_v4();
        let record = MaterialRecord {
            material: Material {
                id: Uuid::new_v4(),
                sub_bank_id: Some(Uuid::new_v4()),
                name: "AISI 304".to_string(),
                external_mat_id: Some(42),
                description: None,
                density: None,
                elastic_module: None,
                tensile_strength: None,
                thermal_conductivity: None,
                thermal_expansion: None,
                color: None,
                angle: None,
                environment_data: None,
                application_data: None,
                reduced_name: None,
            },
            sub_bank: Some(SubBankNode {
                id: Uuid::new_v4(),
                name: "Stainless".to_string(),
                bank: Some(BankNode {
                    id: Uuid::new_v4(),
                    name: "Steels".to_string(),
                    library: Some(LibraryNode {
                        id: library_id,
                        name: "Metals".to_string(),
                    }),
                }),
            }),
        };

        let parts = decompose_material_record(&record);
        assert_eq!(parts.material.name, "AISI 304");
        assert_eq!(
            parts.library,
            Some(AncestorRef::full(library_id, "Metals"))
        );
        assert!(parts.bank.is_some());
        assert!(parts.sub_bank.is_some());
    }

    #[test]
    fn decompose_material_record_leaves_missing_levels_absent() {
        let record = MaterialRecord {
            material: Material {
                id: Uuid::new_v4(),
                sub_bank_id: None,
                name: "Orphan".to_string(),
                external_mat_id: None,
                description: None,
                density: None,
                elastic_module: None,
                tensile_strength: None,
                thermal_conductivity: None,
                thermal_expansion: None,
                color: None,
                angle: None,
                environment_data: None,
                application_data: None,
                reduced_name: None,
            },
            sub_bank: None,
        };

        let parts = decompose_material_record(&record);
        assert!(parts.library.is_none());
        assert!(parts.bank.is_none());
        assert!(parts.sub_bank.is_none());
    }
}
