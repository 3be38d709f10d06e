//! Which conditional controls are shown and required, given the selected
//! reason and illness type.
//!
//! Uploads are never required, even when their group is shown: a parent can
//! always submit first and hand the document to the teacher later.

use crate::models::field::Field;
use crate::models::illness::IllnessType;
use crate::models::reason::Reason;
use std::collections::BTreeMap;

/// Controls whose visibility depends on the selection.
pub const CONDITIONAL_FIELDS: [Field; 5] = [
    Field::IllnessType,
    Field::OtherIllness,
    Field::OtherReason,
    Field::CertificateUpload,
    Field::LetterUpload,
];

/// Controls that are required no matter what is selected.
pub const BASE_REQUIRED: [Field; 4] = [
    Field::Student,
    Field::Reason,
    Field::StartDate,
    Field::EndDate,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    pub shown: bool,
    pub required: bool,
}

impl Visibility {
    pub const HIDDEN: Visibility = Visibility {
        shown: false,
        required: false,
    };
    pub const OPTIONAL: Visibility = Visibility {
        shown: true,
        required: false,
    };
    pub const REQUIRED: Visibility = Visibility {
        shown: true,
        required: true,
    };
}

/// Changes produced by one selection handler, in the order they are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiDelta {
    pub changes: Vec<(Field, Visibility)>,
}

impl UiDelta {
    fn set(&mut self, field: Field, v: Visibility) {
        self.changes.retain(|(f, _)| *f != field);
        self.changes.push((field, v));
    }

    pub fn state_of(&self, field: Field) -> Option<Visibility> {
        self.changes
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| *v)
    }
}

/// Reason handler: hides every conditional group, then shows what the
/// reason needs. The nested "other illness" box is always hidden here.
pub fn on_reason_change(reason: Option<Reason>) -> UiDelta {
    let mut delta = UiDelta::default();
    for f in CONDITIONAL_FIELDS {
        delta.set(f, Visibility::HIDDEN);
    }

    match reason {
        Some(Reason::Sakit) => {
            delta.set(Field::IllnessType, Visibility::REQUIRED);
            delta.set(Field::CertificateUpload, Visibility::OPTIONAL);
        }
        Some(Reason::LainLain) => {
            delta.set(Field::OtherReason, Visibility::REQUIRED);
            delta.set(Field::LetterUpload, Visibility::OPTIONAL);
        }
        Some(_) => {
            delta.set(Field::LetterUpload, Visibility::OPTIONAL);
        }
        None => {}
    }

    delta
}

/// Illness handler: only toggles the free-text illness box.
pub fn on_illness_change(illness: Option<IllnessType>) -> UiDelta {
    let mut delta = UiDelta::default();
    let v = match illness {
        Some(i) if i.is_other() => Visibility::REQUIRED,
        _ => Visibility::HIDDEN,
    };
    delta.set(Field::OtherIllness, v);
    delta
}

/// Shown/required state of every conditional control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    states: BTreeMap<Field, Visibility>,
}

impl Default for FieldRules {
    fn default() -> Self {
        let states = CONDITIONAL_FIELDS
            .iter()
            .map(|f| (*f, Visibility::HIDDEN))
            .collect();
        Self { states }
    }
}

impl FieldRules {
    /// Steady state for a selection; equal to applying the reason delta and
    /// then, under illness, the illness delta.
    pub fn for_selection(reason: Option<Reason>, illness: Option<IllnessType>) -> Self {
        let mut rules = Self::default();
        rules.apply_delta(&on_reason_change(reason));
        if reason.is_some_and(|r| r.is_illness()) {
            rules.apply_delta(&on_illness_change(illness));
        }
        rules
    }

    pub fn apply_delta(&mut self, delta: &UiDelta) {
        for (field, v) in &delta.changes {
            self.states.insert(*field, *v);
        }
    }

    pub fn state(&self, field: Field) -> Visibility {
        if BASE_REQUIRED.contains(&field) {
            return Visibility::REQUIRED;
        }
        self.states.get(&field).copied().unwrap_or_default()
    }

    pub fn is_shown(&self, field: Field) -> bool {
        self.state(field).shown
    }

    pub fn is_required(&self, field: Field) -> bool {
        self.state(field).required
    }

    /// Every required control, base fields included, in form order.
    pub fn required_fields(&self) -> Vec<Field> {
        let mut out: Vec<Field> = BASE_REQUIRED.to_vec();
        out.extend(
            self.states
                .iter()
                .filter(|(_, v)| v.required)
                .map(|(f, _)| *f),
        );
        out.sort();
        out
    }
}
