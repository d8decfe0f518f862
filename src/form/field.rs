//! Static declarations of the input widgets a wizard step renders.

use super::{FieldValue, FormState};

pub type Predicate = fn(&FormState) -> bool;

/// Source of options that are only known at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lookup {
    Companies,
}

#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    Text,
    TextArea,
    Select(&'static [&'static str]),
    Radio(&'static [&'static str]),
    /// Single choice among records fetched from the API (stored as the record id).
    Lookup(Lookup),
    MultiSelect {
        options: &'static [&'static str],
        max: Option<usize>,
    },
    CheckboxGroup(&'static [&'static str]),
    /// Free-form ordered list of strings (course outcomes).
    ItemList,
    Checkbox,
    File,
    Curriculum,
}

impl FieldKind {
    pub fn default_value(&self) -> FieldValue {
        match self {
            FieldKind::Text
            | FieldKind::TextArea
            | FieldKind::Select(_)
            | FieldKind::Radio(_)
            | FieldKind::Lookup(_) => FieldValue::Text(String::new()),
            FieldKind::MultiSelect { .. } | FieldKind::CheckboxGroup(_) | FieldKind::ItemList => {
                FieldValue::List(Vec::new())
            }
            FieldKind::Checkbox => FieldValue::Flag(false),
            FieldKind::File => FieldValue::File(None),
            FieldKind::Curriculum => FieldValue::Sections(Vec::new()),
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FieldKind::Select(o) | FieldKind::Radio(o) | FieldKind::CheckboxGroup(o) => o,
            FieldKind::MultiSelect { options, .. } => options,
            _ => &[],
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(
            self,
            FieldKind::MultiSelect { .. } | FieldKind::CheckboxGroup(_) | FieldKind::ItemList
        )
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Rule {
    Optional,
    Required(&'static str),
    /// Required only while the predicate holds for the current state.
    RequiredWhen(Predicate, &'static str),
}

impl Rule {
    pub fn applies(&self, state: &FormState) -> Option<&'static str> {
        match *self {
            Rule::Optional => None,
            Rule::Required(msg) => Some(msg),
            Rule::RequiredWhen(pred, msg) => pred(state).then_some(msg),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub rule: Rule,
    /// Hidden fields are neither rendered nor validated.
    pub visible: Option<Predicate>,
    /// Leave the field out of the payload while it is blank.
    pub omit_blank: bool,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            rule: Rule::Optional,
            visible: None,
            omit_blank: false,
        }
    }

    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub const fn area(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::TextArea)
    }

    pub const fn file(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::File)
    }

    pub const fn checkbox(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Checkbox)
    }

    pub const fn required(mut self, msg: &'static str) -> Self {
        self.rule = Rule::Required(msg);
        self
    }

    pub const fn required_when(mut self, pred: Predicate, msg: &'static str) -> Self {
        self.rule = Rule::RequiredWhen(pred, msg);
        self
    }

    pub const fn visible_when(mut self, pred: Predicate) -> Self {
        self.visible = Some(pred);
        self
    }

    pub const fn omit_blank(mut self) -> Self {
        self.omit_blank = true;
        self
    }

    pub fn is_visible(&self, state: &FormState) -> bool {
        self.visible.is_none_or(|p| p(state))
    }

    pub fn max_items(&self) -> Option<usize> {
        match self.kind {
            FieldKind::MultiSelect { max, .. } => max,
            _ => None,
        }
    }
}
