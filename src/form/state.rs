use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use super::Attachment;

/// Field key -> message, for the fields that failed the last validation.
pub type ErrorMap = BTreeMap<String, String>;

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Flag(bool),
    File(Option<Attachment>),
    Sections(Vec<SectionDraft>),
}

impl FieldValue {
    /// Empty in the sense of "a required field left blank".
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(v) => v.is_empty(),
            FieldValue::Flag(_) => false,
            FieldValue::File(f) => f.is_none(),
            FieldValue::Sections(s) => s.is_empty(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDraft {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub lessons: Vec<LessonDraft>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDraft {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Minutes.
    pub duration: u32,
    pub is_preview_free: bool,
    pub video_url: String,
    pub supporting_material_url: String,
    pub supporting_material_type: String,
    pub description: String,

    #[serde(skip)]
    pub video_file: Option<Attachment>,
    #[serde(skip)]
    pub material_file: Option<Attachment>,
}

impl LessonDraft {
    pub fn new(id: String) -> Self {
        Self {
            id,
            title: String::new(),
            kind: "Video".to_string(),
            duration: 0,
            is_preview_free: false,
            video_url: String::new(),
            supporting_material_url: String::new(),
            supporting_material_type: String::new(),
            description: String::new(),
            video_file: None,
            material_file: None,
        }
    }
}

/// Client-local identifier for drafts the server has not assigned an id to.
pub fn local_id() -> String {
    static SEQ: AtomicU64 = AtomicU64::new(1);
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    let mut bytes = [0u8; 4];
    if getrandom::getrandom(&mut bytes).is_err() {
        return format!("local-{:x}", seq);
    }
    let mut out = format!("local-{:x}-", seq);
    for b in &bytes {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

/// All field values of a wizard plus the UI-only bits (step, errors, submit flag).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
    pub(super) step: usize,
    pub(super) errors: ErrorMap,
    pub(super) submitting: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(|s| s.as_str())
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn value(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    pub fn insert(&mut self, key: &str, value: FieldValue) {
        self.values.insert(key.to_string(), value);
    }

    pub fn text(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(FieldValue::Text(s)) => s.as_str(),
            _ => "",
        }
    }

    pub fn list(&self, key: &str) -> &[String] {
        match self.values.get(key) {
            Some(FieldValue::List(v)) => v.as_slice(),
            _ => &[],
        }
    }

    pub fn flag(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(FieldValue::Flag(true)))
    }

    pub fn file(&self, key: &str) -> Option<&Attachment> {
        match self.values.get(key) {
            Some(FieldValue::File(f)) => f.as_ref(),
            _ => None,
        }
    }

    pub fn set_text(&mut self, key: &str, value: impl Into<String>) {
        self.insert(key, FieldValue::Text(value.into()));
    }

    pub fn set_list(&mut self, key: &str, value: Vec<String>) {
        self.insert(key, FieldValue::List(value));
    }

    pub fn set_flag(&mut self, key: &str, value: bool) {
        self.insert(key, FieldValue::Flag(value));
    }

    pub fn attach(&mut self, key: &str, file: Attachment) {
        self.insert(key, FieldValue::File(Some(file)));
    }

    pub fn clear_file(&mut self, key: &str) {
        self.insert(key, FieldValue::File(None));
    }

    /// Adds `value` when absent, removes it when present. Returns whether it is now selected.
    pub fn toggle(&mut self, key: &str, value: &str) -> bool {
        let entry = self
            .values
            .entry(key.to_string())
            .or_insert_with(|| FieldValue::List(Vec::new()));
        let FieldValue::List(items) = entry else {
            *entry = FieldValue::List(vec![value.to_string()]);
            return true;
        };
        if let Some(pos) = items.iter().position(|v| v == value) {
            items.remove(pos);
            false
        } else {
            items.push(value.to_string());
            true
        }
    }

    pub fn push_item(&mut self, key: &str, value: impl Into<String>) {
        let mut items = self.list(key).to_vec();
        items.push(value.into());
        self.set_list(key, items);
    }

    pub fn set_item(&mut self, key: &str, index: usize, value: impl Into<String>) -> bool {
        let mut items = self.list(key).to_vec();
        let Some(slot) = items.get_mut(index) else {
            return false;
        };
        *slot = value.into();
        self.set_list(key, items);
        true
    }

    pub fn remove_item(&mut self, key: &str, index: usize) -> bool {
        let mut items = self.list(key).to_vec();
        if index >= items.len() {
            return false;
        }
        items.remove(index);
        self.set_list(key, items);
        true
    }

    pub fn sections(&self) -> &[SectionDraft] {
        match self.values.get(super::SECTIONS_KEY) {
            Some(FieldValue::Sections(s)) => s.as_slice(),
            _ => &[],
        }
    }

    fn sections_mut(&mut self) -> &mut Vec<SectionDraft> {
        let entry = self
            .values
            .entry(super::SECTIONS_KEY.to_string())
            .or_insert_with(|| FieldValue::Sections(Vec::new()));
        if !matches!(entry, FieldValue::Sections(_)) {
            *entry = FieldValue::Sections(Vec::new());
        }
        match entry {
            FieldValue::Sections(s) => s,
            _ => unreachable!("sections entry normalized above"),
        }
    }

    pub fn set_sections(&mut self, sections: Vec<SectionDraft>) {
        self.insert(super::SECTIONS_KEY, FieldValue::Sections(sections));
    }

    /// Appends an empty section and returns its local id.
    pub fn add_section(&mut self, title: impl Into<String>) -> String {
        let id = local_id();
        self.sections_mut().push(SectionDraft {
            id: id.clone(),
            title: title.into(),
            duration: String::new(),
            lessons: Vec::new(),
        });
        id
    }

    pub fn remove_section(&mut self, section_id: &str) -> bool {
        let sections = self.sections_mut();
        let before = sections.len();
        sections.retain(|s| s.id != section_id);
        sections.len() != before
    }

    pub fn section_mut(&mut self, section_id: &str) -> Option<&mut SectionDraft> {
        self.sections_mut().iter_mut().find(|s| s.id == section_id)
    }

    pub fn rename_section(&mut self, section_id: &str, title: impl Into<String>) -> bool {
        match self.section_mut(section_id) {
            Some(s) => {
                s.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Appends an empty video lesson to a section; `None` when the section is unknown.
    pub fn add_lesson(&mut self, section_id: &str) -> Option<String> {
        let section = self.section_mut(section_id)?;
        let id = local_id();
        section.lessons.push(LessonDraft::new(id.clone()));
        Some(id)
    }

    pub fn remove_lesson(&mut self, section_id: &str, lesson_id: &str) -> bool {
        let Some(section) = self.section_mut(section_id) else {
            return false;
        };
        let before = section.lessons.len();
        section.lessons.retain(|l| l.id != lesson_id);
        section.lessons.len() != before
    }

    pub fn lesson_mut(&mut self, section_id: &str, lesson_id: &str) -> Option<&mut LessonDraft> {
        self.section_mut(section_id)?
            .lessons
            .iter_mut()
            .find(|l| l.id == lesson_id)
    }

    pub fn update_lesson(
        &mut self,
        section_id: &str,
        lesson_id: &str,
        edit: impl FnOnce(&mut LessonDraft),
    ) -> bool {
        match self.lesson_mut(section_id, lesson_id) {
            Some(lesson) => {
                edit(lesson);
                true
            }
            None => false,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }
}
