use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{FieldKind, FieldValue, FormState, SECTIONS_KEY, StepDef};

/// A file waiting to be uploaded with the next submit.
#[derive(Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: None,
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.bin")
            .to_string();
        let mime = guess_mime(&file_name).map(|m| m.to_string());
        Ok(Self {
            file_name,
            mime,
            bytes,
        })
    }
}

fn guess_mime(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    Some(match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => return None,
    })
}

/// How list values are written into the multipart body. Applied uniformly to every wizard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayEncoding {
    /// One part per element, all under the field key.
    #[default]
    Repeated,
    /// A single part holding the JSON array.
    Json,
}

impl ArrayEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrayEncoding::Repeated => "repeated",
            ArrayEncoding::Json => "json",
        }
    }
}

impl std::str::FromStr for ArrayEncoding {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "repeated" => Ok(ArrayEncoding::Repeated),
            "json" => Ok(ArrayEncoding::Json),
            other => anyhow::bail!("unknown array encoding '{}' (expected repeated | json)", other),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Part {
    Text { name: String, value: String },
    File { name: String, attachment: Attachment },
}

impl Part {
    pub fn name(&self) -> &str {
        match self {
            Part::Text { name, .. } | Part::File { name, .. } => name,
        }
    }
}

/// Multipart body as an ordered list of parts; converted to a transport form by the client.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Payload {
    pub parts: Vec<Part>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.parts.push(Part::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(&mut self, name: impl Into<String>, attachment: Attachment) -> &mut Self {
        self.parts.push(Part::File {
            name: name.into(),
            attachment,
        });
        self
    }

    /// First text value under `name`.
    pub fn get<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        self.texts(name).next()
    }

    pub fn texts<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.parts.iter().filter_map(move |p| match p {
            Part::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn has(&self, name: &str) -> bool {
        self.parts.iter().any(|p| p.name() == name)
    }

    pub fn files(&self) -> impl Iterator<Item = (&str, &Attachment)> {
        self.parts.iter().filter_map(|p| match p {
            Part::File { name, attachment } => Some((name.as_str(), attachment)),
            Part::Text { .. } => None,
        })
    }

    /// Serializes every declared field of `steps`, in declaration order.
    pub fn from_state(steps: &[StepDef], state: &FormState, arrays: ArrayEncoding) -> Result<Self> {
        let mut out = Payload::new();
        for field in steps.iter().flat_map(|s| s.fields.iter()) {
            let value = match state.value(field.key) {
                Some(v) => v.clone(),
                None => field.kind.default_value(),
            };
            if field.omit_blank && value.is_blank() {
                continue;
            }
            match value {
                FieldValue::Text(s) => {
                    out.text(field.key, s);
                }
                FieldValue::Flag(b) => {
                    out.text(field.key, b.to_string());
                }
                FieldValue::List(items) => match arrays {
                    ArrayEncoding::Repeated => {
                        for item in items {
                            out.text(field.key, item);
                        }
                    }
                    ArrayEncoding::Json => {
                        let json = serde_json::to_string(&items)
                            .with_context(|| format!("encode {}", field.key))?;
                        out.text(field.key, json);
                    }
                },
                FieldValue::File(Some(file)) => {
                    out.file(field.key, file);
                }
                FieldValue::File(None) => {}
                FieldValue::Sections(sections) => {
                    debug_assert!(matches!(field.kind, FieldKind::Curriculum));
                    let json = serde_json::to_string(&sections).context("encode sections")?;
                    out.text(SECTIONS_KEY, json);
                    for s in &sections {
                        for l in &s.lessons {
                            if let Some(f) = &l.video_file {
                                out.file(format!("videoFile_{}_{}", s.id, l.id), f.clone());
                            }
                            if let Some(f) = &l.material_file {
                                out.file(format!("materialFile_{}_{}", s.id, l.id), f.clone());
                            }
                        }
                    }
                }
            }
        }
        Ok(out)
    }
}
