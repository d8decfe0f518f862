use super::*;

use anyhow::anyhow;

/// Reference fields that always come back as arrays, even with a single value.
const ARRAY_FIELDS: [&str; 4] = [
    "recommendedCourses",
    "recommendedJobs",
    "recommendedInternships",
    "recommendedMentors",
];

/// A decoded multipart body. Uploaded files are kept by name only.
#[derive(Debug, Default)]
pub(super) struct FormFields {
    texts: Vec<(String, String)>,
    files: Vec<(String, String)>,
}

pub(super) async fn read_form(mut multipart: Multipart) -> Result<FormFields, Response> {
    let mut form = FormFields::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(anyhow!(e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(base_name) {
            Some(file_name) => {
                field.bytes().await.map_err(|e| bad_request(anyhow!(e)))?;
                form.files.push((name, format!("uploads/{}", file_name)));
            }
            None => {
                let text = field.text().await.map_err(|e| bad_request(anyhow!(e)))?;
                form.texts.push((name, text));
            }
        }
    }
    Ok(form)
}

fn base_name(file_name: &str) -> String {
    file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name)
        .to_string()
}

impl FormFields {
    pub(super) fn text(&self, name: &str) -> Option<&str> {
        self.texts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub(super) fn file(&self, name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub(super) fn files(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Folds the text parts into a record: repeated names and JSON array text become arrays.
    /// Files are stored as `uploads/<name>` under their field name; names in `skip` are left out.
    pub(super) fn to_record(&self, skip: &[&str]) -> Map<String, Value> {
        let mut record = Map::new();
        for (name, text) in &self.texts {
            if skip.contains(&name.as_str()) {
                continue;
            }
            let value = json_array(text).unwrap_or_else(|| Value::String(text.clone()));
            match record.get_mut(name) {
                Some(Value::Array(items)) => items.push(value),
                Some(existing) => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
                None => {
                    let value = match value {
                        Value::String(s) if ARRAY_FIELDS.contains(&name.as_str()) => {
                            Value::Array(vec![Value::String(s)])
                        }
                        other => other,
                    };
                    record.insert(name.clone(), value);
                }
            }
        }
        for (name, path) in &self.files {
            if skip.contains(&name.as_str()) {
                continue;
            }
            record.insert(name.clone(), Value::String(path.clone()));
        }
        record
    }
}

fn json_array(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if !trimmed.starts_with('[') {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(v @ Value::Array(_)) => Some(v),
        _ => None,
    }
}
