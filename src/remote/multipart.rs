use anyhow::{Context, Result};
use reqwest::blocking::multipart::{Form, Part as FormPart};

use crate::form::{Part, Payload};

pub(super) fn to_form(payload: &Payload) -> Result<Form> {
    let mut form = Form::new();
    for part in &payload.parts {
        form = match part {
            Part::Text { name, value } => form.text(name.clone(), value.clone()),
            Part::File { name, attachment } => {
                let mut file = FormPart::bytes(attachment.bytes.clone())
                    .file_name(attachment.file_name.clone());
                if let Some(mime) = &attachment.mime {
                    file = file
                        .mime_str(mime)
                        .with_context(|| format!("mime type of {}", name))?;
                }
                form.part(name.clone(), file)
            }
        };
    }
    Ok(form)
}
