use anyhow::{Result, bail};

use contactform_lib::{Field, FieldId, FormValidator};

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
pub struct FieldReport {
    pub field: FieldId,
    pub value: String,
    pub valid: bool,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub message: Option<&'static str>,
}

impl From<&Field> for FieldReport {
    fn from(field: &Field) -> Self {
        Self {
            field: field.id,
            value: field.value.clone(),
            valid: field.is_valid(),
            message: field.error.map(|failure| failure.message()),
        }
    }
}

pub fn reports(form: &FormValidator) -> Vec<FieldReport> {
    form.fields().map(FieldReport::from).collect()
}

pub fn any_invalid(rows: &[FieldReport]) -> bool {
    rows.iter().any(|row| !row.valid)
}

pub fn write_reports(rows: &[FieldReport], format: &str) -> Result<()> {
    match format {
        "human" => {
            write_human(rows);
            Ok(())
        }
        "json" => write_json(rows),
        other => bail!("unknown --format '{other}', use: human|json"),
    }
}

pub fn write_human(rows: &[FieldReport]) {
    for row in rows {
        match row.message {
            None => println!("[OK]      {} = {:?}", row.field, row.value),
            Some(message) => println!("[INVALID] {} = {:?} :: {message}", row.field, row.value),
        }
    }
}

#[cfg(feature = "with-serde")]
fn write_json(rows: &[FieldReport]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &[FieldReport]) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}
