use super::data::models as lab_result_data;
use super::models::{
    ActiveModel as LabResultActiveModel, Entity as LabResultEntity, FileImportOutcome, ImportReport,
};
use crate::batches::models::{
    BatchStatus, Column as BatchColumn, Entity as BatchEntity,
};
use crate::config::Config;
use crate::samples::models as samples;
use anyhow::{Context, Result, anyhow, bail};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set, TransactionTrait,
};
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use uuid::Uuid;

/// Import a set of result files, each independently: one file's failure
/// yields an error outcome for that file while its siblings continue.
pub async fn import_files(
    db: &DatabaseConnection,
    config: &Config,
    files: Vec<(String, Vec<u8>)>,
) -> ImportReport {
    let total_files = files.len();
    let mut results = Vec::with_capacity(total_files);

    for (filename, bytes) in files {
        match import_file(db, config, &filename, &bytes).await {
            Ok(outcome) => results.push(outcome),
            Err(err) => {
                tracing::warn!(file = %filename, error = %err, "lab result import failed");
                results.push(FileImportOutcome::error(filename, err.to_string()));
            }
        }
    }

    ImportReport {
        total_files,
        results,
    }
}

/// Import a single result file: audit copy, parse, match rows to samples by
/// bag id, store every non-empty field as a datum row, then stamp the
/// batch's control id. All persistence happens in one transaction.
async fn import_file(
    db: &DatabaseConnection,
    config: &Config,
    filename: &str,
    bytes: &[u8],
) -> Result<FileImportOutcome> {
    // Keep the original upload for audit before any validation
    let upload_path = save_upload(config, filename, bytes).await?;

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);
    let headers = reader.headers().context("unreadable CSV header")?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record.context("unreadable CSV row")?);
    }
    if rows.is_empty() {
        bail!("Empty file");
    }

    // Batch and control identifiers are taken from the first row only and
    // assumed constant across the file
    let batch_ref = row_value(&headers, &rows[0], "LayerId")
        .unwrap_or_default()
        .trim()
        .to_string();
    if batch_ref.is_empty() {
        bail!("No LayerId column found in file");
    }
    let control_id = row_value(&headers, &rows[0], "ControlID")
        .unwrap_or_default()
        .trim()
        .to_string();

    let batch = BatchEntity::find()
        .filter(BatchColumn::BatchId.eq(&batch_ref))
        .one(db)
        .await?
        .ok_or_else(|| anyhow!("Batch {batch_ref} not found in system"))?;

    let txn = db.begin().await?;

    let lab_result = LabResultActiveModel {
        id: Set(Uuid::new_v4()),
        batch_id: Set(batch.id),
        control_id: Set(if control_id.is_empty() {
            None
        } else {
            Some(control_id.clone())
        }),
        csv_filename: Set(filename.to_string()),
        csv_path: Set(upload_path),
        row_count: Set(i32::try_from(rows.len()).unwrap_or(i32::MAX)),
        imported_by: Set("Internal".to_string()),
        import_date: Set(Utc::now()),
    }
    .insert(&txn)
    .await?;

    for (row_index, row) in rows.iter().enumerate() {
        let bag_id = row_value(&headers, row, "BagId")
            .unwrap_or_default()
            .trim()
            .to_string();

        // A bag id that matches no sample is not an error; the datum rows
        // stay anchored to the raw bag id alone
        let sample_id = samples::Entity::find()
            .filter(samples::Column::BatchId.eq(batch.id))
            .filter(samples::Column::BagId.eq(&bag_id))
            .one(&txn)
            .await?
            .map(|sample| sample.id);

        let row_index = i32::try_from(row_index).unwrap_or(i32::MAX);
        let mut data_rows = Vec::new();
        for (header, value) in headers.iter().zip(row.iter()) {
            let value = value.trim();
            // Empty cells and absent columns are discarded alike
            if value.is_empty() {
                continue;
            }
            data_rows.push(lab_result_data::ActiveModel {
                id: Set(Uuid::new_v4()),
                lab_result_id: Set(lab_result.id),
                sample_id: Set(sample_id),
                row_index: Set(row_index),
                bag_id: Set(bag_id.clone()),
                field_name: Set(header.to_string()),
                field_value: Set(value.to_string()),
            });
        }
        if !data_rows.is_empty() {
            lab_result_data::Entity::insert_many(data_rows)
                .exec(&txn)
                .await?;
        }
    }

    if !control_id.is_empty() {
        // Unconditional per file: importing another file with a different
        // control id overwrites the previous one
        let full_batch_id = format!("{}-{control_id}", batch.batch_id);
        let mut active = batch.clone().into_active_model();
        active.control_id = Set(Some(control_id.clone()));
        active.full_batch_id = Set(Some(full_batch_id));
        active.status = Set(BatchStatus::LabResultsReceived);
        active.last_updated = Set(Utc::now());
        active.update(&txn).await?;
    }

    txn.commit().await?;

    tracing::info!(
        file = %filename,
        batch_id = %batch_ref,
        rows = rows.len(),
        "imported lab result file"
    );

    Ok(FileImportOutcome {
        filename: filename.to_string(),
        status: "success".to_string(),
        message: None,
        batch_id: Some(batch_ref),
        control_id: if control_id.is_empty() {
            None
        } else {
            Some(control_id)
        },
        row_count: Some(rows.len()),
    })
}

fn row_value(headers: &csv::StringRecord, row: &csv::StringRecord, name: &str) -> Option<String> {
    headers
        .iter()
        .position(|header| header == name)
        .and_then(|index| row.get(index))
        .map(ToString::to_string)
}

async fn save_upload(config: &Config, filename: &str, bytes: &[u8]) -> Result<String> {
    let safe_name = Path::new(filename)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload.csv".to_string());

    tokio::fs::create_dir_all(&config.upload_dir).await?;
    let path = Path::new(&config.upload_dir).join(safe_name);
    // tokio::fs::write flushes and closes the handle on every exit path
    tokio::fs::write(&path, bytes).await?;
    Ok(path.to_string_lossy().to_string())
}

const PLOT_ID_FIELD_NAMES: [&str; 3] = ["Plot_ID", "PlotID", "Plot ID"];

/// Look up previous submissions that carried the same plot id, for
/// auto-filling new sample forms. Failures degrade to an empty list.
pub async fn plot_history(db: &DatabaseConnection, plot_id: &str) -> Vec<Value> {
    if plot_id.trim().len() < 2 {
        return Vec::new();
    }

    match plot_history_inner(db, plot_id).await {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(error = %err, "plot history lookup failed");
            Vec::new()
        }
    }
}

async fn plot_history_inner(db: &DatabaseConnection, plot_id: &str) -> Result<Vec<Value>> {
    let normalized = plot_id.trim().to_uppercase();

    let plot_rows = lab_result_data::Entity::find()
        .filter(lab_result_data::Column::FieldName.is_in(PLOT_ID_FIELD_NAMES))
        .all(db)
        .await?;

    let mut matches = Vec::new();
    for datum in plot_rows {
        if datum.field_value.trim().to_uppercase() != normalized {
            continue;
        }
        if let Some(result) = LabResultEntity::find_by_id(datum.lab_result_id).one(db).await? {
            matches.push((result, datum.row_index));
        }
    }

    // Newest imports first, one entry per batch, three batches at most
    matches.sort_by(|a, b| b.0.import_date.cmp(&a.0.import_date));
    let mut seen_batches = HashSet::new();
    let mut entries = Vec::new();
    for (result, row_index) in matches {
        if !seen_batches.insert(result.batch_id) {
            continue;
        }
        if entries.len() == 3 {
            break;
        }

        let siblings = lab_result_data::Entity::find()
            .filter(lab_result_data::Column::LabResultId.eq(result.id))
            .filter(lab_result_data::Column::RowIndex.eq(row_index))
            .all(db)
            .await?;
        let fields: HashMap<String, String> = siblings
            .into_iter()
            .map(|datum| (datum.field_name, datum.field_value))
            .collect();

        let batch_ref = BatchEntity::find_by_id(result.batch_id)
            .one(db)
            .await?
            .map(|batch| batch.batch_id);

        entries.push(json!({
            "batch_id": batch_ref,
            "import_date": result.import_date,
            "crop": fields.get("Crop"),
            "previous_crop": fields.get("Previous Crop").or_else(|| fields.get("Previous_Crop")),
            "yield_goal": fields.get("Expected_Yield"),
            "grower": fields.get("Grower"),
            "farm": fields.get("Farm"),
            "field": fields.get("Field"),
        }));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::row_value;

    fn record(values: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(values.to_vec())
    }

    #[test]
    fn test_row_value_by_header_name() {
        let headers = record(&["LayerId", "ControlID", "BagId", "Zn"]);
        let row = record(&["SSP-00042", "L123", "00042-1", "1.4"]);

        assert_eq!(
            row_value(&headers, &row, "LayerId").as_deref(),
            Some("SSP-00042")
        );
        assert_eq!(row_value(&headers, &row, "Zn").as_deref(), Some("1.4"));
        assert_eq!(row_value(&headers, &row, "Missing"), None);
    }

    #[test]
    fn test_row_value_handles_short_rows() {
        let headers = record(&["LayerId", "ControlID", "BagId"]);
        let row = record(&["SSP-00042"]);

        assert_eq!(row_value(&headers, &row, "BagId"), None);
    }
}
