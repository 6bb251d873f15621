use super::models::{
    ActiveModel as BatchActiveModel, BatchCreated, BatchStatus, BatchSubmission,
    Column as BatchColumn, Entity as BatchEntity, LabCsvSummary, Model as BatchModel,
    RecCsvSummary,
};
use crate::common::errors::{BusinessError, BusinessResult};
use crate::companies::models as companies;
use crate::config::Config;
use crate::farms::models as farms;
use crate::fields::models as fields;
use crate::growers::models as growers;
use crate::lab_results::data::models as lab_result_data;
use crate::lab_results::models as lab_results;
use crate::samples::analytes::ANALYTE_COLUMNS;
use crate::samples::models as samples;
use crate::samples::models::SampleSubmission;
use crate::samples::test_selections::models as test_selections;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Set, Statement, TransactionTrait,
};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::path::Path;
use uuid::Uuid;

/// Literal prefix of every batch identifier
pub const BATCH_ID_PREFIX: &str = "SSP";

/// Leading columns of the lab submission format, before the analyte block.
/// Column names and order are consumed byte-for-byte by the lab's intake
/// system.
pub const LAB_SUBMISSION_LEAD_COLUMNS: [&str; 27] = [
    "CustomerOrderNo",
    "LayerId",
    "OrderNotes",
    "SampleName",
    "CollectDateTime",
    "Grower",
    "Farm",
    "Field",
    "Acres",
    "Latitude",
    "Longitude",
    "Elevation",
    "BagId",
    "SpecialNote",
    "Quarantine",
    "Crop1",
    "CropYieldGoal1",
    "CropNote1",
    "Crop2",
    "CropYieldGoal2",
    "CropNote2",
    "Crop3",
    "CropYieldGoal3",
    "CropNote3",
    "Crop4",
    "CropYieldGoal4",
    "CropNote4",
];

/// Preferred leading columns of the rec-system export, emitted first when
/// the imported data actually carries them
pub const REC_PREFERRED_COLUMNS: [&str; 5] =
    ["Batch_ID", "ControlID", "ClientName", "LabNo", "ReportDate"];

pub fn format_batch_id(batch_number: i32) -> String {
    format!("{BATCH_ID_PREFIX}-{batch_number:05}")
}

/// Physical bag label for a sample, derived from batch number and 1-based
/// sequence
pub fn bag_id(batch_number: i32, sequence: i32) -> String {
    format!("{batch_number:05}-{sequence}")
}

fn db_internal(err: DbErr) -> BusinessError {
    BusinessError::InternalError {
        message: err.to_string(),
    }
}

fn io_internal(err: std::io::Error) -> BusinessError {
    BusinessError::InternalError {
        message: err.to_string(),
    }
}

/// Reserve the next batch number. The UPDATE takes the counter row lock
/// before the read, so concurrent callers serialize on the row and can
/// never observe the same number. Must run inside the caller's transaction.
pub async fn allocate_batch_number<C: ConnectionTrait>(conn: &C) -> Result<(String, i32), DbErr> {
    let backend = conn.get_database_backend();
    conn.execute(Statement::from_string(
        backend,
        "UPDATE batch_counters SET last_number = last_number + 1 WHERE id = 1".to_string(),
    ))
    .await?;

    let row = conn
        .query_one(Statement::from_string(
            backend,
            "SELECT last_number FROM batch_counters WHERE id = 1".to_string(),
        ))
        .await?
        .ok_or_else(|| DbErr::Custom("batch_counters row is missing".to_string()))?;

    let batch_number: i32 = row.try_get("", "last_number")?;
    Ok((format_batch_id(batch_number), batch_number))
}

pub async fn find_batch(db: &DatabaseConnection, batch_ref: &str) -> BusinessResult<BatchModel> {
    BatchEntity::find()
        .filter(BatchColumn::BatchId.eq(batch_ref))
        .one(db)
        .await
        .map_err(db_internal)?
        .ok_or_else(|| BusinessError::not_found("batch", batch_ref))
}

/// Create a batch and its samples as one unit: either the batch header,
/// every sample and every test selection land together, or nothing does.
pub async fn create_batch(
    db: &DatabaseConnection,
    submission: BatchSubmission,
) -> BusinessResult<BatchCreated> {
    if submission.samples.is_empty() {
        return Err(BusinessError::validation(
            "samples",
            "a batch requires at least one sample",
        ));
    }
    for (idx, sample) in submission.samples.iter().enumerate() {
        if let Some(entries) = &sample.lime_history {
            for entry in entries {
                if !(1..=12).contains(&entry.month) {
                    return Err(BusinessError::validation(
                        "lime_history",
                        &format!(
                            "sample {} has an invalid application month {}",
                            idx + 1,
                            entry.month
                        ),
                    ));
                }
            }
        }
    }

    let txn = db.begin().await.map_err(db_internal)?;

    let company = companies::Entity::find_by_id(submission.company_id)
        .one(&txn)
        .await
        .map_err(db_internal)?
        .ok_or_else(|| BusinessError::not_found("company", submission.company_id))?;
    // Quarantine is resolved exactly once per batch and frozen onto every
    // sample; later company edits must not touch existing samples.
    let quarantine = company.is_outside_us;

    let mut verified_chains: HashSet<(Uuid, Uuid, Uuid)> = HashSet::new();
    for (idx, sample) in submission.samples.iter().enumerate() {
        let chain = (sample.grower_id, sample.farm_id, sample.field_id);
        if verified_chains.insert(chain) {
            verify_ownership_chain(&txn, submission.company_id, sample, idx + 1).await?;
        }
    }

    let (batch_id, batch_number) = allocate_batch_number(&txn).await.map_err(db_internal)?;

    let now = Utc::now();
    let sample_count = i32::try_from(submission.samples.len()).map_err(|_| {
        BusinessError::InternalError {
            message: "sample count exceeds supported range".to_string(),
        }
    })?;

    let batch = BatchActiveModel {
        id: Set(Uuid::new_v4()),
        batch_id: Set(batch_id.clone()),
        company_id: Set(submission.company_id),
        batch_number: Set(batch_number),
        sample_count: Set(sample_count),
        notes: Set(submission.notes.clone()),
        created_by: Set(submission
            .created_by
            .clone()
            .unwrap_or_else(|| "Internal".to_string())),
        status: Set(BatchStatus::Pending),
        control_id: Set(None),
        full_batch_id: Set(None),
        csv_path: Set(None),
        rec_csv_path: Set(None),
        submission_date: Set(now),
        last_updated: Set(now),
    }
    .insert(&txn)
    .await
    .map_err(|e| BusinessError::from_db(e, "batch"))?;

    let mut sample_ids = Vec::with_capacity(submission.samples.len());
    for (idx, sample) in submission.samples.into_iter().enumerate() {
        let sequence = i32::try_from(idx + 1).map_err(|_| BusinessError::InternalError {
            message: "sample sequence exceeds supported range".to_string(),
        })?;

        let lime_history = match &sample.lime_history {
            Some(entries) => {
                Some(
                    serde_json::to_value(entries).map_err(|e| BusinessError::InternalError {
                        message: e.to_string(),
                    })?,
                )
            }
            None => None,
        };

        let inserted = samples::ActiveModel {
            id: Set(Uuid::new_v4()),
            batch_id: Set(batch.id),
            sample_sequence: Set(sequence),
            bag_id: Set(bag_id(batch_number, sequence)),
            company_id: Set(submission.company_id),
            grower_id: Set(sample.grower_id),
            farm_id: Set(sample.farm_id),
            field_id: Set(sample.field_id),
            sample_name: Set(sample.sample_name),
            zone: Set(sample.zone),
            plot_id: Set(sample.plot_id),
            crop: Set(sample.crop),
            yield_goal: Set(sample.yield_goal),
            previous_crop: Set(sample.previous_crop),
            previous_crop_yield: Set(sample.previous_crop_yield),
            lime_history: Set(lime_history),
            acres: Set(sample.acres),
            latitude: Set(sample.latitude),
            longitude: Set(sample.longitude),
            elevation: Set(sample.elevation),
            collect_datetime: Set(sample.collect_datetime),
            special_notes: Set(sample.special_notes),
            program_level: Set(sample.program_level),
            organic: Set(sample.organic),
            quarantine: Set(quarantine),
            created_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| BusinessError::from_db(e, "sample"))?;

        sample
            .tests
            .into_active_model(inserted.id)
            .insert(&txn)
            .await
            .map_err(|e| BusinessError::from_db(e, "test selection"))?;

        sample_ids.push(inserted.id);
    }

    txn.commit().await.map_err(db_internal)?;

    tracing::info!(batch_id = %batch_id, samples = sample_ids.len(), "created submission batch");

    Ok(BatchCreated {
        batch_id,
        batch_number,
        sample_count: sample_ids.len(),
        samples: sample_ids,
    })
}

/// Reject samples whose grower/farm/field chain does not root at the batch
/// company. Cross-tenant references would otherwise produce orphaned
/// samples that join to the wrong display names.
async fn verify_ownership_chain<C: ConnectionTrait>(
    conn: &C,
    company_id: Uuid,
    sample: &SampleSubmission,
    position: usize,
) -> BusinessResult<()> {
    let grower = growers::Entity::find_by_id(sample.grower_id)
        .one(conn)
        .await
        .map_err(db_internal)?
        .ok_or_else(|| BusinessError::not_found("grower", sample.grower_id))?;
    if grower.company_id != company_id {
        return Err(BusinessError::validation(
            "grower_id",
            &format!("sample {position} references a grower that does not belong to the company"),
        ));
    }

    let farm = farms::Entity::find_by_id(sample.farm_id)
        .one(conn)
        .await
        .map_err(db_internal)?
        .ok_or_else(|| BusinessError::not_found("farm", sample.farm_id))?;
    if farm.grower_id != sample.grower_id {
        return Err(BusinessError::validation(
            "farm_id",
            &format!("sample {position} references a farm that does not belong to the grower"),
        ));
    }

    let field = fields::Entity::find_by_id(sample.field_id)
        .one(conn)
        .await
        .map_err(db_internal)?
        .ok_or_else(|| BusinessError::not_found("field", sample.field_id))?;
    if field.farm_id != sample.farm_id {
        return Err(BusinessError::validation(
            "field_id",
            &format!("sample {position} references a field that does not belong to the farm"),
        ));
    }

    Ok(())
}

/// One renderable row of the lab submission file
pub struct LabSubmissionRow {
    pub sample: samples::Model,
    pub tests: test_selections::Model,
    pub grower_name: Option<String>,
    pub farm_name: Option<String>,
    pub field_name: Option<String>,
}

pub fn lab_submission_header() -> Vec<&'static str> {
    LAB_SUBMISSION_LEAD_COLUMNS
        .iter()
        .copied()
        .chain(ANALYTE_COLUMNS.iter().map(|a| a.column))
        .collect()
}

fn decimal_cell(value: Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn text_cell(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

/// Render the outbound lab submission document. Absent scalars render as
/// empty strings; analyte flags render "Y" or blank (the lab's
/// blank-means-no convention), while quarantine renders "Y"/"N".
pub fn render_lab_submission(
    batch_id: &str,
    rows: &[LabSubmissionRow],
) -> BusinessResult<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer
        .write_record(lab_submission_header())
        .map_err(|e| BusinessError::InternalError {
            message: e.to_string(),
        })?;

    for row in rows {
        let sample = &row.sample;
        let display_name = sample
            .sample_name
            .clone()
            .or_else(|| row.field_name.clone())
            .unwrap_or_default();

        let mut record: Vec<String> = vec![
            String::new(), // CustomerOrderNo, reserved for the lab
            batch_id.to_string(),
            String::new(), // OrderNotes
            display_name,
            sample
                .collect_datetime
                .map(|dt| dt.format("%m/%d/%y").to_string())
                .unwrap_or_default(),
            text_cell(row.grower_name.as_ref()),
            text_cell(row.farm_name.as_ref()),
            text_cell(row.field_name.as_ref()),
            decimal_cell(sample.acres),
            decimal_cell(sample.latitude),
            decimal_cell(sample.longitude),
            decimal_cell(sample.elevation),
            sample.bag_id.clone(),
            text_cell(sample.special_notes.as_ref()),
            if sample.quarantine { "Y" } else { "N" }.to_string(),
            text_cell(sample.crop.as_ref()),
            decimal_cell(sample.yield_goal),
            String::new(), // CropNote1
            String::new(), // Crop2
            String::new(), // CropYieldGoal2
            String::new(), // CropNote2
            String::new(), // Crop3
            String::new(), // CropYieldGoal3
            String::new(), // CropNote3
            String::new(), // Crop4
            String::new(), // CropYieldGoal4
            String::new(), // CropNote4
        ];

        for analyte in &ANALYTE_COLUMNS {
            let selected = analyte.flag.is_some_and(|flag| flag(&row.tests));
            record.push(if selected {
                "Y".to_string()
            } else {
                String::new()
            });
        }

        writer
            .write_record(&record)
            .map_err(|e| BusinessError::InternalError {
                message: e.to_string(),
            })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| BusinessError::InternalError {
            message: e.to_string(),
        })?;
    String::from_utf8(bytes).map_err(|e| BusinessError::InternalError {
        message: e.to_string(),
    })
}

/// Render and persist the lab submission file for a batch, then mark the
/// batch "CSV Generated"
pub async fn generate_lab_submission(
    db: &DatabaseConnection,
    config: &Config,
    batch_ref: &str,
) -> BusinessResult<LabCsvSummary> {
    let batch = find_batch(db, batch_ref).await?;

    let sample_models = samples::Entity::find()
        .filter(samples::Column::BatchId.eq(batch.id))
        .order_by_asc(samples::Column::SampleSequence)
        .all(db)
        .await
        .map_err(db_internal)?;
    if sample_models.is_empty() {
        return Err(BusinessError::not_found("batch samples", batch_ref));
    }

    let mut rows = Vec::with_capacity(sample_models.len());
    for sample in sample_models {
        let tests = test_selections::Entity::find()
            .filter(test_selections::Column::SampleId.eq(sample.id))
            .one(db)
            .await
            .map_err(db_internal)?
            .ok_or_else(|| BusinessError::InternalError {
                message: format!("sample {} has no test selection", sample.bag_id),
            })?;
        let grower_name = growers::Entity::find_by_id(sample.grower_id)
            .one(db)
            .await
            .map_err(db_internal)?
            .map(|g| g.grower_name);
        let farm_name = farms::Entity::find_by_id(sample.farm_id)
            .one(db)
            .await
            .map_err(db_internal)?
            .map(|f| f.farm_name);
        let field_name = fields::Entity::find_by_id(sample.field_id)
            .one(db)
            .await
            .map_err(db_internal)?
            .map(|f| f.field_name);

        rows.push(LabSubmissionRow {
            sample,
            tests,
            grower_name,
            farm_name,
            field_name,
        });
    }

    let csv_text = render_lab_submission(&batch.batch_id, &rows)?;
    let csv_filename = format!("{}_lab_submission.csv", batch.batch_id);
    let csv_path = write_export_file(config, &csv_filename, csv_text.as_bytes()).await?;

    let batch_id = batch.batch_id.clone();
    let mut active = batch.into_active_model();
    active.csv_path = Set(Some(csv_path.clone()));
    active.status = Set(BatchStatus::CsvGenerated);
    active.last_updated = Set(Utc::now());
    active.update(db).await.map_err(db_internal)?;

    tracing::info!(batch_id = %batch_id, samples = rows.len(), "generated lab submission file");

    Ok(LabCsvSummary {
        batch_id,
        csv_filename,
        csv_path,
        sample_count: rows.len(),
    })
}

/// Fold tall datum rows into one field map per sample sequence. Rows must
/// arrive oldest-import-first; within a sequence, a later row for the same
/// field name overwrites the earlier value (most-recent-import-wins).
pub fn pivot_rec_rows(
    full_batch_id: &str,
    rows: impl IntoIterator<Item = (i32, String, String)>,
) -> BTreeMap<i32, HashMap<String, String>> {
    let mut table: BTreeMap<i32, HashMap<String, String>> = BTreeMap::new();
    for (sequence, field_name, field_value) in rows {
        table
            .entry(sequence)
            .or_insert_with(|| {
                HashMap::from([("Batch_ID".to_string(), full_batch_id.to_string())])
            })
            .insert(field_name, field_value);
    }
    table
}

/// Header order: the preferred prefix restricted to observed fields, then
/// every other observed field in ascending lexicographic order
pub fn rec_headers(table: &BTreeMap<i32, HashMap<String, String>>) -> Vec<String> {
    let observed: BTreeSet<String> = table
        .values()
        .flat_map(|fields| fields.keys().cloned())
        .collect();

    let mut headers: Vec<String> = REC_PREFERRED_COLUMNS
        .iter()
        .filter(|column| observed.contains(**column))
        .map(|column| (*column).to_string())
        .collect();
    for column in &observed {
        if !REC_PREFERRED_COLUMNS.contains(&column.as_str()) {
            headers.push(column.clone());
        }
    }
    headers
}

pub fn render_rec_csv(
    headers: &[String],
    table: &BTreeMap<i32, HashMap<String, String>>,
) -> BusinessResult<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer
        .write_record(headers)
        .map_err(|e| BusinessError::InternalError {
            message: e.to_string(),
        })?;

    // BTreeMap iteration gives ascending sequence order
    for fields in table.values() {
        let record: Vec<&str> = headers
            .iter()
            .map(|header| fields.get(header).map_or("", String::as_str))
            .collect();
        writer
            .write_record(&record)
            .map_err(|e| BusinessError::InternalError {
                message: e.to_string(),
            })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| BusinessError::InternalError {
            message: e.to_string(),
        })?;
    String::from_utf8(bytes).map_err(|e| BusinessError::InternalError {
        message: e.to_string(),
    })
}

/// Pivot imported lab data into the wide rec-system format and persist it.
/// Requires lab results to have been imported already; does not mutate
/// batch status.
pub async fn export_rec_system(
    db: &DatabaseConnection,
    config: &Config,
    batch_ref: &str,
) -> BusinessResult<RecCsvSummary> {
    let batch = find_batch(db, batch_ref).await?;

    let control_id = batch
        .control_id
        .clone()
        .filter(|control| !control.is_empty())
        .ok_or_else(|| BusinessError::validation("control_id", "no lab results imported yet"))?;
    let full_batch_id = batch
        .full_batch_id
        .clone()
        .unwrap_or_else(|| format!("{}-{control_id}", batch.batch_id));

    let sequence_by_sample: HashMap<Uuid, i32> = samples::Entity::find()
        .filter(samples::Column::BatchId.eq(batch.id))
        .all(db)
        .await
        .map_err(db_internal)?
        .into_iter()
        .map(|sample| (sample.id, sample.sample_sequence))
        .collect();

    // Oldest import first, so a re-imported correction overwrites the
    // original values during the pivot
    let results = lab_results::Entity::find()
        .filter(lab_results::Column::BatchId.eq(batch.id))
        .order_by_asc(lab_results::Column::ImportDate)
        .all(db)
        .await
        .map_err(db_internal)?;

    let mut tall_rows: Vec<(i32, String, String)> = Vec::new();
    for result in results {
        let data = lab_result_data::Entity::find()
            .filter(lab_result_data::Column::LabResultId.eq(result.id))
            .order_by_asc(lab_result_data::Column::RowIndex)
            .all(db)
            .await
            .map_err(db_internal)?;
        for datum in data {
            // Rows whose bag id never matched a sample carry no sequence
            // and cannot appear in the per-sample pivot
            let Some(sample_id) = datum.sample_id else {
                continue;
            };
            let Some(&sequence) = sequence_by_sample.get(&sample_id) else {
                continue;
            };
            tall_rows.push((sequence, datum.field_name, datum.field_value));
        }
    }

    let table = pivot_rec_rows(&full_batch_id, tall_rows);
    let headers = rec_headers(&table);
    let csv_text = render_rec_csv(&headers, &table)?;

    let csv_filename = format!("{full_batch_id}_for_rec_system.csv");
    let csv_path = write_export_file(config, &csv_filename, csv_text.as_bytes()).await?;

    let batch_id = batch.batch_id.clone();
    let mut active = batch.into_active_model();
    active.rec_csv_path = Set(Some(csv_path.clone()));
    active.last_updated = Set(Utc::now());
    active.update(db).await.map_err(db_internal)?;

    tracing::info!(batch_id = %batch_id, samples = table.len(), "generated rec-system export");

    Ok(RecCsvSummary {
        batch_id,
        full_batch_id,
        csv_filename,
        csv_path,
        sample_count: table.len(),
    })
}

/// Write an export file under the configured export directory. The handle
/// is flushed and closed on every path before the function returns.
async fn write_export_file(
    config: &Config,
    filename: &str,
    bytes: &[u8],
) -> BusinessResult<String> {
    tokio::fs::create_dir_all(&config.export_dir)
        .await
        .map_err(io_internal)?;
    let path = Path::new(&config.export_dir).join(filename);
    tokio::fs::write(&path, bytes).await.map_err(io_internal)?;
    Ok(path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::models::ProgramLevel;
    use crate::samples::test_selections::models::TestSelectionFlags;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(42, 3, "00042-3")]
    #[case(7, 1, "00007-1")]
    #[case(12345, 12, "12345-12")]
    fn test_bag_id_derivation(#[case] number: i32, #[case] sequence: i32, #[case] expected: &str) {
        assert_eq!(bag_id(number, sequence), expected);
    }

    #[test]
    fn test_batch_id_format() {
        assert_eq!(format_batch_id(42), "SSP-00042");
        assert_eq!(format_batch_id(1), "SSP-00001");
        assert_eq!(format_batch_id(99999), "SSP-99999");
    }

    #[test]
    fn test_lab_submission_header_shape() {
        let header = lab_submission_header();
        assert_eq!(header.len(), 61);
        assert_eq!(header[0], "CustomerOrderNo");
        assert_eq!(header[1], "LayerId");
        assert_eq!(header[26], "CropNote4");
        assert_eq!(header[27], "Al");
        assert_eq!(header[60], "Total P");
    }

    fn sample_fixture(tests: &TestSelectionFlags) -> LabSubmissionRow {
        let sample_id = Uuid::new_v4();
        let sample = samples::Model {
            id: sample_id,
            batch_id: Uuid::new_v4(),
            sample_sequence: 1,
            bag_id: bag_id(42, 1),
            company_id: Uuid::new_v4(),
            grower_id: Uuid::new_v4(),
            farm_id: Uuid::new_v4(),
            field_id: Uuid::new_v4(),
            sample_name: None,
            zone: None,
            plot_id: None,
            crop: Some("Corn".to_string()),
            yield_goal: Some(Decimal::new(200, 0)),
            previous_crop: None,
            previous_crop_yield: None,
            lime_history: None,
            acres: None,
            latitude: None,
            longitude: None,
            elevation: None,
            collect_datetime: Some(chrono::Utc.with_ymd_and_hms(2026, 3, 9, 14, 30, 0).unwrap()),
            special_notes: None,
            program_level: ProgramLevel::Excellent,
            organic: false,
            quarantine: true,
            created_at: chrono::Utc::now(),
        };
        let tests_model = test_selections::Model {
            id: Uuid::new_v4(),
            sample_id,
            test_b: tests.test_b,
            test_ca: tests.test_ca,
            test_cu: tests.test_cu,
            test_fe: tests.test_fe,
            test_k: tests.test_k,
            test_mg: tests.test_mg,
            test_mn: tests.test_mn,
            test_na: tests.test_na,
            test_om: tests.test_om,
            test_p2: tests.test_p2,
            test_ph1: tests.test_ph1,
            test_s: tests.test_s,
            test_zn: tests.test_zn,
            test_bulk_den: tests.test_bulk_den,
            test_cl: tests.test_cl,
            test_co: tests.test_co,
            test_mo: tests.test_mo,
            test_salts: tests.test_salts,
            test_al: tests.test_al,
            test_i: tests.test_i,
            test_morgan: tests.test_morgan,
            test_nh3: tests.test_nh3,
            test_no3: tests.test_no3,
            test_olsen: tests.test_olsen,
            test_bray_p1: tests.test_bray_p1,
            test_ph2_salt: tests.test_ph2_salt,
            test_ph3_buffer: tests.test_ph3_buffer,
            test_pret: tests.test_pret,
            test_other: tests.test_other,
            test_ssc: tests.test_ssc,
            test_se: tests.test_se,
            test_si: tests.test_si,
            test_plfa: tests.test_plfa,
            test_total_p: tests.test_total_p,
        };
        LabSubmissionRow {
            sample,
            tests: tests_model,
            grower_name: Some("North Grower".to_string()),
            farm_name: Some("Home Farm".to_string()),
            field_name: Some("Back 40".to_string()),
        }
    }

    #[test]
    fn test_render_lab_submission_row_values() {
        let row = sample_fixture(&TestSelectionFlags::default());
        let text = render_lab_submission("SSP-00042", &[row]).unwrap();
        let mut lines = text.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("CustomerOrderNo,LayerId,OrderNotes,SampleName,"));
        assert!(header.contains("PH1 (Water),PH2 (Salt),PH3 (Buffer)"));

        let data = lines.next().unwrap();
        let cells: Vec<&str> = data.split(',').collect();
        assert_eq!(cells[1], "SSP-00042"); // LayerId
        assert_eq!(cells[3], "Back 40"); // SampleName falls back to field
        assert_eq!(cells[4], "03/09/26"); // CollectDateTime as MM/DD/YY
        assert_eq!(cells[12], "00042-1"); // BagId
        assert_eq!(cells[14], "Y"); // Quarantine
        assert_eq!(cells[15], "Corn"); // Crop1
        // B is on the standard panel, Al is not, NO is reserved
        assert_eq!(cells[27], ""); // Al
        assert_eq!(cells[28], "Y"); // B
        assert_eq!(cells[45], ""); // NO
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_render_quarantine_is_explicit_no() {
        let mut row = sample_fixture(&TestSelectionFlags::default());
        row.sample.quarantine = false;
        let text = render_lab_submission("SSP-00007", &[row]).unwrap();
        let data = text.lines().nth(1).unwrap();
        let cells: Vec<&str> = data.split(',').collect();
        // Quarantine renders "N", unlike analyte flags which render blank
        assert_eq!(cells[14], "N");
    }

    #[test]
    fn test_rec_pivot_last_write_wins() {
        let rows = vec![
            (1, "Crop".to_string(), "Corn".to_string()),
            (2, "Crop".to_string(), "Soy".to_string()),
            (1, "Crop".to_string(), "Wheat".to_string()), // later import wins
        ];
        let table = pivot_rec_rows("SSP-00042-L123", rows);
        assert_eq!(table.len(), 2);
        assert_eq!(table[&1]["Crop"], "Wheat");
        assert_eq!(table[&2]["Crop"], "Soy");
        assert_eq!(table[&1]["Batch_ID"], "SSP-00042-L123");
    }

    #[test]
    fn test_rec_headers_order() {
        let rows = vec![
            (1, "ReportDate".to_string(), "01/01/26".to_string()),
            (1, "Zn".to_string(), "1.2".to_string()),
            (1, "Al".to_string(), "0.4".to_string()),
            (2, "ControlID".to_string(), "L123".to_string()),
        ];
        let table = pivot_rec_rows("B", rows);
        let headers = rec_headers(&table);
        // Preferred prefix restricted to observed fields, then the rest
        // lexicographically
        assert_eq!(headers, vec!["Batch_ID", "ControlID", "ReportDate", "Al", "Zn"]);
    }

    #[test]
    fn test_render_rec_csv_missing_cells_are_empty() {
        let rows = vec![
            (1, "Crop".to_string(), "Corn".to_string()),
            (2, "LabNo".to_string(), "7".to_string()),
        ];
        let table = pivot_rec_rows("B", rows);
        let headers = rec_headers(&table);
        let text = render_rec_csv(&headers, &table).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Batch_ID,LabNo,Crop");
        assert_eq!(lines[1], "B,,Corn");
        assert_eq!(lines[2], "B,7,");
    }
}
