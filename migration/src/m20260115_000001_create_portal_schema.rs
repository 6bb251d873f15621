use sea_orm_migration::prelude::extension::postgres::Type;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[allow(clippy::too_many_lines)] // Large migration requires extensive table definitions
    #[allow(clippy::match_wildcard_for_single_variants)]
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Enable UUID extension for PostgreSQL
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared("CREATE EXTENSION IF NOT EXISTS \"uuid-ossp\";")
                .await?;
        }

        // Create custom types for PostgreSQL (will be ignored by SQLite)
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .create_type(
                    Type::create()
                        .as_enum(BatchStatus::Table)
                        .values([
                            BatchStatus::Pending,
                            BatchStatus::CsvGenerated,
                            BatchStatus::SentToLab,
                            BatchStatus::LabResultsReceived,
                            BatchStatus::Completed,
                        ])
                        .to_owned(),
                )
                .await?;

            manager
                .create_type(
                    Type::create()
                        .as_enum(ProgramLevel::Table)
                        .values([
                            ProgramLevel::Excellent,
                            ProgramLevel::Building,
                            ProgramLevel::Minimal,
                        ])
                        .to_owned(),
                )
                .await?;
        }

        // Create companies table
        let mut companies_table = Table::create()
            .table(Companies::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Companies::CompanyName)
                    .string()
                    .not_null()
                    .unique_key(),
            )
            .col(ColumnDef::new(Companies::ContactPerson).string())
            .col(ColumnDef::new(Companies::Email).string())
            .col(ColumnDef::new(Companies::Phone).string())
            .col(ColumnDef::new(Companies::Address).string())
            .col(ColumnDef::new(Companies::City).string())
            .col(ColumnDef::new(Companies::State).string())
            .col(ColumnDef::new(Companies::Zip).string())
            .col(ColumnDef::new(Companies::Country).string())
            .col(
                ColumnDef::new(Companies::IsOutsideUs)
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .col(ColumnDef::new(Companies::Notes).text())
            .col(
                ColumnDef::new(Companies::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(Companies::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .to_owned();
        add_uuid_primary_key(manager, &mut companies_table, Companies::Id)?;
        manager.create_table(companies_table).await?;

        // Create growers table
        let mut growers_table = Table::create()
            .table(Growers::Table)
            .if_not_exists()
            .col(ColumnDef::new(Growers::CompanyId).uuid().not_null())
            .col(ColumnDef::new(Growers::GrowerName).string().not_null())
            .col(ColumnDef::new(Growers::ContactPerson).string())
            .col(ColumnDef::new(Growers::Email).string())
            .col(ColumnDef::new(Growers::Phone).string())
            .col(ColumnDef::new(Growers::Address).string())
            .col(ColumnDef::new(Growers::City).string())
            .col(ColumnDef::new(Growers::State).string())
            .col(ColumnDef::new(Growers::Zip).string())
            .col(ColumnDef::new(Growers::Notes).text())
            .col(
                ColumnDef::new(Growers::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(Growers::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("growers_company_id_fkey")
                    .from(Growers::Table, Growers::CompanyId)
                    .to(Companies::Table, Companies::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .index(
                Index::create()
                    .name("growers_company_name_unique")
                    .col(Growers::CompanyId)
                    .col(Growers::GrowerName)
                    .unique(),
            )
            .to_owned();
        add_uuid_primary_key(manager, &mut growers_table, Growers::Id)?;
        manager.create_table(growers_table).await?;

        // Create farms table
        let mut farms_table = Table::create()
            .table(Farms::Table)
            .if_not_exists()
            .col(ColumnDef::new(Farms::GrowerId).uuid().not_null())
            .col(ColumnDef::new(Farms::FarmName).string().not_null())
            .col(ColumnDef::new(Farms::Location).string())
            .col(ColumnDef::new(Farms::TotalAcres).decimal_len(12, 2))
            .col(ColumnDef::new(Farms::Latitude).decimal_len(9, 6))
            .col(ColumnDef::new(Farms::Longitude).decimal_len(9, 6))
            .col(ColumnDef::new(Farms::Notes).text())
            .col(
                ColumnDef::new(Farms::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(Farms::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("farms_grower_id_fkey")
                    .from(Farms::Table, Farms::GrowerId)
                    .to(Growers::Table, Growers::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .index(
                Index::create()
                    .name("farms_grower_name_unique")
                    .col(Farms::GrowerId)
                    .col(Farms::FarmName)
                    .unique(),
            )
            .to_owned();
        add_uuid_primary_key(manager, &mut farms_table, Farms::Id)?;
        manager.create_table(farms_table).await?;

        // Create fields table
        let mut fields_table = Table::create()
            .table(Fields::Table)
            .if_not_exists()
            .col(ColumnDef::new(Fields::FarmId).uuid().not_null())
            .col(ColumnDef::new(Fields::FieldName).string().not_null())
            .col(ColumnDef::new(Fields::Acres).decimal_len(12, 2))
            .col(ColumnDef::new(Fields::Description).text())
            .col(ColumnDef::new(Fields::Notes).text())
            .col(
                ColumnDef::new(Fields::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(Fields::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fields_farm_id_fkey")
                    .from(Fields::Table, Fields::FarmId)
                    .to(Farms::Table, Farms::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .index(
                Index::create()
                    .name("fields_farm_name_unique")
                    .col(Fields::FarmId)
                    .col(Fields::FieldName)
                    .unique(),
            )
            .to_owned();
        add_uuid_primary_key(manager, &mut fields_table, Fields::Id)?;
        manager.create_table(fields_table).await?;

        // Create batch_counters table: single-row atomic allocation source
        // for batch numbers. The unique index on batches.batch_number below is
        // the second line of defense.
        manager
            .create_table(
                Table::create()
                    .table(BatchCounters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BatchCounters::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BatchCounters::LastNumber)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .get_connection()
            .execute_unprepared(
                "INSERT INTO batch_counters (id, last_number) VALUES (1, 0)",
            )
            .await?;

        // Create batches table
        let mut batches_table = Table::create()
            .table(Batches::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Batches::BatchId)
                    .string()
                    .not_null()
                    .unique_key(),
            )
            .col(ColumnDef::new(Batches::CompanyId).uuid().not_null())
            .col(
                ColumnDef::new(Batches::BatchNumber)
                    .integer()
                    .not_null()
                    .unique_key(),
            )
            .col(ColumnDef::new(Batches::SampleCount).integer().not_null())
            .col(ColumnDef::new(Batches::Notes).text())
            .col(ColumnDef::new(Batches::CreatedBy).string().not_null())
            .col(ColumnDef::new(Batches::ControlId).string())
            .col(ColumnDef::new(Batches::FullBatchId).string())
            .col(ColumnDef::new(Batches::CsvPath).string())
            .col(ColumnDef::new(Batches::RecCsvPath).string())
            .col(
                ColumnDef::new(Batches::SubmissionDate)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(Batches::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("batches_company_id_fkey")
                    .from(Batches::Table, Batches::CompanyId)
                    .to(Companies::Table, Companies::Id)
                    .on_delete(ForeignKeyAction::NoAction)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .to_owned();
        add_uuid_primary_key(manager, &mut batches_table, Batches::Id)?;
        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                batches_table.col(
                    ColumnDef::new(Batches::Status)
                        .custom(BatchStatus::Table)
                        .not_null()
                        .default("Pending"),
                );
            }
            sea_orm::DatabaseBackend::Sqlite => {
                batches_table.col(
                    ColumnDef::new(Batches::Status)
                        .text()
                        .not_null()
                        .default("Pending"),
                );
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".to_string()));
            }
        }
        manager.create_table(batches_table).await?;

        // Create samples table
        let mut samples_table = Table::create()
            .table(Samples::Table)
            .if_not_exists()
            .col(ColumnDef::new(Samples::BatchId).uuid().not_null())
            .col(ColumnDef::new(Samples::SampleSequence).integer().not_null())
            .col(ColumnDef::new(Samples::BagId).string().not_null())
            .col(ColumnDef::new(Samples::CompanyId).uuid().not_null())
            .col(ColumnDef::new(Samples::GrowerId).uuid().not_null())
            .col(ColumnDef::new(Samples::FarmId).uuid().not_null())
            .col(ColumnDef::new(Samples::FieldId).uuid().not_null())
            .col(ColumnDef::new(Samples::SampleName).string())
            .col(ColumnDef::new(Samples::Zone).string())
            .col(ColumnDef::new(Samples::PlotId).string())
            .col(ColumnDef::new(Samples::Crop).string())
            .col(ColumnDef::new(Samples::YieldGoal).decimal_len(12, 2))
            .col(ColumnDef::new(Samples::PreviousCrop).string())
            .col(ColumnDef::new(Samples::PreviousCropYield).decimal_len(12, 2))
            .col(ColumnDef::new(Samples::LimeHistory).json_binary())
            .col(ColumnDef::new(Samples::Acres).decimal_len(12, 2))
            .col(ColumnDef::new(Samples::Latitude).decimal_len(9, 6))
            .col(ColumnDef::new(Samples::Longitude).decimal_len(9, 6))
            .col(ColumnDef::new(Samples::Elevation).decimal_len(9, 2))
            .col(ColumnDef::new(Samples::CollectDatetime).timestamp_with_time_zone())
            .col(ColumnDef::new(Samples::SpecialNotes).text())
            .col(
                ColumnDef::new(Samples::Organic)
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .col(
                ColumnDef::new(Samples::Quarantine)
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .col(
                ColumnDef::new(Samples::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("samples_batch_id_fkey")
                    .from(Samples::Table, Samples::BatchId)
                    .to(Batches::Table, Batches::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("samples_grower_id_fkey")
                    .from(Samples::Table, Samples::GrowerId)
                    .to(Growers::Table, Growers::Id)
                    .on_delete(ForeignKeyAction::NoAction)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("samples_farm_id_fkey")
                    .from(Samples::Table, Samples::FarmId)
                    .to(Farms::Table, Farms::Id)
                    .on_delete(ForeignKeyAction::NoAction)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("samples_field_id_fkey")
                    .from(Samples::Table, Samples::FieldId)
                    .to(Fields::Table, Fields::Id)
                    .on_delete(ForeignKeyAction::NoAction)
                    .on_update(ForeignKeyAction::NoAction),
            )
            // Sequence numbers are a contiguous range starting at 1 within a
            // batch and are never reused.
            .index(
                Index::create()
                    .name("samples_batch_sequence_unique")
                    .col(Samples::BatchId)
                    .col(Samples::SampleSequence)
                    .unique(),
            )
            .index(
                Index::create()
                    .name("samples_batch_bag_unique")
                    .col(Samples::BatchId)
                    .col(Samples::BagId)
                    .unique(),
            )
            .to_owned();
        add_uuid_primary_key(manager, &mut samples_table, Samples::Id)?;
        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                samples_table.col(
                    ColumnDef::new(Samples::ProgramLevel)
                        .custom(ProgramLevel::Table)
                        .not_null()
                        .default("Excellent"),
                );
            }
            sea_orm::DatabaseBackend::Sqlite => {
                samples_table.col(
                    ColumnDef::new(Samples::ProgramLevel)
                        .text()
                        .not_null()
                        .default("Excellent"),
                );
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".to_string()));
            }
        }
        manager.create_table(samples_table).await?;

        // Create test_selections table (one row per sample, fixed analyte set)
        let mut test_selections_table = Table::create()
            .table(TestSelections::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(TestSelections::SampleId)
                    .uuid()
                    .not_null()
                    .unique_key(),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("test_selections_sample_id_fkey")
                    .from(TestSelections::Table, TestSelections::SampleId)
                    .to(Samples::Table, Samples::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .to_owned();
        for (column, default_selected) in [
            // Standard tests (default on)
            (TestSelections::TestB, true),
            (TestSelections::TestCa, true),
            (TestSelections::TestCu, true),
            (TestSelections::TestFe, true),
            (TestSelections::TestK, true),
            (TestSelections::TestMg, true),
            (TestSelections::TestMn, true),
            (TestSelections::TestNa, true),
            (TestSelections::TestOm, true),
            (TestSelections::TestP2, true),
            (TestSelections::TestPh1, true),
            (TestSelections::TestS, true),
            (TestSelections::TestZn, true),
            // Optional toggles
            (TestSelections::TestBulkDen, false),
            (TestSelections::TestCl, false),
            (TestSelections::TestCo, false),
            (TestSelections::TestMo, false),
            (TestSelections::TestSalts, false),
            // Additional tests
            (TestSelections::TestAl, false),
            (TestSelections::TestI, false),
            (TestSelections::TestMorgan, false),
            (TestSelections::TestNh3, false),
            (TestSelections::TestNo3, false),
            (TestSelections::TestOlsen, false),
            (TestSelections::TestBrayP1, false),
            (TestSelections::TestPh2Salt, false),
            (TestSelections::TestPh3Buffer, false),
            (TestSelections::TestPret, false),
            (TestSelections::TestOther, false),
            (TestSelections::TestSsc, false),
            (TestSelections::TestSe, false),
            (TestSelections::TestSi, false),
            (TestSelections::TestPlfa, false),
            (TestSelections::TestTotalP, false),
        ] {
            test_selections_table.col(
                ColumnDef::new(column)
                    .boolean()
                    .not_null()
                    .default(default_selected),
            );
        }
        add_uuid_primary_key(manager, &mut test_selections_table, TestSelections::Id)?;
        manager.create_table(test_selections_table).await?;

        // Create lab_results table (one row per imported file)
        let mut lab_results_table = Table::create()
            .table(LabResults::Table)
            .if_not_exists()
            .col(ColumnDef::new(LabResults::BatchId).uuid().not_null())
            .col(ColumnDef::new(LabResults::ControlId).string())
            .col(ColumnDef::new(LabResults::CsvFilename).string().not_null())
            .col(ColumnDef::new(LabResults::CsvPath).string().not_null())
            .col(ColumnDef::new(LabResults::RowCount).integer().not_null())
            .col(ColumnDef::new(LabResults::ImportedBy).string().not_null())
            .col(
                ColumnDef::new(LabResults::ImportDate)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("lab_results_batch_id_fkey")
                    .from(LabResults::Table, LabResults::BatchId)
                    .to(Batches::Table, Batches::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .to_owned();
        add_uuid_primary_key(manager, &mut lab_results_table, LabResults::Id)?;
        manager.create_table(lab_results_table).await?;

        // Create lab_result_data table (tall fact table, one row per
        // imported non-empty field; sample reference stays null when the
        // bag id did not match)
        let mut lab_result_data_table = Table::create()
            .table(LabResultData::Table)
            .if_not_exists()
            .col(ColumnDef::new(LabResultData::LabResultId).uuid().not_null())
            .col(ColumnDef::new(LabResultData::SampleId).uuid())
            .col(ColumnDef::new(LabResultData::RowIndex).integer().not_null())
            .col(ColumnDef::new(LabResultData::BagId).string().not_null())
            .col(ColumnDef::new(LabResultData::FieldName).string().not_null())
            .col(ColumnDef::new(LabResultData::FieldValue).text().not_null())
            .foreign_key(
                ForeignKey::create()
                    .name("lab_result_data_lab_result_id_fkey")
                    .from(LabResultData::Table, LabResultData::LabResultId)
                    .to(LabResults::Table, LabResults::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("lab_result_data_sample_id_fkey")
                    .from(LabResultData::Table, LabResultData::SampleId)
                    .to(Samples::Table, Samples::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .to_owned();
        add_uuid_primary_key(manager, &mut lab_result_data_table, LabResultData::Id)?;
        manager.create_table(lab_result_data_table).await?;

        // Non-unique indexes for the hot lookup paths
        manager
            .create_index(
                Index::create()
                    .name("idx_growers_company_id")
                    .table(Growers::Table)
                    .col(Growers::CompanyId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_farms_grower_id")
                    .table(Farms::Table)
                    .col(Farms::GrowerId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_fields_farm_id")
                    .table(Fields::Table)
                    .col(Fields::FarmId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_samples_batch_id")
                    .table(Samples::Table)
                    .col(Samples::BatchId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_lab_results_batch_id")
                    .table(LabResults::Table)
                    .col(LabResults::BatchId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_lab_result_data_lab_result_id")
                    .table(LabResultData::Table)
                    .col(LabResultData::LabResultId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_lab_result_data_sample_id")
                    .table(LabResultData::Table)
                    .col(LabResultData::SampleId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_lab_result_data_field_name")
                    .table(LabResultData::Table)
                    .col(LabResultData::FieldName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LabResultData::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LabResults::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TestSelections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Samples::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Batches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BatchCounters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Fields::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Farms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Growers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await?;

        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared("DROP TYPE IF EXISTS batch_status")
                .await
                .ok();
            manager
                .get_connection()
                .execute_unprepared("DROP TYPE IF EXISTS program_level")
                .await
                .ok();
        }

        Ok(())
    }
}

/// Add the ID column with the appropriate default per database backend
fn add_uuid_primary_key<T>(
    manager: &SchemaManager<'_>,
    table: &mut TableCreateStatement,
    id_column: T,
) -> Result<(), DbErr>
where
    T: IntoIden + 'static,
{
    match manager.get_database_backend() {
        sea_orm::DatabaseBackend::Postgres => {
            table.col(
                ColumnDef::new(id_column)
                    .uuid()
                    .not_null()
                    .primary_key()
                    .default(Expr::cust("uuid_generate_v4()")),
            );
        }
        sea_orm::DatabaseBackend::Sqlite => {
            table.col(ColumnDef::new(id_column).uuid().not_null().primary_key());
        }
        _ => {
            return Err(DbErr::Custom("Unsupported database backend".to_string()));
        }
    }
    Ok(())
}

#[derive(DeriveIden)]
enum BatchStatus {
    #[sea_orm(iden = "batch_status")]
    Table,
    #[sea_orm(iden = "Pending")]
    Pending,
    #[sea_orm(iden = "CSV Generated")]
    CsvGenerated,
    #[sea_orm(iden = "Sent to Lab")]
    SentToLab,
    #[sea_orm(iden = "Lab Results Received")]
    LabResultsReceived,
    #[sea_orm(iden = "Completed")]
    Completed,
}

#[derive(DeriveIden)]
enum ProgramLevel {
    #[sea_orm(iden = "program_level")]
    Table,
    #[sea_orm(iden = "Excellent")]
    Excellent,
    #[sea_orm(iden = "Building")]
    Building,
    #[sea_orm(iden = "Minimal")]
    Minimal,
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
    CompanyName,
    ContactPerson,
    Email,
    Phone,
    Address,
    City,
    State,
    Zip,
    Country,
    IsOutsideUs,
    Notes,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum Growers {
    Table,
    Id,
    CompanyId,
    GrowerName,
    ContactPerson,
    Email,
    Phone,
    Address,
    City,
    State,
    Zip,
    Notes,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum Farms {
    Table,
    Id,
    GrowerId,
    FarmName,
    Location,
    TotalAcres,
    Latitude,
    Longitude,
    Notes,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum Fields {
    Table,
    Id,
    FarmId,
    FieldName,
    Acres,
    Description,
    Notes,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum BatchCounters {
    Table,
    Id,
    LastNumber,
}

#[derive(DeriveIden)]
enum Batches {
    Table,
    Id,
    BatchId,
    CompanyId,
    BatchNumber,
    SampleCount,
    Notes,
    CreatedBy,
    Status,
    ControlId,
    FullBatchId,
    CsvPath,
    RecCsvPath,
    SubmissionDate,
    LastUpdated,
}

#[derive(DeriveIden)]
enum Samples {
    Table,
    Id,
    BatchId,
    SampleSequence,
    BagId,
    CompanyId,
    GrowerId,
    FarmId,
    FieldId,
    SampleName,
    Zone,
    PlotId,
    Crop,
    YieldGoal,
    PreviousCrop,
    PreviousCropYield,
    LimeHistory,
    Acres,
    Latitude,
    Longitude,
    Elevation,
    CollectDatetime,
    SpecialNotes,
    ProgramLevel,
    Organic,
    Quarantine,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TestSelections {
    Table,
    Id,
    SampleId,
    TestB,
    TestCa,
    TestCu,
    TestFe,
    TestK,
    TestMg,
    TestMn,
    TestNa,
    TestOm,
    TestP2,
    TestPh1,
    TestS,
    TestZn,
    TestBulkDen,
    TestCl,
    TestCo,
    TestMo,
    TestSalts,
    TestAl,
    TestI,
    TestMorgan,
    TestNh3,
    TestNo3,
    TestOlsen,
    TestBrayP1,
    TestPh2Salt,
    TestPh3Buffer,
    TestPret,
    TestOther,
    TestSsc,
    TestSe,
    TestSi,
    TestPlfa,
    TestTotalP,
}

#[derive(DeriveIden)]
enum LabResults {
    Table,
    Id,
    BatchId,
    ControlId,
    CsvFilename,
    CsvPath,
    RowCount,
    ImportedBy,
    ImportDate,
}

#[derive(DeriveIden)]
enum LabResultData {
    Table,
    Id,
    LabResultId,
    SampleId,
    RowIndex,
    BagId,
    FieldName,
    FieldValue,
}
