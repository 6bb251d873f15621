//! Ordered analyte catalog for the lab submission interchange format.
//!
//! The lab's intake system consumes the submission CSV positionally, so the
//! column order here is a hard external contract. Both batch assembly and
//! the exporter consult this table instead of scattering column names
//! through the code.

use super::test_selections::models::Model as TestSelection;

/// One analyte column of the lab submission format
pub struct Analyte {
    /// Column header exactly as the lab expects it
    pub column: &'static str,
    /// Flag on the sample's test selection, or None for reserved columns
    /// that are always emitted empty
    pub flag: Option<fn(&TestSelection) -> bool>,
    /// Whether the analyte is part of the standard panel (selected unless
    /// the caller opts out)
    pub default_selected: bool,
}

/// The 34 analyte columns, in the exact order of the lab submission header.
/// `NO` is reserved and unmapped. The organic-matter flag (`test_om`) has no
/// column of its own; it rides along with the standard panel.
pub const ANALYTE_COLUMNS: [Analyte; 34] = [
    Analyte {
        column: "Al",
        flag: Some(|t: &TestSelection| t.test_al),
        default_selected: false,
    },
    Analyte {
        column: "B",
        flag: Some(|t: &TestSelection| t.test_b),
        default_selected: true,
    },
    Analyte {
        column: "BulkDen",
        flag: Some(|t: &TestSelection| t.test_bulk_den),
        default_selected: false,
    },
    Analyte {
        column: "Ca",
        flag: Some(|t: &TestSelection| t.test_ca),
        default_selected: true,
    },
    Analyte {
        column: "Cl",
        flag: Some(|t: &TestSelection| t.test_cl),
        default_selected: false,
    },
    Analyte {
        column: "Co",
        flag: Some(|t: &TestSelection| t.test_co),
        default_selected: false,
    },
    Analyte {
        column: "Cu",
        flag: Some(|t: &TestSelection| t.test_cu),
        default_selected: true,
    },
    Analyte {
        column: "Fe",
        flag: Some(|t: &TestSelection| t.test_fe),
        default_selected: true,
    },
    Analyte {
        column: "I",
        flag: Some(|t: &TestSelection| t.test_i),
        default_selected: false,
    },
    Analyte {
        column: "K",
        flag: Some(|t: &TestSelection| t.test_k),
        default_selected: true,
    },
    Analyte {
        column: "Mg",
        flag: Some(|t: &TestSelection| t.test_mg),
        default_selected: true,
    },
    Analyte {
        column: "Mn",
        flag: Some(|t: &TestSelection| t.test_mn),
        default_selected: true,
    },
    Analyte {
        column: "Mo",
        flag: Some(|t: &TestSelection| t.test_mo),
        default_selected: false,
    },
    Analyte {
        column: "Morgan",
        flag: Some(|t: &TestSelection| t.test_morgan),
        default_selected: false,
    },
    Analyte {
        column: "Na",
        flag: Some(|t: &TestSelection| t.test_na),
        default_selected: true,
    },
    Analyte {
        column: "NH3",
        flag: Some(|t: &TestSelection| t.test_nh3),
        default_selected: false,
    },
    Analyte {
        column: "NO3",
        flag: Some(|t: &TestSelection| t.test_no3),
        default_selected: false,
    },
    Analyte {
        column: "OLSE",
        flag: Some(|t: &TestSelection| t.test_olsen),
        default_selected: false,
    },
    // Reserved, always blank
    Analyte {
        column: "NO",
        flag: None,
        default_selected: false,
    },
    Analyte {
        column: "MP1",
        flag: Some(|t: &TestSelection| t.test_bray_p1),
        default_selected: false,
    },
    Analyte {
        column: "P2",
        flag: Some(|t: &TestSelection| t.test_p2),
        default_selected: true,
    },
    Analyte {
        column: "PH1 (Water)",
        flag: Some(|t: &TestSelection| t.test_ph1),
        default_selected: true,
    },
    Analyte {
        column: "PH2 (Salt)",
        flag: Some(|t: &TestSelection| t.test_ph2_salt),
        default_selected: false,
    },
    Analyte {
        column: "PH3 (Buffer)",
        flag: Some(|t: &TestSelection| t.test_ph3_buffer),
        default_selected: false,
    },
    Analyte {
        column: "PRET",
        flag: Some(|t: &TestSelection| t.test_pret),
        default_selected: false,
    },
    Analyte {
        column: "S",
        flag: Some(|t: &TestSelection| t.test_s),
        default_selected: true,
    },
    Analyte {
        column: "Salts",
        flag: Some(|t: &TestSelection| t.test_salts),
        default_selected: false,
    },
    Analyte {
        column: "Zn",
        flag: Some(|t: &TestSelection| t.test_zn),
        default_selected: true,
    },
    Analyte {
        column: "Other",
        flag: Some(|t: &TestSelection| t.test_other),
        default_selected: false,
    },
    Analyte {
        column: "Sand Silt Clay",
        flag: Some(|t: &TestSelection| t.test_ssc),
        default_selected: false,
    },
    Analyte {
        column: "Se",
        flag: Some(|t: &TestSelection| t.test_se),
        default_selected: false,
    },
    Analyte {
        column: "Si",
        flag: Some(|t: &TestSelection| t.test_si),
        default_selected: false,
    },
    Analyte {
        column: "PLFA",
        flag: Some(|t: &TestSelection| t.test_plfa),
        default_selected: false,
    },
    Analyte {
        column: "Total P",
        flag: Some(|t: &TestSelection| t.test_total_p),
        default_selected: false,
    },
];
