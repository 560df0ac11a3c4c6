//! End-to-end pipeline test over a generated CSV

use approx::assert_abs_diff_eq;
use eda_frame::{HypothesisExt, SummaryExt};
use housing_eda::{AnalysisApp, ColumnSelection};
use std::fs;
use std::path::PathBuf;

const CSV: &str = "\
Neighborhood,HouseStyle,SalePrice,GrLivArea
NAmes,1Story,200000,1500
NAmes,2Story,215000,1700
,1Story,140000,1100
OldTown,1Story,,1150
NAmes,2Story,210000,1650
OldTown,2Story,145000,1200
OldTown,1Story,150000,
NAmes,1Story,1000000,5000
";

fn write_fixture(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("housing-eda-{}-{}.csv", std::process::id(), name));
    fs::write(&path, CSV).unwrap();
    path
}

#[test]
fn test_pipeline_cleans_and_tests() {
    let path = write_fixture("pipeline");
    let mut app = AnalysisApp::from_csv(&path, ColumnSelection::default()).unwrap();
    assert_eq!(app.frame().height(), 8);

    app.clean_data().unwrap();

    // The million-dollar row falls outside the SalePrice fences
    assert_eq!(app.frame().height(), 7);
    for col in app.frame().get_columns() {
        assert_eq!(col.null_count(), 0, "column {} still has nulls", col.name());
    }

    // Missing neighborhood was imputed with the mode (NAmes), missing
    // price with the median over non-missing values (200000)
    let prices = app.frame().numeric_values("SalePrice").unwrap();
    assert_abs_diff_eq!(prices[3], 200_000.0, epsilon = 1e-9);

    app.descriptive_stats().unwrap();

    let comparison = app
        .frame()
        .welch_by_group("Neighborhood", "SalePrice")
        .unwrap()
        .expect("two neighborhoods exist");
    assert_eq!(comparison.group_a, "NAmes");
    assert_eq!(comparison.group_b, "OldTown");
    assert!(comparison.result.p_value > 0.0 && comparison.result.p_value <= 1.0);

    let chi = app
        .frame()
        .chi_square_independence("Neighborhood", "HouseStyle")
        .unwrap();
    assert_eq!(chi.df, 1);

    app.hypothesis_tests().unwrap();

    let _ = fs::remove_file(&path);
}

#[test]
fn test_pipeline_missing_file_is_fatal() {
    let missing = std::env::temp_dir().join("housing-eda-definitely-missing.csv");
    assert!(AnalysisApp::from_csv(&missing, ColumnSelection::default()).is_err());
}

#[test]
fn test_pipeline_single_group_skips_ttest() {
    let path = std::env::temp_dir().join(format!(
        "housing-eda-{}-single-group.csv",
        std::process::id()
    ));
    fs::write(
        &path,
        "Neighborhood,HouseStyle,SalePrice,GrLivArea\n\
         NAmes,1Story,200000,1500\n\
         NAmes,2Story,215000,1700\n\
         NAmes,1Story,205000,1600\n",
    )
    .unwrap();

    let app = AnalysisApp::from_csv(&path, ColumnSelection::default()).unwrap();
    assert!(app
        .frame()
        .welch_by_group("Neighborhood", "SalePrice")
        .unwrap()
        .is_none());

    let _ = fs::remove_file(&path);
}
