//! End-to-end tests for the data-transformation stage.
//!
//! These drive the stage through real CSV files in a temp directory and check
//! the matrix contract: shapes, imputation against training statistics,
//! deterministic column order, target placement, and artifact reuse.

use std::fs;
use std::path::{Path, PathBuf};

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use tabprep::data::read_csv;
use tabprep::stage::{dataset_schema, TARGET_COLUMN};
use tabprep::{persist, DataTransformation, PrepError, TransformationConfig, UnseenPolicy};

const HEADER: &str = "gender,race_ethnicity,parental_level_of_education,lunch,\
test_preparation_course,writing_score,reading_score,math_score";

/// Two training rows; reading_score is missing in row 2.
const TRAIN_ROWS: &str = "male,group A,bachelor,standard,none,50,70,60\n\
female,group A,bachelor,standard,none,90,,80\n";

/// Two test rows; row 1 carries an unseen gender, row 2 a missing reading gap.
const TEST_ROWS: &str = "other,group A,bachelor,standard,none,50,70,40\n\
male,group A,bachelor,standard,none,90,,20\n";

fn write_split(dir: &Path, name: &str, rows: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("{HEADER}\n{rows}")).unwrap();
    path
}

struct Fixture {
    _dir: TempDir,
    train: PathBuf,
    test: PathBuf,
    artifact: PathBuf,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let train = write_split(dir.path(), "train.csv", TRAIN_ROWS);
    let test = write_split(dir.path(), "test.csv", TEST_ROWS);
    let artifact = dir.path().join("artifacts/preprocessor.json");
    Fixture {
        train,
        test,
        artifact,
        _dir: dir,
    }
}

fn run_fixture(fx: &Fixture) -> tabprep::TransformationOutput {
    DataTransformation::new(TransformationConfig::new(&fx.artifact))
        .run(&fx.train, &fx.test)
        .unwrap()
}

#[test]
fn output_shapes_match_inputs() {
    let fx = fixture();
    let out = run_fixture(&fx);

    // 2 numeric + one-hot categories (gender: 2, four constant columns: 1
    // each) + target.
    let expected_cols = 2 + (2 + 1 + 1 + 1 + 1) + 1;
    assert_eq!(out.train.dim(), (2, expected_cols));
    assert_eq!(out.test.dim(), (2, expected_cols));
}

#[test]
fn target_is_the_last_column() {
    let fx = fixture();
    let out = run_fixture(&fx);
    let last = out.train.ncols() - 1;
    assert_eq!(out.train[[0, last]], 60.0);
    assert_eq!(out.train[[1, last]], 80.0);
    assert_eq!(out.test[[0, last]], 40.0);
    assert_eq!(out.test[[1, last]], 20.0);
}

#[test]
fn missing_numeric_gets_training_median() {
    let fx = fixture();
    let out = run_fixture(&fx);

    // reading_score: only observed training value is 70, so the median is 70;
    // the imputed column [70, 70] has zero variance, so scale stays 1.0.
    assert_abs_diff_eq!(out.train[[0, 1]], 70.0, epsilon = 1e-6);
    assert_abs_diff_eq!(out.train[[1, 1]], 70.0, epsilon = 1e-6);
    // The same median fills the *test* gap: no refit on test content.
    assert_abs_diff_eq!(out.test[[1, 1]], 70.0, epsilon = 1e-6);
}

#[test]
fn numeric_block_scaled_by_training_variance() {
    let fx = fixture();
    let out = run_fixture(&fx);

    // writing_score [50, 90]: mean 70, biased variance 400, scale 20.
    assert_abs_diff_eq!(out.train[[0, 0]], 2.5, epsilon = 1e-6);
    assert_abs_diff_eq!(out.train[[1, 0]], 4.5, epsilon = 1e-6);
    // Test rows use the training scale, not their own.
    assert_abs_diff_eq!(out.test[[0, 0]], 2.5, epsilon = 1e-6);
    assert_abs_diff_eq!(out.test[[1, 0]], 4.5, epsilon = 1e-6);
}

#[test]
fn unseen_category_encodes_as_zero_vector() {
    let fx = fixture();
    let out = run_fixture(&fx);

    // gender block at columns 2..4, vocabulary [female, male], indicator
    // variance 0.25 -> scale 0.5.
    assert_abs_diff_eq!(out.train[[0, 2]], 0.0, epsilon = 1e-6); // male row
    assert_abs_diff_eq!(out.train[[0, 3]], 2.0, epsilon = 1e-6);
    assert_abs_diff_eq!(out.train[[1, 2]], 2.0, epsilon = 1e-6); // female row
    assert_abs_diff_eq!(out.train[[1, 3]], 0.0, epsilon = 1e-6);

    // "other" was never seen in training: default policy ignores it.
    assert_abs_diff_eq!(out.test[[0, 2]], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(out.test[[0, 3]], 0.0, epsilon = 1e-6);
}

#[test]
fn error_policy_rejects_unseen_test_category() {
    let fx = fixture();
    let schema = dataset_schema();
    let train = read_csv(&fx.train, &schema).unwrap();
    let test = read_csv(&fx.test, &schema).unwrap();
    let (train_features, _) = train.split_target(TARGET_COLUMN).unwrap();
    let (test_features, _) = test.split_target(TARGET_COLUMN).unwrap();

    let fitted = DataTransformation::preprocessor()
        .with_unseen_policy(UnseenPolicy::Error)
        .fit(&train_features)
        .unwrap();
    assert!(fitted.transform(&train_features).is_ok());

    let err = fitted.transform(&test_features).unwrap_err();
    assert!(matches!(
        err,
        PrepError::UnknownCategory { column, value } if column == "gender" && value == "other"
    ));
}

#[test]
fn persisted_artifact_reproduces_the_transform() {
    let fx = fixture();
    let out = run_fixture(&fx);
    assert!(fx.artifact.exists());

    let fitted = persist::load(&fx.artifact).unwrap();
    let test_table = read_csv(&fx.test, &dataset_schema()).unwrap();
    let (features, _) = test_table.split_target(TARGET_COLUMN).unwrap();
    let reloaded = fitted.transform(&features).unwrap();

    let n = out.test.ncols() - 1;
    assert_eq!(reloaded, out.test.slice(ndarray::s![.., ..n]).to_owned());
}

#[test]
fn rerun_is_bit_identical() {
    let fx = fixture();
    let first = run_fixture(&fx);
    let second = run_fixture(&fx);
    assert_eq!(first.train, second.train);
    assert_eq!(first.test, second.test);
}

#[test]
fn missing_target_column_fails() {
    let dir = TempDir::new().unwrap();
    let header_without_target = "gender,race_ethnicity,parental_level_of_education,lunch,\
test_preparation_course,writing_score,reading_score";
    let train = dir.path().join("train.csv");
    fs::write(
        &train,
        format!("{header_without_target}\nmale,group A,bachelor,standard,none,50,70\n"),
    )
    .unwrap();
    let test = write_split(dir.path(), "test.csv", TEST_ROWS);

    let err = DataTransformation::new(TransformationConfig::new(
        dir.path().join("preprocessor.json"),
    ))
    .run(&train, &test)
    .unwrap_err();
    assert!(matches!(
        err,
        PrepError::MissingColumn { name } if name == TARGET_COLUMN
    ));
}

#[test]
fn extra_column_fails_as_schema_mismatch() {
    let dir = TempDir::new().unwrap();
    let train = write_split(dir.path(), "train.csv", TRAIN_ROWS);
    let test = dir.path().join("test.csv");
    fs::write(
        &test,
        format!("{HEADER},extra\nmale,group A,bachelor,standard,none,50,70,60,x\n"),
    )
    .unwrap();

    let err = DataTransformation::new(TransformationConfig::new(
        dir.path().join("preprocessor.json"),
    ))
    .run(&train, &test)
    .unwrap_err();
    assert!(matches!(err, PrepError::SchemaMismatch { .. }));
}
