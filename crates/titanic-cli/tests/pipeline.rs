//! Integration tests for the conversion pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use titanic_cli::pipeline::{ConvertOptions, run_conversion};
use titanic_model::Mode;

const TRAIN_CSV: &str = "\
PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
1,0,3,\"Braund, Mr. Owen Harris\",male,22,1,0,A/5 21171,7.25,,S
2,1,1,\"Cumings, Mrs. John Bradley (Florence Briggs Thayer)\",female,38,1,0,PC 17599,71.2833,C85,C
6,0,3,\"Moran, Mr. James\",male,,0,0,330877,8.4583,,Q
8,0,3,\"Palsson, Master. Gosta Leonard\",male,2,3,1,349909,21.075,,S
26,1,3,\"Asplund, Mrs. Carl Oscar (Selma Augusta Emilia Johansson)\",female,38,1,5,347077,31.3875,,S
";

const TEST_CSV: &str = "\
PassengerId,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
892,3,\"Kelly, Mr. James\",male,34.5,0,0,330911,7.8292,,Q
893,3,\"Wilkes, Mrs. James (Ellen Needs)\",female,47,1,0,363272,7,,S
1044,3,\"Storey, Mr. Thomas\",male,60.5,0,0,3701,,,S
";

fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write input");
    path
}

fn convert(path: &Path) -> String {
    let result = run_conversion(path, ConvertOptions::default()).expect("convert");
    assert!(result.written);
    fs::read_to_string(&result.output).expect("read output")
}

#[test]
fn training_file_produces_labelled_features() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "train.csv", TRAIN_CSV);

    let result = run_conversion(&input, ConvertOptions::default()).expect("convert");
    assert_eq!(result.mode, Mode::Training);
    assert_eq!(result.rows, 5);
    assert_eq!(result.output, dir.path().join("train.txt"));

    let content = fs::read_to_string(&result.output).unwrap();
    insta::assert_snapshot!(content, @r"
    0.0 1.0 -1.0 -0.13333333333333333 0.0 -1.0 -1.0
    1.0 -1.0 1.0 0.13333333333333333 0.0 -1.0 1.0
    0.0 1.0 -1.0 0.0 -1.0 -1.0 -1.0
    0.0 1.0 -1.0 -0.4666666666666667 1.0 0.0 -1.0
    1.0 1.0 1.0 0.13333333333333333 0.0 1.0 -1.0
    ");
}

#[test]
fn inference_file_passes_ids_through() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "test.csv", TEST_CSV);

    let result = run_conversion(&input, ConvertOptions::default()).expect("convert");
    assert_eq!(result.mode, Mode::Inference);

    let content = fs::read_to_string(&result.output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "892.0 1.0 -1.0 0.075 -1.0 -1.0 -1.0",
            "893.0 1.0 1.0 0.2833333333333333 0.0 -1.0 -1.0",
            "1044.0 1.0 -1.0 0.5083333333333333 -1.0 -1.0 -1.0",
        ]
    );
    for line in lines {
        assert_eq!(line.split(' ').count(), 7);
    }
}

#[test]
fn conversion_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "train.csv", TRAIN_CSV);

    let first = fs::read(dir.path().join("train.txt")).ok();
    assert!(first.is_none());
    let first = convert(&input);
    let second = convert(&input);
    assert_eq!(first, second);
}

#[test]
fn any_other_name_is_inference() {
    let dir = tempfile::tempdir().unwrap();
    // Training layout under a non-training name: column 0 is read as the id.
    let input = write_input(dir.path(), "train_copy.csv", TRAIN_CSV);
    let result = run_conversion(&input, ConvertOptions::default()).expect("convert");
    assert_eq!(result.mode, Mode::Inference);
    let content = fs::read_to_string(&result.output).unwrap();
    let leads: Vec<&str> = content
        .lines()
        .filter_map(|line| line.split(' ').next())
        .collect();
    assert_eq!(leads, vec!["1.0", "2.0", "6.0", "8.0", "26.0"]);
}

#[test]
fn parse_failure_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let content = format!("{TRAIN_CSV}9,1,first,\"Doe, J\",female,27,0,2,347742,11.1333,,S\n");
    let input = write_input(dir.path(), "train.csv", &content);

    let error = run_conversion(&input, ConvertOptions::default()).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains(":7:"), "{message}");
    assert!(message.contains("class"), "{message}");
    assert!(!dir.path().join("train.txt").exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn encode_failure_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let content = format!("{TEST_CSV}1045,3,\"Doe, J\",female,unknown,0,0,3701,8.05,,S\n");
    let input = write_input(dir.path(), "test.csv", &content);

    let error = run_conversion(&input, ConvertOptions::default()).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains(":5: encode record"), "{message}");
    assert!(message.contains("age"), "{message}");
    assert!(!dir.path().join("test.txt").exists());
}

#[test]
fn failed_run_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "test.csv", TEST_CSV);
    let previous = convert(&input);

    fs::write(&input, format!("{TEST_CSV}oops\n")).unwrap();
    assert!(run_conversion(&input, ConvertOptions::default()).is_err());
    assert_eq!(
        fs::read_to_string(dir.path().join("test.txt")).unwrap(),
        previous
    );
}

#[test]
fn missing_input_is_rejected_before_processing() {
    let dir = tempfile::tempdir().unwrap();
    let error = run_conversion(&dir.path().join("train.csv"), ConvertOptions::default())
        .unwrap_err();
    assert!(format!("{error}").starts_with("invalid input file"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "train.csv", TRAIN_CSV);

    let result = run_conversion(&input, ConvertOptions { dry_run: true }).expect("convert");
    assert_eq!(result.rows, 5);
    assert!(!result.written);
    assert!(!result.output.exists());
}

#[test]
fn header_only_input_gives_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "test.csv",
        "PassengerId,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked\n",
    );
    let result = run_conversion(&input, ConvertOptions::default()).expect("convert");
    assert_eq!(result.rows, 0);
    assert_eq!(fs::read_to_string(&result.output).unwrap(), "");
}

#[test]
fn spec_scenario_row() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "train.csv",
        "header\n1,0,3,\"Doe, J\",male,22,1,0,A/5,7.25,,S\n",
    );
    assert_eq!(
        convert(&input),
        "0.0 1.0 -1.0 -0.13333333333333333 0.0 -1.0 -1.0\n"
    );
}
