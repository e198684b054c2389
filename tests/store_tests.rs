use park_review_analyzer::aggregator::average_by_park_year;
use park_review_analyzer::{LoadError, RecordStore};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

const SAMPLE: &str = "\
Review_ID,Rating,Year_Month,Reviewer_Location,Review_Text,Branch
670772142,4,2019-4,Australia,\"If you've ever been to Disneyland anywhere you'll find it very similar\",Disneyland_HongKong
670682799,4,2019-5,Philippines,Its been a while since d last time we visit HK Disneyland,Disneyland_HongKong
670623270,4,2019-4,United Arab Emirates,Thanks God it wasn't too hot,Disneyland_HongKong
670607911,4,2019-4,Australia,HK Disneyland is a great compact park,Disneyland_HongKong
670607296,4,2019-4,United Kingdom,\"the location is not in the city, took around 1 hour\",Disneyland_HongKong
10000001,3,missing,France,Queues were long,Disneyland_Paris
";

fn write_sample(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_sample_file() {
    let file = write_sample(SAMPLE);
    let store = RecordStore::load(file.path()).unwrap();

    assert_eq!(store.len(), 6);
    assert_eq!(store.records()[0].branch, "Disneyland_HongKong");
    assert_eq!(
        store.records()[4].get("Review_Text"),
        Some("the location is not in the city, took around 1 hour")
    );
    assert_eq!(store.records()[5].year_month, "missing");
}

#[test]
fn test_from_reader_matches_file_load() {
    let file = write_sample(SAMPLE);
    let from_file = RecordStore::load(file.path()).unwrap();
    let from_reader = RecordStore::from_reader(Cursor::new(SAMPLE)).unwrap();

    assert_eq!(from_reader.records(), from_file.records());
}

#[test]
fn test_from_reader_rejects_missing_column() {
    let result = RecordStore::from_reader(Cursor::new("Branch,Rating\nParkA,4\n"));
    assert!(matches!(result, Err(LoadError::MissingColumn(ref c)) if c == "Reviewer_Location"));
}

#[test]
fn test_year_prefix_on_loaded_data() {
    let file = write_sample(SAMPLE);
    let store = RecordStore::load(file.path()).unwrap();

    assert_eq!(
        average_by_park_year(&store, "Disneyland_HongKong", "2019"),
        Ok(Some(4.0))
    );
    assert_eq!(average_by_park_year(&store, "Disneyland_Paris", "2019"), Ok(None));
}

#[test]
fn test_load_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = RecordStore::load(temp_dir.path().join("absent.csv"));

    assert!(matches!(result, Err(LoadError::NotFound(_))));
}

#[test]
fn test_load_rejects_ragged_rows() {
    let file = write_sample("Branch,Rating,Year_Month,Reviewer_Location\nParkA,4,2022-05,US\nParkB,5\n");
    let result = RecordStore::load(file.path());

    assert!(matches!(result, Err(LoadError::MalformedRow { row: 2, .. })));
}

#[test]
fn test_load_directory_is_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(RecordStore::load(temp_dir.path()).is_err());
}
