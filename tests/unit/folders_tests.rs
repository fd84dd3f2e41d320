// Folder filter set tests

use sukashi::folders::FolderFilter;

#[test]
fn test_normalization_of_messy_input() {
    // Duplicates under case folding and empty segments collapse away.
    let filter = FolderFilter::parse("A;a;B;;");

    assert_eq!(filter.len(), 2);
    assert!(filter.contains("a"));
    assert!(filter.contains("B"));

    let serialized = filter.to_delimited();
    assert!(serialized == "A;B" || serialized == "B;A");
}

#[test]
fn test_reentering_same_folder_is_a_noop() {
    let first = FolderFilter::parse("C:\\Work\\Demo");
    let second = FolderFilter::parse("C:\\Work\\Demo;c:\\work\\demo;C:\\WORK\\DEMO");

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert!(second.contains("c:\\WORK\\demo"));
}

#[test]
fn test_membership_view_is_readable() {
    let filter = FolderFilter::parse("src;tests");
    let mut folders: Vec<&str> = filter.iter().collect();
    folders.sort_unstable();

    assert_eq!(folders, vec!["src", "tests"]);
}
