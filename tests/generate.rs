use std::fs;

use placeholder_assets::{AssetError, AssetSet, DONE_MESSAGE, embedded_payload, run};
use pretty_assertions::assert_eq;

fn expected_report() -> String {
    let mut s = String::new();
    for name in AssetSet::default().names {
        s.push_str(&format!("Created {}\n", name));
    }
    s.push_str(DONE_MESSAGE);
    s.push('\n');
    s
}

#[test]
fn empty_dir_gets_four_identical_assets() {
    let tmp = tempfile::tempdir().unwrap();
    let set = AssetSet::under(tmp.path());
    let mut out = Vec::new();

    let written = run(&set, &mut out).unwrap();

    assert_eq!(written, set.paths());
    assert_eq!(String::from_utf8(out).unwrap(), expected_report());
    let payload = embedded_payload().unwrap();
    for path in &written {
        assert_eq!(fs::read(path).unwrap(), payload, "{}", path.display());
    }
    assert_eq!(fs::read_dir(&set.output_dir).unwrap().count(), 4);
}

#[test]
fn second_run_leaves_identical_bytes() {
    let tmp = tempfile::tempdir().unwrap();
    let set = AssetSet::under(tmp.path());

    run(&set, &mut Vec::new()).unwrap();
    let first: Vec<Vec<u8>> = set.paths().iter().map(|p| fs::read(p).unwrap()).collect();
    run(&set, &mut Vec::new()).unwrap();
    let second: Vec<Vec<u8>> = set.paths().iter().map(|p| fs::read(p).unwrap()).collect();

    assert_eq!(first, second);
}

#[test]
fn unrelated_files_are_left_alone() {
    let tmp = tempfile::tempdir().unwrap();
    let set = AssetSet::under(tmp.path());
    fs::create_dir_all(&set.output_dir).unwrap();
    fs::write(set.output_dir.join("notes.txt"), b"keep me").unwrap();
    fs::write(set.output_dir.join("favicon.png"), b"old favicon, much longer than the payload").unwrap();

    run(&set, &mut Vec::new()).unwrap();

    assert_eq!(fs::read(set.output_dir.join("notes.txt")).unwrap(), b"keep me");
    assert_eq!(
        fs::read(set.output_dir.join("favicon.png")).unwrap(),
        embedded_payload().unwrap()
    );
    assert_eq!(fs::read_dir(&set.output_dir).unwrap().count(), 5);
}

#[test]
fn blocked_output_dir_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let set = AssetSet::under(tmp.path());
    fs::write(&set.output_dir, b"a file where the directory should be").unwrap();
    let mut out = Vec::new();

    let err = run(&set, &mut out).unwrap_err();

    assert!(matches!(err, AssetError::CreateDir { .. }), "got {err:?}");
    assert!(out.is_empty());
    assert!(set.output_dir.is_file());
    let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}
