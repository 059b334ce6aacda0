use std::fs::{self, Permissions};
use std::os::unix::fs::{MetadataExt, PermissionsExt};
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;
use uds_blocks::{BlockMarkers, ConfigBlockRewriter, Error};

const PREFIX: &str = "global\n    daemon\n\ndefaults\n    mode http";
const BLOCK: &str = "frontend uds-frontend\n    mode tcp";

fn setup(contents: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("haproxy.cfg");
    fs::write(&path, contents).unwrap();
    (temp, path)
}

fn rewriter(path: &Path) -> ConfigBlockRewriter {
    ConfigBlockRewriter::new(path, BlockMarkers::haproxy_uds())
}

fn expected_block(content: &str) -> String {
    BlockMarkers::haproxy_uds().render(content)
}

fn leftover_temp_files(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("haproxy.cfg."))
        .collect()
}

#[test]
fn test_insert_into_file_without_block() {
    let (_temp, path) = setup(PREFIX);

    rewriter(&path).rewrite(Some(BLOCK), false).unwrap();

    let expected = format!("{PREFIX}{}\n", expected_block(BLOCK));
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_inserted_block_layout() {
    let (_temp, path) = setup("global");

    rewriter(&path).rewrite(Some("backend b"), false).unwrap();

    let expected = "global\n\
# BEGIN UDS\n\
# (The following HAproxy configuration entries, as well as the ``# BEGIN UDS``\n\
# and ``# END UDS`` comment lines surrounding it, were automatically generated\n\
# by ``csm_setup``. Please *do not edit these manually*.)\n\
backend b\n\
# END UDS\n";
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_replace_existing_block_only() {
    let suffix = "\n\nlisten stats\n    bind :9000\n";
    let original = format!("{PREFIX}{}{suffix}", expected_block("backend old"));
    let (_temp, path) = setup(&original);

    rewriter(&path).rewrite(Some(BLOCK), true).unwrap();

    let expected = format!("{PREFIX}{}{suffix}", expected_block(BLOCK));
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_remove_existing_block() {
    let original = format!("{PREFIX}{}\n", expected_block(BLOCK));
    let (_temp, path) = setup(&original);

    rewriter(&path).rewrite(None, false).unwrap();

    let result = fs::read_to_string(&path).unwrap();
    assert_eq!(result, format!("{PREFIX}\n"));
    assert!(!result.contains("# BEGIN UDS"));
    assert!(!result.contains("# END UDS"));
}

#[test]
fn test_remove_without_block_appends_newline() {
    let (_temp, path) = setup(PREFIX);

    rewriter(&path).rewrite(None, false).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), format!("{PREFIX}\n"));
}

#[test]
fn test_apply_is_idempotent() {
    let (_temp, path) = setup(PREFIX);
    let rw = rewriter(&path);

    rw.rewrite(Some(BLOCK), false).unwrap();
    let once = fs::read_to_string(&path).unwrap();
    rw.rewrite(Some(BLOCK), false).unwrap();
    let twice = fs::read_to_string(&path).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_apply_then_remove_restores_prefix() {
    let (_temp, path) = setup(PREFIX);
    let rw = rewriter(&path);

    rw.rewrite(Some(BLOCK), false).unwrap();
    rw.rewrite(None, true).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), format!("{PREFIX}\n"));
}

#[test]
fn test_missing_required_block_leaves_file_untouched() {
    let (temp, path) = setup(PREFIX);

    let err = rewriter(&path).rewrite(Some(BLOCK), true).unwrap_err();

    assert!(matches!(err, Error::MissingBlock { ref path } if path.ends_with("haproxy.cfg")));
    assert_eq!(fs::read(&path).unwrap(), PREFIX.as_bytes());
    assert!(leftover_temp_files(temp.path()).is_empty());
}

#[rstest]
#[case::end_before_begin("global\n# END UDS\nfoo\n# BEGIN UDS\nbar\n# END UDS\n")]
#[case::end_missing("global\n# BEGIN UDS\nbar\n")]
#[case::only_end_before_begin("global\n# END UDS\n# BEGIN UDS\n")]
fn test_corrupt_block_leaves_file_untouched(#[case] original: &str) {
    let (temp, path) = setup(original);

    for content in [Some(BLOCK), None] {
        let err = rewriter(&path).rewrite(content, false).unwrap_err();
        assert!(matches!(err, Error::CorruptBlock { .. }), "got {err:?}");
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
    assert!(leftover_temp_files(temp.path()).is_empty());
}

#[test]
fn test_missing_target_is_io_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("haproxy.cfg");

    let err = rewriter(&path).rewrite(Some(BLOCK), false).unwrap_err();

    match err {
        Error::Fs(fs_err) => assert_eq!(fs_err.io_kind(), Some(std::io::ErrorKind::NotFound)),
        other => panic!("expected I/O error, got {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn test_target_identity_and_mode_preserved() {
    let (temp, path) = setup(PREFIX);
    fs::set_permissions(&path, Permissions::from_mode(0o644)).unwrap();
    let before = fs::metadata(&path).unwrap();

    rewriter(&path).rewrite(Some(BLOCK), false).unwrap();

    let after = fs::metadata(&path).unwrap();
    assert_eq!(after.ino(), before.ino());
    assert_eq!(after.permissions().mode() & 0o777, 0o644);
    assert!(leftover_temp_files(temp.path()).is_empty());
}

#[test]
fn test_custom_markers_and_prefix() {
    let (temp, path) = setup("[main]\n");
    let markers = BlockMarkers::new("\n;; BEGIN", "\n;; END", ";; generated");
    let rw = ConfigBlockRewriter::new(&path, markers).with_temp_prefix("custom.");

    rw.rewrite(Some("key = value"), false).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[main]\n\n;; BEGIN\n;; generated\nkey = value\n;; END\n"
    );
    assert_eq!(rw.path(), path.as_path());
    assert!(leftover_temp_files(temp.path()).is_empty());
}
