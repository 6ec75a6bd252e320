//! DirectorySaver tests

use pixy_engine::{DirectorySaver, ImageFormat, ImageSaver};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_directory_saver_writes_file() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let saver = DirectorySaver::new(dir.path());

    let path = saver.save("My Pixel Art", ImageFormat::Png, &[1, 2, 3]).unwrap();

    assert_eq!(path, dir.path().join("My_Pixel_Art.png"));
    assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_directory_saver_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("exports").join("nested");
    let saver = DirectorySaver::new(&target);

    let path = saver.save("art", ImageFormat::Jpeg, &[0xff, 0xd8]).unwrap();

    assert!(target.is_dir());
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("jpg"));
}

#[test]
fn test_directory_saver_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    // a file where the directory should be
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"x").unwrap();
    let saver = DirectorySaver::new(&blocker);

    let result = saver.save("art", ImageFormat::Png, &[1]);
    assert!(matches!(result, Err(pixy_engine::EngineError::ImageSaveFailed { .. })));
}
