//! Listing tests for lst
//!
//! These tests run whole listings against temporary directories through the
//! real file system source and compare the printed text.
//! Temporary directories are cleaned up after the tests complete.

use lst::core::{LocalFs, Session, Settings, Visibility, run};
use lst::ui::Layout;
use std::error;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn list(settings: &Settings, paths: &[PathBuf]) -> Result<(String, i32), Box<dyn error::Error>> {
    let mut session = Session::new();
    let mut out = Vec::new();
    run(settings, paths, &LocalFs, &mut session, &mut out)?;
    Ok((String::from_utf8(out)?, session.exit_status()))
}

#[test]
fn test_directory_listing_in_grid() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("b.txt"), "b")?;
    fs::write(dir.path().join("a.txt"), "a")?;
    fs::create_dir(dir.path().join("sub"))?;
    fs::write(dir.path().join(".hidden"), "")?;

    let (text, status) = list(&Settings::default(), &[dir.path().to_path_buf()])?;
    assert_eq!(text, "a.txt  b.txt  sub/\n");
    assert_eq!(status, 0);
    Ok(())
}

#[test]
fn test_dotfiles_with_almost_all_and_all() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join(".hidden"), "")?;
    fs::write(dir.path().join("shown"), "")?;

    let almost = Settings {
        visibility: Visibility::AlmostAll,
        ..Settings::default()
    };
    let (text, _) = list(&almost, &[dir.path().to_path_buf()])?;
    assert!(text.contains(".hidden"));
    assert!(!text.contains("./"));

    let all = Settings {
        visibility: Visibility::All,
        render: lst::ui::RenderOptions {
            layout: Layout::SingleColumn,
            ..Default::default()
        },
        ..Settings::default()
    };
    let (text, _) = list(&all, &[dir.path().to_path_buf()])?;
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines.contains(&"./"));
    assert!(lines.contains(&"../"));
    assert!(lines.contains(&".hidden"));
    assert!(lines.contains(&"shown"));
    Ok(())
}

#[test]
fn test_several_directories_get_labels() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let one = dir.path().join("one");
    let two = dir.path().join("two");
    fs::create_dir(&one)?;
    fs::create_dir(&two)?;
    fs::write(one.join("x"), "")?;
    fs::write(two.join("y"), "")?;

    let (text, _) = list(&Settings::default(), &[one.clone(), two.clone()])?;
    let expected = format!("{}:\nx\n\n{}:\ny\n", one.display(), two.display());
    assert_eq!(text, expected);
    Ok(())
}

#[test]
fn test_files_come_before_directories() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let sub = dir.path().join("sub");
    fs::create_dir(&sub)?;
    fs::write(sub.join("inner"), "")?;
    let file = dir.path().join("file");
    fs::write(&file, "")?;

    let (text, _) = list(&Settings::default(), &[sub.clone(), file.clone()])?;
    let expected = format!("{}\n\n{}:\ninner\n", file.display(), sub.display());
    assert_eq!(text, expected);
    Ok(())
}

#[test]
fn test_missing_argument_sets_exit_status() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("real"), "")?;
    let missing = dir.path().join("nope");

    let (text, status) = list(&Settings::default(), &[missing, dir.path().join("real")])?;
    assert!(text.ends_with("real\n"));
    assert_eq!(status, 2);
    Ok(())
}

#[test]
fn test_list_directories_themselves() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let sub = dir.path().join("sub");
    fs::create_dir(&sub)?;
    fs::write(sub.join("inner"), "")?;

    let settings = Settings {
        list_directories: true,
        ..Settings::default()
    };
    let (text, _) = list(&settings, &[sub.clone()])?;
    assert_eq!(text, format!("{}/\n", sub.display()));
    Ok(())
}

#[test]
fn test_ignore_patterns_skip_entries() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    for name in ["keep.rs", "drop.o", "notes~"] {
        fs::write(dir.path().join(name), "")?;
    }
    let settings = Settings {
        ignore: vec!["*.o".to_string(), "*~".to_string()],
        ..Settings::default()
    };
    let (text, _) = list(&settings, &[dir.path().to_path_buf()])?;
    assert_eq!(text, "keep.rs\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlink_targets_in_single_column() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.txt"), "a")?;
    std::os::unix::fs::symlink("a.txt", dir.path().join("link"))?;
    std::os::unix::fs::symlink("gone", dir.path().join("dangling"))?;

    let settings = Settings {
        render: lst::ui::RenderOptions {
            layout: Layout::SingleColumn,
            ..Default::default()
        },
        ..Settings::default()
    };
    let (text, status) = list(&settings, &[dir.path().to_path_buf()])?;
    assert_eq!(text, "a.txt\ndangling@ -> gone\nlink@ -> a.txt\n");
    assert_eq!(status, 0);

    // The grid does not show targets
    let (text, _) = list(&Settings::default(), &[dir.path().to_path_buf()])?;
    assert_eq!(text, "a.txt  dangling@  link@\n");
    Ok(())
}
