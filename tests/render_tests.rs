//! Rendering tests for lst
//!
//! These tests go from command line arguments and config text to printed
//! output, the way the `lst` binary does, against temporary directories.

use clap::Parser;
use lst::config::Config;
use lst::core::{LocalFs, Session, run};
use lst::utils::cli::Args;
use std::error;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn render(config: &Config, argv: &[&str], dir: &Path) -> Result<String, Box<dyn error::Error>> {
    let dir = dir.to_string_lossy().into_owned();
    let args = Args::try_parse_from(
        std::iter::once("lst")
            .chain(argv.iter().copied())
            .chain(std::iter::once(dir.as_str())),
    )?;
    let settings = args.settings(config, false, None)?;
    let mut session = Session::new();
    let mut out = Vec::new();
    run(&settings, &args.paths, &LocalFs, &mut session, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_long_format_from_config() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a"), "x")?;
    fs::write(dir.path().join("bb"), "twelve bytes")?;

    let config = Config::parse("[display]\nlong_format = \"$s $n\"\n")?;
    let text = render(&config, &["-l"], dir.path())?;
    assert_eq!(text, " 1 a\n12 bb\n");
    Ok(())
}

#[test]
fn test_format_flag_overrides_config() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("big"), vec![0u8; 2048])?;

    let config = Config::parse("[display]\nlong_format = \"$n\"\n")?;
    let text = render(&config, &["-lh", "--format", "$s|$n"], dir.path())?;
    assert_eq!(text, "2.0K|big\n");
    Ok(())
}

#[test]
fn test_size_sort_and_reverse() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("small"), "1")?;
    fs::write(dir.path().join("large"), "1234567890")?;
    fs::write(dir.path().join("medium"), "12345")?;

    let text = render(&Config::default(), &["-1S"], dir.path())?;
    assert_eq!(text, "large\nmedium\nsmall\n");

    let text = render(&Config::default(), &["-1Sr"], dir.path())?;
    assert_eq!(text, "small\nmedium\nlarge\n");
    Ok(())
}

#[test]
fn test_config_sort_and_classify() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("file10"), "")?;
    fs::write(dir.path().join("file9"), "")?;
    fs::create_dir(dir.path().join("zdir"))?;

    let config = Config::parse(
        "[general]\nsort = \"version\"\ndirs_first = true\n\n[display]\nlayout = \"single\"\n",
    )?;
    let text = render(&config, &[], dir.path())?;
    assert_eq!(text, "zdir/\nfile9\nfile10\n");

    let text = render(&config, &["-F"], dir.path())?;
    assert_eq!(text, "zdir\nfile9\nfile10\n");
    Ok(())
}

#[test]
fn test_quoting_names_with_spaces() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("two words"), "")?;
    fs::write(dir.path().join("plain"), "")?;

    let text = render(&Config::default(), &["-1"], dir.path())?;
    assert_eq!(text, "plain\n'two words'\n");

    let text = render(&Config::default(), &["-1", "-N"], dir.path())?;
    assert_eq!(text, "plain\ntwo words\n");

    let text = render(&Config::default(), &["-1", "-Q"], dir.path())?;
    assert_eq!(text, "\"plain\"\n\"two words\"\n");
    Ok(())
}

#[test]
fn test_narrow_width_wraps_grid() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    for name in ["aaaa", "bbbb", "cccc", "dddd"] {
        fs::write(dir.path().join(name), "")?;
    }
    let text = render(&Config::default(), &["--width=12"], dir.path())?;
    assert_eq!(text, "aaaa  cccc\nbbbb  dddd\n");
    Ok(())
}
