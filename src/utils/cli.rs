//! Command-line argument parsing for lst.
//!
//! [Args] is the clap definition of every flag. [Args::settings] layers the
//! flags over the loaded [Config] and produces the [Settings] of one run.
//! Flags always win over config values.

use crate::config::general::BACKUP_PATTERNS;
use crate::config::{ColorWhen, Config};
use crate::core::formatter::validate_date_format;
use crate::core::{
    EntryOptions, NongraphicMode, QuoteMode, Settings, SizeStyle, SortMode, TimeMode, Visibility,
};
use crate::error::LstError;
use crate::ui::{Layout, RenderOptions, parse_long_format};

use clap::{ArgAction, Parser};

use std::path::PathBuf;

/// Width used when stdout is not a terminal.
pub const DEFAULT_WIDTH: usize = 80;

#[derive(Parser, Debug)]
#[command(name = "lst")]
#[command(version, about = "List information about the FILEs (the current directory by default).")]
#[command(disable_help_flag = true)]
pub struct Args {
    /// Files and directories to list
    #[arg(value_name = "FILE")]
    pub paths: Vec<PathBuf>,

    /// Do not hide entries starting with `.`, including `.` and `..`
    #[arg(short, long)]
    pub all: bool,

    /// Like --all without `.` and `..`
    #[arg(short = 'A', long)]
    pub almost_all: bool,

    /// Use the long listing format
    #[arg(short, long)]
    pub long: bool,

    /// List one file per line
    #[arg(short = '1')]
    pub single_column: bool,

    /// Do not append indicators (one of */=@|) to names
    #[arg(short = 'F', long)]
    pub no_classify: bool,

    /// Natural sort of version numbers within names
    #[arg(short = 'v')]
    pub version_sort: bool,

    /// Sort by file size, largest first
    #[arg(short = 'S')]
    pub size_sort: bool,

    /// Sort by extension
    #[arg(short = 'X')]
    pub extension_sort: bool,

    /// Sort by time, newest first
    #[arg(short = 't')]
    pub time_sort: bool,

    /// Do not sort; list entries in directory order
    #[arg(short = 'U')]
    pub no_sort: bool,

    /// Sort by name
    #[arg(short = 'n')]
    pub name_sort: bool,

    /// Never quote names
    #[arg(short = 'N', long)]
    pub literal: bool,

    /// Enclose names in double quotes
    #[arg(short = 'Q', long)]
    pub quote_name: bool,

    /// Print C-style escapes for control characters
    #[arg(short = 'b', long)]
    pub escape: bool,

    /// Print ? instead of control characters
    #[arg(short = 'q', long)]
    pub hide_control_chars: bool,

    /// Print control characters as is
    #[arg(long)]
    pub show_control_chars: bool,

    /// Print sizes like 1.0K 234.0M 2.0G
    #[arg(short = 'h', long)]
    pub human_readable: bool,

    /// Like --human-readable, but use powers of 1000
    #[arg(long)]
    pub si: bool,

    /// List directories themselves, not their contents
    #[arg(short = 'd', long)]
    pub directory: bool,

    /// Reverse order while sorting
    #[arg(short, long)]
    pub reverse: bool,

    /// Group directories before files
    #[arg(short = 'D', long)]
    pub group_directories_first: bool,

    /// Show information for the file a symlink references
    #[arg(short = 'L', long)]
    pub dereference: bool,

    /// Do not list entries ending with ~, .bak or .tmp
    #[arg(short = 'B', long)]
    pub ignore_backups: bool,

    /// Do not list entries matching the glob PATTERN
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Use the time of last access
    #[arg(short = 'u')]
    pub access_time: bool,

    /// Use the creation time
    #[arg(short = 'c')]
    pub creation_time: bool,

    /// Sort by WORD: none, name, extension, size, time, version, length
    #[arg(long, value_name = "WORD")]
    pub sort: Option<String>,

    /// Time to show and sort by: write, access, creation
    #[arg(long, value_name = "WORD")]
    pub time: Option<String>,

    /// Colorize the output: always, never, auto
    #[arg(long, value_name = "WHEN", num_args = 0..=1, require_equals = true, default_missing_value = "always")]
    pub color: Option<String>,

    /// Assume the screen is COLS columns wide
    #[arg(long, value_name = "COLS")]
    pub width: Option<usize>,

    /// Long listing template, eg. '$t$p $l $o $g $s $d $n'
    #[arg(long, value_name = "FMT")]
    pub format: Option<String>,

    /// strftime format for the date column
    #[arg(long, value_name = "FMT")]
    pub time_style: Option<String>,

    /// Quote names with WORD: auto, always, never
    #[arg(long, value_name = "WORD")]
    pub quoting_style: Option<String>,

    /// Do not ignore case when sorting
    #[arg(long)]
    pub case_sensitive: bool,

    /// Show Nerd Font icons
    #[arg(long)]
    pub icons: bool,

    /// Write a default config file and exit
    #[arg(long)]
    pub init: bool,

    /// Print debug logs to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Args {
    /// Merges the flags with `config`.
    ///
    /// `terminal` is the (columns, rows) size of the output terminal, if any.
    pub fn settings(
        &self,
        config: &Config,
        is_tty: bool,
        terminal: Option<(u16, u16)>,
    ) -> Result<Settings, LstError> {
        let general = config.general();
        let display = config.display();

        let visibility = if self.all {
            Visibility::All
        } else if self.almost_all {
            Visibility::AlmostAll
        } else {
            general.visibility()
        };

        let mut ignore = general.ignore().to_vec();
        ignore.extend(self.ignore.iter().cloned());
        if self.ignore_backups {
            ignore.extend(BACKUP_PATTERNS.iter().map(|p| p.to_string()));
        }

        let entry = EntryOptions {
            quoting: self.quoting()?.unwrap_or(display.quoting()),
            nongraphic: self.nongraphic().unwrap_or(display.nongraphic()),
            time_mode: self.time_mode()?.unwrap_or(general.time()),
        };

        let layout = if self.long {
            Layout::Long
        } else if self.single_column {
            Layout::SingleColumn
        } else {
            display.layout()
        };

        let color = match &self.color {
            Some(when) => parse_word::<ColorWhen>("color", when)?,
            None => display.color(),
        };

        let template = self.format.as_deref().unwrap_or(display.long_format());
        let long_format = parse_long_format(template)?;

        let date_format = self
            .time_style
            .as_deref()
            .or(display.date_format())
            .map(str::to_string);
        if let Some(f) = &date_format {
            validate_date_format(f)?;
        }

        let width = match self.width {
            Some(0) => {
                return Err(LstError::InvalidArgument {
                    option: "width",
                    value: "0".to_string(),
                });
            }
            Some(w) => w,
            None => display
                .width()
                .or(terminal.map(|(cols, _)| cols as usize).filter(|&c| c > 0))
                .unwrap_or(DEFAULT_WIDTH),
        };

        // Keep room for the `...` marker and the prompt
        let max_rows = match terminal {
            Some((_, rows)) if is_tty && display.truncate() && rows > 2 => Some(rows as usize - 2),
            _ => None,
        };

        let render = RenderOptions {
            layout,
            classify: display.classify() && !self.no_classify,
            icons: display.icons() || self.icons,
            color: color.enabled(is_tty),
            size_style: self.size_style().unwrap_or(display.human_readable()),
            date_format,
            long_format,
            width,
            separator: display.separator(),
            max_rows,
            theme: config.theme().clone(),
        };

        let settings = Settings {
            visibility,
            sort: self.sort_mode()?.unwrap_or(general.sort()),
            reverse: general.reverse() || self.reverse,
            case_sensitive: general.case_sensitive() || self.case_sensitive,
            dirs_first: general.dirs_first() || self.group_directories_first,
            entry,
            dereference: general.dereference() || self.dereference,
            list_directories: self.directory,
            ignore,
            render,
        };
        log::debug!("settings: {:?}", settings);
        Ok(settings)
    }

    /// `--sort` first, then the single letter sort flags.
    fn sort_mode(&self) -> Result<Option<SortMode>, LstError> {
        if let Some(word) = &self.sort {
            return parse_word("sort", word).map(Some);
        }
        let mode = if self.no_sort {
            Some(SortMode::None)
        } else if self.size_sort {
            Some(SortMode::Size)
        } else if self.time_sort {
            Some(SortMode::Time)
        } else if self.extension_sort {
            Some(SortMode::Extension)
        } else if self.version_sort {
            Some(SortMode::Version)
        } else if self.name_sort {
            Some(SortMode::Name)
        } else {
            None
        };
        Ok(mode)
    }

    fn time_mode(&self) -> Result<Option<TimeMode>, LstError> {
        if let Some(word) = &self.time {
            return parse_word("time", word).map(Some);
        }
        Ok(if self.access_time {
            Some(TimeMode::Access)
        } else if self.creation_time {
            Some(TimeMode::Creation)
        } else {
            None
        })
    }

    fn quoting(&self) -> Result<Option<QuoteMode>, LstError> {
        if let Some(word) = &self.quoting_style {
            let mode = match word.as_str() {
                "auto" | "shell" => QuoteMode::Auto,
                "always" | "double" | "c" => QuoteMode::Always,
                "never" | "literal" => QuoteMode::Never,
                _ => {
                    return Err(LstError::InvalidArgument {
                        option: "quoting-style",
                        value: word.clone(),
                    });
                }
            };
            return Ok(Some(mode));
        }
        Ok(if self.literal {
            Some(QuoteMode::Never)
        } else if self.quote_name {
            Some(QuoteMode::Always)
        } else {
            None
        })
    }

    fn nongraphic(&self) -> Option<NongraphicMode> {
        if self.show_control_chars {
            Some(NongraphicMode::Show)
        } else if self.hide_control_chars {
            Some(NongraphicMode::Hide)
        } else if self.escape {
            Some(NongraphicMode::Escape)
        } else {
            None
        }
    }

    fn size_style(&self) -> Option<SizeStyle> {
        if self.si {
            Some(SizeStyle::Si)
        } else if self.human_readable {
            Some(SizeStyle::Binary)
        } else {
            None
        }
    }
}

fn parse_word<T: std::str::FromStr>(option: &'static str, word: &str) -> Result<T, LstError> {
    word.parse().map_err(|_| LstError::InvalidArgument {
        option,
        value: word.to_string(),
    })
}
