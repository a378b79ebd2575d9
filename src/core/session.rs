//! Per-run state shared by the listing driver and the renderers.
//!
//! A [Session] owns everything that lives for exactly one run: the date
//! cutoff, the owner/group name cache, the set of error messages already
//! reported and the exit status.

use crate::core::fm::{Identity, MetadataSource};

use chrono::{Local, Months};

use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Exit status for a run where an argument could not be listed.
pub const EXIT_TROUBLE: i32 = 2;

/// Placeholder shown when an owner or group cannot be resolved.
pub const UNKNOWN_NAME: &str = "?";

#[derive(Debug)]
pub struct Session {
    six_months_ago: i64,
    owners: HashMap<Identity, (String, String)>,
    reported: HashSet<String>,
    exit_status: i32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let six_months_ago = Local::now()
            .checked_sub_months(Months::new(6))
            .map(|d| d.timestamp())
            .unwrap_or(i64::MIN);
        Self::with_clock(six_months_ago)
    }

    /// Session with a fixed cutoff between recent and old dates.
    pub fn with_clock(six_months_ago: i64) -> Self {
        Self {
            six_months_ago,
            owners: HashMap::new(),
            reported: HashSet::new(),
            exit_status: 0,
        }
    }

    // Getters

    #[inline]
    pub fn six_months_ago(&self) -> i64 {
        self.six_months_ago
    }

    #[inline]
    pub fn exit_status(&self) -> i32 {
        self.exit_status
    }

    pub fn set_exit_status(&mut self, status: i32) {
        self.exit_status = self.exit_status.max(status);
    }

    /// Owner and group names for `identity`, asking `source` on a miss.
    /// Unresolvable identities are cached as `("?", "?")`.
    pub fn owner_and_group<S: MetadataSource + ?Sized>(
        &mut self,
        source: &S,
        identity: Identity,
    ) -> (String, String) {
        self.owners
            .entry(identity)
            .or_insert_with(|| {
                source.owner_and_group(identity).unwrap_or_else(|| {
                    log::debug!("no names for uid {} gid {}", identity.uid, identity.gid);
                    (UNKNOWN_NAME.to_string(), UNKNOWN_NAME.to_string())
                })
            })
            .clone()
    }

    /// Reports a per-entry metadata failure on stderr, once per distinct
    /// message for the whole run.
    ///
    /// # Returns
    /// true if the message was printed.
    pub fn report(&mut self, path: &Path, message: &str) -> bool {
        if !self.reported.insert(message.to_string()) {
            log::debug!("{}: {} (already reported)", path.display(), message);
            return false;
        }
        eprintln!("lst: {}: {}", path.display(), message);
        true
    }

    /// Reports a failure of an argument or directory. Always printed.
    pub fn report_path(&self, path: &Path, message: &str) {
        eprintln!("lst: {}: {}", path.display(), message);
    }

    /// Reports an argument path that does not exist and marks the run as failed.
    pub fn report_missing(&mut self, path: &Path) {
        eprintln!("lst: '{}': No such file or directory", path.display());
        self.set_exit_status(EXIT_TROUBLE);
    }
}
