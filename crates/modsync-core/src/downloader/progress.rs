//! Console progress line for one download.

use std::fmt;

/// `"<file>\t\t<pct>%, <current>/<total>"`.
///
/// With an unknown (or zero) total the percentage and total render as `?`,
/// except on the final line, which always reads 100%.
#[derive(Debug, Clone, Copy)]
pub struct ProgressLine<'a> {
    pub file_name: &'a str,
    pub current: u64,
    pub total: Option<u64>,
    finished: bool,
}

impl<'a> ProgressLine<'a> {
    pub fn new(file_name: &'a str, current: u64, total: Option<u64>) -> Self {
        Self {
            file_name,
            current,
            total,
            finished: false,
        }
    }

    /// Final line of a download: `total/total` at 100%.
    pub fn finished(file_name: &'a str, total: u64) -> Self {
        Self {
            file_name,
            current: total,
            total: Some(total),
            finished: true,
        }
    }

    /// Integer percentage, `current * 100 / total`. `None` when the total is unknown or zero.
    pub fn percent(&self) -> Option<u64> {
        if self.finished {
            return Some(100);
        }
        match self.total {
            Some(total) if total > 0 => Some(self.current.saturating_mul(100) / total),
            _ => None,
        }
    }
}

impl fmt::Display for ProgressLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t\t", self.file_name)?;
        match self.percent() {
            Some(pct) => write!(f, "{}%", pct)?,
            None => f.write_str("?%")?,
        }
        match self.total {
            Some(total) => write!(f, ", {}/{}", self.current, total),
            None => write!(f, ", {}/?", self.current),
        }
    }
}
