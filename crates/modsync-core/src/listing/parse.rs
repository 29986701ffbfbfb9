//! Table-row scraper for the server's directory page.

use super::ListingParser;
use crate::identity::substring_between;

const ROW_END: &str = "</tr>";
const CELL_END: &str = "</td>";
const NAME_START: &str = "<tt>";
const NAME_END: &str = "</tt>";

/// Rows with fewer cell parts than this are not file rows.
const MIN_CELLS: usize = 3;

/// Parses the fixed template the mod server renders: one `<tr>` per file, the
/// file name wrapped in `<tt>` inside the first cell.
///
/// The first chunk before `</tr>` is the header row and the chunk after the
/// last `</tr>` is trailing markup; both are dropped without inspection.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTableParser;

impl ListingParser for HtmlTableParser {
    fn parse(&self, body: &str) -> Vec<String> {
        let rows: Vec<&str> = body.split(ROW_END).collect();
        if rows.len() < 2 {
            return Vec::new();
        }

        let mut names = Vec::new();
        for row in &rows[1..rows.len() - 1] {
            let cells: Vec<&str> = row.split(CELL_END).collect();
            if cells.len() < MIN_CELLS {
                tracing::trace!(row = %row.trim(), "skipping short row");
                continue;
            }
            let name = substring_between(cells[0], NAME_START, NAME_END);
            if name.is_empty() {
                continue;
            }
            names.push(name.to_string());
        }
        names
    }
}
