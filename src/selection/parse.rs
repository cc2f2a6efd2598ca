use regex::Regex;

use crate::capture::Region;
use crate::error::SelectionError;

/// A selection line; the helper may print diagnostics around it.
const SELECTION_PATTERN: &str = r"^\s*Selection:(.*)$";

/// Extracts the region from the helper's standard output.
///
/// The last `Selection:` line wins. It must hold exactly four
/// comma-separated non-negative integers: x, y, width, height.
pub fn parse_selection_output(stdout: &str) -> Result<Region, SelectionError> {
    let selection_regex =
        Regex::new(SELECTION_PATTERN).map_err(|e| SelectionError::Malformed(e.to_string()))?;

    let coords_str = stdout
        .lines()
        .rev()
        .find_map(|line| selection_regex.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .ok_or(SelectionError::NoSelection)?;

    let coords = coords_str
        .split(',')
        .map(|part| part.trim().parse::<u32>())
        .collect::<Result<Vec<u32>, _>>()
        .map_err(|_| SelectionError::Malformed(coords_str.to_string()))?;

    match coords.as_slice() {
        &[x, y, width, height] => Ok(Region::new(x, y, width, height)),
        _ => Err(SelectionError::Malformed(coords_str.to_string())),
    }
}
