//! Block filter: reduces a raw trace to the allow-listed blocks.
//!
//! A block opens on a line containing `Begin:` that ends with one of the
//! allow-listed names, and closes on the first later line containing `End:`
//! that ends with the same name. Begin lines seen inside an open block are
//! kept as ordinary content.

use crate::utils::config::{BEGIN_TAG, END_TAG, FILTER_ALLOW_LIST};
use log::{debug, warn};

/// Keep only the lines inside allow-listed `Begin:`/`End:` blocks.
///
/// A block that never closes keeps every remaining line.
pub fn filter_blocks<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut reduced = Vec::new();
    let mut current: Option<String> = None;

    for line in lines {
        let line = line.as_ref();

        if current.is_none() {
            current = opening_block(line);
            if let Some(name) = &current {
                debug!("Filter: block <{}> opened", name);
            }
        }

        let Some(name) = &current else {
            continue;
        };

        reduced.push(line.to_string());

        if line.contains(END_TAG) && line.trim_end().ends_with(name.as_str()) {
            debug!("Filter: block <{}> closed", name);
            current = None;
        }
    }

    if let Some(name) = current {
        warn!("Block <{}> has no end marker, kept until end of input", name);
    }

    reduced
}

/// Name of the allow-listed block opened by `line`, if any
fn opening_block(line: &str) -> Option<String> {
    let start = line.find(BEGIN_TAG)?;
    let trimmed = line.trim_end();
    if !FILTER_ALLOW_LIST.iter().any(|name| trimmed.ends_with(name)) {
        return None;
    }
    let name = line[start + BEGIN_TAG.len()..].trim();
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_lines_outside_blocks() {
        let lines = [
            "ncpWrite 0.1.0.0x0 0x1",
            "# Begin: PBM",
            "ncpWrite 0.2.0.0x0 0x1",
            "# End:   PBM",
            "ncpWrite 0.3.0.0x0 0x1",
        ];
        let reduced = filter_blocks(&lines);
        assert_eq!(reduced, vec!["# Begin: PBM", "ncpWrite 0.2.0.0x0 0x1", "# End:   PBM"]);
    }

    #[test]
    fn test_ignores_unlisted_blocks() {
        let lines = ["# Begin: Engines.SPP", "ncpRead 0.1.0.0x0", "# End:   Engines.SPP"];
        assert!(filter_blocks(&lines).is_empty());
    }

    #[test]
    fn test_nested_begin_is_plain_content() {
        let lines = [
            "# Begin: Engines.MME",
            "# Begin: PBM",
            "# End:   PBM",
            "# End:   Engines.MME",
            "dropped",
        ];
        assert_eq!(filter_blocks(&lines).len(), 4);
    }

    #[test]
    fn test_unterminated_block_keeps_rest() {
        let lines = ["skip", "# Begin: VirtualPipelines", "a", "b"];
        assert_eq!(filter_blocks(&lines), vec!["# Begin: VirtualPipelines", "a", "b"]);
    }

    #[test]
    fn test_decorated_nca_header_not_opened() {
        let lines = ["# Begin: Engines.NCAv3 (CPU)", "x", "# End:   Engines.NCAv3 (CPU)"];
        assert!(filter_blocks(&lines).is_empty());
    }
}
