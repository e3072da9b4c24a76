//! Engine classifier: assigns filtered trace lines to engine buckets.
//!
//! The classifier walks the trace once. For the current engine it is either
//! looking for the block start or inside the block looking for its end.
//! Closing a block moves on to the next engine in [`PROCESSING_ORDER`];
//! lines outside the current engine's block are discarded.

use super::engine::{Engine, PROCESSING_ORDER};
use crate::commands::models::RunConfig;
use log::{debug, info};
use std::collections::BTreeMap;
use std::fmt;

/// Position of the classifier within the current engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Searching for the engine's start marker
    Look(Engine),
    /// Inside the engine's block, searching for its end marker
    Found(Engine),
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Look(engine) => write!(f, "{}_LOOK", engine),
            Self::Found(engine) => write!(f, "{}_FOUND", engine),
        }
    }
}

/// Ordered raw lines per engine, keyed in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineBuckets {
    buckets: BTreeMap<Engine, Vec<String>>,
}

impl EngineBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a closed bucket
    pub fn insert(&mut self, engine: Engine, lines: Vec<String>) {
        self.buckets.insert(engine, lines);
    }

    pub fn get(&self, engine: Engine) -> Option<&[String]> {
        self.buckets.get(&engine).map(Vec::as_slice)
    }

    pub fn contains(&self, engine: Engine) -> bool {
        self.buckets.contains_key(&engine)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets in processing order
    pub fn iter(&self) -> impl Iterator<Item = (Engine, &[String])> {
        self.buckets.iter().map(|(e, lines)| (*e, lines.as_slice()))
    }

    /// Append every dependent engine's lines to its parent bucket.
    ///
    /// A dependent bucket is only folded when its parent is present; either
    /// way it never survives as a bucket of its own.
    pub fn merge_dependents(&mut self) {
        let dependents: Vec<Engine> = self
            .buckets
            .keys()
            .copied()
            .filter(|e| e.parent().is_some())
            .collect();

        for dependent in dependents {
            let Some(parent) = dependent.parent() else {
                continue;
            };
            let Some(lines) = self.buckets.remove(&dependent) else {
                continue;
            };
            match self.buckets.get_mut(&parent) {
                Some(parent_lines) => {
                    debug!("Appending {} {} lines to {}", lines.len(), dependent, parent);
                    parent_lines.extend(lines);
                }
                None => debug!("Dropping {} lines: {} block not present", dependent, parent),
            }
        }
    }
}

/// Split the filtered trace into engine buckets.
///
/// Only blocks that were both opened and closed are returned.
pub fn classify<S: AsRef<str>>(lines: &[S], config: &RunConfig) -> EngineBuckets {
    classify_from(lines, PROCESSING_ORDER[0], config)
}

/// [`classify`] starting with `start` instead of the first engine
pub fn classify_from<S: AsRef<str>>(lines: &[S], start: Engine, config: &RunConfig) -> EngineBuckets {
    info!("Classifying {} trace lines starting at {}", lines.len(), start);

    let mut buckets = EngineBuckets::new();
    let mut state = Some(ScanState::Look(start));
    let mut current: Vec<String> = Vec::new();

    for line in lines {
        let Some(scan) = state else {
            break;
        };
        let line = line.as_ref().trim_end();
        if line.is_empty() {
            continue;
        }

        if config.verbose {
            debug!("state {}: {}", scan, line);
        }

        state = match scan {
            ScanState::Look(engine) if engine.opens_block(line) => {
                current.push(line.to_string());
                Some(ScanState::Found(engine))
            }
            ScanState::Look(_) => Some(scan),
            ScanState::Found(engine) => {
                current.push(line.to_string());
                if engine.closes_block(line) {
                    debug!("{} block closed with {} lines", engine, current.len());
                    buckets.insert(engine, std::mem::take(&mut current));
                    engine.next_in_order().map(ScanState::Look)
                } else {
                    Some(scan)
                }
            }
        };
    }

    if let Some(ScanState::Found(engine)) = state {
        info!("{} block not closed before end of trace, discarded", engine);
    }

    info!("Classified {} engine blocks", buckets.len());
    buckets
}

/// Single-block mode: every non-blank line goes to [`Engine::All`]
pub fn capture_all<S: AsRef<str>>(lines: &[S], config: &RunConfig) -> EngineBuckets {
    info!("Capturing trace as a single block");

    let captured: Vec<String> = lines
        .iter()
        .map(|l| l.as_ref().trim_end())
        .filter(|l| !l.is_empty())
        .inspect(|l| {
            if config.verbose {
                debug!("{}", l);
            }
        })
        .map(str::to_string)
        .collect();

    let mut buckets = EngineBuckets::new();
    buckets.insert(Engine::All, captured);
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_display() {
        assert_eq!(ScanState::Look(Engine::Mme).to_string(), "MME_LOOK");
        assert_eq!(ScanState::Found(Engine::Nca).to_string(), "NCA_FOUND");
    }

    #[test]
    fn test_unclosed_block_not_returned() {
        let lines = ["# Begin: Engines.MME", "ncpRead 0.1.2.0x0"];
        let buckets = classify(&lines, &RunConfig::default());
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_merge_without_parent_drops_dependent() {
        let mut buckets = EngineBuckets::new();
        buckets.insert(Engine::Eioae, vec!["x".to_string()]);
        buckets.merge_dependents();
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_capture_all_skips_blank_lines() {
        let lines = ["a", "   ", "", "b  "];
        let buckets = capture_all(&lines, &RunConfig::default());
        assert_eq!(buckets.get(Engine::All).unwrap(), ["a", "b"]);
    }
}
