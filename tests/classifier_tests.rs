use hwio_convert::commands::RunConfig;
use hwio_convert::parser::{classify, filter_blocks, Engine, PROCESSING_ORDER};
use pretty_assertions::assert_eq;

fn block(begin: &str, end: &str, body: &[&str]) -> Vec<String> {
    let mut lines = vec![begin.to_string()];
    lines.extend(body.iter().map(|l| l.to_string()));
    lines.push(end.to_string());
    lines
}

fn mme() -> Vec<String> {
    block(
        "# Begin: Engines.MME",
        "# End:   Engines.MME",
        &["# mme setup", "ncpWrite 0.9.1.0x0 0x1"],
    )
}

fn pbm() -> Vec<String> {
    block("# Begin: PBM", "# End:   PBM", &["ncpRead 0.5.0.0x10"])
}

fn vp() -> Vec<String> {
    block(
        "# Begin: VirtualPipelines",
        "# End:   VirtualPipelines",
        &["ncpUsleep 100"],
    )
}

fn nca() -> Vec<String> {
    block(
        "# Begin: Engines.NCAv3",
        "# End:   Engines.NCAv3",
        &["ncpModify 0.16.0.0x8 0xff 0x1"],
    )
}

fn eioa() -> Vec<String> {
    block(
        "# Begin: Engines.EIOA",
        "# End:   Engines.EIOA",
        &["ncpWrite 0.31.18.0x10 0x2"],
    )
}

fn eioae() -> Vec<String> {
    block(
        "# Begin: EIOA Port(s) Enable",
        "# End:   EIOA Port(s) Enable",
        &["ncpWrite 0.31.18.0x20 0x3"],
    )
}

fn full_trace() -> Vec<String> {
    [mme(), pbm(), vp(), nca(), eioa(), eioae()].concat()
}

#[test]
fn test_every_engine_in_order_gets_its_block() {
    let buckets = classify(&full_trace(), &RunConfig::default());

    assert_eq!(buckets.len(), PROCESSING_ORDER.len());
    assert_eq!(buckets.get(Engine::Mme).unwrap(), mme().as_slice());
    assert_eq!(buckets.get(Engine::Pbm).unwrap(), pbm().as_slice());
    assert_eq!(buckets.get(Engine::Vp).unwrap(), vp().as_slice());
    assert_eq!(buckets.get(Engine::Nca).unwrap(), nca().as_slice());
    assert_eq!(buckets.get(Engine::Eioa).unwrap(), eioa().as_slice());
    assert_eq!(buckets.get(Engine::Eioae).unwrap(), eioae().as_slice());
}

#[test]
fn test_lines_between_blocks_are_discarded() {
    let trace = [
        vec!["ncpWrite 0.1.1.0x0 0x1".to_string()],
        mme(),
        vec!["# stray comment".to_string()],
        pbm(),
    ]
    .concat();

    let buckets = classify(&trace, &RunConfig::default());

    assert_eq!(buckets.get(Engine::Mme).unwrap(), mme().as_slice());
    assert_eq!(buckets.get(Engine::Pbm).unwrap(), pbm().as_slice());
}

#[test]
fn test_end_marker_without_start_never_opens() {
    let trace = vec!["# End:   Engines.MME".to_string(), "ncpUsleep 1".to_string()];
    let buckets = classify(&trace, &RunConfig::default());
    assert!(!buckets.contains(Engine::Mme));
    assert!(buckets.is_empty());
}

#[test]
fn test_out_of_order_block_is_not_discovered() {
    // PBM appears before MME, so it is passed while still looking for MME
    let trace = [pbm(), mme(), vp()].concat();
    let buckets = classify(&trace, &RunConfig::default());

    assert!(buckets.contains(Engine::Mme));
    assert!(!buckets.contains(Engine::Pbm));
    assert!(!buckets.contains(Engine::Vp));
}

#[test]
fn test_blank_lines_are_skipped_everywhere() {
    let trace = vec![
        "".to_string(),
        "# Begin: Engines.MME".to_string(),
        "   ".to_string(),
        "ncpUsleep 5   ".to_string(),
        "# End:   Engines.MME".to_string(),
    ];
    let buckets = classify(&trace, &RunConfig::default());
    assert_eq!(
        buckets.get(Engine::Mme).unwrap(),
        ["# Begin: Engines.MME", "ncpUsleep 5", "# End:   Engines.MME"]
    );
}

#[test]
fn test_decorated_nca_header_is_passed_over() {
    let trace = [
        mme(),
        pbm(),
        vp(),
        vec![
            "# Begin: Engines.NCAv3 (CPU)".to_string(),
            "ncpWrite 0.1.1.0x0 0x9".to_string(),
        ],
        nca(),
    ]
    .concat();

    let buckets = classify(&trace, &RunConfig::default());
    assert_eq!(buckets.get(Engine::Nca).unwrap(), nca().as_slice());
}

#[test]
fn test_dependent_bucket_merges_after_parent() {
    let mut buckets = classify(&full_trace(), &RunConfig::default());
    buckets.merge_dependents();

    assert!(!buckets.contains(Engine::Eioae));
    assert_eq!(
        buckets.get(Engine::Eioa).unwrap(),
        [eioa(), eioae()].concat().as_slice()
    );
}

#[test]
fn test_filter_then_classify_drops_unlisted_blocks() {
    let raw = [
        vec!["preamble".to_string()],
        block("# Begin: Engines.SPP", "# End:   Engines.SPP", &["ncpRead 0.1.1.0x0"]),
        mme(),
        vec!["trailer".to_string()],
    ]
    .concat();

    let reduced = filter_blocks(&raw);
    assert_eq!(reduced, mme());

    let buckets = classify(&reduced, &RunConfig::default());
    assert_eq!(buckets.get(Engine::Mme).unwrap(), mme().as_slice());
}
