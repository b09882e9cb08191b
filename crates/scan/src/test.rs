use std::sync::{Arc, Mutex};

use tau::{MAX_DISCRIMINANT, Strategy, TauError, Thresholds};
use tracing::{Event, Subscriber};
use tracing_subscriber::{Layer, layer::Context, prelude::*, registry::LookupSpan};

use super::*;

const WIDE: Thresholds = Thresholds::new(900, 900);

fn scan(block_size: u64, discriminant_max: u64, thresholds: Thresholds) -> ScanReport {
    let profile = Profile::new("test", block_size, discriminant_max, thresholds);
    run_scan(&ScanSettings::new(profile, Strategy::Sequential)).unwrap()
}

#[test]
fn test_block_plan() {
    let blocks = BlockPlan::new(8, 20).collect::<Vec<_>>();
    assert_eq!(
        blocks,
        vec![
            Block { number: 1, start: 1, len: 8 },
            Block { number: 2, start: 9, len: 8 },
            Block { number: 3, start: 17, len: 4 },
        ]
    );
    assert_eq!(blocks[2].end(), 20);

    let plan = BlockPlan::new(4, 12);
    assert_eq!(plan.n_blocks(), 3);
    assert_eq!(plan.len(), 3);
    assert_eq!(plan.last(), Some(Block { number: 3, start: 9, len: 4 }));

    assert_eq!(BlockPlan::new(0, 100).n_blocks(), 0);
    assert_eq!(BlockPlan::new(0, 100).next(), None);

    let mut plan = BlockPlan::new(4, 13);
    assert_eq!(plan.len(), 4);
    plan.next();
    assert_eq!(plan.len(), 3);
}

#[test]
fn test_range_smaller_than_block() {
    let blocks = BlockPlan::new(10_000_000, 1_000_000).collect::<Vec<_>>();
    assert_eq!(blocks, vec![Block { number: 1, start: 1, len: 1_000_000 }]);

    let report = scan(10_000_000, 1_000_000, Profile::LEMMA_7_2_II.thresholds);
    assert_eq!(report.blocks.len(), 1);
    assert_eq!(report.blocks[0].block.end(), 1_000_000);
    assert_eq!(report.bound, 4);
}

#[test]
fn test_validate() {
    assert_eq!(validate(&Profile::LEMMA_7_2_II), Ok(5_000_000));
    assert_eq!(
        validate(&Profile::new("odd", 6, 100, WIDE)),
        Err(ScanError::BlockSize { block_size: 6 })
    );
    assert_eq!(
        validate(&Profile::new("zero", 0, 100, WIDE)),
        Err(ScanError::BlockSize { block_size: 0 })
    );
    assert_eq!(
        validate(&Profile::new("empty", 4, 0, WIDE)),
        Err(ScanError::EmptyScan)
    );
    assert_eq!(
        validate(&Profile::new("huge", 4, MAX_DISCRIMINANT + 1, WIDE)),
        Err(ScanError::DiscriminantMax {
            discriminant_max: MAX_DISCRIMINANT + 1
        })
    );
    assert_eq!(
        validate(&Profile::new("limit", 4, MAX_DISCRIMINANT, WIDE)),
        Ok(2)
    );
    let loose = Thresholds::new(400, 900);
    assert_eq!(
        validate(&Profile::new("loose", 4, 100, loose)),
        Err(ScanError::Thresholds(loose))
    );
    assert_eq!(
        run_scan(&ScanSettings::new(Profile::new("odd", 6, 100, WIDE), Strategy::Sequential))
            .unwrap_err()
            .kind(),
        ErrorKind::Configuration
    );
}

#[test]
fn test_block_bounds() {
    let report = scan(1000, 10_000, WIDE);
    assert_eq!(report.bound, 4);
    assert_eq!(
        report.blocks.iter().map(|b| b.bound).collect::<Vec<_>>(),
        vec![2, 4, 4, 4, 4, 4, 4, 4, 4, 4]
    );
    assert!(report.to_string().contains("C_epsilon(Delta)<=4 in range 1 to 10000"));
}

#[test]
fn test_bound_independent_of_blocking() {
    for block_size in [100, 1000, 4000, 10_000, 20_000] {
        assert_eq!(scan(block_size, 10_000, WIDE).bound, 4);
    }
}

#[test]
fn test_monotone_in_range() {
    let full = scan(1000, 20_000, WIDE);
    let mut previous = 0;
    for (n, discriminant_max) in (1000..=20_000).step_by(1000).enumerate() {
        let bound = scan(1000, discriminant_max, WIDE).bound;
        assert!(bound >= previous);
        let prefix_max = full.blocks[..=n].iter().map(|b| b.bound).max().unwrap();
        assert_eq!(bound, prefix_max);
        previous = bound;
    }
}

#[test]
fn test_error_reporting() {
    let error = ScanError::Enumeration {
        block: Block { number: 2, start: 9, len: 8 },
        error: TauError::CounterOverflow { x: 12 },
    };
    assert_eq!(error.kind(), ErrorKind::NumericalInvariant);
    assert_eq!(
        error.to_string(),
        "block 2 (9 to 16): counter for discriminant 12 would overflow"
    );
    assert!(std::error::Error::source(&error).is_some());
    assert_eq!(
        ScanError::OutOfMemory { bytes: 1 }.kind(),
        ErrorKind::ResourceExhaustion
    );
}

#[test]
fn test_unallocatable_buffer() {
    let profile = Profile::new("oversized", u64::MAX - 3, 100, WIDE);
    assert_eq!(validate(&profile), Ok(((u64::MAX - 3) / 2) as usize));
    let error = run_scan(&ScanSettings::new(profile, Strategy::Sequential)).unwrap_err();
    assert_eq!(
        error,
        ScanError::OutOfMemory {
            bytes: ((u64::MAX - 3) / 2) as usize
        }
    );
    assert_eq!(error.kind(), ErrorKind::ResourceExhaustion);
}

/// Records, for every event, the name of the outermost span it was emitted in.
#[derive(Clone, Default)]
struct RootSpans(Arc<Mutex<Vec<(Option<&'static str>, String)>>>);

impl<S: Subscriber + for<'a> LookupSpan<'a>> Layer<S> for RootSpans {
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let root = ctx
            .event_scope(event)
            .and_then(|scope| scope.from_root().next())
            .map(|span| span.name());
        let mut message = String::new();
        event.record(&mut |field: &tracing::field::Field, value: &dyn std::fmt::Debug| {
            if field.name() == "message" {
                message = format!("{value:?}");
            }
        });
        self.0.lock().unwrap().push((root, message));
    }
}

#[test]
fn test_block_progress_in_root_spans() {
    let layer = RootSpans::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let report = tracing::subscriber::with_default(subscriber, || {
        run_scan(&ScanSettings::new(
            Profile::new("progress", 1000, 3000, WIDE),
            Strategy::Sequential,
        ))
    })
    .unwrap();
    assert_eq!(report.blocks.len(), 3);

    let events = layer.0.lock().unwrap();
    assert!(events.iter().all(|(root, _)| matches!(root, None | Some("block"))));
    let checking = events
        .iter()
        .filter(|(root, message)| *root == Some("block") && message.starts_with("Checking"))
        .map(|(_, message)| message.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        checking,
        vec![
            "Checking absolute discriminant in range 1 to 1,000",
            "Checking absolute discriminant in range 1,001 to 2,000",
            "Checking absolute discriminant in range 2,001 to 3,000",
        ]
    );
    assert_eq!(
        events
            .iter()
            .filter(|(root, message)| *root == Some("block") && message.starts_with("Found"))
            .count(),
        3
    );
}
