mod test_utils;

mod test_dedup_properties {
    use super::test_utils::{batch_properties::*, pline_modifiers::*};
    use polyline_dedup::{
        dedup::{
            dedup_polylines, duplicate_mask, polylines_match, DedupOptions, DedupStrategy,
            LogProgress,
        },
        pline,
    };
    use std::sync::Mutex;

    #[test]
    fn tolerance_boundary_is_inclusive() {
        let base = seg(0.0, 0.0, 1.0, 1.0);
        let at_boundary = seg(0.25, 0.0, 1.0, 0.75);
        let past_boundary = seg(0.25 + 1e-9, 0.0, 1.0, 1.0);

        let result = dedup_all_strategies(&[base.clone(), at_boundary], 0.25).unwrap();
        assert_eq!(result, vec![base.clone()]);

        let batch = vec![base.clone(), past_boundary];
        let result = dedup_all_strategies(&batch, 0.25).unwrap();
        assert_eq!(result, batch);
    }

    #[test]
    fn reversed_within_tolerance() {
        let batch = vec![seg(0.0, 0.0, 10.0, 10.0), seg(10.005, 9.995, 0.005, -0.005)];
        let result = dedup_all_strategies(&batch, 0.01).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn first_occurrence_survives() {
        let batch = vec![
            seg(5.0, 5.0, 6.0, 6.0),
            seg(0.0, 0.0, 1.0, 0.0),
            seg(1.0, 0.0, 0.0, 0.0),
            seg(0.0, 0.0, 1.0, 0.0),
            seg(6.0, 6.0, 5.0, 5.0),
        ];
        let result = dedup_all_strategies(&batch, 0.0).unwrap();
        assert_eq!(result, vec![batch[0].clone(), batch[1].clone()]);
        assert_eq!(subsequence_positions(&batch, &result), Some(vec![0, 1]));
    }

    #[test]
    fn chained_near_duplicates_all_removed() {
        // b is within tolerance of a, c is within tolerance of b but not of a, marked polylines
        // still mark later ones so both b and c are removed
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(0.0, 0.1, 1.0, 0.1);
        let c = seg(0.0, 0.2, 1.0, 0.2);
        assert!(!polylines_match(&a, &c, 0.15));

        let result = dedup_all_strategies(&[a.clone(), b, c], 0.15).unwrap();
        assert_eq!(result, vec![a]);
    }

    #[test]
    fn chain_order_matters() {
        // same three segments but the middle one comes last: a and c do not match so c survives,
        // b matches a and is removed
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(0.0, 0.1, 1.0, 0.1);
        let c = seg(0.0, 0.2, 1.0, 0.2);

        let result = dedup_all_strategies(&[a.clone(), c.clone(), b], 0.15).unwrap();
        assert_eq!(result, vec![a, c]);
    }

    #[test]
    fn idempotent() {
        let mut gen = SegmentGen::new(7);
        let batch = gen.batch_with_duplicates(300, 0.4, 0.005);
        let once = dedup_all_strategies(&batch, 0.01).unwrap();
        let twice = dedup_all_strategies(&once, 0.01).unwrap();
        assert!(once.len() < batch.len());
        assert_eq!(once, twice);
    }

    #[test]
    fn order_preserving_subsequence() {
        let mut gen = SegmentGen::new(42);
        let batch = gen.batch_with_duplicates(400, 0.3, 0.0);
        let result = dedup_all_strategies(&batch, 0.0).unwrap();
        let positions = subsequence_positions(&batch, &result).expect("not a subsequence");
        let mask = duplicate_mask(&batch, &DedupOptions::with_tolerance(0.0)).unwrap();
        let expected: Vec<usize> = (0..batch.len()).filter(|&i| !mask[i]).collect();
        assert_eq!(positions, expected);
    }

    #[test]
    fn input_not_modified() {
        let mut gen = SegmentGen::new(3);
        let batch = gen.batch_with_duplicates(100, 0.5, 0.001);
        let copy = batch.clone();
        let _ = dedup_all_strategies(&batch, 0.01).unwrap();
        assert_eq!(batch, copy);
    }

    #[test]
    fn strategies_agree_on_jittered_batches() {
        for seed in 1..6 {
            let mut gen = SegmentGen::new(seed);
            let batch = gen.batch_with_duplicates(500, 0.35, 0.02);
            for tolerance in [0.0, 0.01, 0.02, 0.5, 3.0] {
                let masks: Vec<_> = STRATEGIES
                    .iter()
                    .map(|&strategy| {
                        let opts = DedupOptions {
                            tolerance,
                            strategy,
                            progress: None,
                        };
                        duplicate_mask(&batch, &opts).unwrap()
                    })
                    .collect();
                assert_eq!(masks[0], masks[1], "seed {seed}, tolerance {tolerance}");
            }
        }
    }

    #[test]
    fn large_coordinates() {
        let batch = vec![
            seg(1.0e7, -1.0e7, 1.0e7 + 1.0, -1.0e7 + 1.0),
            seg(1.0e7 + 1.0, -1.0e7 + 1.0 + 0.5, 1.0e7 - 0.5, -1.0e7),
        ];
        assert_eq!(dedup_all_strategies(&batch, 0.5).unwrap().len(), 1);
        assert_eq!(dedup_all_strategies(&batch, 0.25).unwrap().len(), 2);
    }

    #[test]
    fn progress_reports_every_step() {
        let steps = Mutex::new(Vec::new());
        let observer = |completed: usize, total: usize| {
            steps.lock().unwrap().push((completed, total));
        };
        let batch = vec![
            pline![(0.0, 0.0), (1.0, 1.0)],
            pline![(1.0, 1.0), (0.0, 0.0)],
            pline![(2.0, 2.0), (3.0, 3.0)],
            pline![(2.0, 2.0), (3.0, 3.0)],
        ];

        for strategy in STRATEGIES {
            steps.lock().unwrap().clear();
            let opts = DedupOptions {
                tolerance: 0.0,
                strategy,
                progress: Some(&observer),
            };
            let with_progress = dedup_polylines(&batch, &opts).unwrap();
            let without_progress = dedup_polylines(
                &batch,
                &DedupOptions {
                    progress: None,
                    ..opts.clone()
                },
            )
            .unwrap();
            assert_eq!(with_progress, without_progress);

            let mut seen = steps.lock().unwrap().clone();
            seen.sort_unstable();
            assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
        }
    }

    #[test]
    fn log_progress_does_not_change_result() {
        let mut gen = SegmentGen::new(11);
        let batch = gen.batch_with_duplicates(200, 0.5, 0.0);
        let progress = LogProgress::new(25);
        let opts = DedupOptions {
            tolerance: 0.0,
            strategy: DedupStrategy::SpatialIndex,
            progress: Some(&progress),
        };
        assert_eq!(
            dedup_polylines(&batch, &opts).unwrap(),
            dedup_all_strategies(&batch, 0.0).unwrap()
        );
    }

    #[test]
    fn strategies_match_sequential_sweep() {
        for seed in [5, 19, 23] {
            let mut gen = SegmentGen::new(seed);
            let batch = gen.batch_with_duplicates(400, 0.4, 0.01);
            for tolerance in [0.0, 0.01, 0.75] {
                let expected = sequential_sweep_mask(&batch, tolerance);
                for strategy in STRATEGIES {
                    let opts = DedupOptions {
                        tolerance,
                        strategy,
                        progress: None,
                    };
                    assert_eq!(
                        duplicate_mask(&batch, &opts).unwrap(),
                        expected,
                        "seed {seed}, tolerance {tolerance}, {strategy:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn non_finite_coordinates_never_match() {
        let batch = vec![
            seg(f64::NAN, 0.0, 1.0, 1.0),
            seg(0.0, 0.0, 1.0, 1.0),
            seg(f64::NAN, 0.0, 1.0, 1.0),
            seg(1.0, 1.0, 0.0, 0.0),
            seg(f64::INFINITY, 0.0, 1.0, 1.0),
            seg(f64::INFINITY, 0.0, 1.0, 1.0),
            seg(0.0, f64::NEG_INFINITY, 1.0, 1.0),
        ];
        let expected = vec![false, false, false, true, false, false, false];

        for strategy in STRATEGIES {
            let opts = DedupOptions {
                tolerance: 0.5,
                strategy,
                progress: None,
            };
            assert_eq!(duplicate_mask(&batch, &opts).unwrap(), expected, "{strategy:?}");
            assert_eq!(dedup_polylines(&batch, &opts).unwrap().len(), 6);
        }
    }

    #[test]
    fn only_non_finite_polylines() {
        let batch = vec![seg(f64::NAN, 0.0, 1.0, 1.0), seg(f64::NAN, 0.0, 1.0, 1.0)];
        for strategy in STRATEGIES {
            let opts = DedupOptions {
                tolerance: 1.0,
                strategy,
                progress: None,
            };
            assert_eq!(duplicate_mask(&batch, &opts).unwrap(), vec![false, false]);
        }
    }

    #[test]
    fn coordinates_near_float_max() {
        let batch = vec![
            seg(-1.0e308, 0.0, 1.0e308, 0.0),
            seg(0.0, 0.0, 1.0, 1.0),
            seg(1.0e308, 0.0, -1.0e308, 0.0),
            seg(f64::MAX, -f64::MAX, -f64::MAX, f64::MAX),
            seg(-f64::MAX, f64::MAX, f64::MAX, -f64::MAX),
        ];
        let result = dedup_all_strategies(&batch, 0.5).unwrap();
        assert_eq!(result, vec![batch[0].clone(), batch[1].clone(), batch[3].clone()]);
    }
}
