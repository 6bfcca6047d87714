//! Property tests for the bounded executor.

use std::sync::atomic::{AtomicUsize, Ordering};

use proptest::prelude::*;

use ccsync::domain::services::BoundedExecutor;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: without failures every task runs exactly once, whatever the pool size.
    #[test]
    fn property_every_task_runs_once(tasks in 0..40usize, workers in 1..12usize) {
        let input: Vec<usize> = (0..tasks).collect();
        let calls = AtomicUsize::new(0);
        let mut completed = 0;

        let mut results = BoundedExecutor::new(workers)
            .run(
                &input,
                |n| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, String>(*n)
                },
                |_| completed += 1,
            )
            .unwrap();

        results.sort_unstable();
        prop_assert_eq!(results, input);
        prop_assert_eq!(calls.load(Ordering::SeqCst), tasks);
        prop_assert_eq!(completed, tasks);
    }

    /// PROPERTY: with one worker nothing after the failing task is dispatched.
    #[test]
    fn property_single_worker_stops_at_first_failure(tasks in 1..30usize, failing in 0..30usize) {
        let failing = failing % tasks;
        let input: Vec<usize> = (0..tasks).collect();
        let calls = AtomicUsize::new(0);

        let result = BoundedExecutor::new(1).run(
            &input,
            |n| {
                calls.fetch_add(1, Ordering::SeqCst);
                if *n == failing { Err(*n) } else { Ok(*n) }
            },
            |_| {},
        );

        prop_assert_eq!(result, Err(failing));
        prop_assert_eq!(calls.load(Ordering::SeqCst), failing + 1);
    }
}
