//! End-to-end scheduling scenarios.

use std::cmp::Ordering;

use schedrt_core::prelude::*;
use schedrt_test_helpers::prelude::*;
use schedrt_test_helpers::{assert_dispatch_order, assert_runs_before};

fn engine(policy: SchedPolicy, tiers: StatsTiers) -> Result<RtSchedEngine<MockHost>, SchedRtError> {
    init_test_tracing();
    RtSchedEngine::new(
        MockHost::new(),
        EngineConfig::builder()
            .policy(policy)
            .tiers(tiers)
            .maintenance_for_policy()
            .build()?,
    )
}

#[test]
fn test_weighted_edf_prefers_heavier_earlier_ratio() -> TestResult {
    let engine = engine(SchedPolicy::WeightedEdf, StatsTiers::default())?;
    let a = engine.register_with(SchedulingProfile::new().with_deadline(100).with_weight(2))?;
    let b = engine.register_with(SchedulingProfile::new().with_deadline(120).with_weight(1))?;
    assert_runs_before!(engine, a, b);
    assert_eq!(engine.pick_next(&[b, a])?, Some(a));
    Ok(())
}

#[test]
fn test_llf_laxity_goes_negative_without_execution() -> TestResult {
    let engine = engine(SchedPolicy::Llf, StatsTiers::default())?;
    let handles = register_tasks(&engine, &LAXITY_SET)?;
    let urgent = must_some(handles.first().copied(), "urgent task");

    assert_eq!(engine.laxity(urgent)?, 5);
    engine.host().advance(10);
    assert_eq!(engine.laxity(urgent)?, -5);

    if let &[urgent, normal, relaxed] = handles.as_slice() {
        assert_dispatch_order!(engine, [urgent, normal, relaxed]);
    }
    Ok(())
}

#[test]
fn test_llf_ordering_shifts_as_work_is_charged() -> TestResult {
    let engine = engine(SchedPolicy::Llf, StatsTiers::default())?;
    // laxities 40 and 50
    let a = engine.register_with(SchedulingProfile::new().with_deadline(100).with_time_left(60))?;
    let b = engine.register_with(SchedulingProfile::new().with_deadline(100).with_time_left(50))?;
    assert_runs_before!(engine, a, b);

    engine.on_dispatch(a)?;
    engine.host().advance(20);
    engine.on_descheduled(a)?;
    // a: 100 - 40 = 60 > 50
    assert_runs_before!(engine, b, a);
    Ok(())
}

#[test]
fn test_base_priority_beats_every_policy() -> TestResult {
    for policy in SchedPolicy::ALL {
        let engine = engine(policy, StatsTiers::default())?;
        let lazy = engine.register_with(
            SchedulingProfile::new()
                .with_deadline(1)
                .with_weight(100)
                .with_exec_time(1)
                .with_time_left(1),
        )?;
        let urgent = engine.register_with(
            SchedulingProfile::new()
                .with_deadline(10_000)
                .with_weight(1)
                .with_exec_time(10_000)
                .with_time_left(10_000),
        )?;
        engine.host().set_priority(lazy, BasePriority(8));
        engine.host().set_priority(urgent, BasePriority(2));
        assert_eq!(engine.compare(urgent, lazy)?, Ordering::Less, "{policy}");
        assert_eq!(engine.pick_next(&[lazy, urgent])?, Some(urgent), "{policy}");
    }
    Ok(())
}

#[test]
fn test_task_set_order_per_policy() -> TestResult {
    let expected = [
        (SchedPolicy::Edf, [0usize, 3, 1, 2, 4]),
        (SchedPolicy::WeightedEdf, [0, 3, 1, 2, 4]),
        (SchedPolicy::Wsrt, [0, 3, 1, 2, 4]),
        (SchedPolicy::Rms, [0, 3, 1, 2, 4]),
        // deadline - time_left: 17, 28, 55, 20, 72
        (SchedPolicy::Llf, [0, 3, 1, 2, 4]),
        // exec / weight: 1, 4, 7, 2, 18
        (SchedPolicy::Pfs, [0, 3, 1, 2, 4]),
    ];
    for (policy, order) in expected {
        let engine = engine(policy, StatsTiers::default())?;
        let handles = register_tasks(&engine, &TASK_SET)?;
        let ordered: Vec<ThreadHandle> = order
            .iter()
            .filter_map(|&i| handles.get(i).copied())
            .collect();
        for pair in ordered.windows(2) {
            if let [first, second] = pair {
                assert_ne!(engine.compare(*first, *second)?, Ordering::Greater, "{policy}");
            }
        }
        assert_eq!(engine.pick_next(&handles)?, handles.first().copied(), "{policy}");
    }
    Ok(())
}

#[test]
fn test_pfs_rotates_between_equal_weights() -> TestResult {
    let engine = engine(SchedPolicy::Pfs, StatsTiers::default())?;
    let a = engine.register_with(SchedulingProfile::new().with_weight(1))?;
    let b = engine.register_with(SchedulingProfile::new().with_weight(1))?;

    let mut picks = Vec::new();
    for _ in 0..4 {
        let next = must_some(engine.pick_next(&[a, b])?, "non-empty ready set");
        engine.on_dispatch(next)?;
        engine.host().advance(10);
        engine.on_descheduled(next)?;
        picks.push(next);
    }

    assert_eq!(picks, vec![a, b, a, b]);
    assert_eq!(engine.exec_time(a)?, 20);
    assert_eq!(engine.exec_time(b)?, 20);
    assert_eq!(engine.snapshot(a)?.context_switches, 4);
    assert_eq!(engine.snapshot(b)?.context_switches, 4);
    // Every dispatch hands the CPU to the other thread.
    assert_eq!(engine.snapshot(a)?.preemptions, 2);
    assert_eq!(engine.snapshot(b)?.preemptions, 1);
    Ok(())
}

#[test]
fn test_response_series_statistics() -> TestResult {
    let engine = engine(SchedPolicy::Edf, StatsTiers::all())?;
    let t = engine.register()?;

    for response in RESPONSE_SERIES {
        engine.record_activation(t)?;
        engine.on_enqueued(t)?;
        engine.on_dispatch(t)?;
        engine.host().advance(response);
        engine.on_descheduled(t)?;
        engine.record_completion(t)?;
        engine.host().advance(100);
    }

    let stats = engine.snapshot(t)?;
    assert_eq!(stats.activations, 10);
    assert_eq!(stats.completions, 10);
    assert_eq!(stats.average_response_time(), 6);
    assert_eq!(stats.response_jitter(), 4);
    assert_eq!(stats.response_variance()?, 9);
    assert_eq!(stats.response_stddev()?, 3);
    assert_eq!(stats.average_exec_time(), 6);
    assert_eq!(stats.average_waiting_time(), 0);
    assert_eq!(stats.context_switches, 20);

    let stamps = stats.timestamps()?;
    assert!(stamps.last_completion_time >= stamps.last_dispatch_time);
    assert!(stamps.last_dispatch_time >= stamps.last_activation_time);
    Ok(())
}

#[test]
fn test_deadline_miss_ratio() -> TestResult {
    let engine = engine(SchedPolicy::Edf, StatsTiers::default())?;
    let t = engine.register()?;
    for job in 0..10u64 {
        engine.set_relative_deadline(t, 20)?;
        engine.record_activation(t)?;
        let work = if job % 5 == 0 { 30 } else { 10 };
        engine.host().advance(work);
        if engine.host().current_time() > engine.deadline(t)? {
            engine.record_deadline_miss(t)?;
        }
        engine.record_completion(t)?;
    }
    let stats = engine.snapshot(t)?;
    assert_eq!(stats.deadline_misses, 2);
    assert!((stats.miss_ratio() - 20.0).abs() < 1e-9);
    Ok(())
}
