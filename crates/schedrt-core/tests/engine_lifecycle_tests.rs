//! Registration, profile and statistics lifecycle through the public API.

use schedrt_core::prelude::*;
use schedrt_test_helpers::prelude::*;

fn engine_with(config: EngineConfig) -> Result<RtSchedEngine<MockHost>, SchedRtError> {
    init_test_tracing();
    RtSchedEngine::new(MockHost::new(), config)
}

#[test]
fn test_fresh_thread_is_zeroed() -> TestResult {
    let engine = engine_with(EngineConfig::builder().tiers(StatsTiers::all()).build()?)?;
    let t = engine.register()?;

    assert_eq!(engine.profile(t)?, SchedulingProfile::default());
    let stats = engine.snapshot(t)?;
    assert_eq!(stats, RtStats::with_tiers(true, true));
    Ok(())
}

#[test]
fn test_reset_then_snapshot_is_zero() -> TestResult {
    let engine = engine_with(EngineConfig::builder().tiers(StatsTiers::all()).build()?)?;
    let t = engine.register()?;

    engine.record_activation(t)?;
    engine.on_enqueued(t)?;
    engine.host().advance(3);
    engine.on_dispatch(t)?;
    engine.host().advance(4);
    engine.on_descheduled(t)?;
    engine.record_completion(t)?;
    engine.record_deadline_miss(t)?;
    engine.record_priority_inversion(t)?;
    assert_ne!(engine.snapshot(t)?, RtStats::with_tiers(true, true));

    engine.reset_stats(t)?;
    assert_eq!(engine.snapshot(t)?, RtStats::with_tiers(true, true));
    Ok(())
}

#[test]
fn test_disabled_stats_are_unsupported() -> TestResult {
    let engine = engine_with(
        EngineConfig::builder()
            .tiers(StatsTiers::disabled())
            .build()?,
    )?;
    let t = engine.register()?;
    engine.record_activation(t)?;
    assert_eq!(must_unsupported(engine.snapshot(t)), SchedError::StatsDisabled);
    assert_eq!(engine.unregister(t)?, None);
    Ok(())
}

#[test]
fn test_squared_tier_gates_variance() -> TestResult {
    let engine = engine_with(EngineConfig::default())?;
    let t = engine.register()?;
    let stats = engine.snapshot(t)?;
    assert_eq!(
        must_unsupported(stats.response_variance()),
        SchedError::SquaredTierDisabled
    );
    assert_eq!(
        must_unsupported(stats.timestamps()),
        SchedError::DetailedTierDisabled
    );
    Ok(())
}

#[test]
fn test_current_thread_resolution() -> TestResult {
    let engine = engine_with(EngineConfig::default())?;
    assert_eq!(engine.current(), Err(SchedError::UnknownThread));

    let t = engine.register()?;
    engine.host().set_current(Some(t));
    assert_eq!(engine.current()?, t);
    engine.set_deadline(engine.current()?, 500)?;
    assert_eq!(engine.deadline(t)?, 500);

    engine.unregister(t)?;
    assert_eq!(engine.current(), Err(SchedError::UnknownThread));
    Ok(())
}

#[test]
fn test_slot_reuse_invalidates_old_handle() -> TestResult {
    let engine = engine_with(EngineConfig::builder().max_threads(1).build()?)?;
    let old = engine.register()?;
    engine.set_weight(old, 4)?;
    engine.unregister(old)?;

    let new = engine.register()?;
    assert_eq!(engine.weight(new)?, 0);
    assert_eq!(engine.weight(old), Err(SchedError::UnknownThread));
    assert_eq!(engine.threads(), vec![new]);
    Ok(())
}

#[test]
fn test_charge_execution_saturates() -> TestResult {
    let engine = engine_with(
        EngineConfig::builder()
            .policy(SchedPolicy::Pfs)
            .maintenance_for_policy()
            .build()?,
    )?;
    let t = engine.register_with(SchedulingProfile::new().with_time_left(10))?;
    engine.charge_execution(t, 4)?;
    assert_eq!(engine.time_left(t)?, 6);
    assert_eq!(engine.exec_time(t)?, 4);
    engine.charge_execution(t, 100)?;
    assert_eq!(engine.time_left(t)?, 0);
    assert_eq!(engine.exec_time(t)?, 104);
    Ok(())
}

#[test]
fn test_deschedule_maintains_profile() -> TestResult {
    let engine = engine_with(
        EngineConfig::builder()
            .policy(SchedPolicy::Llf)
            .maintenance_for_policy()
            .build()?,
    )?;
    let t = engine.register_with(SchedulingProfile::new().with_deadline(100).with_time_left(30))?;
    engine.on_dispatch(t)?;
    engine.host().advance(12);
    engine.on_descheduled(t)?;
    assert_eq!(engine.time_left(t)?, 18);
    assert_eq!(engine.exec_time(t)?, 0);
    Ok(())
}

#[test]
fn test_out_of_order_hooks_are_ignored() -> TestResult {
    let engine = engine_with(EngineConfig::default())?;
    let t = engine.register()?;
    engine.on_descheduled(t)?;
    engine.on_dispatch(t)?;
    engine.on_dispatch(t)?;
    assert_eq!(engine.snapshot(t)?.context_switches, 1);
    Ok(())
}

#[test]
fn test_dispatch_after_other_thread_left_counts_preemption() -> TestResult {
    let engine = engine_with(EngineConfig::default())?;
    let a = engine.register()?;
    let b = engine.register()?;

    engine.on_dispatch(a)?;
    engine.host().advance(5);
    engine.on_descheduled(a)?;
    engine.on_dispatch(b)?;

    let sa = engine.snapshot(a)?;
    assert_eq!(sa.preemptions, 1);
    assert_eq!(sa.context_switches, 2);
    assert_eq!(sa.total_exec_time, 5);
    assert_eq!(engine.snapshot(b)?.preemptions, 0);
    Ok(())
}

#[test]
fn test_ignored_switch_records_no_preemption() -> TestResult {
    let engine = engine_with(EngineConfig::default())?;
    let a = engine.register()?;
    let b = engine.register()?;

    engine.on_switch(Some(a), Some(b))?;

    let sa = engine.snapshot(a)?;
    assert_eq!(sa.preemptions, 0);
    assert_eq!(sa.context_switches, 0);
    assert_eq!(engine.snapshot(b)?.context_switches, 1);
    Ok(())
}

#[test]
fn test_config_from_json_drives_engine() -> TestResult {
    let config = EngineConfig::from_json_str(
        r#"{
            "policy": "weighted-edf",
            "tiers": { "basic": true, "squared": true, "detailed": false },
            "max_threads": 2,
            "maintenance": { "decrement_time_left": true }
        }"#,
    )?;
    let engine = engine_with(config)?;
    assert_eq!(engine.policy(), SchedPolicy::WeightedEdf);
    assert_eq!(engine.capacity(), 2);
    assert!(engine.tiers().squared);
    assert!(engine.maintenance().decrement_time_left);
    assert!(!engine.maintenance().accumulate_runtime);
    Ok(())
}

#[test]
fn test_policy_parse_and_lock() -> TestResult {
    let engine = engine_with(EngineConfig::default())?;
    engine.set_policy(must_parse("rms"))?;
    let _t = engine.register()?;
    let err = engine.set_policy(SchedPolicy::Edf);
    assert_eq!(err, Err(SchedError::PolicyLocked));
    assert_eq!(engine.policy(), SchedPolicy::Rms);
    Ok(())
}
