use prisma_telemetry::{
    TelemetryMetrics, metrics, record_codes_listed, record_translated, record_unknown_code,
};

#[test]
fn fresh_metrics_start_at_zero() {
    let snapshot = TelemetryMetrics::new().snapshot();
    assert_eq!(snapshot.translated, 0);
    assert_eq!(snapshot.unknown_code, 0);
    assert_eq!(snapshot.codes_listed, 0);
}

#[test]
fn record_functions_increment_global_counters() {
    let before = metrics().snapshot();
    record_translated();
    record_translated();
    record_unknown_code();
    record_codes_listed();
    let after = metrics().snapshot();

    // 全局计数可能被同进程其他测试并发修改，只断言下界。
    assert!(after.translated >= before.translated + 2);
    assert!(after.unknown_code > before.unknown_code);
    assert!(after.codes_listed > before.codes_listed);
}
