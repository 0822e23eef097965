//! 追踪、请求 ID 生成与翻译计数。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 计数快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub translated: u64,
    pub unknown_code: u64,
    pub codes_listed: u64,
}

/// 进程级计数。
pub struct TelemetryMetrics {
    translated: AtomicU64,
    unknown_code: AtomicU64,
    codes_listed: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            translated: AtomicU64::new(0),
            unknown_code: AtomicU64::new(0),
            codes_listed: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            translated: self.translated.load(Ordering::Relaxed),
            unknown_code: self.unknown_code.load(Ordering::Relaxed),
            codes_listed: self.codes_listed.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局计数实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    request_ids_from(None)
}

/// 沿用上游传入的 request_id（空白或超过 128 字节时重新生成），trace_id 总是新生成。
pub fn request_ids_from(incoming: Option<&str>) -> RequestIds {
    let request_id = incoming
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= 128)
        .map_or_else(|| uuid::Uuid::new_v4().to_string(), str::to_string);
    RequestIds {
        request_id,
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录一次翻译（含未识别错误码）。
pub fn record_translated() {
    metrics().translated.fetch_add(1, Ordering::Relaxed);
}

/// 记录未识别错误码次数。
pub fn record_unknown_code() {
    metrics().unknown_code.fetch_add(1, Ordering::Relaxed);
}

/// 记录错误码表查询次数。
pub fn record_codes_listed() {
    metrics().codes_listed.fetch_add(1, Ordering::Relaxed);
}
