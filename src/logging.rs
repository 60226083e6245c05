use tracing_subscriber::{fmt, EnvFilter};

/// 로그 구독자를 설치한다.
///
/// `RUST_LOG`가 있으면 그 값을, 없으면 설정 파일의 `log_level`을 쓴다.
/// 표준 출력은 견적 결과용이므로 로그는 stderr로 보낸다.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // 이미 설치된 경우(테스트 등)는 무시
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 테스트용: debug 레벨, 테스트 출력 캡처.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
