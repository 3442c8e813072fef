//! Logger installation for the JNI library

/// Logcat tag on Android.
#[cfg(target_os = "android")]
const TAG: &str = "hpdf";

/// Filter variable read by `env_logger` on desktop JVMs.
#[cfg(not(target_os = "android"))]
pub const LOG_ENV: &str = "HPDF_LOG";

/// Install the process-wide logger. Later calls are no-ops.
pub fn init() {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(max_level())
            .with_tag(TAG),
    );

    #[cfg(not(target_os = "android"))]
    {
        let env = env_logger::Env::new().filter_or(LOG_ENV, "warn");
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}

#[cfg(target_os = "android")]
fn max_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}
