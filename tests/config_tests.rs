use crm_portal::{AppConfig, config::Env};
use serial_test::serial;
use std::{env, panic};

// --- Setup/Teardown Utilities ---

/// Utility to run a test function and restore environment variables afterward
fn run_with_env<T, R>(test: T, cleanup_vars: Vec<&'static str>) -> R
where
    T: FnOnce() -> R + panic::UnwindSafe,
{
    // Save current environment variables
    let originals: Vec<(String, Option<String>)> = cleanup_vars
        .iter()
        .map(|&var| (var.to_string(), env::var(var).ok()))
        .collect();

    // Run the test
    let result = panic::catch_unwind(test);

    // Restore original environment variables
    for (key, original_value) in originals.into_iter().rev() {
        unsafe {
            if let Some(val) = original_value {
                env::set_var(&key, val);
            } else {
                env::remove_var(&key);
            }
        }
    }

    // Re-panic if the test failed
    match result {
        Ok(value) => value,
        Err(e) => panic::resume_unwind(e),
    }
}

// --- Tests ---

#[test]
#[serial]
fn test_app_config_production_fail_fast() {
    // We expect this to panic because the production session secret is unset.
    let result = run_with_env(
        || {
            panic::catch_unwind(|| {
                unsafe {
                    env::set_var("APP_ENV", "production");
                    env::remove_var("SESSION_JWT_SECRET");
                }
                AppConfig::load()
            })
        },
        vec!["APP_ENV", "SESSION_JWT_SECRET"],
    );

    assert!(
        result.is_err(),
        "Production config loading should panic on a missing session secret"
    );
}

#[test]
#[serial]
fn test_app_config_local_env_defaults() {
    // Local mode should not panic, and should fall back to the local secret.
    let config = run_with_env(
        || {
            unsafe {
                env::set_var("APP_ENV", "local");
                env::remove_var("SESSION_JWT_SECRET");
            }
            AppConfig::load()
        },
        vec!["APP_ENV", "SESSION_JWT_SECRET"],
    );

    assert_eq!(config.env, Env::Local);
    assert_eq!(config.session_secret, "insecure-local-session-secret");
}

#[test]
#[serial]
fn test_app_config_production_reads_secret() {
    let config = run_with_env(
        || {
            unsafe {
                env::set_var("APP_ENV", "production");
                env::set_var("SESSION_JWT_SECRET", "prod-secret-from-env");
            }
            AppConfig::load()
        },
        vec!["APP_ENV", "SESSION_JWT_SECRET"],
    );

    assert_eq!(config.env, Env::Production);
    assert_eq!(config.session_secret, "prod-secret-from-env");
}

#[test]
#[serial]
fn test_app_config_unknown_env_defaults_to_local() {
    let config = run_with_env(
        || {
            unsafe {
                env::set_var("APP_ENV", "staging");
                env::remove_var("SESSION_JWT_SECRET");
            }
            AppConfig::load()
        },
        vec!["APP_ENV", "SESSION_JWT_SECRET"],
    );

    assert_eq!(config.env, Env::Local);
}
