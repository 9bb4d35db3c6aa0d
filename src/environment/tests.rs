use super::*;

fn pair(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}

#[test]
fn test_env_name_adds_prefix() {
    assert_eq!(env_name(vars::TELEMETRY_ID), "VSCEXT_TELEMETRY_ID");
    assert_eq!(env_name(vars::EXHORT_MVN_PATH), "VSCEXT_EXHORT_MVN_PATH");
}

#[test]
fn test_memory_environment_apply() {
    let env = MemoryEnvironment::new();
    env.apply(&[pair("A", "1"), pair("B", "2")]);

    assert_eq!(env.get("A").as_deref(), Some("1"));
    assert_eq!(env.get("B").as_deref(), Some("2"));
    assert_eq!(env.apply_count(), 1);
}

#[test]
fn test_memory_environment_overwrites() {
    let env = MemoryEnvironment::new();
    env.apply(&[pair("A", "1")]);
    env.apply(&[pair("A", "2")]);

    assert_eq!(env.get("A").as_deref(), Some("2"));
    assert_eq!(env.snapshot().len(), 1);
    assert_eq!(env.apply_count(), 2);
}

#[test]
fn test_process_environment_apply() {
    let name = "VSCEXT_PROCESS_ENVIRONMENT_TEST";
    ProcessEnvironment.apply(&[pair(name, "value")]);

    assert_eq!(std::env::var(name).unwrap(), "value");
    std::env::remove_var(name);
}

#[test]
fn test_memory_environment_counts_concurrent_applies() {
    let env = MemoryEnvironment::new();

    std::thread::scope(|scope| {
        for i in 0..8 {
            let env = &env;
            scope.spawn(move || {
                for _ in 0..25 {
                    env.apply(&[pair("A", &i.to_string())]);
                }
            });
        }
    });

    assert_eq!(env.apply_count(), 200);
    assert_eq!(env.snapshot().len(), 1);
}
