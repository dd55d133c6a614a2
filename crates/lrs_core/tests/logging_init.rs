use lrs_core::{init_logging, logging_status};

#[test]
fn init_logging_is_idempotent_for_same_config_and_rejects_conflicts() {
    let first = tempfile::tempdir().expect("temp dir should be created");
    let second = tempfile::tempdir().expect("temp dir should be created");
    let first_dir = first
        .path()
        .to_str()
        .expect("temp dir should be valid UTF-8")
        .to_string();
    let second_dir = second
        .path()
        .to_str()
        .expect("temp dir should be valid UTF-8")
        .to_string();

    init_logging("info", &first_dir).expect("first init should succeed");
    init_logging(" INFO ", &first_dir).expect("same config should be idempotent");

    let level_error = init_logging("debug", &first_dir).expect_err("level conflict should fail");
    assert!(level_error.contains("refusing to switch"));

    let dir_error = init_logging("info", &second_dir).expect_err("directory conflict should fail");
    assert!(dir_error.contains("refusing to switch"));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, first.path());

    log::info!("event=logging_probe module=test status=ok");
    log::logger().flush();
}
