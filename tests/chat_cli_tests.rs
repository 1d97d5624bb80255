mod common;

use common::{run_lister, TestEnv};

#[test]
fn chat_subcommand_is_available() {
    let output = run_lister(&["chat", "--help"]);

    assert!(
        output.status.success(),
        "chat --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn chat_requires_api_key() {
    let output = run_lister(&["chat", "--message", "hello"]);

    assert!(
        !output.status.success(),
        "chat without an API key should fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("OpenAI API key is missing"),
        "expected missing key error, got:\n{}",
        stderr
    );
}

#[test]
fn chat_prints_fallback_reply_when_api_is_unreachable() {
    let env = TestEnv::new();
    env.write_config(
        r#"
        [api]
        api_key = "test-key"
        endpoint = "http://127.0.0.1:9"
        timeout_secs = 2
        "#,
    );

    let output = env.run(&["chat", "--message", "is this lamp any good?"]);

    // A failed turn is not a CLI error: the session records a fallback reply.
    assert!(
        output.status.success(),
        "chat --message should exit cleanly even when the API call fails\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Sorry, something went wrong. Please try again."),
        "expected fallback reply, got:\n{}",
        stdout
    );
}
