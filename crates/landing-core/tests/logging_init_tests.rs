use landing_core::logging_facility::{init, Profile};

// Own test binary: installs the global subscriber, which would shadow the
// capture layer in the other logging tests.
#[test]
fn test_init_is_idempotent() {
    init(Profile::Test);
    init(Profile::Development);
    tracing::info!(op = "after_init", event = "start");
}
