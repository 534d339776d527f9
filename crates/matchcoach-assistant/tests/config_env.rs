//! Environment overrides for `AssistantConfig::load`
//!
//! Kept in its own test binary so the process environment is not shared
//! with other tests.

use matchcoach_assistant::AssistantConfig;
use std::io::Write;

#[test]
fn environment_overrides_file_values() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "context_window: 8").unwrap();
    writeln!(file, "responder:").unwrap();
    writeln!(file, "  model: glm-4-air").unwrap();
    writeln!(file, "  api_key: demo_key_for_testing").unwrap();

    let from_file = AssistantConfig::load(Some(file.path())).unwrap();
    assert_eq!(from_file.context_window, 8);
    assert!(!from_file.responder.has_api_key());

    std::env::set_var("MATCHCOACH_RESPONDER__API_KEY", "sk-env");
    std::env::set_var("MATCHCOACH_CONTEXT_WINDOW", "3");

    let config = AssistantConfig::load(Some(file.path())).unwrap();

    std::env::remove_var("MATCHCOACH_RESPONDER__API_KEY");
    std::env::remove_var("MATCHCOACH_CONTEXT_WINDOW");

    assert_eq!(config.responder.api_key, "sk-env");
    assert!(config.responder.has_api_key());
    assert_eq!(config.responder.model, "glm-4-air");
    assert_eq!(config.context_window, 3);
}
