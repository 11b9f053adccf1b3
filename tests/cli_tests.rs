#[cfg(test)]
mod tests {
    use clap::Parser;
    use midiscoprs::cli::{validate_device, Args};
    use midiscoprs::config::DEFAULT_NOTE_WINDOW_SECS;

    #[cfg(feature = "test-mock")]
    #[test]
    fn test_device_list() {
        let devices = midiscoprs::handle_device_list();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0], "Mock Device 1");
        assert_eq!(devices[1], "Mock Device 2");
    }

    #[test]
    fn test_args_with_device_binding() {
        let args = Args::parse_from(["test", "--bind-to-device", "Mock Device 1"]);
        assert_eq!(args.bind_to_device, Some("Mock Device 1".to_string()));
        assert!(!args.device_list);
        assert_eq!(args.note_window, DEFAULT_NOTE_WINDOW_SECS);
    }

    #[test]
    fn test_args_without_device_binding() {
        let args = Args::parse_from(["test"]);
        assert_eq!(args.bind_to_device, None);
        assert!(!args.device_list);
    }

    #[test]
    fn test_args_note_window_override() {
        let args = Args::parse_from(["test", "--note-window", "5"]);
        assert_eq!(args.note_window, 5);
    }

    #[test]
    fn test_validate_known_device() {
        let devices = vec!["Mock Device 1".to_string(), "Mock Device 2".to_string()];
        assert!(validate_device("Mock Device 1", &devices).is_ok());
    }

    #[test]
    fn test_validate_unknown_device_lists_alternatives() {
        let devices = vec!["Mock Device 1".to_string(), "Mock Device 2".to_string()];
        let err = validate_device("Nonexistent Device", &devices).unwrap_err();
        assert!(err.contains("Nonexistent Device"));
        assert!(err.contains("Mock Device 1"));
        assert!(err.contains("Mock Device 2"));
    }
}
