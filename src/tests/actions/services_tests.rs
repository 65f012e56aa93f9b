    use super::*;

    #[test]
    fn oneshot_clipboard_hands_off_where_the_platform_needs_it() {
        let long_lived = SystemClipboard::new();
        assert!(!long_lived.hand_off);
        assert!(!long_lived.hands_off());

        let oneshot = SystemClipboard::for_oneshot();
        assert!(oneshot.hand_off);
        assert_eq!(oneshot.hands_off(), HANDOFF_PLATFORM);
        if cfg!(target_os = "linux") {
            assert!(oneshot.hands_off());
        }
    }

    #[test]
    fn notice_display_omits_empty_message() {
        let n = Notice::new(NoticeKind::Success, "ID copied!", "");
        assert_eq!(n.to_string(), "ID copied!");
        let n = Notice::new(NoticeKind::Failure, "Copy failed", "Could not copy URL");
        assert_eq!(n.to_string(), "Copy failed Could not copy URL");
    }
