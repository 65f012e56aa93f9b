    use super::*;

    fn typed(s: &str) -> Input {
        let mut input = Input::default();
        for c in s.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn editing_respects_char_boundaries() {
        let mut input = typed("ébé");
        assert_eq!(input.cursor, input.buf.len());

        input.backspace();
        assert_eq!(input.buf, "éb");

        input.move_left();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.move_left();
        assert_eq!(input.cursor, 0);

        input.delete();
        assert_eq!(input.buf, "b");
        input.move_right();
        input.move_right();
        assert_eq!(input.cursor, 1);

        input.insert_char('ü');
        assert_eq!(input.buf, "bü");
    }

    #[test]
    fn trimmed_ignores_whitespace_only() {
        assert_eq!(typed("   ").trimmed(), None);
        assert_eq!(typed(" arrow ").trimmed(), Some("arrow"));

        let mut input = typed("x");
        input.clear();
        assert_eq!(input.trimmed(), None);
        assert_eq!(input.cursor, 0);
    }
