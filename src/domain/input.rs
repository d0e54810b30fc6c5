/// Single-line text buffer with a cursor counted in chars
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    /// Start with `text`, cursor at the end
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn into_string(self) -> String {
        self.text
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Text split around the cursor, for drawing a block cursor in between
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.byte_offset(self.cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(buf: &TextBuffer) -> String {
        buf.clone().into_string()
    }

    #[test]
    fn test_new_puts_cursor_at_end() {
        let buf = TextBuffer::new("héllo");
        assert_eq!(buf.cursor(), 5);
        assert_eq!(buf.split_at_cursor(), ("héllo", ""));
    }

    #[test]
    fn test_insert_and_backspace_multibyte() {
        let mut buf = TextBuffer::default();
        buf.insert('ż');
        buf.insert('ó');
        buf.insert('w');
        assert_eq!(text(&buf), "żów");

        buf.backspace();
        assert_eq!(text(&buf), "żó");
        buf.move_home();
        buf.backspace();
        assert_eq!(text(&buf), "żó");
    }

    #[test]
    fn test_insert_mid_text() {
        let mut buf = TextBuffer::new("bk");
        buf.move_left();
        buf.insert('o');
        assert_eq!(text(&buf), "bok");
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut buf = TextBuffer::new("abc");
        buf.move_home();
        buf.move_right();
        buf.delete();
        assert_eq!(text(&buf), "ac");
        assert_eq!(buf.cursor(), 1);

        buf.move_end();
        buf.delete();
        assert_eq!(text(&buf), "ac");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut buf = TextBuffer::new("ab");
        buf.move_right();
        assert_eq!(buf.cursor(), 2);
        buf.move_home();
        buf.move_left();
        assert_eq!(buf.cursor(), 0);
        assert_eq!(buf.split_at_cursor(), ("", "ab"));
    }
}
