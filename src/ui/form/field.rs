//! Multi-line text buffer with a cursor.

/// Editable text with a byte-offset cursor.
///
/// The cursor always sits on a `char` boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    cursor: usize,
}

impl TextField {
    /// Create a field holding `text`, cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Insert pasted text. Line endings are normalized to `\n`.
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.text.insert_str(self.cursor, &normalized);
        self.cursor += normalized.len();
    }

    pub fn backspace(&mut self) {
        let Some(prev) = self.prev_boundary() else {
            return;
        };
        self.text.replace_range(prev..self.cursor, "");
        self.cursor = prev;
    }

    pub fn delete(&mut self) {
        let Some(next) = self.next_boundary() else {
            return;
        };
        self.text.replace_range(self.cursor..next, "");
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    pub fn move_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
    }

    /// Move to the previous line, keeping the column where possible.
    pub fn move_up(&mut self) {
        let start = self.line_start(self.cursor);
        if start == 0 {
            self.cursor = 0;
            return;
        }
        let column = self.text[start..self.cursor].chars().count();
        let prev_end = start - 1;
        let prev_start = self.line_start(prev_end);
        self.cursor = self.advance(prev_start, prev_end, column);
    }

    /// Move to the next line, keeping the column where possible.
    pub fn move_down(&mut self) {
        let end = self.line_end(self.cursor);
        if end == self.text.len() {
            self.cursor = end;
            return;
        }
        let column = self.text[self.line_start(self.cursor)..self.cursor]
            .chars()
            .count();
        let next_start = end + 1;
        let next_end = self.line_end(next_start);
        self.cursor = self.advance(next_start, next_end, column);
    }

    /// Line index and character column of the cursor.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let column = before[self.line_start(self.cursor)..].chars().count();
        (line, column)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .chars()
            .next_back()
            .map(|ch| self.cursor - ch.len_utf8())
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
    }

    fn line_start(&self, offset: usize) -> usize {
        self.text[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self, offset: usize) -> usize {
        self.text[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(self.text.len())
    }

    fn advance(&self, start: usize, end: usize, column: usize) -> usize {
        self.text[start..end]
            .char_indices()
            .nth(column)
            .map(|(i, _)| start + i)
            .unwrap_or(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_advances_cursor() {
        let mut field = TextField::default();
        field.insert_char('h');
        field.insert_char('é');
        assert_eq!(field.text(), "hé");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn backspace_removes_multibyte_char() {
        let mut field = TextField::new("añ");
        field.backspace();
        assert_eq!(field.text(), "a");
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut field = TextField::new("abc");
        field.move_home();
        field.backspace();
        assert_eq!(field.text(), "abc");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut field = TextField::new("abc");
        field.move_left();
        field.move_left();
        field.delete();
        assert_eq!(field.text(), "ac");
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut field = TextField::new("abc");
        field.delete();
        assert_eq!(field.text(), "abc");
    }

    #[test]
    fn paste_normalizes_line_endings() {
        let mut field = TextField::default();
        field.insert_str("one\r\ntwo\rthree");
        assert_eq!(field.text(), "one\ntwo\nthree");
        assert_eq!(field.cursor(), field.text().len());
    }

    #[test]
    fn insert_in_middle() {
        let mut field = TextField::new("ac");
        field.move_left();
        field.insert_char('b');
        assert_eq!(field.text(), "abc");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn home_and_end_stay_on_current_line() {
        let mut field = TextField::new("first\nsecond");
        field.move_home();
        assert_eq!(field.cursor(), 6);
        field.move_end();
        assert_eq!(field.cursor(), field.text().len());
    }

    #[test]
    fn up_keeps_column() {
        let mut field = TextField::new("abcdef\nxyz");
        field.move_up();
        assert_eq!(field.cursor_position(), (0, 3));
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn up_clamps_to_shorter_line() {
        let mut field = TextField::new("ab\nxyz123");
        field.move_up();
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn up_on_first_line_goes_to_start() {
        let mut field = TextField::new("abc");
        field.move_up();
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn down_keeps_column() {
        let mut field = TextField::new("abc\nxyz");
        field.move_up();
        field.move_home();
        field.move_right();
        field.move_down();
        assert_eq!(field.cursor_position(), (1, 1));
    }

    #[test]
    fn down_on_last_line_goes_to_end() {
        let mut field = TextField::new("abc\nxyz");
        field.move_home();
        field.move_down();
        assert_eq!(field.cursor(), field.text().len());
    }

    #[test]
    fn cursor_position_counts_chars() {
        let field = TextField::new("line\nñandú");
        assert_eq!(field.cursor_position(), (1, 5));
    }
}
