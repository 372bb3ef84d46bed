//! 单行文本输入框

use ratatui::style::Style;

/// 单行文本输入框
///
/// 光标以字符为单位，`char_limit` 为 0 表示不限长度。
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: Vec<char>,
    cursor: usize,
    pub placeholder: String,
    pub char_limit: usize,
    focused: bool,
    style: Style,
}

impl TextInput {
    pub fn new(placeholder: impl Into<String>, char_limit: usize) -> Self {
        Self {
            placeholder: placeholder.into(),
            char_limit,
            ..Self::default()
        }
    }

    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// 设置内容，光标移到末尾
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().collect();
        if self.char_limit > 0 {
            self.value.truncate(self.char_limit);
        }
        self.cursor = self.value.len();
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn insert(&mut self, c: char) {
        if self.char_limit > 0 && self.value.len() >= self.char_limit {
            return;
        }
        self.value.insert(self.cursor, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.value.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }
}

/// 输入表单：local part + 目标地址
#[derive(Debug, Clone)]
pub struct InputForm {
    fields: [TextInput; InputForm::FIELD_COUNT],
}

impl InputForm {
    pub const FIELD_COUNT: usize = 2;
    pub const LOCAL_PART: usize = 0;
    pub const DESTINATION: usize = 1;

    /// 目标地址预填默认值
    pub fn new(default_email: &str) -> Self {
        let mut destination = TextInput::new("destination@example.com", 254);
        destination.set_value(default_email);
        Self {
            fields: [TextInput::new("local part", 64), destination],
        }
    }

    pub fn field(&self, index: usize) -> &TextInput {
        &self.fields[index % Self::FIELD_COUNT]
    }

    pub fn field_mut(&mut self, index: usize) -> &mut TextInput {
        &mut self.fields[index % Self::FIELD_COUNT]
    }

    pub fn local_part(&self) -> &TextInput {
        &self.fields[Self::LOCAL_PART]
    }

    pub fn destination(&self) -> &TextInput {
        &self.fields[Self::DESTINATION]
    }

    /// 清空 local part，目标地址恢复默认值
    pub fn reset(&mut self, default_email: &str) {
        self.fields[Self::LOCAL_PART].reset();
        self.fields[Self::DESTINATION].set_value(default_email);
    }

    pub fn fields_mut(&mut self) -> impl Iterator<Item = (usize, &mut TextInput)> {
        self.fields.iter_mut().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_at_cursor() {
        let mut input = TextInput::new("", 0);
        for c in "fo".chars() {
            input.insert(c);
        }
        input.move_home();
        input.insert('x');
        assert_eq!(input.value(), "xfo");
        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "xf");
        input.move_home();
        input.delete();
        assert_eq!(input.value(), "f");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn cursor_counts_chars_not_bytes() {
        let mut input = TextInput::new("", 0);
        input.set_value("héé");
        assert_eq!(input.cursor(), 3);
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "hé");
    }

    #[test]
    fn char_limit_is_enforced() {
        let mut input = TextInput::new("", 3);
        input.set_value("abcdef");
        assert_eq!(input.value(), "abc");
        input.insert('z');
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn form_reset_restores_default() {
        let mut form = InputForm::new("me@test.com");
        form.field_mut(InputForm::LOCAL_PART).set_value("foo");
        form.field_mut(InputForm::DESTINATION).set_value("other@test.com");
        form.reset("me@test.com");
        assert!(form.local_part().is_empty());
        assert_eq!(form.destination().value(), "me@test.com");
    }
}
