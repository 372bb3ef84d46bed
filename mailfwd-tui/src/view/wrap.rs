//! 按显示宽度折行

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 把文本折成显示宽度不超过 `width` 的行
///
/// 在空白处断行，单个超长的词按宽度硬切。原有的换行保留。
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            for piece in split_long_word(word, width) {
                let piece_width = piece.width();
                if line_width > 0 && line_width + 1 + piece_width > width {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                if line_width > 0 {
                    line.push(' ');
                    line_width += 1;
                }
                line.push_str(&piece);
                line_width += piece_width;
            }
        }
        lines.push(line);
    }

    lines
}

fn split_long_word(word: &str, width: usize) -> Vec<String> {
    if word.width() <= width {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for c in word.chars() {
        let w = c.width().unwrap_or(0);
        if current_width + w > width && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += w;
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
