//! 主题与样式
//!
//! 主题是会话级的值，由 App 持有，没有全局状态。

use ratatui::style::{Color, Modifier, Style};

/// 主题枚举
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 解析 `dark` / `light`（忽略大小写）
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// 当前主题的颜色方案
    pub fn colors(self) -> ThemeColors {
        match self {
            Self::Dark => ThemeColors::dark(),
            Self::Light => ThemeColors::light(),
        }
    }

    pub fn header(self) -> Style {
        Style::default()
            .fg(self.colors().fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 表格选中行
    pub fn selected(self) -> Style {
        let c = self.colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 表格失去焦点时的选中行
    pub fn selected_unfocused(self) -> Style {
        Style::default().fg(self.colors().fg).add_modifier(Modifier::BOLD)
    }

    pub fn border(self, focused: bool) -> Style {
        let c = self.colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    pub fn focused_input(self) -> Style {
        Style::default().fg(self.colors().highlight)
    }

    pub fn blurred_input(self) -> Style {
        Style::default().fg(self.colors().fg)
    }

    pub fn placeholder(self) -> Style {
        Style::default().fg(self.colors().muted)
    }

    pub fn error(self) -> Style {
        Style::default().fg(self.colors().error)
    }

    /// 快捷键提示
    pub fn hint_key(self) -> Style {
        Style::default()
            .fg(self.colors().warning)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明
    pub fn hint_desc(self) -> Style {
        Style::default().fg(self.colors().muted)
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(0, 122, 204),
            selected_bg: Color::Rgb(38, 79, 120),
            selected_fg: Color::White,
            warning: Color::Rgb(206, 145, 120),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(51, 51, 51),
            border: Color::Rgb(204, 204, 204),
            border_focused: Color::Rgb(0, 102, 204),
            highlight: Color::Rgb(0, 102, 204),
            selected_bg: Color::Rgb(204, 232, 255),
            selected_fg: Color::Black,
            warning: Color::Rgb(176, 136, 0),
            error: Color::Rgb(215, 58, 73),
            muted: Color::Rgb(128, 128, 128),
        }
    }
}
