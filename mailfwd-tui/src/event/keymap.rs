//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));

    // 列表
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const CREATE_RANDOM: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
    pub const COPY: KeyBinding = KeyBinding::key(KeyCode::Char('c'));
    pub const ADD: KeyBinding = KeyBinding::key(KeyCode::Char('a'));
    pub const DELETE: KeyBinding = KeyBinding::key(KeyCode::Char('d'));

    // 表格导航
    pub const NAV_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const NAV_UP_VIM: KeyBinding = KeyBinding::key(KeyCode::Char('k'));
    pub const NAV_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const NAV_DOWN_VIM: KeyBinding = KeyBinding::key(KeyCode::Char('j'));
    pub const NAV_PAGE_UP: KeyBinding = KeyBinding::key(KeyCode::PageUp);
    pub const NAV_PAGE_DOWN: KeyBinding = KeyBinding::key(KeyCode::PageDown);
    pub const NAV_TOP: KeyBinding = KeyBinding::key(KeyCode::Home);
    pub const NAV_BOTTOM: KeyBinding = KeyBinding::key(KeyCode::End);

    // 输入表单
    pub const NEXT_FIELD: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const NEXT_FIELD_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const NEXT_FIELD_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const CANCEL: KeyBinding = KeyBinding::key(KeyCode::Esc);
}
