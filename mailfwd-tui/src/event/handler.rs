//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, InputMessage, ListMessage, TableNav};
use crate::model::{App, SessionState};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Resize(width, height) => AppMessage::Resize { width, height },
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，避免 Windows 终端上按键重复
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    match app.state {
        SessionState::List => handle_list_keys(key),
        SessionState::Input { .. } => handle_input_keys(key),
        SessionState::Error { .. } => handle_error_keys(key),
    }
}

/// 列表状态
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    let msg = if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        ListMessage::ToggleFocus
    } else if DefaultKeymap::CREATE_RANDOM.matches(&key) {
        ListMessage::CreateRandom
    } else if DefaultKeymap::COPY.matches(&key) {
        ListMessage::Copy
    } else if DefaultKeymap::ADD.matches(&key) {
        ListMessage::Add
    } else if DefaultKeymap::DELETE.matches(&key) {
        ListMessage::Delete
    } else if DefaultKeymap::NAV_UP.matches(&key) || DefaultKeymap::NAV_UP_VIM.matches(&key) {
        ListMessage::Navigate(TableNav::Up)
    } else if DefaultKeymap::NAV_DOWN.matches(&key) || DefaultKeymap::NAV_DOWN_VIM.matches(&key) {
        ListMessage::Navigate(TableNav::Down)
    } else if DefaultKeymap::NAV_PAGE_UP.matches(&key) {
        ListMessage::Navigate(TableNav::PageUp)
    } else if DefaultKeymap::NAV_PAGE_DOWN.matches(&key) {
        ListMessage::Navigate(TableNav::PageDown)
    } else if DefaultKeymap::NAV_TOP.matches(&key) {
        ListMessage::Navigate(TableNav::Top)
    } else if DefaultKeymap::NAV_BOTTOM.matches(&key) {
        ListMessage::Navigate(TableNav::Bottom)
    } else {
        return AppMessage::Noop;
    };

    AppMessage::List(msg)
}

/// 输入状态
fn handle_input_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::NEXT_FIELD.matches(&key)
        || DefaultKeymap::NEXT_FIELD_UP.matches(&key)
        || DefaultKeymap::NEXT_FIELD_DOWN.matches(&key)
    {
        return AppMessage::Input(InputMessage::NextField);
    }
    if DefaultKeymap::CONFIRM.matches(&key) {
        return AppMessage::Input(InputMessage::Confirm);
    }
    if DefaultKeymap::CANCEL.matches(&key) {
        return AppMessage::Input(InputMessage::Cancel);
    }

    let msg = match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            InputMessage::Insert(c)
        }
        KeyCode::Backspace => InputMessage::Backspace,
        KeyCode::Delete => InputMessage::Delete,
        KeyCode::Left => InputMessage::Left,
        KeyCode::Right => InputMessage::Right,
        KeyCode::Home => InputMessage::Home,
        KeyCode::End => InputMessage::End,
        _ => return AppMessage::Noop,
    };

    AppMessage::Input(msg)
}

/// 错误状态：`q` 退出，其余任意键返回列表
fn handle_error_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    AppMessage::DismissError
}
