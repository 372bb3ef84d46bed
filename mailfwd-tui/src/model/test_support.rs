//! 测试用的内存 Provider 与剪贴板

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use mailfwd_provider::{ForwardingProvider, ForwardingRule, ProviderError, Result};

use crate::backend::{Clipboard, ForwardService};
use crate::view::theme::Theme;

use super::App;

pub const DOMAIN: &str = "example.com";
pub const DEFAULT_EMAIL: &str = "default@example.org";

/// 行为类似远端的内存 Provider：规则按最新在前保存，可注入失败
#[derive(Default)]
pub struct FakeProvider {
    rules: Mutex<Vec<ForwardingRule>>,
    next_id: AtomicU32,
    calls: Mutex<Vec<String>>,
    failures: Mutex<HashMap<&'static str, u32>>,
}

impl FakeProvider {
    pub fn with_rules(rules: Vec<ForwardingRule>) -> Self {
        let next = u32::try_from(rules.len()).unwrap_or(0) + 1;
        Self {
            rules: Mutex::new(rules),
            next_id: AtomicU32::new(next),
            ..Self::default()
        }
    }

    /// 接下来 `times` 次 `op` 调用失败
    pub fn fail(&self, op: &'static str, times: u32) {
        self.failures.lock().unwrap().insert(op, times);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn rules(&self) -> Vec<ForwardingRule> {
        self.rules.lock().unwrap().clone()
    }

    /// 绕过会话直接改动远端数据
    pub fn remove_remote(&self, from: &str) {
        self.rules.lock().unwrap().retain(|r| r.from != from);
    }

    fn record(&self, call: String) -> Result<()> {
        let op = call.split(' ').next().unwrap_or_default().to_string();
        self.calls.lock().unwrap().push(call);

        let mut failures = self.failures.lock().unwrap();
        match failures.get_mut(op.as_str()) {
            Some(n) if *n > 0 => {
                *n -= 1;
                Err(ProviderError::NetworkError {
                    provider: "fake".into(),
                    detail: format!("{op} failed"),
                })
            }
            _ => Ok(()),
        }
    }

    fn insert(&self, local_part: &str, destination: &str) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rules.lock().unwrap().insert(
            0,
            ForwardingRule {
                from: format!("{local_part}@{DOMAIN}"),
                id: id.to_string(),
                to: destination.to_string(),
            },
        );
    }
}

#[async_trait]
impl ForwardingProvider for FakeProvider {
    fn id(&self) -> &'static str {
        "fake"
    }

    fn domain(&self) -> &str {
        DOMAIN
    }

    fn default_email(&self) -> &str {
        DEFAULT_EMAIL
    }

    async fn create(&self, local_part: &str, destination: &str) -> Result<()> {
        self.record(format!("create {local_part} {destination}"))?;
        self.insert(local_part, destination);
        Ok(())
    }

    async fn create_on_default_email(&self) -> Result<()> {
        self.record("create_on_default_email".to_string())?;
        let n = self.next_id.load(Ordering::SeqCst);
        self.insert(&format!("r{n:03}"), DEFAULT_EMAIL);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ForwardingRule>> {
        self.record("list".to_string())?;
        Ok(self.rules())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.record(format!("delete {id}"))?;
        let mut rules = self.rules.lock().unwrap();
        let before = rules.len();
        rules.retain(|r| r.id != id);
        if rules.len() == before {
            return Err(ProviderError::RedirectionNotFound {
                provider: "fake".into(),
                redirection_id: id.to_string(),
                raw_message: None,
            });
        }
        Ok(())
    }
}

/// 记录写入内容的剪贴板
#[derive(Default, Clone)]
pub struct FakeClipboard {
    pub written: Arc<Mutex<Vec<String>>>,
}

impl Clipboard for FakeClipboard {
    fn write(&self, text: &str) {
        self.written.lock().unwrap().push(text.to_string());
    }
}

pub struct Harness {
    pub app: App,
    pub provider: Arc<FakeProvider>,
    pub clipboard: FakeClipboard,
}

pub fn harness(provider: FakeProvider) -> Harness {
    let provider = Arc::new(provider);
    let clipboard = FakeClipboard::default();
    let backend = ForwardService::new(provider.clone()).unwrap();
    let app = App::new(backend, Box::new(clipboard.clone()), Theme::Dark, 80, 24).unwrap();
    provider.clear_calls();
    Harness {
        app,
        provider,
        clipboard,
    }
}

pub fn app_with(provider: FakeProvider) -> App {
    harness(provider).app
}

pub fn rule(from: &str, id: &str, to: &str) -> ForwardingRule {
    ForwardingRule {
        from: from.into(),
        id: id.into(),
        to: to.into(),
    }
}

/// 经由 Event → Message → Update 完整处理一次按键
pub fn press(app: &mut App, code: KeyCode) {
    let msg = crate::event::handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), app);
    crate::update::update(app, msg);
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

pub fn resize(app: &mut App, width: u16, height: u16) {
    let msg = crate::event::handle_event(Event::Resize(width, height), app);
    crate::update::update(app, msg);
}
