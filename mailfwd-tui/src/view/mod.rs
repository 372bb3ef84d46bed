//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!     layout.rs       顶部留出一行，按会话状态选择页面
//!     pages/          list / input / error 三个页面
//!     theme.rs        会话级主题与样式
//!     wrap.rs         错误信息按显示宽度折行
//!

mod layout;
mod pages;
pub mod theme;
pub mod wrap;

pub use layout::render;
