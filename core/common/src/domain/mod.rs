//! ドメイン型（Newtype）
//!
//! 生の文字列・パスを直接運ばず、意味のある型に包んで境界を明確にする。

pub mod dirs;

pub use dirs::Dirs;

/// キー・バリューストアのキー（"yt-memo-history" 等）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreKey(&'static str);

impl StoreKey {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
