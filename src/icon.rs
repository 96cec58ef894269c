//! Icons used by activity entries and toasts.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Plus,
    Check,
    Users,
    Trash,
    Pencil,
    Xmark,
    Info,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Plus => "+",
            Icon::Check => "✓",
            Icon::Users => "👥",
            Icon::Trash => "🗑",
            Icon::Pencil => "✎",
            Icon::Xmark => "✕",
            Icon::Info => "ℹ",
        }
    }
}
