pub(crate) const STAR_FILLED: &str = "★";
pub(crate) const STAR_EMPTY: &str = "☆";
pub(crate) const PLUS: &str = "➕";
pub(crate) const TRASH: &str = "🗑";
pub(crate) const CAMERA: &str = "📷";
pub(crate) const CHECK: &str = "✔";
pub(crate) const CROSS: &str = "❌";
pub(crate) const REFRESH: &str = "🔄";
