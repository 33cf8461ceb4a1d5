//! Root display context.

use super::model::Theme;

/// The root rendering surface. The controller pushes the theme here whenever
/// it changes so the root theme class always matches the state.
pub trait DisplayContext: Send + Sync {
    fn apply_theme(&self, theme: Theme);
}

/// Display context for headless runs; ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessDisplay;

impl DisplayContext for HeadlessDisplay {
    fn apply_theme(&self, _theme: Theme) {}
}
