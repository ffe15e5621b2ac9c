use leptos::prelude::*;

use crate::state::Theme;

/// Reactive handle to the page-wide theme flag.
///
/// Provided once at the `App` root; sections read it to select their
/// presentation variant and the header toggles it. All mutation happens
/// on the UI thread through the signal, so there is nothing to lock.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }

    pub fn root_class(&self) -> &'static str {
        self.theme.get().root_class()
    }

    /// Flip light/dark. Subscribed views re-render synchronously.
    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

pub fn provide_theme_context() -> ThemeContext {
    let ctx = ThemeContext {
        theme: RwSignal::new(Theme::default()),
    };
    provide_context(ctx);
    ctx
}

/// Use the theme context from anywhere under `App`.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}
