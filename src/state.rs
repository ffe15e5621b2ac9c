//! Pure UI state machines shared by the section components.
//!
//! Everything here is plain data so it can be driven by the reactive
//! layer in `app` and exercised directly in tests without a DOM.

use thiserror::Error;

/// Color scheme for the whole page. One instance per page session,
/// provided through context by `app::theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Class applied to `<html>` so stylesheet `.dark` selectors track
    /// the current theme.
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }
}

/// One-shot latch gating a section's entry animation.
///
/// Transitions `Unseen -> Seen` the first time the observed visible
/// fraction reaches the threshold and never reverts, so the animation
/// plays exactly once per mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Unseen,
    Seen,
}

impl RevealState {
    /// Feed one visibility report. Returns `true` only on the
    /// `Unseen -> Seen` transition.
    pub fn observe(&mut self, visible_fraction: f64, threshold: f64) -> bool {
        match self {
            RevealState::Seen => false,
            RevealState::Unseen if visible_fraction >= threshold => {
                *self = RevealState::Seen;
                true
            }
            RevealState::Unseen => false,
        }
    }

    pub fn is_seen(self) -> bool {
        matches!(self, RevealState::Seen)
    }
}

/// Lifecycle of the simulated contact submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("`{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("a submission is already in flight")]
    NotIdle,
}

/// Contact form fields plus submission status.
///
/// The component layer owns the timers; this model only encodes the
/// legal transitions, so a timer firing after the state has moved on
/// (or a stray submit) is a no-op rather than a corruption.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: FormStatus,
}

impl ContactForm {
    /// `Idle -> Submitting`. Native `required` validation blocks empty
    /// submits in the browser; the emptiness check here keeps the model
    /// honest when driven directly.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if self.status != FormStatus::Idle {
            return Err(FormError::NotIdle);
        }
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::EmptyField(field));
            }
        }
        self.status = FormStatus::Submitting;
        Ok(())
    }

    /// `Submitting -> Success`, clearing all fields. Called by the
    /// simulated-delivery timer.
    pub fn finish_submit(&mut self) {
        if self.status != FormStatus::Submitting {
            return;
        }
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.status = FormStatus::Success;
    }

    /// `Success -> Idle`. Called by the success-banner expiry timer.
    pub fn expire_success(&mut self) {
        if self.status == FormStatus::Success {
            self.status = FormStatus::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggle_round_trips() {
        let start = Theme::default();
        assert_eq!(start, Theme::Light);
        assert_eq!(start.toggled(), Theme::Dark);
        assert_eq!(start.toggled().toggled(), start);

        let mut theme = start;
        for _ in 0..7 {
            theme = theme.toggled();
        }
        assert_eq!(theme, Theme::Dark);
        assert!(theme.is_dark());
        assert_eq!(theme.root_class(), "dark");
    }

    #[test]
    fn reveal_fires_exactly_once() {
        let mut state = RevealState::default();
        assert!(!state.observe(0.05, 0.2));
        assert_eq!(state, RevealState::Unseen);

        assert!(state.observe(0.25, 0.2));
        assert!(state.is_seen());

        // later reports, including the region scrolling back out, never
        // un-reveal and never re-fire
        assert!(!state.observe(0.9, 0.2));
        assert!(!state.observe(0.0, 0.2));
        assert!(state.is_seen());
    }

    #[test]
    fn reveal_already_visible_at_mount() {
        // a section fully in view when observation starts still fires
        // exactly once on the first report
        let mut state = RevealState::default();
        assert!(state.observe(1.0, 0.3));
        assert!(!state.observe(1.0, 0.3));
    }

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
            status: FormStatus::Idle,
        }
    }

    #[test]
    fn contact_submit_lifecycle() {
        let mut form = filled_form();
        form.submit().expect("populated form should submit");
        assert_eq!(form.status, FormStatus::Submitting);
        assert!(form.is_submitting());

        form.finish_submit();
        assert_eq!(form.status, FormStatus::Success);
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");

        form.expire_success();
        assert_eq!(form.status, FormStatus::Idle);
    }

    #[test]
    fn contact_submit_requires_all_fields() {
        let mut form = ContactForm {
            email: String::new(),
            ..filled_form()
        };
        assert_eq!(form.submit(), Err(FormError::EmptyField("email")));
        assert_eq!(form.status, FormStatus::Idle);

        let mut form = ContactForm {
            message: "   ".to_string(),
            ..filled_form()
        };
        assert_eq!(form.submit(), Err(FormError::EmptyField("message")));
        assert_eq!(form.status, FormStatus::Idle);
    }

    #[test]
    fn contact_double_submit_rejected() {
        let mut form = filled_form();
        form.submit().unwrap();
        assert_eq!(form.submit(), Err(FormError::NotIdle));
        assert_eq!(form.status, FormStatus::Submitting);
    }

    #[test]
    fn contact_out_of_order_timers_are_noops() {
        // timers surviving a state change must not corrupt anything
        let mut form = filled_form();
        form.finish_submit();
        assert_eq!(form.status, FormStatus::Idle);
        assert_eq!(form.name, "A");

        form.expire_success();
        assert_eq!(form.status, FormStatus::Idle);

        form.submit().unwrap();
        form.expire_success();
        assert_eq!(form.status, FormStatus::Submitting);
    }
}
