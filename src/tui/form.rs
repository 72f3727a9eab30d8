// Contact form with simulated submission and status banner
//
// Submitting validates the required fields, then pretends to send for two
// seconds. The outcome is reported in a banner that fades in, stays for
// five seconds and fades out; a newer banner replaces an older one.

use crate::carousel::Deadline;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Simulated network round-trip
pub const SEND_DELAY: Duration = Duration::from_millis(2000);
/// Delay before a banner starts fading in
pub const BANNER_SHOW_DELAY: Duration = Duration::from_millis(100);
/// Length of a banner's fade in and fade out
pub const BANNER_FADE: Duration = Duration::from_millis(300);
/// Time from creation until a banner starts fading out
pub const BANNER_LIFETIME: Duration = Duration::from_millis(5000);

pub const MISSING_FIELDS: &str = "Please fill in all required fields.";
pub const SENT: &str = "Thank you! Your message has been sent successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::FirstName, Field::Email, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name *",
            Field::Email => "Email *",
            Field::Message => "Message",
        }
    }
}

/// Focusable parts of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSlot {
    Field(Field),
    Submit,
}

impl FormSlot {
    pub const ALL: [FormSlot; 4] = [
        FormSlot::Field(Field::FirstName),
        FormSlot::Field(Field::Email),
        FormSlot::Field(Field::Message),
        FormSlot::Submit,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Transient status message shown above the form
#[derive(Debug, Clone)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    created_at: Instant,
}

impl Banner {
    pub fn new(kind: BannerKind, text: impl Into<String>, now: Instant) -> Self {
        Self {
            kind,
            text: text.into(),
            created_at: now,
        }
    }

    /// Visibility in 0.0..=1.0
    pub fn opacity(&self, now: Instant) -> f32 {
        let age = now.saturating_duration_since(self.created_at);
        let fade = BANNER_FADE.as_secs_f32();
        if age < BANNER_SHOW_DELAY {
            0.0
        } else if age < BANNER_LIFETIME {
            ((age - BANNER_SHOW_DELAY).as_secs_f32() / fade).min(1.0)
        } else {
            (1.0 - (age - BANNER_LIFETIME).as_secs_f32() / fade).max(0.0)
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= BANNER_LIFETIME + BANNER_FADE
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    first_name: String,
    email: String,
    message: String,
    focus: Option<FormSlot>,
    sending: Deadline,
    banner: Option<Banner>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn focused(&self) -> Option<FormSlot> {
        self.focus
    }

    pub fn focus(&mut self, slot: FormSlot) {
        self.focus = Some(slot);
    }

    pub fn blur(&mut self) {
        self.focus = None;
    }

    pub fn is_sending(&self) -> bool {
        self.sending.is_armed()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_sending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    fn show_banner(&mut self, kind: BannerKind, text: &str, now: Instant) {
        self.banner = Some(Banner::new(kind, text, now));
    }

    /// Start a submission. Returns true if sending began; a submission
    /// already in flight or a missing required field makes this a no-op
    /// (the latter with an error banner).
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.is_sending() {
            return false;
        }
        if self.first_name.trim().is_empty() || self.email.trim().is_empty() {
            debug!("contact form rejected: missing required fields");
            self.show_banner(BannerKind::Error, MISSING_FIELDS, now);
            return false;
        }
        info!("sending contact form");
        self.sending.arm(now, SEND_DELAY);
        true
    }

    /// Finish a due submission and drop an expired banner.
    /// Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.sending.fire_if_due(now) {
            self.first_name.clear();
            self.email.clear();
            self.message.clear();
            self.show_banner(BannerKind::Success, SENT, now);
            info!("contact form sent");
            changed = true;
        }

        if self.banner.as_ref().is_some_and(|b| b.is_expired(now)) {
            self.banner = None;
            changed = true;
        }

        changed
    }

    fn advance_focus(&mut self) {
        let position = self
            .focus
            .and_then(|slot| FormSlot::ALL.iter().position(|s| *s == slot))
            .unwrap_or(0);
        self.focus = FormSlot::ALL.get(position + 1).copied().or(self.focus);
    }
}

impl Interactive for ContactForm {
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Handled {
        let Some(slot) = self.focus else {
            return Handled::No;
        };

        match (slot, key.code) {
            (_, KeyCode::Esc) => {
                self.blur();
                Handled::Yes
            }
            (FormSlot::Submit, KeyCode::Enter) => {
                self.submit(now);
                Handled::Yes
            }
            (FormSlot::Field(_), KeyCode::Enter) => {
                self.advance_focus();
                Handled::Yes
            }
            (FormSlot::Field(field), KeyCode::Backspace) => {
                self.value_mut(field).pop();
                Handled::Yes
            }
            (FormSlot::Field(field), KeyCode::Char(c))
                if !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.value_mut(field).push(c);
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        match self.focus {
            Some(FormSlot::Submit) => Some("Enter:send  Tab:next  Esc:leave form"),
            Some(FormSlot::Field(_)) => Some("type to edit  Tab:next  Ctrl+S:send  Esc:leave form"),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut ContactForm, field: Field, text: &str) {
        form.focus(FormSlot::Field(field));
        for c in text.chars() {
            form.handle_key(
                KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE),
                Instant::now(),
            );
        }
    }

    #[test]
    fn missing_fields_show_error_and_reset() {
        let t0 = Instant::now();
        let mut form = ContactForm::new();
        type_into(&mut form, Field::FirstName, "Sam");

        assert!(!form.submit(t0));
        assert!(!form.is_sending());
        assert_eq!(form.button_label(), "Send Message");

        let banner = form.banner().map(|b| (b.kind, b.text.clone()));
        assert_eq!(banner, Some((BannerKind::Error, MISSING_FIELDS.to_string())));
    }

    #[test]
    fn successful_send_clears_fields_after_delay() {
        let t0 = Instant::now();
        let mut form = ContactForm::new();
        type_into(&mut form, Field::FirstName, "Sam");
        type_into(&mut form, Field::Email, "sam@example.com");
        type_into(&mut form, Field::Message, "Hello");

        assert!(form.submit(t0));
        assert_eq!(form.button_label(), "Sending...");
        // Disabled while in flight
        assert!(!form.submit(t0 + Duration::from_millis(500)));

        assert!(!form.tick(t0 + SEND_DELAY - Duration::from_millis(1)));
        assert!(form.tick(t0 + SEND_DELAY));

        assert!(!form.is_sending());
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
        assert_eq!(form.banner().map(|b| b.kind), Some(BannerKind::Success));
    }

    #[test]
    fn send_logs_leave_out_sender_details() {
        use crate::logging::{LogBuffer, TuiLogLayer};
        use tracing_subscriber::layer::SubscriberExt;

        let buffer = LogBuffer::new();
        let subscriber = tracing_subscriber::registry().with(TuiLogLayer::new(buffer.clone()));
        let t0 = Instant::now();
        let mut form = ContactForm::new();
        type_into(&mut form, Field::FirstName, "Sam");
        type_into(&mut form, Field::Email, "sam@example.com");

        tracing::subscriber::with_default(subscriber, || {
            assert!(form.submit(t0));
            form.tick(t0 + SEND_DELAY);
        });

        let entries = buffer.recent(16);
        assert!(entries.iter().any(|e| e.message == "sending contact form"));
        assert!(entries.iter().all(|e| !e.message.contains("sam@example.com")));
        assert!(entries.iter().all(|e| !e.message.contains("Sam")));
    }

    #[test]
    fn new_banner_replaces_old() {
        let t0 = Instant::now();
        let mut form = ContactForm::new();
        form.submit(t0);
        form.submit(t0 + Duration::from_millis(4000));

        // Dated from the second submit, so still present past the first one's expiry
        assert!(!form.tick(t0 + BANNER_LIFETIME + BANNER_FADE));
        assert!(form.banner().is_some());
        assert!(form.tick(t0 + Duration::from_millis(4000) + BANNER_LIFETIME + BANNER_FADE));
        assert!(form.banner().is_none());
    }

    #[test]
    fn banner_fades_in_and_out() {
        let t0 = Instant::now();
        let banner = Banner::new(BannerKind::Success, SENT, t0);
        assert_eq!(banner.opacity(t0), 0.0);
        assert_eq!(banner.opacity(t0 + BANNER_SHOW_DELAY + BANNER_FADE), 1.0);
        assert_eq!(banner.opacity(t0 + BANNER_LIFETIME), 1.0);
        assert_eq!(banner.opacity(t0 + BANNER_LIFETIME + BANNER_FADE), 0.0);
        assert!(!banner.is_expired(t0 + BANNER_LIFETIME));
        assert!(banner.is_expired(t0 + BANNER_LIFETIME + BANNER_FADE));
    }

    #[test]
    fn editing_keys() {
        let mut form = ContactForm::new();
        type_into(&mut form, Field::Email, "ab");
        form.handle_key(
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            Instant::now(),
        );
        assert_eq!(form.value(Field::Email), "a");

        // Enter on a field moves to the next slot
        form.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), Instant::now());
        assert_eq!(form.focused(), Some(FormSlot::Field(Field::Message)));

        // Ctrl-chords bubble up
        let handled = form.handle_key(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert_eq!(handled, Handled::No);
    }

    #[test]
    fn unfocused_form_ignores_keys() {
        let mut form = ContactForm::new();
        let handled = form.handle_key(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE),
            Instant::now(),
        );
        assert_eq!(handled, Handled::No);
        assert_eq!(form.value(Field::FirstName), "");
    }
}
