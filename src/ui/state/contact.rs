use crate::common::{Acknowledgement, ApiCommand, ContactSubmission};
use crate::network::{ApiError, ApiResult};

use super::banner::{Banner, UNKNOWN_ERROR, require};

pub const SENT_TEXT: &str = "تم إرسال رسالتك بنجاح! سنتواصل معك قريباً.";
pub const CONNECTION_FAILED_TEXT: &str = "خطأ في الاتصال. يرجى المحاولة لاحقاً.";

#[derive(Default)]
pub struct ContactState {
    pub form: ContactSubmission,
    pub banner: Option<Banner>,
    submitting: bool,
}

impl ContactState {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit(&mut self) -> Option<ApiCommand> {
        if self.submitting {
            return None;
        }

        let form = &self.form;
        if let Err(err) = require(&[
            ("الاسم", form.name.as_str()),
            ("البريد الإلكتروني", form.email.as_str()),
            ("الموضوع", form.subject.as_str()),
            ("الرسالة", form.message.as_str()),
        ]) {
            self.banner = Some(Banner::error(err.to_string()));
            return None;
        }

        self.submitting = true;
        self.banner = None;
        Some(ApiCommand::SendContact(self.form.clone()))
    }

    pub fn on_sent(&mut self, result: ApiResult<Acknowledgement>) {
        self.submitting = false;
        self.banner = Some(match result {
            Ok(_) => {
                self.form = ContactSubmission::default();
                Banner::success(SENT_TEXT)
            }
            Err(ApiError::Rejected(detail)) => Banner::error(format!(
                "خطأ في الإرسال: {}",
                detail.as_deref().unwrap_or(UNKNOWN_ERROR)
            )),
            Err(_) => Banner::error(CONNECTION_FAILED_TEXT),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactState {
        ContactState {
            form: ContactSubmission {
                name: "سالم".into(),
                email: "salem@example.com".into(),
                subject: "اقتراح".into(),
                message: "مشروع رائع".into(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn missing_fields_block_the_request() {
        let mut contact = filled();
        contact.form.subject = "  ".into();

        assert_eq!(contact.submit(), None);
        assert!(!contact.is_submitting());
        let banner = contact.banner.as_ref().unwrap();
        assert!(banner.is_error());
        assert!(banner.text.contains("الموضوع"));
    }

    #[test]
    fn success_resets_form() {
        let mut contact = filled();
        let command = contact.submit().unwrap();
        assert!(matches!(command, ApiCommand::SendContact(ref f) if f.name == "سالم"));
        assert!(contact.is_submitting());
        assert_eq!(contact.submit(), None);

        contact.on_sent(Ok(Acknowledgement {
            success: true,
            ..Default::default()
        }));
        assert!(!contact.is_submitting());
        assert_eq!(contact.form, ContactSubmission::default());
        assert_eq!(contact.banner, Some(Banner::success(SENT_TEXT)));
    }

    #[test]
    fn rejection_keeps_fields_and_shows_reason() {
        let mut contact = filled();
        contact.submit();
        contact.on_sent(Err(ApiError::Rejected(Some("البريد غير صالح".into()))));

        assert_eq!(contact.form.name, "سالم");
        assert_eq!(
            contact.banner,
            Some(Banner::error("خطأ في الإرسال: البريد غير صالح"))
        );
    }

    #[test]
    fn transport_failure_shows_generic_message() {
        let mut contact = filled();
        contact.submit();
        contact.on_sent(Err(ApiError::Unreachable("refused".into())));
        assert_eq!(contact.banner, Some(Banner::error(CONNECTION_FAILED_TEXT)));
    }
}
