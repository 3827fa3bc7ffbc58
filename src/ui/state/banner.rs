#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Result line shown above a form after a submit or a rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }
}

/// Fixed wording for failures without a server explanation.
pub const UNKNOWN_ERROR: &str = "خطأ غير معروف";

/// Missing required field(s); shown before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("يرجى تعبئة الحقول المطلوبة: {}", .0.join("، "))]
    MissingFields(Vec<&'static str>),
    #[error("درجة الموثوقية يجب أن تكون بين 0.1 و 1.0")]
    ReliabilityOutOfRange,
    #[error("يرجى اختيار ملف صورة صالح")]
    NotAnImage,
    #[error("حجم الصورة كبير جداً. يرجى اختيار صورة أقل من 5MB")]
    ImageTooLarge,
}

/// Collects the labels of blank fields; `Ok` when all are filled.
pub fn require(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

/// Splits a comma-separated input into trimmed, non-empty items.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
