use std::path::{Path, PathBuf};

use crate::common::{Acknowledgement, ApiCommand, AvatarUpload};
use crate::network::ApiResult;

use super::banner::{Banner, UNKNOWN_ERROR, ValidationError};

/// 5 MB.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// A file the user picked, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCandidate {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: String,
    pub size: u64,
}

impl ImageCandidate {
    /// Reads name, size and the extension-derived MIME type of `path`.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let size = std::fs::metadata(path)?.len();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            mime,
            size,
        })
    }

    /// URI the egui image loaders resolve to this file.
    pub fn preview_uri(&self) -> String {
        format!("file://{}", self.path.display())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.mime.starts_with("image/") {
            return Err(ValidationError::NotAnImage);
        }
        if self.size > MAX_IMAGE_BYTES {
            return Err(ValidationError::ImageTooLarge);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct UploadState {
    pub banner: Option<Banner>,
    selected: Option<ImageCandidate>,
    uploading: bool,
}

impl UploadState {
    pub fn selected(&self) -> Option<&ImageCandidate> {
        self.selected.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Rejected candidates only set the error banner; an earlier selection
    /// stays in place.
    pub fn select(&mut self, candidate: ImageCandidate) -> Result<(), ValidationError> {
        if let Err(err) = candidate.validate() {
            log::info!("Rejected {} ({}): {err}", candidate.file_name, candidate.mime);
            self.banner = Some(Banner::error(err.to_string()));
            return Err(err);
        }

        self.selected = Some(candidate);
        self.banner = None;
        Ok(())
    }

    pub fn cancel(&mut self) {
        if self.uploading {
            return;
        }
        self.selected = None;
        self.banner = None;
    }

    pub fn upload(&mut self) -> Option<ApiCommand> {
        if self.uploading {
            return None;
        }
        let image = self.selected.as_ref()?;
        self.uploading = true;
        Some(ApiCommand::UploadAvatar(AvatarUpload {
            path: image.path.clone(),
            file_name: image.file_name.clone(),
            mime: image.mime.clone(),
        }))
    }

    pub fn on_uploaded(&mut self, result: ApiResult<Acknowledgement>) {
        self.uploading = false;
        self.banner = Some(match result {
            Ok(ack) => {
                self.selected = None;
                Banner::success(format!(
                    "تم رفع صورة غسان بنجاح! {}",
                    ack.filename.unwrap_or_default()
                ))
            }
            Err(err) if err.is_connectivity() => {
                Banner::error(format!("خطأ في الاتصال: {err}"))
            }
            Err(err) => Banner::error(format!(
                "خطأ في الرفع: {}",
                err.detail().unwrap_or(UNKNOWN_ERROR)
            )),
        });
    }
}
