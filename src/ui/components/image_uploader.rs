use crate::ui::state::upload::{MAX_IMAGE_BYTES, UploadState};

use super::banner;

const PREVIEW_SIZE: f32 = 240.0;

#[derive(Default)]
pub struct UploadActions {
    pub pick: bool,
    pub upload: bool,
    pub cancel: bool,
}

pub fn render(ui: &mut egui::Ui, upload: &UploadState) -> UploadActions {
    let mut actions = UploadActions::default();

    ui.heading("رفع صورة غسان");
    ui.label("اختر صورة لتكون الصورة الرمزية لغسان في المحادثة");
    ui.separator();

    banner::render(ui, upload.banner.as_ref());

    let uploading = upload.is_uploading();
    match upload.selected() {
        None => {
            ui.label(format!(
                "PNG, JPG, GIF أو WebP (حد أقصى {} ميغابايت)",
                MAX_IMAGE_BYTES / (1024 * 1024)
            ));
            actions.pick = ui.button("اختر صورة...").clicked();
        }
        Some(image) => {
            ui.add(
                egui::Image::new(image.preview_uri())
                    .max_size(egui::vec2(PREVIEW_SIZE, PREVIEW_SIZE)),
            );
            egui::Grid::new("selected_image").num_columns(2).show(ui, |ui| {
                ui.label("الملف");
                ui.label(&image.file_name);
                ui.end_row();

                ui.label("النوع");
                ui.label(&image.mime);
                ui.end_row();

                ui.label("الحجم");
                ui.label(format!("{:.1} KB", image.size as f64 / 1024.0));
                ui.end_row();
            });

            ui.horizontal(|ui| {
                let label = if uploading {
                    "جاري الرفع..."
                } else {
                    "رفع الصورة"
                };
                actions.upload = ui.add_enabled(!uploading, egui::Button::new(label)).clicked();
                actions.cancel = ui.add_enabled(!uploading, egui::Button::new("إلغاء")).clicked();
                actions.pick = ui
                    .add_enabled(!uploading, egui::Button::new("اختيار صورة أخرى"))
                    .clicked();
                if uploading {
                    ui.spinner();
                }
            });
        }
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::upload::ImageCandidate;

    fn render_once(upload: &UploadState) -> UploadActions {
        let ctx = egui::Context::default();
        egui_extras::install_image_loaders(&ctx);
        let mut actions = UploadActions::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                actions = render(ui, upload);
            });
        });
        actions
    }

    #[test]
    fn selection_renders_preview_without_actions() {
        let mut upload = UploadState::default();
        upload
            .select(ImageCandidate {
                path: "/tmp/ghassan.png".into(),
                file_name: "ghassan.png".into(),
                mime: "image/png".into(),
                size: 2048,
            })
            .unwrap();

        let actions = render_once(&upload);
        assert!(!actions.pick && !actions.upload && !actions.cancel);
    }
}
