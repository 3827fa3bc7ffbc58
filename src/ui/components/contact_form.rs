use crate::ui::state::contact::ContactState;

use super::banner;

/// Returns true when the form was submitted.
pub fn render(ui: &mut egui::Ui, contact: &mut ContactState) -> bool {
    ui.heading("تواصل معنا");
    ui.label("نحن سعداء لتواصلك معنا! سواء كان لديك استفسار عن غسان أو اقتراح لتطوير المشروع، نرحب بجميع رسائلك");
    ui.separator();

    banner::render(ui, contact.banner.as_ref());

    let submitting = contact.is_submitting();
    let form = &mut contact.form;

    egui::Grid::new("contact_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("الاسم *");
            ui.add(egui::TextEdit::singleline(&mut form.name).hint_text("اسمك الكريم..."));
            ui.end_row();

            ui.label("البريد الإلكتروني *");
            ui.add(egui::TextEdit::singleline(&mut form.email).hint_text("your@email.com"));
            ui.end_row();

            ui.label("الموضوع *");
            ui.add(egui::TextEdit::singleline(&mut form.subject).hint_text("موضوع الرسالة..."));
            ui.end_row();

            ui.label("الرسالة *");
            ui.add(
                egui::TextEdit::multiline(&mut form.message)
                    .hint_text("اكتب رسالتك هنا...")
                    .desired_rows(6),
            );
            ui.end_row();
        });

    ui.add_space(8.0);
    let label = if submitting {
        "جاري الإرسال..."
    } else {
        "إرسال الرسالة"
    };
    ui.add_enabled(!submitting, egui::Button::new(label))
        .clicked()
}
