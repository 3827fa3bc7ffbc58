use crate::ui::state::audiobooks::{AUDIO_RESOURCES, AudioResource};

pub fn render(ui: &mut egui::Ui) {
    ui.heading("الكتب المسموعة");
    ui.label("اكتشف عالم الأدب العُماني والعربي من خلال الكتب الصوتية والبرامج الإذاعية");
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        for resource in &AUDIO_RESOURCES {
            render_card(ui, resource);
            ui.add_space(8.0);
        }
    });
}

fn render_card(ui: &mut egui::Ui, resource: &AudioResource) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(resource.icon).size(24.0));
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(resource.title).strong());
                ui.label(egui::RichText::new(resource.kind).small().weak());
            });
        });
        ui.label(resource.description);
        ui.hyperlink_to(resource.category.visit_label(), resource.url);
    });
}
