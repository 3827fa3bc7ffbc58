use crate::common::{ChatMessage, MessageKind};
use crate::ui::state::chat::{ChatState, Indicator};

const HIGH_RELIABILITY: f32 = 0.8;

pub fn render_header(ui: &mut egui::Ui, chat: &ChatState) {
    ui.horizontal(|ui| {
        ui.heading("غسان");
        ui.label(egui::RichText::new("مساعد ذكي").weak());
        if chat.is_connected() {
            ui.colored_label(egui::Color32::GREEN, "● متصل");
        } else {
            ui.colored_label(egui::Color32::GRAY, "○ غير متصل");
        }
    });
    ui.label(egui::RichText::new("🇴🇲 المساعد الأدبي العُماني المتخصص").small());
}

pub fn render(ui: &mut egui::Ui, chat: &ChatState) {
    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .max_height(ui.available_height() - 70.0)
        .show(ui, |ui| {
            for message in &chat.messages {
                render_message(ui, message);
                ui.add_space(6.0);
            }

            match chat.indicator() {
                Some(Indicator::Searching) => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("غسان يبحث في المصادر...");
                    });
                }
                Some(Indicator::Typing) => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("غسان يكتب...");
                    });
                }
                None => {}
            }
        });
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage) {
    let fill = if message.is_from_user() {
        egui::Color32::from_rgb(16, 140, 120)
    } else {
        match message.kind {
            MessageKind::Welcome => egui::Color32::from_rgb(225, 235, 255),
            MessageKind::Error => egui::Color32::from_rgb(255, 228, 228),
            MessageKind::Regular => egui::Color32::from_rgb(245, 245, 245),
        }
    };
    let text_color = if message.is_from_user() {
        egui::Color32::WHITE
    } else {
        egui::Color32::from_rgb(40, 40, 40)
    };

    egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
        ui.label(egui::RichText::new(&message.text).color(text_color));

        if !message.is_from_user() && message.kind == MessageKind::Regular {
            ui.horizontal(|ui| {
                if message.has_web_search {
                    ui.label(egui::RichText::new("🌐 بحث متقدم").small());
                }
                if let Some(model) = &message.model_used {
                    ui.label(egui::RichText::new(model_badge(model)).small());
                }
                if let Some(score) = message.reliability_score {
                    let color = if score > HIGH_RELIABILITY {
                        egui::Color32::DARK_GREEN
                    } else {
                        egui::Color32::from_rgb(180, 140, 0)
                    };
                    ui.colored_label(color, format!("ثقة: {:.0}%", score * 100.0));
                }
            });
        }

        ui.label(
            egui::RichText::new(message.timestamp.format("%H:%M").to_string())
                .small()
                .weak(),
        );
    });
}

fn model_badge(model: &str) -> &'static str {
    if model.to_lowercase().contains("claude") {
        "Claude"
    } else {
        "GPT-4o"
    }
}
