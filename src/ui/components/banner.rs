use crate::ui::state::banner::{Banner, BannerKind};

pub fn render(ui: &mut egui::Ui, banner: Option<&Banner>) {
    let Some(banner) = banner else {
        return;
    };

    let (icon, color) = match banner.kind {
        BannerKind::Success => ("✔", egui::Color32::from_rgb(34, 139, 34)),
        BannerKind::Error => ("⚠", egui::Color32::from_rgb(200, 40, 40)),
    };
    ui.colored_label(color, format!("{icon} {}", banner.text));
    ui.separator();
}
