use crate::ui::router::Route;

/// Top navigation; returns the route the user picked, if it changed.
pub fn render(ui: &mut egui::Ui, current: Route) -> Option<Route> {
    let mut selected = current;

    ui.horizontal(|ui| {
        ui.heading("غسان");
        ui.separator();
        for route in Route::ALL {
            ui.selectable_value(&mut selected, route, route.label());
        }
    });

    (selected != current).then_some(selected)
}
