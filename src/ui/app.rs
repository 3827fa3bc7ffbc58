use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::common::{ApiCommand, Request, Response};

use super::components::{
    audiobooks, chat_area, contact_form, image_uploader, input_bar, knowledge_panel, nav_bar,
};
use super::router::Route;
use super::state::banner::Banner;
use super::state::chat::ChatOptions;
use super::state::upload::{ImageCandidate, UploadState};
use super::state::{AppState, View};

const ARABIC_FONT: &str = "arabic";
const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];
/// Worker results arrive off the UI thread; poll for them at this rate.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct GhassanApp {
    state: AppState,
    command_sender: mpsc::Sender<Request>,
    event_receiver: mpsc::Receiver<Response>,
}

impl GhassanApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<Request>,
        event_receiver: mpsc::Receiver<Response>,
        route: Route,
        chat_options: ChatOptions,
        font_path: Option<&str>,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        if let Some(path) = font_path {
            install_font(&cc.egui_ctx, path);
        }

        let (state, requests) = AppState::new(route, chat_options);
        let mut app = Self {
            state,
            command_sender,
            event_receiver,
        };
        app.dispatch(requests);
        app
    }

    fn handle_api_events(&mut self) {
        while let Ok(response) = self.event_receiver.try_recv() {
            let follow_up = self.state.apply(response);
            self.dispatch(follow_up);
        }
    }

    /// A request the worker cannot take comes back to its view as a failure.
    fn dispatch(&mut self, requests: Vec<Request>) {
        let mut pending = VecDeque::from(requests);
        while let Some(request) = pending.pop_front() {
            if let Err(err) = self.command_sender.try_send(request) {
                log::warn!("Failed to send command to API worker: {err}");
                let reason = err.to_string();
                pending.extend(self.state.undeliverable(err.into_inner(), reason));
            }
        }
    }

    fn render_view(&mut self, ui: &mut egui::Ui) -> Option<ApiCommand> {
        match &mut self.state.view {
            View::Chat(chat) => {
                chat_area::render_header(ui, chat);
                ui.separator();
                chat_area::render(ui, chat);
                ui.separator();
                let enabled = chat.input_enabled();
                let send = input_bar::render(ui, &mut chat.input_text, enabled);
                if let Some(prompt) = input_bar::render_quick_prompts(ui, enabled) {
                    chat.use_suggestion(prompt);
                }
                if send { chat.submit() } else { None }
            }
            View::AudioBooks => {
                audiobooks::render(ui);
                None
            }
            View::Contact(contact) => {
                if contact_form::render(ui, contact) {
                    contact.submit()
                } else {
                    None
                }
            }
            View::Knowledge(knowledge) => knowledge_panel::render(ui, knowledge).apply(knowledge),
            View::Upload(upload) => {
                let actions = image_uploader::render(ui, upload);
                if actions.pick {
                    pick_image(upload);
                    None
                } else if actions.cancel {
                    upload.cancel();
                    None
                } else if actions.upload {
                    upload.upload()
                } else {
                    None
                }
            }
        }
    }
}

impl eframe::App for GhassanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_api_events();

        let mut navigate_to = None;
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            navigate_to = nav_bar::render(ui, self.state.route());
        });
        if let Some(route) = navigate_to {
            let requests = self.state.navigate(route);
            self.dispatch(requests);
        }

        let mut command = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            command = self.render_view(ui);
        });
        let requests = self.state.tag(command);
        self.dispatch(requests);

        ctx.request_repaint_after(POLL_INTERVAL);
    }
}

fn pick_image(upload: &mut UploadState) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("image", &IMAGE_EXTENSIONS)
        .pick_file()
    else {
        return;
    };

    match ImageCandidate::from_path(&path) {
        Ok(candidate) => {
            if upload.select(candidate).is_ok() {
                log::info!("Selected avatar {}", path.display());
            }
        }
        Err(err) => {
            log::warn!("Cannot read {}: {err}", path.display());
            upload.banner = Some(Banner::error(format!("تعذر قراءة الملف: {err}")));
        }
    }
}

/// Puts the font at `path` first in both families so Arabic text shapes.
fn install_font(ctx: &egui::Context, path: &str) {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!("Failed to load font {path}: {err}");
            return;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        ARABIC_FONT.to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, ARABIC_FONT.to_owned());
    }
    ctx.set_fonts(fonts);
    log::info!("Loaded font {path}");
}
