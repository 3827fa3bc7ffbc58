use crate::common::ApiCommand;
use crate::ui::state::knowledge::{
    CATEGORIES, KnowledgeState, KnowledgeTab, SOURCE_TYPES, STYLES,
};

use super::banner;

const WORKS_UNSUPPORTED: &str = "إضافة الأعمال غير مدعومة من الخادم حالياً";

/// Buttons pressed during this frame.
#[derive(Default)]
pub struct KnowledgeActions {
    pub collect: bool,
    pub submit_source: bool,
    pub submit_author: bool,
    pub search: bool,
}

impl KnowledgeActions {
    /// Turns the pressed button into the view-model transition it stands for.
    pub fn apply(self, knowledge: &mut KnowledgeState) -> Option<ApiCommand> {
        if self.collect {
            knowledge.collect()
        } else if self.submit_source {
            knowledge.submit_source()
        } else if self.submit_author {
            knowledge.submit_author()
        } else if self.search {
            knowledge.search()
        } else {
            None
        }
    }
}

pub fn render(ui: &mut egui::Ui, knowledge: &mut KnowledgeState) -> KnowledgeActions {
    let mut actions = KnowledgeActions::default();

    ui.heading("قاعدة المعرفة");
    ui.label("قاعدة معرفة شاملة للأدب العُماني مع البحث الدلالي والتضمين المتجه");
    ui.separator();

    banner::render(ui, knowledge.banner.as_ref());
    render_stats(ui, knowledge);

    ui.horizontal(|ui| {
        for tab in KnowledgeTab::ALL {
            ui.selectable_value(&mut knowledge.tab, tab, tab.label());
        }
    });
    ui.separator();

    let busy = knowledge.is_busy();
    egui::ScrollArea::vertical().show(ui, |ui| match knowledge.tab {
        KnowledgeTab::Collect => {
            ui.label("جمع المصادر الأدبية تلقائياً من المواقع الموثوقة");
            let label = if busy {
                "جاري الجمع..."
            } else {
                "بدء الجمع التلقائي للمصادر"
            };
            actions.collect = ui.add_enabled(!busy, egui::Button::new(label)).clicked();
        }
        KnowledgeTab::Sources => {
            actions.submit_source = render_source_form(ui, knowledge, busy);
        }
        KnowledgeTab::Authors => {
            actions.submit_author = render_author_form(ui, knowledge, busy);
        }
        KnowledgeTab::Works => {
            render_work_form(ui, knowledge);
        }
        KnowledgeTab::Search => {
            actions.search = render_search(ui, knowledge);
        }
    });

    actions
}

fn render_stats(ui: &mut egui::Ui, knowledge: &KnowledgeState) {
    let Some(stats) = &knowledge.stats else {
        return;
    };

    ui.horizontal(|ui| {
        ui.label(format!("المؤلفون: {}", stats.authors_count));
        ui.separator();
        ui.label(format!("الأعمال الأدبية: {}", stats.works_count));
        ui.separator();
        ui.label(format!("المصادر الأكاديمية: {}", stats.sources_count));
        ui.separator();
        ui.label(format!("التضمينات المتجهة: {}", stats.total_embeddings()));
    });
    if !stats.recent_queries.is_empty() {
        ui.collapsing("الاستعلامات الأخيرة", |ui| {
            for query in &stats.recent_queries {
                ui.label(query);
            }
        });
    }
    ui.separator();
}

fn render_source_form(ui: &mut egui::Ui, knowledge: &mut KnowledgeState, busy: bool) -> bool {
    let draft = &mut knowledge.source;

    egui::Grid::new("source_form").num_columns(2).show(ui, |ui| {
        ui.label("العنوان *");
        ui.add(egui::TextEdit::singleline(&mut draft.title).hint_text("عنوان المصدر..."));
        ui.end_row();

        ui.label("المحتوى *");
        ui.add(
            egui::TextEdit::multiline(&mut draft.content)
                .hint_text("محتوى المصدر الأدبي...")
                .desired_rows(6),
        );
        ui.end_row();

        ui.label("نوع المصدر");
        let selected_label = SOURCE_TYPES
            .iter()
            .find(|(value, _)| *value == draft.source_type)
            .map(|(_, label)| *label)
            .unwrap_or_default();
        egui::ComboBox::from_id_salt("source_type")
            .selected_text(selected_label)
            .show_ui(ui, |ui| {
                for (value, label) in SOURCE_TYPES {
                    ui.selectable_value(&mut draft.source_type, value.to_string(), label);
                }
            });
        ui.end_row();

        ui.label("المؤلف");
        ui.add(egui::TextEdit::singleline(&mut draft.author).hint_text("اسم المؤلف..."));
        ui.end_row();

        ui.label("تاريخ النشر");
        ui.add(
            egui::TextEdit::singleline(&mut draft.publication_date).hint_text("2024 أو 1445هـ..."),
        );
        ui.end_row();

        ui.label("درجة الموثوقية (0.1 - 1.0)");
        ui.text_edit_singleline(&mut draft.reliability);
        ui.end_row();

        ui.label("الكلمات المفتاحية");
        ui.add(
            egui::TextEdit::singleline(&mut draft.tags)
                .hint_text("شعر, أدب عُماني, سيف الرحبي (مفصولة بفاصلة)"),
        );
        ui.end_row();
    });

    let label = if busy { "جاري الحفظ..." } else { "إضافة المصدر" };
    ui.add_enabled(!busy, egui::Button::new(label)).clicked()
}

fn render_author_form(ui: &mut egui::Ui, knowledge: &mut KnowledgeState, busy: bool) -> bool {
    let draft = &mut knowledge.author;

    egui::Grid::new("author_form").num_columns(2).show(ui, |ui| {
        ui.label("الاسم الكامل *");
        ui.text_edit_singleline(&mut draft.full_name);
        ui.end_row();

        ui.label("تاريخ الميلاد");
        ui.text_edit_singleline(&mut draft.birth_date);
        ui.end_row();

        ui.label("مكان الميلاد");
        ui.text_edit_singleline(&mut draft.birth_place);
        ui.end_row();

        ui.label("السيرة الذاتية");
        ui.add(egui::TextEdit::multiline(&mut draft.biography).desired_rows(4));
        ui.end_row();

        ui.label("التأثيرات الأدبية");
        ui.add(egui::TextEdit::singleline(&mut draft.influences).hint_text("مفصولة بفاصلة"));
        ui.end_row();

        ui.label("الفترات الأدبية");
        ui.add(
            egui::TextEdit::singleline(&mut draft.literary_periods).hint_text("مفصولة بفاصلة"),
        );
        ui.end_row();
    });

    ui.label("الأنواع الأدبية الرئيسية");
    ui.horizontal_wrapped(|ui| {
        for genre in CATEGORIES {
            let mut checked = draft.main_genres.iter().any(|g| g == genre);
            if ui.checkbox(&mut checked, genre).changed() {
                draft.toggle_genre(genre);
            }
        }
    });

    let ready = !draft.full_name.trim().is_empty();
    ui.add_enabled(!busy && ready, egui::Button::new("إضافة المؤلف"))
        .clicked()
}

fn render_work_form(ui: &mut egui::Ui, knowledge: &mut KnowledgeState) {
    let draft = &mut knowledge.work;

    egui::Grid::new("work_form").num_columns(2).show(ui, |ui| {
        ui.label("العنوان *");
        ui.text_edit_singleline(&mut draft.title);
        ui.end_row();

        ui.label("معرف المؤلف");
        ui.text_edit_singleline(&mut draft.author_id);
        ui.end_row();

        ui.label("سنة النشر");
        ui.text_edit_singleline(&mut draft.publication_year);
        ui.end_row();

        ui.label("التصنيف");
        egui::ComboBox::from_id_salt("work_category")
            .selected_text(draft.category.clone())
            .show_ui(ui, |ui| {
                for category in CATEGORIES {
                    ui.selectable_value(&mut draft.category, category.to_string(), category);
                }
            });
        ui.end_row();

        ui.label("الأسلوب");
        egui::ComboBox::from_id_salt("work_style")
            .selected_text(draft.style.clone())
            .show_ui(ui, |ui| {
                for style in STYLES {
                    ui.selectable_value(&mut draft.style, style.to_string(), style);
                }
            });
        ui.end_row();

        ui.label("الموضوع الرئيسي");
        ui.text_edit_singleline(&mut draft.main_theme);
        ui.end_row();

        ui.label("الملخص *");
        ui.add(egui::TextEdit::multiline(&mut draft.summary).desired_rows(4));
        ui.end_row();

        ui.label("النص الكامل");
        ui.add(egui::TextEdit::multiline(&mut draft.text_content).desired_rows(4));
        ui.end_row();
    });

    ui.add_enabled(false, egui::Button::new("إضافة العمل"))
        .on_disabled_hover_text(WORKS_UNSUPPORTED);
}

fn render_search(ui: &mut egui::Ui, knowledge: &mut KnowledgeState) -> bool {
    let mut search = false;
    let searching = knowledge.is_searching();

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut knowledge.search_query)
                .hint_text("ابحث في قاعدة المعرفة..."),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            search = true;
        }
        if ui.add_enabled(!searching, egui::Button::new("🔍")).clicked() {
            search = true;
        }
        if searching {
            ui.spinner();
        }
    });

    for hit in &knowledge.search_results {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&hit.content_type).strong());
                ui.label(format!(
                    "درجة التشابه: {:.1}%",
                    hit.similarity_score * 100.0
                ));
            });
            ui.label(preview(&hit.text_content, 200));
        });
    }

    search
}

/// First `max_chars` characters, with an ellipsis when cut.
fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
