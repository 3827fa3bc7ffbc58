//! Knowledge-base management: stats, auto-collection, sources, authors,
//! works and semantic search.

use crate::common::{
    Acknowledgement, ApiCommand, AuthorProfile, CollectReport, KnowledgeSource,
    RagStats, SemanticHit,
};
use crate::network::{ApiError, ApiResult};

use super::banner::{Banner, UNKNOWN_ERROR, ValidationError, require, split_list};

pub const SEARCH_LIMIT: usize = 10;

/// `(wire value, label)` pairs for the source type selector.
pub const SOURCE_TYPES: [(&str, &str); 7] = [
    ("article", "مقال"),
    ("book", "كتاب"),
    ("poem", "قصيدة"),
    ("biography", "سيرة ذاتية"),
    ("research", "بحث أكاديمي"),
    ("novel", "رواية"),
    ("story", "قصة"),
];

pub const CATEGORIES: [&str; 6] = ["شعر", "رواية", "قصة قصيرة", "مسرحية", "نقد أدبي", "أدب شعبي"];
pub const STYLES: [&str; 6] = ["تقليدي", "حداثي", "معاصر", "تجريبي", "رمزي", "واقعي"];

const MIN_RELIABILITY: f32 = 0.1;
const MAX_RELIABILITY: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KnowledgeTab {
    #[default]
    Collect,
    Sources,
    Authors,
    Works,
    Search,
}

impl KnowledgeTab {
    pub const ALL: [KnowledgeTab; 5] = [
        KnowledgeTab::Collect,
        KnowledgeTab::Sources,
        KnowledgeTab::Authors,
        KnowledgeTab::Works,
        KnowledgeTab::Search,
    ];

    pub fn label(self) -> &'static str {
        match self {
            KnowledgeTab::Collect => "جمع المصادر",
            KnowledgeTab::Sources => "إضافة مصدر",
            KnowledgeTab::Authors => "إدارة المؤلفين",
            KnowledgeTab::Works => "إدارة الأعمال",
            KnowledgeTab::Search => "البحث المتقدم",
        }
    }
}

/// Source form as typed; numbers and lists are parsed on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDraft {
    pub title: String,
    pub content: String,
    pub source_type: String,
    pub author: String,
    pub publication_date: String,
    pub reliability: String,
    pub tags: String,
}

impl Default for SourceDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            source_type: SOURCE_TYPES[0].0.to_string(),
            author: String::new(),
            publication_date: String::new(),
            reliability: "0.8".to_string(),
            tags: String::new(),
        }
    }
}

impl SourceDraft {
    pub fn build(&self) -> Result<KnowledgeSource, ValidationError> {
        require(&[
            ("العنوان", self.title.as_str()),
            ("المحتوى", self.content.as_str()),
        ])?;

        let reliability_score = self
            .reliability
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|score| (MIN_RELIABILITY..=MAX_RELIABILITY).contains(score))
            .ok_or(ValidationError::ReliabilityOutOfRange)?;

        Ok(KnowledgeSource {
            title: self.title.clone(),
            content: self.content.clone(),
            source_type: self.source_type.clone(),
            author: self.author.clone(),
            publication_date: self.publication_date.clone(),
            reliability_score,
            tags: split_list(&self.tags),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorDraft {
    pub full_name: String,
    pub biography: String,
    pub birth_date: String,
    pub birth_place: String,
    pub main_genres: Vec<String>,
    pub influences: String,
    pub literary_periods: String,
}

impl AuthorDraft {
    pub fn toggle_genre(&mut self, genre: &str) {
        if let Some(pos) = self.main_genres.iter().position(|g| g == genre) {
            self.main_genres.remove(pos);
        } else {
            self.main_genres.push(genre.to_string());
        }
    }

    pub fn build(&self) -> Result<AuthorProfile, ValidationError> {
        require(&[("الاسم الكامل", self.full_name.as_str())])?;
        Ok(AuthorProfile {
            full_name: self.full_name.clone(),
            biography: self.biography.clone(),
            birth_date: self.birth_date.clone(),
            birth_place: self.birth_place.clone(),
            main_genres: self.main_genres.clone(),
            influences: split_list(&self.influences),
            literary_periods: split_list(&self.literary_periods),
        })
    }
}

/// Works form. The backend exposes no endpoint for works, so it is never submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkDraft {
    pub title: String,
    pub author_id: String,
    pub publication_year: String,
    pub category: String,
    pub style: String,
    pub main_theme: String,
    pub summary: String,
    pub text_content: String,
}

impl Default for WorkDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            author_id: String::new(),
            publication_year: String::new(),
            category: CATEGORIES[0].to_string(),
            style: "معاصر".to_string(),
            main_theme: String::new(),
            summary: String::new(),
            text_content: String::new(),
        }
    }
}

#[derive(Default)]
pub struct KnowledgeState {
    pub tab: KnowledgeTab,
    pub stats: Option<RagStats>,
    pub banner: Option<Banner>,
    pub source: SourceDraft,
    pub author: AuthorDraft,
    pub work: WorkDraft,
    pub search_query: String,
    pub search_results: Vec<SemanticHit>,
    busy: bool,
    searching: bool,
}

impl KnowledgeState {
    /// Submit buttons share one in-flight flag.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn mount(&mut self) -> ApiCommand {
        ApiCommand::FetchStats
    }

    pub fn on_stats(&mut self, result: ApiResult<RagStats>) {
        match result {
            Ok(stats) => self.stats = Some(stats),
            Err(err) => log::warn!("Could not load knowledge stats: {err}"),
        }
    }

    pub fn collect(&mut self) -> Option<ApiCommand> {
        self.start(Ok(ApiCommand::CollectSources))
    }

    pub fn on_collected(&mut self, result: ApiResult<CollectReport>) {
        self.busy = false;
        self.banner = Some(match result {
            Ok(report) => Banner::success(format!(
                "تم جمع {} مصدر من {} مؤلف بنجاح!",
                report.total_sources_found, report.authors_processed
            )),
            Err(err) => failure_banner("خطأ في الجمع", &err),
        });
    }

    pub fn submit_source(&mut self) -> Option<ApiCommand> {
        let built = self.source.build().map(ApiCommand::AddSource);
        self.start(built)
    }

    pub fn on_source_added(&mut self, result: ApiResult<Acknowledgement>) {
        self.busy = false;
        self.banner = Some(match result {
            Ok(ack) => {
                self.source = SourceDraft::default();
                let entries = ack
                    .knowledge_entries
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "عدة".to_string());
                Banner::success(format!(
                    "تم إضافة المصدر بنجاح! تم إنشاء {entries} مدخل معرفي."
                ))
            }
            Err(err) => failure_banner("خطأ", &err),
        });
    }

    pub fn submit_author(&mut self) -> Option<ApiCommand> {
        let built = self.author.build().map(ApiCommand::AddAuthor);
        self.start(built)
    }

    /// On success the stats are stale; the returned command refreshes them.
    pub fn on_author_added(&mut self, result: ApiResult<Acknowledgement>) -> Option<ApiCommand> {
        self.busy = false;
        match result {
            Ok(ack) => {
                self.author = AuthorDraft::default();
                self.banner = Some(Banner::success(format!(
                    "تم إضافة المؤلف بنجاح! معرف التضمين: {}",
                    ack.embedding_id.as_deref().unwrap_or("-")
                )));
                Some(ApiCommand::FetchStats)
            }
            Err(err) => {
                self.banner = Some(failure_banner("خطأ", &err));
                None
            }
        }
    }

    pub fn search(&mut self) -> Option<ApiCommand> {
        let query = self.search_query.trim();
        if query.is_empty() || self.searching {
            return None;
        }
        self.searching = true;
        Some(ApiCommand::SemanticSearch {
            query: query.to_string(),
            limit: SEARCH_LIMIT,
        })
    }

    /// Failures keep whatever results were shown before.
    pub fn on_search(&mut self, result: ApiResult<Vec<SemanticHit>>) {
        self.searching = false;
        match result {
            Ok(hits) => self.search_results = hits,
            Err(err) => log::warn!("Semantic search failed: {err}"),
        }
    }

    fn start(&mut self, command: Result<ApiCommand, ValidationError>) -> Option<ApiCommand> {
        if self.busy {
            return None;
        }
        match command {
            Ok(command) => {
                self.busy = true;
                self.banner = None;
                Some(command)
            }
            Err(err) => {
                self.banner = Some(Banner::error(err.to_string()));
                None
            }
        }
    }
}

fn failure_banner(prefix: &str, err: &ApiError) -> Banner {
    if err.is_connectivity() {
        Banner::error(format!("خطأ في الاتصال: {err}"))
    } else {
        Banner::error(format!(
            "{prefix}: {}",
            err.detail().unwrap_or(UNKNOWN_ERROR)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ack() -> Acknowledgement {
        Acknowledgement {
            success: true,
            ..Default::default()
        }
    }

    #[test]
    fn mount_requests_stats_and_failure_is_silent() {
        let mut knowledge = KnowledgeState::default();
        assert_eq!(knowledge.mount(), ApiCommand::FetchStats);

        knowledge.on_stats(Err(ApiError::Unreachable("down".into())));
        assert!(knowledge.stats.is_none());
        assert!(knowledge.banner.is_none());

        knowledge.on_stats(Ok(RagStats {
            authors_count: 2,
            ..Default::default()
        }));
        assert_eq!(knowledge.stats.as_ref().map(|s| s.authors_count), Some(2));
    }

    #[test]
    fn source_draft_parses_tags_and_score() {
        let draft = SourceDraft {
            title: "ديوان".into(),
            content: "نص".into(),
            tags: "شعر, أدب عُماني,,".into(),
            reliability: " 0.9 ".into(),
            ..Default::default()
        };
        let source = draft.build().unwrap();
        assert_eq!(source.tags, vec!["شعر", "أدب عُماني"]);
        assert!((source.reliability_score - 0.9).abs() < 1e-6);
        assert_eq!(source.source_type, "article");
    }

    #[test]
    fn source_draft_rejects_bad_reliability() {
        for bad in ["0", "1.5", "abc", ""] {
            let draft = SourceDraft {
                title: "t".into(),
                content: "c".into(),
                reliability: bad.into(),
                ..Default::default()
            };
            assert_eq!(draft.build(), Err(ValidationError::ReliabilityOutOfRange));
        }
    }

    #[test]
    fn invalid_source_never_reaches_network() {
        let mut knowledge = KnowledgeState::default();
        knowledge.source.content = "نص".into();

        assert_eq!(knowledge.submit_source(), None);
        assert!(!knowledge.is_busy());
        assert!(knowledge.banner.as_ref().unwrap().text.contains("العنوان"));
    }

    #[test]
    fn source_success_resets_draft_and_reports_entries() {
        let mut knowledge = KnowledgeState::default();
        knowledge.source.title = "t".into();
        knowledge.source.content = "c".into();

        assert!(matches!(
            knowledge.submit_source(),
            Some(ApiCommand::AddSource(_))
        ));
        assert!(knowledge.is_busy());
        assert_eq!(knowledge.collect(), None);

        knowledge.on_source_added(Ok(Acknowledgement {
            knowledge_entries: Some(3),
            ..ack()
        }));
        assert!(!knowledge.is_busy());
        assert_eq!(knowledge.source, SourceDraft::default());
        assert_eq!(
            knowledge.banner,
            Some(Banner::success(
                "تم إضافة المصدر بنجاح! تم إنشاء 3 مدخل معرفي."
            ))
        );
    }

    #[test]
    fn source_failure_keeps_draft() {
        let mut knowledge = KnowledgeState::default();
        knowledge.source.title = "t".into();
        knowledge.source.content = "c".into();
        knowledge.submit_source();

        knowledge.on_source_added(Err(ApiError::Status {
            status: 500,
            detail: None,
        }));
        assert_eq!(knowledge.source.title, "t");
        assert_eq!(knowledge.banner, Some(Banner::error("خطأ: خطأ غير معروف")));
    }

    #[test]
    fn collect_reports_counts_or_reason() {
        let mut knowledge = KnowledgeState::default();
        assert_eq!(knowledge.collect(), Some(ApiCommand::CollectSources));
        knowledge.on_collected(Ok(CollectReport {
            collection_completed: true,
            total_sources_found: 12,
            authors_processed: 4,
            error: None,
        }));
        assert_eq!(
            knowledge.banner,
            Some(Banner::success("تم جمع 12 مصدر من 4 مؤلف بنجاح!"))
        );

        knowledge.collect();
        knowledge.on_collected(Err(ApiError::Rejected(Some("مهلة".into()))));
        assert_eq!(knowledge.banner, Some(Banner::error("خطأ في الجمع: مهلة")));
    }

    #[test]
    fn author_success_refreshes_stats() {
        let mut knowledge = KnowledgeState::default();
        knowledge.author.full_name = "سيف الرحبي".into();
        knowledge.author.influences = "المتنبي, أدونيس".into();
        knowledge.author.toggle_genre("شعر");
        knowledge.author.toggle_genre("رواية");
        knowledge.author.toggle_genre("رواية");

        match knowledge.submit_author() {
            Some(ApiCommand::AddAuthor(author)) => {
                assert_eq!(author.influences, vec!["المتنبي", "أدونيس"]);
                assert_eq!(author.main_genres, vec!["شعر"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let next = knowledge.on_author_added(Ok(Acknowledgement {
            embedding_id: Some("emb-9".into()),
            ..ack()
        }));
        assert_eq!(next, Some(ApiCommand::FetchStats));
        assert_eq!(knowledge.author, AuthorDraft::default());
        assert!(knowledge.banner.as_ref().unwrap().text.contains("emb-9"));
    }

    #[test]
    fn work_draft_starts_on_first_category() {
        let draft = WorkDraft::default();
        assert_eq!(draft.category, CATEGORIES[0]);
        assert!(STYLES.contains(&draft.style.as_str()));
        assert!(draft.title.is_empty() && draft.summary.is_empty());
    }

    #[test]
    fn search_trims_query_and_keeps_results_on_failure() {
        let mut knowledge = KnowledgeState::default();
        knowledge.search_query = "   ".into();
        assert_eq!(knowledge.search(), None);

        knowledge.search_query = "  الشعر  ".into();
        assert_eq!(
            knowledge.search(),
            Some(ApiCommand::SemanticSearch {
                query: "الشعر".into(),
                limit: SEARCH_LIMIT,
            })
        );
        assert!(knowledge.is_searching());

        let hit = SemanticHit {
            content_type: "work".into(),
            similarity_score: 0.8,
            text_content: "نص".into(),
        };
        knowledge.on_search(Ok(vec![hit.clone()]));
        assert_eq!(knowledge.search_results, vec![hit.clone()]);

        knowledge.search();
        knowledge.on_search(Err(ApiError::Decode("eof".into())));
        assert_eq!(knowledge.search_results, vec![hit]);
        assert!(!knowledge.is_searching());
    }
}
