/// The views the shell can mount, addressed by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Chat,
    AudioBooks,
    Contact,
    Knowledge,
    Upload,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Chat,
        Route::AudioBooks,
        Route::Contact,
        Route::Knowledge,
        Route::Upload,
    ];

    /// Unknown paths land on the chat.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "/audiobooks" => Route::AudioBooks,
            "/contact" => Route::Contact,
            "/knowledge" => Route::Knowledge,
            "/upload" => Route::Upload,
            "" => Route::Chat,
            other => {
                log::warn!("Unknown route `{other}`; showing chat");
                Route::Chat
            }
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Chat => "/",
            Route::AudioBooks => "/audiobooks",
            Route::Contact => "/contact",
            Route::Knowledge => "/knowledge",
            Route::Upload => "/upload",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Chat => "المحادثة",
            Route::AudioBooks => "الكتب المسموعة",
            Route::Contact => "تواصل معنا",
            Route::Knowledge => "قاعدة المعرفة",
            Route::Upload => "صورة غسان",
        }
    }
}
