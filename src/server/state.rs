use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::template::TemplateStore;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub template_store: Arc<TemplateStore>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
            template_store: Arc::new(TemplateStore::new()),
            start_time: Instant::now(),
        }
    }
}
