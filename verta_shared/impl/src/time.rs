use chrono::{DateTime, Utc};
use verta_di::Build;
use verta_shared_contracts::time::TimeService;

#[derive(Debug, Clone, Copy, Build)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
