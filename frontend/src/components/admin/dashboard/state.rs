use common::model::application::Application;
use std::collections::HashSet;

/// State of the admin dashboard.
pub struct AdminDashboard {
    /// Newest first, exactly as the server returns them.
    pub applications: Vec<Application>,
    pub loading: bool,
    /// Banner text for the last failed load or mutation.
    pub error: Option<String>,
    /// Guard for the one-time session check on first render.
    pub checked: bool,
    pub pending: PendingRows,
}

impl AdminDashboard {
    pub fn new() -> Self {
        Self {
            applications: Vec::new(),
            loading: true,
            error: None,
            checked: false,
            pending: PendingRows::default(),
        }
    }
}

/// Rows with a toggle or delete request in flight. Their controls render
/// disabled until the request settles.
#[derive(Debug, Default)]
pub struct PendingRows(HashSet<String>);

impl PendingRows {
    /// Marks `id` busy. `false` means a request for it is already running.
    pub fn begin(&mut self, id: &str) -> bool {
        self.0.insert(id.to_string())
    }

    pub fn finish(&mut self, id: &str) {
        self.0.remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Forgets rows that are no longer listed.
    pub fn retain_listed(&mut self, rows: &[Application]) {
        self.0.retain(|id| rows.iter().any(|row| &row.id == id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::model::application::Region;

    fn row(id: &str) -> Application {
        Application {
            id: id.into(),
            name: "홍길동".into(),
            contact: "010-1234-5678".into(),
            region: Region::Seoul,
            privacy_consent: true,
            checkbox_selection: vec![],
            referrer_url: None,
            utm_source: None,
            utm_medium: None,
            utm_campaign: None,
            source: None,
            delivered_at: None,
            delivered_to: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn a_row_takes_one_request_at_a_time() {
        let mut pending = PendingRows::default();
        assert!(pending.begin("a"));
        assert!(!pending.begin("a"));
        assert!(pending.begin("b"));
        assert!(pending.contains("a"));

        pending.finish("a");
        assert!(!pending.contains("a"));
        assert!(pending.begin("a"));
    }

    #[test]
    fn reload_forgets_rows_that_are_gone() {
        let mut pending = PendingRows::default();
        pending.begin("deleted");
        pending.begin("kept");

        pending.retain_listed(&[row("kept")]);
        assert!(!pending.contains("deleted"));
        assert!(pending.contains("kept"));
    }
}
