/// Pure mapping from state to display text
use crate::job_data::{JobRecord, RecordId};
use crate::state::{AuthMode, FetchView, SaveStatus, SavedJobsPanel};

pub const NOT_AVAILABLE: &str = "N/A";
pub const EMPTY_SAVED_JOBS: &str = "No saved jobs yet.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// One saved job in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCard {
    pub id: Option<RecordId>,
    pub heading: String,
    pub fields: Vec<DetailField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedJobsListing {
    /// Nothing loaded yet
    Hidden,
    Empty(&'static str),
    Cards(Vec<JobCard>),
}

/// Field value, or "N/A" when absent or empty
pub fn field_text(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn field(label: &'static str, value: &Option<String>) -> DetailField {
    DetailField {
        label,
        value: field_text(value),
    }
}

/// Rows of the job detail panel, in display order
pub fn job_detail_fields(job: &JobRecord) -> Vec<DetailField> {
    vec![
        field("Title", &job.title),
        field("Company", &job.company),
        field("Location", &job.location),
        field("Type", &job.job_type),
        field("Pay", &job.pay),
        field("Platform", &job.platform),
    ]
}

pub fn job_card(job: &JobRecord) -> JobCard {
    JobCard {
        id: job.id.clone(),
        heading: field_text(&job.title),
        fields: vec![
            field("Company", &job.company),
            field("Location", &job.location),
            field("Type", &job.job_type),
            field("Pay", &job.pay),
            field("Platform", &job.platform),
        ],
    }
}

pub fn saved_jobs_listing(panel: &SavedJobsPanel) -> SavedJobsListing {
    match &panel.jobs {
        None => SavedJobsListing::Hidden,
        Some(jobs) if jobs.is_empty() => SavedJobsListing::Empty(EMPTY_SAVED_JOBS),
        Some(jobs) => SavedJobsListing::Cards(jobs.iter().map(job_card).collect()),
    }
}

pub fn fetch_button_label(view: &FetchView) -> &'static str {
    if view.is_loading() { "Extracting..." } else { "Extract Job Info" }
}

pub fn save_button_label(status: &SaveStatus) -> &'static str {
    match status {
        SaveStatus::Saving => "Saving...",
        SaveStatus::Saved => "Saved!",
        SaveStatus::Ready | SaveStatus::Failed(_) => "Save This Job",
    }
}

pub fn list_button_label(busy: bool) -> &'static str {
    if busy { "Loading..." } else { "Load My Saved Jobs" }
}

/// Title, submit label and switch label for the auth dialog
pub fn auth_dialog_labels(mode: AuthMode) -> (&'static str, &'static str, &'static str) {
    match mode {
        AuthMode::Login => ("Login", "Login", "Register"),
        AuthMode::Register => ("Register", "Register", "Login"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_text_defaults() {
        assert_eq!(field_text(&None), "N/A");
        assert_eq!(field_text(&Some(String::new())), "N/A");
        assert_eq!(field_text(&Some("Remote".to_string())), "Remote");
    }

    #[test]
    fn test_job_detail_fields_order() {
        let job = JobRecord {
            title: Some("Engineer".to_string()),
            pay: Some("$60,000 - $80,000".to_string()),
            ..Default::default()
        };

        let fields = job_detail_fields(&job);
        let labels: Vec<&str> = fields.iter().map(|f| f.label).collect();

        assert_eq!(labels, vec!["Title", "Company", "Location", "Type", "Pay", "Platform"]);
        assert_eq!(fields[0].value, "Engineer");
        assert_eq!(fields[1].value, "N/A");
        assert_eq!(fields[4].value, "$60,000 - $80,000");
    }

    #[test]
    fn test_job_card_uses_title_as_heading() {
        let job = JobRecord {
            id: Some(RecordId::new("3")),
            company: Some("Acme".to_string()),
            ..Default::default()
        };

        let card = job_card(&job);

        assert_eq!(card.id, Some(RecordId::new("3")));
        assert_eq!(card.heading, "N/A");
        assert_eq!(card.fields[0], DetailField { label: "Company", value: "Acme".to_string() });
        assert_eq!(card.fields.len(), 5);
    }

    #[test]
    fn test_saved_jobs_listing_states() {
        assert_eq!(saved_jobs_listing(&SavedJobsPanel::default()), SavedJobsListing::Hidden);
        assert_eq!(
            saved_jobs_listing(&SavedJobsPanel::loaded(Vec::new())),
            SavedJobsListing::Empty("No saved jobs yet.")
        );

        let listing = saved_jobs_listing(&SavedJobsPanel::loaded(vec![JobRecord::default()]));
        assert!(matches!(listing, SavedJobsListing::Cards(cards) if cards.len() == 1));
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(fetch_button_label(&FetchView::Loading), "Extracting...");
        assert_eq!(fetch_button_label(&FetchView::Idle), "Extract Job Info");
        assert_eq!(save_button_label(&SaveStatus::Saved), "Saved!");
        assert_eq!(save_button_label(&SaveStatus::Failed("x".to_string())), "Save This Job");
        assert_eq!(list_button_label(true), "Loading...");
        assert_eq!(auth_dialog_labels(AuthMode::Register), ("Register", "Register", "Login"));
    }
}
