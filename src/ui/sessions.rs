use crate::db::session::SessionData;
use std::time::{Duration, UNIX_EPOCH};

const DATE_FORMAT_TODAY: &str = "Today %H:%M";
const DATE_FORMAT_YESTERDAY: &str = "Yesterday %H:%M";
const DATE_FORMAT_OTHER: &str = "%Y-%m-%d";

pub fn format_session_date(timestamp: u64) -> String {
    let session_time = UNIX_EPOCH + Duration::from_secs(timestamp);
    let datetime: chrono::DateTime<chrono::Local> = session_time.into();

    let today = chrono::Local::now();
    let session_date = datetime.date_naive();

    if session_date == today.date_naive() {
        datetime.format(DATE_FORMAT_TODAY).to_string()
    } else if session_date == today.date_naive() - chrono::Duration::days(1) {
        datetime.format(DATE_FORMAT_YESTERDAY).to_string()
    } else {
        datetime.format(DATE_FORMAT_OTHER).to_string()
    }
}

pub fn format_session_item(session: &SessionData) -> String {
    let date = format_session_date(session.started_at);
    let status = if session.completed_at.is_some() {
        format!("{} / {}", session.score, session.questions_total)
    } else {
        format!(
            "{}/{} answered",
            session.questions_answered, session.questions_total
        )
    };
    format!("{} - {} ({})", date, session.deck_name, status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;

    fn sample_session(completed: bool) -> SessionData {
        let started_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        SessionData {
            id: 1,
            created_at: started_at,
            updated_at: started_at,
            deck_name: "Nutrition Basics".to_string(),
            started_at,
            completed_at: if completed { Some(started_at) } else { None },
            questions_total: 5,
            questions_answered: if completed { 5 } else { 2 },
            score: 4,
        }
    }

    #[test]
    fn test_recent_timestamp_formats_as_today() {
        let session = sample_session(true);
        let formatted = format_session_date(session.started_at);
        assert!(formatted.starts_with("Today "));
    }

    #[test]
    fn test_old_timestamp_formats_as_date() {
        let formatted = format_session_date(946_728_000);
        assert!(formatted.starts_with("2000-01"));
    }

    #[test]
    fn test_completed_session_shows_score() {
        let session = sample_session(true);
        let item = format_session_item(&session);
        assert!(item.contains("Nutrition Basics"));
        assert!(item.contains("(4 / 5)"));
    }

    #[test]
    fn test_unfinished_session_shows_progress() {
        let session = sample_session(false);
        let item = format_session_item(&session);
        assert!(item.contains("(2/5 answered)"));
    }
}
