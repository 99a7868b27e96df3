use rusqlite::{Connection, Result};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone)]
pub struct AnswerRecord {
    pub id: u64,
    pub session_id: u64,
    pub prompt: String,
    pub chosen_index: usize,
    pub correct_index: usize,
    pub display_order: usize,
    pub answered_at: u64,
}

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

pub fn record_answer(
    conn: &Connection,
    session_id: u64,
    display_order: usize,
    prompt: &str,
    chosen_index: usize,
    correct_index: usize,
) -> Result<u64> {
    let created_at = now();

    conn.execute(
        "INSERT INTO answers (session_id, prompt, chosen_index, correct_index, display_order, answered_at, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        rusqlite::params![
            session_id,
            prompt,
            chosen_index,
            correct_index,
            display_order,
            created_at,
            created_at,
            created_at
        ],
    )?;

    Ok(conn.last_insert_rowid() as u64)
}

pub fn get_session_answers(conn: &Connection, session_id: u64) -> Result<Vec<AnswerRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, session_id, prompt, chosen_index, correct_index, display_order, answered_at
         FROM answers WHERE session_id = ? ORDER BY display_order",
    )?;

    let rows = stmt.query_map([session_id], |row| {
        Ok(AnswerRecord {
            id: row.get(0)?,
            session_id: row.get(1)?,
            prompt: row.get(2)?,
            chosen_index: row.get(3)?,
            correct_index: row.get(4)?,
            display_order: row.get(5)?,
            answered_at: row.get(6)?,
        })
    })?;

    rows.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::run_migrations;
    use crate::db::session::create_session;

    fn test_connection() -> (tempfile::TempDir, Connection) {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_db_path = temp_dir.path().join("test.db");
        let conn = Connection::open(&test_db_path).unwrap();
        run_migrations(&conn).unwrap();
        (temp_dir, conn)
    }

    #[test]
    fn test_record_and_list_answers() {
        let (_dir, conn) = test_connection();
        let session_id = create_session(&conn, "Test Deck", 2).unwrap();

        record_answer(&conn, session_id, 1, "Q1?", 0, 1).unwrap();
        record_answer(&conn, session_id, 2, "Q2?", 2, 2).unwrap();

        let answers = get_session_answers(&conn, session_id).unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].prompt, "Q1?");
        assert_eq!(answers[0].chosen_index, 0);
        assert_eq!(answers[0].correct_index, 1);
        assert_eq!(answers[1].display_order, 2);
    }

    #[test]
    fn test_answers_scoped_to_session() {
        let (_dir, conn) = test_connection();
        let first = create_session(&conn, "First", 1).unwrap();
        let second = create_session(&conn, "Second", 1).unwrap();

        record_answer(&conn, first, 1, "Q?", 0, 0).unwrap();
        record_answer(&conn, second, 1, "Q?", 1, 0).unwrap();

        let answers = get_session_answers(&conn, first).unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].chosen_index, 0);
    }
}
