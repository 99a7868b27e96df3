use std::fs::{self, File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::time::{SystemTime, UNIX_EPOCH};

const RESULTS_DIR: &str = "results";

// Fixed width so the in-place rewrite never spills into the next line.
const PROGRESS_LINE_WIDTH: usize = 40;

pub fn create_results_file(deck_name: &str) -> io::Result<File> {
    fs::create_dir_all(RESULTS_DIR)?;

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let path = format!(
        "{}/{}_{}.md",
        RESULTS_DIR,
        sanitize_deck_name(deck_name),
        timestamp
    );

    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

fn sanitize_deck_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

fn progress_line(answered: usize, total: usize) -> String {
    format!(
        "{:<width$}",
        format!("Progress: {} / {} answered", answered, total),
        width = PROGRESS_LINE_WIDTH
    )
}

/// Writes the session header and returns the file position of the progress
/// line, so it can be rewritten in place as answers come in.
pub fn write_session_header(file: &mut File, deck_name: &str, total: usize) -> io::Result<u64> {
    writeln!(file, "# Quiz Results - {}", deck_name)?;
    writeln!(file)?;

    let position = file.stream_position()?;
    writeln!(file, "{}", progress_line(0, total))?;
    writeln!(file)?;

    Ok(position)
}

pub fn update_progress_header(
    file: &mut File,
    position: u64,
    answered: usize,
    total: usize,
) -> io::Result<()> {
    let end = file.stream_position()?;
    file.seek(SeekFrom::Start(position))?;
    write!(file, "{}", progress_line(answered, total))?;
    file.seek(SeekFrom::Start(end))?;
    Ok(())
}

pub fn write_question_entry(
    file: &mut File,
    q_num: usize,
    prompt: &str,
    options: &[String],
    chosen: usize,
    correct: usize,
) -> io::Result<()> {
    writeln!(file, "## Question {}", q_num)?;
    writeln!(file)?;
    writeln!(file, "{}", prompt)?;
    writeln!(file)?;

    for (i, option) in options.iter().enumerate() {
        let marker = match (i == chosen, i == correct) {
            (true, true) => " <- your answer (correct)",
            (true, false) => " <- your answer (incorrect)",
            (false, true) => " <- correct answer",
            (false, false) => "",
        };
        writeln!(file, "- {}{}", option, marker)?;
    }
    writeln!(file)?;

    Ok(())
}

pub fn write_final_score(file: &mut File, score: usize, total: usize) -> io::Result<()> {
    writeln!(file, "**Final score: {} / {}**", score, total)?;
    Ok(())
}
