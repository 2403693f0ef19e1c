use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable naming an optional log file; unset or empty disables file logging.
pub const LOG_ENV: &str = "PWA_ICONS_LOG";

pub fn log_path() -> Option<PathBuf> {
    log_path_from(std::env::var_os(LOG_ENV))
}

fn log_path_from(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn log_line(line: &str) {
    if let Some(path) = log_path() {
        log_line_to(&path, line);
    }
}

pub fn log_line_to(path: &Path, line: &str) {
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(f, "[{}] {}", timestamp(), line);
    }
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    log_line(&format!("ERROR: {}: {}", prefix, e));
}

/// Operator-facing progress line, mirrored to the log file.
pub fn report<W: Write + ?Sized>(out: &mut W, line: &str) {
    let _ = writeln!(out, "{}", line);
    log_line(line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_writes_line() {
        let mut buf = Vec::new();
        report(&mut buf, "Generated: icons/icon-72.png");
        report(&mut buf, "");
        assert_eq!(String::from_utf8(buf).unwrap(), "Generated: icons/icon-72.png\n\n");
    }

    #[test]
    fn test_log_line_appends_timestamped_records() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("pwa-icons.log");

        log_line_to(&path, "Source image: 1024x1024");
        log_line_to(&path, "Generated: icons/icon-72.png");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        for (line, text) in lines.iter().zip(["Source image: 1024x1024", "Generated: icons/icon-72.png"]) {
            // "[YYYY-MM-DD HH:MM:SS] " prefix
            let (stamp, rest) = line.split_at(22);
            assert!(stamp.starts_with('[') && stamp.ends_with("] "), "{}", line);
            assert!(chrono::NaiveDateTime::parse_from_str(&stamp[1..20], "%Y-%m-%d %H:%M:%S").is_ok());
            assert_eq!(rest, text);
        }
    }

    #[test]
    fn test_empty_or_unset_env_disables_file_log() {
        assert_eq!(log_path_from(None), None);
        assert_eq!(log_path_from(Some(OsString::new())), None);
        assert_eq!(
            log_path_from(Some(OsString::from("/tmp/pwa-icons.log"))),
            Some(PathBuf::from("/tmp/pwa-icons.log"))
        );
    }
}
