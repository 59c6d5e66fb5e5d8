//! Client-side `name_regex` filtering.

use crate::error::DataSourceError;
use netbox_client::PortRecord;
use regex::Regex;
use tracing::warn;

/// Compiled `name_regex`, or pass-through when none is configured.
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    regex: Option<Regex>,
}

impl NameFilter {
    /// Compile `pattern`. `None` and the empty string both mean "no filter".
    pub fn compile(pattern: Option<&str>) -> Result<Self, DataSourceError> {
        let regex = match pattern {
            Some(p) if !p.is_empty() => {
                Some(Regex::new(p).map_err(|source| DataSourceError::InvalidPattern {
                    pattern: p.to_string(),
                    source,
                })?)
            }
            _ => None,
        };
        Ok(Self { regex })
    }

    /// Whether a pattern is active.
    pub fn is_active(&self) -> bool {
        self.regex.is_some()
    }

    /// Unanchored match. A missing name never matches an active pattern.
    pub fn matches(&self, name: Option<&str>) -> bool {
        match (&self.regex, name) {
            (None, _) => true,
            (Some(regex), Some(name)) => regex.is_match(name),
            (Some(_), None) => false,
        }
    }

    /// Keep matching records, preserving their order.
    pub fn apply<R: PortRecord>(&self, records: Vec<R>) -> Vec<R> {
        if !self.is_active() {
            return records;
        }

        records
            .into_iter()
            .filter(|record| {
                let keep = self.matches(record.name());
                if !keep && record.name().is_none() {
                    warn!(id = record.id(), "dropping unnamed port: name_regex is set");
                }
                keep
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netbox_client::MockNetBoxClient;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    /// Log sink shared between the subscriber and the assertions.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn names(records: &[netbox_client::FrontPort]) -> Vec<Option<&str>> {
        records.iter().map(|r| r.name()).collect()
    }

    fn ports(names: &[Option<&str>]) -> Vec<netbox_client::FrontPort> {
        let mock = MockNetBoxClient::new("http://netbox.test");
        names
            .iter()
            .enumerate()
            .map(|(i, name)| mock.new_front_port(i as u64 + 1, 10, *name))
            .collect()
    }

    #[test]
    fn test_unanchored_match_keeps_order() {
        let filter = NameFilter::compile(Some("eth")).unwrap();
        let kept = filter.apply(ports(&[Some("eth0"), Some("eth1"), Some("mgmt0")]));
        assert_eq!(names(&kept), vec![Some("eth0"), Some("eth1")]);
    }

    #[test]
    fn test_match_anywhere_in_name() {
        let filter = NameFilter::compile(Some("0$")).unwrap();
        let kept = filter.apply(ports(&[Some("eth0"), Some("eth1"), Some("mgmt0")]));
        assert_eq!(names(&kept), vec![Some("eth0"), Some("mgmt0")]);
    }

    #[test]
    fn test_no_pattern_passes_everything_through() {
        let filter = NameFilter::compile(None).unwrap();
        assert!(!filter.is_active());
        let kept = filter.apply(ports(&[Some("a"), None, Some("b")]));
        assert_eq!(names(&kept), vec![Some("a"), None, Some("b")]);
    }

    #[test]
    fn test_empty_pattern_is_no_filter() {
        let filter = NameFilter::compile(Some("")).unwrap();
        assert!(!filter.is_active());
    }

    #[test]
    fn test_unnamed_records_never_match() {
        let filter = NameFilter::compile(Some(".*")).unwrap();
        let kept = filter.apply(ports(&[Some("fp1"), None]));
        assert_eq!(names(&kept), vec![Some("fp1")]);
    }

    #[test]
    fn test_unnamed_drop_is_logged_at_warn() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(Level::WARN)
            .with_ansi(false)
            .finish();

        let filter = NameFilter::compile(Some("fp")).unwrap();
        let kept = tracing::subscriber::with_default(subscriber, || {
            filter.apply(ports(&[Some("fp1"), None, Some("xe0")]))
        });

        assert_eq!(names(&kept), vec![Some("fp1")]);
        let logs = captured.text();
        assert_eq!(logs.matches("dropping unnamed port").count(), 1);
        assert!(logs.contains("WARN"));
        assert!(logs.contains("id=2"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = NameFilter::compile(Some("eth[")).unwrap_err();
        match err {
            DataSourceError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "eth["),
            other => panic!("unexpected error: {other}"),
        }
    }
}
