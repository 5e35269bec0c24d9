//! Distributed-trace query descriptor

use crate::api::util::query::{InvalidParam, QueryPairs};

pub const DEFAULT_TRACE_LIMIT: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct TraceQuery {
    pub namespace: String,
    pub service: String,
    /// Unix seconds, start of the queried range.
    pub start: Option<i64>,
    /// Unix seconds, end of the queried range.
    pub end: Option<i64>,
    /// Maximum trace entries returned (default 10).
    pub limit: u32,
    /// Relative look-back window, e.g. "30m", "1h", "2d".
    pub loopback: Option<String>,
    pub min_duration: Option<String>,
    pub max_duration: Option<String>,
}

impl TraceQuery {
    pub fn for_service(
        namespace: String,
        service: String,
        pairs: &QueryPairs,
    ) -> Result<Self, InvalidParam> {
        Ok(Self {
            namespace,
            service,
            start: pairs.number("start")?,
            end: pairs.number("end")?,
            limit: pairs.number("limit")?.unwrap_or(DEFAULT_TRACE_LIMIT),
            loopback: pairs.get("loopback").map(str::to_string),
            min_duration: pairs.get("minDuration").map(str::to_string),
            max_duration: pairs.get("maxDuration").map(str::to_string),
        })
    }

    /// Wire parameters for the tracing backend, names unchanged.
    pub fn to_wire(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(s) = self.start {
            params.push(("start", s.to_string()));
        }
        if let Some(e) = self.end {
            params.push(("end", e.to_string()));
        }
        params.push(("limit", self.limit.to_string()));
        if let Some(l) = &self.loopback {
            params.push(("loopback", l.clone()));
        }
        if let Some(d) = &self.max_duration {
            params.push(("maxDuration", d.clone()));
        }
        if let Some(d) = &self.min_duration {
            params.push(("minDuration", d.clone()));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &str) -> QueryPairs {
        QueryPairs::parse(Some(raw))
    }

    #[test]
    fn limit_defaults_to_ten() {
        let q = TraceQuery::for_service("foo".into(), "bar".into(), &pairs("")).unwrap();
        assert_eq!(q.limit, 10);
        assert_eq!(q.to_wire(), vec![("limit", "10".to_string())]);
    }

    #[test]
    fn explicit_limit_wins() {
        let q = TraceQuery::for_service("foo".into(), "bar".into(), &pairs("limit=5")).unwrap();
        assert_eq!(q.limit, 5);

        assert!(TraceQuery::for_service("foo".into(), "bar".into(), &pairs("limit=many")).is_err());
    }

    #[test]
    fn range_and_duration_filters_pass_through() {
        let q = TraceQuery::for_service(
            "foo".into(),
            "bar".into(),
            &pairs("start=1700000000&end=1700003600&loopback=1h&minDuration=10ms&maxDuration=2s"),
        )
        .unwrap();

        assert_eq!(q.start, Some(1700000000));
        assert_eq!(q.end, Some(1700003600));
        assert_eq!(
            q.to_wire(),
            vec![
                ("start", "1700000000".to_string()),
                ("end", "1700003600".to_string()),
                ("limit", "10".to_string()),
                ("loopback", "1h".to_string()),
                ("maxDuration", "2s".to_string()),
                ("minDuration", "10ms".to_string()),
            ]
        );
    }
}
