//! Metrics query descriptor shared by the four metrics endpoints

use crate::api::util::query::{InvalidParam, QueryPairs};

/// Which entity inside the namespace the metrics are scoped to.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricsScope {
    Namespace,
    Service(String),
    App(String),
    Workload(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestProtocol {
    Http,
    Tcp,
}

impl RequestProtocol {
    fn parse(value: &str) -> Result<Self, InvalidParam> {
        match value {
            "http" => Ok(Self::Http),
            "tcp" => Ok(Self::Tcp),
            other => Err(InvalidParam::new("requestProtocol", other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Tcp => "tcp",
        }
    }
}

/// Which side of a call produced the telemetry sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reporter {
    Source,
    Destination,
}

impl Reporter {
    fn parse(value: &str) -> Result<Self, InvalidParam> {
        match value {
            "source" => Ok(Self::Source),
            "destination" => Ok(Self::Destination),
            other => Err(InvalidParam::new("reporter", other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Destination => "destination",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricsQuery {
    pub namespace: String,
    pub scope: MetricsScope,
    /// Metric type filters, e.g. request_count, request_error_count.
    pub filters: Vec<String>,
    /// Unix time to extract metrics from.
    pub query_time: Option<i64>,
    /// Window length in seconds.
    pub duration: Option<i64>,
    /// Sampling step in seconds.
    pub step: Option<i64>,
    /// Rate interval for rate-derived metrics, e.g. "10m".
    pub rate_interval: Option<String>,
    /// Ascending, deduplicated, each in [0, 1].
    pub quantiles: Vec<f64>,
    /// Labels to group series by, e.g. source_workload.
    pub by_labels: Vec<String>,
    pub request_protocol: Option<RequestProtocol>,
    pub reporter: Option<Reporter>,
}

impl MetricsQuery {
    pub fn for_namespace(namespace: String, pairs: &QueryPairs) -> Result<Self, InvalidParam> {
        Self::build(namespace, MetricsScope::Namespace, pairs)
    }

    pub fn for_service(
        namespace: String,
        service: String,
        pairs: &QueryPairs,
    ) -> Result<Self, InvalidParam> {
        Self::build(namespace, MetricsScope::Service(service), pairs)
    }

    pub fn for_app(namespace: String, app: String, pairs: &QueryPairs) -> Result<Self, InvalidParam> {
        Self::build(namespace, MetricsScope::App(app), pairs)
    }

    pub fn for_workload(
        namespace: String,
        workload: String,
        pairs: &QueryPairs,
    ) -> Result<Self, InvalidParam> {
        Self::build(namespace, MetricsScope::Workload(workload), pairs)
    }

    fn build(
        namespace: String,
        scope: MetricsScope,
        pairs: &QueryPairs,
    ) -> Result<Self, InvalidParam> {
        Ok(Self {
            namespace,
            scope,
            filters: pairs.get_all("filters"),
            query_time: pairs.number("queryTime")?,
            duration: pairs.number("duration")?,
            step: pairs.number("step")?,
            rate_interval: pairs.get("rateInterval").map(str::to_string),
            quantiles: parse_quantiles(pairs)?,
            by_labels: pairs.get_all("byLabels"),
            request_protocol: pairs.get("requestProtocol").map(RequestProtocol::parse).transpose()?,
            reporter: pairs.get("reporter").map(Reporter::parse).transpose()?,
        })
    }

    /// Wire parameters for the telemetry backend, names unchanged.
    pub fn to_wire(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        for f in &self.filters {
            params.push(("filters[]", f.clone()));
        }
        if let Some(t) = self.query_time {
            params.push(("queryTime", t.to_string()));
        }
        if let Some(d) = self.duration {
            params.push(("duration", d.to_string()));
        }
        if let Some(s) = self.step {
            params.push(("step", s.to_string()));
        }
        if let Some(r) = &self.rate_interval {
            params.push(("rateInterval", r.clone()));
        }
        for q in &self.quantiles {
            params.push(("quantiles[]", q.to_string()));
        }
        for l in &self.by_labels {
            params.push(("byLabels[]", l.clone()));
        }
        if let Some(p) = self.request_protocol {
            params.push(("requestProtocol", p.as_str().to_string()));
        }
        if let Some(r) = self.reporter {
            params.push(("reporter", r.as_str().to_string()));
        }

        params
    }
}

/// Quantiles form an ordered set: ascending, deduplicated, each in [0, 1].
fn parse_quantiles(pairs: &QueryPairs) -> Result<Vec<f64>, InvalidParam> {
    let mut out = Vec::new();

    for raw in pairs.get_all("quantiles") {
        let q: f64 = raw.parse().map_err(|_| InvalidParam::new("quantiles", &raw))?;
        if !(0.0..=1.0).contains(&q) {
            return Err(InvalidParam::new("quantiles", &raw));
        }
        out.push(q);
    }

    out.sort_by(f64::total_cmp);
    out.dedup();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &str) -> QueryPairs {
        QueryPairs::parse(Some(raw))
    }

    #[test]
    fn service_scope_with_duration_and_step() {
        let q = MetricsQuery::for_service(
            "foo".into(),
            "bar".into(),
            &pairs("duration=60&step=15"),
        )
        .unwrap();

        assert_eq!(q.namespace, "foo");
        assert_eq!(q.scope, MetricsScope::Service("bar".into()));
        assert_eq!(q.duration, Some(60));
        assert_eq!(q.step, Some(15));
        assert_eq!(q.query_time, None);
        assert!(q.filters.is_empty());
    }

    #[test]
    fn absent_optionals_stay_absent() {
        let q = MetricsQuery::for_namespace("foo".into(), &pairs("")).unwrap();
        assert_eq!(q.rate_interval, None);
        assert_eq!(q.request_protocol, None);
        assert_eq!(q.reporter, None);
        assert!(q.to_wire().is_empty());
    }

    #[test]
    fn quantiles_are_an_ordered_set() {
        let q = MetricsQuery::for_app(
            "foo".into(),
            "reviews".into(),
            &pairs("quantiles[]=0.99&quantiles[]=0.5&quantiles[]=0.99"),
        )
        .unwrap();
        assert_eq!(q.quantiles, vec![0.5, 0.99]);
    }

    #[test]
    fn quantile_out_of_range_is_rejected() {
        assert!(MetricsQuery::for_namespace("foo".into(), &pairs("quantiles[]=1.5")).is_err());
        assert!(MetricsQuery::for_namespace("foo".into(), &pairs("quantiles[]=-0.1")).is_err());
    }

    #[test]
    fn protocol_and_reporter_are_validated() {
        let q = MetricsQuery::for_workload(
            "foo".into(),
            "details-v1".into(),
            &pairs("requestProtocol=tcp&reporter=destination"),
        )
        .unwrap();
        assert_eq!(q.request_protocol, Some(RequestProtocol::Tcp));
        assert_eq!(q.reporter, Some(Reporter::Destination));

        assert!(MetricsQuery::for_namespace("foo".into(), &pairs("requestProtocol=grpc")).is_err());
        assert!(MetricsQuery::for_namespace("foo".into(), &pairs("reporter=proxy")).is_err());
    }

    #[test]
    fn wire_round_trip_preserves_names_and_values() {
        let q = MetricsQuery::for_service(
            "foo".into(),
            "bar".into(),
            &pairs(
                "filters[]=request_count&filters[]=request_duration&queryTime=1700000000\
                 &rateInterval=5m&byLabels[]=source_workload&requestProtocol=http&reporter=source",
            ),
        )
        .unwrap();

        assert_eq!(
            q.to_wire(),
            vec![
                ("filters[]", "request_count".to_string()),
                ("filters[]", "request_duration".to_string()),
                ("queryTime", "1700000000".to_string()),
                ("rateInterval", "5m".to_string()),
                ("byLabels[]", "source_workload".to_string()),
                ("requestProtocol", "http".to_string()),
                ("reporter", "source".to_string()),
            ]
        );
    }
}
