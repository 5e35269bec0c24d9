//! Health query descriptor

use crate::api::util::query::{InvalidParam, QueryPairs};

pub const DEFAULT_RATE_INTERVAL: &str = "10m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthKind {
    App,
    Service,
    Workload,
}

impl HealthKind {
    fn parse(value: &str) -> Result<Self, InvalidParam> {
        match value {
            "app" => Ok(Self::App),
            "service" => Ok(Self::Service),
            "workload" => Ok(Self::Workload),
            other => Err(InvalidParam::new("type", other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Service => "service",
            Self::Workload => "workload",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HealthQuery {
    pub namespace: String,
    pub kind: HealthKind,
    /// Entity name on the scoped endpoints; None for namespace-wide health.
    pub target: Option<String>,
    /// Window for error-rate computation, always present (default "10m").
    pub rate_interval: String,
    pub query_time: Option<i64>,
}

impl HealthQuery {
    /// Namespace-wide health; the kind comes from the `type` parameter and
    /// defaults to "app".
    pub fn for_namespace(namespace: String, pairs: &QueryPairs) -> Result<Self, InvalidParam> {
        let kind = match pairs.get("type") {
            Some(v) => HealthKind::parse(v)?,
            None => HealthKind::App,
        };
        Self::build(namespace, kind, None, pairs)
    }

    pub fn for_service(
        namespace: String,
        service: String,
        pairs: &QueryPairs,
    ) -> Result<Self, InvalidParam> {
        Self::build(namespace, HealthKind::Service, Some(service), pairs)
    }

    pub fn for_app(namespace: String, app: String, pairs: &QueryPairs) -> Result<Self, InvalidParam> {
        Self::build(namespace, HealthKind::App, Some(app), pairs)
    }

    pub fn for_workload(
        namespace: String,
        workload: String,
        pairs: &QueryPairs,
    ) -> Result<Self, InvalidParam> {
        Self::build(namespace, HealthKind::Workload, Some(workload), pairs)
    }

    fn build(
        namespace: String,
        kind: HealthKind,
        target: Option<String>,
        pairs: &QueryPairs,
    ) -> Result<Self, InvalidParam> {
        Ok(Self {
            namespace,
            kind,
            target,
            rate_interval: pairs
                .get("rateInterval")
                .unwrap_or(DEFAULT_RATE_INTERVAL)
                .to_string(),
            query_time: pairs.number("queryTime")?,
        })
    }

    /// Wire parameters for the telemetry backend, names unchanged.
    pub fn to_wire(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("rateInterval", self.rate_interval.clone())];

        if self.target.is_none() {
            params.push(("type", self.kind.as_str().to_string()));
        }
        if let Some(t) = self.query_time {
            params.push(("queryTime", t.to_string()));
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
    fn namespace_health_defaults() {
        let q = HealthQuery::for_namespace("foo".into(), &pairs("")).unwrap();
        assert_eq!(q.namespace, "foo");
        assert_eq!(q.kind, HealthKind::App);
        assert_eq!(q.target, None);
        assert_eq!(q.rate_interval, "10m");
        assert_eq!(q.query_time, None);
    }

    #[test]
    fn namespace_health_explicit_type_and_interval() {
        let q = HealthQuery::for_namespace("foo".into(), &pairs("type=workload&rateInterval=5m"))
            .unwrap();
        assert_eq!(q.kind, HealthKind::Workload);
        assert_eq!(q.rate_interval, "5m");

        assert!(HealthQuery::for_namespace("foo".into(), &pairs("type=pod")).is_err());
    }

    #[test]
    fn scoped_health_fixes_the_kind() {
        let q = HealthQuery::for_service("foo".into(), "bar".into(), &pairs("queryTime=1700000000"))
            .unwrap();
        assert_eq!(q.kind, HealthKind::Service);
        assert_eq!(q.target.as_deref(), Some("bar"));
        assert_eq!(q.query_time, Some(1700000000));
        assert_eq!(q.rate_interval, "10m");
    }

    #[test]
    fn wire_carries_type_only_for_namespace_health() {
        let ns = HealthQuery::for_namespace("foo".into(), &pairs("")).unwrap();
        assert!(ns.to_wire().contains(&("type", "app".to_string())));

        let app = HealthQuery::for_app("foo".into(), "reviews".into(), &pairs("")).unwrap();
        assert_eq!(app.to_wire(), vec![("rateInterval", "10m".to_string())]);
    }
}
